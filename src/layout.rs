//! Drawing coordinates for one book icon.
//!
//! Every value is derived from the icon size and variant alone. Fractions of the size are
//! truncated to whole pixels, so both backends draw on the same integer grid.

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{IconError, IconResult};
use crate::icon::{IconKind, IconSpec};

/// Largest accepted icon size. Bigger canvases are refused rather than allocated.
pub const MAX_SIZE: u32 = 16_384;

/// Stroke width of the page lines, in pixels.
pub const PAGE_STROKE_WIDTH: u32 = 2;

const STANDARD_PADDING: f64 = 0.1;
const MASKABLE_PADDING: f64 = 0.2;
const BACKGROUND_RADIUS: f64 = 0.1;
const BOOK_ASPECT: f64 = 1.3;
const BOOK_RADIUS: f64 = 0.03;
const SPINE_WIDTH: f64 = 0.08;
const PAGE_OFFSET: f64 = 0.93;
const PAGE_SPACING: f64 = 0.1;
const PAGE_LINES: i32 = 3;

/// Background shape behind the book.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    /// Full-canvas square with rounded corners (standard icons).
    RoundedSquare {
        /// Side length, equal to the icon size.
        side: f64,
        /// Corner radius.
        radius: f64,
    },
    /// Circle inscribed in the canvas (maskable icons).
    Circle {
        /// Centre of the canvas.
        center: Point,
        /// Half the icon size.
        radius: f64,
    },
}

/// Book cover rectangle plus its spine strip. The cover may extend past the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookGeometry {
    /// Left edge.
    pub x: i32,
    /// Top edge; negative when the cover is taller than the canvas.
    pub y: i32,
    /// Cover width.
    pub width: i32,
    /// Cover height.
    pub height: i32,
    /// Cover corner radius.
    pub corner_radius: i32,
    /// Width of the spine strip drawn over the cover's left edge.
    pub spine_width: i32,
}

impl BookGeometry {
    /// Cover bounds.
    pub fn cover_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x + self.width),
            f64::from(self.y + self.height),
        )
    }

    /// Spine bounds.
    pub fn spine_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x + self.spine_width),
            f64::from(self.y + self.height),
        )
    }
}

/// Horizontal page line near the cover's right edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLine {
    /// Start x.
    pub x0: i32,
    /// End x (the cover's right edge).
    pub x1: i32,
    /// Vertical position of the line's centre.
    pub y: i32,
}

/// Everything a backend needs to draw one icon.
#[derive(Clone, Debug, PartialEq)]
pub struct IconLayout {
    /// Spec this layout was computed from.
    pub spec: IconSpec,
    /// Safe-zone padding on each side of the book.
    pub padding: i32,
    /// Background shape.
    pub background: Background,
    /// Book cover and spine.
    pub book: BookGeometry,
    /// Page lines, top to bottom. At most three.
    pub pages: Vec<PageLine>,
}

impl IconLayout {
    /// Compute the layout for `spec`.
    pub fn compute(spec: IconSpec) -> IconResult<Self> {
        if spec.size == 0 {
            return Err(IconError::validation("icon size must be > 0"));
        }
        if spec.size > MAX_SIZE {
            return Err(IconError::validation(format!(
                "icon size {} too large (max {MAX_SIZE})",
                spec.size
            )));
        }
        let size = spec.size as i32;

        let padding = match spec.kind {
            IconKind::Standard => frac(size, STANDARD_PADDING),
            IconKind::Maskable => frac(size, MASKABLE_PADDING),
        };

        let side = f64::from(size);
        let background = match spec.kind {
            IconKind::Standard => Background::RoundedSquare {
                side,
                radius: f64::from(frac(size, BACKGROUND_RADIUS)),
            },
            IconKind::Maskable => Background::Circle {
                center: Point::new(side / 2.0, side / 2.0),
                radius: side / 2.0,
            },
        };

        let width = size - padding * 2;
        let height = frac(width, BOOK_ASPECT);
        let book = BookGeometry {
            x: padding,
            y: (size - height).div_euclid(2),
            width,
            height,
            corner_radius: frac(size, BOOK_RADIUS),
            spine_width: frac(width, SPINE_WIDTH),
        };

        let offset = frac(width, PAGE_OFFSET);
        let spacing = frac(height, PAGE_SPACING);
        let limit = book.y + height - spacing;
        let pages = (0..PAGE_LINES)
            .map(|i| book.y + (i + 2) * spacing)
            .filter(|&y| y < limit)
            .map(|y| PageLine {
                x0: book.x + offset,
                x1: book.x + width,
                y,
            })
            .collect();

        Ok(Self {
            spec,
            padding,
            background,
            book,
            pages,
        })
    }

    /// Canvas width and height in pixels.
    pub fn size(&self) -> u32 {
        self.spec.size
    }
}

// `int(v * f)`: scale then truncate toward zero.
fn frac(v: i32, f: f64) -> i32 {
    (f64::from(v) * f) as i32
}
