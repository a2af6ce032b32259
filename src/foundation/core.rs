pub use kurbo::{Point, Rect};

/// RGBA8 colour with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Create a colour from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque colour.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// `#rrggbb` form used in SVG paint attributes. Alpha is not encoded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill colours for each part of the book icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Background square or circle.
    pub background: Rgba8,
    /// Book cover.
    pub book: Rgba8,
    /// Spine highlight along the left edge of the cover.
    pub spine: Rgba8,
    /// Page lines near the right edge.
    pub pages: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::opaque(76, 175, 80),
            book: Rgba8::opaque(255, 255, 255),
            spine: Rgba8::opaque(230, 230, 230),
            pages: Rgba8::opaque(200, 200, 200),
        }
    }
}
