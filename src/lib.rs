//! Placeholder PWA icon generator.
//!
//! Draws a book on a green background, as a rounded square (standard) or a circle with a wider
//! safe zone (maskable). Output is PNG when the `raster` feature is enabled and SVG otherwise.
//!
//! - Pick a backend with [`BackendKind::detect`] and [`create_backend`]
//! - Call [`generate_icons`] with [`GenerateOpts`]
#![forbid(unsafe_code)]

mod foundation;

/// Writes the icon set to disk.
pub mod generate;
/// Icon variants and file naming.
pub mod icon;
/// Size-derived drawing coordinates.
pub mod layout;
/// Raster and vector backends.
pub mod render;

pub use crate::foundation::core::{Palette, Point, Rect, Rgba8};
pub use crate::foundation::error::{IconError, IconResult};

pub use crate::generate::{GenerateOpts, GeneratedIcon, generate_icons};
pub use crate::icon::{DEFAULT_OUT_DIR, IconKind, IconSpec, standard_set};
pub use crate::layout::IconLayout;
pub use crate::render::{BackendKind, IconBackend, create_backend};
