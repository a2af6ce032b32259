use crate::{
    foundation::core::Palette,
    foundation::error::{IconError, IconResult},
    layout::IconLayout,
};

#[cfg(feature = "raster")]
pub(crate) mod raster;
pub(crate) mod svg;

/// A renderer that turns an [`IconLayout`] into the bytes of one output file.
pub trait IconBackend {
    /// Which backend this is.
    fn kind(&self) -> BackendKind;

    /// File extension of the produced bytes, without the dot.
    fn extension(&self) -> &'static str {
        self.kind().extension()
    }

    /// Draw `layout` with `palette` and return the encoded file contents.
    fn render(&mut self, layout: &IconLayout, palette: &Palette) -> IconResult<Vec<u8>>;
}

/// Available backend kinds.
///
/// - `Raster` needs the `raster` feature (`vello_cpu` + `image`).
/// - `Vector` is always available and writes SVG markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// PNG output rasterized with `vello_cpu`.
    Raster,
    /// SVG output, no imaging library required.
    Vector,
}

impl BackendKind {
    /// Whether this backend was compiled into the current build.
    pub fn is_available(self) -> bool {
        match self {
            Self::Raster => cfg!(feature = "raster"),
            Self::Vector => true,
        }
    }

    /// Raster when the imaging stack is present, otherwise the vector fallback.
    pub fn detect() -> Self {
        if Self::Raster.is_available() {
            Self::Raster
        } else {
            Self::Vector
        }
    }

    /// Output file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Raster => "png",
            Self::Vector => "svg",
        }
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Raster => "raster",
            Self::Vector => "vector",
        }
    }
}

/// Create a rendering backend implementation.
pub fn create_backend(kind: BackendKind) -> IconResult<Box<dyn IconBackend>> {
    match kind {
        #[cfg(feature = "raster")]
        BackendKind::Raster => Ok(Box::new(raster::RasterBackend::new())),
        #[cfg(not(feature = "raster"))]
        BackendKind::Raster => Err(IconError::unavailable(
            "raster backend not compiled in (enable the `raster` feature)",
        )),
        BackendKind::Vector => Ok(Box::new(svg::SvgBackend::new())),
    }
}

pub(crate) fn check_layout(layout: &IconLayout) -> IconResult<()> {
    if layout.size() == 0 {
        return Err(IconError::render("cannot render a 0x0 icon"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_is_always_available() {
        assert!(BackendKind::Vector.is_available());
        let backend = create_backend(BackendKind::Vector).unwrap();
        assert_eq!(backend.kind(), BackendKind::Vector);
        assert_eq!(backend.extension(), "svg");
    }

    #[test]
    fn detect_matches_compiled_features() {
        let expected = if cfg!(feature = "raster") {
            BackendKind::Raster
        } else {
            BackendKind::Vector
        };
        assert_eq!(BackendKind::detect(), expected);
    }

    #[cfg(not(feature = "raster"))]
    #[test]
    fn raster_without_feature_is_unavailable() {
        let err = create_backend(BackendKind::Raster).err().unwrap();
        assert!(matches!(err, IconError::Unavailable(_)));
    }

    #[cfg(feature = "raster")]
    #[test]
    fn raster_extension_is_png() {
        let backend = create_backend(BackendKind::Raster).unwrap();
        assert_eq!(backend.extension(), "png");
    }
}
