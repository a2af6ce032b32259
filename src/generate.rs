use std::path::{Path, PathBuf};

use crate::{
    foundation::core::Palette,
    foundation::error::{IconError, IconResult},
    icon::{DEFAULT_OUT_DIR, IconSpec, standard_set},
    layout::IconLayout,
    render::IconBackend,
};

/// Options for [`generate_icons`].
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    /// Directory the icons are written into. Created (with parents) if absent.
    pub out_dir: PathBuf,
    /// Icons to produce, in order.
    pub specs: Vec<IconSpec>,
    /// Colours used by every icon.
    pub palette: Palette,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            specs: standard_set(),
            palette: Palette::default(),
        }
    }
}

impl GenerateOpts {
    /// Default set and palette, written into `out_dir`.
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }
}

/// Record of one file written by [`generate_icons`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Spec the file was rendered from.
    pub spec: IconSpec,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Size of the written file in bytes.
    pub bytes: usize,
}

impl GeneratedIcon {
    /// File name component of [`GeneratedIcon::path`].
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Render every spec in `opts` with `backend` and write the results to `opts.out_dir`.
///
/// Existing files are overwritten. The first failure aborts the run; files written before it are
/// left in place.
#[tracing::instrument(
    skip(opts, backend),
    fields(out_dir = %opts.out_dir.display(), backend = backend.kind().name())
)]
pub fn generate_icons(
    opts: &GenerateOpts,
    backend: &mut dyn IconBackend,
) -> IconResult<Vec<GeneratedIcon>> {
    ensure_dir(&opts.out_dir)?;

    let ext = backend.extension();
    let mut out = Vec::with_capacity(opts.specs.len());
    for &spec in &opts.specs {
        let layout = IconLayout::compute(spec)?;
        let bytes = backend.render(&layout, &opts.palette)?;

        let path = opts.out_dir.join(spec.file_name(ext));
        std::fs::write(&path, &bytes).map_err(|e| IconError::io(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote icon");

        out.push(GeneratedIcon {
            spec,
            path,
            bytes: bytes.len(),
        });
    }

    tracing::info!(count = out.len(), "icons generated");
    Ok(out)
}

fn ensure_dir(dir: &Path) -> IconResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| IconError::io(dir, e))
}
