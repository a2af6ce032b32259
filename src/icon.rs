/// Directory the binary writes into when no `--out-dir` is given.
pub const DEFAULT_OUT_DIR: &str = "assets/icons";

/// Pixel sizes produced by [`standard_set`].
pub const STANDARD_SIZES: [u32; 2] = [192, 512];

/// Icon variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Rounded-square background, book fills most of the canvas.
    Standard,
    /// Circular background with a wider safe zone around the book.
    Maskable,
}

/// One icon to generate: a square size plus its variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconSpec {
    /// Width and height in pixels.
    pub size: u32,
    /// Variant.
    pub kind: IconKind,
}

impl IconSpec {
    /// Standard icon of `size` pixels.
    pub const fn standard(size: u32) -> Self {
        Self {
            size,
            kind: IconKind::Standard,
        }
    }

    /// Maskable icon of `size` pixels.
    pub const fn maskable(size: u32) -> Self {
        Self {
            size,
            kind: IconKind::Maskable,
        }
    }

    /// Whether this spec asks for the maskable variant.
    pub fn is_maskable(self) -> bool {
        self.kind == IconKind::Maskable
    }

    /// File name without extension, e.g. `icon-maskable-192x192`.
    pub fn file_stem(self) -> String {
        let s = self.size;
        match self.kind {
            IconKind::Standard => format!("icon-{s}x{s}"),
            IconKind::Maskable => format!("icon-maskable-{s}x{s}"),
        }
    }

    /// File name with `ext` appended.
    pub fn file_name(self, ext: &str) -> String {
        format!("{}.{ext}", self.file_stem())
    }
}

/// The fixed set of icons, in generation order: standard sizes first, then maskable.
pub fn standard_set() -> Vec<IconSpec> {
    STANDARD_SIZES
        .iter()
        .map(|&s| IconSpec::standard(s))
        .chain(STANDARD_SIZES.iter().map(|&s| IconSpec::maskable(s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_manifest_convention() {
        assert_eq!(IconSpec::standard(192).file_name("png"), "icon-192x192.png");
        assert_eq!(
            IconSpec::maskable(512).file_name("svg"),
            "icon-maskable-512x512.svg"
        );
    }

    #[test]
    fn standard_set_order_is_fixed() {
        let names: Vec<String> = standard_set().iter().map(|s| s.file_stem()).collect();
        assert_eq!(
            standard_set().iter().filter(|s| s.is_maskable()).count(),
            2
        );
        assert_eq!(
            names,
            [
                "icon-192x192",
                "icon-512x512",
                "icon-maskable-192x192",
                "icon-maskable-512x512",
            ]
        );
    }
}
