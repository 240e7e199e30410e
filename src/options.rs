//! Contrast options and the WCAG threshold table.
//!
//! | level | normal text | large text |
//! |-------|-------------|------------|
//! | AA    | 4.5:1       | 3.0:1      |
//! | AAA   | 7.0:1       | 4.5:1      |

use crate::font::{FontDescriptor, is_large_font};

bitflags::bitflags! {
    /// Independent switches that tune threshold and tie-breaking.
    ///
    /// The empty set means: level AA, normal-size text, and darker text
    /// when black and white would both work.
    ///
    /// ```
    /// use legible::Options;
    ///
    /// let opts = Options::LARGE_FONT | Options::PREFER_LIGHTER;
    /// assert!(opts.contains(Options::LARGE_FONT));
    /// assert!(!opts.contains(Options::ENHANCED_CONTRAST));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Options: u8 {
        /// Among passing colors, pick the one with the highest luminance.
        const PREFER_LIGHTER    = 1 << 0;
        /// Among passing colors, pick the one with the lowest luminance.
        const PREFER_DARKER     = 1 << 1;
        /// Text qualifies as "large" and gets the relaxed threshold.
        const LARGE_FONT        = 1 << 2;
        /// Hold text to level AAA instead of AA.
        const ENHANCED_CONTRAST = 1 << 3;
    }
}

impl Options {
    /// Options with [`LARGE_FONT`](Self::LARGE_FONT) set when `font` is
    /// large for contrast purposes.
    #[must_use]
    pub fn for_font(font: Option<&FontDescriptor>) -> Self {
        if is_large_font(font) {
            Self::LARGE_FONT
        } else {
            Self::empty()
        }
    }

    /// The standard these options hold text to.
    #[inline]
    #[must_use]
    pub const fn standard(self) -> ContrastStandard {
        ContrastStandard::from_options(self)
    }
}

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContrastLevel {
    Aa,
    Aaa,
}

/// Font size class for contrast purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextSize {
    Normal,
    Large,
}

/// A level paired with a size class; one cell of the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastStandard {
    pub level: ContrastLevel,
    pub size: TextSize,
}

impl ContrastStandard {
    pub const AA_NORMAL: Self = Self::new(ContrastLevel::Aa, TextSize::Normal);
    pub const AA_LARGE: Self = Self::new(ContrastLevel::Aa, TextSize::Large);
    pub const AAA_NORMAL: Self = Self::new(ContrastLevel::Aaa, TextSize::Normal);
    pub const AAA_LARGE: Self = Self::new(ContrastLevel::Aaa, TextSize::Large);

    /// Every standard, strictest-last within each level.
    pub const ALL: [Self; 4] = [
        Self::AA_LARGE,
        Self::AA_NORMAL,
        Self::AAA_LARGE,
        Self::AAA_NORMAL,
    ];

    #[inline]
    #[must_use]
    pub const fn new(level: ContrastLevel, size: TextSize) -> Self {
        Self { level, size }
    }

    /// Read level and size out of an [`Options`] set.
    #[must_use]
    pub const fn from_options(options: Options) -> Self {
        let level = if options.contains(Options::ENHANCED_CONTRAST) {
            ContrastLevel::Aaa
        } else {
            ContrastLevel::Aa
        };
        let size = if options.contains(Options::LARGE_FONT) {
            TextSize::Large
        } else {
            TextSize::Normal
        };
        Self::new(level, size)
    }

    /// Minimum contrast ratio this standard requires.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match (self.level, self.size) {
            (ContrastLevel::Aa, TextSize::Normal) | (ContrastLevel::Aaa, TextSize::Large) => 4.5,
            (ContrastLevel::Aa, TextSize::Large) => 3.0,
            (ContrastLevel::Aaa, TextSize::Normal) => 7.0,
        }
    }
}

impl Default for ContrastStandard {
    fn default() -> Self {
        Self::AA_NORMAL
    }
}

/// Minimum contrast ratio required under `options`.
#[must_use]
pub const fn minimum_threshold(options: Options) -> f64 {
    ContrastStandard::from_options(options).threshold()
}
