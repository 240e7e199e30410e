//! "Large text" classification.
//!
//! WCAG relaxes the contrast threshold for large text: at least 18pt, or at
//! least 14pt when bold. Semibold counts as bold, matching how platform font
//! APIs report the bold trait.

/// Point size at which any weight is large.
pub const LARGE_TEXT_POINT_SIZE: f64 = 18.0;

/// Point size at which bold text is large.
pub const LARGE_BOLD_TEXT_POINT_SIZE: f64 = 14.0;

/// Font weight classes, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    /// Semibold and everything heavier.
    #[inline]
    #[must_use]
    pub fn is_bold(self) -> bool {
        self >= Self::Semibold
    }
}

/// The two font facts contrast rules care about.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDescriptor {
    pub point_size: f64,
    pub weight: FontWeight,
}

impl FontDescriptor {
    #[must_use]
    pub const fn with_weight(point_size: f64, weight: FontWeight) -> Self {
        Self { point_size, weight }
    }

    #[must_use]
    pub const fn regular(point_size: f64) -> Self {
        Self::with_weight(point_size, FontWeight::Regular)
    }

    #[must_use]
    pub const fn bold(point_size: f64) -> Self {
        Self::with_weight(point_size, FontWeight::Bold)
    }

    #[inline]
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }
}

/// Whether `font` qualifies for the large-text threshold.
///
/// An absent font is never large.
#[must_use]
pub fn is_large_font(font: Option<&FontDescriptor>) -> bool {
    font.is_some_and(|font| {
        font.point_size >= LARGE_TEXT_POINT_SIZE
            || (font.is_bold() && font.point_size >= LARGE_BOLD_TEXT_POINT_SIZE)
    })
}
