// SPDX-License-Identifier: MIT
//
// legible color model — straight-alpha sRGB with WCAG luminance.
//
// Single-character variable names (r, g, b, a, c) are the standard
// convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Channels are stored as normalized fractions in [0, 1]. Nothing here
// validates that range: callers own their inputs, and out-of-range values
// simply produce out-of-range math.
//
// Compositing happens channel-wise in gamma-encoded sRGB, which is what the
// platform text renderers do when they draw translucent glyphs over a fill.
// Luminance is then measured on the composited, opaque result.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// WCAG 2.0 linearization knee. (sRGB proper uses 0.04045; the two differ
/// only for 8-bit values that do not exist.)
const LINEAR_KNEE: f64 = 0.039_28;

/// Channel tolerance for equality comparisons.
const EPS: f64 = 1e-6;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with straight (non-premultiplied) alpha.
///
/// # Examples
///
/// ```
/// use legible_color::Color;
///
/// let ink = Color::rgb8(0x33, 0x33, 0x33);
/// let paper = Color::WHITE;
///
/// // What 60% ink actually looks like on paper.
/// let apparent = ink.with_alpha(0.6).composite_over(paper);
/// assert!(apparent.is_opaque());
/// assert!(apparent.relative_luminance() > ink.relative_luminance());
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red, 0.0 to 1.0.
    pub r: f64,
    /// Green, 0.0 to 1.0.
    pub g: f64,
    /// Blue, 0.0 to 1.0.
    pub b: f64,
    /// Opacity: 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from normalized sRGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create a color from normalized sRGB channels and alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Create a color from 8-bit channels including alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            alpha: f64::from(a) / 255.0,
        }
    }

    /// A neutral grey: `level` 0.0 is black, 1.0 is white.
    ///
    /// `Color::white(0.0, 0.54)` is the classic "54% black" secondary text.
    #[inline]
    #[must_use]
    pub const fn white(level: f64, alpha: f64) -> Self {
        Self::rgba(level, level, level, alpha)
    }

    /// Parse a hex color.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, with or without `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] for a bad length or a non-hex digit.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// The same RGB channels at full opacity.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether the RGB channels match `other`, ignoring alpha.
    #[must_use]
    pub fn same_rgb(self, other: Self) -> bool {
        (self.r - other.r).abs() < EPS
            && (self.g - other.g).abs() < EPS
            && (self.b - other.b).abs() < EPS
    }

    // ─── Compositing ─────────────────────────────────────────────────────

    /// Composite this color over an opaque `background`.
    ///
    /// Channel-wise `out = fg * a + bg * (1 - a)`. The result is always
    /// opaque; any alpha on `background` is ignored.
    #[must_use]
    pub fn composite_over(self, background: Self) -> Self {
        let a = self.alpha;
        let inv = 1.0 - a;
        Self::rgb(
            self.r.mul_add(a, background.r * inv),
            self.g.mul_add(a, background.g * inv),
            self.b.mul_add(a, background.b * inv),
        )
    }

    // ─── Luminance ───────────────────────────────────────────────────────

    /// WCAG relative luminance of the RGB channels, in [0.0, 1.0].
    ///
    ///   L = 0.2126 * R' + 0.7152 * G' + 0.0722 * B'
    ///
    /// Alpha is not consulted. Composite translucent colors first.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Convert to 8-bit RGBA with rounding (channels clamped first).
    #[must_use]
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.alpha))
    }

    /// Hex string: `#rrggbb`, or `#rrggbbaa` when translucent.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::rgb({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({:.4}, {:.4}, {:.4}, {:.3})",
                self.r, self.g, self.b, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.same_rgb(*other) && (self.alpha - other.alpha).abs() < EPS
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

// ─── Gamma ───────────────────────────────────────────────────────────────────

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= LINEAR_KNEE {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Digit count (after any `#`) was not 3, 4, 6 or 8.
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let nibbles = digits
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            digit
                .to_digit(16)
                .and_then(|n| u8::try_from(n).ok())
                .ok_or(ParseColorError::InvalidDigit { digit, position })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match *nibbles.as_slice() {
        // #RGB
        [r, g, b] => Ok(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b)),
        // #RGBA
        [r, g, b, a] => Ok(Color::rgba8(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)),
        // #RRGGBB
        [r1, r0, g1, g0, b1, b0] => Ok(Color::rgb8(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
        // #RRGGBBAA
        [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Color::rgba8(
            r1 << 4 | r0,
            g1 << 4 | g0,
            b1 << 4 | b0,
            a1 << 4 | a0,
        )),
        _ => Err(ParseColorError::InvalidLength(nibbles.len())),
    }
}

/// Convert a fraction (0.0–1.0) to a byte (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
