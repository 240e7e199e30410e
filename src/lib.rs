//! # legible — WCAG 2.0 text contrast for arbitrary backgrounds
//!
//! Given a background (a solid color, or a region of an image) and a few
//! constraints, legible answers three questions:
//!
//! - which of *these* text colors is readable here?
//!   ([`text_color_from_choices`])
//! - how transparent can *this* text color get before it stops being
//!   readable? ([`min_alpha`])
//! - what black or white text, at roughly *this* opacity, should I use?
//!   ([`text_color_on_background`], [`text_color_on_image`])
//!
//! # Architecture
//!
//! ```text
//! legible-color: Color, compositing, relative luminance
//!     │
//!     ▼
//! options.rs:  Options flags → ContrastStandard → threshold (3.0 / 4.5 / 7.0)
//!     │
//!     ▼
//! contrast.rs: contrast ratio, pass/fail
//!     │
//!     ▼
//! alpha.rs:    minimum passing opacity (scan + bisection)
//!     │
//!     ▼
//! select.rs:   choose from candidates, or synthesize black/white
//!     │
//!     ▼
//! sample.rs:   average an image region into a background color
//! ```
//!
//! Every operation is a pure function of its inputs.

pub mod alpha;
pub mod contrast;
pub mod font;
pub mod options;
pub mod sample;
pub mod select;

pub use alpha::{NO_MIN_ALPHA, min_alpha, try_min_alpha};
pub use contrast::{
    ContrastReport, contrast_ratio, contrast_ratio_over, passes_standard, text_color_passes,
};
pub use font::{FontDescriptor, FontWeight, is_large_font};
pub use legible_color::{Color, ParseColorError};
pub use options::{ContrastLevel, ContrastStandard, Options, TextSize, minimum_threshold};
pub use sample::{BackgroundSampler, PixelRect, Region, text_color_on_image};
pub use select::{text_color_from_choices, text_color_on_background};
