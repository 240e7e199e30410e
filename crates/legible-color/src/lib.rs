// SPDX-License-Identifier: MIT
//
// legible-color — the sRGB color model underneath legible.
//
// Everything the contrast engine needs to know about a color lives here:
// normalized RGBA channels, Porter-Duff "source over" compositing against an
// opaque backdrop, and WCAG relative luminance. No contrast policy, no
// thresholds. Those belong to the `legible` crate.

pub mod color;

pub use color::{Color, ParseColorError, srgb_to_linear};
