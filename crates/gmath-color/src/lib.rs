//! # gmath-color
//!
//! RGBA colors with unsigned integer channels.
//!
//! [`Color<T>`] works with `u8`, `u16`, `u32` and `u64` channels through the
//! [`Channel`](gmath_core::Channel) trait:
//!
//! - `0xRRGGBBAA` hex packing scaled to the channel width
//! - Normalized `f32`/`f64` views computed 4-wide with [`wide`]
//! - Saturating per-channel arithmetic
//! - Grayscale conversion and intensity comparison
//!
//! # Usage
//!
//! ```rust
//! use gmath_color::{Color8, Color16};
//!
//! let orange = Color8::from_hex(0xFF8000FF);
//! let deep = Color16::from_hex(orange.get_hex());
//! assert_eq!(deep.g(), 0x80 * 257);
//! assert_eq!(orange.to_string(), "color(255, 128, 0, 255)");
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - Serialize colors as `[r, g, b, a]`
//!
//! # Dependencies
//!
//! - [`gmath_core`] - Channel trait, lerp, random generator
//! - [`gmath_linalg`] - Vector results of [`Color::normalized`]
//! - [`wide`] - 4-wide channel normalization

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;

pub use color::*;
