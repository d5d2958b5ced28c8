//! # Chromatch
//!
//! Chromatch models colors as small immutable integer values in three
//! interconvertible coordinate systems and resolves arbitrary colors to the
//! closest member of a named palette.
//!
//!
//! ## 1. Overview
//!
//! Chromatch's main abstractions are:
//!
//!   * [`RgbColor`], [`HsvColor`], and [`HslColor`] implement the **color
//!     value types**. Construction validates every component: RGB channels
//!     must fit into `0..=255` and percentages into `0..=100`, whereas hues
//!     wrap around into `0..360`. Each type converts to the other two, with
//!     derived coordinates computed once per instance and cached.
//!   * [`DistanceMetric`] selects the **similarity score** for nearest-match
//!     lookups, either the channel-wise Manhattan distance (the default) or
//!     the perceptual CMC l:c (2:1) difference over CIE Lab.
//!   * [`ColorGroup`] implements **named palettes** as ordered sequences of
//!     name and color pairs, looked up exactly by name or value or tolerantly
//!     through [`closest`](ColorGroup::closest).
//!   * [`LookupCache`] provides the **bounded memoization** backing repeated
//!     nearest-match lookups, with least-recently-used eviction.
//!
//! The palette tables themselves, from the 16 HTML colors to the 256-entry
//! indexed terminal palette, live in the companion `chromatch-palettes`
//! crate; this crate contains the model and the algorithms only.
//!
//!
//! ## 2. From Value to Name
//!
//! Parse a color, convert it between coordinate systems, and resolve it
//! against a palette:
//!
//! ```
//! use chromatch::{rgb, ColorGroup, RgbColor};
//!
//! let color = RgbColor::from_hex("#40C060")?;
//! let hsv = color.to_hsv();
//! assert_eq!((hsv.hue(), hsv.saturation(), hsv.value()), (135, 66, 75));
//!
//! let palette = ColorGroup::new(
//!     "basic",
//!     [
//!         ("Red", rgb!(255, 0, 0)),
//!         ("Green", rgb!(0, 128, 0)),
//!         ("Blue", rgb!(0, 0, 255)),
//!     ],
//! );
//! assert_eq!(palette.closest(&color)?.name(), "Green");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cache;
mod core;
pub mod error;
mod group;
mod model;

pub use cache::LookupCache;
pub use core::DistanceMetric;
pub use group::{ColorGroup, Member, Members};
pub use model::{HslColor, HsvColor, RgbColor};
