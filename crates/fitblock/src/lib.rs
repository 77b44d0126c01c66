//! # fitblock
//!
//! A self-fitting text block: truncation reporting and automatic font size
//! fitting for text hosted in a GUI toolkit.
//!
//! This crate provides the fitting and trim-detection logic with zero
//! dependencies on any specific text engine or windowing stack. Text
//! measurement is handled by separate backend crates like `fitblock-cosmic`
//! through the [`TextMeasurer`] trait; the host forwards its text-changed
//! and size-changed notifications to [`TextBlock`].

mod block;
mod color;
mod fit;
mod measure;
mod state;
mod style;
mod trim;

#[cfg(test)]
mod test_util;

pub use block::*;
pub use color::*;
pub use fit::*;
pub use measure::*;
pub use state::*;
pub use style::*;
pub use trim::*;
