//! # Configuration Module
//!
//! - [`constants`]: encoding and calendar constants, with compile-time checks
//!   on every derived value
//! - [`text`]: [`TextOptions`], the runtime knobs of the text field adapters

pub mod constants;
mod text;

pub use constants::*;
pub use text::{ErrorPolicy, TextOptions, TextOptionsBuilder};
