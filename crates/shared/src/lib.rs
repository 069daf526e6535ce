//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod dpi;
mod error;
mod point;

pub use dpi::Dpi;
pub use error::DpiError;
pub use point::Point;
