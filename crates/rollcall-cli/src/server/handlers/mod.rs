//! API request handlers.

mod check;
mod health;

pub use check::*;
pub use health::*;
