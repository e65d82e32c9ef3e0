//! Helper functions
//!
//! Date parsing and formatting plus URL joining shared by the content
//! layer and the outer surfaces.

mod date;
mod url;

pub use date::*;
pub use url::*;
