//! Field formatters for the pretty access line.
//!
//! Every function here is pure and total over its input type: the composer
//! feeds one `LogEvent` field into one formatter and concatenates the results.

mod bytes;
mod color;
mod fit;
mod path;
mod status;


pub use bytes::*;
pub use color::*;
pub use fit::*;
pub use path::*;
pub use status::*;
