//! Strongly-typed catalog model.
//!
//! Spreadsheet rows are converted once, at load time, into [`Product`]
//! records with named text fields and typed [`Features`]. Everything after
//! loading works on these types instead of string-keyed cell lookups.

mod catalog;
mod category;
mod features;
mod index;
mod product;

pub use catalog::*;
pub use category::*;
pub use features::*;
pub use index::*;
pub use product::*;
