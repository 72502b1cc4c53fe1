//! Movie catalog domain shared across Reel crates.
//!
//! Provides the record type, the in-memory catalog with its positional-id
//! semantics, and the payload validation rules the HTTP surface exposes.

pub mod catalog;
pub mod movie;

pub use catalog::{parse_movie_index, Catalog, CatalogError};
pub use movie::MovieRecord;
