//! Catalog models
//!
//! Read-only reference data supplied by the catalog collaborator. The
//! checkout core trusts these values as given and never mutates them.

mod category;
mod modifier;
mod product;

pub use category::Category;
pub use modifier::Modifier;
pub use product::Product;
