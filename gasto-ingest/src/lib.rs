//! gasto-ingest: template catalog, field normalizers and classification of
//! Brazilian bank SMS / push notifications into expense and income records.
//!
//! The engine is pure and synchronous; the catalogs are built once and shared
//! read-only, so every function here is safe to call from any thread.

pub mod amount;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod merchant;
pub mod parsers;
pub mod timestamp;

pub use amount::parse_amount;
pub use catalog::{Catalog, CatalogBuilder, Envelope, Extractor, Template};
pub use classify::{INCOME_MARKER, Route, classify, classify_expense, classify_income, route};
pub use error::{FieldError, TemplateError};
pub use merchant::{LOCALITY_SUFFIXES, clean_merchant};
pub use parsers::{expense_catalog, income_catalog};
pub use timestamp::parse_timestamp;
