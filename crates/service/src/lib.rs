//! Service layer providing the bookstore business operations on top of models.
//! - Separates business logic from the HTTP adapter.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod catalog;
pub mod users;
