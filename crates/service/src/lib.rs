//! Service layer providing the catalog operations on top of `models`.
//! - Separates business rules (validation, not-found policy) from data access.
//! - Storage is pluggable through `product::ProductRepository`.
//! - Errors are classified by kind in `errors::ServiceError`.

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test_support;
