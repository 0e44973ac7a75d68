//! Product catalog: input shape, storage backends, and the five catalog operations.

pub mod domain;
pub mod repository;
pub mod memory;
pub mod service;

pub use domain::{PictureList, ProductInput};
pub use memory::InMemoryProductRepository;
pub use repository::{ProductRepository, SeaOrmProductRepository};
pub use service::{parse_id, ProductService};
