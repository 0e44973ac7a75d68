pub mod routes;
pub mod startup;
pub mod errors;
pub mod openapi;
pub mod page;

pub use startup::run;
