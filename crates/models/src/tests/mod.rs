/// CRUD operations against a live database
pub mod crud_tests;
