//! Concrete repository implementations.

pub mod product;

pub use product::ProductRepository;
