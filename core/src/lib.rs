pub mod error;
pub mod repository;
pub mod schedule;
pub mod store;
pub mod types;

pub use error::{Error, Result, ValidationError};
pub use repository::ClothingRepository;
