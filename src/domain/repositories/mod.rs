pub mod item_repository;

pub use item_repository::{ItemRepository, RepositoryError};
