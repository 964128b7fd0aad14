// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_item_repository;

pub use postgres_item_repository::PostgresItemRepository;
