//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresOrderRepository` - Marks orders paid and stores checkout addresses

mod order_repository;

pub use order_repository::PostgresOrderRepository;
