//! Item Management Service
//!
//! A small CRUD API over a single `items` table in PostgreSQL, split into
//! domain logic, repository adapters, and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
