// Donation Inventory - API Core
//
// This crate provides the backend API for tracking donation records:
// a small REST surface over a single Postgres-backed collection with
// list, create, update, and delete operations.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
