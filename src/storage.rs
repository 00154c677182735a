//! Storage subsystem
//!
//! This module provides the record stores behind the two HTTP surfaces.
//!
//! Components:
//! - `storage_trait`: the `EmployeeStorage` trait defining a uniform API.
//! - `types`: employee data types shared by handlers and backends.
//! - `database_storage`: ORM-based SQLite implementation using SeaORM.
//! - `db_entities`: SeaORM entity model for the database backend.
//! - `item_store`: process-lifetime store for the JSON item API.

pub mod database_storage;
pub mod db_entities;
pub mod item_store;
pub mod storage_trait;
pub mod types;
