//! Common library for the Realtime Map services
//!
//! This crate provides shared infrastructure used across the services:
//! PostgreSQL connection pooling, the Redis cache client, and the error
//! types both are reported through.

pub mod cache;
pub mod database;
pub mod error;
