//! Database library providing the MongoDB connection manager for the Atelier API
//!
//! The central type is [`mongodb::ConnectionManager`], a process-wide owner of
//! a lazily established, cached MongoDB client. It is written for two call
//! patterns:
//!
//! - a long-running server connects once at startup and keeps the handle for
//!   the life of the process, and
//! - a serverless-style runtime calls `ensure_connected` at the start of every
//!   request, which is a cheap in-memory check once the instance is warm.
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb::{ConnectionManager, MongoConfig};
//! use core_config::FromEnv;
//!
//! let manager = ConnectionManager::new(MongoConfig::from_env()?);
//! let handle = manager.ensure_connected().await?;
//! let collection = handle.collection::<Document>("blogs");
//! ```

pub mod mongodb;

pub use self::mongodb::{
    ConnectionHandle, ConnectionManager, ConnectionState, ConnectionStatus, MongoConfig,
    MongoError, MongoResult,
};
