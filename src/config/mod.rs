//! # Configuration Module
//!
//! Centralized, environment-variable-driven configuration. Settings are
//! exposed as typed accessors with development-safe defaults; production
//! deployments override them through the `.env.prod` profile.
//!
//! ## Environment variables
//!
//! ```bash
//! # Server
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="todo_app_dev"
//! ```

pub mod data_config;

pub use data_config::*;
