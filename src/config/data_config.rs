//! Data store and server configuration
//!
//! Typed accessors over the process environment for the settings the
//! backend needs at startup.

use std::env;

/// MongoDB connection settings
pub struct DataConfig;

impl DataConfig {
    /// MongoDB connection URI.
    ///
    /// # Environment Variables
    /// - `MONGODB_URI`: custom connection string
    ///   (default: "mongodb://localhost:27017")
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// Database holding the todo collection.
    ///
    /// # Environment Variables
    /// - `DATABASE_NAME`: custom database name (default: "todo_app_dev")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "todo_app_dev".to_string())
    }
}

/// Server binding settings
pub struct ServerConfig;

impl ServerConfig {
    /// Port the server binds to.
    ///
    /// # Environment Variables
    /// - `PORT`: custom port (default: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// Host address the server binds to.
    ///
    /// # Environment Variables
    /// - `HOST`: custom host (default: "0.0.0.0", all interfaces)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}
