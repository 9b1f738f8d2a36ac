use std::env;

/// Where the feedback store lives. The acceptance harness used to keep these
/// as module-level constants; passing them as a struct keeps tests and the
/// server off shared global state.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub connection_string: String, // rusqlite path, or ":memory:"
    pub database: String,
    pub collection: String,
}

impl Default for StoreConfig {
    // The default file name is derived from the database name, so the
    // logical addressing and the on-disk store stay in step.
    fn default() -> Self {
        let database = "feedback_db".to_string();
        StoreConfig {
            connection_string: format!("{}.sqlite", database),
            database,
            collection: "feedback".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn in_memory() -> Self {
        StoreConfig {
            connection_string: ":memory:".to_string(),
            ..StoreConfig::default()
        }
    }

    pub fn at_path(path: &str) -> Self {
        StoreConfig {
            connection_string: path.to_string(),
            ..StoreConfig::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub store: StoreConfig,
}

impl ServiceConfig {
    /// Defaults overridable through `FEEDBACK_ADDR` and `FEEDBACK_DB_PATH`.
    pub fn from_env() -> Self {
        let mut store = StoreConfig::default();
        if let Ok(path) = env::var("FEEDBACK_DB_PATH") {
            store.connection_string = path;
        }
        let bind_addr =
            env::var("FEEDBACK_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        ServiceConfig { bind_addr, store }
    }
}
