//! Store configuration.

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/inventory";
pub const DEFAULT_DATABASE: &str = "inventory_management";

pub const MONGO_URI_ENV: &str = "STOCKROOM_MONGO_URI";
pub const DATABASE_ENV: &str = "STOCKROOM_DATABASE";

/// Where the document store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub mongo_uri: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Read `STOCKROOM_MONGO_URI` / `STOCKROOM_DATABASE`, falling back to the local defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            mongo_uri: non_empty(MONGO_URI_ENV).unwrap_or(defaults.mongo_uri),
            database: non_empty(DATABASE_ENV).unwrap_or(defaults.database),
        }
    }

    /// Apply explicit overrides (command-line flags win over the environment).
    pub fn with_overrides(mut self, mongo_uri: Option<String>, database: Option<String>) -> Self {
        if let Some(uri) = mongo_uri {
            self.mongo_uri = uri;
        }
        if let Some(database) = database {
            self.database = database;
        }
        self
    }
}
