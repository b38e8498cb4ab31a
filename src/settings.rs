//! Startup settings.
//!
//! The service runs without any configuration at all; a `biblias.json` (or
//! `.toml`/`.yaml`) next to the binary may override the listen address and
//! the database file.

use config::{Config, File};
use serde::Deserialize;

use crate::error::Result;
use crate::persist::PersistenceMode;

pub const DEFAULT_CONFIG: &str = "biblias";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the editions.
    pub database: String,
}

impl Settings {
    /// Reads `<name>.{json,toml,yaml,...}` when it exists and fills the rest
    /// from the defaults. A file that exists but does not parse is an error.
    pub fn load(name: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("database", "biblia.db")?
            .add_source(File::with_name(name).required(false))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn persistence_mode(&self) -> PersistenceMode {
        PersistenceMode::File(self.database.clone())
    }
}
