//! Environment configuration.
//!
//! | Variable            | Default   |
//! |---------------------|-----------|
//! | `BIND_ADDR`         | `0.0.0.0` |
//! | `PORT`              | `8000`    |
//! | `SEED_FILE`         | built-in  |
//! | `STRICT_OWNERS`     | `false`   |
//! | `REJECT_BLANK_TEXT` | `false`   |
use garageql::store::{OwnerPolicy, Seed, Store, StoreError, TextPolicy};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not load seed file `{path:?}`: {source}")]
    Seed {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub owner_policy: OwnerPolicy,
    pub text_policy: TextPolicy,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT `{}`, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let owner_policy = if flag(lookup("STRICT_OWNERS")) {
            OwnerPolicy::Strict
        } else {
            OwnerPolicy::Permissive
        };
        let text_policy = if flag(lookup("REJECT_BLANK_TEXT")) {
            TextPolicy::NonBlank
        } else {
            TextPolicy::Permissive
        };
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            port,
            seed_file: lookup("SEED_FILE").map(PathBuf::from),
            owner_policy,
            text_policy,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Builds the store these settings describe.
    pub fn store(&self) -> Result<Store, ConfigError> {
        let store = match &self.seed_file {
            Some(path) => Seed::from_file(path)
                .and_then(Store::from_seed)
                .map_err(|source| ConfigError::Seed {
                    path: path.clone(),
                    source,
                })?,
            None => Store::seeded(),
        };
        Ok(store
            .with_policy(self.owner_policy)
            .with_text_policy(self.text_policy))
    }
}

fn flag(raw: Option<String>) -> bool {
    matches!(raw.as_deref().map(str::trim), Some("1") | Some("true") | Some("yes"))
}
