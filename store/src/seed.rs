//! Initial store contents.
//!
//! A [Seed] is either the built-in demo dataset or a YAML document of the form
//!
//! ```yaml
//! users:
//!   - id: 1
//!     name: Ngimdock
//! cars:
//!   - id: 1
//!     brand: Lambo 2010
//!     ownerId: 1
//!     speed: 200
//! ```
//!
//! Either list may be omitted.
use serde::Deserialize;
use std::path::Path;

use super::entities::{Car, User};
use super::StoreError;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub cars: Vec<Car>,
}

impl Seed {
    /// The fixed dataset every fresh server starts from.
    pub fn demo() -> Self {
        let user = |id, name: &str| User {
            id,
            name: name.to_owned(),
        };
        let car = |id, brand: &str, owner_id| Car {
            id,
            brand: brand.to_owned(),
            speed: None,
            owner_id,
        };
        Self {
            users: vec![user(1, "Ngimdock"), user(2, "Dan")],
            cars: vec![
                car(1, "Lambo 2010", 2),
                car(2, "Ferari", 1),
                car(3, "Vostvagen", 2),
            ],
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, StoreError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        Self::from_yaml_str(&std::fs::read_to_string(path)?)
    }
}
