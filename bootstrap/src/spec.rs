//! Declarative description of what must exist in the database.
//!
//! The file lists users, databases, collections, and grants; applying it
//! is idempotent, so the same file can be fed to every operator restart.

#[cfg(test)]
#[path = "spec_test.rs"]
mod spec_test;

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BootstrapSpec {
    #[serde(default)]
    pub users: Vec<UserSpec>,
    #[serde(default)]
    pub databases: Vec<DatabaseSpec>,
    #[serde(default)]
    pub collections: Vec<CollectionSpec>,
    #[serde(default)]
    pub grants: Vec<GrantSpec>,
}

impl BootstrapSpec {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserSpec {
    pub name: String,
    #[serde(default)]
    pub passwd: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DatabaseSpec {
    pub name: String,
    /// Extra creation options, passed through to the server verbatim.
    #[serde(default)]
    pub options: Value,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CollectionSpec {
    pub database: String,
    pub name: String,
    /// Extra creation attributes, passed through verbatim.
    #[serde(default)]
    pub attributes: Value,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GrantSpec {
    pub user: String,
    pub database: String,
    /// Collection-level grant when set, database-level otherwise.
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default = "default_access")]
    pub access: String,
}

fn default_true() -> bool {
    true
}

fn default_access() -> String {
    "rw".to_owned()
}
