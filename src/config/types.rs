use crate::core::types::Package;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Top-level shape of `voltig.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub packages: Vec<PackageEntry>,

    /// User-defined shortcuts, keyed by subcommand name
    #[serde(default)]
    pub commands: BTreeMap<String, CustomCommand>,
}

impl Manifest {
    /// Core view of every manifest entry, in manifest order
    pub fn packages(&self) -> Vec<Package> {
        self.packages.iter().cloned().map(Package::from).collect()
    }
}

/// One `packages:` entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageEntry {
    /// Either `name: wget` or `name: [node, nodejs]`
    #[serde(default, deserialize_with = "one_or_many")]
    pub name: Vec<String>,

    #[serde(default)]
    pub manager: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl From<PackageEntry> for Package {
    fn from(entry: PackageEntry) -> Self {
        Package {
            names: entry.name,
            manager: entry.manager,
            version: entry.version,
            optional: entry.optional,
            dependencies: entry.dependencies,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match OneOrMany::deserialize(deserializer) {
        Ok(OneOrMany::One(name)) => Ok(vec![name]),
        Ok(OneOrMany::Many(names)) => Ok(names),
        Err(_) => Err(serde::de::Error::custom(
            "package name must be a string or an array of strings",
        )),
    }
}

/// A project shortcut runnable as `voltig <name>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCommand {
    #[serde(default)]
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<String>,

    /// `KEY=VALUE` pairs added to the child environment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}
