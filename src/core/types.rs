use serde::{Serialize, Serializer};
use std::fmt;

/// Callback receiving one normalized output line of a running subprocess.
/// Called from the stdout and stderr reader threads concurrently.
pub type LineSink<'a> = dyn Fn(&str) + Sync + 'a;

/// A manifest package as seen by the core.
///
/// `names` holds every alias the package is addressable by, in manifest order.
/// Matching a requested token against a package means "any alias equals the token".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Package {
    pub names: Vec<String>,
    pub manager: String,
    pub version: String,
    pub optional: bool,
    pub dependencies: Vec<String>,
}

impl Package {
    /// Convenience constructor used heavily by tests and the resolver
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn has_name(&self, token: &str) -> bool {
        self.names.iter().any(|n| n == token)
    }

    /// Aliases joined for display, e.g. `node, nodejs`
    pub fn display_name(&self) -> String {
        self.names.join(", ")
    }

    /// A pinned version is anything other than empty or `latest`
    pub fn pinned_version(&self) -> Option<&str> {
        match self.version.trim() {
            "" | "latest" => None,
            v => Some(v),
        }
    }
}

// Installation state of a single package.
// Rendered as the plain strings users and scripts already rely on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusKind {
    Installed,
    #[default]
    Missing,
    External,
    VersionManaged(String),
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed => write!(f, "installed"),
            Self::Missing => write!(f, "missing"),
            Self::External => write!(f, "installed (external)"),
            Self::VersionManaged(manager) => write!(f, "installed ({})", manager),
        }
    }
}

impl Serialize for StatusKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PackageStatus {
    pub name: String,
    pub status: StatusKind,
    pub version: String,
}

impl PackageStatus {
    pub fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: StatusKind::Missing,
            version: String::new(),
        }
    }

    pub fn installed(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            status: StatusKind::Installed,
            version: version.to_string(),
        }
    }
}

/// Flattened per-alias outcome of a batch operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationResult {
    pub successes: Vec<String>,
    pub failures: Vec<String>,
}

/// Manifest packages selected for this invocation plus tokens nothing matched
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetResolution {
    pub targets: Vec<Package>,
    pub not_found: Vec<String>,
}
