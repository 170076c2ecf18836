//! Target resolution
//!
//! Maps the package names given on the command line onto manifest entries.
//! An empty request selects the whole manifest. Otherwise every requested
//! token lands in exactly one place: it either contributes the first manifest
//! entry carrying it as an alias, or it is recorded as not found.
//!
//! Duplicate aliases across entries are a manifest error reported by
//! `voltig lint`; here the first entry in manifest order simply wins.

use crate::core::types::{Package, TargetResolution};
use crate::traits::Reporter;

pub fn resolve_targets(
    requested: &[String],
    manifest: &[Package],
    reporter: &dyn Reporter,
) -> TargetResolution {
    if requested.is_empty() {
        reporter.verbose(&format!(
            "Selecting all {} package(s) from manifest",
            manifest.len()
        ));
        return TargetResolution {
            targets: manifest.to_vec(),
            not_found: Vec::new(),
        };
    }

    let mut resolution = TargetResolution::default();

    for token in requested {
        match manifest.iter().find(|pkg| pkg.has_name(token)) {
            Some(pkg) => resolution.targets.push(pkg.clone()),
            None => {
                reporter.error(&format!("Package not found in config: {}", token));
                resolution.not_found.push(token.clone());
            }
        }
    }

    reporter.verbose(&format!(
        "Resolved {} target(s), {} not found",
        resolution.targets.len(),
        resolution.not_found.len()
    ));

    resolution
}
