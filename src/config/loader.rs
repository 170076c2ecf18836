use crate::config::types::Manifest;
use crate::error::{Result, VoltigError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "voltig.yml";

/// A manifest together with the file it came from
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub manifest: Manifest,
}

/// Load the manifest at `path`.
///
/// When `path` does not exist, `voltig.yml` is searched upward from the
/// current directory so the CLI works from any project subdirectory.
pub fn load_manifest(path: &Path) -> Result<LoadedManifest> {
    let resolved = match fs::metadata(path) {
        Ok(_) => path.to_path_buf(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let cwd = std::env::current_dir()?;
            find_in_parents(&cwd, CONFIG_FILE_NAME).ok_or_else(|| VoltigError::ConfigNotFound {
                path: path.to_path_buf(),
            })?
        }
        Err(e) => {
            return Err(VoltigError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let content = fs::read_to_string(&resolved).map_err(|e| VoltigError::IoError {
        path: resolved.clone(),
        source: e,
    })?;

    let manifest = parse_manifest(&content)?;
    Ok(LoadedManifest {
        path: resolved,
        manifest,
    })
}

/// Parse manifest text; an empty document is an empty manifest
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }
    serde_yml::from_str(content).map_err(|e| VoltigError::ConfigError(e.to_string()))
}

/// Walk from `start` up to the filesystem root looking for `filename`
pub fn find_in_parents(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = parse_manifest("   \n").unwrap();
        assert!(manifest.packages.is_empty());
        assert!(manifest.commands.is_empty());
    }

    #[test]
    fn test_parse_malformed_manifest_is_config_error() {
        let err = parse_manifest("packages: [unclosed").unwrap_err();
        assert!(matches!(err, VoltigError::ConfigError(_)));
    }

    #[test]
    fn test_load_manifest_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "packages:\n  - name: wget\n    manager: brew\n").unwrap();

        let loaded = load_manifest(&path).unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.manifest.packages[0].name, vec!["wget"]);
    }

    #[test]
    fn test_find_in_parents_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "packages: []\n").unwrap();

        let found = find_in_parents(&nested, CONFIG_FILE_NAME).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_find_in_parents_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nothing-here.yml")).unwrap();
        assert!(find_in_parents(dir.path(), "nothing-here.yml").is_none());
    }
}
