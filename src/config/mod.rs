pub mod loader;
pub mod types;
pub mod validate;

pub use loader::{CONFIG_FILE_NAME, LoadedManifest, load_manifest};
pub use types::{CustomCommand, Manifest, PackageEntry};
