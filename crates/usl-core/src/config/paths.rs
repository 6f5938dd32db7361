//! Config path resolution helpers.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "usl.toml";

/// `<config_dir>/usl/usl.toml` for a given base config directory.
pub fn config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join("usl").join(CONFIG_FILE_NAME)
}

/// The per-user config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| config_path_in(&dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_uses_usl_subdirectory() {
        let path = config_path_in(Path::new("/tmp/config"));

        assert_eq!(path, PathBuf::from("/tmp/config/usl/usl.toml"));
    }
}
