use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use santext::error::*;

/// Wrapper for 'dirs' that treats MacOS more like Linux, by following the XDG specification.
/// `SANTEXT_CONFIG_DIR` is checked first, then the `XDG_CONFIG_HOME` environment variable.
/// The fallback directory is `~/.config/santext`.
pub struct ProjectDirs {
    config_dir: PathBuf,
}

impl ProjectDirs {
    fn new() -> Option<ProjectDirs> {
        // Checks whether or not $SANTEXT_CONFIG_DIR exists. If it doesn't, set config dir
        // to our system's default configuration home.
        let config_dir =
            if let Some(config_dir_op) = env::var_os("SANTEXT_CONFIG_DIR").map(PathBuf::from) {
                config_dir_op
            } else {
                #[cfg(target_os = "macos")]
                let config_dir_op = env::var_os("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .filter(|p| p.is_absolute())
                    .or_else(|| dirs_next::home_dir().map(|d| d.join(".config")));

                #[cfg(not(target_os = "macos"))]
                let config_dir_op = dirs_next::config_dir();

                config_dir_op.map(|d| d.join("santext"))?
            };

        Some(ProjectDirs { config_dir })
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> = Lazy::new(ProjectDirs::new);

/// Resolved project directories, or an error when no home directory can be found
pub fn project_dirs() -> Result<&'static ProjectDirs> {
    PROJECT_DIRS.as_ref().ok_or_else(|| {
        Error::ConfigError("<unknown> (could not get home directory)".to_string())
    })
}
