use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::Serialize;

use crate::constants::config::DEFAULT_OUTPUT_DIR;
use crate::constants::export::DEFAULT_EXPORT_NAME;
use crate::display::StatsStyle;
use crate::error::*;
use crate::format::FormatHint;

#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Deserialize, Debug, Serialize, PartialEq)]
#[serde(default)]
pub struct Defaults {
    pub format: FormatHint,
    pub export_name: String,
    pub output_dir: String,
    pub show_stats: bool,
    pub stats_style: StatsStyle,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            format: FormatHint::default(),
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            show_stats: false,
            stats_style: StatsStyle::default(),
        }
    }
}

impl MainConfig {
    pub fn new() -> Self {
        MainConfig {
            ..Default::default()
        }
    }

    /// Parses the main configuration from its TOML contents.
    ///
    /// # Arguments
    /// * `content` - The TOML document
    /// * `file` - Name of the file the document was read from, used in errors
    pub fn from_toml(content: &str, file: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::SerdeTomlError {
            location: ConfigType::MAIN,
            file: file.to_string(),
            cause: e.to_string(),
        })
    }

    /// Reads and parses the main configuration file.
    pub fn load(file_path: &Path) -> Result<Self> {
        let content = parse(file_path).map_err(|e| Error::ConfigReadError {
            file: file_path.to_string_lossy().to_string(),
            cause: e.to_string(),
        })?;
        MainConfig::from_toml(&content, &file_path.to_string_lossy())
    }

    /// Directory where `--save` exports land, with `~` and environment
    /// variables expanded.
    pub fn output_dir(&self) -> Result<PathBuf> {
        let expanded = shellexpand::full(&self.defaults.output_dir).map_err(|e| {
            Error::InterpolationError {
                location: ConfigType::MAIN,
                cause: e.to_string(),
            }
        })?;
        Ok(PathBuf::from(expanded.as_ref()))
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
