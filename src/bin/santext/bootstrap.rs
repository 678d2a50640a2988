use chrono::prelude::*;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use santext::constants::config::{DEFAULT_CONF_FILE, DEFAULT_OUTPUT_DIR};
use santext::constants::export::DEFAULT_EXPORT_NAME;
use santext::{
    config::MainConfig,
    debug,
    error::*,
};

use crate::directories::project_dirs;

static DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                            [defaults]\n\
                            format      = \"txt\"\n\
                            export_name = \"${export_name}\"\n\
                            output_dir  = \"${output_dir}\"\n\
                            show_stats  = false\n\
                            stats_style = \"human\"\n";

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    pub fn new() -> Result<Self> {
        Ok(BootStrap {
            config: BootStrap::init()?,
        })
    }

    /// Locates the main configuration file, creating it with the default
    /// values on the first run.
    ///
    /// # Returns
    /// A `Result` containing the main configuration.
    pub fn init() -> Result<MainConfig> {
        let conf_file = project_dirs()?.config_dir().join(DEFAULT_CONF_FILE);
        parse_main_config(&conf_file)
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Creates the default main configuration file
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Errors
/// * `ConfigError` - If the configuration directory cannot be created
/// * `IoError` - If an I/O error occurs while writing the configuration file
fn create_default_config(config_file: &Path) -> Result<()> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| Error::ConfigError(config_file.to_string_lossy().into_owned()))?;
    std::fs::create_dir_all(parent_dir)
        .map_err(|_| Error::ConfigError(parent_dir.to_string_lossy().into_owned()))?;
    let current_date: DateTime<Local> = Local::now();
    let config_data = DEFAULT_CONF
        .replacen("${date}", &current_date.to_string(), 1)
        .replacen("${export_name}", DEFAULT_EXPORT_NAME, 1)
        .replacen("${output_dir}", DEFAULT_OUTPUT_DIR, 1);

    File::create(config_file)?.write_all(config_data.as_bytes())?;
    debug!("Created default configuration in {}", config_file.to_string_lossy());
    Ok(())
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// If the file does not exist, a default configuration file is created first.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be created, read or parsed.
pub fn parse_main_config(conf_file: &Path) -> Result<MainConfig> {
    if !conf_file.exists() {
        create_default_config(conf_file)?;
    }
    MainConfig::load(conf_file)
}
