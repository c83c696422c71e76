use std::env;
use std::path::PathBuf;

use anyhow::Result;
use spdlog::debug;

use minicms::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()));
    let candidates = [
        exe_dir,
        env::current_dir().ok(),
        dirs::config_dir().map(|dir| dir.join("minicms")),
    ];

    candidates.into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        debug!("No {} found, using defaults", CFG_FILE_NAME);
        return Ok(Config::default());
    };

    debug!("Reading config from {}", config_path.display());
    let mut config = read_config(&config_path)?;

    if let Some(ref mut log) = config.log {
        if log.location.is_none() {
            log.location = dirs::cache_dir().map(|dir| dir.join("MiniCMS").join("log").join("minicms.log"));
        }
        if let Some(ref location) = log.location {
            debug!("Log enabled. Files will be written in {}", location.display());
        }
    }

    Ok(config)
}
