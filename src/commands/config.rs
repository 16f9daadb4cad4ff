//! Configuration commands.

use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    println!("api.base_url: {}", config.base_url()?);
    println!("search.debounce_ms: {}", config.search.debounce_ms);
    Ok(())
}

/// Set the backend base URL
pub fn cmd_config_set_url(url: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(url)?;
    config.save()?;
    println!("api.base_url = {}", url);
    Ok(())
}

/// Set the search debounce quiet period
pub fn cmd_config_set_debounce(ms: u64) -> Result<()> {
    let mut config = Config::load()?;
    config.search.debounce_ms = ms;
    config.save()?;
    println!("search.debounce_ms = {}", ms);
    Ok(())
}
