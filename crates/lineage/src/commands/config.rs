//! Config command

use anyhow::Result;
use camino::Utf8Path;

use crate::cli::ConfigCommands;

pub fn run(cmd: ConfigCommands, config_path: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path),
    }
}

fn show(config_path: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    print!("{}", serde_yaml_ng::to_string(&config)?);
    Ok(())
}
