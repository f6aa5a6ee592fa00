//! Show the effective options

use anyhow::Result;

use crate::config::Options;

/// Print the options as YAML
pub fn run(options: &Options) -> Result<()> {
    print!("{}", serde_yaml::to_string(options)?);
    Ok(())
}
