//! CLI subcommands

pub mod config;
pub mod links;

use anyhow::Result;
use std::path::Path;

use crate::config::Options;

/// Load options from `path` (or the defaults), then apply a distance override
pub fn load_options(path: Option<&Path>, distance: Option<i64>) -> Result<Options> {
    let mut options = match path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    if let Some(distance) = distance {
        options.distance = distance;
        options.validate()?;
    }

    Ok(options)
}
