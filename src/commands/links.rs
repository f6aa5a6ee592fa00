//! Print the pagination links for a page

use anyhow::Result;
use clap::ValueEnum;

use crate::config::Options;
use crate::pagination::{build_pagination_links, Link, PaginationState};

/// Output format for the link list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One link per line
    #[default]
    Text,
    /// A JSON array
    Json,
}

/// Compute and print the links for `state`
pub fn run(state: PaginationState, options: &Options, format: OutputFormat) -> Result<()> {
    let links = build_pagination_links(state, options)?;
    tracing::info!(
        "Page {} of {}: {} links",
        state.page_number,
        state.total_pages,
        links.len()
    );
    println!("{}", format_links(&links, format)?);
    Ok(())
}

/// Format links for printing
pub fn format_links(links: &[Link], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(links)?),
        OutputFormat::Text => Ok(links
            .iter()
            .map(|link| match link.target_page() {
                Some(page) => format!("{} -> {}", link.label_text(), page),
                None => link.label_text(),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
