//! CLI for the mediasec media section.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use media_core::config;

use commands::{run_config, run_inspect, run_normalize, run_render, RenderRequest};

/// Top-level CLI: acts as the parent form that owns the media list.
#[derive(Debug, Parser)]
#[command(name = "mediasec")]
#[command(about = "mediasec: normalize, classify and preview pasted media links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the normalized form of a pasted media URL.
    Normalize {
        /// Raw value as pasted.
        value: String,

        /// Apply the text field's leading-`h` stripping first.
        #[arg(long)]
        from_input: bool,
    },

    /// Show detected provider, display name and embed URL for a media URL.
    Inspect {
        /// Media URL.
        url: String,
    },

    /// Build a media list from URLs and print the rendered section.
    Render {
        /// URLs to paste, one new entry each.
        urls: Vec<String>,

        /// Set an entry title, e.g. `--title 0="Late set"`.
        #[arg(long = "title", value_name = "INDEX=TITLE", value_parser = parse_title)]
        titles: Vec<(usize, String)>,

        /// Remove an entry after the URLs are pasted (repeatable).
        #[arg(long = "remove", value_name = "INDEX")]
        removals: Vec<usize>,

        /// Expand this panel.
        #[arg(long, value_name = "INDEX")]
        open: Option<usize>,

        /// Print the resulting list as JSON instead of the section.
        #[arg(long)]
        json: bool,
    },

    /// Print the config file path and the effective configuration.
    Config,
}

fn parse_title(s: &str) -> Result<(usize, String), String> {
    let (index, title) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=TITLE, got `{s}`"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid index `{index}`: {e}"))?;
    Ok((index, title.to_string()))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Normalize { value, from_input } => run_normalize(&cfg, &value, from_input),
            CliCommand::Inspect { url } => run_inspect(&cfg, &url),
            CliCommand::Render {
                urls,
                titles,
                removals,
                open,
                json,
            } => run_render(
                &cfg,
                &RenderRequest {
                    urls,
                    titles,
                    removals,
                    open,
                },
                json,
            ),
            CliCommand::Config => run_config(&cfg),
        }
    }
}

#[cfg(test)]
mod tests;
