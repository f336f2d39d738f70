//! Command-line argument parsing for the headless host
//!
//! Supports:
//! - Printing the outline of a document
//! - Rendering a document to a standalone HTML page
//! - Showing or clearing the stored document
//! - Printing or writing the configuration file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A Markdown editor core with live preview
#[derive(Parser, Debug)]
#[command(name = "markpane", version, about = "A Markdown editor with live preview")]
pub struct CliArgs {
    /// Storage slot to use instead of the configured one
    #[arg(long, global = true, value_name = "NAME")]
    pub slot: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the table of contents
    Outline {
        /// Markdown file (defaults to the stored document)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render to a standalone HTML page
    Render {
        /// Markdown file (defaults to the stored document)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Use the light preview theme
        #[arg(long)]
        light: bool,
    },

    /// Print the stored document
    Show,

    /// Delete the stored document
    Clear,

    /// Print the effective configuration
    Config {
        /// Write the configuration file if it does not exist yet
        #[arg(long)]
        init: bool,

        /// With --init, overwrite an existing file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Where a command reads its document from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Slot(String),
}

impl CliArgs {
    /// Resolve the document source, falling back to `default_slot`
    pub fn source(&self, default_slot: &str) -> DocumentSource {
        let file = match &self.command {
            CliCommand::Outline { file, .. } | CliCommand::Render { file, .. } => file.clone(),
            CliCommand::Show | CliCommand::Clear | CliCommand::Config { .. } => None,
        };

        match file {
            Some(path) => DocumentSource::File(path),
            None => DocumentSource::Slot(
                self.slot
                    .clone()
                    .unwrap_or_else(|| default_slot.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("markpane").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_outline_defaults_to_configured_slot() {
        let args = parse(&["outline"]);
        assert_eq!(
            args.command,
            CliCommand::Outline {
                file: None,
                json: false
            }
        );
        assert_eq!(
            args.source("markdown-editor-content"),
            DocumentSource::Slot("markdown-editor-content".to_string())
        );
    }

    #[test]
    fn test_outline_file_with_json() {
        let args = parse(&["outline", "notes.md", "--json"]);
        assert_eq!(
            args.command,
            CliCommand::Outline {
                file: Some(PathBuf::from("notes.md")),
                json: true
            }
        );
        assert_eq!(
            args.source("ignored"),
            DocumentSource::File(PathBuf::from("notes.md"))
        );
    }

    #[test]
    fn test_render_with_output() {
        let args = parse(&["render", "a.md", "-o", "a.html"]);
        match args.command {
            CliCommand::Render { file, output, light } => {
                assert_eq!(file, Some(PathBuf::from("a.md")));
                assert_eq!(output, Some(PathBuf::from("a.html")));
                assert!(!light);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_slot_override_is_global() {
        let args = parse(&["show", "--slot", "drafts"]);
        assert_eq!(args.command, CliCommand::Show);
        assert_eq!(args.source("default"), DocumentSource::Slot("drafts".to_string()));
    }

    #[test]
    fn test_config_init_and_force() {
        let args = parse(&["config", "--init", "--force"]);
        assert_eq!(
            args.command,
            CliCommand::Config {
                init: true,
                force: true
            }
        );
        assert!(CliArgs::try_parse_from(["markpane", "config", "--force"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliArgs::try_parse_from(["markpane"]).is_err());
    }
}
