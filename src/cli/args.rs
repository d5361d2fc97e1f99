//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::format::Format;

/// viewpath - Resolve template paths from action identity and content format.
#[derive(Debug, Parser)]
#[command(name = "viewpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .viewpath/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Print results and errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a template path
    Resolve(ResolveArgs),

    /// List or check supported template formats
    Formats(FormatsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Logical template path (e.g. `show`, `user.show`, `/shared/layout`)
    pub template: String,

    /// Dot-qualified identity of the handling action; enables relative resolution
    #[arg(short, long, value_name = "PATH")]
    pub method: Option<String>,

    /// Negotiated format (html, json, xml, txt, csv, ...)
    #[arg(short, long, value_name = "FORMAT", conflicts_with = "content_type")]
    pub accept: Option<Format>,

    /// Derive the format from a content type instead
    #[arg(long, value_name = "MIME")]
    pub content_type: Option<String>,

    /// Register extra formats before resolving (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "FORMATS")]
    pub register: Vec<Format>,
}

/// Arguments for the `formats` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FormatsArgs {
    /// Check a single format instead of listing all
    #[arg(long, value_name = "FORMAT")]
    pub check: Option<Format>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_method() {
        let cli = Cli::parse_from([
            "viewpath",
            "resolve",
            "page",
            "--method",
            "a.b.C.action",
            "--accept",
            "JSON",
        ]);
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.template, "page");
                assert_eq!(args.method.as_deref(), Some("a.b.C.action"));
                assert_eq!(args.accept, Some(Format::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_register_list() {
        let cli = Cli::parse_from(["viewpath", "resolve", "r", "--register", "pdf,ics"]);
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.register, vec![Format::Pdf, Format::custom("ics").unwrap()]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn accept_conflicts_with_content_type() {
        let result = Cli::try_parse_from([
            "viewpath",
            "resolve",
            "r",
            "--accept",
            "json",
            "--content-type",
            "text/html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_format() {
        let result = Cli::try_parse_from(["viewpath", "formats", "--check", "a.b"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["viewpath", "formats", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
