//! CLI module - Command-line interface for Hondana
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Hondana - Bookstore Search Client
/// Searches a remote book catalog and keeps recent keywords for quick reuse
#[derive(Parser)]
#[command(name = "hondana")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive browse session (default)
    Browse,

    /// Show the best-seller listing
    #[command(alias = "b")]
    Best,

    /// Search the catalog for a keyword
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Show or manage recent search keywords
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: Option<HistoryCommands>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent keywords, most recent first
    #[command(alias = "ls")]
    List {
        /// Number of entries to show
        #[arg(default_value = "10")]
        limit: usize,
    },
    /// Delete all entries matching a keyword exactly
    #[command(alias = "rm")]
    Remove {
        /// Keyword to delete
        #[arg(required = true)]
        keyword: Vec<String>,
    },
}

pub use commands::*;
