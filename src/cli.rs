//! CLI command definitions for taskflow.
//!
//! This module defines the CLI structure using clap's derive macros. The CLI
//! is the presentation layer: every subcommand maps onto a store operation or
//! a query over the current collection, and owns no task data of its own.

use crate::format::OutputFormat;
use crate::query::{FilterMode, SortMode};
use crate::types::{Category, Priority};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Local task tracker: priorities, categories, search, and stats
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the task database (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task text
        text: String,

        /// Priority for the new task (defaults to the configured priority)
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,

        /// Category for the new task (defaults to the configured category)
        #[arg(short = 'C', long, value_enum)]
        category: Option<Category>,
    },

    /// List tasks, optionally filtered, searched, and sorted
    List {
        /// Show only a subset of tasks
        #[arg(short, long, value_enum, default_value_t)]
        filter: FilterMode,

        /// Keep only tasks whose text or category contains this string
        #[arg(short, long, default_value = "")]
        search: String,

        /// Ordering of the listing
        #[arg(long, value_enum, default_value_t)]
        sort: SortMode,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Toggle a task between active and completed
    Toggle {
        /// Task id, or a unique prefix of one
        id: String,
    },

    /// Replace the text of a task
    Edit {
        /// Task id, or a unique prefix of one
        id: String,

        /// New task text
        text: String,
    },

    /// Delete a task permanently
    #[command(alias = "rm")]
    Remove {
        /// Task id, or a unique prefix of one
        id: String,
    },

    /// Show completion statistics
    Stats {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}
