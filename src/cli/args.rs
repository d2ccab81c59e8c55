//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Query and edit TOML documents by dotted path
#[derive(Parser, Debug)]
#[command(name = "cfgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Document to operate on (default: `document` from settings)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Directory holding a local .cfgtree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get {
        /// Dotted path, e.g. server.port
        path: String,
    },

    /// Exit 0 if a value exists at a path, 1 otherwise
    Has {
        /// Dotted path
        path: String,
    },

    /// Store a value at a path (creates the document if needed)
    Set {
        /// Dotted path
        path: String,
        /// TOML literal (42, true, "text", [1, 2]); bare words are strings
        value: String,
        /// Store VALUE as a string without literal parsing
        #[arg(long)]
        raw: bool,
    },

    /// Remove the value at a path
    Remove {
        /// Dotted path
        path: String,
    },

    /// Ensure a (possibly empty) section exists at a path
    Create {
        /// Dotted path
        path: String,
    },

    /// Export the document
    Dump {
        /// Show nested sections as empty tables
        #[arg(long, conflicts_with = "deep")]
        shallow: bool,
        /// Export nested sections (overrides `shallow` setting)
        #[arg(long)]
        deep: bool,
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Show the document as a tree
    Tree,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create global config template
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
