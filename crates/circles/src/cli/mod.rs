//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for circles using clap's derive API.
//! The network is described by `--members` and any number of `--edge` flags; each
//! command then runs one query against it, or opens the interactive shell.
//!
//! # Commands
//!
//! - `shell`: Interactive menu (the default when no command is given)
//! - `display`: Print the weight matrix
//! - `path`: Lightest route between two members
//! - `recommend`: Friends-of-friends for a member
//! - `isolated`: Members with no friendships
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! circles --members 4 --edge 0,1,4 --edge 1,2,3 path 0 2
//! circles -m 4 -e 0,1,4 -e 1,2,3 --json recommend 0
//! circles -m 4 -e 0,1,4 shell
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputMode;
use crate::session::Request;

// Re-export argument structs
pub use args::{EdgeArg, PathArgs, RecommendArgs};

// Re-export validators for external use
pub use validators::{parse_edge, validate_member_count};

/// Circles - weighted friendship network explorer
///
/// Build a small social network of numbered users, then query shortest
/// paths, friend recommendations, and isolated users.
#[derive(Parser, Debug)]
#[command(name = "circles")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Number of users in the network
    #[arg(short, long, value_parser = validate_member_count)]
    pub members: Option<usize>,

    /// Friendship to add before running the command (repeatable)
    #[arg(
        short,
        long = "edge",
        value_name = "A,B,WEIGHT",
        value_parser = parse_edge,
        allow_hyphen_values = true
    )]
    pub edges: Vec<EdgeArg>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive menu
    ///
    /// Prompts for the member count unless `--members` is given. Any `--edge`
    /// friendships are added before the first prompt.
    Shell,

    /// Print the adjacency matrix
    Display,

    /// Find the lightest route between two users
    ///
    /// Prints the total weight and the users along the way, or reports that
    /// the two users are not connected.
    Path(PathArgs),

    /// Suggest friends-of-friends for a user
    ///
    /// Lists each candidate once per mutual friend, in ascending order of
    /// the mutual friend and then the candidate.
    Recommend(RecommendArgs),

    /// List users without any friendships
    Isolated,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// The one-shot request for the chosen command, or `None` for the shell.
    pub fn request(&self) -> Option<Request> {
        match &self.command {
            None | Some(Commands::Shell) => None,
            Some(Commands::Display) => Some(Request::Display),
            Some(Commands::Isolated) => Some(Request::Isolated),
            Some(Commands::Path(args)) => Some(Request::from(args)),
            Some(Commands::Recommend(args)) => Some(Request::from(args)),
        }
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match self.request() {
            Some(request) => {
                execute::execute_request(self.members, &self.edges, request, output_mode)
            }
            None => execute::execute_shell(self.members, &self.edges, output_mode),
        }
    }
}
