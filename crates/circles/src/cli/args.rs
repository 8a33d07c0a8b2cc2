//! CLI argument structs for all commands.

use clap::Parser;
use std::fmt;

use crate::session::Request;

/// Arguments for the `path` command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PathArgs {
    /// Member the route starts at
    #[arg(allow_negative_numbers = true)]
    pub start: i64,

    /// Member the route ends at
    #[arg(allow_negative_numbers = true)]
    pub end: i64,
}

impl From<&PathArgs> for Request {
    fn from(args: &PathArgs) -> Self {
        Request::ShortestPath {
            start: args.start,
            end: args.end,
        }
    }
}

/// Arguments for the `recommend` command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct RecommendArgs {
    /// Member to suggest friends for
    #[arg(allow_negative_numbers = true)]
    pub user: i64,
}

impl From<&RecommendArgs> for Request {
    fn from(args: &RecommendArgs) -> Self {
        Request::Recommend { user: args.user }
    }
}

/// A friendship given on the command line as `A,B,WEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeArg {
    /// First member
    pub a: i64,
    /// Second member
    pub b: i64,
    /// Friendship weight
    pub weight: i64,
}

impl fmt::Display for EdgeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.a, self.b, self.weight)
    }
}

impl From<EdgeArg> for Request {
    fn from(edge: EdgeArg) -> Self {
        Request::AddFriendship {
            a: edge.a,
            b: edge.b,
            weight: edge.weight,
        }
    }
}
