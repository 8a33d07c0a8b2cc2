//! A weighted adjacency-matrix engine for small social networks.
//!
//! [`SocialGraph`] holds a fixed number of members and a symmetric matrix of
//! friendship weights. On top of it the crate answers four questions:
//!
//! - who is connected to whom ([`SocialGraph::rows`])
//! - the lightest route between two members ([`SocialGraph::shortest_path`])
//! - who has no friends at all ([`SocialGraph::isolated`])
//! - which friends-of-friends to suggest ([`SocialGraph::recommend`])
//!
//! Every operation is synchronous and bounded by the square of the member
//! count.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
pub mod error;
mod matrix;
pub mod network;
pub mod types;

pub use error::{Error, InvalidArgument, Result};
pub use network::{MAX_MEMBERS, SocialGraph};
pub use types::{Friendship, Isolation, Recommendation, Route};
