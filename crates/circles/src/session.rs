//! Request/response boundary between the shell and the graph engine.
//!
//! The shell never touches [`SocialGraph`] directly. It turns user input into
//! a [`Request`], hands it to [`Session::handle`], and renders the returned
//! [`Response`]. The session keeps no interaction state of its own.

use circles_graph::{Friendship, Isolation, Recommendation, Route, SocialGraph};
use serde::Serialize;

/// One operation against the network, with arguments as the user typed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Create or re-weight a friendship.
    AddFriendship {
        /// First member.
        a: i64,
        /// Second member.
        b: i64,
        /// Friendship weight; must be positive.
        weight: i64,
    },

    /// Dump the weight matrix.
    Display,

    /// Lightest route between two members.
    ShortestPath {
        /// Member the route starts at.
        start: i64,
        /// Member the route ends at.
        end: i64,
    },

    /// Friends-of-friends for a member.
    Recommend {
        /// Member asking for suggestions.
        user: i64,
    },

    /// Members without any friendship.
    Isolated,
}

/// The result of a [`Request`], ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// A friendship was stored.
    FriendshipAdded {
        /// First member.
        a: usize,
        /// Second member.
        b: usize,
        /// Stored weight.
        weight: u32,
        /// Weight that was replaced, if the pair were already friends.
        previous: Option<u32>,
    },

    /// The full weight matrix, one row per member.
    Network {
        /// Matrix rows in member order.
        rows: Vec<Vec<u32>>,
    },

    /// Outcome of a shortest-path query.
    Path {
        /// Requested start member.
        start: usize,
        /// Requested end member.
        end: usize,
        /// The route, or `None` if the members are not connected.
        route: Option<Route>,
    },

    /// Suggestions for a member.
    Recommendations {
        /// Member the suggestions are for.
        user: usize,
        /// Suggestions in discovery order.
        items: Vec<Recommendation>,
    },

    /// Outcome of the isolation scan.
    Isolated {
        /// Isolated members, or an explicit none.
        isolation: Isolation,
    },
}

/// Owns the network for the lifetime of one shell or command run.
#[derive(Debug, Clone)]
pub struct Session {
    graph: SocialGraph,
}

impl Session {
    /// Start a session over an empty network of `members` people.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `members` is zero or too large to store.
    pub fn new(members: usize) -> circles_graph::Result<Self> {
        Ok(Self {
            graph: SocialGraph::new(members)?,
        })
    }

    /// Number of members in the network.
    pub fn members(&self) -> usize {
        self.graph.size()
    }

    /// Read-only view of the underlying network.
    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    /// Run one request against the network.
    ///
    /// # Errors
    ///
    /// Propagates the engine's `InvalidArgument` unchanged. The network is
    /// not modified when an error is returned.
    pub fn handle(&mut self, request: Request) -> circles_graph::Result<Response> {
        tracing::debug!(?request, "Handling request");

        let response = match request {
            Request::AddFriendship { a, b, weight } => {
                let Friendship {
                    a,
                    b,
                    weight,
                    previous,
                } = self.graph.add_friendship(a, b, weight)?;
                Response::FriendshipAdded {
                    a,
                    b,
                    weight,
                    previous,
                }
            }
            Request::Display => Response::Network {
                rows: self.graph.to_rows(),
            },
            Request::ShortestPath { start, end } => {
                let route = self.graph.shortest_path(start, end)?;
                Response::Path {
                    start: self.graph.member(start)?,
                    end: self.graph.member(end)?,
                    route,
                }
            }
            Request::Recommend { user } => {
                let items = self.graph.recommend(user)?;
                Response::Recommendations {
                    user: self.graph.member(user)?,
                    items,
                }
            }
            Request::Isolated => Response::Isolated {
                isolation: self.graph.isolated(),
            },
        };

        Ok(response)
    }
}
