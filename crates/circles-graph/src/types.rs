//! Result types returned by the graph queries.

use serde::Serialize;

/// A shortest route between two members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Sum of the edge weights along `path`.
    pub distance: u64,

    /// Members visited, starting at the source and ending at the target.
    pub path: Vec<usize>,
}

impl Route {
    /// First member on the route.
    pub fn start(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Last member on the route.
    pub fn end(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Number of friendships traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A friendship as stored by [`SocialGraph::add_friendship`].
///
/// [`SocialGraph::add_friendship`]: crate::SocialGraph::add_friendship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Friendship {
    /// First member, as validated.
    pub a: usize,

    /// Second member, as validated.
    pub b: usize,

    /// Weight now stored for the pair.
    pub weight: u32,

    /// Weight that was replaced, or `None` if the pair were not yet friends.
    pub previous: Option<u32>,
}

/// A second-degree connection suggested to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The member being recommended.
    pub candidate: usize,

    /// The direct friend who links the requester to `candidate`.
    pub via: usize,
}

/// Outcome of scanning the network for members without friendships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "members", rename_all = "snake_case")]
pub enum Isolation {
    /// Every member has at least one friendship.
    None,

    /// Isolated members in ascending order. Never empty.
    Members(Vec<usize>),
}

impl Isolation {
    pub(crate) fn from_members(members: Vec<usize>) -> Self {
        if members.is_empty() {
            Self::None
        } else {
            Self::Members(members)
        }
    }

    /// Isolated members as a slice (empty for [`Isolation::None`]).
    pub fn members(&self) -> &[usize] {
        match self {
            Self::None => &[],
            Self::Members(members) => members,
        }
    }
}
