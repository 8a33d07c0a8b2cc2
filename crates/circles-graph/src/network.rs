//! The social network and its mutation operations.

use crate::error::{InvalidArgument, Result};
use crate::matrix::WeightMatrix;
use crate::types::Friendship;

/// Largest member count whose weight matrix can be addressed in memory.
///
/// The matrix holds `members * members` cells of four bytes each, and a
/// single allocation cannot exceed `isize::MAX` bytes.
pub const MAX_MEMBERS: usize = (isize::MAX.unsigned_abs() / size_of::<u32>()).isqrt();

/// A fixed-size social network stored as a symmetric weight matrix.
///
/// Members are identified by index `0..size()`. The member count is set at
/// construction and never changes. A weight of `0` means two members are
/// not friends; any positive weight is the cost of the friendship.
///
/// Indices and weights are accepted as signed integers, exactly as a shell
/// reads them, and validated here. Rejected calls never modify the network.
///
/// # Example
///
/// ```
/// use circles_graph::SocialGraph;
///
/// let mut graph = SocialGraph::new(3)?;
/// graph.add_friendship(0, 1, 4)?;
/// graph.add_friendship(1, 2, 3)?;
/// graph.add_friendship(0, 2, 10)?;
///
/// let route = graph.shortest_path(0, 2)?.expect("0 and 2 are connected");
/// assert_eq!(route.distance, 7);
/// assert_eq!(route.path, vec![0, 1, 2]);
/// # Ok::<(), circles_graph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialGraph {
    matrix: WeightMatrix,
}

impl SocialGraph {
    /// Create a network of `members` people with no friendships.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::EmptyNetwork` if `members` is zero and
    /// `InvalidArgument::NetworkTooLarge` if it exceeds [`MAX_MEMBERS`].
    pub fn new(members: usize) -> Result<Self> {
        if members == 0 {
            return Err(InvalidArgument::EmptyNetwork.into());
        }
        if members > MAX_MEMBERS {
            return Err(InvalidArgument::NetworkTooLarge {
                members,
                max: MAX_MEMBERS,
            }
            .into());
        }

        tracing::debug!(members, "Allocating social network");
        Ok(Self {
            matrix: WeightMatrix::zeroed(members),
        })
    }

    /// Number of members in the network.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Record a friendship between `a` and `b` with the given weight.
    ///
    /// Any existing weight between the pair is replaced. Returns the stored
    /// friendship with validated indices and the weight it replaced, if any.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either index is outside `0..size()`, if
    /// `a == b`, or if `weight` is not in `1..=u32::MAX`.
    pub fn add_friendship(&mut self, a: i64, b: i64, weight: i64) -> Result<Friendship> {
        let a = self.member(a)?;
        let b = self.member(b)?;
        if a == b {
            return Err(InvalidArgument::SelfFriendship(a).into());
        }
        let weight = u32::try_from(weight)
            .ok()
            .filter(|&w| w > 0)
            .ok_or(InvalidArgument::WeightOutOfRange {
                weight,
                max: u32::MAX,
            })?;

        let previous = match self.matrix.set_symmetric(a, b, weight) {
            0 => {
                tracing::debug!(a, b, weight, "Added friendship");
                None
            }
            previous => {
                tracing::debug!(a, b, weight, previous, "Replaced friendship weight");
                Some(previous)
            }
        };

        Ok(Friendship {
            a,
            b,
            weight,
            previous,
        })
    }

    /// Weight of the friendship between `a` and `b` (`0` if none).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either index is out of range.
    pub fn weight(&self, a: i64, b: i64) -> Result<u32> {
        let a = self.member(a)?;
        let b = self.member(b)?;
        Ok(self.matrix.get(a, b))
    }

    /// Direct friends of `user`, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `user` is out of range.
    pub fn friends(&self, user: i64) -> Result<Vec<usize>> {
        let user = self.member(user)?;
        Ok(self.friends_of(user).collect())
    }

    /// Number of friendships `user` has.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `user` is out of range.
    pub fn degree(&self, user: i64) -> Result<usize> {
        let user = self.member(user)?;
        Ok(self.friends_of(user).count())
    }

    /// Rows of the weight matrix in member order.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.matrix.rows()
    }

    /// Owned copy of the weight matrix, one `Vec` per member.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Validate a caller-supplied member index.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::MemberOutOfRange` if `raw` is negative or
    /// not below `size()`.
    pub fn member(&self, raw: i64) -> Result<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|&m| m < self.size())
            .ok_or_else(|| {
                InvalidArgument::MemberOutOfRange {
                    member: raw,
                    size: self.size(),
                }
                .into()
            })
    }

    pub(crate) fn friends_of(&self, user: usize) -> impl Iterator<Item = usize> + '_ {
        self.matrix
            .row(user)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(j, _)| j)
    }

    pub(crate) fn matrix(&self) -> &WeightMatrix {
        &self.matrix
    }
}
