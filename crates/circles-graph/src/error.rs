//! Error types for circles-graph operations.

use thiserror::Error;

/// The error type for graph engine operations.
///
/// The engine has a single failure kind. Every operation that returns it
/// leaves the network exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index or weight supplied by the caller was not acceptable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// The reason an argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A network needs at least one member.
    #[error("a network must have at least one member")]
    EmptyNetwork,

    /// The weight matrix for this many members cannot be addressed.
    #[error("a network of {members} members is too large (at most {max} are supported)")]
    NetworkTooLarge {
        /// Requested member count.
        members: usize,
        /// Largest supported member count.
        max: usize,
    },

    /// Member index outside `0..size`.
    #[error("member {member} is out of range (valid members are 0 to {})", .size.saturating_sub(1))]
    MemberOutOfRange {
        /// The index as supplied by the caller.
        member: i64,
        /// Number of members in the network.
        size: usize,
    },

    /// Weight was zero, negative, or too large to store.
    #[error("weight must be between 1 and {max}, got {weight}")]
    WeightOutOfRange {
        /// The weight as supplied by the caller.
        weight: i64,
        /// Largest storable weight.
        max: u32,
    },

    /// Both ends of a friendship were the same member.
    #[error("member {0} cannot befriend themselves")]
    SelfFriendship(usize),
}

/// A specialized Result type for circles-graph operations.
pub type Result<T> = std::result::Result<T, Error>;
