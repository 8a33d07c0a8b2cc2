//! Read-only queries over the network.
//!
//! - Shortest path (dense Dijkstra over the weight matrix)
//! - Isolated member scan
//! - Second-degree friend recommendations
//!
//! All three run in O(n²) for a network of n members. The matrix is dense
//! and small, so no heap or adjacency list is built.

use crate::error::Result;
use crate::network::SocialGraph;
use crate::types::{Isolation, Recommendation, Route};

impl SocialGraph {
    /// Find the lightest route from `start` to `end`.
    ///
    /// Returns `Ok(None)` when the two members are not connected. A query
    /// from a member to themselves yields a zero-distance, single-member
    /// route.
    ///
    /// # Algorithm
    ///
    /// Each round selects the unvisited member with the smallest known
    /// distance (lowest index on ties), marks it visited, and relaxes every
    /// unvisited friend through it. The search stops after `size()` rounds
    /// or as soon as every remaining member is unreachable. The route is
    /// rebuilt by following predecessor links back from `end`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either index is out of range.
    pub fn shortest_path(&self, start: i64, end: i64) -> Result<Option<Route>> {
        let start = self.member(start)?;
        let end = self.member(end)?;

        let matrix = self.matrix();
        let n = matrix.size();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        dist[start] = Some(0);

        for round in 0..n {
            let Some((current, current_dist)) = nearest_unvisited(&dist, &visited) else {
                tracing::trace!(round, "No reachable members remain");
                break;
            };
            visited[current] = true;

            for (next, &weight) in matrix.row(current).iter().enumerate() {
                if visited[next] || weight == 0 {
                    continue;
                }
                let candidate = current_dist + u64::from(weight);
                if dist[next].is_none_or(|known| candidate < known) {
                    dist[next] = Some(candidate);
                    prev[next] = Some(current);
                }
            }
        }

        let Some(distance) = dist[end] else {
            tracing::debug!(start, end, "No path between members");
            return Ok(None);
        };

        let mut path = Vec::new();
        let mut cursor = Some(end);
        while let Some(member) = cursor {
            path.push(member);
            cursor = prev[member];
        }
        path.reverse();

        tracing::debug!(start, end, distance, hops = path.len() - 1, "Found shortest path");
        Ok(Some(Route { distance, path }))
    }

    /// Members with no friendships, in ascending order.
    pub fn isolated(&self) -> Isolation {
        let members = (0..self.size())
            .filter(|&member| self.friends_of(member).next().is_none())
            .collect();
        Isolation::from_members(members)
    }

    /// Suggest friends-of-friends for `user`.
    ///
    /// For each direct friend (ascending), every friend of theirs who is
    /// neither `user` nor already a direct friend of `user` is emitted,
    /// tagged with the friend who introduced them. Candidates reachable
    /// through several friends appear once per introducing friend.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `user` is out of range.
    pub fn recommend(&self, user: i64) -> Result<Vec<Recommendation>> {
        let user = self.member(user)?;
        let is_friend: Vec<bool> = self.matrix().row(user).iter().map(|&w| w != 0).collect();

        let mut recommendations = Vec::new();
        for via in self.friends_of(user) {
            for candidate in self.friends_of(via) {
                if candidate != user && !is_friend[candidate] {
                    recommendations.push(Recommendation { candidate, via });
                }
            }
        }

        tracing::debug!(user, count = recommendations.len(), "Built recommendations");
        Ok(recommendations)
    }
}

/// Unvisited member with the smallest finite distance, lowest index first.
fn nearest_unvisited(dist: &[Option<u64>], visited: &[bool]) -> Option<(usize, u64)> {
    dist.iter()
        .zip(visited)
        .enumerate()
        .filter(|&(_, (_, &seen))| !seen)
        .filter_map(|(member, (&d, _))| d.map(|d| (member, d)))
        .min_by_key(|&(_, d)| d)
}
