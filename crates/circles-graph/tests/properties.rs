//! Property tests for matrix invariants and query results.
//!
//! Shortest paths are checked against petgraph's Dijkstra on the same
//! friendships, so the engine is compared with an independent implementation
//! rather than with itself.

use circles_graph::SocialGraph;
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

/// A member count and a list of friendship insertions over it.
fn network() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..9).prop_flat_map(|members| {
        let edge = (0..members, 0..members, 1u32..50);
        (Just(members), prop::collection::vec(edge, 0..24))
    })
}

fn build(members: usize, edges: &[(usize, usize, u32)]) -> SocialGraph {
    let mut graph = SocialGraph::new(members).unwrap();
    for &(a, b, w) in edges {
        if a != b {
            graph
                .add_friendship(a as i64, b as i64, i64::from(w))
                .unwrap();
        }
    }
    graph
}

/// Mirror the final matrix (after overwrites) into a petgraph graph.
fn oracle(graph: &SocialGraph) -> UnGraph<(), u32> {
    let mut oracle = UnGraph::new_undirected();
    let nodes: Vec<NodeIndex> = (0..graph.size()).map(|_| oracle.add_node(())).collect();
    for (i, row) in graph.rows().enumerate() {
        for (j, &w) in row.iter().enumerate().skip(i + 1) {
            if w != 0 {
                oracle.add_edge(nodes[i], nodes[j], w);
            }
        }
    }
    oracle
}

proptest! {
    #[test]
    fn matrix_stays_symmetric((members, edges) in network()) {
        let graph = build(members, &edges);
        let rows = graph.to_rows();
        for i in 0..members {
            prop_assert_eq!(rows[i][i], 0);
            for j in 0..members {
                prop_assert_eq!(rows[i][j], rows[j][i]);
            }
        }
    }

    #[test]
    fn last_insertion_wins((members, edges) in network()) {
        let graph = build(members, &edges);
        for &(a, b, w) in &edges {
            if a == b {
                continue;
            }
            let last = edges
                .iter()
                .rev()
                .find(|&&(x, y, _)| (x, y) == (a, b) || (x, y) == (b, a))
                .map(|&(_, _, w)| w)
                .unwrap_or(w);
            prop_assert_eq!(graph.weight(a as i64, b as i64).unwrap(), last);
        }
    }

    #[test]
    fn shortest_distances_match_petgraph((members, edges) in network(), start in 0usize..9) {
        let graph = build(members, &edges);
        let start = start % members;
        let reference = dijkstra(&oracle(&graph), NodeIndex::new(start), None, |e| {
            u64::from(*e.weight())
        });

        for end in 0..members {
            let route = graph.shortest_path(start as i64, end as i64).unwrap();
            let expected = reference.get(&NodeIndex::new(end)).copied();
            prop_assert_eq!(route.as_ref().map(|r| r.distance), expected);
        }
    }

    #[test]
    fn routes_walk_existing_friendships((members, edges) in network(), start in 0usize..9, end in 0usize..9) {
        let graph = build(members, &edges);
        let (start, end) = (start % members, end % members);

        if let Some(route) = graph.shortest_path(start as i64, end as i64).unwrap() {
            prop_assert_eq!(route.start(), Some(start));
            prop_assert_eq!(route.end(), Some(end));

            let mut total = 0u64;
            for pair in route.path.windows(2) {
                let w = graph.weight(pair[0] as i64, pair[1] as i64).unwrap();
                prop_assert!(w > 0, "route uses missing friendship {:?}", pair);
                total += u64::from(w);
            }
            prop_assert_eq!(total, route.distance);
        }
    }

    #[test]
    fn isolated_members_are_exactly_zero_degree((members, edges) in network()) {
        let graph = build(members, &edges);
        let expected: Vec<usize> = (0..members)
            .filter(|&m| graph.degree(m as i64).unwrap() == 0)
            .collect();
        let isolated = graph.isolated();
        prop_assert_eq!(isolated.members(), expected.as_slice());
    }

    #[test]
    fn recommendations_are_two_hop_strangers((members, edges) in network(), user in 0usize..9) {
        let graph = build(members, &edges);
        let user = user % members;
        let friends = graph.friends(user as i64).unwrap();
        let recs = graph.recommend(user as i64).unwrap();

        for rec in &recs {
            prop_assert_ne!(rec.candidate, user);
            prop_assert!(friends.contains(&rec.via));
            prop_assert!(!friends.contains(&rec.candidate));
            prop_assert!(graph.weight(rec.via as i64, rec.candidate as i64).unwrap() > 0);
        }

        let expected_count: usize = friends
            .iter()
            .map(|&f| {
                graph
                    .friends(f as i64)
                    .unwrap()
                    .into_iter()
                    .filter(|&p| p != user && !friends.contains(&p))
                    .count()
            })
            .sum();
        prop_assert_eq!(recs.len(), expected_count);
    }

    #[test]
    fn rejected_calls_leave_network_unchanged((members, edges) in network(), offset in 0i64..5) {
        let mut graph = build(members, &edges);
        let before = graph.clone();
        let past_end = members as i64 + offset;

        prop_assert!(graph.add_friendship(past_end, 0, 1).is_err());
        prop_assert!(graph.add_friendship(0, -1 - offset, 1).is_err());
        prop_assert!(graph.add_friendship(0, 0, -offset).is_err());
        prop_assert!(graph.shortest_path(0, past_end).is_err());
        prop_assert!(graph.recommend(past_end).is_err());
        prop_assert_eq!(graph, before);
    }
}
