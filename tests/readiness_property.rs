use std::collections::BTreeSet;

use cookdag::graph::{classify, DependencyIndex, NodeClass};
use proptest::prelude::*;

const MAX_NODES: usize = 8;

fn node_name(i: usize) -> String {
    format!("n{i}")
}

// Strategy for a valid DAG edge list: node j may only point at node k > j,
// so cycles are impossible by construction.
fn dag_edges_strategy() -> impl Strategy<Value = (usize, Vec<(String, String)>)> {
    (2..=MAX_NODES).prop_flat_map(|num_nodes| {
        let edge_strat = proptest::collection::vec(
            (0..num_nodes, 0..num_nodes).prop_filter_map("self or backward edge", |(a, b)| {
                if a < b {
                    Some((node_name(a), node_name(b)))
                } else if b < a {
                    Some((node_name(b), node_name(a)))
                } else {
                    None
                }
            }),
            0..num_nodes * 2,
        );
        edge_strat.prop_map(move |edges| (num_nodes, edges))
    })
}

fn apply_toggles(toggles: &[usize], num_nodes: usize) -> BTreeSet<String> {
    let mut done = BTreeSet::new();
    for &t in toggles {
        let id = node_name(t % num_nodes);
        if !done.remove(&id) {
            done.insert(id);
        }
    }
    done
}

proptest! {
    // A node outside the done-set is Todo exactly when its dependency list
    // is a subset of the done-set.
    #[test]
    fn todo_iff_dependencies_are_done(
        (num_nodes, edges) in dag_edges_strategy(),
        toggles in proptest::collection::vec(0..MAX_NODES, 0..16),
    ) {
        let index = DependencyIndex::from_edges(&edges);
        let done = apply_toggles(&toggles, num_nodes);

        let ids: Vec<String> = (0..num_nodes).map(node_name).collect();
        for (id, class) in classify(&done, &index, ids.iter().map(|s| s.as_str())) {
            if done.contains(&id) {
                prop_assert_eq!(class, NodeClass::Done);
                continue;
            }
            let deps_done = index
                .dependencies_of(&id)
                .iter()
                .all(|dep| done.contains(dep));
            if deps_done {
                prop_assert_eq!(class, NodeClass::Todo);
            } else {
                prop_assert_eq!(class, NodeClass::Neutral);
            }
        }
    }

    // Classification is a pure function of the done-set: any toggle order
    // that reaches the same set yields the same classification, and
    // re-deriving from scratch matches the incremental history.
    #[test]
    fn rederivation_is_order_independent(
        (num_nodes, edges) in dag_edges_strategy(),
        toggles in proptest::collection::vec(0..MAX_NODES, 0..16),
    ) {
        let index = DependencyIndex::from_edges(&edges);
        let ids: Vec<String> = (0..num_nodes).map(node_name).collect();

        let forward = apply_toggles(&toggles, num_nodes);
        let mut reversed_toggles = toggles.clone();
        reversed_toggles.reverse();
        let reversed = apply_toggles(&reversed_toggles, num_nodes);

        // Toggle parity, not order, determines membership.
        prop_assert_eq!(&forward, &reversed);

        let from_history = classify(&forward, &index, ids.iter().map(|s| s.as_str()));
        let from_scratch = classify(
            &forward.iter().cloned().collect::<BTreeSet<String>>(),
            &index,
            ids.iter().map(|s| s.as_str()),
        );
        prop_assert_eq!(from_history, from_scratch);
    }
}
