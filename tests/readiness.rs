mod common;

use std::collections::BTreeSet;
use std::error::Error;

use cookdag::graph::{classify, classify_node, DependencyIndex, NodeClass};

type TestResult = Result<(), Box<dyn Error>>;

fn pairs(edges: &[(&str, &str)]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|(f, t)| (f.to_string(), t.to_string()))
        .collect()
}

fn done(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn nodes_without_dependencies_start_actionable() -> TestResult {
    common::init_tracing();
    let index = DependencyIndex::from_edges(&pairs(&[("A", "B")]));

    assert_eq!(classify_node(&done(&[]), &index, "A"), NodeClass::Todo);
    assert_eq!(classify_node(&done(&[]), &index, "B"), NodeClass::Neutral);
    Ok(())
}

#[test]
fn done_nodes_classify_as_done() -> TestResult {
    common::init_tracing();
    let index = DependencyIndex::from_edges(&pairs(&[("A", "B")]));

    assert_eq!(classify_node(&done(&["A"]), &index, "A"), NodeClass::Done);
    // Done wins even when dependencies are unfinished.
    assert_eq!(classify_node(&done(&["B"]), &index, "B"), NodeClass::Done);
    Ok(())
}

#[test]
fn worked_example_toggle_walkthrough() -> TestResult {
    common::init_tracing();
    let index = DependencyIndex::from_edges(&pairs(&[("A", "B"), ("B", "C"), ("A", "C")]));

    // With A done: B becomes actionable, C still waits on B.
    let with_a = done(&["A"]);
    assert_eq!(classify_node(&with_a, &index, "B"), NodeClass::Todo);
    assert_eq!(classify_node(&with_a, &index, "C"), NodeClass::Neutral);

    // Toggling B into the done-set makes C actionable.
    let with_ab = done(&["A", "B"]);
    assert_eq!(classify_node(&with_ab, &index, "C"), NodeClass::Todo);
    Ok(())
}

#[test]
fn toggling_off_reverts_downstream_readiness() -> TestResult {
    common::init_tracing();
    let index = DependencyIndex::from_edges(&pairs(&[("A", "B")]));

    let mut set = done(&["A"]);
    assert_eq!(classify_node(&set, &index, "B"), NodeClass::Todo);

    // Toggling A back out: B loses readiness again.
    set.remove("A");
    assert_eq!(classify_node(&set, &index, "B"), NodeClass::Neutral);
    Ok(())
}

#[test]
fn classify_covers_all_nodes_in_order() -> TestResult {
    common::init_tracing();
    let index = DependencyIndex::from_edges(&pairs(&[("A", "B"), ("B", "C"), ("A", "C")]));

    let classes = classify(&done(&["A"]), &index, ["A", "B", "C"]);
    assert_eq!(
        classes,
        vec![
            ("A".to_string(), NodeClass::Done),
            ("B".to_string(), NodeClass::Todo),
            ("C".to_string(), NodeClass::Neutral),
        ]
    );
    Ok(())
}
