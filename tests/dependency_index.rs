mod common;

use std::collections::HashSet;
use std::error::Error;

use cookdag::graph::{DependencyIndex, GraphDescription};
use cookdag_test_utils::RecipeBuilder;

type TestResult = Result<(), Box<dyn Error>>;

fn pairs(edges: &[(&str, &str)]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|(f, t)| (f.to_string(), t.to_string()))
        .collect()
}

#[test]
fn edges_invert_into_encounter_ordered_dependencies() -> TestResult {
    common::init_tracing();
    // Edges (A,B), (B,C), (A,C) mean: B depends on A; C depends on B and A.
    let index = DependencyIndex::from_edges(&pairs(&[("A", "B"), ("B", "C"), ("A", "C")]));

    assert_eq!(index.dependencies_of("B"), ["A".to_string()]);
    assert_eq!(
        index.dependencies_of("C"),
        ["B".to_string(), "A".to_string()]
    );
    Ok(())
}

#[test]
fn nodes_without_dependencies_are_absent() -> TestResult {
    common::init_tracing();
    let index = DependencyIndex::from_edges(&pairs(&[("A", "B")]));

    assert_eq!(index.len(), 1);
    let targets: Vec<&str> = index.targets().collect();
    assert_eq!(targets, vec!["B"]);
    // Consumers read absence as the empty list.
    assert!(index.dependencies_of("A").is_empty());
    assert!(index.dependencies_of("unknown").is_empty());
    Ok(())
}

#[test]
fn empty_edge_list_gives_empty_index() -> TestResult {
    common::init_tracing();
    let index = DependencyIndex::from_edges(&[]);
    assert!(index.is_empty());
    Ok(())
}

#[test]
fn index_values_are_declared_nodes() -> TestResult {
    common::init_tracing();
    let recipe = RecipeBuilder::new("Closure")
        .ingredient("flour")
        .ingredient("egg")
        .activity("mix")
        .activity("fry")
        .chain(&["flour", "mix", "fry"])
        .chain(&["egg", "mix"])
        .build();

    let desc = GraphDescription::from_recipe(&recipe);
    let index = DependencyIndex::from_edges(desc.edges());

    let declared: HashSet<&str> = recipe.node_ids().collect();
    for target in index.targets() {
        assert!(declared.contains(target));
        for dep in index.dependencies_of(target) {
            assert!(declared.contains(dep.as_str()));
        }
    }
    Ok(())
}

#[test]
fn index_serializes_to_a_json_object() -> TestResult {
    common::init_tracing();
    let index = DependencyIndex::from_edges(&pairs(&[("A", "B"), ("B", "C"), ("A", "C")]));

    let json = serde_json::to_string(&index)?;
    assert_eq!(json, r#"{"B":["A"],"C":["B","A"]}"#);
    Ok(())
}
