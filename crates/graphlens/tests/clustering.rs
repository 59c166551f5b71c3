//! Integration tests for same-type clustering.

use graphlens::{
    DuplicatePolicy, GraphError, GraphIndex, IndexOptions, Link, Node, Snapshot, detect_clusters,
    detect_clusters_in,
};

fn ids(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(|n| n.id.as_str()).collect()
}

#[test]
fn reference_snapshot_clusters() {
    let nodes = vec![Node::new("a", "x"), Node::new("b", "x"), Node::new("c", "y")];
    let links = vec![
        Link::new("a", "b", "t").with_weight(2.0),
        Link::new("b", "c", "t").with_weight(3.0),
    ];

    let clustering = detect_clusters_in(&nodes, &links).unwrap();
    let by_id = clustering.by_id();

    assert_eq!(by_id.keys().copied().collect::<Vec<_>>(), [0, 1]);
    assert_eq!(ids(&by_id[&0]), ["a", "b"]);
    assert_eq!(ids(&by_id[&1]), ["c"]);
}

#[test]
fn isolated_nodes_become_singletons() {
    let nodes = vec![Node::new("a", "x"), Node::new("b", "x"), Node::new("c", "x")];
    let clustering = detect_clusters_in(&nodes, &[]).unwrap();

    assert_eq!(clustering.len(), 3);
    for (i, cluster) in clustering.clusters().iter().enumerate() {
        assert_eq!(cluster.cluster_id, i);
        assert!(cluster.is_singleton());
    }
}

#[test]
fn every_node_is_assigned_exactly_once() {
    let nodes = vec![
        Node::new("a", "x"),
        Node::new("b", "y"),
        Node::new("c", "x"),
        Node::new("d", "y"),
        Node::new("e", "x"),
    ];
    let links = vec![
        Link::new("a", "b", "t"),
        Link::new("b", "d", "t"),
        Link::new("c", "e", "t"),
        Link::new("a", "c", "t"),
    ];
    let index = GraphIndex::build(&nodes, &links).unwrap();
    let clustering = detect_clusters(&index).unwrap();

    let total: usize = clustering.clusters().iter().map(|c| c.len()).sum();
    assert_eq!(total, nodes.len());
    assert_eq!(clustering.assignment().len(), nodes.len());

    // x: a-c-e, y: b-d
    assert_eq!(clustering.len(), 2);
    assert_eq!(ids(clustering.members(0).unwrap()), ["a", "c", "e"]);
    assert_eq!(ids(clustering.members(1).unwrap()), ["b", "d"]);
    for cluster in clustering.clusters() {
        assert!(cluster.members.iter().all(|m| m.node_type == cluster.node_type));
    }
}

#[test]
fn dangling_and_self_links_do_not_merge_clusters() {
    let nodes = vec![Node::new("a", "x"), Node::new("b", "x")];
    let links = vec![
        Link::new("a", "a", "loop"),
        Link::new("a", "nowhere", "t"),
        Link::new("nowhere", "b", "t"),
    ];
    let index = GraphIndex::build(&nodes, &links).unwrap();
    let clustering = detect_clusters(&index).unwrap();

    assert_eq!(clustering.len(), 2);
    assert_eq!(index.warnings().len(), 3);
}

#[test]
fn link_direction_does_not_matter() {
    let nodes = vec![Node::new("a", "x"), Node::new("b", "x"), Node::new("c", "x")];
    let links = vec![Link::new("b", "a", "t"), Link::new("c", "b", "t")];
    let clustering = detect_clusters_in(&nodes, &links).unwrap();

    assert_eq!(clustering.len(), 1);
    assert_eq!(ids(clustering.members(0).unwrap()), ["a", "b", "c"]);
}

#[test]
fn empty_snapshot_is_an_error() {
    let err = detect_clusters_in(&[], &[]).unwrap_err();
    assert!(matches!(err, graphlens::Error::Graph(GraphError::EmptyGraph)));
}

#[test]
fn keep_first_policy_clusters_first_occurrence() {
    let nodes = vec![Node::new("a", "x"), Node::new("b", "x"), Node::new("a", "y")];
    let links = vec![Link::new("a", "b", "t")];
    let options = IndexOptions {
        duplicates: DuplicatePolicy::KeepFirst,
    };
    let index = GraphIndex::build_with(&nodes, &links, &options).unwrap();
    let clustering = detect_clusters(&index).unwrap();

    assert_eq!(clustering.len(), 1);
    assert_eq!(clustering.clusters()[0].node_type, "x");
}

#[test]
fn clusters_from_json_snapshot() {
    let snapshot = Snapshot::from_json_str(
        r#"{
            "nodes": [
                {"id": "alice", "type": "person"},
                {"id": "bob", "type": "person"},
                {"id": "acme", "type": "company"}
            ],
            "links": [
                {"source": "alice", "target": "bob", "type": "knows"},
                {"source": {"id": "bob"}, "target": {"id": "acme"}, "type": "works_at"}
            ]
        }"#,
    )
    .unwrap();

    let clustering = detect_clusters_in(&snapshot.nodes, &snapshot.links).unwrap();
    assert_eq!(clustering.cluster_of("alice"), Some(0));
    assert_eq!(clustering.cluster_of("bob"), Some(0));
    assert_eq!(clustering.cluster_of("acme"), Some(1));
}

#[test]
fn serialized_clustering_is_identical_across_runs() {
    let nodes: Vec<Node> = (0..12).map(|i| Node::new(format!("n{i}"), "x")).collect();
    let links = vec![Link::new("n3", "n7", "t"), Link::new("n10", "n1", "t")];

    let first = serde_json::to_string(&detect_clusters_in(&nodes, &links).unwrap()).unwrap();
    for _ in 0..20 {
        let again = serde_json::to_string(&detect_clusters_in(&nodes, &links).unwrap()).unwrap();
        assert_eq!(again, first);
    }

    let clustering = detect_clusters_in(&nodes, &links).unwrap();
    let keys: Vec<&String> = clustering.assignment().keys().collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}
