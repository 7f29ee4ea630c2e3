use codescope_core::{
    CategoryFilter, ComponentKind, ComponentNode, Layer, Relationship, RelationshipKind, ViewConfig,
    ViewMode,
};
use codescope_viz::{project, GraphSummary};
use proptest::prelude::*;
use std::collections::HashSet;

fn kind() -> impl Strategy<Value = ComponentKind> {
    prop_oneof![
        Just(ComponentKind::Class),
        Just(ComponentKind::Function),
        Just(ComponentKind::Module),
        Just(ComponentKind::Service),
        Just(ComponentKind::Component),
        Just(ComponentKind::Config),
        Just(ComponentKind::Unknown),
    ]
}

fn layer() -> impl Strategy<Value = Layer> {
    prop_oneof![
        Just(Layer::Presentation),
        Just(Layer::Business),
        Just(Layer::Data),
        Just(Layer::Infrastructure),
        Just(Layer::External),
        Just(Layer::Unknown),
    ]
}

fn relationship_kind() -> impl Strategy<Value = RelationshipKind> {
    prop_oneof![
        Just(RelationshipKind::Imports),
        Just(RelationshipKind::Calls),
        Just(RelationshipKind::Extends),
        Just(RelationshipKind::Implements),
        Just(RelationshipKind::Uses),
        Just(RelationshipKind::Configures),
        Just(RelationshipKind::Unknown),
    ]
}

fn model() -> impl Strategy<Value = (Vec<ComponentNode>, Vec<Relationship>)> {
    prop::collection::vec(
        (
            "[a-zA-Z]{1,8}",
            kind(),
            layer(),
            "[a-z]{1,4}\\.(ts|tsx|py|rs|go|md)",
            0u64..500,
            0.0f64..20.0,
        ),
        0..20,
    )
    .prop_flat_map(|entries| {
        let components: Vec<ComponentNode> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, kind, layer, file, lines, complexity))| {
                ComponentNode::new(format!("c{i}"), name, kind, layer, file)
                    .with_metrics(lines, complexity)
            })
            .collect();
        let count = components.len().max(1);
        let edge = (0..count, 0..count, relationship_kind(), 0.1f64..4.0);
        let relationships = prop::collection::vec(edge, 0..30).prop_map(|edges| {
            edges
                .into_iter()
                .map(|(from, to, kind, weight)| {
                    Relationship::new(format!("c{from}"), format!("c{to}"), kind, weight)
                })
                .collect::<Vec<_>>()
        });
        (Just(components), relationships)
    })
    .prop_map(|(components, relationships)| {
        // Relationships only reference listed components.
        let ids: HashSet<String> = components.iter().map(|c| c.id.clone()).collect();
        let relationships = relationships
            .into_iter()
            .filter(|r| ids.contains(&r.from) && ids.contains(&r.to))
            .collect();
        (components, relationships)
    })
}

fn config() -> impl Strategy<Value = ViewConfig> {
    (
        prop::sample::select(CategoryFilter::all()),
        prop_oneof![Just(String::new()), "[a-zA-Z]{1,2}"],
        prop::sample::select(vec![
            ViewMode::Dependencies,
            ViewMode::Components,
            ViewMode::Layers,
            ViewMode::Files,
        ]),
        any::<bool>(),
    )
        .prop_map(|(category, search, mode, labels)| {
            ViewConfig::default()
                .with_category(category)
                .with_search(search)
                .with_view_mode(mode)
                .with_labels(labels)
        })
}

proptest! {
    #[test]
    fn edges_only_reference_projected_nodes(
        (components, relationships) in model(),
        config in config(),
    ) {
        let graph = project(&components, &relationships, &config);
        let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id()).collect();
        for edge in &graph.edges {
            prop_assert!(ids.contains(edge.relationship.from.as_str()));
            prop_assert!(ids.contains(edge.relationship.to.as_str()));
        }
    }

    #[test]
    fn category_filter_narrows_the_unfiltered_view(
        (components, relationships) in model(),
        config in config(),
    ) {
        let filtered = project(&components, &relationships, &config);
        let all = config.clone().with_category(CategoryFilter::All);
        let unfiltered = project(&components, &relationships, &all);
        let all_ids: HashSet<&str> = unfiltered.nodes.iter().map(|n| n.id()).collect();
        for node in &filtered.nodes {
            prop_assert!(all_ids.contains(node.id()));
        }
    }

    #[test]
    fn projection_is_idempotent((components, relationships) in model(), config in config()) {
        let first = project(&components, &relationships, &config);
        let second = project(&components, &relationships, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn widths_and_radii_stay_in_range((components, relationships) in model(), config in config()) {
        let graph = project(&components, &relationships, &config);
        for node in &graph.nodes {
            prop_assert!(node.radius >= 20.0 && node.radius <= 37.5);
            if !config.show_labels {
                prop_assert!(node.display_label.is_empty());
            }
        }
        for edge in &graph.edges {
            prop_assert!(edge.stroke_width >= 1.0 && edge.stroke_width <= 5.0);
        }
    }
}

#[test]
fn typescript_filter_drops_python_component_and_edge() {
    let components = vec![
        ComponentNode::new("A", "A", ComponentKind::Module, Layer::Business, "x.ts"),
        ComponentNode::new("B", "B", ComponentKind::Module, Layer::Business, "y.py"),
    ];
    let relationships = vec![Relationship::new("A", "B", RelationshipKind::Imports, 1.0)];

    let graph = project(
        &components,
        &relationships,
        &ViewConfig::default().with_category(CategoryFilter::TypeScript),
    );

    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["A"]);
    assert!(graph.edges.is_empty());
}

#[test]
fn hidden_labels_blank_every_label() {
    let components = vec![
        ComponentNode::new("A", "Alpha", ComponentKind::Class, Layer::Data, "a.rs")
            .with_metrics(300, 12.0),
        ComponentNode::new("B", "Beta", ComponentKind::Config, Layer::External, "b.rs"),
    ];
    let labelled = project(&components, &[], &ViewConfig::default());
    let unlabelled = project(&components, &[], &ViewConfig::default().with_labels(false));

    for (with, without) in labelled.nodes.iter().zip(&unlabelled.nodes) {
        assert_eq!(without.display_label, "");
        assert_eq!(with.fill_color, without.fill_color);
        assert_eq!(with.radius, without.radius);
        assert_eq!(with.shape, without.shape);
    }
}

#[test]
fn model_json_to_summary() {
    let json = r#"{
        "components": [
            {"id": "api", "name": "ApiRouter", "kind": "module", "layer": "presentation", "file": "src/api.ts", "lineCount": 90, "complexityScore": 4},
            {"id": "svc", "name": "OrderService", "kind": "service", "layer": "business", "file": "src/orders.ts", "lineCount": 300, "complexityScore": 12},
            {"id": "cfg", "name": "settings", "kind": "config", "layer": "infrastructure", "file": "settings.yaml"}
        ],
        "relationships": [
            {"from": "api", "to": "svc", "kind": "calls", "weight": 2},
            {"from": "svc", "to": "cfg", "kind": "configures"}
        ]
    }"#;
    let model = codescope_core::ArchitectureModel::from_json_str(json).unwrap();

    let graph = project(
        &model.components,
        &model.relationships,
        &ViewConfig::default().with_category(CategoryFilter::TypeScript),
    );
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].relationship.id, "api->svc");

    let summary = GraphSummary::of(&graph);
    assert_eq!(summary.node_count, 2);
    assert_eq!(summary.total_lines, 390);
    assert!((summary.average_complexity - 8.0).abs() < 1e-9);
}
