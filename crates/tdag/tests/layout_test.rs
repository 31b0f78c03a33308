use serde_json::json;
use tdag::{Bounds, Error, LayoutConfig, Point, Tdag};

fn chain() -> Tdag {
    let mut t = Tdag::new();
    t.set_node("n0", 0.0, 50.0)
        .set_node("n1", 40.0, 90.0)
        .set_node("n2", 80.0, 130.0);
    t.set_edge("n0", "n1").unwrap();
    t.set_edge("n1", "n2").unwrap();
    t
}

#[test]
fn layout_on_an_empty_graph_is_a_no_op() {
    let mut t = Tdag::new();
    t.layout();
    assert_eq!(t.root(), None);
    assert!(t.nodes().is_empty());
    assert!(t.edges().is_empty());
    assert_eq!(t.bounds(), Bounds::default());
}

#[test]
fn two_nodes_joined_on_one_row() {
    let mut t = Tdag::new();
    t.set_node("a", 0.0, 10.0).set_node("b", 20.0, 30.0);
    t.set_edge("a", "b").unwrap();
    t.layout();

    assert_eq!(t.root(), Some("b"));
    assert_eq!(t.vertex("b").unwrap().y, 0);

    let a = t.vertex("a").unwrap();
    let path = t.edge("a", "b").unwrap();
    let y_center = a.y as f64 * 14.0 + 5.0;
    assert_eq!(path.points.first(), Some(&Point::new(10.0, y_center)));
    let end = path.points.last().unwrap().x;
    assert!(end == 20.0 || end == 30.0);
    assert_eq!(path.points, vec![Point::new(10.0, 5.0), Point::new(20.0, 5.0)]);
}

#[test]
fn node_boxes_preserve_declared_extents() {
    let mut t = chain();
    t.layout();

    for (id, x0, x1) in [("n0", 0.0, 50.0), ("n1", 40.0, 90.0), ("n2", 80.0, 130.0)] {
        let b = t.node(id).unwrap();
        assert_eq!((b.x0, b.x1), (x0, x1));
        assert_eq!(b.width, x1 - x0);
        assert_eq!(b.x1 - b.x0, b.width);
        assert_eq!(b.x, x0);
        assert_eq!(b.height, t.line_height());
    }
    assert_eq!(t.node("n0").unwrap().y, 28.0);
    assert!(t.node("missing").is_none());
}

#[test]
fn nodes_and_edges_follow_declaration_order() {
    let mut t = chain();
    t.layout();

    let ids: Vec<String> = t.nodes().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["n0", "n1", "n2"]);

    let ids: Vec<String> = t.edges().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["n0->n1", "n1->n2"]);
}

#[test]
fn chain_edges_route_through_their_bends() {
    let mut t = chain();
    t.layout();

    assert_eq!(
        t.edge("n1", "n2").unwrap().points,
        vec![
            Point::new(90.0, 19.0),
            Point::new(100.0, 19.0),
            Point::new(100.0, 10.0),
            Point::new(110.0, 10.0),
        ]
    );
    assert_eq!(
        t.edge("n0", "n1").unwrap().points,
        vec![
            Point::new(50.0, 33.0),
            Point::new(60.0, 33.0),
            Point::new(60.0, 24.0),
            Point::new(70.0, 24.0),
        ]
    );
}

#[test]
fn layout_is_idempotent() {
    let mut t = chain();
    t.set_node("side", 0.0, 20.0);
    t.set_edge("side", "n2").unwrap();

    t.layout();
    let nodes = t.nodes();
    let edges = t.edges();

    t.layout();
    assert_eq!(t.nodes(), nodes);
    assert_eq!(t.edges(), edges);
}

#[test]
fn unknown_endpoints_are_rejected_without_touching_the_graph() {
    let mut t = Tdag::new();
    t.set_node("a", 0.0, 10.0);

    let err = t.set_edge("a", "ghost").unwrap_err();
    assert!(matches!(err, Error::UnknownNode { ref id } if id == "ghost"));
    assert_eq!(err.to_string(), "unknown node `ghost`; edge ignored");

    let err = t.set_edge("ghost", "a").unwrap_err();
    assert!(matches!(err, Error::UnknownNode { ref id } if id == "ghost"));

    assert_eq!(t.edges().len(), 0);
    assert_eq!(t.edge_count(), 0);
    assert!(t.edge("a", "ghost").is_none());
}

#[test]
fn duplicate_edges_overwrite() {
    let mut t = Tdag::new();
    t.set_node("a", 0.0, 10.0).set_node("b", 20.0, 30.0);
    t.set_edge("a", "b").unwrap().set_edge("a", "b").unwrap();
    assert_eq!(t.edge_count(), 1);
}

#[test]
fn non_rendering_node_keeps_its_box_but_drops_its_edges() {
    let mut t = Tdag::new();
    t.set_node("a", 0.0, 10.0)
        .set_node_with_render("hidden", 20.0, 30.0, false)
        .set_node("c", 40.0, 50.0);
    t.set_edge("a", "hidden").unwrap();
    t.set_edge("hidden", "c").unwrap();
    t.layout();

    let b = t.node("hidden").unwrap();
    assert_eq!(b.height, t.line_height());
    assert_eq!(b.width, 10.0);

    for (src, dst) in [("a", "hidden"), ("hidden", "c")] {
        let path = t.edge(src, dst).unwrap();
        assert!(!path.render);
        assert!(path.points.is_empty());
    }
}

#[test]
fn redeclaring_a_node_keeps_its_row_until_the_next_layout() {
    let mut t = chain();
    t.layout();
    assert_eq!(t.vertex("n0").unwrap().y, 2);

    t.set_node_with_render("n0", 200.0, 260.0, false);
    let v = t.vertex("n0").unwrap();
    assert_eq!(v.y, 2);
    assert_eq!((v.x0, v.x1, v.render), (200.0, 260.0, false));
    assert_eq!(t.node_count(), 3);
    assert_eq!(t.edge_count(), 2);
}

#[test]
fn zero_gap_layout_still_routes_every_edge() {
    let mut t = chain();
    t.set_node("side", 0.0, 25.0);
    t.set_edge("side", "n2").unwrap();
    t.set_edge("side", "n1").unwrap();
    t.set_gap(0.0);
    t.layout();

    for e in t.edges() {
        let dst = t.vertex(&e.dst).unwrap();
        assert!(!e.points.is_empty());
        assert!(e.points.last().unwrap().x <= dst.x1);
    }
}

#[test]
fn spacing_constants_round_trip() {
    let mut t = Tdag::new();
    assert_eq!(*t.config(), LayoutConfig::default());
    assert_eq!((t.gap(), t.line_height(), t.line_space()), (20.0, 10.0, 4.0));

    t.set_gap(8.0).set_line_height(16.0).set_line_space(2.0);
    assert_eq!((t.gap(), t.line_height(), t.line_space()), (8.0, 16.0, 2.0));

    t.set_node("a", 0.0, 10.0);
    t.layout();
    assert_eq!(t.node("a").unwrap().height, 16.0);

    let t = Tdag::with_config(LayoutConfig {
        line_space: 6.0,
        ..Default::default()
    });
    assert_eq!(t.line_space(), 6.0);
}

#[test]
fn bounds_cover_the_laid_out_graph() {
    let mut t = chain();
    t.layout();
    assert_eq!(
        t.bounds(),
        Bounds {
            x: 0.0,
            y: 0.0,
            width: 130.0,
            height: 38.0,
        }
    );
}

#[test]
fn clear_resets_the_facade() {
    let mut t = chain();
    t.layout();
    t.clear();

    assert_eq!(t.root(), None);
    assert_eq!(t.node_count(), 0);
    assert!(!t.has_node("n0"));
}

#[test]
fn projections_serialize_for_renderers() {
    let mut t = Tdag::new();
    t.set_node("a", 0.0, 10.0).set_node("b", 20.0, 30.0);
    t.set_edge("a", "b").unwrap();
    t.layout();

    assert_eq!(
        serde_json::to_value(t.node("a").unwrap()).unwrap(),
        json!({
            "id": "a",
            "x": 0.0,
            "y": 0.0,
            "x0": 0.0,
            "x1": 10.0,
            "width": 10.0,
            "height": 10.0,
        })
    );
    assert_eq!(
        serde_json::to_value(t.edge("a", "b").unwrap()).unwrap(),
        json!({
            "id": "a->b",
            "src": "a",
            "dst": "b",
            "render": true,
            "points": [{"x": 10.0, "y": 5.0}, {"x": 20.0, "y": 5.0}],
        })
    );
}

#[test]
fn config_loads_from_partial_json() {
    let config = LayoutConfig::from_json(r#"{"gap": 8, "lineSpace": 2.5}"#).unwrap();
    assert_eq!(
        config,
        LayoutConfig {
            gap: 8.0,
            line_height: 10.0,
            line_space: 2.5,
        }
    );

    let err = LayoutConfig::from_json(r#"{"gap": "wide"}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));

    assert_eq!(
        serde_json::to_value(LayoutConfig::default()).unwrap(),
        json!({"gap": 20.0, "lineHeight": 10.0, "lineSpace": 4.0})
    );
}
