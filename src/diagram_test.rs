use super::*;
use crate::model::Shape;

const BLUE: Rgba = Rgba::rgb(4, 0, 255);
const RED: Rgba = Rgba::rgb(255, 0, 0);

fn blue_and_red() -> (Diagram, NodeKey, NodeKey) {
    let mut d = Diagram::new();
    let a = d.add_node(Node::placed(
        "blue",
        Point::new(200.0, 50.0),
        Shape::rectangle(100.0, 50.0, BLUE),
    ));
    let b = d.add_node(Node::placed("red", Point::new(50.0, 175.0), Shape::square(50.0, RED)));
    (d, a, b)
}

fn arrow_of(d: &Diagram, key: NodeKey) -> Arrow {
    *d.get(key).and_then(Node::arrow).unwrap()
}

// =============================================================
// add_node / connect
// =============================================================

#[test]
fn add_node_returns_keys_in_insertion_order() {
    let (d, a, b) = blue_and_red();
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(d.len(), 2);
    assert_eq!(d.get(a).unwrap().id, "blue");
}

#[test]
fn connect_captures_anchor_positions_at_call_time() {
    let (mut d, a, b) = blue_and_red();
    let c = d.connect(a, Anchor::Left, b, Anchor::Top).unwrap();
    let node = d.get(c).unwrap();
    assert_eq!(node.id, "blue->red");
    let arrow = arrow_of(&d, c);
    assert_eq!(arrow.from, Point::new(200.0, 75.0));
    assert_eq!(arrow.to, Point::new(75.0, 175.0));
    assert_eq!(
        arrow.from_attachment,
        Attachment::Anchored {
            node: a,
            anchor: Anchor::Left
        }
    );
    assert_eq!(
        arrow.to_attachment,
        Attachment::Anchored {
            node: b,
            anchor: Anchor::Top
        }
    );
}

#[test]
fn connect_appends_after_existing_nodes() {
    let (mut d, a, b) = blue_and_red();
    let c = d.connect(a, Anchor::Bottom, b, Anchor::Right).unwrap();
    assert_eq!(c.index(), 2);
    assert!(d.nodes()[2].is_edge());
}

#[test]
fn connect_rejects_connector_endpoints() {
    let (mut d, a, b) = blue_and_red();
    let c = d.connect(a, Anchor::Left, b, Anchor::Top).unwrap();
    assert_eq!(
        d.connect(c, Anchor::Top, a, Anchor::Top),
        Err(DiagramError::NoAnchors("blue->red".to_string()))
    );
    assert_eq!(d.len(), 3);
}

#[test]
fn connect_rejects_unknown_key() {
    let (mut d, a, _) = blue_and_red();
    assert_eq!(
        d.connect(a, Anchor::Left, NodeKey(42), Anchor::Top),
        Err(DiagramError::UnknownNode(NodeKey(42)))
    );
}

#[test]
fn seeded_arrow_binds_to_coincident_anchors() {
    let (mut d, a, b) = blue_and_red();
    let c = d.add_arrow("seed", Point::new(250.2, 100.0), Point::new(75.0, 175.0), RED);
    let arrow = arrow_of(&d, c);
    assert_eq!(
        arrow.from_attachment,
        Attachment::Anchored {
            node: a,
            anchor: Anchor::Bottom
        }
    );
    assert_eq!(
        arrow.to_attachment,
        Attachment::Anchored {
            node: b,
            anchor: Anchor::Top
        }
    );
}

#[test]
fn seeded_arrow_away_from_anchors_stays_free() {
    let (mut d, _, _) = blue_and_red();
    let c = d.add_arrow("loose", Point::new(251.0, 100.0), Point::new(500.0, 500.0), RED);
    let arrow = arrow_of(&d, c);
    assert_eq!(arrow.from_attachment, Attachment::Free);
    assert_eq!(arrow.to_attachment, Attachment::Free);
}

#[test]
fn arrow_seeded_before_its_target_binds_when_target_arrives() {
    let mut d = Diagram::new();
    let top = d.add_node(Node::placed("top", Point::new(50.0, 50.0), Shape::square(50.0, BLUE)));
    let c = d.add_arrow("top->bottom", Point::new(75.0, 100.0), Point::new(75.0, 150.0), RED);
    let bottom = d.add_node(Node::placed("bottom", Point::new(50.0, 150.0), Shape::square(50.0, RED)));

    let arrow = arrow_of(&d, c);
    assert_eq!(
        arrow.from_attachment,
        Attachment::Anchored {
            node: top,
            anchor: Anchor::Bottom
        }
    );
    assert_eq!(
        arrow.to_attachment,
        Attachment::Anchored {
            node: bottom,
            anchor: Anchor::Top
        }
    );

    assert!(d.move_node(bottom, Point::new(60.0, 155.0)));
    let arrow = arrow_of(&d, c);
    assert_eq!(arrow.from, Point::new(75.0, 100.0));
    assert_eq!(arrow.to, Point::new(85.0, 155.0));
}

#[test]
fn later_node_does_not_steal_bound_endpoint() {
    let (mut d, a, _) = blue_and_red();
    let c = d.add_arrow("seed", Point::new(250.0, 100.0), Point::new(500.0, 500.0), RED);
    // Bottom anchor at (250, 100), same as blue's bottom.
    d.add_node(Node::placed("twin", Point::new(225.0, 50.0), Shape::square(50.0, RED)));
    let arrow = arrow_of(&d, c);
    assert_eq!(
        arrow.from_attachment,
        Attachment::Anchored {
            node: a,
            anchor: Anchor::Bottom
        }
    );
    assert_eq!(arrow.to_attachment, Attachment::Free);
}

// =============================================================
// hit testing
// =============================================================

#[test]
fn hit_test_first_match_in_paint_order() {
    let mut d = Diagram::new();
    let under = d.add_node(Node::placed("under", Point::new(0.0, 0.0), Shape::square(100.0, RED)));
    let _over = d.add_node(Node::placed("over", Point::new(50.0, 50.0), Shape::square(100.0, BLUE)));
    assert_eq!(d.hit_test_draggable(Point::new(75.0, 75.0)), Some(under));
}

#[test]
fn hit_test_misses_empty_space() {
    let (d, _, _) = blue_and_red();
    assert_eq!(d.hit_test(Point::new(500.0, 500.0), 6.0), None);
    assert_eq!(d.hit_test_draggable(Point::new(500.0, 500.0)), None);
}

#[test]
fn draggable_hit_test_skips_connectors() {
    let mut d = Diagram::new();
    let c = d.add_arrow("edge", Point::new(0.0, 0.0), Point::new(100.0, 0.0), RED);
    let n = d.add_node(Node::placed("box", Point::new(40.0, -10.0), Shape::square(20.0, RED)));
    let p = Point::new(50.0, 0.0);
    assert_eq!(d.hit_test(p, 6.0), Some(c));
    assert_eq!(d.hit_test_draggable(p), Some(n));
}

#[test]
fn anchor_at_finds_nearest_slot_within_radius() {
    let (d, a, b) = blue_and_red();
    assert_eq!(d.anchor_at(Point::new(205.0, 80.0), 12.0), Some((a, Anchor::Left)));
    assert_eq!(d.anchor_at(Point::new(75.0, 170.0), 12.0), Some((b, Anchor::Top)));
    assert_eq!(d.anchor_at(Point::new(250.0, 75.0), 12.0), None);
}

#[test]
fn anchor_at_ignores_connectors() {
    let mut d = Diagram::new();
    d.add_arrow("edge", Point::new(0.0, 0.0), Point::new(100.0, 0.0), RED);
    assert_eq!(d.anchor_at(Point::new(0.0, 0.0), 12.0), None);
}

// =============================================================
// move_node
// =============================================================

#[test]
fn moving_node_translates_attached_endpoints_only() {
    let mut d = Diagram::new();
    let a = d.add_node(Node::placed("a", Point::new(0.0, 0.0), Shape::square(40.0, RED)));
    let b = d.add_node(Node::placed("b", Point::new(100.0, 100.0), Shape::square(40.0, RED)));
    let attached = d.connect(a, Anchor::Bottom, b, Anchor::Top).unwrap();
    let loose = d.add_arrow("loose", Point::new(20.0, 45.0), Point::new(300.0, 300.0), RED);

    assert!(d.move_node(a, Point::new(10.0, 5.0)));

    let arrow = arrow_of(&d, attached);
    assert_eq!(arrow.from, Point::new(30.0, 45.0));
    assert_eq!(arrow.to, Point::new(120.0, 100.0));
    let loose = arrow_of(&d, loose);
    assert_eq!(loose.from, Point::new(20.0, 45.0));
    assert_eq!(loose.to, Point::new(300.0, 300.0));
}

#[test]
fn moving_destination_moves_arrow_head() {
    let (mut d, a, b) = blue_and_red();
    let c = d.connect(a, Anchor::Left, b, Anchor::Top).unwrap();
    assert!(d.move_node(b, Point::new(60.0, 200.0)));
    let arrow = arrow_of(&d, c);
    assert_eq!(arrow.from, Point::new(200.0, 75.0));
    assert_eq!(arrow.to, Point::new(85.0, 200.0));
    assert_eq!(d.anchor_position(b, Anchor::Top).unwrap(), arrow.to);
}

#[test]
fn stationary_neighbour_keeps_its_connector() {
    let mut d = Diagram::new();
    let a = d.add_node(Node::placed("a", Point::new(0.0, 0.0), Shape::square(40.0, RED)));
    let b = d.add_node(Node::placed("b", Point::new(0.0, 40.0), Shape::square(40.0, RED)));
    let c = d.add_node(Node::placed("c", Point::new(200.0, 0.0), Shape::square(40.0, RED)));
    // b's top anchor coincides with a's bottom anchor; the connector belongs to b.
    let edge = d.connect(b, Anchor::Top, c, Anchor::Left).unwrap();
    assert!(d.move_node(a, Point::new(-50.0, 0.0)));
    assert_eq!(arrow_of(&d, edge).from, Point::new(20.0, 40.0));
}

#[test]
fn connectors_cannot_be_moved() {
    let mut d = Diagram::new();
    let c = d.add_arrow("edge", Point::new(0.0, 0.0), Point::new(10.0, 0.0), RED);
    assert!(!d.move_node(c, Point::new(5.0, 5.0)));
    assert!(!d.move_node(NodeKey(9), Point::new(5.0, 5.0)));
}
