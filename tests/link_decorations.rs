//! End-to-end checks of the link geometry a renderer consumes: vector,
//! midpoint, cardinality label positions and the diamond decoration,
//! computed together the way the association draw path does.

use oglru::link::{
    LinkVector, destination_cardinality_position, diamond_polygon, diamond_polygon_with_size,
    midpoint, source_cardinality_position,
};
use oglru::{GeometryError, Point};

#[test]
fn association_draw_quantities() {
    let src = Point::new(100, 100);
    let dst = Point::new(400, 500);
    let link = LinkVector::between(src, dst).unwrap();

    // 3-4-5 triangle: length is exact
    assert_eq!(link.length, 500.0);
    assert_eq!((link.dx, link.dy), (300.0, 400.0));

    let center = midpoint(src, dst);
    assert_eq!(center, Point::new(250, 300));

    // labels sit between their anchor and the midpoint
    let src_label = source_cardinality_position(src, &link);
    let dst_label = destination_cardinality_position(dst, &link);
    assert_eq!(src_label, Point::new(109, 120));
    assert_eq!(dst_label, Point::new(391, 480));
}

#[test]
fn coincident_anchors_skip_label_placement() {
    let p = Point::new(250, 250);
    match LinkVector::between(p, p) {
        Err(GeometryError::DegenerateLink) => {}
        other => panic!("expected DegenerateLink, got {other:?}"),
    }
}

#[test]
fn diamond_matches_reference_fixture() {
    let segments = [
        Point::new(547, 172),
        Point::new(722, 173),
        Point::new(723, 300),
    ];
    let diamond = diamond_polygon(&segments).unwrap();

    insta::assert_debug_snapshot!(diamond, @r"
    DiamondPolygon(
        [
            Point {
                x: 553,
                y: 176,
            },
            Point {
                x: 547,
                y: 172,
            },
            Point {
                x: 553,
                y: 169,
            },
            Point {
                x: 561,
                y: 172,
            },
        ],
    )
    ");
}

#[test]
fn diamond_scales_with_configured_size() {
    let segments = [Point::new(0, 0), Point::new(-100, 0)];

    let small = diamond_polygon_with_size(&segments, 7.0).unwrap();
    let large = diamond_polygon_with_size(&segments, 14.0).unwrap();

    // apex is size-independent; the far tip sits at twice the size
    assert_eq!(small.apex(), large.apex());
    assert_eq!(small.points()[3], Point::new(-14, 0));
    assert_eq!(large.points()[3], Point::new(-28, 0));
}

#[test]
fn diamond_only_consults_the_terminal_segment() {
    let short = [Point::new(505, 243), Point::new(506, 425)];
    let long = [
        Point::new(505, 243),
        Point::new(506, 425),
        Point::new(900, 425),
        Point::new(900, 0),
    ];

    assert_eq!(
        diamond_polygon(&short).unwrap(),
        diamond_polygon(&long).unwrap()
    );
}
