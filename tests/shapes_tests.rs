//! Shape tests - catalog patterns and the clockwise rotation transform

use gridblock::core::catalog::{find, template, weight_class, TEMPLATE_COUNT};
use gridblock::core::{templates, Pattern, Shape};
use gridblock::types::{ColorTag, Rotation, WeightClass};

fn cells(pattern: Pattern) -> Vec<(u8, u8)> {
    pattern.cells().collect()
}

// ============== Catalog Tests ==============

#[test]
fn test_long_l_orientations() {
    let long_l = find("long_l").unwrap().pattern();
    assert_eq!(cells(long_l), vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);

    // Clockwise: the foot becomes the top row, the stem the left column
    let east = long_l.rotated(Rotation::East);
    assert_eq!(cells(east), vec![(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)]);

    let south = long_l.rotated(Rotation::South);
    assert_eq!(cells(south), vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);

    let west = long_l.rotated(Rotation::West);
    assert_eq!(cells(west), vec![(2, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
}

#[test]
fn test_skew_orientations() {
    let skew = find("skew").unwrap().pattern();
    assert_eq!(cells(skew), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);

    let east = skew.rotated(Rotation::East);
    assert_eq!(cells(east), vec![(2, 0), (1, 1), (2, 1), (1, 2)]);
}

#[test]
fn test_domino_keeps_padding_when_rotated() {
    let domino = find("domino").unwrap().pattern();
    let east = domino.rotated(Rotation::East);
    assert_eq!(cells(east), vec![(1, 0), (1, 1)]);
    assert_eq!(east.min_occupied(), Some((1, 0)));
}

#[test]
fn test_rotate_four_times_round_trips() {
    for t in templates() {
        let p = t.pattern();
        let mut q = p;
        for _ in 0..4 {
            q = q.rotated_cw();
        }
        assert_eq!(q, p, "{}", t.name());
        assert_eq!(p.rotated(Rotation::South).rotated(Rotation::South), p, "{}", t.name());
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for t in templates() {
        for rotation in Rotation::ALL {
            assert_eq!(t.pattern().rotated(rotation).cell_count(), t.pattern().cell_count());
        }
    }
}

#[test]
fn test_weight_lookup() {
    assert_eq!(TEMPLATE_COUNT, 9);
    assert_eq!(template(0).map(|t| t.name()), Some("dot"));
    assert_eq!(weight_class(1), Some(WeightClass::Rare));
    assert_eq!(weight_class(8), Some(WeightClass::Common));
    assert_eq!(template(9), None);
}

// ============== Shape Tests ==============

#[test]
fn test_shape_rotate_cw_tracks_rotation() {
    let mut s = Shape::new(find("tee").unwrap(), Rotation::North, ColorTag::Green);
    let north = s.pattern();

    s.rotate_cw();
    assert_eq!(s.rotation(), Rotation::East);
    assert_eq!(s.pattern(), north.rotated_cw());

    s.rotate_cw();
    s.rotate_cw();
    s.rotate_cw();
    assert_eq!(s.rotation(), Rotation::North);
    assert_eq!(s.pattern(), north);
}

#[test]
fn test_shape_instances_do_not_share_patterns() {
    let template = find("corner").unwrap();
    let mut a = Shape::new(template, Rotation::North, ColorTag::Red);
    let b = a;

    a.rotate_cw();
    assert_ne!(a.pattern(), b.pattern());
    assert_eq!(b.pattern(), template.pattern());
    assert_eq!(a.template(), b.template());
}

#[test]
fn test_shape_created_rotated() {
    let s = Shape::new(find("bar").unwrap(), Rotation::West, ColorTag::Blue);
    assert_eq!(s.cells().collect::<Vec<_>>(), vec![(1, 0), (1, 1), (1, 2)]);
    assert_eq!(s.color(), ColorTag::Blue);
}
