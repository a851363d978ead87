//! Catalog module - the fixed, ordered set of shape templates
//!
//! Every catalog template lives on a 3x3 local grid. Order matters: the
//! weighted supply and the rotation exemption are defined over it.
//!
//! | Index | Name | Weight |
//! |-------|------|--------|
//! | 0 | dot | rare |
//! | 1 | block | rare |
//! | 2 | long_l | common |
//! | 3 | tee | common |
//! | 4 | domino | common |
//! | 5 | skew | common |
//! | 6 | corner | common |
//! | 7 | bar | common |
//! | 8 | pentomino | common |

use crate::shapes::Pattern;
use crate::types::{WeightClass, TEMPLATE_SIDE};

/// Immutable canonical shape pattern before any rotation is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeTemplate {
    name: &'static str,
    weight: WeightClass,
    pattern: Pattern,
}

impl ShapeTemplate {
    pub const fn new(name: &'static str, weight: WeightClass, pattern: Pattern) -> Self {
        Self {
            name,
            weight,
            pattern,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn weight_class(&self) -> WeightClass {
        self.weight
    }

    /// Unrotated pattern
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Rare templates (dot, full block) are rotation-invariant and are never rotated
    pub fn is_rotation_exempt(&self) -> bool {
        self.weight == WeightClass::Rare
    }
}

/// Number of catalog templates
pub const TEMPLATE_COUNT: usize = 9;

const S: u8 = TEMPLATE_SIDE;

/// The catalog, in canonical order
pub static TEMPLATES: [ShapeTemplate; TEMPLATE_COUNT] = [
    ShapeTemplate::new("dot", WeightClass::Rare, Pattern::from_cells(S, &[(1, 1)])),
    ShapeTemplate::new(
        "block",
        WeightClass::Rare,
        Pattern::from_cells(
            S,
            &[
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (1, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2),
            ],
        ),
    ),
    ShapeTemplate::new(
        "long_l",
        WeightClass::Common,
        Pattern::from_cells(S, &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
    ),
    ShapeTemplate::new(
        "tee",
        WeightClass::Common,
        Pattern::from_cells(S, &[(0, 0), (0, 1), (1, 1), (0, 2)]),
    ),
    ShapeTemplate::new(
        "domino",
        WeightClass::Common,
        Pattern::from_cells(S, &[(0, 1), (1, 1)]),
    ),
    ShapeTemplate::new(
        "skew",
        WeightClass::Common,
        Pattern::from_cells(S, &[(0, 0), (1, 0), (1, 1), (2, 1)]),
    ),
    ShapeTemplate::new(
        "corner",
        WeightClass::Common,
        Pattern::from_cells(S, &[(0, 1), (0, 2), (1, 2)]),
    ),
    ShapeTemplate::new(
        "bar",
        WeightClass::Common,
        Pattern::from_cells(S, &[(0, 1), (1, 1), (2, 1)]),
    ),
    ShapeTemplate::new(
        "pentomino",
        WeightClass::Common,
        Pattern::from_cells(S, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 1)]),
    ),
];

/// All templates in catalog order
pub fn templates() -> &'static [ShapeTemplate; TEMPLATE_COUNT] {
    &TEMPLATES
}

/// Template at a catalog index
pub fn template(index: usize) -> Option<&'static ShapeTemplate> {
    TEMPLATES.get(index)
}

/// Weight class of the template at a catalog index
pub fn weight_class(index: usize) -> Option<WeightClass> {
    template(index).map(ShapeTemplate::weight_class)
}

/// Look up a template by name
pub fn find(name: &str) -> Option<&'static ShapeTemplate> {
    TEMPLATES.iter().find(|t| t.name == name)
}
