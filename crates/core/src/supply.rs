//! Supply module - weighted random tray generation
//!
//! Each draw samples uniformly from a multiset of catalog indices where rare
//! templates appear once and common templates four times (30 entries for the
//! standard catalog). Common templates get a uniformly random orientation,
//! rare ones stay unrotated, and every shape gets an independent random color.
//!
//! Live play seeds from OS entropy; seeded construction is
//! available for reproducible tests and replays.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{templates, TEMPLATE_COUNT};
use crate::shapes::Shape;
use crate::types::{ColorTag, Rotation, COMMON_WEIGHT, TRAY_SIZE};

const MAX_WEIGHTED: usize = TEMPLATE_COUNT * COMMON_WEIGHT as usize;

/// The shapes currently offered to the player
///
/// Slots are stable: placing a shape empties its slot without shifting the
/// others. A tray is only replaced once every slot is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tray {
    slots: [Option<Shape>; TRAY_SIZE],
}

impl Tray {
    pub fn new(shapes: [Shape; TRAY_SIZE]) -> Self {
        Self {
            slots: shapes.map(Some),
        }
    }

    /// Shape in a slot, if the slot exists and is filled
    pub fn get(&self, slot: usize) -> Option<&Shape> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Remove and return the shape in a slot
    pub fn take(&mut self, slot: usize) -> Option<Shape> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Filled slots with their indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Shape)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|shape| (i, shape)))
    }

    pub fn slots(&self) -> &[Option<Shape>; TRAY_SIZE] {
        &self.slots
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Anything that can hand the session a fresh tray
pub trait TraySource {
    fn next_tray(&mut self) -> Tray;
}

/// Weighted random shape generator
#[derive(Debug, Clone)]
pub struct ShapeSupply<R = StdRng> {
    rng: R,
    /// Catalog indices, each repeated by its template weight
    weighted: ArrayVec<u8, MAX_WEIGHTED>,
}

impl ShapeSupply<StdRng> {
    /// Supply seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic supply for tests and replays
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShapeSupply<R> {
    pub fn new(rng: R) -> Self {
        let mut weighted = ArrayVec::new();
        for (index, template) in templates().iter().enumerate() {
            for _ in 0..template.weight_class().weight() {
                weighted.push(index as u8);
            }
        }
        Self { rng, weighted }
    }

    /// The weighted index multiset draws are sampled from
    pub fn weighted_indices(&self) -> &[u8] {
        &self.weighted
    }

    /// Draw a single shape
    pub fn draw(&mut self) -> Shape {
        let pick = self.rng.random_range(0..self.weighted.len());
        let template = &templates()[self.weighted[pick] as usize];

        let rotation = if template.is_rotation_exempt() {
            Rotation::North
        } else {
            Rotation::from_quarter_turns(self.rng.random_range(0..4))
        };
        let color = ColorTag::ALL[self.rng.random_range(0..ColorTag::ALL.len())];

        Shape::new(template, rotation, color)
    }

    /// Draw a full tray of independent shapes
    pub fn generate_tray(&mut self) -> Tray {
        Tray::new(std::array::from_fn(|_| self.draw()))
    }
}

impl Default for ShapeSupply<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> TraySource for ShapeSupply<R> {
    fn next_tray(&mut self) -> Tray {
        self.generate_tray()
    }
}
