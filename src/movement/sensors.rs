//! Movement domain: reference-counted contact sensors.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::movement::SensorKind;

/// Which overlapping bodies a sensor counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorFilter {
    /// Every overlapping body counts.
    Any,
    /// Only bodies tagged `Ground` or `Wall` count.
    #[default]
    Surface,
}

impl SensorFilter {
    pub fn accepts(self, is_surface: bool) -> bool {
        match self {
            SensorFilter::Any => true,
            SensorFilter::Surface => is_surface,
        }
    }
}

/// Sensor region attached to a character. Many simultaneous overlaps
/// collapse into a single begin/end edge pair.
#[derive(Component, Debug, Clone)]
pub struct ContactSensor {
    pub kind: SensorKind,
    /// Character whose controller receives this sensor's edges.
    pub owner: Entity,
    pub filter: SensorFilter,
    overlapping: HashSet<Entity>,
}

impl ContactSensor {
    pub fn new(kind: SensorKind, owner: Entity, filter: SensorFilter) -> Self {
        Self {
            kind,
            owner,
            filter,
            overlapping: HashSet::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.overlapping.is_empty()
    }

    pub fn overlap_count(&self) -> usize {
        self.overlapping.len()
    }

    /// Track a new overlap. Returns true on the 0 -> 1 transition.
    pub fn begin(&mut self, other: Entity, qualifies: bool) -> bool {
        if !self.filter.accepts(qualifies) {
            return false;
        }
        let was_active = self.is_active();
        self.overlapping.insert(other) && !was_active
    }

    /// Drop an overlap. Returns true on the N -> 0 transition.
    pub fn end(&mut self, other: Entity) -> bool {
        self.overlapping.remove(&other) && !self.is_active()
    }
}
