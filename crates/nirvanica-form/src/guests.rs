//! Guest composition counters.

use nirvanica_core::config::booking::GuestBoundsConfig;

use crate::stepper::Stepper;

/// The four guest categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestKind {
    /// Adults.
    Adults,
    /// Children.
    Children,
    /// Elders.
    Elders,
    /// Infants.
    Infants,
}

/// The four bounded guest counters.
#[derive(Debug, Clone)]
pub struct GuestCounters {
    adults: Stepper,
    children: Stepper,
    elders: Stepper,
    infants: Stepper,
}

impl GuestCounters {
    /// Create counters from configured bounds, each at its lower bound.
    pub fn new(bounds: &GuestBoundsConfig) -> Self {
        Self {
            adults: Stepper::from_bounds(bounds.adults),
            children: Stepper::from_bounds(bounds.children),
            elders: Stepper::from_bounds(bounds.elders),
            infants: Stepper::from_bounds(bounds.infants),
        }
    }

    /// The stepper for one guest category.
    pub fn stepper(&self, kind: GuestKind) -> &Stepper {
        match kind {
            GuestKind::Adults => &self.adults,
            GuestKind::Children => &self.children,
            GuestKind::Elders => &self.elders,
            GuestKind::Infants => &self.infants,
        }
    }

    fn stepper_mut(&mut self, kind: GuestKind) -> &mut Stepper {
        match kind {
            GuestKind::Adults => &mut self.adults,
            GuestKind::Children => &mut self.children,
            GuestKind::Elders => &mut self.elders,
            GuestKind::Infants => &mut self.infants,
        }
    }

    /// Current count for one category.
    pub fn count(&self, kind: GuestKind) -> u32 {
        self.stepper(kind).value()
    }

    /// Step a category up. Returns whether the value changed.
    pub fn increase(&mut self, kind: GuestKind) -> bool {
        self.stepper_mut(kind).increase()
    }

    /// Step a category down. Returns whether the value changed.
    pub fn decrease(&mut self, kind: GuestKind) -> bool {
        self.stepper_mut(kind).decrease()
    }

    /// Sum of all four categories.
    pub fn total(&self) -> u32 {
        self.adults.value() + self.children.value() + self.elders.value() + self.infants.value()
    }
}
