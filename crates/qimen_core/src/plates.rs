//! Plate builder: Earth and Heaven stem layouts over the palace ring.
//!
//! Eight stems circulate. 甲 never appears: it hides under its decad's Dun
//! stem. 乙 holds no slot of its own either and rides with 丙, the stem
//! following it in cycle order. The Earth Plate seeds 戊 at the palace whose
//! ordinal equals the Ju number and walks the ring in the Dun direction;
//! the Heaven Plate is the same layout rotated so that the Dun stem comes
//! to rest over the hour stem's earth palace.

use qimen_tables::{CLOCKWISE_RING, Palace, Polarity, Rotation, Stem, StemBranch};

use crate::error::ChartError;

/// The eight circulating stems in flight order.
pub const FLIGHT_STEMS: [Stem; 8] = [
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
    Stem::Ding,
    Stem::Bing,
];

/// A stem layout over the eight ring palaces. The center palace holds no
/// slot of its own; it borrows from its host at assembly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plate {
    /// Ring-position-indexed slots: occupying stem plus optional co-occupant
    /// (乙 riding with 丙).
    slots: [(Stem, Option<Stem>); 8],
}

impl Plate {
    /// Assemble a plate from explicit ring slots, in clockwise ring order
    /// starting at palace 1. For callers carrying their own layout scheme.
    pub const fn from_ring_slots(slots: [(Stem, Option<Stem>); 8]) -> Self {
        Self { slots }
    }

    /// Stems at a ring palace, primary first. None for the center.
    pub fn stems_at(&self, palace: Palace) -> Option<(Stem, Option<Stem>)> {
        palace.ring_position().map(|pos| self.slots[pos])
    }

    /// The palace holding a stem, searching co-occupants too.
    pub fn palace_of(&self, stem: Stem) -> Option<Palace> {
        self.slots
            .iter()
            .position(|&(primary, rider)| primary == stem || rider == Some(stem))
            .map(|pos| CLOCKWISE_RING[pos])
    }

    /// The layout rotated by `steps` palaces in the given direction.
    pub fn rotated(&self, steps: u8, rotation: Rotation) -> Plate {
        let mut slots = self.slots;
        for (pos, &slot) in self.slots.iter().enumerate() {
            let dest = match rotation {
                Rotation::Clockwise => (pos + steps as usize) % 8,
                Rotation::CounterClockwise => (pos + 8 - (steps as usize % 8)) % 8,
            };
            slots[dest] = slot;
        }
        Plate { slots }
    }
}

/// Lay out the Earth Plate for a Ju number and Dun direction.
///
/// Ju 5 points at the center, which holds no ring slot: seeding falls to
/// the center's host palace.
pub fn arrange_earth_plate(
    ju: u8,
    dun: Polarity,
    center_host: Palace,
) -> Result<Plate, ChartError> {
    let seed = match Palace::from_number(ju) {
        Some(Palace::Zhong) => center_host,
        Some(palace) => palace,
        None => return Err(ChartError::DegenerateChart("ju number outside 1-9")),
    };
    let seed_pos = seed
        .ring_position()
        .ok_or(ChartError::DegenerateChart("seed palace not on the ring"))?;

    let mut slots = [(Stem::Wu, None); 8];
    for (i, &stem) in FLIGHT_STEMS.iter().enumerate() {
        let pos = match Rotation::from_polarity(dun) {
            Rotation::Clockwise => (seed_pos + i) % 8,
            Rotation::CounterClockwise => (seed_pos + 8 - i) % 8,
        };
        let rider = if stem == Stem::Bing {
            Some(Stem::Yi)
        } else {
            None
        };
        slots[pos] = (stem, rider);
    }
    Ok(Plate { slots })
}

/// Earth-plate palace anchoring a pillar: its stem's position, with 甲
/// resolved through the pillar's decad leader.
pub fn anchor_palace(earth: &Plate, pillar: StemBranch) -> Result<Palace, ChartError> {
    let stem = if pillar.stem == Stem::Jia {
        pillar
            .leading_stem()
            .ok_or(ChartError::PillarNotInPeriod("pillar not in any decad"))?
    } else {
        pillar.stem
    };
    earth
        .palace_of(stem)
        .ok_or(ChartError::DegenerateChart("stem missing from earth plate"))
}

/// Rotation carrying the Earth Plate to the Heaven Plate: the step count,
/// along the Dun direction, that brings the hour decad's Dun stem from its
/// earth palace onto the hour stem's palace.
pub fn heaven_rotation(
    earth: &Plate,
    hour: StemBranch,
    dun: Polarity,
) -> Result<u8, ChartError> {
    let dun_stem = hour
        .leading_stem()
        .ok_or(ChartError::PillarNotInPeriod("hour pillar not in any decad"))?;
    let from = earth
        .palace_of(dun_stem)
        .ok_or(ChartError::DegenerateChart("dun stem missing from earth plate"))?;
    let to = anchor_palace(earth, hour)?;
    from.ring_distance(to, Rotation::from_polarity(dun))
        .ok_or(ChartError::DegenerateChart("anchor palace not on the ring"))
}
