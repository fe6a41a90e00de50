//! Overlay placer: stars, gates, and spirits onto the palaces.
//!
//! Stars and gates fly with the stems: each lands on the Heaven-Plate
//! position of its home palace, the same ring rotation the stems took.
//! 天禽 has no ring slot and rides on its host palace's star. Gates skip
//! the center entirely. Spirits run their own circuit: 值符 anchors at the
//! day pillar's earth palace and the rest follow in fixed order, direction
//! set by the day pillar's polarity rather than the Dun.

use qimen_tables::{
    ALL_SPIRITS, CLOCKWISE_RING, Gate, Palace, Polarity, Rotation, Spirit, Star, StemBranch,
};

use crate::error::ChartError;
use crate::plates::{Plate, anchor_palace};

/// Star, gate, and spirit assignments for one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    /// The eight ring stars plus 天禽, each with its landing palace.
    pub stars: [(Star, Palace); 9],
    /// The eight gates with their landing palaces.
    pub gates: [(Gate, Palace); 8],
    /// The eight spirits with their landing palaces.
    pub spirits: [(Spirit, Palace); 8],
    /// Zhi Fu: native star of the hour stem's earth palace.
    pub leading_star: Star,
    /// Zhi Shi: native gate of the hour stem's earth palace.
    pub leading_gate: Gate,
}

impl Overlay {
    /// The ring star flown to a palace. None for the center (its display
    /// entry borrows the host's star at assembly).
    pub fn star_at(&self, palace: Palace) -> Option<Star> {
        self.stars[..8]
            .iter()
            .find(|&&(_, p)| p == palace)
            .map(|&(star, _)| star)
    }

    pub fn gate_at(&self, palace: Palace) -> Option<Gate> {
        self.gates
            .iter()
            .find(|&&(_, p)| p == palace)
            .map(|&(gate, _)| gate)
    }

    pub fn spirit_at(&self, palace: Palace) -> Option<Spirit> {
        self.spirits
            .iter()
            .find(|&&(_, p)| p == palace)
            .map(|&(spirit, _)| spirit)
    }
}

fn shift(pos: usize, steps: u8, rotation: Rotation) -> usize {
    match rotation {
        Rotation::Clockwise => (pos + steps as usize) % 8,
        Rotation::CounterClockwise => (pos + 8 - (steps as usize % 8)) % 8,
    }
}

/// Place stars, gates, and spirits for a chart.
///
/// `rotation_steps` is the Earth-to-Heaven rotation already computed for
/// the stems; `DegenerateChart` surfaces when the hour or day stem cannot
/// be located on the earth plate.
pub fn place_overlays(
    earth: &Plate,
    rotation_steps: u8,
    dun: Polarity,
    hour: StemBranch,
    day: StemBranch,
    center_host: Palace,
) -> Result<Overlay, ChartError> {
    let lead = anchor_palace(earth, hour)?;
    let leading_star = lead.native_star();
    let leading_gate = lead
        .native_gate()
        .ok_or(ChartError::DegenerateChart("leading palace holds no gate"))?;

    let rotation = Rotation::from_polarity(dun);
    let mut stars = [(Star::TianQin, Palace::Zhong); 9];
    let mut gates = [(Gate::Open, Palace::Zhong); 8];
    for (pos, &home) in CLOCKWISE_RING.iter().enumerate() {
        let dest = CLOCKWISE_RING[shift(pos, rotation_steps, rotation)];
        stars[pos] = (home.native_star(), dest);
        if let Some(gate) = home.native_gate() {
            gates[pos] = (gate, dest);
        }
    }
    let host_pos = center_host
        .ring_position()
        .ok_or(ChartError::DegenerateChart("center host not on the ring"))?;
    stars[8] = (
        Star::TianQin,
        CLOCKWISE_RING[shift(host_pos, rotation_steps, rotation)],
    );

    let day_anchor = anchor_palace(earth, day)?;
    let day_pos = day_anchor
        .ring_position()
        .ok_or(ChartError::DegenerateChart("day anchor not on the ring"))?;
    let spirit_rotation = Rotation::from_polarity(day.stem.polarity());
    let mut spirits = [(Spirit::ZhiFu, Palace::Zhong); 8];
    for (i, &spirit) in ALL_SPIRITS.iter().enumerate() {
        spirits[i] = (
            spirit,
            CLOCKWISE_RING[shift(day_pos, i as u8, spirit_rotation)],
        );
    }

    Ok(Overlay {
        stars,
        gates,
        spirits,
        leading_star,
        leading_gate,
    })
}
