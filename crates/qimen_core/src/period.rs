//! Period resolver: day pillar + solar term to Yuan, Ju, and Dun direction.
//!
//! The Yuan is keyed off the day pillar's own pentad within its decad (the
//! 拆补 method). Because the pentads tile the whole sexagenary cycle, every
//! valid day pillar resolves without a gap even across term boundaries;
//! the contested 超神/接气 extension reduces to this rule and needs no
//! special casing.

use qimen_tables::{Polarity, SolarTerm, StemBranch, Xun, Yuan};

use crate::error::ChartError;

/// The resolved circulation parameters for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPeriod {
    /// Decad containing the day pillar.
    pub xun: Xun,
    /// Active sub-period within the solar term.
    pub yuan: Yuan,
    /// Governing number, 1-9.
    pub ju: u8,
    /// Circulation direction: Yang forward, Yin reverse.
    pub dun: Polarity,
}

/// Resolve the active period from the day pillar and the governing term.
///
/// `PillarNotInPeriod` marks a pillar no Xun claims; with table-derived
/// pillars that indicates a defect upstream, not recoverable input.
pub fn resolve_period(day: StemBranch, term: SolarTerm) -> Result<ChartPeriod, ChartError> {
    let xun = day
        .xun()
        .ok_or(ChartError::PillarNotInPeriod("day pillar not in any decad"))?;
    let yuan = xun
        .yuan_of(day)
        .ok_or(ChartError::PillarNotInPeriod("day pillar outside its decad"))?;
    let ju = term.ju_numbers()[yuan.index() as usize];
    Ok(ChartPeriod {
        xun,
        yuan,
        ju,
        dun: term.polarity(),
    })
}
