//! Pillar resolver: moment to Year/Month/Day/Hour stem-branch pillars.
//!
//! Year and Day come from fixed day-count arithmetic over the proleptic
//! sexagenary cycle. Month derives from the active solar month and the
//! year stem (five-tigers rotation); Hour from the day stem and the
//! two-hour slot (five-rats rotation).

use qimen_tables::{Branch, SolarTerm, Stem, StemBranch};

use crate::error::ChartError;
use crate::moment::Moment;

/// When the sexagenary day rolls over.
///
/// The late 子 hour (23:00-23:59) traditionally already belongs to the
/// following day; `LateZiNextDay` advances the day pillar there, matching
/// common almanac practice. `Midnight` keeps the civil-day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
    #[default]
    LateZiNextDay,
    Midnight,
}

/// The four resolved pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

/// Resolve all four pillars for a moment under the given active solar term.
pub fn resolve_pillars(
    moment: &Moment,
    term: SolarTerm,
    boundary: DayBoundary,
) -> Result<FourPillars, ChartError> {
    let day_moment = match boundary {
        DayBoundary::LateZiNextDay if moment.hour == 23 => moment.add_days(1)?,
        _ => *moment,
    };
    let day = StemBranch::from_index(day_moment.day_cycle_index());

    let hour_branch = Branch::from_hour(moment.hour);
    let hour_stem = Stem::from_index(day.stem.index() * 2 + hour_branch.index());
    let hour = StemBranch::new(hour_stem, hour_branch);

    let year = year_pillar(moment, term);

    let solar_month = term.solar_month();
    let month_branch = Branch::from_index(solar_month + 1);
    let month_stem = Stem::from_index(year.stem.index() * 2 + solar_month + 1);
    let month = StemBranch::new(month_stem, month_branch);

    Ok(FourPillars {
        year,
        month,
        day,
        hour,
    })
}

/// Year pillar with the sui boundary at 立春: before it (calendar January
/// or February while the solar month still counts 11 or 12) the previous
/// year governs.
fn year_pillar(moment: &Moment, term: SolarTerm) -> StemBranch {
    let mut year = moment.year;
    if moment.month <= 2 && term.solar_month() >= 11 {
        year -= 1;
    }
    StemBranch::from_index((year as i64 - 4).rem_euclid(60) as u8)
}
