//! Pan assembler: the build pipeline and the assembled chart value.
//!
//! `build_chart` runs the stages strictly in order (term lookup, pillars,
//! period, plates, overlays) and packages every resolved value behind a
//! display label. Each build allocates its own palace state; nothing here
//! mutates the static tables.

use qimen_tables::{
    Branch, CLOCKWISE_RING, Gate, Palace, Polarity, Rotation, SolarTerm, Spirit, Star, Stem,
    StemBranch, Yuan,
};

use crate::error::ChartError;
use crate::moment::{Moment, TimeCorrection};
use crate::overlay::{Overlay, place_overlays};
use crate::period::resolve_period;
use crate::pillars::{DayBoundary, resolve_pillars};
use crate::plates::{Plate, arrange_earth_plate, heaven_rotation};
use crate::term_source::SolarTermSource;

/// A value paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labeled<T> {
    pub label: &'static str,
    pub value: T,
}

impl<T> Labeled<T> {
    const fn new(label: &'static str, value: T) -> Self {
        Self { label, value }
    }
}

/// Policy points the classical sources disagree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Ring palace the center borrows for seeding, stems, and its star
    /// entry. 坤二宫 by convention; some schools prefer 艮八宫.
    pub center_host: Palace,
    /// Day-pillar rollover rule for the late 子 hour.
    pub day_boundary: DayBoundary,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            center_host: Palace::Kun,
            day_boundary: DayBoundary::LateZiNextDay,
        }
    }
}

/// Per-chart dynamic state of one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalaceState {
    pub palace: Palace,
    /// Earth-plate stem plus optional co-occupant.
    pub earth_stems: (Stem, Option<Stem>),
    /// Heaven-plate stem plus optional co-occupant.
    pub heaven_stems: (Stem, Option<Stem>),
    /// Star flown here.
    pub star: Star,
    /// 天禽 when it rides along on this palace.
    pub companion_star: Option<Star>,
    /// Gate flown here; the center never holds one.
    pub gate: Option<Gate>,
    /// Spirit flown here; the center never holds one.
    pub spirit: Option<Spirit>,
    /// True on the center: its stems and star are its host's, not its own.
    pub borrowed: bool,
}

/// The nine palace states for one chart, keyed by ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NinePalaces {
    slots: [PalaceState; 9],
}

impl NinePalaces {
    pub fn get(&self, palace: Palace) -> &PalaceState {
        &self.slots[(palace.number() - 1) as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PalaceState> {
        self.slots.iter()
    }
}

/// The assembled chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Pan {
    pub solar_term: Labeled<SolarTerm>,
    pub year_pillar: Labeled<StemBranch>,
    pub month_pillar: Labeled<StemBranch>,
    pub day_pillar: Labeled<StemBranch>,
    pub hour_pillar: Labeled<StemBranch>,
    pub polarity: Labeled<Polarity>,
    pub void_branches: Labeled<[Branch; 2]>,
    pub yuan: Labeled<Yuan>,
    pub xun_leader: Labeled<StemBranch>,
    pub ju: Labeled<u8>,
    pub earth_plate: Labeled<Plate>,
    pub heaven_plate: Labeled<Plate>,
    pub nine_stars: Labeled<[(Star, Palace); 9]>,
    pub eight_spirits: Labeled<[(Spirit, Palace); 8]>,
    pub leading_gate: Labeled<Gate>,
    pub eight_gates: Labeled<[(Gate, Palace); 8]>,
    /// Zhi Fu, the leading star (not one of the sixteen labeled fields;
    /// carried for downstream convenience).
    pub leading_star: Star,
    pub palaces: NinePalaces,
}

/// Build a chart for a moment using the given solar-term service.
pub fn build_chart(
    moment: &Moment,
    source: &dyn SolarTermSource,
    options: &ChartOptions,
) -> Result<Pan, ChartError> {
    // Revalidate: Moment fields are public and may not have gone through new().
    let moment = Moment::new(
        moment.year,
        moment.month,
        moment.day,
        moment.hour,
        moment.minute,
    )?;

    let active = source.active_term(&moment)?;
    let pillars = resolve_pillars(&moment, active.term, options.day_boundary)?;
    let period = resolve_period(pillars.day, active.term)?;

    let earth = arrange_earth_plate(period.ju, period.dun, options.center_host)?;
    let steps = heaven_rotation(&earth, pillars.hour, period.dun)?;
    let heaven = earth.rotated(steps, Rotation::from_polarity(period.dun));
    let overlay = place_overlays(
        &earth,
        steps,
        period.dun,
        pillars.hour,
        pillars.day,
        options.center_host,
    )?;

    let hour_xun = pillars
        .hour
        .xun()
        .ok_or(ChartError::PillarNotInPeriod("hour pillar not in any decad"))?;

    let palaces = assemble_palaces(&earth, &heaven, &overlay, options.center_host)?;

    Ok(Pan {
        solar_term: Labeled::new("节气", active.term),
        year_pillar: Labeled::new("年柱", pillars.year),
        month_pillar: Labeled::new("月柱", pillars.month),
        day_pillar: Labeled::new("日柱", pillars.day),
        hour_pillar: Labeled::new("时柱", pillars.hour),
        polarity: Labeled::new("阴阳", period.dun),
        void_branches: Labeled::new("空亡", hour_xun.void_branches()),
        yuan: Labeled::new("元", period.yuan),
        xun_leader: Labeled::new("旬首", hour_xun.leader()),
        ju: Labeled::new("局数", period.ju),
        earth_plate: Labeled::new("地盘", earth),
        heaven_plate: Labeled::new("天盘", heaven),
        nine_stars: Labeled::new("九星", overlay.stars),
        eight_spirits: Labeled::new("八神", overlay.spirits),
        leading_gate: Labeled::new("值使门", overlay.leading_gate),
        eight_gates: Labeled::new("八门", overlay.gates),
        leading_star: overlay.leading_star,
        palaces,
    })
}

/// Build a chart after applying a true-solar-time correction.
pub fn build_chart_with_correction(
    moment: &Moment,
    correction: &dyn TimeCorrection,
    source: &dyn SolarTermSource,
    options: &ChartOptions,
) -> Result<Pan, ChartError> {
    let corrected = correction.apply(moment)?;
    build_chart(&corrected, source, options)
}

fn assemble_palaces(
    earth: &Plate,
    heaven: &Plate,
    overlay: &Overlay,
    center_host: Palace,
) -> Result<NinePalaces, ChartError> {
    let absent = ChartError::DegenerateChart("ring palace missing from a plate");
    let host_earth = earth.stems_at(center_host).ok_or(absent.clone())?;
    let host_heaven = heaven.stems_at(center_host).ok_or(absent.clone())?;
    let host_star = overlay
        .star_at(center_host)
        .ok_or(ChartError::DegenerateChart("host palace holds no star"))?;

    let mut slots = [PalaceState {
        palace: Palace::Zhong,
        earth_stems: host_earth,
        heaven_stems: host_heaven,
        star: host_star,
        companion_star: None,
        gate: None,
        spirit: None,
        borrowed: true,
    }; 9];

    for palace in CLOCKWISE_RING {
        let star = overlay
            .star_at(palace)
            .ok_or(ChartError::DegenerateChart("ring palace holds no star"))?;
        let companion = (overlay.stars[8].1 == palace).then_some(Star::TianQin);
        slots[(palace.number() - 1) as usize] = PalaceState {
            palace,
            earth_stems: earth.stems_at(palace).ok_or(absent.clone())?,
            heaven_stems: heaven.stems_at(palace).ok_or(absent.clone())?,
            star,
            companion_star: companion,
            gate: overlay.gate_at(palace),
            spirit: overlay.spirit_at(palace),
            borrowed: false,
        };
    }
    Ok(NinePalaces { slots })
}

fn write_stems(
    f: &mut std::fmt::Formatter<'_>,
    stems: (Stem, Option<Stem>),
) -> std::fmt::Result {
    match stems {
        (primary, Some(rider)) => write!(f, "{primary}{rider}"),
        (primary, None) => write!(f, "{primary}"),
    }
}

impl std::fmt::Display for Pan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: {}", self.solar_term.label, self.solar_term.value)?;
        writeln!(f, "{}: {}", self.year_pillar.label, self.year_pillar.value)?;
        writeln!(f, "{}: {}", self.month_pillar.label, self.month_pillar.value)?;
        writeln!(f, "{}: {}", self.day_pillar.label, self.day_pillar.value)?;
        writeln!(f, "{}: {}", self.hour_pillar.label, self.hour_pillar.value)?;
        writeln!(f, "{}: {}", self.polarity.label, self.polarity.value)?;
        writeln!(
            f,
            "{}: {}{}",
            self.void_branches.label, self.void_branches.value[0], self.void_branches.value[1]
        )?;
        writeln!(f, "{}: {}", self.yuan.label, self.yuan.value)?;
        writeln!(f, "{}: {}", self.xun_leader.label, self.xun_leader.value)?;
        writeln!(f, "{}: {}", self.ju.label, self.ju.value)?;
        writeln!(f, "{}: {}", self.leading_gate.label, self.leading_gate.value)?;
        writeln!(f, "九宫:")?;
        for state in self.palaces.iter() {
            write!(f, "  {}: 天盘 ", state.palace)?;
            write_stems(f, state.heaven_stems)?;
            write!(f, " 地盘 ")?;
            write_stems(f, state.earth_stems)?;
            write!(f, " {}", state.star)?;
            if let Some(companion) = state.companion_star {
                write!(f, "{companion}")?;
            }
            if let Some(gate) = state.gate {
                write!(f, " {gate}")?;
            }
            if let Some(spirit) = state.spirit {
                write!(f, " {spirit}")?;
            }
            if state.borrowed {
                write!(f, " (寄宫)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_source::FixedTerm;

    fn options() -> ChartOptions {
        ChartOptions::default()
    }

    #[test]
    fn round_trip_determinism() {
        let moment = Moment::new(2008, 11, 4, 12, 30).unwrap();
        let source = FixedTerm(SolarTerm::ShuangJiang);
        let first = build_chart(&moment, &source, &options()).unwrap();
        let second = build_chart(&moment, &source, &options()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn center_borrows_host() {
        let moment = Moment::new(2008, 11, 4, 12, 30).unwrap();
        let source = FixedTerm(SolarTerm::ShuangJiang);
        let pan = build_chart(&moment, &source, &options()).unwrap();
        let center = pan.palaces.get(Palace::Zhong);
        let host = pan.palaces.get(Palace::Kun);
        assert!(center.borrowed);
        assert!(!host.borrowed);
        assert_eq!(center.earth_stems, host.earth_stems);
        assert_eq!(center.star, host.star);
        assert_eq!(center.gate, None);
        assert_eq!(center.spirit, None);
    }

    #[test]
    fn invalid_moment_surfaces() {
        let mut moment = Moment::new(2008, 11, 4, 12, 30).unwrap();
        moment.year = 1500;
        let source = FixedTerm(SolarTerm::ShuangJiang);
        let err = build_chart(&moment, &source, &options()).unwrap_err();
        assert!(matches!(err, ChartError::InvalidMoment(_)));
    }

    #[test]
    fn labels_match_convention() {
        let moment = Moment::new(1998, 9, 26, 11, 20).unwrap();
        let source = FixedTerm(SolarTerm::QiuFen);
        let pan = build_chart(&moment, &source, &options()).unwrap();
        assert_eq!(pan.solar_term.label, "节气");
        assert_eq!(pan.ju.label, "局数");
        assert_eq!(pan.leading_gate.label, "值使门");
        assert_eq!(pan.eight_gates.label, "八门");
    }
}
