//! Solar-term boundary collaborator.
//!
//! The engine never computes planetary longitude itself; it asks a
//! [`SolarTermSource`] which term governs a moment. `FixedTerm` serves
//! callers that already know the answer (and the test suite).
//! `ApproxSolarTerms` is a self-contained low-precision implementation for
//! standalone use: mean solar longitude plus the equation of center, good
//! to about an arcminute, so term boundaries land within a few minutes of
//! ephemeris values.

use qimen_tables::SolarTerm;

use crate::error::ChartError;
use crate::moment::Moment;

/// The solar term governing a moment, with its opening boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTerm {
    pub term: SolarTerm,
    /// When the term began (same timescale as the queried moment).
    pub since: Moment,
}

/// External solar-term boundary service.
pub trait SolarTermSource {
    fn active_term(&self, moment: &Moment) -> Result<ActiveTerm, ChartError>;
}

/// A source that always reports the given term, with the queried moment as
/// its boundary. For tests and for callers with out-of-band term data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTerm(pub SolarTerm);

impl SolarTermSource for FixedTerm {
    fn active_term(&self, moment: &Moment) -> Result<ActiveTerm, ChartError> {
        Ok(ActiveTerm {
            term: self.0,
            since: *moment,
        })
    }
}

/// Approximate term source from closed-form solar longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxSolarTerms {
    /// UTC offset of the civil moments handed to `active_term`, in hours.
    pub utc_offset_hours: f64,
}

impl Default for ApproxSolarTerms {
    /// China Standard Time, the historical frame of the art.
    fn default() -> Self {
        Self {
            utc_offset_hours: 8.0,
        }
    }
}

/// Ecliptic longitude at which 立春 (term 0) begins.
const LICHUN_LONGITUDE: f64 = 315.0;

/// Longitude span of one term.
const TERM_SPAN: f64 = 15.0;

impl ApproxSolarTerms {
    fn term_index_at(&self, jd: f64) -> u8 {
        let lon = apparent_solar_longitude(jd);
        ((lon - LICHUN_LONGITUDE).rem_euclid(360.0) / TERM_SPAN).floor() as u8 % 24
    }

    /// Bisect the opening boundary of the term active at `jd`. The Sun
    /// advances roughly a degree per day, so the boundary lies within the
    /// preceding 17 days.
    fn boundary_before(&self, jd: f64, term: SolarTerm) -> f64 {
        let target = (LICHUN_LONGITUDE + TERM_SPAN * term.index() as f64).rem_euclid(360.0);
        let mut lo = jd - 17.0;
        let mut hi = jd;
        for _ in 0..48 {
            let mid = (lo + hi) / 2.0;
            let diff = normalize_pm180(apparent_solar_longitude(mid) - target);
            if diff < 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }
}

impl SolarTermSource for ApproxSolarTerms {
    fn active_term(&self, moment: &Moment) -> Result<ActiveTerm, ChartError> {
        let jd = moment.to_jd(self.utc_offset_hours);
        let term = SolarTerm::from_index(self.term_index_at(jd));
        let since = Moment::from_jd(self.boundary_before(jd, term), self.utc_offset_hours)?;
        Ok(ActiveTerm { term, since })
    }
}

/// Apparent solar ecliptic longitude in degrees, low-precision series
/// (mean longitude + equation of center + aberration, nutation ignored).
fn apparent_solar_longitude(jd: f64) -> f64 {
    let t = (jd - 2_451_545.0) / 36_525.0;
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    (l0 + c - 0.005_69).rem_euclid(360.0)
}

fn normalize_pm180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}
