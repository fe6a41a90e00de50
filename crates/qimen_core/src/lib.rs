//! Qi Men Dun Jia chart-construction engine.
//!
//! This crate turns a calendar moment into the nine-palace chart: four
//! pillars, the active Yuan and Ju number, Earth and Heaven stem plates,
//! and the star/gate/spirit overlays. Solar-term boundaries come from an
//! injectable [`SolarTermSource`]; the engine itself is pure table
//! arithmetic over the data in `qimen_tables`.
//!
//! The pipeline is synchronous and allocation-light; static tables may be
//! shared freely across threads, while each built [`Pan`] owns its palace
//! state.

pub mod chart;
pub mod error;
pub mod moment;
pub mod overlay;
pub mod period;
pub mod pillars;
pub mod plates;
pub mod term_source;

pub use chart::{
    ChartOptions, Labeled, NinePalaces, PalaceState, Pan, build_chart,
    build_chart_with_correction,
};
pub use error::ChartError;
pub use moment::{MeanSolarOffset, Moment, SUPPORTED_YEARS, TimeCorrection};
pub use overlay::{Overlay, place_overlays};
pub use period::{ChartPeriod, resolve_period};
pub use pillars::{DayBoundary, FourPillars, resolve_pillars};
pub use plates::{FLIGHT_STEMS, Plate, anchor_palace, arrange_earth_plate, heaven_rotation};
pub use term_source::{ActiveTerm, ApproxSolarTerms, FixedTerm, SolarTermSource};
