//! Attribute sampling: condition tiers, paint-kit wear, pattern seeds and
//! service-medal issue dates.
//!
//! Every function draws from an injected [`RandomSource`], so a scripted
//! source reproduces exact game rolls and a seeded PRNG reproduces whole
//! items. The tables below are the host game's fixed distributions and must
//! not drift.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Uniform random draws in caller-supplied ranges.
///
/// Implementations are not required to be thread-safe; callers sharing one
/// source across threads serialize access themselves.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both inclusive.
    fn uniform_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform real in the half-open interval `[min, max)`.
    fn uniform_real(&mut self, min: f32, max: f32) -> f32;
}

/// Adapter over any [`rand::Rng`] engine.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: rand::Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<rand::rngs::StdRng> {
    /// Deterministic source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::from_entropy())
    }
}

impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    fn uniform_real(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}

/// The five ordered wear-quality tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SkinCondition {
    FactoryNew = 1,
    MinimalWear = 2,
    FieldTested = 3,
    WellWorn = 4,
    BattleScarred = 5,
}

impl SkinCondition {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FactoryNew => "Factory New",
            Self::MinimalWear => "Minimal Wear",
            Self::FieldTested => "Field-Tested",
            Self::WellWorn => "Well-Worn",
            Self::BattleScarred => "Battle-Scarred",
        }
    }
}

/// Cumulative out-of-10000 boundaries for the condition roll. A draw d maps
/// to the first tier whose boundary is >= d.
const CONDITION_BOUNDARIES: [(i64, SkinCondition); 5] = [
    (1471, SkinCondition::FactoryNew),
    (3939, SkinCondition::MinimalWear),
    (8257, SkinCondition::FieldTested),
    (9049, SkinCondition::WellWorn),
    (10_000, SkinCondition::BattleScarred),
];

/// Wear sub-intervals of [0, 1] per condition tier; tier i draws from
/// [WEAR_RANGES[i-1], WEAR_RANGES[i]).
const WEAR_RANGES: [f32; 6] = [0.0, 0.07, 0.15, 0.38, 0.45, 1.0];

/// Roll a condition tier with the game's fixed odds.
pub fn skin_condition(rng: &mut dyn RandomSource) -> SkinCondition {
    let roll = rng.uniform_int(1, 10_000);
    CONDITION_BOUNDARIES
        .iter()
        .find(|&&(boundary, _)| roll <= boundary)
        .map(|&(_, condition)| condition)
        .unwrap_or(SkinCondition::BattleScarred)
}

/// Sample a raw wear value inside `condition`'s sub-interval of [0, 1].
/// Callers remap the result into the paint kit's bounds.
pub fn paint_kit_wear(rng: &mut dyn RandomSource, condition: SkinCondition) -> f32 {
    let tier = condition as usize;
    rng.uniform_real(WEAR_RANGES[tier - 1], WEAR_RANGES[tier])
}

/// Sample a pattern seed in [1, 1000].
pub fn paint_kit_seed(rng: &mut dyn RandomSource) -> i32 {
    rng.uniform_int(1, 1000) as i32
}

/// Sample a service-medal issue date within the medal's calendar year,
/// never in the future.
pub fn service_medal_issue_date(rng: &mut dyn RandomSource, year: u16) -> u32 {
    service_medal_issue_date_at(rng, year, Utc::now().timestamp())
}

/// As [`service_medal_issue_date`], with an explicit "now" for
/// deterministic callers.
pub fn service_medal_issue_date_at(rng: &mut dyn RandomSource, year: u16, now: i64) -> u32 {
    let start = start_of_year(year).min(now);
    let end = end_of_year(year).min(now);
    rng.uniform_int(start, end).max(0) as u32
}

fn start_of_year(year: u16) -> i64 {
    Utc.with_ymd_and_hms(i32::from(year), 1, 1, 0, 0, 0)
        .single()
        .map_or(0, |t| t.timestamp())
}

fn end_of_year(year: u16) -> i64 {
    Utc.with_ymd_and_hms(i32::from(year), 12, 31, 23, 59, 59)
        .single()
        .map_or(0, |t| t.timestamp())
}
