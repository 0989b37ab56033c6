//! Tournament metadata consumed by souvenir-package generation: the map a
//! package is tied to and the historical matches played on it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::generate::attributes::RandomSource;

/// Competitive maps souvenir packages are issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentMap {
    None,
    Ancient,
    Anubis,
    Cache,
    Cobblestone,
    Dust2,
    Inferno,
    Mirage,
    Nuke,
    Overpass,
    Train,
    Vertigo,
}

impl TournamentMap {
    /// Derive the map from a souvenir package's base name, which ends with
    /// the map's engine name (e.g. "crate_esl14_de_dust2").
    pub fn from_base_name(base_name: &str) -> Self {
        const SUFFIXES: &[(&str, TournamentMap)] = &[
            ("de_ancient", TournamentMap::Ancient),
            ("de_anubis", TournamentMap::Anubis),
            ("de_cache", TournamentMap::Cache),
            ("de_cbble", TournamentMap::Cobblestone),
            ("de_dust2", TournamentMap::Dust2),
            ("de_inferno", TournamentMap::Inferno),
            ("de_mirage", TournamentMap::Mirage),
            ("de_nuke", TournamentMap::Nuke),
            ("de_overpass", TournamentMap::Overpass),
            ("de_train", TournamentMap::Train),
            ("de_vertigo", TournamentMap::Vertigo),
        ];

        SUFFIXES
            .iter()
            .find(|(suffix, _)| base_name.ends_with(suffix))
            .map_or(TournamentMap::None, |&(_, map)| map)
    }
}

impl Default for TournamentMap {
    fn default() -> Self {
        Self::None
    }
}

/// A historical match: stage plus the two teams that played it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentMatch {
    pub stage: u8,
    pub team1: u16,
    pub team2: u16,
}

/// A match for which the event also recorded MVP players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchWithMvps {
    pub stage: u8,
    pub team1: u16,
    pub team2: u16,
    /// Non-empty for a well-formed record.
    pub mvps: Vec<u16>,
}

impl MatchWithMvps {
    /// Pick one recorded MVP uniformly. `None` only for a malformed empty
    /// MVP list.
    pub fn random_mvp(&self, rng: &mut dyn RandomSource) -> Option<u16> {
        if self.mvps.is_empty() {
            return None;
        }
        let index = rng.uniform_int(0, self.mvps.len() as i64 - 1) as usize;
        Some(self.mvps[index])
    }
}

/// The matches an event recorded on one map. Older events only kept
/// stage/team data; newer ones also credit MVPs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSet<'a> {
    Plain(&'a [TournamentMatch]),
    WithMvps(&'a [MatchWithMvps]),
}

impl MatchSet<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Plain(matches) => matches.len(),
            Self::WithMvps(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owned storage for one (event, map) match list.
///
/// Untagged: records carrying an `mvps` list deserialize as the MVP
/// variant, everything else as plain matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchList {
    WithMvps(Vec<MatchWithMvps>),
    Plain(Vec<TournamentMatch>),
}

impl MatchList {
    pub fn as_set(&self) -> MatchSet<'_> {
        match self {
            Self::Plain(matches) => MatchSet::Plain(matches),
            Self::WithMvps(matches) => MatchSet::WithMvps(matches),
        }
    }
}

/// Source of historical matches for souvenir packages.
pub trait MatchProvider {
    /// Matches played on `map` at the event. `None` when the event or map
    /// is unknown; generation treats that the same as an empty set.
    fn matches_for(&self, event_id: u8, map: TournamentMap) -> Option<MatchSet<'_>>;
}

/// Provider with no match data at all; souvenir packages generate with
/// default fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMatches;

impl MatchProvider for NoMatches {
    fn matches_for(&self, _event_id: u8, _map: TournamentMap) -> Option<MatchSet<'_>> {
        None
    }
}

/// In-memory match table keyed by (event, map).
#[derive(Debug, Clone, Default)]
pub struct MatchTable {
    matches: HashMap<(u8, TournamentMap), MatchList>,
}

impl MatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, event_id: u8, map: TournamentMap, list: MatchList) {
        self.matches.insert((event_id, map), list);
    }
}

impl MatchProvider for MatchTable {
    fn matches_for(&self, event_id: u8, map: TournamentMap) -> Option<MatchSet<'_>> {
        self.matches.get(&(event_id, map)).map(MatchList::as_set)
    }
}
