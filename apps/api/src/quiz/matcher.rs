//! School matcher. Tallies the run's traits and picks the best-fitting school.
//!
//! Pure apart from the injected `RandomSource`, which only breaks exact ties.

use rand::Rng;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::errors::AppError;
use crate::models::catalog::{School, Trait};

/// Scale of the tie-break perturbation. Must stay below 1 so it can never
/// outweigh a one-point score difference. This only holds while raw scores are
/// integers (`u32`): fractional scoring would break the tie-break silently.
const TIE_BREAK_SCALE: f64 = 0.1;

/// Number of traits reported back to the caller and the analyzer.
pub const TOP_TRAITS: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Randomness source
// ────────────────────────────────────────────────────────────────────────────

/// Supplies values in `[0, 1)` for the tie-break.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// Production source backed by the thread-local RNG.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait tally
// ────────────────────────────────────────────────────────────────────────────

/// Per-run trait counts in first-seen order. The order is what resolves ties
/// between equal counts when picking the top traits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitTally {
    entries: Vec<(Trait, u32)>,
}

impl TraitTally {
    pub fn from_traits(traits: &[Trait]) -> Self {
        let mut tally = Self::default();
        for &t in traits {
            match tally.entries.iter_mut().find(|(seen, _)| *seen == t) {
                Some((_, count)) => *count += 1,
                None => tally.entries.push((t, 1)),
            }
        }
        tally
    }

    /// Count for `t`; absent traits count as zero.
    pub fn get(&self, t: Trait) -> u32 {
        self.entries
            .iter()
            .find(|(seen, _)| *seen == t)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn entries(&self) -> &[(Trait, u32)] {
        &self.entries
    }

    /// Up to `n` traits by descending count. The sort is stable, so equal
    /// counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<Trait> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(t, _)| t).collect()
    }
}

impl Serialize for TraitTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (t, count) in entries {
            map.serialize_entry(t, count)?;
        }
        map.end()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MatchOutcome<'a> {
    pub school: &'a School,
    /// Pre-perturbation score of the selected school.
    pub raw_score: u32,
    pub top_traits: Vec<Trait>,
    pub tally: TraitTally,
}

/// Raw score: sum of the tally over the school's tags.
pub fn raw_score(school: &School, tally: &TraitTally) -> u32 {
    school.tags.iter().map(|&tag| tally.get(tag)).sum()
}

/// Picks the best school for `traits`.
///
/// Algorithm:
/// 1. Tally trait occurrences
/// 2. Score each school in catalog order (Σ tally over its tags)
/// 3. Add `rng.next_unit() * TIE_BREAK_SCALE` so exact ties break pseudo-randomly
/// 4. Keep the strictly greatest perturbed score, starting from the first
///    school with a sentinel below any attainable score
/// 5. Report the top `TOP_TRAITS` traits by count
pub fn match_school<'a>(
    traits: &[Trait],
    schools: &'a [School],
    rng: &dyn RandomSource,
) -> Result<MatchOutcome<'a>, AppError> {
    let first = schools
        .first()
        .ok_or_else(|| AppError::InvalidInput("School catalog is empty".to_string()))?;

    let tally = TraitTally::from_traits(traits);

    let mut best = first;
    let mut best_raw = 0;
    let mut best_score = f64::NEG_INFINITY;

    for school in schools {
        let raw = raw_score(school, &tally);
        let score = f64::from(raw) + rng.next_unit() * TIE_BREAK_SCALE;
        if score > best_score {
            best_score = score;
            best_raw = raw;
            best = school;
        }
    }

    let top_traits = tally.top(TOP_TRAITS);

    Ok(MatchOutcome {
        school: best,
        raw_score: best_raw,
        top_traits,
        tally,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
