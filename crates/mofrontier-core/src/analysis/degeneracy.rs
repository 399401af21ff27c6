//! Near-degeneracy classification of an ordered energy list.
//!
//! Each level is compared against at most the three levels preceding it. The
//! resulting counts drive how far a level is displaced on an energy-level
//! diagram so that near-coincident levels stay legible.

use super::error::AnalysisError;
use tracing::warn;

/// Levels closer than this (eV) are treated as degenerate unless configured.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Number of preceding levels inspected for each entry.
pub const LOOKBACK: usize = 3;

/// For each entry, counts how many of the up to [`LOOKBACK`] immediately
/// preceding entries lie strictly within `tolerance` of it.
///
/// The list is not sorted first, so "preceding" means preceding in input order.
/// Every count is in `0..=3` and the first entry is always 0.
pub fn classify_degeneracy(values: &[f64], tolerance: f64) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            values[i.saturating_sub(LOOKBACK)..i]
                .iter()
                .filter(|&&previous| (previous - value).abs() < tolerance)
                .count()
        })
        .collect()
}

/// Display tier of a level, derived from its degeneracy count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DegeneracyTier {
    #[default]
    Nondegenerate,
    Twofold,
    Threefold,
    Fourfold,
}

impl DegeneracyTier {
    pub fn from_count(index: usize, count: usize) -> Result<Self, AnalysisError> {
        match count {
            0 => Ok(Self::Nondegenerate),
            1 => Ok(Self::Twofold),
            2 => Ok(Self::Threefold),
            3 => Ok(Self::Fourfold),
            _ => Err(AnalysisError::UnexpectedDegeneracyCount { index, count }),
        }
    }

    pub fn count(self) -> usize {
        match self {
            Self::Nondegenerate => 0,
            Self::Twofold => 1,
            Self::Threefold => 2,
            Self::Fourfold => 3,
        }
    }

    /// Multiplier applied to the plot's vertical jitter step.
    pub fn jitter_scale(self) -> f64 {
        match self {
            Self::Nondegenerate => 0.0,
            Self::Twofold => 1.0,
            Self::Threefold => 1.25,
            Self::Fourfold => 1.5,
        }
    }

    /// Horizontal label offset, in multiples of the plot's label step.
    pub fn label_offset_steps(self) -> u32 {
        match self {
            Self::Nondegenerate => 2,
            Self::Twofold => 4,
            Self::Threefold => 6,
            Self::Fourfold => 8,
        }
    }
}

/// Tiers for a count list plus the positions whose count was out of range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TierAssignment {
    pub tiers: Vec<DegeneracyTier>,
    pub anomalies: Vec<AnalysisError>,
}

/// Maps counts onto tiers. Out-of-range counts are logged, recorded as
/// anomalies and clamped to [`DegeneracyTier::Fourfold`].
pub fn assign_tiers(counts: &[usize]) -> TierAssignment {
    let mut assignment = TierAssignment {
        tiers: Vec::with_capacity(counts.len()),
        anomalies: Vec::new(),
    };
    for (index, &count) in counts.iter().enumerate() {
        match DegeneracyTier::from_count(index, count) {
            Ok(tier) => assignment.tiers.push(tier),
            Err(err) => {
                warn!("{}", err);
                assignment.anomalies.push(err);
                assignment.tiers.push(DegeneracyTier::Fourfold);
            }
        }
    }
    assignment
}
