use crate::chart::TypeChart;
use crate::error::ChartError;
use crate::types::TypeName;
use serde::Serialize;
use std::collections::BTreeMap;

/// 18 single types plus C(18, 2) dual types.
pub const DEFENSE_PROFILE_COUNT: usize = 171;

/// Canonical multiplier classes, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Bucket {
    #[serde(rename = "4")]
    Quadruple,
    #[serde(rename = "2")]
    Double,
    #[serde(rename = "1")]
    Neutral,
    #[serde(rename = "0.5")]
    Half,
    #[serde(rename = "0.25")]
    Quarter,
    #[serde(rename = "0")]
    Immune,
}

impl Bucket {
    pub const ALL: [Bucket; 6] = [
        Bucket::Quadruple,
        Bucket::Double,
        Bucket::Neutral,
        Bucket::Half,
        Bucket::Quarter,
        Bucket::Immune,
    ];

    pub fn value(self) -> f64 {
        match self {
            Bucket::Quadruple => 4.0,
            Bucket::Double => 2.0,
            Bucket::Neutral => 1.0,
            Bucket::Half => 0.5,
            Bucket::Quarter => 0.25,
            Bucket::Immune => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Bucket::Quadruple => "4",
            Bucket::Double => "2",
            Bucket::Neutral => "1",
            Bucket::Half => "0.5",
            Bucket::Quarter => "0.25",
            Bucket::Immune => "0",
        }
    }

    pub fn is_neutral_or_better(self) -> bool {
        matches!(self, Bucket::Quadruple | Bucket::Double | Bucket::Neutral)
    }

    /// Classifies a raw multiplier. The value is rounded to two decimals
    /// first so float drift from multiplying chart values cannot miss an
    /// exact bucket; anything still off snaps to the nearest bucket.
    pub fn normalize(raw: f64) -> Bucket {
        let rounded = (raw * 100.0).round() / 100.0;
        if let Some(bucket) = Bucket::ALL.into_iter().find(|b| b.value() == rounded) {
            return bucket;
        }
        tracing::warn!(raw, "multiplier outside the canonical set; snapping to nearest bucket");
        if rounded > 3.0 {
            Bucket::Quadruple
        } else if rounded > 1.5 {
            Bucket::Double
        } else if rounded > 0.75 {
            Bucket::Neutral
        } else if rounded > 0.375 {
            Bucket::Half
        } else if rounded > 0.125 {
            Bucket::Quarter
        } else {
            Bucket::Immune
        }
    }
}

pub fn normalize_multiplier(raw: f64) -> f64 {
    Bucket::normalize(raw).value()
}

/// One or two defending types. Dual profiles always hold distinct types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefenseProfile {
    pub primary: TypeName,
    pub secondary: Option<TypeName>,
}

/// Every single type, then every unordered pair `(types[i], types[j])` with `i < j`.
pub fn defense_profiles(types: &[TypeName]) -> Vec<DefenseProfile> {
    let n = types.len();
    let mut profiles = Vec::with_capacity(n + n * n.saturating_sub(1) / 2);
    for &primary in types {
        profiles.push(DefenseProfile {
            primary,
            secondary: None,
        });
    }
    for i in 0..types.len() {
        for j in (i + 1)..types.len() {
            profiles.push(DefenseProfile {
                primary: types[i],
                secondary: Some(types[j]),
            });
        }
    }
    profiles
}

/// A non-empty, duplicate-free list of attacking types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttackSelection(Vec<TypeName>);

impl AttackSelection {
    pub fn new(types: impl IntoIterator<Item = TypeName>) -> Result<Self, ChartError> {
        let mut selected = Vec::new();
        for ty in types {
            if !selected.contains(&ty) {
                selected.push(ty);
            }
        }
        if selected.is_empty() {
            return Err(ChartError::NoAttackTypes);
        }
        Ok(AttackSelection(selected))
    }

    /// Parses user-facing labels. Blank entries stand for unused slots and
    /// are dropped; unrecognised labels are an error.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = Vec::new();
        for label in labels {
            let label = label.as_ref();
            if label.trim().is_empty() {
                continue;
            }
            types.push(label.parse::<TypeName>()?);
        }
        AttackSelection::new(types)
    }

    pub fn types(&self) -> &[TypeName] {
        &self.0
    }
}

/// Highest multiplier any of `attack_types` reaches against the profile.
/// Starts from 0 so that an all-immune outcome stays 0.
pub fn best_coverage(
    chart: &TypeChart,
    attack_types: &[TypeName],
    defense1: TypeName,
    defense2: Option<TypeName>,
) -> f64 {
    attack_types
        .iter()
        .map(|&attack| chart.effectiveness(attack, defense1, defense2))
        .fold(0.0, f64::max)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageResult {
    counts: BTreeMap<Bucket, usize>,
    total: usize,
    neutral_or_better: usize,
    resisted_or_immune: usize,
    fallback_profiles: usize,
}

impl CoverageResult {
    fn from_counts(counts: [usize; 6], fallback_profiles: usize) -> Self {
        let counts: BTreeMap<Bucket, usize> = Bucket::ALL.into_iter().zip(counts).collect();
        let (better, resisted): (Vec<_>, Vec<_>) = counts
            .iter()
            .partition(|(bucket, _)| bucket.is_neutral_or_better());
        CoverageResult {
            total: counts.values().sum(),
            neutral_or_better: better.into_iter().map(|(_, n)| n).sum(),
            resisted_or_immune: resisted.into_iter().map(|(_, n)| n).sum(),
            counts,
            fallback_profiles,
        }
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Bucket counts, strongest bucket first.
    pub fn counts(&self) -> impl Iterator<Item = (Bucket, usize)> + '_ {
        self.counts.iter().map(|(&bucket, &n)| (bucket, n))
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn neutral_or_better(&self) -> usize {
        self.neutral_or_better
    }

    pub fn resisted_or_immune(&self) -> usize {
        self.resisted_or_immune
    }

    /// Profiles whose classification read at least one absent chart entry.
    pub fn fallback_profiles(&self) -> usize {
        self.fallback_profiles
    }
}

/// Classifies every defence profile built from `chart.defense_types()` by
/// the best multiplier the selection reaches against it.
pub fn analyze(selection: &AttackSelection, chart: &TypeChart) -> CoverageResult {
    let profiles = defense_profiles(chart.defense_types());
    let mut counts = [0usize; 6];
    let mut fallback_profiles = 0usize;
    for profile in &profiles {
        let best = best_coverage(chart, selection.types(), profile.primary, profile.secondary);
        counts[Bucket::normalize(best) as usize] += 1;
        let complete = selection
            .types()
            .iter()
            .all(|&attack| chart.covers(attack, profile.primary, profile.secondary));
        if !complete {
            fallback_profiles += 1;
        }
    }
    if fallback_profiles > 0 {
        tracing::warn!(
            fallback_profiles,
            "coverage used neutral fallbacks for missing chart entries"
        );
    }
    let result = CoverageResult::from_counts(counts, fallback_profiles);
    debug_assert_eq!(result.total(), profiles.len());
    result
}
