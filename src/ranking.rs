use crate::chart::TypeChart;
use crate::coverage::{analyze, AttackSelection, Bucket, CoverageResult};
use rayon::prelude::*;
use std::cmp::Reverse;

/// The selection form offers four attack slots.
pub const MAX_SELECTION_SIZE: usize = 4;

#[derive(Debug, Clone)]
pub struct RankedSelection {
    pub selection: AttackSelection,
    pub result: CoverageResult,
}

fn choose_indices(len: usize, size: usize) -> Vec<Vec<usize>> {
    let mut combos = Vec::new();
    if size == 0 || size > len {
        return combos;
    }
    let mut current: Vec<usize> = (0..size).collect();
    loop {
        combos.push(current.clone());
        // Rightmost slot that can still advance.
        let Some(slot) = (0..size).rev().find(|&i| current[i] < len - size + i) else {
            return combos;
        };
        current[slot] += 1;
        for i in (slot + 1)..size {
            current[i] = current[i - 1] + 1;
        }
    }
}

fn rank_key(result: &CoverageResult) -> (Reverse<usize>, usize, Reverse<usize>) {
    (
        Reverse(result.neutral_or_better()),
        result.count(Bucket::Immune),
        Reverse(result.count(Bucket::Quadruple) + result.count(Bucket::Double)),
    )
}

/// Analyses every `size`-type combination of the chart's attack types and
/// orders them best first. Ties keep canonical combination order.
pub fn rank_selections(
    chart: &TypeChart,
    size: usize,
    top: Option<usize>,
) -> anyhow::Result<Vec<RankedSelection>> {
    if size == 0 || size > MAX_SELECTION_SIZE {
        anyhow::bail!("Selection size must be between 1 and {MAX_SELECTION_SIZE}, got {size}");
    }
    let attack_types = chart.attack_types();
    if size > attack_types.len() {
        anyhow::bail!(
            "Chart has only {} attack types; cannot pick {size}",
            attack_types.len()
        );
    }

    let combos = choose_indices(attack_types.len(), size);
    tracing::debug!(size, combos = combos.len(), "ranking attack selections");
    let mut ranked = combos
        .par_iter()
        .map(|indices| -> anyhow::Result<RankedSelection> {
            let selection = AttackSelection::new(indices.iter().map(|&idx| attack_types[idx]))?;
            let result = analyze(&selection, chart);
            Ok(RankedSelection { selection, result })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    ranked.sort_by_key(|entry| rank_key(&entry.result));
    if let Some(top) = top {
        ranked.truncate(top);
    }
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeName;
    use anyhow::Result;

    #[test]
    fn choose_indices_counts() {
        assert_eq!(choose_indices(18, 1).len(), 18);
        assert_eq!(choose_indices(18, 2).len(), 153);
        assert_eq!(choose_indices(18, 4).len(), 3060);
        assert_eq!(choose_indices(3, 4).len(), 0);
        assert_eq!(
            choose_indices(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn best_single_type_is_ghost() -> Result<()> {
        let chart = TypeChart::standard()?;
        let ranked = rank_selections(&chart, 1, Some(3))?;
        let leaders: Vec<&[TypeName]> = ranked.iter().map(|r| r.selection.types()).collect();
        assert_eq!(
            leaders,
            vec![&[TypeName::Ghost][..], &[TypeName::Dragon][..], &[TypeName::Rock][..]]
        );
        assert_eq!(ranked[0].result.neutral_or_better(), 138);
        Ok(())
    }

    #[test]
    fn best_pair_is_fighting_ghost() -> Result<()> {
        let chart = TypeChart::standard()?;
        let ranked = rank_selections(&chart, 2, None)?;
        assert_eq!(ranked.len(), 153);
        assert_eq!(ranked[0].selection.types(), &[TypeName::Fighting, TypeName::Ghost]);
        assert_eq!(ranked[0].result.neutral_or_better(), 170);
        assert_eq!(ranked[1].selection.types(), &[TypeName::Ice, TypeName::Ground]);
        Ok(())
    }

    #[test]
    fn size_is_validated() -> Result<()> {
        let chart = TypeChart::standard()?;
        assert!(rank_selections(&chart, 0, None).is_err());
        assert!(rank_selections(&chart, 5, None).is_err());
        let tiny = TypeChart::parse("AttackType,Fire\nFire,0.5")?;
        assert!(rank_selections(&tiny, 2, None).is_err());
        Ok(())
    }
}
