use crate::coverage::{AttackSelection, CoverageResult};
use crate::i18n::{phrases, Lang};
use crate::ranking::RankedSelection;
use serde::Serialize;

fn selection_labels(selection: &AttackSelection, lang: Lang) -> String {
    selection
        .types()
        .iter()
        .map(|ty| ty.label(lang))
        .collect::<Vec<_>>()
        .join(", ")
}

fn summary(selection: &AttackSelection, result: &CoverageResult, lang: Lang) -> String {
    let types = selection_labels(selection, lang);
    let total = result.total();
    match lang {
        Lang::En => format!(
            "Best multiplier per defending type combination when attacking with {types} \
(total {total} combinations)."
        ),
        Lang::Ja => format!(
            "攻撃タイプ「{types}」で攻撃すると仮定した場合に、防御側のタイプそれぞれに対して、\
最もダメージが入る技の倍率ごとの内訳です。（合計 {total} 通り）"
        ),
    }
}

/// Six bucket rows, the two aggregate rows, then a one-line summary.
pub fn render_table(result: &CoverageResult, selection: &AttackSelection, lang: Lang) -> String {
    let words = phrases(lang);
    let mut out = String::new();
    for (bucket, count) in result.counts() {
        let multiplier = format!("{}{}", bucket.label(), words.multiplier_suffix);
        out.push_str(&format!("{multiplier:<12}{count:>4}{}\n", words.count_suffix));
    }
    out.push_str(&format!(
        "{}: {}{}\n",
        words.neutral_or_better,
        result.neutral_or_better(),
        words.count_suffix
    ));
    out.push_str(&format!(
        "{}: {}{}\n",
        words.resisted_or_immune,
        result.resisted_or_immune(),
        words.count_suffix
    ));
    if result.fallback_profiles() > 0 {
        out.push_str(&format!(
            "{}{}{}\n",
            words.fallback_prefix,
            result.fallback_profiles(),
            words.fallback_suffix
        ));
    }
    out.push_str(&summary(selection, result, lang));
    out
}

/// JSON shape shared by single reports and ranking entries: the selection
/// next to the flattened [`CoverageResult`] fields.
#[derive(Debug, Serialize)]
pub struct CoverageReport<'a> {
    pub selection: &'a AttackSelection,
    #[serde(flatten)]
    pub result: &'a CoverageResult,
}

pub fn render_json(
    result: &CoverageResult,
    selection: &AttackSelection,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CoverageReport { selection, result })
}

pub fn render_ranking(ranked: &[RankedSelection], lang: Lang) -> String {
    let words = phrases(lang);
    let mut out = String::new();
    for (idx, entry) in ranked.iter().enumerate() {
        let counts = entry
            .result
            .counts()
            .map(|(bucket, count)| format!("{}{}={count}", bucket.label(), words.multiplier_suffix))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "{:>3}. {:<40} {:>3}/{}  [{counts}]\n",
            idx + 1,
            selection_labels(&entry.selection, lang),
            entry.result.neutral_or_better(),
            entry.result.total(),
        ));
    }
    out
}

pub fn render_ranking_json(ranked: &[RankedSelection]) -> serde_json::Result<String> {
    let reports: Vec<CoverageReport<'_>> = ranked
        .iter()
        .map(|entry| CoverageReport {
            selection: &entry.selection,
            result: &entry.result,
        })
        .collect();
    serde_json::to_string_pretty(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TypeChart;
    use crate::coverage::analyze;
    use crate::ranking::rank_selections;
    use crate::types::TypeName;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn table_lists_buckets_then_aggregates() -> Result<()> {
        let chart = TypeChart::standard()?;
        let selection = AttackSelection::new([TypeName::Fire])?;
        let result = analyze(&selection, &chart);
        let text = render_table(&result, &selection, Lang::En);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("4x"));
        assert!(lines[0].ends_with("6 types"));
        assert!(lines[5].starts_with("0x"));
        assert_eq!(lines[6], "Neutral or better (4/2/1): 121 types");
        assert_eq!(lines[7], "Resisted or immune (0.5/0.25/0): 50 types");
        assert!(lines[8].contains("Fire"));
        assert!(lines[8].contains("171"));
        Ok(())
    }

    #[test]
    fn japanese_table_uses_localized_labels() -> Result<()> {
        let chart = TypeChart::standard()?;
        let selection = AttackSelection::new([TypeName::Fire, TypeName::Water])?;
        let result = analyze(&selection, &chart);
        let text = render_table(&result, &selection, Lang::Ja);
        assert!(text.starts_with("4 倍"));
        assert!(text.contains("等倍以上（4・2・1）"));
        assert!(text.contains("「ほのお, みず」"));
        Ok(())
    }

    #[test]
    fn json_report_shape() -> Result<()> {
        let chart = TypeChart::standard()?;
        let selection = AttackSelection::new([TypeName::Ground, TypeName::Ice])?;
        let result = analyze(&selection, &chart);
        let value: serde_json::Value = serde_json::from_str(&render_json(&result, &selection)?)?;
        assert_eq!(value["selection"], json!(["Ground", "Ice"]));
        assert_eq!(value["counts"]["4"], 16);
        assert_eq!(value["counts"]["0"], 0);
        assert_eq!(value["neutral_or_better"], 169);
        assert_eq!(value["total"], 171);
        Ok(())
    }

    #[test]
    fn json_report_reuses_result_fields() -> Result<()> {
        let chart = TypeChart::standard()?;
        let selection = AttackSelection::new([TypeName::Fire])?;
        let result = analyze(&selection, &chart);
        let mut expected = serde_json::to_value(&result)?;
        expected["selection"] = json!(["Fire"]);
        let value: serde_json::Value = serde_json::from_str(&render_json(&result, &selection)?)?;
        assert_eq!(value, expected);
        Ok(())
    }

    #[test]
    fn ranking_json_entries_share_the_report_shape() -> Result<()> {
        let chart = TypeChart::standard()?;
        let ranked = rank_selections(&chart, 1, Some(2))?;
        let value: serde_json::Value = serde_json::from_str(&render_ranking_json(&ranked)?)?;
        assert_eq!(value[0]["selection"], json!(["Ghost"]));
        assert_eq!(value[0]["neutral_or_better"], 138);
        assert_eq!(value[1]["selection"], json!(["Dragon"]));
        Ok(())
    }

    #[test]
    fn fallback_notice_is_localized() -> Result<()> {
        let chart = TypeChart::parse("AttackType,Fire,Water\nFire,0.5,oops")?;
        let selection = AttackSelection::new([TypeName::Fire])?;
        let result = analyze(&selection, &chart);
        assert_eq!(result.fallback_profiles(), 2);

        let ja = render_table(&result, &selection, Lang::Ja);
        assert!(ja.contains("警告: 相性表に欠けている値があるため 2 通りを等倍として計算しました"));
        assert!(!ja.contains("warning"));

        let en = render_table(&result, &selection, Lang::En);
        assert!(en.contains("warning: 2 combinations used neutral fallbacks"));
        Ok(())
    }
}
