// 日本語表示用の翻訳
use crate::types::TypeName;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ja,
}

impl FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Lang::En),
            "ja" | "jp" | "japanese" => Ok(Lang::Ja),
            other => anyhow::bail!("Unknown language {other} (use en or ja)"),
        }
    }
}

pub fn translate_type(ty: TypeName, lang: Lang) -> &'static str {
    if lang == Lang::En {
        return ty.as_str();
    }
    match ty {
        TypeName::Normal => "ノーマル",
        TypeName::Fire => "ほのお",
        TypeName::Water => "みず",
        TypeName::Electric => "でんき",
        TypeName::Grass => "くさ",
        TypeName::Ice => "こおり",
        TypeName::Fighting => "かくとう",
        TypeName::Poison => "どく",
        TypeName::Ground => "じめん",
        TypeName::Flying => "ひこう",
        TypeName::Psychic => "エスパー",
        TypeName::Bug => "むし",
        TypeName::Rock => "いわ",
        TypeName::Ghost => "ゴースト",
        TypeName::Dragon => "ドラゴン",
        TypeName::Dark => "あく",
        TypeName::Steel => "はがね",
        TypeName::Fairy => "フェアリー",
    }
}

impl TypeName {
    pub fn label(self, lang: Lang) -> &'static str {
        translate_type(self, lang)
    }
}

/// Fixed phrases used by the report renderer.
pub struct Phrases {
    pub multiplier_suffix: &'static str,
    pub count_suffix: &'static str,
    pub neutral_or_better: &'static str,
    pub resisted_or_immune: &'static str,
    /// Wrapped around the count of profiles that read a missing chart entry.
    pub fallback_prefix: &'static str,
    pub fallback_suffix: &'static str,
}

pub fn phrases(lang: Lang) -> Phrases {
    match lang {
        Lang::En => Phrases {
            multiplier_suffix: "x",
            count_suffix: " types",
            neutral_or_better: "Neutral or better (4/2/1)",
            resisted_or_immune: "Resisted or immune (0.5/0.25/0)",
            fallback_prefix: "warning: ",
            fallback_suffix: " combinations used neutral fallbacks for missing chart entries",
        },
        Lang::Ja => Phrases {
            multiplier_suffix: " 倍",
            count_suffix: " 種類",
            neutral_or_better: "等倍以上（4・2・1）",
            resisted_or_immune: "半減以下（0.5・0.25・0）",
            fallback_prefix: "警告: 相性表に欠けている値があるため ",
            fallback_suffix: " 通りを等倍として計算しました",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_japanese_name() {
        for ty in TypeName::ALL {
            assert_ne!(ty.label(Lang::Ja), ty.as_str());
        }
    }

    #[test]
    fn japanese_names_parse_back() {
        for ty in TypeName::ALL {
            assert_eq!(TypeName::from_label(ty.label(Lang::Ja)), Some(ty));
        }
    }

    #[test]
    fn lang_parsing() {
        assert_eq!("JA".parse::<Lang>().unwrap(), Lang::Ja);
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert!("fr".parse::<Lang>().is_err());
    }
}
