use crate::error::ChartError;
use phf::phf_map;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The eighteen elemental types, in the canonical chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TypeName {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

pub const TYPE_COUNT: usize = 18;

// Keys are lowercase English identifiers plus the Japanese display names.
static LABELS: phf::Map<&'static str, TypeName> = phf_map! {
    "normal" => TypeName::Normal,
    "fire" => TypeName::Fire,
    "water" => TypeName::Water,
    "electric" => TypeName::Electric,
    "grass" => TypeName::Grass,
    "ice" => TypeName::Ice,
    "fighting" => TypeName::Fighting,
    "poison" => TypeName::Poison,
    "ground" => TypeName::Ground,
    "flying" => TypeName::Flying,
    "psychic" => TypeName::Psychic,
    "bug" => TypeName::Bug,
    "rock" => TypeName::Rock,
    "ghost" => TypeName::Ghost,
    "dragon" => TypeName::Dragon,
    "dark" => TypeName::Dark,
    "steel" => TypeName::Steel,
    "fairy" => TypeName::Fairy,
    "ノーマル" => TypeName::Normal,
    "ほのお" => TypeName::Fire,
    "みず" => TypeName::Water,
    "でんき" => TypeName::Electric,
    "くさ" => TypeName::Grass,
    "こおり" => TypeName::Ice,
    "かくとう" => TypeName::Fighting,
    "どく" => TypeName::Poison,
    "じめん" => TypeName::Ground,
    "ひこう" => TypeName::Flying,
    "エスパー" => TypeName::Psychic,
    "むし" => TypeName::Bug,
    "いわ" => TypeName::Rock,
    "ゴースト" => TypeName::Ghost,
    "ドラゴン" => TypeName::Dragon,
    "あく" => TypeName::Dark,
    "はがね" => TypeName::Steel,
    "フェアリー" => TypeName::Fairy,
};

impl TypeName {
    pub const ALL: [TypeName; TYPE_COUNT] = [
        TypeName::Normal,
        TypeName::Fire,
        TypeName::Water,
        TypeName::Electric,
        TypeName::Grass,
        TypeName::Ice,
        TypeName::Fighting,
        TypeName::Poison,
        TypeName::Ground,
        TypeName::Flying,
        TypeName::Psychic,
        TypeName::Bug,
        TypeName::Rock,
        TypeName::Ghost,
        TypeName::Dragon,
        TypeName::Dark,
        TypeName::Steel,
        TypeName::Fairy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Normal => "Normal",
            TypeName::Fire => "Fire",
            TypeName::Water => "Water",
            TypeName::Electric => "Electric",
            TypeName::Grass => "Grass",
            TypeName::Ice => "Ice",
            TypeName::Fighting => "Fighting",
            TypeName::Poison => "Poison",
            TypeName::Ground => "Ground",
            TypeName::Flying => "Flying",
            TypeName::Psychic => "Psychic",
            TypeName::Bug => "Bug",
            TypeName::Rock => "Rock",
            TypeName::Ghost => "Ghost",
            TypeName::Dragon => "Dragon",
            TypeName::Dark => "Dark",
            TypeName::Steel => "Steel",
            TypeName::Fairy => "Fairy",
        }
    }

    /// Position in [`TypeName::ALL`], usable as a dense table index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolves an English identifier (any ASCII case) or a Japanese display name.
    pub fn from_label(label: &str) -> Option<TypeName> {
        let key = label.trim().to_ascii_lowercase();
        LABELS.get(key.as_str()).copied()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeName {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeName::from_label(s).ok_or_else(|| ChartError::UnknownType(s.trim().to_string()))
    }
}
