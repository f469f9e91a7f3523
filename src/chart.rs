//! Attack/defence matchup table parsed from comma-separated text.
//!
//! The first line is a header whose first cell is a label and whose remaining
//! cells name the defending types. Every following line names an attacking
//! type and lists one multiplier per header column. Malformed rows and cells
//! are skipped with a [`ParseWarning`]; only a table with no content at all is
//! rejected.

use crate::error::ChartError;
use crate::types::{TypeName, TYPE_COUNT};
use std::fmt;

pub const NEUTRAL: f64 = 1.0;

/// The standard 18x18 chart (Generation 6 onwards).
pub const STANDARD_CHART_CSV: &str = include_str!("../data/typechart.csv");

#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    ColumnCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    InvalidMultiplier {
        line: usize,
        attack: TypeName,
        defense: TypeName,
        raw: String,
    },
    UnknownHeaderLabel {
        column: usize,
        label: String,
    },
    DuplicateHeaderLabel {
        column: usize,
        defense: TypeName,
    },
    UnknownRowLabel {
        line: usize,
        label: String,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::ColumnCountMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: expected {expected} columns, found {found}; row skipped"
            ),
            ParseWarning::InvalidMultiplier {
                line,
                attack,
                defense,
                raw,
            } => write!(
                f,
                "line {line}: invalid multiplier {raw:?} at attack={attack}, defense={defense}"
            ),
            ParseWarning::UnknownHeaderLabel { column, label } => {
                write!(f, "header column {column}: unknown type {label:?}; column ignored")
            }
            ParseWarning::DuplicateHeaderLabel { column, defense } => {
                write!(f, "header column {column}: {defense} listed twice; column ignored")
            }
            ParseWarning::UnknownRowLabel { line, label } => {
                write!(f, "line {line}: unknown attack type {label:?}; row skipped")
            }
        }
    }
}

/// Immutable matchup lookup. Absent entries read as [`NEUTRAL`].
#[derive(Debug, Clone)]
pub struct TypeChart {
    attack_types: Vec<TypeName>,
    defense_types: Vec<TypeName>,
    table: [[Option<f64>; TYPE_COUNT]; TYPE_COUNT],
    warnings: Vec<ParseWarning>,
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split(',').map(|cell| cell.trim()).collect()
}

fn parse_multiplier(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

fn record(warnings: &mut Vec<ParseWarning>, warning: ParseWarning) {
    tracing::warn!(%warning, "type chart input");
    warnings.push(warning);
}

impl TypeChart {
    pub fn parse(raw: &str) -> Result<TypeChart, ChartError> {
        let mut lines = raw
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header_line) = lines.next().ok_or(ChartError::EmptyInput)?;
        let header = split_cells(header_line);

        let mut warnings = Vec::new();
        let mut defense_types = Vec::new();
        let mut columns: Vec<Option<TypeName>> = Vec::with_capacity(header.len());
        for (column, label) in header.iter().enumerate().skip(1) {
            let resolved = match TypeName::from_label(label) {
                None => {
                    record(
                        &mut warnings,
                        ParseWarning::UnknownHeaderLabel {
                            column,
                            label: label.to_string(),
                        },
                    );
                    None
                }
                Some(defense) if defense_types.contains(&defense) => {
                    record(
                        &mut warnings,
                        ParseWarning::DuplicateHeaderLabel { column, defense },
                    );
                    None
                }
                Some(defense) => {
                    defense_types.push(defense);
                    Some(defense)
                }
            };
            columns.push(resolved);
        }

        let mut attack_types = Vec::new();
        let mut table = [[None; TYPE_COUNT]; TYPE_COUNT];
        for (line, text) in lines {
            let cells = split_cells(text);
            if cells.len() != header.len() {
                record(
                    &mut warnings,
                    ParseWarning::ColumnCountMismatch {
                        line,
                        expected: header.len(),
                        found: cells.len(),
                    },
                );
                continue;
            }
            let Some(attack) = TypeName::from_label(cells[0]) else {
                record(
                    &mut warnings,
                    ParseWarning::UnknownRowLabel {
                        line,
                        label: cells[0].to_string(),
                    },
                );
                continue;
            };
            if !attack_types.contains(&attack) {
                attack_types.push(attack);
            }
            for (raw, column) in cells[1..].iter().zip(&columns) {
                let Some(defense) = *column else {
                    continue;
                };
                match parse_multiplier(raw) {
                    Some(value) => table[attack.index()][defense.index()] = Some(value),
                    None => record(
                        &mut warnings,
                        ParseWarning::InvalidMultiplier {
                            line,
                            attack,
                            defense,
                            raw: raw.to_string(),
                        },
                    ),
                }
            }
        }

        tracing::debug!(
            attack_types = attack_types.len(),
            defense_types = defense_types.len(),
            warnings = warnings.len(),
            "parsed type chart"
        );
        Ok(TypeChart {
            attack_types,
            defense_types,
            table,
            warnings,
        })
    }

    pub fn standard() -> Result<TypeChart, ChartError> {
        TypeChart::parse(STANDARD_CHART_CSV)
    }

    /// Attacking types in the order their rows first appeared.
    pub fn attack_types(&self) -> &[TypeName] {
        &self.attack_types
    }

    /// Defending types in header order.
    pub fn defense_types(&self) -> &[TypeName] {
        &self.defense_types
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn entry(&self, attack: TypeName, defense: TypeName) -> Option<f64> {
        self.table[attack.index()][defense.index()]
    }

    pub fn single_effectiveness(&self, attack: TypeName, defense: TypeName) -> f64 {
        self.entry(attack, defense).unwrap_or_else(|| {
            tracing::debug!(%attack, %defense, "no chart entry; treating as neutral");
            NEUTRAL
        })
    }

    /// Multiplier against a single or dual-typed defender. Both halves of a
    /// dual type stack multiplicatively.
    pub fn effectiveness(
        &self,
        attack: TypeName,
        defense1: TypeName,
        defense2: Option<TypeName>,
    ) -> f64 {
        let first = self.single_effectiveness(attack, defense1);
        match defense2 {
            Some(second) => first * self.single_effectiveness(attack, second),
            None => first,
        }
    }

    /// Label-based variant for data-driven callers. Unknown or missing labels
    /// degrade to a neutral factor instead of failing.
    pub fn effectiveness_by_label(
        &self,
        attack: &str,
        defense1: &str,
        defense2: Option<&str>,
    ) -> f64 {
        if defense1.trim().is_empty() {
            tracing::warn!(attack, "defense type 1 is required; treating as neutral");
            return NEUTRAL;
        }
        let Some(attack_type) = TypeName::from_label(attack) else {
            tracing::warn!(attack, "unknown attack type; treating as neutral");
            return NEUTRAL;
        };
        let factor = |label: &str| match TypeName::from_label(label) {
            Some(defense) => self.single_effectiveness(attack_type, defense),
            None => {
                tracing::warn!(defense = label, "unknown defense type; treating as neutral");
                NEUTRAL
            }
        };
        let first = factor(defense1);
        match defense2.map(str::trim).filter(|label| !label.is_empty()) {
            Some(second) => first * factor(second),
            None => first,
        }
    }

    /// Every attacking type's multiplier against one defence profile.
    pub fn all_attack_effectiveness(
        &self,
        defense1: TypeName,
        defense2: Option<TypeName>,
    ) -> Vec<(TypeName, f64)> {
        self.attack_types
            .iter()
            .map(|&attack| (attack, self.effectiveness(attack, defense1, defense2)))
            .collect()
    }

    /// True when every lookup `effectiveness(attack, defense1, defense2)`
    /// would make is backed by a stored entry.
    pub fn covers(&self, attack: TypeName, defense1: TypeName, defense2: Option<TypeName>) -> bool {
        self.entry(attack, defense1).is_some()
            && defense2.map_or(true, |second| self.entry(attack, second).is_some())
    }
}
