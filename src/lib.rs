pub mod chart;
pub mod coverage;
pub mod error;
pub mod i18n;
pub mod ranking;
pub mod report;
pub mod types;

pub use crate::chart::{ParseWarning, TypeChart};
pub use crate::coverage::{analyze, best_coverage, AttackSelection, Bucket, CoverageResult};
pub use crate::error::ChartError;
pub use crate::i18n::Lang;
pub use crate::types::TypeName;

use crate::ranking::rank_selections;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Coverage of the given attack type labels.
    Analyze(Vec<String>),
    /// Every selection of `size` attack types, best first.
    Rank { size: usize, top: Option<usize> },
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    /// `None` uses the embedded standard chart.
    pub chart_path: Option<PathBuf>,
    pub lang: Lang,
    pub format: OutputFormat,
    pub command: Command,
}

pub fn load_chart(path: &Path) -> anyhow::Result<TypeChart> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read type chart at {}", path.display()))?;
    let chart = TypeChart::parse(&raw)
        .with_context(|| format!("Failed to parse type chart from {}", path.display()))?;
    Ok(chart)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let chart = match &opts.chart_path {
        Some(path) => load_chart(path)?,
        None => TypeChart::standard().context("Failed to parse the built-in type chart")?,
    };
    tracing::debug!(warnings = chart.warnings().len(), "type chart loaded");

    let output = match opts.command {
        Command::Analyze(labels) => {
            let selection = AttackSelection::from_labels(&labels)?;
            let result = analyze(&selection, &chart);
            match opts.format {
                OutputFormat::Table => report::render_table(&result, &selection, opts.lang),
                OutputFormat::Json => report::render_json(&result, &selection)?,
            }
        }
        Command::Rank { size, top } => {
            let ranked = rank_selections(&chart, size, top)?;
            match opts.format {
                OutputFormat::Table => report::render_ranking(&ranked, opts.lang),
                OutputFormat::Json => report::render_ranking_json(&ranked)?,
            }
        }
    };
    println!("{}", output.trim_end());
    Ok(())
}
