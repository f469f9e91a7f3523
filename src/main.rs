use pokemon_type_coverage::{run, CliOptions, Command, Lang, OutputFormat};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--chart typechart.csv] [--lang en|ja] [--format table|json] TYPE [TYPE...]\n\
       cargo run --release -- [--chart typechart.csv] [--lang en|ja] [--format table|json] --rank K [--top N]"
    );
    std::process::exit(1);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TYPE_COVERAGE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("pokemon_type_coverage=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut chart_path = None;
    let mut lang = Lang::En;
    let mut format = OutputFormat::Table;
    let mut rank: Option<usize> = None;
    let mut top: Option<usize> = None;
    let mut labels = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--chart" => {
                chart_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--chart requires a path (e.g. --chart typechart.csv)")
                })?);
            }
            "--lang" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--lang requires en or ja"))?;
                lang = val.parse()?;
            }
            "--format" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--format requires table or json"))?;
                format = match val.to_ascii_lowercase().as_str() {
                    "table" => OutputFormat::Table,
                    "json" => OutputFormat::Json,
                    other => anyhow::bail!("Unknown format {other} (use table or json)"),
                };
            }
            "--rank" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--rank requires a selection size"))?;
                rank = Some(val.parse()?);
            }
            "--top" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--top requires a number"))?;
                top = Some(val.parse()?);
            }
            "--help" | "-h" => usage(),
            other if other.starts_with("--") => {
                return Err(anyhow::anyhow!("Unknown argument {other}"))
            }
            label => labels.push(label.to_string()),
        }
    }

    let command = match rank {
        Some(size) => {
            if !labels.is_empty() {
                anyhow::bail!("--rank does not take attack types, got {}", labels.join(", "));
            }
            Command::Rank { size, top }
        }
        None => {
            if top.is_some() {
                anyhow::bail!("--top only applies together with --rank");
            }
            if labels.is_empty() {
                anyhow::bail!("Select at least one attacking type (e.g. Fire Water)");
            }
            Command::Analyze(labels)
        }
    };

    Ok(CliOptions {
        chart_path,
        lang,
        format,
        command,
    })
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let opts = parse_args()?;
    run(opts)
}
