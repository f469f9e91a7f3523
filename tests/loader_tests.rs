use pokemon_type_coverage::chart::STANDARD_CHART_CSV;
use pokemon_type_coverage::{load_chart, run, CliOptions, Command, Lang, OutputFormat, TypeName};
use std::io::Write;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_chart_from_disk() {
    let file = write_temp(STANDARD_CHART_CSV);
    let chart = load_chart(file.path()).expect("load chart");
    assert_eq!(chart.defense_types().len(), 18);
    assert_eq!(chart.effectiveness(TypeName::Water, TypeName::Fire, Some(TypeName::Rock)), 4.0);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.csv");
    let err = load_chart(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing.csv"));
}

#[test]
fn empty_file_surfaces_empty_input() {
    let file = write_temp("\n\n");
    let err = load_chart(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("empty"));
}

#[test]
fn run_accepts_a_file_and_labels() {
    let file = write_temp(STANDARD_CHART_CSV);
    let opts = CliOptions {
        chart_path: Some(file.path().to_path_buf()),
        lang: Lang::Ja,
        format: OutputFormat::Json,
        command: Command::Analyze(vec!["ほのお".to_string(), "water".to_string()]),
    };
    run(opts).expect("run succeeds");
}

#[test]
fn run_rejects_unknown_attack_label() {
    let opts = CliOptions {
        chart_path: None,
        lang: Lang::En,
        format: OutputFormat::Table,
        command: Command::Analyze(vec!["Laser".to_string()]),
    };
    let err = run(opts).unwrap_err();
    assert!(err.to_string().contains("Laser"));
}

#[test]
fn run_ranks_pairs() {
    let opts = CliOptions {
        chart_path: None,
        lang: Lang::En,
        format: OutputFormat::Table,
        command: Command::Rank {
            size: 2,
            top: Some(5),
        },
    };
    run(opts).expect("rank succeeds");
}

#[test]
fn malformed_rows_are_recorded_once_and_run_still_succeeds() {
    let file = write_temp("AttackType,Fire,Water\nFire,0.5\nWater,2,0.5\n");
    let chart = load_chart(file.path()).expect("load chart");
    assert_eq!(chart.warnings().len(), 1);
    assert_eq!(chart.attack_types(), &[TypeName::Water]);

    let opts = CliOptions {
        chart_path: Some(file.path().to_path_buf()),
        lang: Lang::En,
        format: OutputFormat::Table,
        command: Command::Analyze(vec!["Water".to_string()]),
    };
    run(opts).expect("malformed rows are not fatal");
}
