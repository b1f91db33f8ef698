use clap::Parser;
use exercise_export::export::{CsvOptions, ExportOptions, export_file};
use exercise_export::{logger, source};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
struct AppConfig {
    output_dir: Option<PathBuf>,
    log_config: Option<PathBuf>,
}

fn load_config(cli_cfg: Option<PathBuf>) -> AppConfig {
    // Precedence: CLI > env > config files > defaults
    let mut cfg = AppConfig::default();
    if let Ok(s) = std::env::var("EXERCISE_EXPORT_OUTPUT_DIR") {
        cfg.output_dir = Some(PathBuf::from(s));
    }
    if let Ok(s) = std::env::var("EXERCISE_EXPORT_LOG_CONFIG") {
        cfg.log_config = Some(PathBuf::from(s));
    }
    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = &cli_cfg {
        paths.push(p.clone());
    }
    if let Ok(p) = std::env::var("EXERCISE_EXPORT_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Ok(home) = std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME")) {
        paths.push(PathBuf::from(home).join(".config").join("exercise-export.toml"));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join("exercise-export.toml"));
    }
    for p in paths {
        if p.exists()
            && let Ok(s) = std::fs::read_to_string(&p)
            && let Ok(file_cfg) = toml::from_str::<AppConfig>(&s)
        {
            if cfg.output_dir.is_none() {
                cfg.output_dir = file_cfg.output_dir;
            }
            if cfg.log_config.is_none() {
                cfg.log_config = file_cfg.log_config;
            }
        }
    }
    cfg
}

#[derive(Parser, Debug)]
#[command(name = "exercise-export", version, about = "Export exercise catalog records to CSV", long_about = None)]
struct Cli {
    #[arg(help = "Input JSON file holding an array of exercise records; use - for stdin")]
    input: String,
    #[arg(
        short,
        long,
        help = "Destination CSV path. Defaults to exercises.csv in the configured output directory."
    )]
    output: Option<PathBuf>,
    #[arg(long, default_value_t = ',', help = "CSV field delimiter (single ASCII character)")]
    delimiter: char,
    #[arg(long, help = "Path to a config file (TOML). If omitted, defaults are used.")]
    config: Option<PathBuf>,
    #[arg(long, help = "Path to a log4rs configuration file. Takes precedence over config/env.")]
    log_config: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = load_config(cli.config.clone());
    let log_config = cli.log_config.or(cfg.log_config);
    logger::init(log_config.as_deref())?;

    let delimiter =
        u8::try_from(cli.delimiter).map_err(|_| "delimiter must be a single ASCII character")?;

    let records = if cli.input == "-" {
        source::records_from_reader(std::io::stdin().lock())?
    } else {
        source::load_file(&cli.input)?
    };

    let out = cli
        .output
        .unwrap_or_else(|| cfg.output_dir.unwrap_or_default().join("exercises.csv"));
    let opts = ExportOptions { csv: CsvOptions { delimiter } };
    let report = export_file(&records, &out, &opts)?;
    println!("CSV file created at: {}", out.display());
    println!("Exported {} exercises to CSV", report.written);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
