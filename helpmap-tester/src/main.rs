mod probe;
mod reports;
mod scenarios;
mod util;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use reports::ScenarioResult;
use scenarios::{expand_scenarios, get_scenario, list_scenarios, run_scenario};
use util::{parse_slide_counts, split_csv};

#[derive(Debug, Parser)]
#[command(name = "helpmap-tester", version)]
#[command(about = "Runs HelpMap client behaviour scenarios and probes the backend")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Carousel slide counts to exercise (comma-separated)
    #[arg(long, default_value = "0,1,2,3,7,9,10")]
    slides: String,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Base URL of a running backend to probe, e.g. http://localhost:5000
    #[arg(long)]
    probe_api: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let slide_counts = parse_slide_counts(&args.slides)?;
    let scenarios = expand_scenarios(&split_csv(&args.scenarios));
    let mut results = run_scenarios(&scenarios, &slide_counts, args.verbose)?;

    if let Some(base_url) = &args.probe_api {
        println!("{} {}", "🔌 Probing".bright_blue().bold(), base_url);
        results.push(probe::probe_api(base_url).await);
    }

    write_reports(&args, &slide_counts, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🗺️  HelpMap Scenario Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn run_scenarios(
    names: &[String],
    slide_counts: &[usize],
    verbose: bool,
) -> Result<Vec<ScenarioResult>> {
    let mut results = Vec::with_capacity(names.len());
    for name in names {
        let Some(scenario) = get_scenario(name) else {
            bail!("unknown scenario `{name}` (see --list-scenarios)");
        };
        if verbose {
            println!("▶ {}", scenario.name.yellow());
        }
        results.push(run_scenario(scenario, slide_counts, verbose));
    }
    Ok(results)
}

fn write_reports(
    args: &Args,
    slide_counts: &[usize],
    results: &[ScenarioResult],
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, slide_counts, results)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, results)?,
        _ => {
            reports::generate_console_report(&mut output_target, results, start_time.elapsed())?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scenarios_are_rejected() {
        let err = run_scenarios(&["nope".to_string()], &[3], false).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn named_scenarios_run_in_order() {
        let names = vec!["theme".to_string(), "carousel-cycle".to_string()];
        let results = run_scenarios(&names, &[3, 9], false).unwrap();
        assert_eq!(results[0].scenario_name, "theme");
        assert_eq!(results[1].iterations_run, 2);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::parse_from(["helpmap-tester"]);
        assert_eq!(args.scenarios, "all");
        assert_eq!(args.report, "console");
        assert!(args.probe_api.is_none());
        assert_eq!(parse_slide_counts(&args.slides).unwrap(), vec![0, 1, 2, 3, 7, 9, 10]);
    }
}
