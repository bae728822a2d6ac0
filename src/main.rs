use anyhow::{bail, Context, Result};
use clap::Parser;
use schedlens::cli::{Cli, OutputFormat, TrialSpec};
use schedlens::compare::{compare, Trial, TrialMetrics};
use schedlens::json_output::JsonTrialReport;
use schedlens::{csv_output, json_output, metrics, report, runs, trace};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Analyze a single trial and print the report in the selected format
fn run_analysis(cli: &Cli) -> Result<()> {
    let trace_path = cli
        .trace
        .as_ref()
        .context("--trace is required (or use --trial ... --trial ... for comparison)")?;
    let meta_path = cli.meta.as_ref().context("--meta is required")?;

    let samples = trace::load_samples(trace_path)?;
    let meta = trace::load_thread_meta(meta_path)?;
    tracing::debug!(
        ticks = samples.len(),
        threads = meta.len(),
        "loaded trial input"
    );

    let snapshot = metrics::compute_metrics(&meta, &samples)?;
    let run_seq = runs::extract_runs(&samples)?;
    tracing::debug!(runs = run_seq.len(), "extracted run sequence");

    match cli.format {
        OutputFormat::Text => {
            print!("{}", report::metrics_block(&cli.label, &snapshot));
            if cli.runs {
                println!();
                print!("{}", report::run_table(&run_seq));
                print!("{}", report::timeline(&run_seq, 60));
            }
        }
        OutputFormat::Json => {
            let json_report = JsonTrialReport {
                label: cli.label.clone(),
                metrics: snapshot,
                runs: cli.runs.then(|| run_seq.clone()),
            };
            println!("{}", json_output::trial_to_json(&json_report)?);
        }
        OutputFormat::Csv => {
            if cli.runs {
                print!("{}", csv_output::runs_to_csv(&run_seq));
            } else {
                let row = TrialMetrics {
                    label: cli.label.clone(),
                    metrics: snapshot,
                };
                print!("{}", csv_output::metrics_to_csv(&[row]));
            }
        }
    }
    Ok(())
}

/// Compare several trials side-by-side
fn run_comparison(cli: &Cli) -> Result<()> {
    if cli.trace.is_some() || cli.meta.is_some() {
        bail!("--trial cannot be combined with --trace/--meta");
    }
    if cli.trials.len() < 2 {
        bail!("comparison needs at least two --trial entries");
    }

    let mut trials = Vec::with_capacity(cli.trials.len());
    for raw in &cli.trials {
        let spec = TrialSpec::parse(raw)?;
        let samples = trace::load_samples(&spec.trace)?;
        let meta = trace::load_thread_meta(&spec.meta)?;
        tracing::debug!(label = %spec.label, ticks = samples.len(), "loaded trial");
        trials.push(Trial::new(spec.label, meta, samples));
    }

    let rows = compare(&trials)?;
    match cli.format {
        OutputFormat::Text => print!("{}", report::comparison_table(&rows)),
        OutputFormat::Json => println!("{}", json_output::comparison_to_json(&rows)?),
        OutputFormat::Csv => print!("{}", csv_output::metrics_to_csv(&rows)),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.trials.is_empty() {
        run_analysis(&cli)
    } else {
        run_comparison(&cli)
    }
}
