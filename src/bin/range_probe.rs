use std::collections::BTreeMap;
use std::time::Instant;

use blockrep::counters::{ExactDouble, RepeatedBlock};
use blockrep::{BlockCounter, IdRange, RangeEngine, Tally};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Time the closed-form counters on growing ranges and check them against
/// a digit-by-digit scan where the range is small enough.
#[derive(Parser)]
#[command(name = "range_probe", version)]
struct Options {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest upper bound to verify by scanning every integer
    #[arg(long, default_value_t = 1_000_000)]
    verify_limit: i64,

    /// Repetitions per measurement; the closed form is too fast to time once
    #[arg(long, default_value_t = 1_000)]
    iterations: u32,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    range: String,
    count: u64,
    sum: String,
    wall_us: f64,
    rss_delta_kib: u64,
    verification: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn main() {
    let options = Options::parse();

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("blockrep range probe");
    eprintln!("{}", "=".repeat(72));
    eprintln!("  • ranges [1, 10^k] for k = 1..=18, one row per counter and k");
    eprintln!(
        "  • scan verification up to hi = {}, {} iterations per timing",
        options.verify_limit, options.iterations
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] exact_double ...");
    measurements.extend(run_scenario(&ExactDouble, is_exact_double, &options, &mut sys));
    eprintln!("[2/2] repeated ...");
    measurements.extend(run_scenario(&RepeatedBlock, is_repeated, &options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("range_probe output error: {err}");
        std::process::exit(1);
    }
}

fn run_scenario<C: BlockCounter>(
    counter: &C,
    matches: fn(i64) -> bool,
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    let engine = RangeEngine::new(counter);
    (1..=18)
        .map(|k| {
            let range = IdRange::new(1, 10i64.pow(k));
            let before = rss_kib(sys);
            let start = Instant::now();
            let mut tally = Tally::ZERO;
            for _ in 0..options.iterations.max(1) {
                tally = std::hint::black_box(engine.tally_range(std::hint::black_box(range)));
            }
            let wall_us = start.elapsed().as_secs_f64() * 1e6 / options.iterations.max(1) as f64;
            let after = rss_kib(sys);

            let (verification, detail) = if range.hi() <= options.verify_limit {
                let expected = scan(range, matches);
                if expected == tally {
                    (VerificationStatus::Passed, None)
                } else {
                    (
                        VerificationStatus::Failed,
                        Some(format!(
                            "expected count={} sum={}",
                            expected.count, expected.sum
                        )),
                    )
                }
            } else {
                (VerificationStatus::NotChecked, None)
            };

            Measurement {
                scenario: counter.name(),
                range: range.to_string(),
                count: tally.count,
                sum: tally.sum.to_string(),
                wall_us,
                rss_delta_kib: after.saturating_sub(before),
                verification,
                detail,
            }
        })
        .collect()
}

fn scan(range: IdRange, matches: fn(i64) -> bool) -> Tally {
    (range.lo()..=range.hi())
        .filter(|&v| matches(v))
        .map(|v| Tally {
            count: 1,
            sum: v as i128,
        })
        .sum()
}

fn is_exact_double(value: i64) -> bool {
    let s = value.to_string();
    let (left, right) = s.split_at(s.len() / 2);
    s.len() % 2 == 0 && left == right
}

fn is_repeated(value: i64) -> bool {
    let s = value.to_string();
    let bytes = s.as_bytes();
    (1..bytes.len())
        .filter(|m| bytes.len() % m == 0)
        .any(|m| bytes.chunks(m).all(|chunk| chunk == &bytes[..m]))
}

fn print_summary(measurements: &[Measurement]) {
    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }

    let failed = measurements
        .iter()
        .filter(|m| m.verification == VerificationStatus::Failed)
        .count();

    for (scenario, ms) in &by_scenario {
        let checked = ms
            .iter()
            .filter(|m| m.verification != VerificationStatus::NotChecked)
            .count();
        let max_us = ms.iter().map(|m| m.wall_us).fold(0.0, f64::max);
        let avg_us = ms.iter().map(|m| m.wall_us).sum::<f64>() / ms.len() as f64;
        eprintln!("  {scenario}:");
        eprintln!("    Ranges: {} ({} verified by scan)", ms.len(), checked);
        eprintln!("    Time per range: max={max_us:.3}us, avg={avg_us:.3}us");
    }
    eprintln!();

    eprintln!("{}", "=".repeat(72));
    if failed == 0 {
        eprintln!("✓ All verified ranges match the scan.");
    } else {
        eprintln!("✗ {failed} range(s) disagree with the scan.");
    }
    eprintln!("{}", "=".repeat(72));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,range,count,sum,wall_us,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        println!(
            "{},{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.range,
            m.count,
            m.sum,
            m.wall_us,
            m.rss_delta_kib,
            m.verification.label(),
            m.detail.as_deref().unwrap_or_default()
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    let col2 = measurements
        .iter()
        .map(|m| m.range.len())
        .fold("range".len(), usize::max);
    let col4 = measurements
        .iter()
        .map(|m| m.sum.len())
        .fold("sum".len(), usize::max);

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>col4$}  {:>10}  {:>12}",
        "scenario", "range", "count", "sum", "wall_us", "status"
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<col4$}  {:-<10}  {:-<12}",
        "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12}  {:>col4$}  {:>10.3}  {:>12}",
            m.scenario,
            m.range,
            m.count,
            m.sum,
            m.wall_us,
            m.verification.label()
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let text = serde_json::to_string_pretty(measurements).map_err(|err| err.to_string())?;
    println!("{text}");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|process| process.memory() / 1024)
        .unwrap_or(0)
}
