use owo_colors::OwoColorize;

use crate::config::OutputFormat;
use crate::runner::{Outcome, Report, RunMode};

const ROCKET: &str = "🚀";

/// Banner naming the target, how scenarios will run, and how many
pub fn startup_banner(base_url: &str, mode: RunMode, scenarios: usize) {
    let mode = match mode {
        RunMode::Concurrent => "concurrent",
        RunMode::Sequential => "sequential",
    };
    println!();
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "{}  {} {}",
        ROCKET,
        "SWAPI SMOKE".bright_cyan().bold(),
        base_url.bright_white()
    );
    println!(
        "    {} scenarios, {}",
        scenarios.to_string().bright_white().bold(),
        mode.dimmed()
    );
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!(
        "{}  {}",
        "─".repeat(3).bright_white().dimmed(),
        title.bright_white().bold()
    );
}

/// Print configuration info
pub fn config_item(key: &str, value: &str) {
    println!(
        "{} {} {}",
        ROCKET,
        format!("{}:", key).bright_white(),
        value.bright_cyan()
    );
}

/// Print a warning (yellow)
pub fn warn(message: &str) {
    println!("{} {}", ROCKET, message.yellow());
}

/// Print one scenario outcome: green tick or red cross plus the reason
pub fn outcome(outcome: &Outcome) {
    let elapsed = format!("({} ms)", outcome.elapsed.as_millis());
    match &outcome.result {
        Ok(()) => println!(
            "  {} {} {}",
            "✔".green().bold(),
            outcome.name.green(),
            elapsed.dimmed()
        ),
        Err(e) => {
            println!(
                "  {} {} {}",
                "✘".red().bold(),
                outcome.name.red(),
                elapsed.dimmed()
            );
            println!("      {}", e.to_string().red());
        }
    }
}

/// Print the summary box
pub fn summary(report: &Report) {
    let passed = report.passed().to_string();
    let failed = report.failed().to_string();

    println!();
    if report.is_success() {
        println!("{}", "┌─────────────────────────────────────────┐".green());
        println!(
            "{}  {} All {} scenarios passed",
            "│".green(),
            ROCKET,
            passed.green().bold()
        );
        println!("{}", "└─────────────────────────────────────────┘".green());
    } else {
        println!("{}", "┌─────────────────────────────────────────┐".red());
        println!(
            "{}  {} passed, {} failed",
            "│".red(),
            passed.bright_white().bold(),
            failed.red().bold()
        );
        println!("{}", "└─────────────────────────────────────────┘".red());
    }
    println!();
}

/// Write the finished report to stdout in the configured format. JSON mode
/// prints nothing but the report, even when no scenario was selected.
pub fn emit(report: &Report, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Pretty if report.outcomes.is_empty() => {
            warn("No scenarios match the filter")
        }
        OutputFormat::Pretty => self::report(report),
    }
    Ok(())
}

pub fn report(report: &Report) {
    section("Scenarios");
    for o in &report.outcomes {
        outcome(o);
    }
    summary(report);
}
