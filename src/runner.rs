use std::time::{Duration, Instant};

use futures_util::future::join_all;
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{info_span, warn, Instrument};

use crate::assertions::AssertionError;
use crate::client::SwapiClient;
use crate::scenarios::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Every scenario in flight at once, joined before reporting.
    #[default]
    Concurrent,
    Sequential,
}

#[derive(Debug)]
pub struct Outcome {
    pub name: &'static str,
    pub result: Result<(), AssertionError>,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    name: &'a str,
    passed: bool,
    error: Option<String>,
    elapsed_ms: u64,
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    passed: usize,
    failed: usize,
    outcomes: Vec<OutcomeRecord<'a>>,
}

/// How a run ends, as seen by the caller of the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    NothingToRun,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Passed => 0,
            Verdict::Failed => 1,
            Verdict::NothingToRun => 2,
        }
    }
}

/// Outcomes in the order the scenarios were given.
#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn verdict(&self) -> Verdict {
        if self.outcomes.is_empty() {
            Verdict::NothingToRun
        } else if self.is_success() {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let record = ReportRecord {
            passed: self.passed(),
            failed: self.failed(),
            outcomes: self
                .outcomes
                .iter()
                .map(|o| OutcomeRecord {
                    name: o.name,
                    passed: o.passed(),
                    error: o.result.as_ref().err().map(|e| e.to_string()),
                    elapsed_ms: u64::try_from(o.elapsed.as_millis()).unwrap_or(u64::MAX),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&record)
    }
}

/// Keep scenarios whose name contains `pattern`.
pub fn filter(scenarios: Vec<Scenario>, pattern: Option<&str>) -> Vec<Scenario> {
    match pattern {
        Some(pattern) => scenarios
            .into_iter()
            .filter(|s| s.name.contains(pattern))
            .collect(),
        None => scenarios,
    }
}

pub async fn run(
    client: &SwapiClient,
    scenarios: &[Scenario],
    mode: RunMode,
    progress: &ProgressBar,
) -> Report {
    progress.set_length(scenarios.len() as u64);

    let outcomes = match mode {
        RunMode::Concurrent => {
            join_all(
                scenarios
                    .iter()
                    .map(|scenario| run_one(client, scenario, progress)),
            )
            .await
        }
        RunMode::Sequential => {
            let mut outcomes = Vec::with_capacity(scenarios.len());
            for scenario in scenarios {
                outcomes.push(run_one(client, scenario, progress).await);
            }
            outcomes
        }
    };

    progress.finish_and_clear();
    Report { outcomes }
}

async fn run_one(client: &SwapiClient, scenario: &Scenario, progress: &ProgressBar) -> Outcome {
    let span = info_span!("scenario", scenario = scenario.name);
    let started = Instant::now();
    let result = scenario.run(client).instrument(span).await;

    if let Err(e) = &result {
        warn!(scenario = scenario.name, error = %e, "scenario failed");
    }
    progress.inc(1);
    progress.set_message(scenario.name);

    Outcome {
        name: scenario.name,
        result,
        elapsed: started.elapsed(),
    }
}
