use std::process::ExitCode;

use indicatif::{ProgressBar, ProgressStyle};
use swapi_smoke::client::SwapiClient;
use swapi_smoke::config::{Config, OutputFormat};
use swapi_smoke::{logging, output, runner, scenarios};
use tracing::{error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env();
    let client = SwapiClient::new(config.base_url.clone());
    let selected = runner::filter(scenarios::catalog(), config.filter.as_deref());
    let pretty = config.output == OutputFormat::Pretty;

    if pretty {
        output::startup_banner(client.base_url(), config.run_mode, selected.len());
        if let Some(filter) = &config.filter {
            output::config_item("Filter", filter);
        }
    }

    if selected.is_empty() {
        warn!(filter = ?config.filter, "no scenarios match the filter");
    }

    let progress = if pretty {
        let bar = ProgressBar::new(selected.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let report = runner::run(&client, &selected, config.run_mode, &progress).await;

    if let Err(e) = output::emit(&report, config.output) {
        error!(error = %e, "failed to serialise report");
        return ExitCode::FAILURE;
    }

    ExitCode::from(report.verdict().exit_code())
}
