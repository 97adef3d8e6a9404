use std::env;

use crate::runner::RunMode;

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub run_mode: RunMode,
    pub filter: Option<String>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let run_mode = if is_truthy(&lookup("SMOKE_SEQUENTIAL").unwrap_or_default()) {
            RunMode::Sequential
        } else {
            RunMode::Concurrent
        };

        let output = match lookup("SMOKE_OUTPUT")
            .unwrap_or_default()
            .trim()
            .to_lowercase()
            .as_str()
        {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Pretty,
        };

        Self {
            base_url: lookup("SWAPI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            run_mode,
            filter: lookup("SMOKE_FILTER")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            output,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value == "1" || value == "true" || value == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_target_live_service() {
        let config = config_from(&[]);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.run_mode, RunMode::Concurrent);
        assert_eq!(config.filter, None);
        assert_eq!(config.output, OutputFormat::Pretty);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SWAPI_BASE_URL", "http://localhost:8000/api/"),
            ("SMOKE_SEQUENTIAL", "Yes"),
            ("SMOKE_FILTER", " search "),
            ("SMOKE_OUTPUT", "JSON"),
        ]);
        assert_eq!(config.base_url, "http://localhost:8000/api/");
        assert_eq!(config.run_mode, RunMode::Sequential);
        assert_eq!(config.filter.as_deref(), Some("search"));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn blank_filter_and_unknown_values_fall_back() {
        let config = config_from(&[
            ("SMOKE_FILTER", "   "),
            ("SMOKE_SEQUENTIAL", "nope"),
            ("SMOKE_OUTPUT", "xml"),
        ]);
        assert_eq!(config.filter, None);
        assert_eq!(config.run_mode, RunMode::Concurrent);
        assert_eq!(config.output, OutputFormat::Pretty);
    }
}
