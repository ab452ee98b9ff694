use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::tabulated::tabulatedfunctionfactory::TabulatedFunctionType;
use crate::threads::launcher::Discipline;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

/// Settings of the producer/consumer demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadsConfiguration {
    task_count: usize,
    grace_period_ms: Option<u64>,
    discipline: Discipline,
}

impl ThreadsConfiguration {
    pub fn new(task_count: usize, grace_period: Option<Duration>, discipline: Discipline) -> ThreadsConfiguration {
        ThreadsConfiguration {
            task_count,
            // rounded up so a short non-zero grace period never becomes zero
            grace_period_ms: grace_period
                .map(|period| u64::try_from(period.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX)),
            discipline,
        }
    }

    pub fn task_count(&self) -> usize {
        self.task_count
    }

    /// How long the launcher waits for the actors before cancelling them.
    /// `None` waits until both finish.
    pub fn grace_period(&self) -> Option<Duration> {
        self.grace_period_ms.map(Duration::from_millis)
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn with_discipline(&self, discipline: Discipline) -> ThreadsConfiguration {
        ThreadsConfiguration { discipline, ..self.clone() }
    }
}

impl Default for ThreadsConfiguration {
    fn default() -> ThreadsConfiguration {
        ThreadsConfiguration {
            task_count: 100,
            grace_period_ms: None,
            discipline: Discipline::Alternating,
        }
    }
}

/// Run-time settings, loaded from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    tabulated_function_type: TabulatedFunctionType,
    threads: ThreadsConfiguration,
    log_filter: String,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn tabulated_function_type(&self) -> TabulatedFunctionType {
        self.tabulated_function_type
    }

    pub fn threads(&self) -> &ThreadsConfiguration {
        &self.threads
    }

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            tabulated_function_type: TabulatedFunctionType::Array,
            threads: ThreadsConfiguration::default(),
            log_filter: "tabfn=info".to_owned(),
        }
    }
}

impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(json: &str) -> Result<Configuration, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type={}, tasks={}, discipline={:?}, grace_period={:?}",
            self.tabulated_function_type,
            self.threads.task_count,
            self.threads.discipline,
            self.threads.grace_period()
        )
    }
}
