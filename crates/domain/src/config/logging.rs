use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log every reload and every answer.
    #[serde(default)]
    pub verbose: bool,

    /// Emit span timings for fetch, build and request handling.
    #[serde(default)]
    pub tracing: bool,
}

impl LoggingConfig {
    /// Level actually used when `RUST_LOG` is not set.
    pub fn effective_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.level
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
            tracing: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
