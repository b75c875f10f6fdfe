use serde::Deserialize;

use crate::error::GraphError;
use crate::models::GraphData;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Bounds on a single graph request.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default = "default_max_metrics")]
    pub max_metrics: usize,
    #[serde(default = "default_max_timestamps")]
    pub max_timestamps: usize,
    /// Reject metrics with more samples than timestamps. Shorter series are always accepted.
    #[serde(default)]
    pub strict_alignment: bool,
}

fn default_max_body_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_max_metrics() -> usize {
    200
}

fn default_max_timestamps() -> usize {
    20_000
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            max_metrics: default_max_metrics(),
            max_timestamps: default_max_timestamps(),
            strict_alignment: false,
        }
    }
}

impl LimitsConfig {
    pub fn check(&self, graph_data: &GraphData) -> Result<(), GraphError> {
        if graph_data.metrics.len() > self.max_metrics {
            return Err(GraphError::TooManyMetrics {
                count: graph_data.metrics.len(),
                limit: self.max_metrics,
            });
        }
        if graph_data.times.len() > self.max_timestamps {
            return Err(GraphError::TooManyTimestamps {
                count: graph_data.times.len(),
                limit: self.max_timestamps,
            });
        }
        if self.strict_alignment
            && let Some(metric) = graph_data
                .metrics
                .iter()
                .find(|m| m.data.len() > graph_data.times.len())
        {
            return Err(GraphError::MisalignedSeries {
                metric: metric.metric.clone(),
                samples: metric.data.len(),
                times: graph_data.times.len(),
            });
        }
        Ok(())
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.limits.max_body_bytes > 0,
            "limits.max_body_bytes must be > 0, got {}",
            self.limits.max_body_bytes
        );
        anyhow::ensure!(
            self.limits.max_metrics > 0,
            "limits.max_metrics must be > 0, got {}",
            self.limits.max_metrics
        );
        anyhow::ensure!(
            self.limits.max_timestamps > 0,
            "limits.max_timestamps must be > 0, got {}",
            self.limits.max_timestamps
        );
        Ok(())
    }
}
