use serde::Deserialize;

use crate::models::BudgetRange;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Default tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Lower budget bound used when a request omits its budget
    #[serde(default = "default_budget_min")]
    pub default_budget_min: f64,

    /// Upper budget bound used when a request omits its budget
    #[serde(default = "default_budget_max")]
    pub default_budget_max: f64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_budget_min() -> f64 {
    15.0
}

fn default_budget_max() -> f64 {
    40.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            default_budget_min: default_budget_min(),
            default_budget_max: default_budget_max(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects an unusable default budget
    pub fn validate(&self) -> anyhow::Result<()> {
        let budget = self.default_budget();
        if budget.min < 0.0 || !budget.is_ordered() {
            anyhow::bail!(
                "Invalid default budget: {} to {}",
                budget.min,
                budget.max
            );
        }
        Ok(())
    }

    pub fn default_budget(&self) -> BudgetRange {
        BudgetRange::new(self.default_budget_min, self.default_budget_max)
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
