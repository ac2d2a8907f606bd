use crate::error::{DiscoveryError, Result};
use serde::Deserialize;
use std::env;

/// Prefix for ranking tunables read from the environment
pub const ENV_PREFIX: &str = "DISCOVERY_";

#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceConfig,
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_name: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Plain
        }
    }
}

/// Ranking tunables; every default is the production formula constant
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_forum_post_weight")]
    pub forum_post_weight: f64,
    #[serde(default = "default_forum_member_weight")]
    pub forum_member_weight: f64,
    #[serde(default = "default_trending_day_weight")]
    pub trending_day_weight: f64,
    #[serde(default = "default_trending_week_weight")]
    pub trending_week_weight: f64,
    #[serde(default = "default_trending_month_weight")]
    pub trending_month_weight: f64,
    #[serde(default = "default_engagement_weight")]
    pub engagement_weight: f64,
}

/// Weights used by the activity and trending formulas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Multiplier on forum posts per day
    pub forum_post: f64,
    /// Multiplier on forum member count
    pub forum_member: f64,
    /// Per post in the last 24 hours
    pub trending_day: f64,
    /// Per post in the last 7 days
    pub trending_week: f64,
    /// Per post in the last 30 days
    pub trending_month: f64,
    /// Multiplier on votes plus comments
    pub engagement: f64,
}

// Default values
fn default_limit() -> usize {
    100
}

fn default_forum_post_weight() -> f64 {
    100.0
}

fn default_forum_member_weight() -> f64 {
    10.0
}

fn default_trending_day_weight() -> f64 {
    100.0
}

fn default_trending_week_weight() -> f64 {
    10.0
}

fn default_trending_month_weight() -> f64 {
    1.0
}

fn default_engagement_weight() -> f64 {
    0.1
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            forum_post_weight: default_forum_post_weight(),
            forum_member_weight: default_forum_member_weight(),
            trending_day_weight: default_trending_day_weight(),
            trending_week_weight: default_trending_week_weight(),
            trending_month_weight: default_trending_month_weight(),
            engagement_weight: default_engagement_weight(),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DiscoveryConfig::default().weights()
    }
}

impl DiscoveryConfig {
    /// Read `DISCOVERY_*` variables from an arbitrary key/value source
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("forum_post_weight", self.forum_post_weight),
            ("forum_member_weight", self.forum_member_weight),
            ("trending_day_weight", self.trending_day_weight),
            ("trending_week_weight", self.trending_week_weight),
            ("trending_month_weight", self.trending_month_weight),
            ("engagement_weight", self.engagement_weight),
        ];

        for (name, value) in weights {
            if !value.is_finite() {
                return Err(DiscoveryError::InvalidConfig(format!(
                    "{ENV_PREFIX}{} must be a finite number, got {value}",
                    name.to_ascii_uppercase()
                )));
            }
        }

        Ok(())
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            forum_post: self.forum_post_weight,
            forum_member: self.forum_member_weight,
            trending_day: self.trending_day_weight,
            trending_week: self.trending_week_weight,
            trending_month: self.trending_month_weight,
            engagement: self.engagement_weight,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            service: ServiceConfig {
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "discovery-service".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .map(|raw| LogFormat::parse(&raw))
                    .unwrap_or_default(),
            },
            discovery: DiscoveryConfig::from_vars(env::vars())?,
        })
    }
}
