use serde::{Deserialize, Serialize};

use crate::coverage::MetricKind;
use crate::output::ReporterKind;

/// Thresholds for each metric of one scope. A missing entry means "no constraint".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PerMetricThresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statements: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<f64>,
}

impl PerMetricThresholds {
    #[must_use]
    pub const fn get(&self, metric: MetricKind) -> Option<f64> {
        match metric {
            MetricKind::Statements => self.statements,
            MetricKind::Branches => self.branches,
            MetricKind::Lines => self.lines,
            MetricKind::Functions => self.functions,
        }
    }

    pub const fn set(&mut self, metric: MetricKind, value: f64) {
        let slot = match metric {
            MetricKind::Statements => &mut self.statements,
            MetricKind::Branches => &mut self.branches,
            MetricKind::Lines => &mut self.lines,
            MetricKind::Functions => &mut self.functions,
        };
        *slot = Some(value);
    }
}

/// Threshold rule for one scope.
///
/// A positive number is a minimum percentage. A negative number is the largest
/// allowed number of uncovered items. Zero imposes no constraint.
///
/// ```toml
/// [thresholds]
/// global = 80
/// each = { branches = -5, lines = 60 }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ThresholdSpec {
    /// One value applied to all four metrics.
    Uniform(f64),
    PerMetric(PerMetricThresholds),
}

impl ThresholdSpec {
    /// The threshold that applies to `metric`, if any.
    #[must_use]
    pub const fn resolve(&self, metric: MetricKind) -> Option<f64> {
        match self {
            Self::Uniform(value) => Some(*value),
            Self::PerMetric(map) => map.get(metric),
        }
    }

    /// Every configured value, in metric order.
    pub fn values(&self) -> impl Iterator<Item = (MetricKind, f64)> + '_ {
        MetricKind::ALL
            .into_iter()
            .filter_map(|metric| self.resolve(metric).map(|value| (metric, value)))
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Applied to the summary of the whole (filtered) dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<ThresholdSpec>,

    /// Applied to every remaining file independently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub each: Option<ThresholdSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Root for exclude globs and for the file names shown in reports.
    #[serde(default)]
    pub base_path: String,

    #[serde(default = "default_reporters")]
    pub reporters: Vec<ReporterKind>,

    /// Glob patterns (relative to `base_path`) of files left out of every check.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Allow terminal styling in text output.
    #[serde(default = "default_true")]
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),
            base_path: String::new(),
            reporters: default_reporters(),
            excludes: Vec::new(),
            colors: true,
        }
    }
}

fn default_reporters() -> Vec<ReporterKind> {
    vec![ReporterKind::Text]
}

const fn default_true() -> bool {
    true
}

/// Parse a threshold given on the command line.
///
/// Accepts a single number (`80`, `-10`) or comma-separated `metric=value` pairs
/// (`statements=80,branches=-5`).
///
/// # Errors
/// Returns a message describing the first invalid part.
pub fn parse_threshold_spec(input: &str) -> std::result::Result<ThresholdSpec, String> {
    let input = input.trim();
    if let Ok(value) = input.parse::<f64>() {
        return Ok(ThresholdSpec::Uniform(value));
    }

    let mut map = PerMetricThresholds::default();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (metric, value) = part
            .split_once('=')
            .ok_or_else(|| format!("expected metric=value, got '{part}'"))?;
        let metric: MetricKind = metric.parse()?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("invalid threshold for {metric}: '{}'", value.trim()))?;
        map.set(metric, value);
    }

    if map == PerMetricThresholds::default() {
        return Err(format!("no thresholds in '{input}'"));
    }
    Ok(ThresholdSpec::PerMetric(map))
}
