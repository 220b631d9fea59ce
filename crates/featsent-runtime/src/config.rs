use crate::{Error, Result};
use featsent_providers::{
    AnalyzerOptions, BucketDefinition, SentimentAnalyzer, create_analyzer, default_buckets,
};
use featsent_types::{DEFAULT_CSV, DEFAULT_HISTOGRAM_BINS, MAX_HISTOGRAM_BINS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FEATSENT_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.featsent.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FEATSENT_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("featsent").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".featsent.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV)
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

fn default_analyzer_name() -> String {
    "keyword".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_analyzer_name")]
    pub name: String,
    /// Records below this confidence are dropped by the keyword analyzer.
    #[serde(default)]
    pub min_confidence: f64,
    #[serde(default = "default_buckets")]
    pub buckets: Vec<BucketDefinition>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            name: default_analyzer_name(),
            min_confidence: 0.0,
            buckets: default_buckets(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset loaded by "use default CSV".
    #[serde(default = "default_csv_path")]
    pub default_csv: PathBuf,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_csv: default_csv_path(),
            histogram_bins: default_histogram_bins(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(Error::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        if self.histogram_bins > MAX_HISTOGRAM_BINS {
            return Err(Error::Config(format!(
                "histogram_bins must be at most {}, got {}",
                MAX_HISTOGRAM_BINS, self.histogram_bins
            )));
        }
        if !(0.0..=1.0).contains(&self.analyzer.min_confidence) {
            return Err(Error::Config(format!(
                "analyzer.min_confidence must be within [0, 1], got {}",
                self.analyzer.min_confidence
            )));
        }
        Ok(())
    }

    pub fn bucket_definitions(&self) -> &[BucketDefinition] {
        &self.analyzer.buckets
    }

    /// A results CSV always selects the precomputed analyzer; otherwise the
    /// configured one is used.
    pub fn build_analyzer(
        &self,
        results_path: Option<PathBuf>,
    ) -> Result<Box<dyn SentimentAnalyzer>> {
        let name = if results_path.is_some() {
            "precomputed"
        } else {
            self.analyzer.name.as_str()
        };

        let options = AnalyzerOptions {
            buckets: self.analyzer.buckets.clone(),
            min_confidence: self.analyzer.min_confidence,
            results_path,
        };

        tracing::debug!(analyzer = name, "creating analyzer");
        Ok(create_analyzer(name, options)?)
    }
}
