use crate::error::{Result, TscvError};
use crate::types::SplitMethod;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for the rolling (expanding-origin) method.
///
/// All sizes are row counts, not calendar spans: the splitter is purely
/// positional, so daily data with gaps still advances one row at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RollingParams {
    /// Minimum rows before the first test segment can begin
    pub initial_train_size: usize,
    /// Rows to advance per split
    pub step_size: usize,
    /// Width of each test segment
    pub test_size: usize,
}

/// Parameters for the sliding (fixed-width window) method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlidingParams {
    /// Fixed training-window width, constant across all splits
    pub window_size: usize,
    /// Rows to advance per split
    pub step_size: usize,
    /// Width of each test segment
    pub test_size: usize,
}

impl Default for RollingParams {
    fn default() -> Self {
        Self {
            // Five years of daily rows before the first test segment
            initial_train_size: 365 * 5,
            step_size: 30,
            test_size: 30,
        }
    }
}

impl Default for SlidingParams {
    fn default() -> Self {
        Self {
            window_size: 365 * 5,
            step_size: 30,
            test_size: 30,
        }
    }
}

impl RollingParams {
    pub fn validate(&self) -> Result<()> {
        require_positive("initial_train_size", self.initial_train_size)?;
        require_positive("step_size", self.step_size)?;
        require_positive("test_size", self.test_size)
    }
}

impl SlidingParams {
    pub fn validate(&self) -> Result<()> {
        require_positive("window_size", self.window_size)?;
        require_positive("step_size", self.step_size)?;
        require_positive("test_size", self.test_size)
    }
}

// A zero step would loop forever; zero sizes would produce degenerate empty
// segments. Rejecting them up front keeps "misconfigured call"
// distinguishable from the legitimate empty result when nothing fits.
fn require_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(TscvError::MalformedParameters(format!(
            "{} must be a positive integer",
            name
        )));
    }
    Ok(())
}

/// Cross-validation configuration: one active method plus the parameter
/// sections for both, so a saved file can switch methods without edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrossValidationConfig {
    pub method: SplitMethod,
    #[serde(default)]
    pub rolling: RollingParams,
    #[serde(default)]
    pub sliding: SlidingParams,
}

impl Default for CrossValidationConfig {
    fn default() -> Self {
        Self {
            method: SplitMethod::Rolling,
            rolling: RollingParams::default(),
            sliding: SlidingParams::default(),
        }
    }
}

impl CrossValidationConfig {
    pub fn validate(&self) -> Result<()> {
        self.rolling.validate()?;
        self.sliding.validate()?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TscvError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| TscvError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| TscvError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| TscvError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}
