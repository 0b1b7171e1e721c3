use thiserror::Error;

/// Minimum aggregate score for a sequence that passed every hard check to be accepted.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.5;
/// Share of a population score taken by the biophysical fit; the motif score gets the rest.
pub const DEFAULT_BIOPHYSICAL_WEIGHT: f64 = 0.5;
/// Weight sums further than this from 1.0 are renormalized and reported.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParameterError {
    #[error("Parameter '{name}' must lie in [0, 1], got {value}")]
    OutOfUnitInterval { name: &'static str, value: f64 },

    #[error("Parameter '{name}' must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("Worker count must be at least 1")]
    NoWorkers,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub acceptance_threshold: f64,
    pub biophysical_weight: f64,
    pub weight_tolerance: f64,
}

impl ScoringConfig {
    pub fn motif_weight(&self) -> f64 {
        1.0 - self.biophysical_weight
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            biophysical_weight: DEFAULT_BIOPHYSICAL_WEIGHT,
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
        }
    }
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    acceptance_threshold: Option<f64>,
    biophysical_weight: Option<f64>,
    weight_tolerance: Option<f64>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acceptance_threshold(mut self, threshold: f64) -> Self {
        self.acceptance_threshold = Some(threshold);
        self
    }
    pub fn biophysical_weight(mut self, weight: f64) -> Self {
        self.biophysical_weight = Some(weight);
        self
    }
    pub fn weight_tolerance(mut self, tolerance: f64) -> Self {
        self.weight_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ParameterError> {
        let defaults = ScoringConfig::default();
        let config = ScoringConfig {
            acceptance_threshold: unit_interval(
                "acceptance_threshold",
                self.acceptance_threshold
                    .unwrap_or(defaults.acceptance_threshold),
            )?,
            biophysical_weight: unit_interval(
                "biophysical_weight",
                self.biophysical_weight.unwrap_or(defaults.biophysical_weight),
            )?,
            weight_tolerance: non_negative(
                "weight_tolerance",
                self.weight_tolerance.unwrap_or(defaults.weight_tolerance),
            )?,
        };
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchConfig {
    pub scoring: ScoringConfig,
    /// Size of the worker pool, already capped to the available parallelism.
    pub workers: usize,
}

#[derive(Default)]
pub struct BatchConfigBuilder {
    scoring: Option<ScoringConfig>,
    workers: Option<usize>,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = Some(scoring);
        self
    }
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn build(self) -> Result<BatchConfig, ParameterError> {
        let available = available_workers();
        let workers = match self.workers {
            Some(0) => return Err(ParameterError::NoWorkers),
            Some(n) => n.min(available),
            None => available,
        };
        Ok(BatchConfig {
            scoring: self.scoring.unwrap_or_default(),
            workers,
        })
    }
}

pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn unit_interval(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ParameterError::OutOfUnitInterval { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_design_constants() {
        let config = ScoringConfigBuilder::new().build().unwrap();
        assert_eq!(config, ScoringConfig::default());
        assert_eq!(config.acceptance_threshold, 0.5);
        assert_eq!(config.motif_weight(), 0.5);
    }

    #[test]
    fn builder_overrides_individual_fields() {
        let config = ScoringConfigBuilder::new()
            .acceptance_threshold(0.7)
            .biophysical_weight(0.25)
            .build()
            .unwrap();
        assert_eq!(config.acceptance_threshold, 0.7);
        assert_eq!(config.motif_weight(), 0.75);
        assert_eq!(config.weight_tolerance, DEFAULT_WEIGHT_TOLERANCE);
    }

    #[test]
    fn builder_rejects_out_of_range_values() {
        assert_eq!(
            ScoringConfigBuilder::new().acceptance_threshold(1.2).build(),
            Err(ParameterError::OutOfUnitInterval {
                name: "acceptance_threshold",
                value: 1.2
            })
        );
        assert!(matches!(
            ScoringConfigBuilder::new().weight_tolerance(-1.0).build(),
            Err(ParameterError::Negative { .. })
        ));
        assert!(ScoringConfigBuilder::new()
            .biophysical_weight(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn batch_workers_are_capped_by_available_parallelism() {
        let config = BatchConfigBuilder::new().workers(usize::MAX).build().unwrap();
        assert_eq!(config.workers, available_workers());

        let config = BatchConfigBuilder::new().workers(1).build().unwrap();
        assert_eq!(config.workers, 1);
    }

    #[test]
    fn batch_rejects_zero_workers() {
        assert_eq!(
            BatchConfigBuilder::new().workers(0).build(),
            Err(ParameterError::NoWorkers)
        );
    }
}
