use super::validate::WeightedSequenceValidator;
use crate::core::config::models::PopulationConfig;
use crate::engine::config::BatchConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::result::{ValidationResult, Warning};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, instrument};

/// Validates every sequence against `config`, returning results in input order.
///
/// Sequences are independent, so with the `parallel` feature they are spread over a dedicated
/// pool of `batch.workers` threads. A sequence that cannot be analyzed gets its own invalid
/// result; only a configuration that cannot be blended fails the whole batch.
#[instrument(skip_all, name = "batch_validation", fields(sequences = sequences.len(), workers = batch.workers))]
pub fn validate_batch<S>(
    sequences: &[S],
    config: &PopulationConfig,
    batch: &BatchConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<ValidationResult>, EngineError>
where
    S: AsRef<str> + Sync,
{
    let validator = WeightedSequenceValidator::new(config, batch.scoring)?;

    reporter.report(Progress::BatchStart {
        total: sequences.len() as u64,
    });

    let blended = validator.blended_ranges();
    if blended.renormalized {
        reporter.report(Progress::Message(
            Warning::AncestryWeightRenormalized {
                total_weight: blended.total_weight,
            }
            .to_string(),
        ));
    }

    let validate_one = |(index, raw): (usize, &S)| {
        let result = validator.validate(raw.as_ref());
        reporter.report(Progress::SequenceValidated {
            index,
            valid: result.valid,
        });
        result
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<ValidationResult> = sequences.iter().enumerate().map(validate_one).collect();

    #[cfg(feature = "parallel")]
    let results: Vec<ValidationResult> = {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(batch.workers)
            .thread_name(|i| format!("healdette-worker-{i}"))
            .build()
            .map_err(|e| EngineError::Initialization(format!("worker pool: {e}")))?;
        pool.install(|| sequences.par_iter().enumerate().map(validate_one).collect())
    };

    let accepted = results.iter().filter(|r| r.valid).count();
    let rejected = results.len() - accepted;
    reporter.report(Progress::BatchFinish { accepted, rejected });
    info!(accepted, rejected, "Batch validation finished.");

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::validator::ConfigValidator;
    use crate::engine::blend::BlendError;
    use crate::engine::config::BatchConfigBuilder;
    use serde_json::json;
    use std::sync::Mutex;

    fn config(weight: f64) -> PopulationConfig {
        let doc = json!({
            "global_params": {
                "sequence_length": { "min": 2, "max": 30 },
                "structural_params": {
                    "helix_propensity": { "min": 0.5, "max": 1.5 },
                    "sheet_propensity": { "min": 0.5, "max": 1.6 }
                },
                "homopolymer_threshold": 4
            },
            "populations": {
                "alpha": {
                    "ancestry_weight": weight,
                    "binding_motifs": ["WY", "RF"],
                    "biophysical_params": {
                        "aromatic_content": { "min": 20, "max": 60 },
                        "hydrophobic_content": { "min": 30, "max": 80 },
                        "net_charge": { "min": 0, "max": 4 }
                    }
                }
            }
        });
        ConfigValidator::new().validate(&doc).unwrap()
    }

    fn sequences() -> Vec<String> {
        ["WYRFKWYF", "AAAAAA", "WYZ", "", "MKWVTFISLLFLFSSAYS", "KRDE"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn results_preserve_input_order_and_match_single_validation() {
        let config = config(1.0);
        let batch = BatchConfigBuilder::new().workers(4).build().unwrap();
        let inputs = sequences();

        let results = validate_batch(&inputs, &config, &batch, &ProgressReporter::new()).unwrap();
        let validator = WeightedSequenceValidator::new(&config, batch.scoring).unwrap();

        assert_eq!(results.len(), inputs.len());
        for (raw, result) in inputs.iter().zip(&results) {
            assert_eq!(result, &validator.validate(raw));
        }
    }

    #[test]
    fn per_sequence_failures_do_not_abort_the_batch() {
        let config = config(1.0);
        let batch = BatchConfigBuilder::new().workers(2).build().unwrap();
        let results =
            validate_batch(&sequences(), &config, &batch, &ProgressReporter::new()).unwrap();

        assert!(!results[2].valid);
        assert!(results[2].metrics.is_none());
        assert!(!results[3].valid);
        assert!(results[4].metrics.is_some());
    }

    #[test]
    fn blend_failure_fails_the_batch() {
        let config = config(0.0);
        let batch = BatchConfigBuilder::new().workers(1).build().unwrap();
        let err = validate_batch(&sequences(), &config, &batch, &ProgressReporter::new())
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Blend {
                source: BlendError::NoPopulations
            }
        ));
    }

    #[test]
    fn progress_events_bracket_every_sequence() {
        let config = config(1.0);
        let batch = BatchConfigBuilder::new().workers(3).build().unwrap();
        let inputs = sequences();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        let results = validate_batch(&inputs, &config, &batch, &reporter).unwrap();
        drop(reporter);
        let events = events.into_inner().unwrap();

        assert_eq!(
            events.first(),
            Some(&Progress::BatchStart {
                total: inputs.len() as u64
            })
        );
        let accepted = results.iter().filter(|r| r.valid).count();
        assert_eq!(
            events.last(),
            Some(&Progress::BatchFinish {
                accepted,
                rejected: inputs.len() - accepted
            })
        );

        let mut indices: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                Progress::SequenceValidated { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..inputs.len()).collect::<Vec<_>>());
    }

    #[test]
    fn renormalized_weights_are_announced_once() {
        let config = config(0.6);
        let batch = BatchConfigBuilder::new().workers(2).build().unwrap();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        validate_batch(&sequences(), &config, &batch, &reporter).unwrap();
        drop(reporter);
        let events = events.into_inner().unwrap();

        let messages: Vec<&String> = events
            .iter()
            .filter_map(|e| match e {
                Progress::Message(msg) => Some(msg),
                _ => None,
            })
            .collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            &Warning::AncestryWeightRenormalized { total_weight: 0.6 }.to_string()
        );
        assert!(matches!(events[1], Progress::Message(_)));
    }

    #[test]
    fn weights_summing_to_one_emit_no_message() {
        let config = config(1.0);
        let batch = BatchConfigBuilder::new().workers(1).build().unwrap();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        validate_batch(&sequences(), &config, &batch, &reporter).unwrap();
        drop(reporter);
        assert!(
            !events
                .into_inner()
                .unwrap()
                .iter()
                .any(|e| matches!(e, Progress::Message(_)))
        );
    }

    #[test]
    fn empty_batch_returns_no_results() {
        let config = config(1.0);
        let batch = BatchConfigBuilder::new().build().unwrap();
        let inputs: Vec<&str> = Vec::new();
        let results = validate_batch(&inputs, &config, &batch, &ProgressReporter::new()).unwrap();
        assert!(results.is_empty());
    }
}
