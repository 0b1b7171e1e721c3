use crate::core::biophysics::analyzer::{BiophysicalMetric, Metrics};
use crate::core::config::models::{BiophysicalParams, ValueRange};

/// Fit of one value against a range: 1.0 inside, decaying linearly with the distance outside
/// the nearest bound measured in range widths, floored at 0.0.
pub fn metric_fit(value: f64, range: ValueRange) -> f64 {
    let span = if range.span() > 0.0 { range.span() } else { 1.0 };
    (1.0 - range.distance_outside(value) / span).max(0.0)
}

/// Mean metric fit of a sequence against a population's declared ranges.
pub fn biophysical_fit(metrics: &Metrics, params: &BiophysicalParams) -> f64 {
    let total: f64 = BiophysicalMetric::ALL
        .iter()
        .map(|&m| metric_fit(metrics.value(m), params.range(m)))
        .sum();
    total / BiophysicalMetric::ALL.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::biophysics::analyzer::analyze;

    #[test]
    fn values_inside_the_range_fit_perfectly() {
        let range = ValueRange::new(10.0, 20.0);
        assert_eq!(metric_fit(10.0, range), 1.0);
        assert_eq!(metric_fit(15.0, range), 1.0);
        assert_eq!(metric_fit(20.0, range), 1.0);
    }

    #[test]
    fn fit_decays_linearly_outside_the_range() {
        let range = ValueRange::new(10.0, 20.0);
        assert!((metric_fit(25.0, range) - 0.5).abs() < 1e-12);
        assert!((metric_fit(8.0, range) - 0.8).abs() < 1e-12);
        assert_eq!(metric_fit(30.0, range), 0.0);
        assert_eq!(metric_fit(-100.0, range), 0.0);
    }

    #[test]
    fn degenerate_range_uses_unit_span() {
        let range = ValueRange::new(2.0, 2.0);
        assert_eq!(metric_fit(2.0, range), 1.0);
        assert!((metric_fit(2.5, range) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn biophysical_fit_averages_the_three_metrics() {
        // Aromatic 50%, hydrophobic 100%, net charge 0.
        let metrics = analyze("FA").unwrap();
        let params = BiophysicalParams {
            aromatic_content: ValueRange::new(40.0, 60.0),
            hydrophobic_content: ValueRange::new(40.0, 60.0),
            net_charge: ValueRange::new(-1.0, 1.0),
        };
        // Hydrophobic is 40 above the max with span 20, so it contributes 0.
        let fit = biophysical_fit(&metrics, &params);
        assert!((fit - 2.0 / 3.0).abs() < 1e-12);
    }
}
