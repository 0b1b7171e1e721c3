use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use crate::input::Candidate;
use healdette::engine::result::ValidationResult;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub id: &'a str,
    pub sequence: &'a str,
    pub result: &'a ValidationResult,
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    id: &'a str,
    sequence: &'a str,
    valid: bool,
    aggregate_score: f64,
    length: Option<usize>,
    aromatic_content: Option<f64>,
    hydrophobic_content: Option<f64>,
    net_charge: Option<f64>,
    gravy: Option<f64>,
    isoelectric_point: Option<f64>,
    errors: String,
    warnings: String,
}

impl<'a> SummaryRow<'a> {
    fn new(candidate: &'a Candidate, result: &ValidationResult) -> Self {
        let metrics = result.metrics.as_ref();
        Self {
            id: &candidate.id,
            sequence: &candidate.sequence,
            valid: result.valid,
            aggregate_score: result.aggregate_score,
            length: metrics.map(|m| m.length),
            aromatic_content: metrics.map(|m| m.aromatic_content),
            hydrophobic_content: metrics.map(|m| m.hydrophobic_content),
            net_charge: metrics.map(|m| m.net_charge),
            gravy: metrics.map(|m| m.gravy),
            isoelectric_point: metrics.map(|m| m.isoelectric_point),
            errors: result.error_messages().join("; "),
            warnings: result.warning_messages().join("; "),
        }
    }
}

pub fn write_results<W: Write>(
    writer: W,
    candidates: &[Candidate],
    results: &[ValidationResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, candidates, results),
        OutputFormat::Csv => write_csv(writer, candidates, results),
    }
}

fn write_json<W: Write>(
    mut writer: W,
    candidates: &[Candidate],
    results: &[ValidationResult],
) -> Result<()> {
    let reports: Vec<Report> = candidates
        .iter()
        .zip(results)
        .map(|(c, result)| Report {
            id: &c.id,
            sequence: &c.sequence,
            result,
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &reports)
        .map_err(|e| CliError::Output(e.into()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn write_csv<W: Write>(
    writer: W,
    candidates: &[Candidate],
    results: &[ValidationResult],
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (candidate, result) in candidates.iter().zip(results) {
        csv_writer
            .serialize(SummaryRow::new(candidate, result))
            .map_err(|e| CliError::Output(e.into()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use healdette::core::config::validator::ConfigValidator;
    use healdette::workflows::validate::validate;

    fn fixture() -> (Vec<Candidate>, Vec<ValidationResult>) {
        let config = ConfigValidator::new()
            .validate_str(crate::fixtures::CONFIG_JSON)
            .unwrap();
        let candidates = vec![
            Candidate {
                id: "good".into(),
                sequence: "WYRFKWYF".into(),
            },
            Candidate {
                id: "bad".into(),
                sequence: "WYXF".into(),
            },
        ];
        let results = candidates
            .iter()
            .map(|c| validate(&c.sequence, &config).unwrap())
            .collect();
        (candidates, results)
    }

    #[test]
    fn json_output_is_an_array_of_reports() {
        let (candidates, results) = fixture();
        let mut buffer = Vec::new();
        write_results(&mut buffer, &candidates, &results, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let reports = value.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["id"], "good");
        assert!(reports[0]["result"]["population_scores"]["finnish"].is_object());
        assert_eq!(reports[1]["result"]["valid"], false);
        assert_eq!(
            reports[1]["result"]["errors"][0],
            "Invalid residue 'X' at position 2"
        );
        assert!(reports[1]["result"]["metrics"].is_null());
    }

    #[test]
    fn csv_output_has_one_row_per_candidate() {
        let (candidates, results) = fixture();
        let mut buffer = Vec::new();
        write_results(&mut buffer, &candidates, &results, OutputFormat::Csv).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("id,sequence,valid,aggregate_score"));
        assert!(lines.next().unwrap().starts_with("good,WYRFKWYF,"));
        let bad = lines.next().unwrap();
        assert!(bad.starts_with("bad,WYXF,false,0.0,"));
        assert!(bad.contains("Invalid residue 'X' at position 2"));
        assert!(lines.next().is_none());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn json_write_failure_is_reported_not_dropped() {
        let (candidates, results) = fixture();
        let file = std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/full")
            .unwrap();
        let err = write_results(
            std::io::BufWriter::new(file),
            &candidates,
            &results,
            OutputFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Io(_) | CliError::Output(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn csv_write_failure_is_reported_not_dropped() {
        let (candidates, results) = fixture();
        let file = std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/full")
            .unwrap();
        assert!(
            write_results(
                std::io::BufWriter::new(file),
                &candidates,
                &results,
                OutputFormat::Csv,
            )
            .is_err()
        );
    }
}
