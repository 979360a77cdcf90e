//! Batch scoring over uploaded CSV tables.
//!
//! Applies the credit model to every row of a table and writes the same
//! table back with probability and decision columns appended. Batch results
//! are download-only: nothing here touches the prediction log, so batch
//! traffic never feeds the drift monitor.

use std::io;

use anyhow::{Context, Result};
use burn::prelude::*;
use client_records::PredictionResult;
use credit_model::{CreditModel, DECISION_THRESHOLD, predict_proba};
use feature_extractor::FEATURE_COLUMNS;
use tracing::debug;

/// Name of the probability column appended to batch output.
pub const PROBABILITY_COLUMN: &str = "Probabilidade";

/// Name of the decision column appended to batch output.
pub const RESULT_COLUMN: &str = "Resultado";

/// Scores every row of a CSV table and writes the augmented table.
///
/// When all four canonical feature columns are present by name they are
/// selected in canonical order, wherever they sit in the file, and any other
/// columns ride along untouched. Otherwise every column of every row is
/// parsed positionally as a feature; that path carries no width check of its
/// own and relies on the model's feature-count guard to reject tables of the
/// wrong shape.
///
/// Returns the number of rows scored.
///
/// # Errors
///
/// Returns an error if the CSV cannot be parsed, a feature cell is not
/// numeric, the feature count does not match the model, or the output cannot
/// be written. Any failure aborts the whole batch; no partial output is
/// meaningful.
pub fn score_batch<B: Backend>(
    model: &CreditModel<B>,
    device: &B::Device,
    input: impl io::Read,
    output: impl io::Write,
) -> Result<usize> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader
        .headers()
        .context("batch file has no readable header")?
        .clone();

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .context("malformed batch CSV")?;

    let named_indices: Option<Vec<usize>> = FEATURE_COLUMNS
        .iter()
        .map(|column| headers.iter().position(|header| header == *column))
        .collect();

    let rows = match &named_indices {
        Some(indices) => {
            debug!("selecting feature columns by name");
            select_named(&records, indices)?
        }
        None => {
            debug!("canonical columns absent, passing table through positionally");
            select_positional(&records)?
        }
    };

    let probabilities = predict_proba(model, &rows, device)?;

    let mut writer = csv::Writer::from_writer(output);

    let mut out_headers = headers.clone();
    out_headers.push_field(PROBABILITY_COLUMN);
    out_headers.push_field(RESULT_COLUMN);
    writer
        .write_record(&out_headers)
        .context("failed to write batch output header")?;

    for (record, probability) in records.iter().zip(&probabilities) {
        let result = PredictionResult {
            probability: *probability,
            approved: *probability >= DECISION_THRESHOLD,
        };

        let mut row = record.clone();
        row.push_field(&format!("{probability}"));
        row.push_field(result.decision_label());
        writer
            .write_record(&row)
            .context("failed to write batch output row")?;
    }

    writer.flush().context("failed to flush batch output")?;
    Ok(records.len())
}

/// Pulls the four canonical columns out of each record, in canonical order.
fn select_named(records: &[csv::StringRecord], indices: &[usize]) -> Result<Vec<Vec<f32>>> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            indices
                .iter()
                .map(|&index| {
                    let cell = record
                        .get(index)
                        .with_context(|| format!("row {row} is missing a feature column"))?;
                    parse_cell(cell, row)
                })
                .collect()
        })
        .collect()
}

/// Parses every column of every record as a feature value, in file order.
fn select_positional(records: &[csv::StringRecord]) -> Result<Vec<Vec<f32>>> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| record.iter().map(|cell| parse_cell(cell, row)).collect())
        .collect()
}

fn parse_cell(cell: &str, row: usize) -> Result<f32> {
    cell.trim()
        .parse()
        .with_context(|| format!("row {row}: cannot parse {cell:?} as a number"))
}

#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use burn::backend::ndarray::NdArrayDevice;
    use credit_model::ModelConfig;

    use super::*;

    type TestBackend = NdArray;

    fn test_model(device: &NdArrayDevice) -> CreditModel<TestBackend> {
        CreditModel::new(device, &ModelConfig::default())
    }

    fn run_batch(model: &CreditModel<TestBackend>, input: &str) -> Result<String> {
        let device = NdArrayDevice::default();
        let mut output = Vec::new();
        score_batch(model, &device, input.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output).expect("output is UTF-8"))
    }

    fn parse_output(output: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let headers = reader
            .headers()
            .expect("output header")
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map(|record| {
                record
                    .expect("output row")
                    .iter()
                    .map(String::from)
                    .collect()
            })
            .collect();
        (headers, rows)
    }

    #[test]
    fn test_scrambled_named_columns_match_direct_scoring() {
        let device = NdArrayDevice::default();
        let model = test_model(&device);

        // Canonical columns present but shuffled, with a bystander column.
        let input = "renda,cliente,score_credito,idade,experiencia_credito\n\
                     5000,ana,650,35,2\n\
                     1200,bruno,380,64,0\n";
        let output = run_batch(&model, input).expect("batch succeeds");
        let (headers, rows) = parse_output(&output);

        assert_eq!(
            headers,
            vec![
                "renda",
                "cliente",
                "score_credito",
                "idade",
                "experiencia_credito",
                PROBABILITY_COLUMN,
                RESULT_COLUMN,
            ]
        );

        // Selection must be by name, so this equals scoring the canonical
        // feature order directly.
        let expected = predict_proba(
            &model,
            &[
                vec![35.0, 5000.0, 650.0, 2.0],
                vec![64.0, 1200.0, 380.0, 0.0],
            ],
            &device,
        )
        .expect("direct scoring succeeds");

        for (row, probability) in rows.iter().zip(&expected) {
            let written: f32 = row[5].parse().expect("probability cell parses");
            assert_eq!(written, *probability);

            let label = if *probability >= DECISION_THRESHOLD {
                "Aprovado"
            } else {
                "Negado"
            };
            assert_eq!(row[6], label);
        }
    }

    #[test]
    fn test_extra_columns_preserved() {
        let device = NdArrayDevice::default();
        let model = test_model(&device);

        let input = "cliente,idade,renda,score_credito,experiencia_credito,observacao\n\
                     ana,35,5000,650,2,vip\n";
        let output = run_batch(&model, input).expect("batch succeeds");
        let (_, rows) = parse_output(&output);

        assert_eq!(rows[0][0], "ana");
        assert_eq!(rows[0][5], "vip");
        assert_eq!(rows[0].len(), 8);
    }

    #[test]
    fn test_positional_fallback_scores_headerless_names() {
        let device = NdArrayDevice::default();
        let model = test_model(&device);

        // No canonical names: the four columns are taken as-is.
        let input = "a,b,c,d\n35,5000,650,2\n";
        let output = run_batch(&model, input).expect("batch succeeds");
        let (_, rows) = parse_output(&output);

        let expected = predict_proba(&model, &[vec![35.0, 5000.0, 650.0, 2.0]], &device)
            .expect("direct scoring succeeds");
        let written: f32 = rows[0][4].parse().expect("probability cell parses");
        assert_eq!(written, expected[0]);
    }

    #[test]
    fn test_positional_fallback_wrong_width_fails() {
        let device = NdArrayDevice::default();
        let model = test_model(&device);

        let input = "a,b,c\n35,5000,650\n";
        assert!(run_batch(&model, input).is_err());
    }

    #[test]
    fn test_non_numeric_cell_aborts_batch() {
        let device = NdArrayDevice::default();
        let model = test_model(&device);

        let input = "idade,renda,score_credito,experiencia_credito\n35,muito,650,2\n";
        assert!(run_batch(&model, input).is_err());
    }

    #[test]
    fn test_empty_table_scores_zero_rows() {
        let device = NdArrayDevice::default();
        let model = test_model(&device);

        let input = "idade,renda,score_credito,experiencia_credito\n";
        let mut output = Vec::new();
        let scored = score_batch(&model, &device, input.as_bytes(), &mut output)
            .expect("empty batch succeeds");
        assert_eq!(scored, 0);
    }
}
