// src/measure/mod.rs
use anyhow::{bail, Context, Result};
use arrow::{
    array::{ArrayRef, Float64Array},
    compute::kernels::numeric::{div, mul},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Subject heights in metres, positionally paired with [`WEIGHTS_KG`].
pub const HEIGHTS_M: &[f64] = &[1.73, 1.68, 1.71, 1.89, 1.79];

/// Subject weights in kilograms.
pub const WEIGHTS_KG: &[f64] = &[65.4, 59.2, 63.6, 88.4, 68.7];

/// Elementwise body-mass index: `weight / height²`.
pub fn bmi(heights_m: &[f64], weights_kg: &[f64]) -> Result<Float64Array> {
    if heights_m.len() != weights_kg.len() {
        bail!(
            "height/weight length mismatch: {} heights vs {} weights",
            heights_m.len(),
            weights_kg.len()
        );
    }

    let heights = Float64Array::from(heights_m.to_vec());
    let weights = Float64Array::from(weights_kg.to_vec());

    let squared = mul(&heights, &heights).context("squaring heights")?;
    let ratio = div(&weights, &squared).context("dividing weight by squared height")?;

    ratio
        .as_any()
        .downcast_ref::<Float64Array>()
        .cloned()
        .context("BMI kernel did not produce a Float64 column")
}

/// The paired measurement set as one batch: height, weight, and derived BMI,
/// aligned row by row.
pub fn measurement_batch() -> Result<RecordBatch> {
    let bmi = bmi(HEIGHTS_M, WEIGHTS_KG)?;

    let schema = Arc::new(Schema::new(vec![
        Field::new("height_m", DataType::Float64, false),
        Field::new("weight_kg", DataType::Float64, false),
        Field::new("bmi", DataType::Float64, true),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Float64Array::from(HEIGHTS_M.to_vec())),
        Arc::new(Float64Array::from(WEIGHTS_KG.to_vec())),
        Arc::new(bmi),
    ];

    RecordBatch::try_new(schema, columns).context("assembling measurement batch")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_matches_scalar_arithmetic() {
        let out = bmi(HEIGHTS_M, WEIGHTS_KG).unwrap();
        assert_eq!(out.len(), HEIGHTS_M.len());
        for i in 0..out.len() {
            let expected = WEIGHTS_KG[i] / (HEIGHTS_M[i] * HEIGHTS_M[i]);
            assert_eq!(out.value(i), expected);
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(bmi(&[1.70], &[60.0, 70.0]).is_err());
    }

    #[test]
    fn measurement_batch_pairs_all_columns() {
        let batch = measurement_batch().unwrap();
        assert_eq!(batch.num_columns(), 3);
        assert_eq!(batch.num_rows(), HEIGHTS_M.len());
        assert_eq!(
            batch.schema().fields().iter().map(|f| f.name().clone()).collect::<Vec<_>>(),
            vec!["height_m", "weight_kg", "bmi"]
        );
    }
}
