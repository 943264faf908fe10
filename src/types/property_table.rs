//! Per-region feature table and its polars export

use crate::error::{GlcmError, Result};
use crate::types::property::GlcmProperty;
use ndarray::{Array2, ArrayView1, Axis};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// GLCM features for every region, one row per region in ascending label order.
///
/// `values[[i, k]]` is feature `names[k]` of region `labels[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTable {
    labels: Vec<u32>,
    names: Vec<String>,
    values: Array2<f64>,
}

impl PropertyTable {
    pub fn new(labels: Vec<u32>, names: Vec<String>, values: Array2<f64>) -> Result<Self> {
        let expected = (labels.len(), names.len());
        if values.dim() != expected {
            return Err(GlcmError::ShapeMismatch {
                expected,
                actual: values.dim(),
            });
        }
        Ok(Self {
            labels,
            names,
            values,
        })
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// All region values for one feature name
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(self.values.column(idx))
    }

    /// All features of the region at `index`, in name order
    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.len()).then(|| self.values.row(index))
    }

    pub fn get(&self, label: u32, name: &str) -> Option<f64> {
        let row = self.labels.iter().position(|&l| l == label)?;
        let col = self.names.iter().position(|n| n == name)?;
        Some(self.values[[row, col]])
    }

    /// Split into the label list and one `(name, values)` list per feature.
    pub fn into_columns(self) -> (Vec<u32>, Vec<(String, Vec<f64>)>) {
        let columns = self
            .names
            .into_iter()
            .zip(self.values.axis_iter(Axis(1)))
            .map(|(name, column)| (name, column.to_vec()))
            .collect();
        (self.labels, columns)
    }

    /// Build a DataFrame with a `label` column followed by one column per feature.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.names.len() + 1);
        columns.push(Series::new("label".into(), &self.labels).into());
        for (name, column) in self.names.iter().zip(self.values.axis_iter(Axis(1))) {
            let values: Vec<f64> = column.to_vec();
            columns.push(Series::new(name.as_str().into(), &values).into());
        }
        Ok(DataFrame::new(columns)?)
    }
}

/// Select the `label` column and every feature column of `property`.
pub fn select_property(df: &DataFrame, property: GlcmProperty) -> LazyFrame {
    let prefix = format!("{}_", property);
    let mut exprs = vec![col("label")];
    exprs.extend(
        df.get_column_names()
            .into_iter()
            .filter(|name| name.as_str().starts_with(prefix.as_str()))
            .map(|name| col(name.as_str())),
    );
    df.clone().lazy().select(exprs)
}
