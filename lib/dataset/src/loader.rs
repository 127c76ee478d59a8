//! CSV dataset loader.
//!
//! Reads a questionnaire dataset where the first row holds column names and
//! one column (the last, by default) holds the outcome label:
//! ```csv
//! Experimentation,Social_Isolation,Addiction_Class
//! Yes,No,Yes
//! No,No,No
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use addiscreen_core::{partition, FeatureSet, FeatureVector, GroupLabel, LabeledDataset};
use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{DatasetError, Result};
use crate::normalize::{normalize_cell, normalize_label, ColumnKind};

/// Loader options
#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    /// Name of the label column; the last column when `None`
    pub label_column: Option<String>,
}

/// Builds a [`LabeledDataset`] from CSV input.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    config: DatasetConfig,
    /// CSV delimiter character (default: ',')
    delimiter: u8,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(DatasetConfig::default())
    }
}

impl DatasetLoader {
    pub fn new(config: DatasetConfig) -> Self {
        DatasetLoader {
            config,
            delimiter: b',',
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter as u8;
        self
    }

    /// Load a dataset from a CSV file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<LabeledDataset> {
        let path = path.as_ref();
        let file = File::open(path)?;
        info!("Loading dataset from {:?}", path);
        self.load_reader(file)
    }

    /// Load a dataset from any CSV source.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<LabeledDataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(DatasetError::InvalidHeader("missing header row".to_string()));
        }
        if headers.len() < 2 {
            return Err(DatasetError::InvalidHeader(
                "need at least one feature column and a label column".to_string(),
            ));
        }

        let label_pos = match &self.config.label_column {
            Some(name) => headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::InvalidHeader(format!("label column '{}' not found", name)))?,
            None => headers.len() - 1,
        };

        let feature_positions: Vec<usize> = (0..headers.len()).filter(|&i| i != label_pos).collect();
        let features = FeatureSet::shared(feature_positions.iter().map(|&i| headers[i].clone()))?;

        // Short rows are padded so every record has one cell per column
        let mut records: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            cells.resize(headers.len(), String::new());
            records.push(cells);
        }

        let kinds: Vec<ColumnKind> = feature_positions
            .iter()
            .map(|&col| ColumnKind::detect(records.iter().map(|r| r[col].as_str())))
            .collect();

        for (name, kind) in features.names().iter().zip(&kinds) {
            debug!("Column {} detected as {:?}", name, kind);
        }

        let mut rows = Vec::with_capacity(records.len());
        for cells in &records {
            let values: Vec<f64> = feature_positions
                .iter()
                .zip(&kinds)
                .map(|(&col, &kind)| normalize_cell(&cells[col], kind))
                .collect();
            let label = GroupLabel::from_flag(normalize_label(&cells[label_pos]));
            rows.push((FeatureVector::new(features.clone(), values)?, label));
        }

        let dataset = partition(features, rows)?;
        info!(
            "Dataset loaded: {} rows, {} features ({} addicted, {} not addicted)",
            dataset.len(),
            dataset.features().len(),
            dataset.addicted().len(),
            dataset.not_addicted().len()
        );

        Ok(dataset)
    }
}
