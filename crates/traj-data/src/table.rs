//! Column-major trajectory table loaded from CSV.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::headers::{component_column, is_entity_base, mangle_headers, POSITION_COMPONENTS};
use crate::point::Point3;
use crate::tracks::{EntityTrack, Trajectories};

/// Errors that can occur while loading or querying a trajectory table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed CSV, including rows with the wrong number of fields
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The input has no header row
    #[error("trajectory file has no header row")]
    MissingHeader,
    /// A cell could not be parsed as a number
    #[error("invalid number '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    /// A column required by the naming convention is absent
    #[error("missing column '{0}'")]
    MissingColumn(String),
    /// Columns handed to [`TrajectoryTable::from_columns`] differ in length
    #[error("column '{column}' has {found} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// Numeric table with one column per (mangled) header.
///
/// Every column holds exactly [`TrajectoryTable::row_count`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryTable {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
    rows: usize,
}

impl TrajectoryTable {
    /// Loads a table from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            "Loaded {:?}: {} rows, {} columns",
            path,
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    /// Parses a comma-separated table with a header row.
    ///
    /// Repeated header names are mangled (see [`mangle_headers`]). Every
    /// cell must parse as a floating point number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let raw = rdr.headers()?.clone();
        if raw.is_empty() {
            return Err(TableError::MissingHeader);
        }
        let headers = mangle_headers(&raw.iter().collect::<Vec<_>>());

        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            for (col, field) in record.iter().enumerate() {
                let value = field
                    .parse::<f64>()
                    .map_err(|_| TableError::InvalidNumber {
                        row,
                        column: headers[col].clone(),
                        value: field.to_string(),
                    })?;
                columns[col].push(value);
            }
        }

        Self::from_columns(headers, columns)
    }

    /// Builds a table from already-parsed columns.
    pub fn from_columns(headers: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self, TableError> {
        if headers.is_empty() {
            return Err(TableError::MissingHeader);
        }

        let rows = columns.first().map(Vec::len).unwrap_or(0);
        for (i, header) in headers.iter().enumerate() {
            let found = columns.get(i).map(Vec::len).unwrap_or(0);
            if found != rows {
                return Err(TableError::ColumnLength {
                    column: header.clone(),
                    expected: rows,
                    found,
                });
            }
        }

        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();

        Ok(Self {
            headers,
            columns,
            index,
            rows,
        })
    }

    /// Column names after mangling, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of time steps.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Values of the named column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.index.get(name).map(|&i| self.columns[i].as_slice())
    }

    /// Values of the named column, or [`TableError::MissingColumn`].
    pub fn require_column(&self, name: &str) -> Result<&[f64], TableError> {
        self.column(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Names of the entities whose base column matches `pattern`, in file order.
    pub fn entity_names(&self, pattern: &str) -> Vec<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|h| is_entity_base(h, pattern))
            .collect()
    }

    /// Number of state components stored for `entity` (0 if absent).
    pub fn component_count(&self, entity: &str) -> usize {
        (0..)
            .take_while(|&i| self.index.contains_key(&component_column(entity, i)))
            .count()
    }

    /// Position track of a single entity.
    pub fn entity_track(&self, entity: &str) -> Result<EntityTrack, TableError> {
        let x = self.require_column(&component_column(entity, 0))?;
        let y = self.require_column(&component_column(entity, 1))?;
        let z = self.require_column(&component_column(entity, 2))?;

        let points = x
            .iter()
            .zip(y)
            .zip(z)
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
            .collect();

        Ok(EntityTrack::new(entity, points))
    }

    /// Position tracks of every entity matching `pattern`.
    pub fn entity_tracks(&self, pattern: &str) -> Result<Vec<EntityTrack>, TableError> {
        self.entity_names(pattern)
            .into_iter()
            .map(|name| {
                let components = self.component_count(name);
                if components > POSITION_COMPONENTS {
                    tracing::debug!(
                        "{} has {} state components, plotting the first {}",
                        name,
                        components,
                        POSITION_COMPONENTS
                    );
                }
                self.entity_track(name)
            })
            .collect()
    }

    /// Tracks for `pattern` plus the optional time column, ready for framing.
    pub fn trajectories(
        &self,
        pattern: &str,
        time_column: Option<&str>,
    ) -> Result<Trajectories, TableError> {
        let tracks = self.entity_tracks(pattern)?;
        let time = time_column
            .and_then(|name| self.column(name))
            .map(<[f64]>::to_vec);
        Ok(Trajectories::new(tracks, time, self.rows))
    }
}
