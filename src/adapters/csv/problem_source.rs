//! CSV problem source adapter.
//!
//! Reads the four-file layout:
//!
//! - criteria: line 1 criterion names, line 2 weights
//! - performances: line 1 action names, line 2 criterion names, then one
//!   line of scores per action in line-1 order
//! - thresholds (one file per boundary): line 1 criterion names, then one
//!   `g, q, p, v` line per criterion in line-1 order

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::InputConfig;
use crate::domain::electre::{
    Boundary, Criteria, ElectreError, PerformanceTable, ProfileSet, SortingProblem,
};
use crate::ports::{ProblemSource, SourceError};

/// A non-blank CSV record with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Row {
    pub line: u64,
    pub fields: Vec<String>,
}

/// Loads a sorting problem from four CSV files.
#[derive(Debug, Clone)]
pub struct CsvProblemSource {
    criteria_path: PathBuf,
    performances_path: PathBuf,
    moderate_thresholds_path: PathBuf,
    good_thresholds_path: PathBuf,
}

impl CsvProblemSource {
    /// Creates a source over explicit file paths.
    pub fn new(
        criteria_path: impl Into<PathBuf>,
        performances_path: impl Into<PathBuf>,
        moderate_thresholds_path: impl Into<PathBuf>,
        good_thresholds_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            criteria_path: criteria_path.into(),
            performances_path: performances_path.into(),
            moderate_thresholds_path: moderate_thresholds_path.into(),
            good_thresholds_path: good_thresholds_path.into(),
        }
    }

    /// Creates a source from the input section of the configuration.
    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(
            &config.criteria_path,
            &config.performances_path,
            &config.moderate_thresholds_path,
            &config.good_thresholds_path,
        )
    }

    fn thresholds_path(&self, boundary: Boundary) -> &Path {
        match boundary {
            Boundary::Moderate => &self.moderate_thresholds_path,
            Boundary::Good => &self.good_thresholds_path,
        }
    }
}

impl ProblemSource for CsvProblemSource {
    fn load(&self) -> Result<SortingProblem, SourceError> {
        let criteria = parse_criteria(&read_file(&self.criteria_path)?, &self.criteria_path)?;
        let performances = parse_performances(
            &read_file(&self.performances_path)?,
            &self.performances_path,
        )?;

        let mut profiles = ProfileSet::new();
        for boundary in Boundary::ALL {
            let path = self.thresholds_path(boundary);
            parse_thresholds(&read_file(path)?, path, boundary, &mut profiles)?;
        }

        debug!(
            criteria = criteria.len(),
            actions = performances.action_count(),
            "CSV problem loaded"
        );

        Ok(SortingProblem::new(criteria, performances, profiles)?)
    }
}

fn read_file(path: &Path) -> Result<Vec<Row>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(file, path)
}

/// Tokenizes comma-separated records, dropping blank lines.
///
/// Line numbers are physical lines of the input, blank ones included.
pub(crate) fn read_rows<R: Read>(mut reader: R, path: &Path) -> Result<Vec<Row>, SourceError> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(buffer.as_slice());

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| SourceError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let offset = record.position().map(|p| p.byte() as usize).unwrap_or_default();
        rows.push(Row {
            line: physical_line(&buffer, offset),
            fields: record.iter().map(str::to_string).collect(),
        });
    }
    Ok(rows)
}

/// 1-based line of the first non-blank byte at or after `offset`.
///
/// The reader stamps a record with the position reached before it skipped
/// any blank lines, so the record text starts somewhere past `offset`.
fn physical_line(buffer: &[u8], offset: usize) -> u64 {
    let start = offset.min(buffer.len());
    let first = buffer[start..]
        .iter()
        .position(|byte| !byte.is_ascii_whitespace())
        .map_or(buffer.len(), |skip| start + skip);
    1 + buffer[..first].iter().filter(|&&byte| byte == b'\n').count() as u64
}

/// Rejects a header that names the same entry twice.
fn ensure_unique(row: &Row, kind: &'static str) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for field in &row.fields {
        if !seen.insert(field.as_str()) {
            return Err(ElectreError::DuplicateEntry {
                kind,
                id: field.clone(),
            }
            .into());
        }
    }
    Ok(())
}

fn parse_number(row: &Row, column: usize, path: &Path) -> Result<f64, SourceError> {
    let value = &row.fields[column];
    value
        .parse::<f64>()
        .map_err(|_| SourceError::InvalidNumber {
            path: path.to_path_buf(),
            line: row.line as usize,
            column: column + 1,
            value: value.clone(),
        })
}

fn parse_numbers(row: &Row, path: &Path) -> Result<Vec<f64>, SourceError> {
    (0..row.fields.len())
        .map(|column| parse_number(row, column, path))
        .collect()
}

fn header<'a>(rows: &'a [Row], index: usize, what: &str, path: &Path) -> Result<&'a Row, SourceError> {
    rows.get(index)
        .ok_or_else(|| SourceError::malformed(path, format!("missing {} line", what)))
}

fn expect_width(row: &Row, width: usize, path: &Path) -> Result<(), SourceError> {
    if row.fields.len() != width {
        return Err(SourceError::malformed(
            path,
            format!(
                "line {} has {} fields, expected {}",
                row.line,
                row.fields.len(),
                width
            ),
        ));
    }
    Ok(())
}

pub(crate) fn parse_criteria(rows: &[Row], path: &Path) -> Result<Criteria, SourceError> {
    let names = header(rows, 0, "criterion names", path)?;
    let weights = header(rows, 1, "weights", path)?;
    expect_width(weights, names.fields.len(), path)?;
    if rows.len() > 2 {
        return Err(SourceError::malformed(
            path,
            format!("unexpected content at line {}", rows[2].line),
        ));
    }

    let weights = parse_numbers(weights, path)?;
    Ok(Criteria::from_pairs(
        names.fields.iter().cloned().zip(weights),
    )?)
}

pub(crate) fn parse_performances(rows: &[Row], path: &Path) -> Result<PerformanceTable, SourceError> {
    let actions = header(rows, 0, "action names", path)?;
    let criteria = header(rows, 1, "criterion names", path)?;
    ensure_unique(actions, "action")?;
    ensure_unique(criteria, "criterion")?;
    let scores = &rows[2..];

    if scores.len() != actions.fields.len() {
        return Err(SourceError::malformed(
            path,
            format!(
                "{} actions declared but {} score lines found",
                actions.fields.len(),
                scores.len()
            ),
        ));
    }

    let mut table = PerformanceTable::builder().actions(actions.fields.clone());
    for (action, row) in actions.fields.iter().zip(scores) {
        expect_width(row, criteria.fields.len(), path)?;
        for (criterion, score) in criteria.fields.iter().zip(parse_numbers(row, path)?) {
            table = table.score(action.as_str(), criterion.as_str(), score);
        }
    }
    Ok(table.build())
}

pub(crate) fn parse_thresholds(
    rows: &[Row],
    path: &Path,
    boundary: Boundary,
    profiles: &mut ProfileSet,
) -> Result<(), SourceError> {
    let criteria = header(rows, 0, "criterion names", path)?;
    ensure_unique(criteria, "criterion")?;
    let tuples = &rows[1..];

    if tuples.len() != criteria.fields.len() {
        return Err(SourceError::malformed(
            path,
            format!(
                "{} criteria declared but {} threshold lines found",
                criteria.fields.len(),
                tuples.len()
            ),
        ));
    }

    for (criterion, row) in criteria.fields.iter().zip(tuples) {
        expect_width(row, 4, path)?;
        let values = parse_numbers(row, path)?;
        profiles.insert(
            boundary,
            criterion.as_str(),
            values[0],
            values[1],
            values[2],
            values[3],
        )?;
    }
    Ok(())
}
