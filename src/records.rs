//! Parsers for the flat comma-separated record files: cats (`id,name,age`)
//! and salaries (`name,salary`).

use crate::error::DataError;
use regex::Regex;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

static CAT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("cat id pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cat {
    pub id: String,
    pub name: String,
    pub age: u32,
}

impl Cat {
    /// Parse one `id,name,age` line. `None` for anything malformed: a field
    /// count other than three, an empty field, a non-positive age, or an id
    /// that is not 24 hex digits.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        let [id, name, age] = fields.as_slice() else {
            return None;
        };
        if id.is_empty() || name.is_empty() || age.is_empty() {
            return None;
        }
        if !age.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let age: u32 = age.parse().ok().filter(|a| *a > 0)?;
        if !CAT_ID.is_match(id) {
            return None;
        }
        Some(Cat {
            id: id.to_string(),
            name: name.to_string(),
            age,
        })
    }
}

/// Read every valid cat from `reader`, skipping (and logging) corrupt lines.
pub fn parse_cats<R: BufRead>(reader: R, source: &Path) -> Result<Vec<Cat>, DataError> {
    let mut cats = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DataError::from_io(source, e))?;
        if line.trim().is_empty() {
            continue;
        }
        match Cat::parse(&line) {
            Some(cat) => cats.push(cat),
            None => warn!(file = %source.display(), line = idx + 1, value = %line, "corrupted cat record"),
        }
    }
    Ok(cats)
}

pub fn get_cats_info(path: impl AsRef<Path>) -> Result<Vec<Cat>, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataError::from_io(path, e))?;
    parse_cats(BufReader::new(file), path)
}

/// Sum and integer mean of a salary file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SalarySummary {
    pub total: u64,
    pub average: u64,
}

/// Aggregate `name,salary` lines.
///
/// Every non-blank line counts towards the average. A line whose salary is
/// missing or not a non-negative integer contributes 0 and is logged.
pub fn parse_salaries<R: BufRead>(reader: R, source: &Path) -> Result<SalarySummary, DataError> {
    let mut total: u64 = 0;
    let mut count: u64 = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DataError::from_io(source, e))?;
        if line.trim().is_empty() {
            continue;
        }
        count += 1;
        match line.split(',').nth(1).map(|s| s.trim().parse::<u64>()) {
            Some(Ok(salary)) => total += salary,
            _ => warn!(file = %source.display(), line = idx + 1, value = %line, "corrupted salary record"),
        }
    }
    let average = if count == 0 { 0 } else { total / count };
    Ok(SalarySummary { total, average })
}

pub fn total_salary(path: impl AsRef<Path>) -> Result<SalarySummary, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataError::from_io(path, e))?;
    parse_salaries(BufReader::new(file), path)
}
