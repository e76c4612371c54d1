//! # Dataset Loader
//!
//! Turns raw tabular rows into a [`Dataset`]. Every recoverable problem is
//! handled in place and recorded in a [`LoadReport`]:
//!
//! | Condition              | Handling                                   |
//! |------------------------|--------------------------------------------|
//! | blank/missing country  | row skipped                                |
//! | repeated country       | later row skipped, first occurrence kept   |
//! | malformed date         | stored as unknown                          |
//! | unrecognized value     | kept verbatim, scored 0.0                  |
//! | unrecognized status    | kept verbatim, neutral badge               |
//!
//! The only errors are structural: a file that cannot be read or a
//! document that is not CSV/JSON/YAML at all. A boolean or number in a
//! JSON/YAML cell is read as its text (`true`, `3`) and then classified
//! like any other cell.
//!
//! ## Whitespace
//!
//! Every cell is trimmed before it is classified, so `" No"` is a gap,
//! `" Yes"` compares equal to `"Yes"`, and unrecognized text is kept in
//! its trimmed form. Scoring, gap counting, filtering and comparison all
//! see the same trimmed value.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pmx_core::{CountryName, PolicyCategory, PolicyValue, ReviewDate, ReviewStatus};

use crate::dataset::Dataset;
use crate::record::PolicyRecord;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural failure reading a dataset source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV could not be parsed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML could not be parsed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is not one of csv, json, yaml, yml.
    #[error("unsupported dataset format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// One untyped input row. Every column is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub review_status: Option<String>,
    #[serde(default)]
    pub prevention: Option<String>,
    #[serde(default)]
    pub administrative: Option<String>,
    #[serde(default)]
    pub criminal_justice: Option<String>,
    #[serde(default)]
    pub surveillance: Option<String>,
    #[serde(default)]
    pub rehab_reintegration: Option<String>,
    #[serde(default)]
    pub women_children_notes: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawRow {
    /// The raw cell for a policy category.
    pub fn value(&self, category: PolicyCategory) -> Option<&str> {
        let cell = match category {
            PolicyCategory::Prevention => &self.prevention,
            PolicyCategory::Administrative => &self.administrative,
            PolicyCategory::CriminalJustice => &self.criminal_justice,
            PolicyCategory::Surveillance => &self.surveillance,
            PolicyCategory::RehabReintegration => &self.rehab_reintegration,
            PolicyCategory::WomenChildren => &self.women_children_notes,
        };
        cell.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A recovered input problem. `row` is 1-based over data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadIssue {
    /// Country was blank or missing; the row was skipped.
    MissingCountry { row: usize },
    /// Country already loaded from an earlier row; this row was skipped.
    DuplicateCountry { row: usize, country: CountryName },
    /// Date could not be parsed and is stored as unknown.
    MalformedDate {
        row: usize,
        country: CountryName,
        raw: String,
    },
    /// Status is not Green/Yellow/Red and is kept verbatim.
    UnrecognizedStatus {
        row: usize,
        country: CountryName,
        raw: String,
    },
    /// Policy value is not Yes/Partial/No and scores 0.0.
    UnrecognizedValue {
        row: usize,
        country: CountryName,
        category: PolicyCategory,
        raw: String,
    },
}

impl LoadIssue {
    /// Whether the issue caused the row to be dropped.
    pub fn dropped_row(&self) -> bool {
        matches!(
            self,
            Self::MissingCountry { .. } | Self::DuplicateCountry { .. }
        )
    }
}

impl std::fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCountry { row } => write!(f, "row {row}: missing country"),
            Self::DuplicateCountry { row, country } => {
                write!(f, "row {row} ({country}): duplicate country")
            }
            Self::MalformedDate { row, country, raw } => {
                write!(f, "row {row} ({country}): malformed date {raw:?}")
            }
            Self::UnrecognizedStatus { row, country, raw } => {
                write!(f, "row {row} ({country}): unrecognized status {raw:?}")
            }
            Self::UnrecognizedValue {
                row,
                country,
                category,
                raw,
            } => write!(f, "row {row} ({country}): unrecognized {category} value {raw:?}"),
        }
    }
}

/// Outcome of a load beyond the dataset itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Data rows seen.
    pub rows_read: usize,
    /// Records kept.
    pub records_loaded: usize,
    /// Every recovered problem, in row order.
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    /// Whether the input needed no recovery at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Rows that were dropped.
    pub fn skipped(&self) -> usize {
        self.rows_read - self.records_loaded
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Build a dataset, logging recovered problems via `tracing`.
pub fn load(rows: impl IntoIterator<Item = RawRow>) -> Dataset {
    let (dataset, report) = load_with_report(rows);
    for issue in &report.issues {
        if issue.dropped_row() {
            tracing::warn!(?issue, "row skipped during load");
        } else {
            tracing::debug!(?issue, "recovered input value");
        }
    }
    tracing::debug!(
        rows = report.rows_read,
        records = report.records_loaded,
        "dataset loaded"
    );
    dataset
}

/// Build a dataset and return every recovered problem alongside it.
pub fn load_with_report(rows: impl IntoIterator<Item = RawRow>) -> (Dataset, LoadReport) {
    let mut report = LoadReport::default();
    let mut seen: HashSet<CountryName> = HashSet::new();
    let mut records = Vec::new();

    for (i, raw) in rows.into_iter().enumerate() {
        let row = i + 1;
        report.rows_read += 1;

        let country = match raw.country.as_deref().map(CountryName::new) {
            Some(Ok(country)) => country,
            _ => {
                report.issues.push(LoadIssue::MissingCountry { row });
                continue;
            }
        };
        if !seen.insert(country.clone()) {
            report.issues.push(LoadIssue::DuplicateCountry { row, country });
            continue;
        }

        records.push(build_record(row, country, &raw, &mut report.issues));
    }

    report.records_loaded = records.len();
    (Dataset::from_unique_records(records), report)
}

/// Convert one row whose country is already validated and unique.
fn build_record(
    row: usize,
    country: CountryName,
    raw: &RawRow,
    issues: &mut Vec<LoadIssue>,
) -> PolicyRecord {
    let date_text = cell(raw.last_update.as_deref());
    let last_update = ReviewDate::parse_lenient(date_text);
    if last_update.is_none() && !date_text.is_empty() {
        issues.push(LoadIssue::MalformedDate {
            row,
            country: country.clone(),
            raw: date_text.to_string(),
        });
    }

    let review_status = ReviewStatus::parse(cell(raw.review_status.as_deref()));
    if !review_status.is_known() {
        issues.push(LoadIssue::UnrecognizedStatus {
            row,
            country: country.clone(),
            raw: review_status.as_str().to_string(),
        });
    }

    let values = PolicyCategory::all().map(|category| {
        let value = PolicyValue::parse(cell(raw.value(category)));
        if !value.is_recognized() {
            issues.push(LoadIssue::UnrecognizedValue {
                row,
                country: country.clone(),
                category,
                raw: value.as_str().to_string(),
            });
        }
        value
    });

    let notes = cell(raw.notes.as_deref());
    PolicyRecord::new(country, last_update, review_status, values, notes)
}

/// Trimmed cell text; missing cells read as empty.
fn cell(raw: Option<&str>) -> &str {
    raw.map(str::trim).unwrap_or("")
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Read rows from CSV with a header line. Cells are trimmed and short
/// rows are accepted (missing trailing columns read as empty).
pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let rows = csv_reader
        .deserialize::<RawRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Read rows from a JSON array of objects.
pub fn read_json_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let mut doc: serde_json::Value = serde_json::from_reader(reader)?;
    stringify_json_scalars(&mut doc);
    Ok(serde_json::from_value(doc)?)
}

/// Read rows from a YAML sequence of mappings.
pub fn read_yaml_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let mut doc: serde_yaml::Value = serde_yaml::from_reader(reader)?;
    stringify_yaml_scalars(&mut doc);
    Ok(serde_yaml::from_value(doc)?)
}

/// Replace boolean and number cells with their text.
fn stringify_json_scalars(doc: &mut serde_json::Value) {
    use serde_json::Value;

    let Value::Array(rows) = doc else { return };
    for row in rows {
        let Value::Object(cells) = row else { continue };
        for cell in cells.values_mut() {
            let text = match cell {
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                _ => continue,
            };
            *cell = Value::String(text);
        }
    }
}

/// Replace boolean and number cells with their text.
fn stringify_yaml_scalars(doc: &mut serde_yaml::Value) {
    use serde_yaml::Value;

    let Value::Sequence(rows) = doc else { return };
    for row in rows {
        let Value::Mapping(cells) = row else { continue };
        for cell in cells.values_mut() {
            let text = match cell {
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                _ => continue,
            };
            *cell = Value::String(text);
        }
    }
}

/// Load a dataset from CSV.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    Ok(load(read_csv_rows(reader)?))
}

/// Load a dataset from JSON.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    Ok(load(read_json_rows(reader)?))
}

/// Load a dataset from YAML.
pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    Ok(load(read_yaml_rows(reader)?))
}

/// Read rows from a file, choosing the format by extension
/// (`csv`, `json`, `yaml`, `yml`).
pub fn read_path_rows(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let open = || std::fs::File::open(path).map(std::io::BufReader::new);

    match extension.as_deref() {
        Some("csv") => read_csv_rows(open()?),
        Some("json") => read_json_rows(open()?),
        Some("yaml") | Some("yml") => read_yaml_rows(open()?),
        _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load a dataset from a file.
pub fn from_path(path: &Path) -> Result<Dataset, LoadError> {
    let dataset = load(read_path_rows(path)?);
    tracing::info!(path = %path.display(), countries = dataset.len(), "loaded dataset file");
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Embedded sample
// ---------------------------------------------------------------------------

/// Sample table shipped with the dashboard:
/// country, last update, status, six values, notes.
const SAMPLE_ROWS: &[(&str, &str, &str, [&str; 6], &str)] = &[
    ("Indonesia", "2026-02-20", "Green", ["Yes", "Partial", "Yes", "Partial", "Yes", "Partial"], "Combined enforcement and prevention approach"),
    ("Malaysia", "2026-02-10", "Yellow", ["Yes", "Yes", "Yes", "Yes", "Partial", "Yes"], "Strengthening inter-agency coordination"),
    ("Philippines", "2026-01-28", "Red", ["Partial", "No", "Yes", "Partial", "Partial", "No"], "Limited data on reintegration"),
    ("France", "2026-02-15", "Green", ["Yes", "Yes", "Yes", "Yes", "Yes", "Yes"], "Relatively strong legal and surveillance instruments"),
    ("Germany", "2026-02-12", "Green", ["Yes", "Yes", "Yes", "Yes", "Yes", "Yes"], "Well-developed reintegration programme"),
    ("Turkey", "2026-01-30", "Yellow", ["Partial", "Yes", "Yes", "Yes", "Partial", "Partial"], "Women and children data needs an update"),
    ("Iraq", "2026-01-25", "Red", ["Partial", "Partial", "Yes", "Partial", "No", "No"], "Large rehabilitation data gap"),
    ("Kazakhstan", "2026-02-05", "Yellow", ["Yes", "Yes", "Yes", "Partial", "Yes", "Yes"], "Useful reference for repatriation"),
];

/// Rows of the embedded sample table.
pub fn sample_rows() -> Vec<RawRow> {
    SAMPLE_ROWS
        .iter()
        .map(|(country, date, status, values, notes)| {
            let [prevention, administrative, criminal_justice, surveillance, rehab, women] =
                values.map(|v| Some(v.to_string()));
            RawRow {
                country: Some(country.to_string()),
                last_update: Some(date.to_string()),
                review_status: Some(status.to_string()),
                prevention,
                administrative,
                criminal_justice,
                surveillance,
                rehab_reintegration: rehab,
                women_children_notes: women,
                notes: Some(notes.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, date: &str, status: &str, values: [&str; 6]) -> RawRow {
        let [p, a, c, s, r, w] = values.map(|v| Some(v.to_string()));
        RawRow {
            country: Some(country.to_string()),
            last_update: Some(date.to_string()),
            review_status: Some(status.to_string()),
            prevention: p,
            administrative: a,
            criminal_justice: c,
            surveillance: s,
            rehab_reintegration: r,
            women_children_notes: w,
            notes: None,
        }
    }

    #[test]
    fn sample_loads_cleanly() {
        let (dataset, report) = load_with_report(sample_rows());
        assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
        assert_eq!(dataset.len(), 8);
        assert_eq!(report.rows_read, 8);
        assert_eq!(report.skipped(), 0);
    }

    #[test]
    fn preserves_input_order() {
        let dataset = load(sample_rows());
        let names: Vec<&str> = dataset.records().iter().map(|r| r.country().as_str()).collect();
        assert_eq!(
            names,
            ["Indonesia", "Malaysia", "Philippines", "France", "Germany", "Turkey", "Iraq", "Kazakhstan"]
        );
    }

    #[test]
    fn blank_country_is_skipped() {
        let rows = vec![
            row("", "2026-01-01", "Green", ["Yes"; 6]),
            RawRow::default(),
            row("Chile", "2026-01-01", "Green", ["Yes"; 6]),
        ];
        let (dataset, report) = load_with_report(rows);
        assert_eq!(dataset.len(), 1);
        assert_eq!(
            report.issues,
            vec![
                LoadIssue::MissingCountry { row: 1 },
                LoadIssue::MissingCountry { row: 2 },
            ]
        );
    }

    #[test]
    fn malformed_date_does_not_abort_load() {
        let rows = vec![
            row("Peru", "yesterday", "Green", ["Yes"; 6]),
            row("Chile", "2026-01-01", "Green", ["Yes"; 6]),
        ];
        let (dataset, report) = load_with_report(rows);
        assert_eq!(dataset.len(), 2);
        assert!(dataset.get("Peru").unwrap().last_update().is_none());
        assert!(dataset.get("Chile").unwrap().last_update().is_some());
        assert!(matches!(
            &report.issues[..],
            [LoadIssue::MalformedDate { row: 1, raw, .. }] if raw == "yesterday"
        ));
    }

    #[test]
    fn missing_date_is_unknown_without_issue() {
        let mut raw = row("Peru", "", "Green", ["Yes"; 6]);
        raw.last_update = None;
        let (dataset, report) = load_with_report(vec![raw]);
        assert!(dataset.get("Peru").unwrap().last_update().is_none());
        assert!(report.is_clean());
    }

    #[test]
    fn unrecognized_values_are_kept_and_reported() {
        let rows = vec![row("Peru", "2026-01-01", "Amber", ["Yes", "TBD", "No", "Yes", "Yes", "Yes"])];
        let (dataset, report) = load_with_report(rows);
        let peru = dataset.get("Peru").unwrap();
        assert_eq!(
            peru.value(PolicyCategory::Administrative),
            &PolicyValue::Unrecognized("TBD".into())
        );
        assert_eq!(peru.review_status(), &ReviewStatus::Other("Amber".into()));
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues.iter().all(|i| !i.dropped_row()));
        assert_eq!(
            report.issues[1].to_string(),
            "row 1 (Peru): unrecognized administrative value \"TBD\""
        );
    }

    #[test]
    fn duplicate_country_keeps_first() {
        let rows = vec![
            row("Peru", "2026-01-01", "Green", ["Yes"; 6]),
            row("Peru", "2026-02-01", "Red", ["No"; 6]),
        ];
        let (dataset, report) = load_with_report(rows);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get("Peru").unwrap().completeness_pct(), 100.0);
        assert!(matches!(
            report.issues[..],
            [LoadIssue::DuplicateCountry { row: 2, .. }]
        ));
    }

    #[test]
    fn cells_are_trimmed() {
        let rows = vec![row(" Peru ", " 2026-01-01 ", " Green ", [" Yes", "No ", "Yes", "Yes", "Yes", "Yes"])];
        let dataset = load(rows);
        let peru = dataset.get("Peru").unwrap();
        assert_eq!(peru.review_status(), &ReviewStatus::Green);
        assert_eq!(peru.value(PolicyCategory::Prevention), &PolicyValue::Yes);
        assert_eq!(peru.gap_count(), 1);
    }

    #[test]
    fn unrecognized_text_is_stored_trimmed() {
        let rows = vec![row("Peru", "2026-01-01", "Green", ["  TBD ", "Yes", "Yes", "Yes", "Yes", "Yes"])];
        let (dataset, report) = load_with_report(rows);
        assert_eq!(
            dataset.get("Peru").unwrap().value(PolicyCategory::Prevention),
            &PolicyValue::Unrecognized("TBD".into())
        );
        assert!(matches!(
            &report.issues[..],
            [LoadIssue::UnrecognizedValue { raw, .. }] if raw == "TBD"
        ));
    }

    #[test]
    fn csv_source() {
        let csv = "\
country,last_update,review_status,prevention,administrative,criminal_justice,surveillance,rehab_reintegration,women_children_notes,notes
Chile,2026-02-01,Green,Yes,Yes,Partial,No,Yes,Yes,\"Quoted, with comma\"
,2026-02-01,Red,No,No,No,No,No,No,orphan
Peru,not a date,Yellow,Yes,No
";
        let rows = read_csv_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].notes.as_deref(), Some("Quoted, with comma"));

        let (dataset, report) = load_with_report(rows);
        assert_eq!(dataset.len(), 2);
        let peru = dataset.get("Peru").unwrap();
        assert_eq!(peru.value(PolicyCategory::Administrative), &PolicyValue::No);
        assert_eq!(
            peru.value(PolicyCategory::Surveillance),
            &PolicyValue::Unrecognized(String::new())
        );
        assert!(report
            .issues
            .iter()
            .any(|i| matches!(i, LoadIssue::MissingCountry { row: 2 })));
    }

    #[test]
    fn json_source() {
        let json = r#"[
            {"country": "Chile", "review_status": "Green", "prevention": "Yes"},
            {"country": "Peru", "last_update": "2026-02-01T10:00:00Z"}
        ]"#;
        let dataset = from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get("Chile").unwrap().completeness_pct(), 16.7);
        assert_eq!(
            dataset.get("Peru").unwrap().last_update_display(),
            "2026-02-01"
        );
    }

    #[test]
    fn yaml_source() {
        let yaml = "
- country: Chile
  last_update: 2026-02-01
  review_status: Red
  prevention: Partial
  administrative: 'No'
";
        let dataset = from_yaml_reader(yaml.as_bytes()).unwrap();
        let chile = dataset.get("Chile").unwrap();
        assert_eq!(chile.last_update_display(), "2026-02-01");
        assert_eq!(chile.gap_count(), 1);
    }

    #[test]
    fn json_non_string_cells_are_unrecognized() {
        let json = r#"[
            {"country": "Chile", "prevention": true, "administrative": 3},
            {"country": "Peru", "prevention": "Yes"}
        ]"#;
        let (dataset, report) = load_with_report(read_json_rows(json.as_bytes()).unwrap());
        assert_eq!(dataset.len(), 2);
        let chile = dataset.get("Chile").unwrap();
        assert_eq!(
            chile.value(PolicyCategory::Prevention),
            &PolicyValue::Unrecognized("true".into())
        );
        assert_eq!(
            chile.value(PolicyCategory::Administrative),
            &PolicyValue::Unrecognized("3".into())
        );
        assert_eq!(chile.completeness_pct(), 0.0);
        assert_eq!(
            dataset.get("Peru").unwrap().value(PolicyCategory::Prevention),
            &PolicyValue::Yes
        );
        assert!(report.issues.iter().all(|i| !i.dropped_row()));
    }

    #[test]
    fn yaml_non_string_cells_are_unrecognized() {
        let yaml = "
- country: Chile
  prevention: true
  surveillance: 1
- country: Peru
  prevention: 'Yes'
";
        let dataset = from_yaml_reader(yaml.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        let chile = dataset.get("Chile").unwrap();
        assert_eq!(
            chile.value(PolicyCategory::Prevention),
            &PolicyValue::Unrecognized("true".into())
        );
        assert_eq!(
            chile.value(PolicyCategory::Surveillance),
            &PolicyValue::Unrecognized("1".into())
        );
        assert_eq!(
            dataset.get("Peru").unwrap().value(PolicyCategory::Prevention),
            &PolicyValue::Yes
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            from_json_reader("{not json".as_bytes()),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn unsupported_extension() {
        let err = from_path(Path::new("matrix.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("matrix.xlsx"));
    }
}
