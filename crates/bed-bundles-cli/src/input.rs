//! JSON vacancy input.
//!
//! Accepts an array whose elements are either records
//! `{"bed_id": .., "start_date": "YYYY-MM-DD", "end_date": "YYYY-MM-DD"}` or
//! triples `["YYYY-MM-DD", "YYYY-MM-DD", bed_id]`. Bed ids may be numbers or
//! strings.

use std::io::Read;

use anyhow::{bail, Context, Result};
use bed_bundles::{BedId, Vacancy};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct VacancyRecord {
    bed_id: BedId,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

type VacancyTriple = (NaiveDate, NaiveDate, BedId);

/// Decode one array element by its JSON shape so a bad field is reported
/// against the shape it belongs to.
fn parse_element(element: Value) -> Result<Vacancy> {
    let (bed_id, start_date, end_date) = if element.is_array() {
        let (start, end, bed_id): VacancyTriple = serde_json::from_value(element)
            .context("expected [start_date, end_date, bed_id]")?;
        (bed_id, start, end)
    } else if element.is_object() {
        let record: VacancyRecord = serde_json::from_value(element)
            .context("expected {bed_id, start_date, end_date}")?;
        (record.bed_id, record.start_date, record.end_date)
    } else {
        bail!("expected an array or object, found {element}");
    };
    Ok(Vacancy::new(bed_id, start_date, end_date)?)
}

/// Parse a JSON array of vacancy records or triples.
pub fn parse_vacancies(json: &str) -> Result<Vec<Vacancy>> {
    let elements: Vec<Value> =
        serde_json::from_str(json).context("input is not a JSON array of vacancies")?;
    elements
        .into_iter()
        .enumerate()
        .map(|(idx, element)| parse_element(element).with_context(|| format!("vacancy #{idx}")))
        .collect()
}

/// Read the whole input, from stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let json = r#"[{"bed_id": "A", "start_date": "2025-01-01", "end_date": "2025-01-10"}]"#;
        let vacancies = parse_vacancies(json).unwrap();
        assert_eq!(vacancies.len(), 1);
        assert_eq!(vacancies[0].bed_id(), &BedId::from("A"));
    }

    #[test]
    fn test_parse_triples() {
        let json = r#"[["2025-03-02", "2025-06-08", 3], ["2025-03-15", "2025-12-21", "zero"]]"#;
        let vacancies = parse_vacancies(json).unwrap();
        assert_eq!(vacancies[0].bed_id(), &BedId::Number(3));
        assert_eq!(vacancies[1].bed_id(), &BedId::from("zero"));
        assert_eq!(vacancies[1].window().days(), 281);
    }

    #[test]
    fn test_parse_reports_inverted_window_position() {
        let json = r#"[["2025-01-01", "2025-01-02", 1], ["2025-11-28", "2025-01-01", 0]]"#;
        let err = parse_vacancies(json).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("vacancy #1"), "got: {chain}");
        assert!(chain.contains("Invalid window"), "got: {chain}");
    }

    #[test]
    fn test_parse_reports_malformed_date_position() {
        let json = r#"[["2025-01-01", "2025-01-02", 1], ["2025-13-01", "2025-12-01", 2]]"#;
        let err = parse_vacancies(json).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("vacancy #1"), "got: {chain}");
        assert!(chain.contains("[start_date, end_date, bed_id]"), "got: {chain}");
        assert!(!chain.contains("did not match any variant"), "got: {chain}");
    }

    #[test]
    fn test_parse_reports_missing_field_position() {
        let json = r#"[{"bed_id": "A", "start_date": "2025-01-01"}]"#;
        let chain = format!("{:#}", parse_vacancies(json).unwrap_err());
        assert!(chain.contains("vacancy #0"), "got: {chain}");
        assert!(chain.contains("end_date"), "got: {chain}");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_vacancies(r#"{"bed_id": 1}"#).is_err());
    }
}
