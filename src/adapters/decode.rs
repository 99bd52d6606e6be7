use crate::domain::model::{InputFormat, PersonRecord};
use crate::utils::error::{CensusError, Result};
use serde::Deserialize;

const CSV_COLUMNS: [&str; 3] = ["name", "birthYear", "deathYear"];

pub fn decode_records(path: &str, format: InputFormat, data: &[u8]) -> Result<Vec<PersonRecord>> {
    match format {
        InputFormat::Json => decode_json(path, data),
        InputFormat::Csv => decode_csv(path, data),
    }
}

/// Decodes a JSON array of people.
///
/// `null` and `{}` count as an empty collection; any other non-array document
/// is malformed.
pub fn decode_json(path: &str, data: &[u8]) -> Result<Vec<PersonRecord>> {
    let document: serde_json::Value =
        serde_json::from_slice(data).map_err(|e| malformed(path, e.to_string()))?;

    match document {
        serde_json::Value::Array(items) => Ok(items.iter().map(PersonRecord::from_json).collect()),
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        other => Err(malformed(
            path,
            format!("expected an array of people, found {}", json_kind(&other)),
        )),
    }
}

#[derive(Debug, Deserialize)]
struct CsvPerson {
    #[serde(default)]
    name: String,
    #[serde(rename = "birthYear", default)]
    birth_year: String,
    #[serde(rename = "deathYear", default)]
    death_year: String,
}

impl From<CsvPerson> for PersonRecord {
    fn from(row: CsvPerson) -> Self {
        Self {
            name: Some(row.name),
            birth_year: row.birth_year.parse().ok(),
            death_year: row.death_year.parse().ok(),
        }
    }
}

/// Decodes CSV with a `name,birthYear,deathYear` header. Blank or
/// non-integer year cells are treated as absent.
pub fn decode_csv(path: &str, data: &[u8]) -> Result<Vec<PersonRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| malformed(path, e.to_string()))?
        .clone();
    if let Some(missing) = CSV_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(malformed(path, format!("missing CSV column '{}'", missing)));
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvPerson>() {
        let row = row.map_err(|e| malformed(path, e.to_string()))?;
        records.push(PersonRecord::from(row));
    }

    tracing::debug!("Decoded {} CSV rows from {}", records.len(), path);
    Ok(records)
}

fn malformed(path: &str, message: String) -> CensusError {
    CensusError::MalformedSource {
        path: path.to_string(),
        message,
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_array() {
        let data = br#"[
            {"name": "Alice", "birthYear": 1950, "deathYear": 1960},
            {"name": "Bob", "birthYear": 1955}
        ]"#;
        let records = decode_json("people.json", data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PersonRecord::new("Alice", 1950, 1960));
        assert_eq!(records[1].death_year, None);
    }

    #[test]
    fn test_decode_json_empty_documents() {
        assert!(decode_json("people.json", b"[]").unwrap().is_empty());
        assert!(decode_json("people.json", b"{}").unwrap().is_empty());
        assert!(decode_json("people.json", b"null").unwrap().is_empty());
    }

    #[test]
    fn test_decode_json_rejects_unparsable_input() {
        let err = decode_json("people.json", b"[{\"name\": ").unwrap_err();
        assert!(matches!(err, CensusError::MalformedSource { ref path, .. } if path == "people.json"));
    }

    #[test]
    fn test_decode_json_rejects_non_array_document() {
        let err = decode_json("people.json", br#"{"name": "Alice"}"#).unwrap_err();
        match err {
            CensusError::MalformedSource { message, .. } => assert!(message.contains("an object")),
            other => panic!("expected MalformedSource, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_csv() {
        let data = b"name,birthYear,deathYear\nAlice,1950,1960\n,1955,1965\nBob,,1970\nCleo, 1901 ,abc\n";
        let records = decode_csv("people.csv", data).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], PersonRecord::new("Alice", 1950, 1960));
        assert_eq!(records[1].name.as_deref(), Some(""));
        assert_eq!(records[2].birth_year, None);
        assert_eq!(records[3].birth_year, Some(1901));
        assert_eq!(records[3].death_year, None);
    }

    #[test]
    fn test_decode_csv_column_order_does_not_matter() {
        let data = b"deathYear,name,birthYear\n1960,Alice,1950\n";
        let records = decode_csv("people.csv", data).unwrap();
        assert_eq!(records, vec![PersonRecord::new("Alice", 1950, 1960)]);
    }

    #[test]
    fn test_decode_csv_requires_header_columns() {
        let err = decode_csv("people.csv", b"name,born,died\nAlice,1950,1960\n").unwrap_err();
        match err {
            CensusError::MalformedSource { message, .. } => assert!(message.contains("birthYear")),
            other => panic!("expected MalformedSource, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_csv_header_only_is_empty() {
        assert!(decode_csv("people.csv", b"name,birthYear,deathYear\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_decode_records_dispatches_on_format() {
        let records =
            decode_records("people.csv", InputFormat::Csv, b"name,birthYear,deathYear\nA,1900,1900\n")
                .unwrap();
        assert_eq!(records, vec![PersonRecord::new("A", 1900, 1900)]);
    }
}
