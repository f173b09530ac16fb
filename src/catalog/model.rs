//! Catalog document model and `metadata.json` persistence.

use crate::error::CatalogError;
use crate::types::TargetType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// All converted tables, keyed by table name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub tables: BTreeMap<String, TableEntry>,
}

/// One converted table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Primary-key candidate columns, in schema order
    pub pkey: Vec<String>,
    pub num_rows: u64,
    /// Columns in schema order
    pub columns: Vec<ColumnEntry>,
}

/// One column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: TargetType,
    /// Distinct non-null values; absent when cardinality tracking is off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_values: Option<u64>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(&self, name: &str) -> Option<&TableEntry> {
        self.tables.get(name)
    }

    /// Total rows across all tables
    pub fn total_rows(&self) -> u64 {
        self.tables.values().map(|t| t.num_rows).sum()
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the catalog as pretty JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let io_err = |source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }

    /// Read a catalog previously written by [`Catalog::save`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl TableEntry {
    pub fn column(&self, name: &str) -> Option<&ColumnEntry> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseType;
    use tempfile::tempdir;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.tables.insert(
            "people".to_string(),
            TableEntry {
                pkey: vec!["id".to_string()],
                num_rows: 3,
                columns: vec![
                    ColumnEntry {
                        name: "id".to_string(),
                        column_type: TargetType {
                            base: Some(BaseType::Int),
                            props: vec!["64".to_string()],
                            nullable: false,
                        },
                        distinct_values: Some(3),
                    },
                    ColumnEntry {
                        name: "blob".to_string(),
                        column_type: TargetType {
                            base: None,
                            props: vec![],
                            nullable: true,
                        },
                        distinct_values: Some(1),
                    },
                ],
            },
        );
        catalog
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&sample().to_json_pretty().unwrap()).unwrap();
        let table = &json["tables"]["people"];
        assert_eq!(table["pkey"], serde_json::json!(["id"]));
        assert_eq!(table["num_rows"], 3);
        assert_eq!(table["columns"][0]["name"], "id");
        assert_eq!(table["columns"][0]["type"]["base"], "int");
        assert_eq!(table["columns"][0]["type"]["props"], serde_json::json!(["64"]));
        assert_eq!(table["columns"][0]["type"]["nullable"], false);
        assert_eq!(table["columns"][0]["distinct_values"], 3);
        assert!(table["columns"][1]["type"]["base"].is_null());
    }

    #[test]
    fn test_two_space_indent() {
        let text = sample().to_json_pretty().unwrap();
        assert!(text.starts_with("{\n  \"tables\": {\n    \"people\": {"));
    }

    #[test]
    fn test_distinct_values_omitted_when_absent() {
        let mut catalog = sample();
        for table in catalog.tables.values_mut() {
            table.pkey.clear();
            for column in &mut table.columns {
                column.distinct_values = None;
            }
        }
        let text = catalog.to_json_pretty().unwrap();
        assert!(!text.contains("distinct_values"));

        let parsed: Catalog = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        let catalog = sample();

        catalog.save(&path).unwrap();
        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded, catalog);
        assert_eq!(loaded.total_rows(), 3);
        assert_eq!(loaded.table("people").unwrap().column_names(), vec!["id", "blob"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/no/such/metadata.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
