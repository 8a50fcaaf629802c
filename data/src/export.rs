use crate::dataset::Dataset;

use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "submarine_data.json";

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pretty JSON with 2-space indentation, the same shape as the records in memory.
pub fn to_json(dataset: &Dataset) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Writes an already serialized document into `dir`, returning the file path.
pub fn write_document(dir: &Path, json: &str) -> Result<PathBuf, ExportError> {
    let path = dir.join(FILE_NAME);

    std::fs::create_dir_all(dir)
        .and_then(|_| std::fs::write(&path, json))
        .map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

    log::info!("Exported dataset to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Record, RecordId, Variables};
    use crate::hue::Hue;

    fn two_records() -> Dataset {
        Dataset::from_records(vec![
            Record::new(
                RecordId(0),
                150.0,
                Variables {
                    depth: 42.5,
                    length: 10.0,
                    tower_height: 20.25,
                    body_height: 30.0,
                    periscope_radius: 99.5,
                },
                Hue::Red,
            ),
            Record::new(
                RecordId(1),
                412.75,
                Variables {
                    depth: 0.0,
                    length: 1.5,
                    tower_height: 2.5,
                    body_height: 3.5,
                    periscope_radius: 4.5,
                },
                Hue::Orange,
            ),
        ])
    }

    #[test]
    fn json_matches_in_memory_records() {
        let dataset = two_records();
        let json = to_json(&dataset).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let expected = serde_json::json!([
            {
                "id": 0, "x": 150.0, "depth": 42.5, "length": 10.0,
                "towerHeight": 20.25, "bodyHeight": 30.0, "periscopeRadius": 99.5,
                "color": "red"
            },
            {
                "id": 1, "x": 412.75, "depth": 0.0, "length": 1.5,
                "towerHeight": 2.5, "bodyHeight": 3.5, "periscopeRadius": 4.5,
                "color": "orange"
            }
        ]);
        assert_eq!(parsed, expected);

        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn uses_two_space_indent() {
        let json = to_json(&two_records()).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": 0,"));
    }

    #[test]
    fn writes_named_file() {
        let dir = std::env::temp_dir().join("periscope-export-test");
        let json = to_json(&two_records()).unwrap();

        let path = write_document(&dir, &json).unwrap();
        assert_eq!(path.file_name().unwrap(), FILE_NAME);
        assert_eq!(std::fs::read_to_string(path).unwrap(), json);
    }
}
