//! Shared file and stdin handling for command handlers

use crate::error::{Error, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Whether the path argument means "read stdin"
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a document source: a file, or stdin for `-`
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Parse a JSON document
pub fn parse_json(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| {
        tracing::debug!(error = %e, "JSON parse failed");
        Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        }
    })
}

/// Parse a configuration document, accepting YAML for `.yaml`/`.yml` files
pub fn parse_config(content: &str, path: &Path) -> Result<Value> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(content).map_err(|e| {
            tracing::debug!(error = %e, "YAML parse failed");
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "YAML".to_string(),
            }
        })
    } else {
        parse_json(content, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("-x")));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/no/such/file.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_read_source_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"a\": 1}}").unwrap();
        let content = read_source(file.path()).unwrap();
        assert_eq!(content, "{\"a\": 1}");
    }

    #[test]
    fn test_parse_config_json_and_yaml() {
        let parsed = parse_config("{\"transformations\": []}", Path::new("c.json")).unwrap();
        assert_eq!(parsed, json!({"transformations": []}));

        let parsed = parse_config("transformations: []\n", Path::new("c.yaml")).unwrap();
        assert_eq!(parsed, json!({"transformations": []}));
    }

    #[test]
    fn test_parse_config_invalid_json() {
        let err = parse_config("{oops", &PathBuf::from("c.json")).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
    }
}
