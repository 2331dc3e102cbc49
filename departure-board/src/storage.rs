//! JSON file persistence for departures.
//!
//! The file is a top-level JSON array of departure objects:
//!
//! ```json
//! [
//!     {
//!         "destination": "Moscow",
//!         "number": 1,
//!         "time": "08:30"
//!     }
//! ]
//! ```
//!
//! Loading validates the whole document; a single bad element rejects the
//! file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::domain::Departure;
use crate::error::BoardError;

/// File extension required for save and load targets.
pub const JSON_EXTENSION: &str = "json";

/// Check that `path` names a `.json` file.
///
/// Only the text after the last dot of the file name counts, and it must
/// be exactly `json`.
pub fn ensure_json_extension(path: &Path) -> Result<(), BoardError> {
    let extension = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext);

    match extension {
        Some(JSON_EXTENSION) => Ok(()),
        _ => Err(BoardError::InvalidFileExtension(path.to_path_buf())),
    }
}

/// Write departures to `path` as pretty-printed JSON.
///
/// Non-ASCII text is written as UTF-8, not escaped. An existing file is
/// overwritten.
pub fn save_departures(
    path: &Path,
    departures: &[Departure],
    indent: usize,
) -> Result<(), BoardError> {
    ensure_json_extension(path)?;

    let indent = " ".repeat(indent);
    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    departures
        .serialize(&mut serializer)
        .map_err(std::io::Error::from)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(path = %path.display(), count = departures.len(), "saved departures");
    Ok(())
}

/// Read and validate departures from `path`.
///
/// Relative paths resolve against the current working directory.
pub fn load_departures(path: &Path) -> Result<Vec<Departure>, BoardError> {
    ensure_json_extension(path)?;

    if !path.exists() {
        return Err(BoardError::FileNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| malformed(path, e))?;
    let departures: Vec<Departure> =
        serde_json::from_str(&contents).map_err(|e| malformed(path, e))?;

    info!(path = %path.display(), count = departures.len(), "loaded departures");
    Ok(departures)
}

fn malformed(path: &Path, err: impl std::fmt::Display) -> BoardError {
    BoardError::MalformedFile {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DepartureTime;
    use tempfile::tempdir;

    fn dep(destination: &str, number: i64, t: &str) -> Departure {
        Departure::new(destination, number, DepartureTime::parse_hhmm(t).unwrap())
    }

    #[test]
    fn extension_check() {
        assert!(ensure_json_extension(Path::new("data.json")).is_ok());
        assert!(ensure_json_extension(Path::new("dir/data.backup.json")).is_ok());
        assert!(ensure_json_extension(Path::new("/tmp/x.json")).is_ok());

        assert!(ensure_json_extension(Path::new("data.txt")).is_err());
        assert!(ensure_json_extension(Path::new("data.JSON")).is_err());
        assert!(ensure_json_extension(Path::new("data.json.bak")).is_err());
        assert!(ensure_json_extension(Path::new("data")).is_err());
        assert!(ensure_json_extension(Path::new("dir.json/data")).is_err());
        assert!(ensure_json_extension(Path::new("")).is_err());
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trains.json");
        let departures = vec![dep("Kazan", 2, "10:15"), dep("Moscow", 1, "08:30")];

        save_departures(&path, &departures, 4).unwrap();
        let loaded = load_departures(&path).unwrap();

        assert_eq!(loaded, departures);
    }

    #[test]
    fn saved_file_is_pretty_and_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trains.json");

        save_departures(&path, &[dep("Москва", 7, "23:05")], 4).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();

        let expected = "[\n    {\n        \"destination\": \"Москва\",\n        \"number\": 7,\n        \"time\": \"23:05\"\n    }\n]\n";
        assert_eq!(contents, expected);
    }

    #[test]
    fn save_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");

        save_departures(&path, &[], 4).unwrap();
        assert!(load_departures(&path).unwrap().is_empty());
    }

    #[test]
    fn save_rejects_wrong_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");

        let err = save_departures(&path, &[dep("A", 1, "10:00")], 4).unwrap_err();
        assert!(matches!(err, BoardError::InvalidFileExtension(_)));
        assert!(!path.exists());
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("data.json");

        let err = save_departures(&path, &[], 4).unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }

    #[test]
    fn load_rejects_wrong_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "[]").unwrap();

        let err = load_departures(&path).unwrap_err();
        assert!(matches!(err, BoardError::InvalidFileExtension(_)));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_departures(&path).unwrap_err();
        assert!(matches!(err, BoardError::FileNotFound(p) if p == path));
    }

    #[test]
    fn load_single_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("one.json");
        std::fs::write(
            &path,
            r#"[{"destination":"Moscow","number":1,"time":"08:30"}]"#,
        )
        .unwrap();

        let loaded = load_departures(&path).unwrap();
        assert_eq!(loaded, vec![dep("Moscow", 1, "08:30")]);
    }

    #[test]
    fn load_accepts_unpadded_times() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("unpadded.json");
        std::fs::write(
            &path,
            r#"[{"destination":"Moscow","number":1,"time":"8:30"},
                {"destination":"Omsk","number":2,"time":"9:5"}]"#,
        )
        .unwrap();

        let loaded = load_departures(&path).unwrap();
        assert_eq!(loaded, vec![dep("Moscow", 1, "08:30"), dep("Omsk", 2, "09:05")]);
    }

    #[test]
    fn load_keeps_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("order.json");
        std::fs::write(
            &path,
            r#"[{"destination":"Tver","number":1,"time":"08:30"},
                {"destination":"Kazan","number":2,"time":"09:30"}]"#,
        )
        .unwrap();

        let loaded = load_departures(&path).unwrap();
        assert_eq!(loaded[0].destination, "Tver");
        assert_eq!(loaded[1].destination, "Kazan");
    }

    #[test]
    fn load_defaults_missing_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nodest.json");
        std::fs::write(&path, r#"[{"number":5,"time":"12:00"}]"#).unwrap();

        let loaded = load_departures(&path).unwrap();
        assert_eq!(loaded, vec![dep("", 5, "12:00")]);
    }

    #[test]
    fn load_rejects_malformed_documents() {
        let dir = tempdir().unwrap();
        let cases = [
            "",
            "not json",
            "{}",
            r#"{"destination":"A","number":1,"time":"08:30"}"#,
            r#"[1, 2]"#,
            r#"[{"destination":"A","time":"08:30"}]"#,
            r#"[{"destination":"A","number":1}]"#,
            r#"[{"destination":"A","number":"1","time":"08:30"}]"#,
            r#"[{"destination":"A","number":1,"time":"8.30"}]"#,
            r#"[{"destination":"A","number":1,"time":"24:00"}]"#,
            r#"[{"destination":"A","number":1,"time":"08:30"}, {"number":2}]"#,
        ];

        for (i, contents) in cases.iter().enumerate() {
            let path = dir.path().join(format!("bad{i}.json"));
            std::fs::write(&path, contents).unwrap();

            let err = load_departures(&path).unwrap_err();
            assert!(
                matches!(err, BoardError::MalformedFile { .. }),
                "case {i} ({contents:?}) gave {err:?}"
            );
        }
    }

    #[test]
    fn custom_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("two.json");

        save_departures(&path, &[dep("A", 1, "10:00")], 2).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[\n  {\n    \"destination\""));
    }
}
