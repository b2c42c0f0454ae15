//! Whole-file JSON reads and writes shared by the file-backed repositories.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::Path;

/// `Ok(None)` when the file does not exist.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, String> {
    let contents = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("failed to read {}: {}", path.display(), e)),
    };

    serde_json::from_slice(&contents)
        .map(Some)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))
}

/// Serialize `value` with `indent` per nesting level and overwrite `path`.
/// Non-ASCII text is written as-is.
pub async fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    indent: &[u8],
) -> Result<(), String> {
    let bytes = to_pretty_json(value, indent)
        .map_err(|e| format!("failed to serialize {}: {}", path.display(), e))?;

    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))
}

pub fn to_pretty_json<T: Serialize + ?Sized>(
    value: &T,
    indent: &[u8],
) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
