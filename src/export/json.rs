use crate::errors::{AppError, AppResult};
use crate::export::model::RecordExport;

/// Write the export rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[RecordExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
