use std::fs;
use std::path::Path;

use crate::domain::table::{ConfigError, TableConfig};

/// Разобрать конфиг стола из JSON. Отсутствующие поля берутся по умолчанию.
pub fn parse_table_config(json: &str) -> Result<TableConfig, ConfigError> {
    let config: TableConfig =
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Прочитать конфиг стола из JSON-файла.
pub fn load_table_config(path: impl AsRef<Path>) -> Result<TableConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
    parse_table_config(&raw)
}
