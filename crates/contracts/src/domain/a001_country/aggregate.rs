use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// Aggregate
// ============================================================================

/// Страна в каноническом виде (после нормализации ответа API)
///
/// Экземпляры не изменяются после нормализации. Уникальность имени
/// не гарантируется: дубликаты допустимы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub region: String,
    /// Площадь в км², всегда конечная и неотрицательная
    pub area: f64,
}

impl Country {
    pub fn new(name: impl Into<String>, region: impl Into<String>, area: f64) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            area: sanitize_area(area),
        }
    }

    /// Приводит одну сырую запись API к каноническому виду.
    ///
    /// Никогда не возвращает ошибку: битые поля заменяются значениями
    /// по умолчанию (пустая строка, площадь 0).
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            name: raw.get("name").map(name_from_value).unwrap_or_default(),
            region: raw
                .get("region")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            area: raw.get("area").map(area_from_value).unwrap_or(0.0),
        }
    }
}

// v2 API returns `"name": "Fiji"`, v3 returns `"name": { "common": "Fiji", ... }`
fn name_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("common")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        _ => String::new(),
    }
}

fn area_from_value(value: &Value) -> f64 {
    let area = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    sanitize_area(area)
}

fn sanitize_area(area: f64) -> f64 {
    if area.is_finite() && area > 0.0 {
        area
    } else {
        0.0
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Ошибки разбора ответа API со списком стран
#[derive(Debug, Error, PartialEq)]
pub enum CountryPayloadError {
    #[error("expected a JSON array of countries, got {0}")]
    NotAnArray(&'static str),
}

/// Нормализует весь ответ API: одна запись на выходе на каждую запись на входе,
/// порядок сохраняется.
pub fn normalize_payload(payload: &Value) -> Result<Vec<Country>, CountryPayloadError> {
    let entries = payload
        .as_array()
        .ok_or_else(|| CountryPayloadError::NotAnArray(json_kind(payload)))?;

    Ok(entries.iter().map(Country::from_raw).collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
