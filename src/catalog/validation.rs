//! Create Payload Normalization
//!
//! Turns a loosely typed `CreatePlantRequest` into a `NewPlant`. Checks run
//! in a fixed order (name, then price) so the first failure decides the
//! message; every other field is coerced rather than rejected.

use super::error::ValidationError;
use super::types::{CreatePlantRequest, NewPlant};
use serde_json::Value;

pub fn validate_new_plant(req: CreatePlantRequest) -> Result<NewPlant, ValidationError> {
    let name = parse_name(req.name.as_ref())?;
    let price = parse_price(req.price.as_ref())?;

    Ok(NewPlant {
        name,
        price,
        categories: parse_categories(req.categories.as_ref()),
        in_stock: parse_in_stock(req.in_stock.as_ref()),
        image_url: text_or_empty(req.image_url.as_ref()),
        description: text_or_empty(req.description.as_ref()),
    })
}

/// The trimmed name; anything but a non-blank string is rejected.
pub fn parse_name(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        _ => Err(ValidationError::MissingName),
    }
}

/// Accepts JSON numbers and numeric strings. Negative, non-finite, blank
/// and non-numeric values are rejected.
pub fn parse_price(value: Option<&Value>) -> Result<f64, ValidationError> {
    let price = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match price {
        Some(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err(ValidationError::InvalidPrice),
    }
}

/// A list (scalars become strings) or one comma-separated string. Labels are
/// trimmed and blank ones dropped; other shapes give an empty list.
pub fn parse_categories(value: Option<&Value>) -> Vec<String> {
    let raw: Vec<String> = match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    raw.into_iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}

/// Only `true` and `"true"` mean in stock.
pub fn parse_in_stock(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

fn text_or_empty(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
