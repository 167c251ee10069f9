//! The trust boundary between the generative recognizer and everything else.
//!
//! The service answer is free-text-generated JSON and may be malformed,
//! partially empty, or numerically out of range. A record either comes out
//! of here fully populated or not at all.

use serde_json::Value;

use crate::models::{DEFAULT_POINTS, MAX_POINTS, MIN_POINTS, WasteIdentification};

/// Converts an untrusted recognition answer into a [`WasteIdentification`],
/// or rejects it outright. Never yields a partially populated record.
pub fn validate_identification(raw: &Value) -> Option<WasteIdentification> {
    let fields = raw.as_object()?;

    let kind = required_text(fields.get("type")?)?;
    let material = required_text(fields.get("material")?)?;
    let description = required_text(fields.get("description")?)?;
    let environmental_impact = required_text(fields.get("environmentalImpact")?)?;

    // A non-array here is a rejection, not an empty list.
    let sorting_steps: Vec<String> = fields
        .get("sortingSteps")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_owned)
        .collect();

    if sorting_steps.is_empty() {
        return None;
    }

    Some(WasteIdentification {
        kind,
        material,
        description,
        sorting_steps,
        environmental_impact,
        points: normalize_points(fields.get("points")),
    })
}

fn required_text(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();

    if text.is_empty() {
        return None;
    }

    Some(text.to_owned())
}

fn as_finite_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}

/// Point magnitude is a business concern, not a validity concern: anything
/// unusable becomes [`DEFAULT_POINTS`], everything else is rounded and
/// clamped into [`MIN_POINTS`]..=[`MAX_POINTS`].
pub fn normalize_points(value: Option<&Value>) -> u32 {
    match value.and_then(as_finite_number) {
        Some(number) => {
            (number.round() as i64).clamp(i64::from(MIN_POINTS), i64::from(MAX_POINTS)) as u32
        }
        None => DEFAULT_POINTS,
    }
}
