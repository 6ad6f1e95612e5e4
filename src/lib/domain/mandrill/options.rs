//! Typed access to the delivery options a mail carries

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::mail::Mail;

use super::errors::MandrillError;

/// Format Mandrill expects for scheduled sends, always in UTC
const SEND_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads a string option. Numbers and booleans are accepted and rendered as
/// strings; an empty string counts as absent.
pub(crate) fn string(mail: &impl Mail, name: &str) -> Result<Option<String>, MandrillError> {
    match mail.option(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(other) => Err(MandrillError::invalid_option(
            name,
            format!("expected a string, got {other}"),
        )),
    }
}

/// Reads a boolean option given either as a JSON bool or as `"true"` / `"false"`
pub(crate) fn boolean(mail: &impl Mail, name: &str) -> Result<Option<bool>, MandrillError> {
    match mail.option(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::String(s)) => match s.trim() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(MandrillError::invalid_option(
                name,
                format!("expected true or false, got {other:?}"),
            )),
        },
        Some(other) => Err(MandrillError::invalid_option(
            name,
            format!("expected a boolean, got {other}"),
        )),
    }
}

/// Reads an option whose value is passed through to Mandrill as-is
pub(crate) fn raw(mail: &impl Mail, name: &str) -> Option<Value> {
    mail.option(name).filter(|v| !v.is_null())
}

/// Reads an option and deserializes it into `T`
pub(crate) fn typed<T: DeserializeOwned>(
    mail: &impl Mail,
    name: &str,
) -> Result<Option<T>, MandrillError> {
    raw(mail, name)
        .map(serde_json::from_value)
        .transpose()
        .map_err(|err| MandrillError::invalid_option(name, err))
}

/// Reads tags given either as a single string or a list of strings
pub(crate) fn tags(mail: &impl Mail, name: &str) -> Result<Option<Vec<String>>, MandrillError> {
    match raw(mail, name) {
        None => Ok(None),
        Some(Value::String(tag)) => Ok(Some(vec![tag])),
        Some(list @ Value::Array(_)) => serde_json::from_value(list)
            .map(Some)
            .map_err(|err| MandrillError::invalid_option(name, err)),
        Some(other) => Err(MandrillError::invalid_option(
            name,
            format!("expected a string or a list of strings, got {other}"),
        )),
    }
}

/// Reads an RFC 3339 timestamp and renders it in Mandrill's UTC format
pub(crate) fn send_at(mail: &impl Mail, name: &str) -> Result<Option<String>, MandrillError> {
    let Some(raw) = string(mail, name)? else {
        return Ok(None);
    };

    let at = DateTime::parse_from_rfc3339(&raw)
        .map_err(|err| MandrillError::invalid_option(name, err))?
        .with_timezone(&Utc);

    Ok(Some(at.format(SEND_AT_FORMAT).to_string()))
}
