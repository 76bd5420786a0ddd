// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! First-match lookup over credential maps whose key names vary between
//! service brokers.

use serde_json::{Map, Value};

use crate::error::Error;

/// Returns the string stored under the first candidate key present in `map`.
///
/// The first present key decides the outcome even when a later candidate
/// would also match. Returns an empty string when no candidate is present.
///
/// # Errors
///
/// Returns [`Error::Lookup`] when the matched value is not a JSON string.
///
/// # Examples
///
/// ```
/// use redis_discovery::lookup;
/// use serde_json::json;
///
/// let credentials = json!({ "hostname": "10.0.0.7" });
/// let map = credentials.as_object().expect("object",);
/// assert_eq!(lookup(map, &["host", "hostname"],).expect("string value",), "10.0.0.7");
/// assert_eq!(lookup(map, &["password"],).expect("absent key",), "");
/// ```
pub fn lookup(map: &Map<String, Value,>, candidates: &[&str],) -> Result<String, Error,>
{
    let Some((key, value,),) =
        candidates.iter().find_map(|key| map.get(*key,).map(|value| (*key, value,),),)
    else {
        return Ok(String::new(),);
    };

    match value {
        Value::String(text,) => Ok(text.clone(),),
        other => Err(Error::Lookup {
            key: key.to_owned(), found: json_type(other,),
        },),
    }
}

fn json_type(value: &Value,) -> &'static str
{
    match value {
        Value::Null => "null",
        Value::Bool(_,) => "boolean",
        Value::Number(_,) => "number",
        Value::String(_,) => "string",
        Value::Array(_,) => "array",
        Value::Object(_,) => "object",
    }
}
