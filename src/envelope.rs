//! Decoding of Reddit's `kind`/`data` response envelopes.
//!
//! Every decode runs through the same steps: the raw body is parsed into a
//! JSON document, the top-level `kind` and `data` are extracted, and `data` is
//! handed to a mapping function chosen by the caller. The decoder itself
//! knows nothing about individual endpoints; it only knows the three shapes
//! a response can take:
//!
//! - a single Thing ([`decode_thing`]),
//! - a paginated [`Listing`] of Things ([`decode_listing`]),
//! - a flat, cursor-less list of records ([`decode_flat_list`]).
//!
//! Endpoints whose payload carries no envelope at all (booleans, plain
//! objects) skip straight to [`decode_plain`].
//!
//! # Examples
//!
//! ```
//! use redwire::envelope::{decode_listing, of_kind, parse};
//! use redwire::{Kind, Submission};
//!
//! let raw = r#"{
//!     "kind": "Listing",
//!     "data": {
//!         "before": null,
//!         "after": "t3_b",
//!         "children": [{ "kind": "t3", "data": { "id": "a", "title": "hello" } }]
//!     }
//! }"#;
//!
//! let page = decode_listing(parse(raw)?, of_kind::<Submission>(Kind::Link))?;
//! assert_eq!(page.after.as_deref(), Some("t3_b"));
//! assert_eq!(page.children[0].title.as_deref(), Some("hello"));
//! # Ok::<(), redwire::envelope::DecodeError>(())
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::listing::{FlatList, Listing};
use crate::thing::{Kind, Thing};

/// Why a payload could not be turned into the expected value.
///
/// A decode either succeeds completely or fails with one of these; no
/// partially populated value is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[error("Malformed JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// A structural field the decoder relies on is absent.
    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    /// The `kind` discriminator is not one this crate knows about.
    #[error("Unknown kind {0:?}")]
    UnknownKind(String),

    /// The envelope holds a known kind, but not the one the endpoint returns.
    #[error("Expected kind {expected}, found {found}")]
    UnexpectedKind {
        /// The kind the mapping function accepts.
        expected: Kind,
        /// The kind that was received.
        found: Kind,
    },

    /// The `data` payload of a Thing does not match the target type.
    #[error("Failed to map {kind} payload: {source}")]
    Payload {
        /// The kind of the Thing being mapped.
        kind: Kind,
        /// The serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A flat record or an envelope-free payload does not match the target type.
    #[error("Failed to map record: {0}")]
    Record(#[source] serde_json::Error),

    /// The document is valid JSON but not laid out the way the endpoint is.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// The second list of the friends response is expected to always be empty.
    #[error("Expected the blocked list of the friends response to be empty, found {0} entries")]
    BlockedListNotEmpty(usize),
}

/// Parses a raw response body.
pub fn parse(raw: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(raw).map_err(DecodeError::Json)
}

/// Splits a document into its `kind` and `data`.
///
/// # Errors
///
/// Fails if the document is not an object, lacks `kind` or `data`, or names
/// an unknown kind.
pub fn envelope(value: Value) -> Result<Thing<Value>, DecodeError> {
    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Err(DecodeError::UnexpectedShape(format!(
                "expected a {{kind, data}} object, found {}",
                type_name(&other)
            )))
        }
    };

    let data = object
        .remove("data")
        .ok_or(DecodeError::MissingField("data"))?;
    let kind = match object.remove("kind") {
        Some(Value::String(kind)) => kind.parse()?,
        Some(other) => {
            return Err(DecodeError::UnexpectedShape(format!(
                "`kind` is {}, not a string",
                type_name(&other)
            )))
        }
        None => return Err(DecodeError::MissingField("kind")),
    };

    Ok(Thing::new(kind, data))
}

/// Decodes a single Thing, handing its kind and payload to `map`.
pub fn decode_thing<T, F>(value: Value, map: F) -> Result<T, DecodeError>
where
    F: FnOnce(Kind, Value) -> Result<T, DecodeError>,
{
    let Thing { kind, data } = envelope(value)?;
    map(kind, data)
}

/// Decodes a Listing, unwrapping each child Thing with `map_child`.
///
/// # Errors
///
/// Fails if the envelope is not a `Listing`, `children` is missing, a cursor
/// is not a string, or any child fails to decode.
pub fn decode_listing<T, F>(value: Value, mut map_child: F) -> Result<Listing<T>, DecodeError>
where
    F: FnMut(Kind, Value) -> Result<T, DecodeError>,
{
    let Thing { kind, data } = envelope(value)?;
    expect_kind(Kind::Listing, kind)?;

    let mut data = match data {
        Value::Object(data) => data,
        other => {
            return Err(DecodeError::UnexpectedShape(format!(
                "Listing data is {}, not an object",
                type_name(&other)
            )))
        }
    };

    let before = optional_string(&mut data, "before")?;
    let after = optional_string(&mut data, "after")?;
    let modhash = optional_string(&mut data, "modhash")?;
    let dist = match data.remove("dist") {
        None | Some(Value::Null) => None,
        Some(dist) => Some(dist.as_u64().ok_or_else(|| {
            DecodeError::UnexpectedShape(format!("`dist` is {dist}, not a count"))
        })?),
    };

    let children = match data.remove("children") {
        Some(Value::Array(children)) => children,
        Some(other) => {
            return Err(DecodeError::UnexpectedShape(format!(
                "`children` is {}, not an array",
                type_name(&other)
            )))
        }
        None => return Err(DecodeError::MissingField("children")),
    };
    let children = children
        .into_iter()
        .map(|child| decode_thing(child, &mut map_child))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Listing {
        before,
        after,
        dist,
        modhash,
        children,
    })
}

/// Decodes a flat list envelope (`UserList`, `KarmaList`, `TrophyList`).
///
/// `data` is iterated directly and every element goes through `map_item`;
/// elements are not unwrapped as Things and no cursors are read. Reddit
/// sometimes nests the array one level down as `{"children": [...]}` or
/// `{"trophies": [...]}`; that array is treated as the same flat sequence.
pub fn decode_flat_list<T, F>(
    value: Value,
    expected: Kind,
    map_item: F,
) -> Result<FlatList<T>, DecodeError>
where
    F: FnMut(Value) -> Result<T, DecodeError>,
{
    let Thing { kind, data } = envelope(value)?;
    expect_kind(expected, kind)?;

    let items = match data {
        Value::Array(items) => items,
        Value::Object(mut object) => match object
            .remove("children")
            .or_else(|| object.remove("trophies"))
        {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(DecodeError::UnexpectedShape(format!(
                    "{kind} data holds no array of records"
                )))
            }
        },
        other => {
            return Err(DecodeError::UnexpectedShape(format!(
                "{kind} data is {}, not an array",
                type_name(&other)
            )))
        }
    };

    let items = items
        .into_iter()
        .map(map_item)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FlatList::new(kind, items))
}

/// Deserializes a payload that carries no envelope, or a flat record.
pub fn decode_plain<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(DecodeError::Record)
}

/// Decodes a fixed two-element array, mapping each element independently.
///
/// `/comments/{article}` and `/duplicates/{article}` answer with two
/// Listings side by side.
pub fn decode_pair<A, B, FA, FB>(value: Value, first: FA, second: FB) -> Result<(A, B), DecodeError>
where
    FA: FnOnce(Value) -> Result<A, DecodeError>,
    FB: FnOnce(Value) -> Result<B, DecodeError>,
{
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DecodeError::UnexpectedShape(format!(
                "expected a two-element array, found {}",
                type_name(&other)
            )))
        }
    };
    let [a, b]: [Value; 2] = items.try_into().map_err(|items: Vec<Value>| {
        DecodeError::UnexpectedShape(format!(
            "expected a two-element array, found {} elements",
            items.len()
        ))
    })?;
    Ok((first(a)?, second(b)?))
}

/// Decodes the `[friends, blocked]` pair of UserLists returned by
/// `/prefs/friends`.
///
/// The second list has always been empty; anything in it means the endpoint
/// changed upstream, so it is reported rather than dropped.
pub fn decode_friends<T: DeserializeOwned>(
    value: Value,
) -> Result<(FlatList<T>, FlatList<T>), DecodeError> {
    let (friends, blocked) = decode_pair(
        value,
        |v| decode_flat_list(v, Kind::UserList, decode_plain::<T>),
        |v| decode_flat_list(v, Kind::UserList, decode_plain::<T>),
    )?;
    if !blocked.is_empty() {
        return Err(DecodeError::BlockedListNotEmpty(blocked.len()));
    }
    Ok((friends, blocked))
}

/// One entry of the `{"json": {"errors": [...]}}` object Reddit answers
/// with when it refuses an action but still returns 2xx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Machine-readable code, e.g. `USER_DOESNT_EXIST`.
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
    /// The form field the error refers to, if any.
    pub field: Option<String>,
}

impl ApiError {
    fn from_entry(entry: &Value) -> ApiError {
        let part = |i: usize| entry.get(i).and_then(Value::as_str).map(str::to_owned);
        match entry {
            Value::Array(_) => ApiError {
                code: part(0).unwrap_or_default(),
                message: part(1).unwrap_or_default(),
                field: part(2).filter(|field| !field.is_empty()),
            },
            other => ApiError {
                code: other.to_string(),
                message: String::new(),
                field: None,
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " ({field})")?;
        }
        Ok(())
    }
}

/// Extracts the errors of a `{"json": {"errors": [...]}}` body.
///
/// Returns an empty vector for any other document, and for an empty
/// `errors` array.
///
/// ```
/// use redwire::envelope::api_errors;
/// use serde_json::json;
///
/// let body = json!({ "json": { "errors": [["USER_DOESNT_EXIST", "that user doesn't exist", "to"]] } });
/// let errors = api_errors(&body);
/// assert_eq!(errors[0].code, "USER_DOESNT_EXIST");
/// assert_eq!(errors[0].field.as_deref(), Some("to"));
///
/// assert!(api_errors(&json!({ "json": { "errors": [] } })).is_empty());
/// assert!(api_errors(&json!({})).is_empty());
/// ```
pub fn api_errors(value: &Value) -> Vec<ApiError> {
    value
        .get("json")
        .and_then(|json| json.get("errors"))
        .and_then(Value::as_array)
        .map(|errors| errors.iter().map(ApiError::from_entry).collect())
        .unwrap_or_default()
}

/// Builds a mapping function that accepts exactly one kind and deserializes
/// its payload into `T`.
pub fn of_kind<T: DeserializeOwned>(
    expected: Kind,
) -> impl Fn(Kind, Value) -> Result<T, DecodeError> {
    move |kind, data| {
        expect_kind(expected, kind)?;
        serde_json::from_value(data).map_err(|source| DecodeError::Payload { kind, source })
    }
}

fn expect_kind(expected: Kind, found: Kind) -> Result<(), DecodeError> {
    if expected == found {
        Ok(())
    } else {
        Err(DecodeError::UnexpectedKind { expected, found })
    }
}

fn optional_string(
    data: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match data.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(DecodeError::UnexpectedShape(format!(
            "`{field}` is {}, not a string",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
