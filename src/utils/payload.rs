use actix_web::{HttpMessage, HttpRequest};
use serde_json::{Map, Value};
use thiserror::Error;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("request body is not valid UTF-8")]
    NotUtf8,
    #[error("malformed form item {0:?}")]
    MalformedForm(String),
}

/// Raw request payload in one of the shapes a handler can hold.
pub enum RequestBody<'a> {
    Bytes(&'a [u8]),
    Mapping(Map<String, Value>),
    Text(&'a str),
}

/// Best-effort body decoding: JSON first, then pass-through for mappings, then
/// naive `key=value&key=value` for text. Form values are not URL-decoded.
pub fn parse_data(body: RequestBody<'_>) -> Result<Value, PayloadError> {
    match body {
        RequestBody::Mapping(map) => Ok(Value::Object(map)),
        RequestBody::Bytes(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|_| PayloadError::NotUtf8)?;
            parse_text(text)
        }
        RequestBody::Text(text) => parse_text(text),
    }
}

/// Picks how a handler's raw body should be read. Form-encoded requests are
/// percent-decoded up front and handed over as a mapping; anything else stays
/// raw bytes.
pub fn request_body<'a>(req: &HttpRequest, body: &'a [u8]) -> RequestBody<'a> {
    if req.content_type() == FORM_CONTENT_TYPE {
        RequestBody::Mapping(decode_form(body))
    } else {
        RequestBody::Bytes(body)
    }
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space, items without
/// `=` get an empty value, repeated keys keep the last value. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn decode_form(body: &[u8]) -> Map<String, Value> {
    let mut map = Map::new();
    for item in body.split(|b| *b == b'&').filter(|item| !item.is_empty()) {
        let (key, value) = match item.iter().position(|b| *b == b'=') {
            Some(idx) => (&item[..idx], &item[idx + 1..]),
            None => (item, &[][..]),
        };
        map.insert(decode_component(key), Value::String(decode_component(value)));
    }
    map
}

fn decode_component(raw: &[u8]) -> String {
    let spaced: Vec<u8> = raw.iter().map(|b| if *b == b'+' { b' ' } else { *b }).collect();
    String::from_utf8_lossy(&urlencoding::decode_binary(&spaced)).into_owned()
}

fn parse_text(text: &str) -> Result<Value, PayloadError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }
    parse_form(text)
}

fn parse_form(text: &str) -> Result<Value, PayloadError> {
    let mut map = Map::new();
    for item in text.split('&') {
        let mut parts = item.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                map.insert(key.to_string(), Value::String(value.to_string()));
            }
            _ => return Err(PayloadError::MalformedForm(item.to_string())),
        }
    }
    Ok(Value::Object(map))
}
