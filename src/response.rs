//! Uniform JSON envelope returned by every endpoint.

use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome codes carried in the envelope's `code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ResponseCode {
    Success = 200,
    Error = 500,
    InvalidParams = 400,
    ErrorExistTag = 10001,
    ErrorNotExistTag = 10002,
}

impl ResponseCode {
    pub const ALL: [ResponseCode; 5] = [
        ResponseCode::Success,
        ResponseCode::Error,
        ResponseCode::InvalidParams,
        ResponseCode::ErrorExistTag,
        ResponseCode::ErrorNotExistTag,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn message(self) -> &'static str {
        match self {
            ResponseCode::Success => "ok",
            ResponseCode::Error => "fail",
            ResponseCode::InvalidParams => "invalid request parameters",
            ResponseCode::ErrorExistTag => "tag name already exists",
            ResponseCode::ErrorNotExistTag => "tag does not exist",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.code() == code)
    }
}

/// Message for an arbitrary numeric code.
pub fn message_for(code: i32) -> &'static str {
    ResponseCode::from_code(code).map_or("unknown error", ResponseCode::message)
}

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: i32,
    pub msg: &'static str,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(code: ResponseCode, data: T) -> Self {
        Self {
            code: code.code(),
            msg: code.message(),
            data,
        }
    }
}

impl Envelope<Value> {
    /// Envelope whose `data` is an empty object.
    pub fn empty(code: ResponseCode) -> Self {
        Self::new(code, Value::Object(Map::new()))
    }
}
