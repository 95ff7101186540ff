//! Command parameters, as passed positionally or by name.

use serde_json::{Map, Value};

use crate::errors::{RpcError, RpcResult};

/// Parameters of a single command invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Params {
    /// `[a, b, ...]`
    Positional(Vec<Value>),

    /// `{"name": a, ...}`
    Named(Map<String, Value>),
}

impl Params {
    /// Interprets the `params` member of a request.  A missing or `null`
    /// member is an empty positional list.
    pub fn from_value(value: Value) -> RpcResult<Self> {
        match value {
            Value::Null => Ok(Self::Positional(Vec::new())),
            Value::Array(arr) => Ok(Self::Positional(arr)),
            Value::Object(map) => Ok(Self::Named(map)),
            other => Err(RpcError::InvalidRequest(format!(
                "params must be an array or object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Number of parameters passed.
    pub fn len(&self) -> usize {
        match self {
            Self::Positional(v) => v.len(),
            Self::Named(m) => m.len(),
        }
    }

    /// Returns whether no parameters were passed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a parameter by its position or name, treating `null` as
    /// absent.
    pub fn get(&self, idx: usize, name: &str) -> Option<&Value> {
        let v = match self {
            Self::Positional(v) => v.get(idx),
            Self::Named(m) => m.get(name),
        };

        v.filter(|v| !v.is_null())
    }

    /// Checks that no named parameter falls outside `known`.
    pub fn check_names(&self, known: &[&str]) -> RpcResult<()> {
        if let Self::Named(m) = self {
            if let Some(unknown) = m.keys().find(|k| !known.contains(&k.as_str())) {
                return Err(RpcError::UnknownParam(unknown.clone()));
            }
        }

        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::Positional(Vec::new())
    }
}

/// Decodes a hex string parameter.
///
/// Like the node's other hex arguments, the string must be non-empty, of even
/// length and contain only hex digits.
pub fn parse_hex_param(param: &'static str, value: &Value) -> RpcResult<Vec<u8>> {
    let s = value.as_str().ok_or_else(|| RpcError::InvalidType {
        param,
        expected: "string",
        found: json_type_name(value),
    })?;

    if s.is_empty() {
        return Err(RpcError::InvalidInputEncoding {
            param,
            value: String::new(),
        });
    }

    hex::decode(s).map_err(|_| RpcError::InvalidInputEncoding {
        param,
        value: s.to_owned(),
    })
}

pub(crate) fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
