//! The result of one interactive read cycle.

use std::collections::HashMap;
use std::fmt;

/// Discriminates the outcome of a [`crate::response::Response`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseType {
    /// A validated command; `params` is populated.
    Cmd,
    /// The raw line was handed to the OS shell unchanged.
    OsCmd,
    /// An application-overridden control byte was pressed.
    CtrlKey,
    /// A trailing `?` resolved a command and its help was printed.
    CmdHelp,
    /// The command name did not resolve.
    CmdError,
    /// A parameter failed validation, or the schema itself was invalid.
    ParamError,
    /// A terminal I/O failure (raw-mode switch, read) occurred.
    ExecutionError,
}

/// A validated parameter value.
///
/// Replaces the untyped `bool | integer | float | string` union with an
/// explicit tagged variant: the accessor pattern-matches instead of relying
/// on an "empty string means true" type-assertion convention.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A flag was present on the command line; the presence is the value.
    FlagPresent,
    Integer(i64),
    Float(f64),
    String(String),
}

impl ParamValue {
    pub fn as_bool(&self) -> bool {
        matches!(self, ParamValue::FlagPresent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::FlagPresent => write!(f, "true"),
            ParamValue::Integer(n) => write!(f, "{n}"),
            ParamValue::Float(n) => write!(f, "{n}"),
            ParamValue::String(s) => write!(f, "{s}"),
        }
    }
}

/// The structured result of one `Terminal::get` call.
#[derive(Clone, Debug)]
pub struct Response {
    pub command: String,
    pub params: HashMap<String, ParamValue>,
    pub raw_input: String,
    pub response_type: ResponseType,
    pub ctrl_key: u8,
    pub error: Option<String>,
}

impl Response {
    pub fn new(response_type: ResponseType) -> Self {
        Self {
            command: String::new(),
            params: HashMap::new(),
            raw_input: String::new(),
            response_type,
            ctrl_key: 0,
            error: None,
        }
    }

    /// Returns the stored value for `name`, `default` if absent.
    ///
    /// `ParamValue::FlagPresent` is surfaced to callers who expect a boolean
    /// "is this flag set?" answer; callers after the underlying value use
    /// `params.get` directly.
    pub fn get_param<'a>(&'a self, name: &str, default: &'a ParamValue) -> &'a ParamValue {
        self.params.get(name).unwrap_or(default)
    }

    pub fn with_raw_input(mut self, raw_input: impl Into<String>) -> Self {
        self.raw_input = raw_input.into();
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_ctrl_key(mut self, ctrl_key: u8) -> Self {
        self.ctrl_key = ctrl_key;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_param_falls_back_to_default() {
        let response = Response::new(ResponseType::Cmd);
        let default = ParamValue::String("fallback".into());
        assert_eq!(response.get_param("missing", &default), &default);
    }

    #[test]
    fn flag_present_is_truthy() {
        assert!(ParamValue::FlagPresent.as_bool());
        assert!(!ParamValue::String("x".into()).as_bool());
    }
}
