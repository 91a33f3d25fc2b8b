//! Parses a raw input line against a command schema, producing a validated
//! command and a typed parameter map.
//!
//! Grounded on `internal/core/param_validator.go` in the `gocli` original:
//! the token walk, the default-parameter fallback, and the per-type regexes
//! all follow that shape. The schema here is `termline_types::schema`'s
//! `Command`/`Param`, not the original's separate `Candidate`/
//! `CandidateOption` types.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use termline_matcher::best_match;
use termline_types::{Command, Param, ParamType, ParamValue};

/// Every way `validate_command`/`validate_params` can fail.
///
/// [`ValidationError::InvalidCommand`] is the only variant that should
/// surface as `ResponseType::CmdError`; everything else is a `ParamError`.
/// See [`ValidationError::is_command_error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty command")]
    EmptyCommand,
    #[error("invalid command")]
    InvalidCommand,
    #[error("parameters not supported")]
    ParametersNotSupported,
    #[error("cannot exist more than one default param")]
    MultipleDefaultParams,
    #[error("missing value")]
    MissingValue,
    #[error("invalid parameter {0}")]
    InvalidParameter(String),
    #[error("parameter {name} must be a {type_name}")]
    TypeMismatch { name: String, type_name: &'static str },
    #[error("default parameter {0} is required")]
    DefaultParamRequired(&'static str),
    #[error("parameter {0} is required")]
    ParamRequired(String),
}

impl ValidationError {
    /// True for the one failure that means "no such command" rather than a
    /// schema or argument problem — the caller maps this to
    /// `ResponseType::CmdError`, everything else to `ResponseType::ParamError`.
    pub fn is_command_error(&self) -> bool {
        matches!(self, ValidationError::InvalidCommand)
    }
}

/// Resolves `head` against `commands` by full name, the way command
/// resolution (§4.3 step 2) and the `?` help path both need: ask the prefix
/// matcher, then require the matched string to equal some command's name
/// exactly (a partial/LCP match is never a resolution).
pub fn resolve_command<'a>(commands: &'a [Command], head: &str) -> Option<&'a Command> {
    let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
    let (matched, _resolved) = best_match(head, &names);
    commands.iter().find(|c| c.name == matched)
}

/// Parses `raw_line` against `commands`, returning the resolved command
/// (cloned, so callers aren't tied to the schema's lifetime across a
/// render cycle) and its typed parameter map.
pub fn validate_command(
    commands: &[Command],
    raw_line: &str,
) -> Result<(Command, HashMap<String, ParamValue>), ValidationError> {
    let tokens: Vec<&str> = raw_line.split_whitespace().collect();
    let head = tokens.first().ok_or(ValidationError::EmptyCommand)?;

    let command = resolve_command(commands, head).ok_or(ValidationError::InvalidCommand)?;

    if tokens.len() == 1 {
        check_required(command, &HashMap::new())?;
        return Ok((command.clone(), HashMap::new()));
    }

    if command.params.is_empty() {
        return Err(ValidationError::ParametersNotSupported);
    }

    let params = validate_params(command, &tokens[1..])?;
    Ok((command.clone(), params))
}

/// Walks `args` against `command`'s schema: named parameters (including
/// flags) by exact name match, any other token against the single default
/// parameter if one is unused and exists.
pub fn validate_params(command: &Command, args: &[&str]) -> Result<HashMap<String, ParamValue>, ValidationError> {
    if command.default_param_count() > 1 {
        return Err(ValidationError::MultipleDefaultParams);
    }
    let default_param = command.default_param();

    let mut params = HashMap::new();
    let mut used_default = default_param.is_none();
    let mut i = 0;
    while i < args.len() {
        let token = args[i];

        if let Some(param) = named_param(command, token) {
            if param.is_flag() {
                params.insert(param.name.clone(), ParamValue::FlagPresent);
                i += 1;
            } else {
                let value = args.get(i + 1).ok_or(ValidationError::MissingValue)?;
                let coerced = coerce(param, value)?;
                params.insert(param.name.clone(), coerced);
                i += 2;
            }
            continue;
        }

        if !used_default {
            let default_param = default_param.expect("used_default is false only when a default param exists");
            let coerced = coerce(default_param, token)?;
            params.insert(default_param.name.clone(), coerced);
            used_default = true;
            i += 1;
            continue;
        }

        return Err(ValidationError::InvalidParameter(token.to_string()));
    }

    check_required(command, &params)?;
    Ok(params)
}

/// Named-parameter lookup excludes the default parameter: a bare positional
/// token is never resolved by comparing it against the default param's own
/// name, matching the original's separate `Options`/`DefaultOptionType`
/// fields for the same schema.
fn named_param<'a>(command: &'a Command, token: &str) -> Option<&'a Param> {
    command.params.iter().find(|p| !p.is_default() && p.name == token)
}

fn check_required(command: &Command, params: &HashMap<String, ParamValue>) -> Result<(), ValidationError> {
    for param in &command.params {
        if param.is_required() && !params.contains_key(&param.name) {
            if param.is_default() {
                return Err(ValidationError::DefaultParamRequired(param.param_type.display_name()));
            }
            return Err(ValidationError::ParamRequired(param.name.clone()));
        }
    }
    Ok(())
}

fn coerce(param: &Param, token: &str) -> Result<ParamValue, ValidationError> {
    let mismatch = || ValidationError::TypeMismatch {
        name: param.name.clone(),
        type_name: param.param_type.display_name(),
    };

    match param.param_type {
        ParamType::None => Ok(ParamValue::FlagPresent),
        ParamType::Text => {
            if token.is_empty() {
                Err(mismatch())
            } else {
                Ok(ParamValue::String(token.to_string()))
            }
        }
        ParamType::Number => token.parse::<i64>().map(ParamValue::Integer).map_err(|_| mismatch()),
        ParamType::FloatNumber => token.parse::<f64>().map(ParamValue::Float).map_err(|_| mismatch()),
        ParamType::Date => regex_match(&DATE_RE, token, mismatch),
        ParamType::Time => regex_match(&TIME_RE, token, mismatch),
        ParamType::Email => regex_match(&EMAIL_RE, token, mismatch),
        ParamType::Domain => regex_match(&DOMAIN_RE, token, mismatch),
        ParamType::Phone => regex_match(&PHONE_RE, token, mismatch),
        ParamType::Ipv4 => regex_match(&IPV4_RE, token, mismatch),
        ParamType::Ipv6 => regex_match(&IPV6_RE, token, mismatch),
        ParamType::Url => regex_match(&URL_RE, token, mismatch),
        ParamType::Uuid => regex_match(&UUID_RE, token, mismatch),
    }
}

fn regex_match(
    re: &Lazy<Regex>,
    token: &str,
    mismatch: impl FnOnce() -> ValidationError,
) -> Result<ParamValue, ValidationError> {
    if re.is_match(token) {
        Ok(ParamValue::String(token.to_string()))
    } else {
        Err(mismatch())
    }
}

// One compiled-once regex per syntactic `ParamType`, amortizing compilation
// the way a `regex`-using crate in this corpus does rather than recompiling
// per call as the original Go source does via `regexp.MustCompile`.
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());
// Syntactic only, matching the original: 999.999.999.999 passes. Range
// checking is an application-side concern (spec.md §9 open question).
static IPV4_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").unwrap());
static IPV6_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}").unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:[a-zA-Z]|[0-9]|[$\-_@.&+]|[!*(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+$").unwrap()
});
static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89ab][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$").unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;
    use termline_types::ParamModifier;

    fn ping_command() -> Command {
        Command::new("ping")
            .with_param(Param::new("-c", ParamType::Number))
            .with_param(
                Param::new("host", ParamType::Text)
                    .with_modifier(ParamModifier::DEFAULT | ParamModifier::REQUIRED),
            )
    }

    #[test]
    fn scenario_two_named_and_default_param() {
        let commands = vec![ping_command()];
        let (command, params) = validate_command(&commands, "ping -c 3 example.com").unwrap();
        assert_eq!(command.name, "ping");
        assert_eq!(params.get("-c"), Some(&ParamValue::Integer(3)));
        assert_eq!(params.get("host"), Some(&ParamValue::String("example.com".to_string())));
    }

    #[test]
    fn scenario_three_missing_value() {
        let commands = vec![ping_command()];
        let err = validate_command(&commands, "ping -c").unwrap_err();
        assert_eq!(err, ValidationError::MissingValue);
    }

    #[test]
    fn scenario_four_default_param_only() {
        let commands = vec![ping_command()];
        let (_, params) = validate_command(&commands, "ping example.com").unwrap();
        assert_eq!(params.get("host"), Some(&ParamValue::String("example.com".to_string())));
    }

    #[test]
    fn scenario_five_missing_required_default() {
        let commands = vec![ping_command()];
        let err = validate_command(&commands, "ping").unwrap_err();
        assert_eq!(err, ValidationError::DefaultParamRequired("Text"));
    }

    #[test]
    fn empty_line_is_param_error() {
        let commands = vec![ping_command()];
        let err = validate_command(&commands, "   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyCommand);
        assert!(!err.is_command_error());
    }

    #[test]
    fn unresolved_command_is_cmd_error() {
        let commands = vec![ping_command()];
        let err = validate_command(&commands, "pong").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCommand);
        assert!(err.is_command_error());
    }

    #[test]
    fn unknown_flag_falls_through_to_invalid_parameter() {
        let commands = vec![ping_command()];
        let err = validate_command(&commands, "ping example.com --bogus").unwrap_err();
        assert_eq!(err, ValidationError::InvalidParameter("--bogus".to_string()));
    }

    #[test]
    fn no_params_command_rejects_any_argument() {
        let commands = vec![Command::new("exit")];
        let err = validate_command(&commands, "exit now").unwrap_err();
        assert_eq!(err, ValidationError::ParametersNotSupported);
    }

    #[test]
    fn command_with_no_params_and_no_args_succeeds() {
        let commands = vec![Command::new("exit")];
        let (command, params) = validate_command(&commands, "exit").unwrap();
        assert_eq!(command.name, "exit");
        assert!(params.is_empty());
    }

    #[test]
    fn number_type_rejects_trailing_garbage() {
        let commands = vec![ping_command()];
        let err = validate_command(&commands, "ping -c 123abc example.com").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch { name: "-c".to_string(), type_name: "Number" }
        );
    }

    #[test]
    fn flag_param_consumes_no_value_token() {
        let verbose = Param::new("-v", ParamType::None);
        let commands = vec![
            Command::new("run")
                .with_param(verbose)
                .with_param(Param::new("target", ParamType::Text).with_modifier(ParamModifier::DEFAULT)),
        ];
        let (_, params) = validate_command(&commands, "run -v build").unwrap();
        assert_eq!(params.get("-v"), Some(&ParamValue::FlagPresent));
        assert_eq!(params.get("target"), Some(&ParamValue::String("build".to_string())));
    }

    #[test]
    fn duplicate_default_params_is_schema_error() {
        let commands = vec![
            Command::new("bad")
                .with_param(Param::new("a", ParamType::Text).with_modifier(ParamModifier::DEFAULT))
                .with_param(Param::new("b", ParamType::Text).with_modifier(ParamModifier::DEFAULT)),
        ];
        let err = validate_command(&commands, "bad x").unwrap_err();
        assert_eq!(err, ValidationError::MultipleDefaultParams);
    }

    #[test]
    fn ipv4_is_syntactic_only() {
        let commands = vec![
            Command::new("ping6").with_param(Param::new("addr", ParamType::Ipv4).with_modifier(ParamModifier::DEFAULT)),
        ];
        // Out-of-range octets still match; range-checking is application-side.
        assert!(validate_command(&commands, "ping6 999.999.999.999").is_ok());
    }

    #[test]
    fn uuid_requires_v4_shape() {
        let commands = vec![
            Command::new("get").with_param(Param::new("id", ParamType::Uuid).with_modifier(ParamModifier::DEFAULT)),
        ];
        assert!(validate_command(&commands, "get 123e4567-e89b-12d3-a456-426614174000").is_err());
        assert!(validate_command(&commands, "get 123e4567-e89b-42d3-a456-426614174000").is_ok());
    }
}
