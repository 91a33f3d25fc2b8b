//! Black-box exercise of spec.md §8's literal end-to-end scenarios 2-6,
//! against the public `termline_validator` API only.

use termline_types::{Command, Param, ParamModifier, ParamType, ParamValue};
use termline_validator::{validate_command, ValidationError};

fn ping_command() -> Command {
    Command::new("ping")
        .with_param(Param::new("-c", ParamType::Number))
        .with_param(
            Param::new("host", ParamType::Text).with_modifier(ParamModifier::DEFAULT | ParamModifier::REQUIRED),
        )
}

#[test]
fn scenario_two_named_flag_value_and_default_param_together() {
    let commands = vec![ping_command()];
    let (command, params) = validate_command(&commands, "ping -c 3 example.com").unwrap();
    assert_eq!(command.name, "ping");
    assert_eq!(params.get("-c"), Some(&ParamValue::Integer(3)));
    assert_eq!(params.get("host"), Some(&ParamValue::String("example.com".to_string())));
}

#[test]
fn scenario_three_flag_without_a_following_value_is_an_error() {
    let commands = vec![ping_command()];
    let err = validate_command(&commands, "ping -c").unwrap_err();
    assert_eq!(err, ValidationError::MissingValue);
}

#[test]
fn scenario_four_bare_default_param_resolves_alone() {
    let commands = vec![ping_command()];
    let (_, params) = validate_command(&commands, "ping example.com").unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("host"), Some(&ParamValue::String("example.com".to_string())));
}

#[test]
fn scenario_five_missing_required_default_param_is_an_error() {
    let commands = vec![ping_command()];
    let err = validate_command(&commands, "ping").unwrap_err();
    assert_eq!(err, ValidationError::DefaultParamRequired("Text"));
}
