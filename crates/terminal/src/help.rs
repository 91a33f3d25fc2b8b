//! Deterministic help-text formatting over a resolved command. Grounded on
//! `terminal_help.go`.
//!
//! Resolves an ambiguity in the original: it brackets the default-param
//! usage token when the default param is *required* and omits brackets
//! when optional — the reverse of spec.md's documented semantics
//! ("square brackets indicating optionality of the default"). This follows
//! the documented semantics: brackets mark the optional case.

use termline_types::schema::sort_params;
use termline_types::{Command, Param};

use crate::state::Terminal;

impl Terminal {
    pub fn print_help(&self, command: &Command) {
        print!("{}", render_help(command));
    }
}

/// Builds the full help text for `command`: usage line, description,
/// default-param note, then FLAGS/PARAMS sections. Pulled out of
/// `Terminal::print_help` so the formatting itself is testable without a TTY.
fn render_help(command: &Command) -> String {
    let mut params = command.params.clone();
    sort_params(&mut params);

    let mut out = String::new();

    if !command.description.is_empty() {
        out.push_str(&format!("\n{}\n", command.description));
    }

    let mut flags: Vec<&Param> = Vec::new();
    let mut typed: Vec<&Param> = Vec::new();
    let mut default_param: Option<&Param> = None;
    for param in &params {
        if param.is_default() {
            default_param = Some(param);
        } else if param.is_flag() {
            flags.push(param);
        } else {
            typed.push(param);
        }
    }

    let mut usage = format!("\nUsage: {}", command.name);
    if !flags.is_empty() {
        usage.push_str(" [FLAGS]");
    }
    if !typed.is_empty() {
        usage.push_str(" [PARAMS]");
    }
    if let Some(default_param) = default_param {
        let type_name = default_param.param_type.display_name();
        if default_param.is_required() {
            usage.push_str(&format!(" <{type_name}>"));
        } else {
            usage.push_str(&format!(" [<{type_name}>]"));
        }
    }
    out.push_str(&usage);
    out.push('\n');

    if let Some(default_param) = default_param {
        if !default_param.description.is_empty() {
            out.push_str(&format!("\nDEFAULT PARAM: {}\n", default_param.description));
        }
    }

    if !flags.is_empty() {
        out.push_str("\nFLAGS:\n");
        for param in &flags {
            out.push_str(&format!("  {}: ({}) {}\n", param.name, requirement(param), param.description));
        }
    }

    if !typed.is_empty() {
        out.push_str("\nPARAMS:\n");
        for param in &typed {
            out.push_str(&format!(
                "  {} <{}>: ({}) {}\n",
                param.name,
                param.param_type.display_name(),
                requirement(param),
                param.description
            ));
        }
    }

    out.push('\n');
    out
}

fn requirement(param: &Param) -> &'static str {
    if param.is_required() { "REQUIRED" } else { "OPTIONAL" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termline_types::{ParamModifier, ParamType};

    #[test]
    fn usage_line_brackets_optional_default_param() {
        let optional = Command::new("ping")
            .with_description("Ping a host")
            .with_param(Param::new("host", ParamType::Text).with_modifier(ParamModifier::DEFAULT));
        let rendered = render_help(&optional);
        assert!(rendered.contains("Usage: ping [<Text>]"));
    }

    #[test]
    fn usage_line_omits_brackets_for_required_default_param() {
        let required = Command::new("ping").with_param(
            Param::new("host", ParamType::Text).with_modifier(ParamModifier::DEFAULT | ParamModifier::REQUIRED),
        );
        let rendered = render_help(&required);
        assert!(rendered.contains("Usage: ping <Text>"));
        assert!(!rendered.contains("[<Text>]"));
    }

    #[test]
    fn flags_and_params_are_partitioned_from_default() {
        let command = Command::new("ping")
            .with_param(Param::new("-v", ParamType::None))
            .with_param(Param::new("-c", ParamType::Number).with_modifier(ParamModifier::REQUIRED))
            .with_param(Param::new("host", ParamType::Text).with_modifier(ParamModifier::DEFAULT));
        let rendered = render_help(&command);
        assert!(rendered.contains("Usage: ping [FLAGS] [PARAMS] [<Text>]"));
        assert!(rendered.contains("FLAGS:\n  -v: (OPTIONAL)"));
        assert!(rendered.contains("PARAMS:\n  -c <Number>: (REQUIRED)"));
    }

    #[test]
    fn requirement_label_matches_modifier() {
        let req = Param::new("x", ParamType::Text).with_modifier(ParamModifier::REQUIRED);
        let opt = Param::new("y", ParamType::Text);
        assert_eq!(requirement(&req), "REQUIRED");
        assert_eq!(requirement(&opt), "OPTIONAL");
    }
}
