//! Command schema value types and the small helpers built directly on top of them.

use bitflags::bitflags;

bitflags! {
    /// Modifiers carried by a [`Param`].
    ///
    /// At most one parameter per [`Command`] may carry [`ParamModifier::DEFAULT`];
    /// that invariant is enforced by the validator at validation time, not here.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ParamModifier: u8 {
        /// The parameter receives a bare positional token when no named parameter matches.
        const DEFAULT = 0b01;
        /// The parameter must be present after a successful parse.
        const REQUIRED = 0b10;
    }
}

/// The type a parameter's value is validated and coerced against.
///
/// `None` denotes a boolean flag: its presence is the value, so it never
/// consumes a following token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    None,
    Text,
    Number,
    FloatNumber,
    Date,
    Time,
    Email,
    Domain,
    Phone,
    Ipv4,
    Ipv6,
    Url,
    Uuid,
}

impl ParamType {
    /// Human-readable type name used by the help formatter (`<Text>`, `<Number>`, ...).
    pub fn display_name(self) -> &'static str {
        match self {
            ParamType::None => "Flag",
            ParamType::Text => "Text",
            ParamType::Number => "Number",
            ParamType::FloatNumber => "FloatNumber",
            ParamType::Date => "Date",
            ParamType::Time => "Time",
            ParamType::Email => "Email",
            ParamType::Domain => "Domain",
            ParamType::Phone => "Phone",
            ParamType::Ipv4 => "Ipv4",
            ParamType::Ipv6 => "Ipv6",
            ParamType::Url => "Url",
            ParamType::Uuid => "UUID",
        }
    }
}

/// A single named parameter of a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub description: String,
    pub modifier: ParamModifier,
    pub param_type: ParamType,
}

impl Param {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            modifier: ParamModifier::empty(),
            param_type,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_modifier(mut self, modifier: ParamModifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn is_default(&self) -> bool {
        self.modifier.contains(ParamModifier::DEFAULT)
    }

    pub fn is_required(&self) -> bool {
        self.modifier.contains(ParamModifier::REQUIRED)
    }

    pub fn is_flag(&self) -> bool {
        self.param_type == ParamType::None
    }
}

/// A command an embedding application wants the prompt to recognize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub hidden: bool,
    pub params: Vec<Param>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            hidden: false,
            params: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// The single parameter carrying [`ParamModifier::DEFAULT`], if any.
    pub fn default_param(&self) -> Option<&Param> {
        self.params.iter().find(|p| p.is_default())
    }

    /// Number of parameters carrying [`ParamModifier::DEFAULT`] (schema errors have more than one).
    pub fn default_param_count(&self) -> usize {
        self.params.iter().filter(|p| p.is_default()).count()
    }

    pub fn find_param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Stable-enough ascending sort by command name, matching the ordering the
/// help formatter and the autocomplete suggestion list both rely on.
pub fn sort_commands(commands: &mut [Command]) {
    commands.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Same as [`sort_commands`] but for a command's parameter list.
pub fn sort_params(params: &mut [Param]) {
    params.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Ordered sequence of command names, preserving input order (no sort applied).
pub fn project_names(commands: &[Command]) -> Vec<&str> {
    commands.iter().map(|c| c.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_param_count_detects_duplicates() {
        let cmd = Command::new("ping")
            .with_param(Param::new("host", ParamType::Text).with_modifier(ParamModifier::DEFAULT))
            .with_param(Param::new("target", ParamType::Text).with_modifier(ParamModifier::DEFAULT));
        assert_eq!(cmd.default_param_count(), 2);
    }

    #[test]
    fn sort_commands_is_ascending_by_name() {
        let mut commands = vec![Command::new("zeta"), Command::new("alpha"), Command::new("mid")];
        sort_commands(&mut commands);
        assert_eq!(project_names(&commands), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn is_flag_matches_none_type_only() {
        let flag = Param::new("-v", ParamType::None);
        let text = Param::new("host", ParamType::Text);
        assert!(flag.is_flag());
        assert!(!text.is_flag());
    }
}
