//! Style configuration: a bag of ANSI strings the application may override.
//!
//! None of this crate's other modules interpret these strings beyond writing
//! them to the terminal; picking defaults that look good is the embedding
//! application's concern, and these are merely a reasonable starting point.

/// Cursor shape selected via DECSCUSR (`ESC[<n> q`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Bar,
    Underline,
}

impl CursorShape {
    pub fn escape(self) -> &'static str {
        match self {
            CursorShape::Block => "\x1b[2 q",
            CursorShape::Bar => "\x1b[6 q",
            CursorShape::Underline => "\x1b[4 q",
        }
    }
}

/// ANSI foreground/background color knobs plus the help-text palette.
#[derive(Clone, Debug)]
pub struct Styles {
    pub prompt: String,
    pub prompt_color: String,
    pub foreground: String,
    pub background: String,
    pub suggestion_foreground: String,
    pub selection_foreground: String,
    pub selection_background: String,
    pub help_text_color: String,
    pub help_title_color: String,
    pub help_command_color: String,
    pub help_params_color: String,
    pub help_required_color: String,
    pub help_frame_color: String,
    pub cursor: CursorShape,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            prompt: "termline> ".to_string(),
            prompt_color: "\x1b[34m".to_string(),    // blue
            foreground: "\x1b[37m".to_string(),       // white
            background: String::new(),                // transparent
            suggestion_foreground: "\x1b[90m".to_string(), // light gray
            selection_foreground: "\x1b[30m".to_string(),  // black
            selection_background: "\x1b[48;5;153m".to_string(), // light blue
            help_text_color: "\x1b[90m".to_string(),
            help_title_color: "\x1b[34m".to_string(),
            help_command_color: "\x1b[37m".to_string(),
            help_params_color: "\x1b[33m".to_string(),
            help_required_color: "\x1b[31m".to_string(),
            help_frame_color: "\x1b[34m".to_string(),
            cursor: CursorShape::Block,
        }
    }
}

pub const RESET: &str = "\x1b[0m";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cursor_is_block() {
        assert_eq!(Styles::default().cursor.escape(), "\x1b[2 q");
    }
}
