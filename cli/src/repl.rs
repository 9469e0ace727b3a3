//! Interactive line commands.

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Say(&'a str),
    History,
    Reset,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Input<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            return Self::Say(trimmed);
        };
        match command {
            "history" => Self::History,
            "reset" | "new" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other),
        }
    }
}

pub const HELP: &str = "\
Type a message and press Enter to chat.
  /history  show the server-side transcript
  /reset    start a new conversation
  /quit     exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(Input::parse("  Plan a week in Kyoto \n"), Input::Say("Plan a week in Kyoto"));
    }

    #[test]
    fn blank_line_is_an_empty_message() {
        assert_eq!(Input::parse("   "), Input::Say(""));
    }

    #[test]
    fn slash_commands_parse() {
        assert_eq!(Input::parse("/history"), Input::History);
        assert_eq!(Input::parse("/reset"), Input::Reset);
        assert_eq!(Input::parse("/new"), Input::Reset);
        assert_eq!(Input::parse(" /quit "), Input::Quit);
        assert_eq!(Input::parse("/?"), Input::Help);
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(Input::parse("/flights"), Input::Unknown("flights"));
    }
}
