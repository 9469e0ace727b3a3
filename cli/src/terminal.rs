//! ANSI terminal rendering for the chat controller.

use std::cell::RefCell;
use std::io::{self, Write};
use std::time::Duration;

use travel_chat::controller::{ChatSurface, Clock};
use travel_chat::reveal::{LineStyle, RevealLine};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const CLEAR_LINE: &str = "\r\x1b[K";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const TYPING: &str = "...";

/// Writes chat output to a terminal (or any writer in tests). Write errors are dropped.
pub struct TerminalSurface<W: Write> {
    out: RefCell<W>,
    ansi: bool,
    echo_user: bool,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout(echo_user: bool) -> Self {
        Self::new(io::stdout(), true, echo_user)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, ansi: bool, echo_user: bool) -> Self {
        Self { out: RefCell::new(out), ansi, echo_user }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

impl<W: Write> ChatSurface for TerminalSurface<W> {
    fn append_user_message(&self, text: &str) {
        if self.echo_user {
            self.write(&format!("> {text}\n"));
        }
    }

    fn begin_bot_message(&self) {}

    fn append_bot_line(&self, line: &RevealLine) {
        match line.style {
            LineStyle::Emphasized if self.ansi => self.write(&format!("{BOLD}{}{RESET}\n", line.text)),
            _ => self.write(&format!("{}\n", line.text)),
        }
    }

    fn show_typing_indicator(&self) {
        self.write(TYPING);
    }

    fn hide_typing_indicator(&self) {
        if self.ansi {
            self.write(CLEAR_LINE);
        } else {
            self.write("\r   \r");
        }
    }

    fn clear_input(&self) {}

    fn set_input_enabled(&self, _enabled: bool) {}

    fn clear_messages(&self) {
        if self.ansi {
            self.write(CLEAR_SCREEN);
        }
    }
}

/// [`Clock`] on the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

#[async_trait::async_trait(?Send)]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    fn line(text: &str, style: LineStyle) -> RevealLine {
        RevealLine { text: text.to_owned(), style }
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let surface = TerminalSurface::new(Vec::new(), false, false);
        surface.append_bot_line(&line("Day 1: Arrival", LineStyle::Emphasized));
        surface.append_bot_line(&line("Visit museum", LineStyle::Plain));
        assert_eq!(rendered(surface), "Day 1: Arrival\nVisit museum\n");
    }

    #[test]
    fn emphasized_line_is_bold_with_ansi() {
        let surface = TerminalSurface::new(Vec::new(), true, false);
        surface.append_bot_line(&line("Budget: $900", LineStyle::Emphasized));
        assert_eq!(rendered(surface), "\x1b[1mBudget: $900\x1b[0m\n");
    }

    #[test]
    fn typing_indicator_is_erased_in_place() {
        let surface = TerminalSurface::new(Vec::new(), true, false);
        surface.show_typing_indicator();
        surface.hide_typing_indicator();
        assert_eq!(rendered(surface), "...\r\x1b[K");
    }

    #[test]
    fn user_echo_is_optional() {
        let quiet = TerminalSurface::new(Vec::new(), false, false);
        quiet.append_user_message("hello");
        assert_eq!(rendered(quiet), "");

        let echoing = TerminalSurface::new(Vec::new(), false, true);
        echoing.append_user_message("hello");
        assert_eq!(rendered(echoing), "> hello\n");
    }
}
