//! Line-by-line reveal of an assistant reply.
//!
//! DESIGN
//! ======
//! [`LineReveal`] is a lazy iterator over the reply text. Each
//! [`RevealStep`] carries the wait that precedes it, so the driver is a
//! single loop of "sleep, then render" with no nested timers. Blank lines are
//! never emitted but still cost `blank_line_ms` each. The iterator borrows
//! the text and is `Clone`, so a reveal can be restarted at any point.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::time::Duration;

use crate::config::RevealPacing;

/// How a revealed line is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    /// Section headers such as "Day 2" or "Budget: ...".
    Emphasized,
}

/// One trimmed, non-empty line of a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealLine {
    pub text: String,
    pub style: LineStyle,
}

/// A line plus how long to wait before rendering it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub wait: Duration,
    pub line: RevealLine,
}

/// Lazy sequence of reveal steps over a reply.
#[derive(Clone, Debug)]
pub struct LineReveal<'a> {
    lines: std::str::Split<'a, char>,
    pacing: RevealPacing,
    keywords: &'a [String],
    pending: Duration,
}

impl<'a> LineReveal<'a> {
    pub fn new(text: &'a str, pacing: RevealPacing, keywords: &'a [String]) -> Self {
        Self { lines: text.split('\n'), pacing, keywords, pending: Duration::ZERO }
    }
}

impl Iterator for LineReveal<'_> {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        for raw in self.lines.by_ref() {
            let text = raw.trim();
            if text.is_empty() {
                self.pending += self.pacing.blank_line();
                continue;
            }
            let wait = std::mem::replace(&mut self.pending, self.pacing.delay_after(text));
            let style = classify(text, self.keywords);
            return Some(RevealStep { wait, line: RevealLine { text: text.to_owned(), style } });
        }
        None
    }
}

/// Header lines start with a known keyword or contain a colon.
pub fn classify(line: &str, keywords: &[String]) -> LineStyle {
    if line.contains(':') || keywords.iter().any(|k| line.starts_with(k.as_str())) {
        LineStyle::Emphasized
    } else {
        LineStyle::Plain
    }
}
