//! rustyline helper: command completion, hints and highlighting.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use omycook_core::navigation::Screen;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use crate::command::COMMANDS;

#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    screens: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            screens: Screen::iter().map(|s| s.id().to_string()).collect(),
        }
    }

    fn candidates<'a>(&'a self, line: &str) -> (usize, Vec<&'a String>) {
        if let Some(partial) = line.strip_prefix("/go ") {
            let matches = self
                .screens
                .iter()
                .filter(|s| s.starts_with(partial))
                .collect();
            return ("/go ".len(), matches);
        }
        if line.starts_with('/') && !line.contains(' ') {
            let matches = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .collect();
            return (0, matches);
        }
        (0, Vec::new())
    }
}

impl Default for CliHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        let (start, matches) = self.candidates(line);
        let typed = &line[start..];
        matches
            .into_iter()
            .find(|candidate| candidate.len() > typed.len())
            .map(|candidate| candidate[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_candidates() {
        let helper = CliHelper::new();
        let (start, matches) = helper.candidates("/sa");
        assert_eq!(start, 0);
        assert_eq!(matches, vec!["/save"]);
    }

    #[test]
    fn test_screen_candidates_after_go() {
        let helper = CliHelper::new();
        let (start, matches) = helper.candidates("/go re");
        assert_eq!(start, 4);
        assert_eq!(matches, vec!["recipes", "receipt-scan"]);
    }

    #[test]
    fn test_no_candidates_for_text() {
        let helper = CliHelper::new();
        assert!(helper.candidates("안녕").1.is_empty());
    }
}
