//! REPL command parsing.
//!
//! Commands are slash-prefixed. Free text is only meaningful on the chat
//! screen, where it is sent as a message.

use std::path::PathBuf;

use omycook_core::catalog::TimeWindow;
use omycook_core::ingredient::{Category, CategoryFilter};
use omycook_core::navigation::Screen;
use omycook_core::profile::{Allergy, CookingLevel, CookingTime, KitchenTool};
use omycook_core::{OmycookError, Result};

/// Every command name, for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/help", "/quit", "/show", "/status", "/home", "/go", "/open", "/email", "/password", "/name",
    "/toggle", "/submit", "/level", "/allergy", "/spicy", "/time", "/tool", "/next", "/back",
    "/add", "/remove", "/search", "/tab", "/view", "/close", "/ask", "/window", "/suggest",
    "/send", "/upload", "/confirm", "/drop", "/save", "/retake",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Show,
    Status,
    Go(Screen),
    /// Home feature card, 1-based.
    Open(usize),

    Email(String),
    Password(String),
    Name(String),
    ToggleMode,
    Submit,

    Level(CookingLevel),
    Allergy(Allergy),
    Spicy(u8),
    Time(CookingTime),
    Tool(KitchenTool),
    Next,
    Back,

    Add {
        name: String,
        category: Category,
        quantity: Option<String>,
    },
    /// Visible row, 1-based.
    Remove(usize),
    Search(String),
    Tab(CategoryFilter),

    View(String),
    Close,
    Ask,
    Window(TimeWindow),

    Say(String),
    Suggest(usize),
    Send,

    Upload(PathBuf),
    Confirm(usize),
    Drop(usize),
    Save,
    Retake,
}

impl Command {
    /// Parses one input line as seen on `screen`.
    pub fn parse(line: &str, screen: Screen) -> Result<Self> {
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            return Ok(Self::Quit);
        }
        let Some(body) = line.strip_prefix('/') else {
            if screen == Screen::Chat {
                return Ok(Self::Say(line.to_string()));
            }
            return Err(OmycookError::invalid_input(
                "commands start with '/'; type /help for a list",
            ));
        };

        let (name, rest) = match body.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (body, ""),
        };

        let command = match name {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "show" => Self::Show,
            "status" => Self::Status,
            "home" => Self::Go(Screen::Home),
            "go" => Self::Go(Screen::parse_or_home(required(rest, "/go <screen>")?)),
            "open" => Self::Open(index(rest, "/open <card number>")?),

            "email" => Self::Email(required(rest, "/email <address>")?.to_string()),
            "password" => Self::Password(required(rest, "/password <password>")?.to_string()),
            "name" => Self::Name(required(rest, "/name <name>")?.to_string()),
            "toggle" => Self::ToggleMode,
            "submit" => Self::Submit,

            "level" => Self::Level(vocabulary(rest, "/level <beginner|intermediate|advanced>")?),
            "allergy" => Self::Allergy(vocabulary(rest, "/allergy <allergen>")?),
            "spicy" => Self::Spicy(
                required(rest, "/spicy <1-5>")?
                    .parse()
                    .map_err(|_| usage("/spicy <1-5>"))?,
            ),
            "time" => Self::Time(vocabulary(rest, "/time <10|30|60>")?),
            "tool" => Self::Tool(vocabulary(rest, "/tool <kitchen tool>")?),
            "next" => Self::Next,
            "back" => Self::Back,

            "add" => parse_add(rest)?,
            "remove" | "rm" => Self::Remove(index(rest, "/remove <row>")?),
            "search" => Self::Search(rest.to_string()),
            "tab" => Self::Tab(required(rest, "/tab <category|all>")?.parse()?),

            "view" => Self::View(required(rest, "/view <id>")?.to_string()),
            "close" => Self::Close,
            "ask" => Self::Ask,
            "window" => Self::Window(required(rest, "/window <day|week|month>")?.parse()?),

            "suggest" => Self::Suggest(index(rest, "/suggest <number>")?),
            "send" => Self::Send,

            "upload" => Self::Upload(PathBuf::from(required(rest, "/upload <path>")?)),
            "confirm" => Self::Confirm(index(rest, "/confirm <row>")?),
            "drop" => Self::Drop(index(rest, "/drop <row>")?),
            "save" => Self::Save,
            "retake" => Self::Retake,

            other => {
                return Err(OmycookError::invalid_input(format!(
                    "unknown command '/{}'; type /help for a list",
                    other
                )));
            }
        };
        Ok(command)
    }
}

fn usage(text: &str) -> OmycookError {
    OmycookError::invalid_input(format!("usage: {}", text))
}

fn required<'a>(rest: &'a str, usage_text: &str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(usage(usage_text))
    } else {
        Ok(rest)
    }
}

/// A 1-based row or card number.
fn index(rest: &str, usage_text: &str) -> Result<usize> {
    match required(rest, usage_text)?.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(usage(usage_text)),
    }
}

fn vocabulary<T: std::str::FromStr>(rest: &str, usage_text: &str) -> Result<T> {
    required(rest, usage_text)?
        .parse()
        .map_err(|_| usage(usage_text))
}

/// `/add <name> <category> [quantity]`; the name may not contain spaces.
fn parse_add(rest: &str) -> Result<Command> {
    const USAGE: &str = "/add <name> <category> [quantity]";
    let mut parts = rest.split_whitespace();
    let name = parts.next().ok_or_else(|| usage(USAGE))?;
    let category = parts
        .next()
        .ok_or_else(|| usage(USAGE))?
        .parse::<Category>()
        .map_err(|_| usage(USAGE))?;
    let quantity = parts.collect::<Vec<_>>().join(" ");

    Ok(Command::Add {
        name: name.to_string(),
        category,
        quantity: (!quantity.is_empty()).then_some(quantity),
    })
}
