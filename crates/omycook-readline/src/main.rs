mod command;
mod config;
mod handler;
mod helper;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::mpsc::UnboundedReceiver;

use omycook_application::{AppEvent, OmycookApp};
use omycook_core::home::APP_TITLE;

use crate::command::Command;
use crate::handler::Flow;
use crate::helper::CliHelper;

/// Terminal front end for the omycook cooking assistant.
#[derive(Parser, Debug)]
#[command(name = "omycook", version)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

/// Prints what deferred jobs report while the prompt is waiting.
async fn print_events(mut events: UnboundedReceiver<AppEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            AppEvent::ChatReplied(message) => {
                println!();
                print!("{}", render::chat_message(&message));
            }
            AppEvent::ChatReplyFailed(reason) => {
                eprintln!("{}", format!("답변을 받지 못했습니다: {}", reason).red());
            }
            AppEvent::ScanCompleted { item_count } => {
                println!();
                println!(
                    "{}",
                    format!("영수증 분석 완료: {}개 항목 (/show 로 확인)", item_count).green()
                );
            }
            AppEvent::ScanFailed(reason) => {
                eprintln!("{}", format!("영수증 분석 실패: {}", reason).red());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut app_config = config::resolve(args.config.as_deref(), config::default_config_path())?;
    if let Some(level) = args.log_level {
        app_config.logging.level = level;
    }
    omycook_execution::logging::init(&app_config.logging.level)?;
    tracing::info!("[Bootstrap] Starting omycook");

    let (mut app, events) = OmycookApp::with_canned_capabilities(app_config);
    let printer = tokio::spawn(print_events(events));

    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", format!("=== {} ===", APP_TITLE).bright_magenta().bold());
    println!("{}", "Type '/help' for commands, or 'quit' to exit.".bright_black());
    println!();
    print!("{}", render::screen(&app).await);

    loop {
        let prompt = format!("{}> ", app.current_screen().id());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match Command::parse(trimmed, app.current_screen()) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e.to_string().yellow());
                        continue;
                    }
                };
                match handler::execute(&mut app, command).await {
                    Ok(Flow::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Ok(Flow::Continue) => {}
                    Err(e) => eprintln!("{}", format!("{:#}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Dropping the app closes the event channel and ends the printer.
    drop(app);
    let _ = printer.await;
    Ok(())
}
