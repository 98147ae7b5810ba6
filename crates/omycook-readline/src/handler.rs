//! Executes parsed commands against the app.

use std::path::Path;

use anyhow::{Context as _, Result, anyhow, bail};
use colored::Colorize;
use omycook_application::{IngredientView, OmycookApp};
use omycook_core::chat::SendOutcome;
use omycook_core::login::LoginForm;
use omycook_core::navigation::Screen;
use omycook_core::profile::{BackTransition, NextTransition, ProfileWizard};
use omycook_core::receipt::UploadedImage;

use crate::command::Command;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn unavailable(screen: Screen) -> anyhow::Error {
    anyhow!("'{}' 화면에서는 사용할 수 없는 명령입니다", screen.title())
}

fn login_form(app: &mut OmycookApp) -> Result<&mut LoginForm> {
    let screen = app.current_screen();
    app.login_form_mut().ok_or_else(|| unavailable(screen))
}

fn wizard(app: &mut OmycookApp) -> Result<&mut ProfileWizard> {
    let screen = app.current_screen();
    app.wizard_mut().ok_or_else(|| unavailable(screen))
}

fn ingredient_view(app: &mut OmycookApp) -> Result<&mut IngredientView> {
    let screen = app.current_screen();
    app.ingredient_view_mut().ok_or_else(|| unavailable(screen))
}

fn require(app: &OmycookApp, screen: Screen) -> Result<()> {
    if app.current_screen() == screen {
        Ok(())
    } else {
        Err(unavailable(app.current_screen()))
    }
}

/// Converts a 1-based row number to an index.
fn row_index(n: usize) -> Result<usize> {
    n.checked_sub(1).ok_or_else(|| anyhow!("번호는 1부터 시작합니다"))
}

fn report_send(outcome: SendOutcome) -> Result<()> {
    match outcome {
        SendOutcome::Sent(_) => Ok(()),
        SendOutcome::EmptyInput => bail!("메시지를 입력해주세요"),
        SendOutcome::AwaitingReply => bail!("답변을 기다리는 중입니다"),
    }
}

/// Reads an image file for upload, guessing its MIME type from the extension.
pub async fn load_image(path: &Path) -> Result<UploadedImage> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(UploadedImage::from_bytes(file_name, mime.essence_str(), &bytes)?)
}

/// Runs `command`, then redraws the screen unless the command only prints.
pub async fn execute(app: &mut OmycookApp, command: Command) -> Result<Flow> {
    let redraw = !matches!(command, Command::Help | Command::Status | Command::Quit);
    let screen = app.current_screen();

    match command {
        Command::Help => print!("{}", render::help(screen)),
        Command::Quit => return Ok(Flow::Quit),
        Command::Show => {}
        Command::Status => print_status(app),
        Command::Go(target) => app.navigate(target).await,
        Command::Open(n) => {
            require(app, Screen::Home)?;
            app.open_feature(row_index(n)?)
                .await
                .ok_or_else(|| anyhow!("{}번 메뉴가 없습니다", n))?;
        }

        Command::Email(email) => login_form(app)?.set_email(email),
        Command::Password(password) => login_form(app)?.set_password(password),
        Command::Name(name) => login_form(app)?.set_name(name),
        Command::ToggleMode => {
            login_form(app)?.toggle_mode();
        }
        Command::Submit => {
            login_form(app)?;
            let email = app
                .submit_login()
                .await
                .ok_or_else(|| anyhow!("필수 항목을 모두 입력해주세요"))?;
            println!("{}", format!("{} 님 환영합니다", email).green());
        }

        Command::Level(level) => wizard(app)?.select_cooking_level(level),
        Command::Allergy(allergy) => {
            wizard(app)?.toggle_allergy(allergy);
        }
        Command::Spicy(level) => {
            wizard(app)?.set_spicy_level(level)?;
        }
        Command::Time(time) => wizard(app)?.select_cooking_time(time),
        Command::Tool(tool) => {
            wizard(app)?.toggle_kitchen_tool(tool);
        }
        Command::Next => match app.wizard_next().await.ok_or_else(|| unavailable(screen))? {
            NextTransition::Blocked => bail!("현재 단계의 항목을 선택해주세요"),
            NextTransition::Completed(_) => {
                println!("{}", "프로필 설정이 완료되었습니다".green());
            }
            NextTransition::Advanced(_) | NextTransition::Finished => {}
        },
        Command::Back => {
            if app.wizard_back().await.ok_or_else(|| unavailable(screen))? == BackTransition::Exited {
                println!("{}", "프로필 설정을 취소했습니다".bright_black());
            }
        }

        Command::Add {
            name,
            category,
            quantity,
        } => {
            require(app, Screen::Ingredients)?;
            app.add_ingredient(&name, category, quantity)
                .ok_or_else(|| anyhow!("재료 이름을 입력해주세요"))?;
        }
        Command::Remove(row) => {
            require(app, Screen::Ingredients)?;
            let removed = app
                .remove_visible_ingredient(row_index(row)?)
                .ok_or_else(|| anyhow!("{}번 재료가 없습니다", row))?;
            println!("{}", format!("{} 삭제됨", removed.name).bright_black());
        }
        Command::Search(term) => ingredient_view(app)?.search = term,
        Command::Tab(filter) => ingredient_view(app)?.filter = filter,

        Command::View(id) => {
            let found = match screen {
                Screen::Recipes => app.recipes_mut().and_then(|b| b.select(&id)).is_some(),
                Screen::Trending => app.trending_mut().and_then(|b| b.select(&id)).is_some(),
                _ => return Err(unavailable(screen)),
            };
            if !found {
                bail!("'{}' 레시피가 없습니다", id);
            }
        }
        Command::Close => match screen {
            Screen::Recipes => app.recipes_mut().ok_or_else(|| unavailable(screen))?.deselect(),
            Screen::Trending => app.trending_mut().ok_or_else(|| unavailable(screen))?.deselect(),
            _ => return Err(unavailable(screen)),
        },
        Command::Ask => {
            require(app, Screen::Recipes)?;
            if !app.ask_about_recipe().await {
                bail!("먼저 /view <id> 로 레시피를 선택해주세요");
            }
        }
        Command::Window(window) => app
            .trending_mut()
            .ok_or_else(|| unavailable(screen))?
            .set_window(window),

        Command::Say(text) => {
            let outcome = app.send_chat(text).await.ok_or_else(|| unavailable(screen))?;
            report_send(outcome)?;
        }
        Command::Suggest(n) => {
            let chat = app.chat().ok_or_else(|| unavailable(screen))?;
            let question = chat
                .apply_suggestion(row_index(n)?)
                .await
                .ok_or_else(|| anyhow!("추천 질문 {}번을 사용할 수 없습니다", n))?;
            println!("{}", format!("입력: {} (/send 로 전송)", question).bright_black());
        }
        Command::Send => {
            let chat = app.chat().ok_or_else(|| unavailable(screen))?;
            report_send(chat.send(None).await)?;
        }

        Command::Upload(path) => {
            let scan = app.scan().ok_or_else(|| unavailable(screen))?;
            let image = load_image(&path).await?;
            if !scan.upload(image).await {
                bail!("이미 영수증을 처리하고 있습니다. /retake 로 다시 시작하세요");
            }
        }
        Command::Confirm(row) => {
            let scan = app.scan().ok_or_else(|| unavailable(screen))?;
            scan.toggle_confirm(row_index(row)?)
                .await
                .ok_or_else(|| anyhow!("{}번 항목이 없습니다", row))?;
        }
        Command::Drop(row) => {
            let scan = app.scan().ok_or_else(|| unavailable(screen))?;
            scan.remove(row_index(row)?)
                .await
                .ok_or_else(|| anyhow!("{}번 항목이 없습니다", row))?;
        }
        Command::Save => {
            app.scan().ok_or_else(|| unavailable(screen))?;
            let added = app
                .save_scan()
                .await
                .ok_or_else(|| anyhow!("저장할 재료를 선택해주세요"))?;
            println!("{}", format!("{}개 재료를 추가했습니다", added).green());
        }
        Command::Retake => app.scan().ok_or_else(|| unavailable(screen))?.reset().await,
    }

    if redraw {
        print!("{}", render::screen(app).await);
    }
    Ok(Flow::Continue)
}

fn print_status(app: &OmycookApp) {
    let session = app.session();
    println!("screen:    {}", session.current_screen.id());
    println!("logged in: {}", session.is_logged_in);
    match &session.user_profile {
        Some(profile) => println!(
            "profile:   {} / {} / {} / tools {}",
            profile.cooking_level.label(),
            profile.spicy_level.label(),
            profile.cooking_time.label(),
            profile.kitchen_tools.len()
        ),
        None => println!("profile:   -"),
    }
    println!("pantry:    {}", app.ingredients().len());
    println!("jobs:      {}", app.pending_jobs());
}
