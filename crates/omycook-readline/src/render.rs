//! Screen rendering for the terminal.

use std::fmt::Write as _;

use colored::Colorize;
use omycook_application::{OmycookApp, ScreenState};
use omycook_core::catalog::{BrowserView, COOKING_STEPS, Recipe, TrendingRecipe, format_count};
use omycook_core::chat::{ChatEngine, ChatMessage, ChatRole};
use omycook_core::home::{APP_SUBTITLE, APP_TITLE, LOGIN_PROMPT, feature_cards, shows_login_prompt};
use omycook_core::ingredient::Ingredient;
use omycook_core::login::{AuthMode, LoginForm};
use omycook_core::navigation::Screen;
use omycook_core::profile::{
    Allergy, CookingLevel, CookingTime, KitchenTool, ProfileWizard, WizardStep,
};
use omycook_core::receipt::{ReceiptScanner, ScanState};
use strum::IntoEnumIterator;

pub fn stars(difficulty: u8) -> String {
    let filled = difficulty.min(3) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(3 - filled))
}

pub fn chilies(level: u8) -> String {
    if level == 0 {
        "-".to_string()
    } else {
        "🌶".repeat(level.min(5) as usize)
    }
}

fn check(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

fn header(title: &str) -> String {
    format!("{}\n", format!("== {} ==", title).bright_magenta().bold())
}

/// Renders the screen on display.
pub async fn screen(app: &OmycookApp) -> String {
    match app.screen_state() {
        ScreenState::Home => home(app),
        ScreenState::Login(form) => login(form),
        ScreenState::ProfileSetup(wizard) => profile(wizard),
        ScreenState::Ingredients(_) => ingredients(&app.visible_ingredients(), app),
        ScreenState::Recipes(browser) => match browser.view() {
            BrowserView::Grid => recipe_grid(browser.recipes()),
            BrowserView::Detail(recipe) => recipe_detail(recipe),
        },
        ScreenState::Chat(chat) => chat.with_engine(chat_screen).await,
        ScreenState::Trending(browser) => match browser.view() {
            BrowserView::Grid => trending_board(browser.window().label(), browser.podium(), browser.rest()),
            BrowserView::Detail(recipe) => trending_detail(recipe),
        },
        ScreenState::ReceiptScan(scan) => scan.with_scanner(receipt_screen).await,
    }
}

fn home(app: &OmycookApp) -> String {
    let mut out = header(APP_TITLE);
    let _ = writeln!(out, "{}", APP_SUBTITLE.bright_black());
    for (i, card) in feature_cards().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            card.title.bold(),
            format!("({})", card.description).bright_black()
        );
    }
    if shows_login_prompt(app.session().is_logged_in) {
        let _ = writeln!(out, "\n{}  {}", LOGIN_PROMPT.yellow(), "/go login".bright_black());
    } else if let Some(profile) = &app.session().user_profile {
        let _ = writeln!(
            out,
            "\n{} {} · {}",
            "프로필:".green(),
            profile.cooking_level.label(),
            profile.spicy_level.label()
        );
    }
    out
}

fn login(form: &LoginForm) -> String {
    let mut out = header(form.mode().label());
    let _ = writeln!(out, "  이메일:   {}", form.email());
    let _ = writeln!(
        out,
        "  비밀번호: {}",
        if form.has_password() { "********" } else { "" }
    );
    if form.mode() == AuthMode::SignUp {
        let _ = writeln!(out, "  이름:     {}", form.name());
    }
    let other = match form.mode() {
        AuthMode::SignIn => AuthMode::SignUp,
        AuthMode::SignUp => AuthMode::SignIn,
    };
    let _ = writeln!(
        out,
        "{}",
        format!("/submit 으로 {}, /toggle 로 {}", form.mode().label(), other.label()).bright_black()
    );
    out
}

fn profile(wizard: &ProfileWizard) -> String {
    let Some(step) = wizard.step() else {
        return header("프로필 설정 완료");
    };
    let (current, total) = wizard.progress();
    let draft = wizard.draft();
    let mut out = header(&format!("{} ({}/{})", step.title(), current, total));

    match step {
        WizardStep::CookingLevel => {
            for level in CookingLevel::iter() {
                let _ = writeln!(
                    out,
                    "  {} {} {} {}",
                    check(draft.cooking_level == Some(level)),
                    level.label(),
                    level.description().bright_black(),
                    format!("/level {}", level.as_ref()).bright_black()
                );
            }
        }
        WizardStep::Allergies => {
            for allergy in Allergy::iter() {
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    check(draft.allergies.contains(&allergy)),
                    allergy.label(),
                    format!("/allergy {}", allergy.as_ref()).bright_black()
                );
            }
        }
        WizardStep::SpicyLevel => {
            let level = draft.spicy_level;
            let _ = writeln!(out, "  {} {} {}", chilies(level.value()), level.value(), level.label());
            let _ = writeln!(out, "  {}", "/spicy <1-5>".bright_black());
        }
        WizardStep::CookingTime => {
            for time in CookingTime::iter() {
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    check(draft.cooking_time == Some(time)),
                    time.label(),
                    format!("/time {}", time.as_ref()).bright_black()
                );
            }
        }
        WizardStep::KitchenTools => {
            for tool in KitchenTool::iter() {
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    check(draft.kitchen_tools.contains(&tool)),
                    tool.label(),
                    format!("/tool {}", tool.as_ref()).bright_black()
                );
            }
        }
    }

    let next = if wizard.can_proceed() {
        "/next".green()
    } else {
        "/next".bright_black()
    };
    let _ = writeln!(out, "{} {}", "/back".bright_black(), next);
    out
}

fn ingredients(rows: &[&Ingredient], app: &OmycookApp) -> String {
    let mut out = header(Screen::Ingredients.title());
    if let Some(view) = app.ingredient_view() {
        let _ = writeln!(
            out,
            "{}",
            format!("검색: '{}'  분류: {}", view.search, view.filter.label()).bright_black()
        );
    }
    if rows.is_empty() {
        let _ = writeln!(out, "  {}", "재료가 없습니다".bright_black());
    }
    for (i, item) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} {} {}",
            i + 1,
            item.name.bold(),
            item.quantity.as_deref().unwrap_or(""),
            format!("[{}]", item.category.label()).cyan()
        );
    }
    let _ = writeln!(out, "{}", format!("총 {}개", app.ingredients().len()).bright_black());
    out
}

fn recipe_grid(recipes: &[Recipe]) -> String {
    let mut out = header(Screen::Recipes.title());
    for recipe in recipes {
        let _ = writeln!(
            out,
            "  [{}] {}  {}분 · {} · {} · {}kcal{}",
            recipe.id,
            recipe.name.bold(),
            recipe.time,
            stars(recipe.difficulty),
            chilies(recipe.spicy_level),
            recipe.calories,
            if recipe.needs_substitutes() {
                format!(" {}", "대체재 가능".yellow())
            } else {
                String::new()
            }
        );
    }
    let _ = writeln!(out, "{}", "/view <id> 로 자세히 보기".bright_black());
    out
}

fn recipe_detail(recipe: &Recipe) -> String {
    let mut out = header(&recipe.name);
    let _ = writeln!(
        out,
        "  {}분 · {}인분 · {}kcal · {} · 난이도 {} · 맵기 {}",
        recipe.time,
        recipe.servings,
        recipe.calories,
        recipe.cuisine.label(),
        stars(recipe.difficulty),
        chilies(recipe.spicy_level)
    );
    let _ = writeln!(out, "  {} {}", "있는 재료:".green(), recipe.available_ingredients.join(", "));
    if !recipe.missing_ingredients.is_empty() {
        let _ = writeln!(out, "  {}", "부족한 재료:".yellow());
        for missing in &recipe.missing_ingredients {
            let _ = writeln!(out, "    - {} → {}", missing, recipe.substitute_for(missing));
        }
    }
    let _ = writeln!(out, "  {}", "조리 순서:".bold());
    for (i, step) in COOKING_STEPS.iter().enumerate() {
        let _ = writeln!(out, "    {}. {}", i + 1, step);
    }
    let _ = writeln!(out, "{}", "/ask 로 AI에게 물어보기, /close 로 목록".bright_black());
    out
}

fn trending_board(window: &str, podium: &[TrendingRecipe], rest: &[TrendingRecipe]) -> String {
    let mut out = header(&format!("{} ({})", Screen::Trending.title(), window));
    for recipe in podium.iter().chain(rest) {
        let rank = format!("{:>2}", recipe.rank);
        let rank = if recipe.rank <= 3 { rank.yellow().bold() } else { rank.normal() };
        let _ = writeln!(
            out,
            "  {} {} {}  조회 {} · 좋아요 {}",
            rank,
            recipe.name.bold(),
            recipe.badge.as_deref().unwrap_or("").red(),
            format_count(recipe.views),
            format_count(recipe.likes)
        );
    }
    let _ = writeln!(out, "{}", "/window <day|week|month>, /view <id>".bright_black());
    out
}

fn trending_detail(recipe: &TrendingRecipe) -> String {
    let mut out = header(&format!("#{} {}", recipe.rank, recipe.name));
    let _ = writeln!(
        out,
        "  {}분 · {}인분 · {} · 조회 {} · 좋아요 {}",
        recipe.time,
        recipe.servings,
        recipe.cuisine.label(),
        format_count(recipe.views),
        format_count(recipe.likes)
    );
    let _ = writeln!(out, "{}", "/close 로 목록".bright_black());
    out
}

fn chat_screen(engine: &ChatEngine) -> String {
    let mut out = header(Screen::Chat.title());
    for message in engine.messages() {
        out.push_str(&chat_message(message));
    }
    if engine.is_typing() {
        let _ = writeln!(out, "{}", "  ...".bright_black());
    }
    if let Some(suggestions) = engine.suggestions() {
        let _ = writeln!(out, "{}", "추천 질문:".bright_black());
        for (i, question) in suggestions.iter().enumerate() {
            let _ = writeln!(out, "  {}", format!("{}. {}", i + 1, question).bright_black());
        }
    }
    out
}

/// One chat bubble, assistant in blue and user in green.
pub fn chat_message(message: &ChatMessage) -> String {
    let time = message.timestamp.format("%H:%M").to_string();
    let mut out = String::new();
    match message.role {
        ChatRole::Assistant => {
            for line in message.content.lines() {
                let _ = writeln!(out, "{}", line.bright_blue());
            }
        }
        ChatRole::User => {
            for line in message.content.lines() {
                let _ = writeln!(out, "{}", format!("> {}", line).green());
            }
        }
    }
    let _ = writeln!(out, "{}", time.bright_black());
    out
}

fn receipt_screen(scanner: &ReceiptScanner) -> String {
    let mut out = header(Screen::ReceiptScan.title());
    match scanner.state() {
        ScanState::Idle => {
            let _ = writeln!(out, "  {}", "/upload <image path> 로 영수증을 올려주세요".bright_black());
        }
        ScanState::Scanning { image, .. } => {
            let _ = writeln!(out, "  {} {}", image.file_name, "분석 중...".yellow());
        }
        ScanState::Reviewing { image, items } => {
            let _ = writeln!(out, "  {}", image.file_name.bright_black());
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {} {} {} {}",
                    i + 1,
                    check(item.confirmed),
                    item.name.bold(),
                    item.quantity.as_deref().unwrap_or(""),
                    format!("[{}]", item.category.label()).cyan()
                );
            }
            let save = format!("/save ({}개)", scanner.confirmed_count());
            let save = if scanner.can_save() { save.green() } else { save.bright_black() };
            let _ = writeln!(out, "{} {}", "/confirm <n> /drop <n> /retake".bright_black(), save);
        }
    }
    out
}

/// Command list for `/help`.
pub fn help(screen: Screen) -> String {
    let mut out = header("도움말");
    let _ = writeln!(out, "  /go <screen>  /home  /show  /status  /quit");
    let specific = match screen {
        Screen::Home => "/open <n>",
        Screen::Login => "/email <e>  /password <p>  /name <n>  /toggle  /submit",
        Screen::ProfileSetup => "/level  /allergy  /spicy  /time  /tool  /next  /back",
        Screen::Ingredients => "/add <name> <category> [qty]  /remove <n>  /search [term]  /tab <category|all>",
        Screen::Recipes => "/view <id>  /close  /ask",
        Screen::Chat => "<text>  /suggest <n>  /send",
        Screen::Trending => "/view <id>  /close  /window <day|week|month>",
        Screen::ReceiptScan => "/upload <path>  /confirm <n>  /drop <n>  /save  /retake",
    };
    let _ = writeln!(out, "  {}", specific);
    let screens: Vec<String> = Screen::iter().map(|s| s.id().to_string()).collect();
    let _ = writeln!(out, "{}", format!("screens: {}", screens.join(", ")).bright_black());
    out
}
