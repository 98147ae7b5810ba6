//! Login / sign-up form.
//!
//! There is no credential check: a form with its required fields filled in
//! submits, and the session is told the e-mail.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "로그인",
            Self::SignUp => "회원가입",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    mode: AuthMode,
    email: String,
    password: String,
    name: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Switches between sign-in and sign-up, keeping what was typed.
    pub fn toggle_mode(&mut self) -> AuthMode {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.mode
    }

    /// E-mail and password are always required; the name only when signing up.
    pub fn can_submit(&self) -> bool {
        let base = !self.email.trim().is_empty() && !self.password.is_empty();
        match self.mode {
            AuthMode::SignIn => base,
            AuthMode::SignUp => base && !self.name.trim().is_empty(),
        }
    }

    /// Returns the e-mail to log in with, or `None` if a required field is missing.
    pub fn submit(&self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        tracing::info!(mode = self.mode.label(), "Login form submitted");
        Some(self.email.trim().to_string())
    }
}
