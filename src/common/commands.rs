use crate::auth::{LoginForm, Provider, RegisterForm};

/// Commands the UI sends down to the auth worker.
#[derive(Debug, Clone)]
pub enum AuthCommand {
    /// A login form submission. Never validated beyond the UI.
    Login(LoginForm),
    /// A registration that already passed `RegisterForm::validate`.
    Register(RegisterForm),
    /// Sign in or sign up through a third-party provider button.
    Social { provider: Provider, signup: bool },
}
