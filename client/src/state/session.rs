//! Credential form controller and its collaborator ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand user intent (submit, logout) to `SessionController`, which
//! calls the remote auth service, reports the outcome through a `Notifier`,
//! and returns the next `AuthState` for the caller to store.
//!
//! ERROR HANDLING
//! ==============
//! No failure escapes this module. Every call produces exactly one
//! notification, and a failed call yields `None` so the caller leaves its
//! state untouched.
//!
//! CONCURRENCY
//! ===========
//! Calls are not serialized against each other. If two calls overlap, each
//! writes its own result when it resolves and the last one wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::AuthError;
use crate::net::types::Credentials;
use crate::state::auth::{AuthState, FormMode};
use crate::state::toast::{ToastLevel, ToastState};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const SIGNUP_SUCCESS: &str = "Account created successfully!";
pub const LOGOUT_SUCCESS: &str = "Logged out successfully!";
pub const DUPLICATE_EMAIL_NOTICE: &str = "This email is already registered. Please use a different email or log in.";

/// Remote login/signup/logout operations.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    async fn login(&self, credentials: Credentials) -> Result<(), AuthError>;
    async fn signup(&self, credentials: Credentials) -> Result<(), AuthError>;
    async fn logout(&self) -> Result<(), AuthError>;
}

/// Sink for user-visible notifications.
pub trait Notifier {
    fn notify(&self, level: ToastLevel, message: String);
}

impl Notifier for RwSignal<ToastState> {
    fn notify(&self, level: ToastLevel, message: String) {
        let id = self.try_update(|s| s.push(level, message));
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = id {
                let toasts = *self;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TIMEOUT_MS).await;
                    toasts.try_update(|s| s.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

/// Runs auth calls and turns their outcome into notifications and state.
#[derive(Clone, Copy, Debug)]
pub struct SessionController<S, N> {
    service: S,
    notifier: N,
}

impl<S: AuthService, N: Notifier> SessionController<S, N> {
    pub fn new(service: S, notifier: N) -> Self {
        Self { service, notifier }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Submit the form in `mode`. Returns the signed-in state on success.
    pub async fn submit(&self, mode: FormMode, credentials: Credentials) -> Option<AuthState> {
        match mode {
            FormMode::Login => self.login(credentials).await,
            FormMode::Signup => self.signup(credentials).await,
        }
    }

    async fn login(&self, credentials: Credentials) -> Option<AuthState> {
        match self.service.login(credentials).await {
            Ok(()) => {
                log::info!("login succeeded");
                self.success(LOGIN_SUCCESS);
                Some(AuthState::signed_in())
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.error(format!("Login failed: {e}"));
                None
            }
        }
    }

    async fn signup(&self, credentials: Credentials) -> Option<AuthState> {
        match self.service.signup(credentials).await {
            Ok(()) => {
                log::info!("signup succeeded");
                self.success(SIGNUP_SUCCESS);
                Some(AuthState::signed_in())
            }
            Err(AuthError::DuplicateEmail(raw)) => {
                log::warn!("signup rejected, email already registered: {raw}");
                self.error(DUPLICATE_EMAIL_NOTICE.to_owned());
                None
            }
            Err(e) => {
                log::warn!("signup failed: {e}");
                self.error(format!("Signup failed: {e}"));
                None
            }
        }
    }

    /// End the session. Returns the signed-out state on success.
    pub async fn logout(&self) -> Option<AuthState> {
        match self.service.logout().await {
            Ok(()) => {
                log::info!("logout succeeded");
                self.success(LOGOUT_SUCCESS);
                Some(AuthState::signed_out())
            }
            Err(e) => {
                log::warn!("logout failed: {e}");
                self.error(format!("Logout failed: {e}"));
                None
            }
        }
    }

    fn success(&self, message: &str) {
        self.notifier.notify(ToastLevel::Success, message.to_owned());
    }

    fn error(&self, message: String) {
        self.notifier.notify(ToastLevel::Error, message);
    }
}
