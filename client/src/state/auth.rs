//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root reads this to choose between the credential form and the
//! authenticated shell. It lives only in memory and starts signed out on every
//! load.
//!
//! DESIGN
//! ======
//! The registration mode only exists while signed out and the selected page
//! only exists while signed in, so both are carried inside the variant instead
//! of as independent flags.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Which credential call the form dispatches to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    Signup,
}

impl FormMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Create an Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Enter your email and password to access your account.",
            Self::Signup => "Fill in your details to create an account.",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Signup => "Create Account",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Create one",
            Self::Signup => "Already have an account? Sign in",
        }
    }
}

/// Static pages available inside the authenticated shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Project,
    Settings,
}

/// Top-level authentication state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    SignedOut(FormMode),
    SignedIn(Page),
}

impl Default for AuthState {
    fn default() -> Self {
        Self::SignedOut(FormMode::Login)
    }
}

impl AuthState {
    /// State entered after a successful login or signup.
    pub fn signed_in() -> Self {
        Self::SignedIn(Page::Home)
    }

    /// State entered after a successful logout. The form always reopens in
    /// login mode.
    pub fn signed_out() -> Self {
        Self::SignedOut(FormMode::Login)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            Self::SignedOut(mode) => Some(*mode),
            Self::SignedIn(_) => None,
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Self::SignedIn(page) => Some(*page),
            Self::SignedOut(_) => None,
        }
    }

    /// Flip between login and signup. Ignored once signed in.
    pub fn toggle_mode(&mut self) {
        if let Self::SignedOut(mode) = self {
            *mode = mode.toggled();
        }
    }

    /// Switch the visible shell page. Ignored while signed out.
    pub fn select_page(&mut self, page: Page) {
        if let Self::SignedIn(current) = self {
            *current = page;
        }
    }
}
