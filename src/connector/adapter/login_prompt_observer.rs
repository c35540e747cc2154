use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

use crate::application::SessionObserver;

/// Command-line stand-in for the browser's redirect to the login page: tells
/// the user how to sign in again.
pub struct LoginPromptObserver {
    login_hint: String,
    fired: AtomicBool,
}

impl LoginPromptObserver {
    pub fn new(login_hint: impl Into<String>) -> Self {
        Self {
            login_hint: login_hint.into(),
            fired: AtomicBool::new(false),
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    pub fn login_hint(&self) -> &str {
        &self.login_hint
    }
}

impl SessionObserver for LoginPromptObserver {
    fn session_expired(&self) {
        self.fired.store(true, Ordering::SeqCst);
        warn!("Session expired. Sign in again with `{}`.", self.login_hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_that_it_fired() {
        let observer = LoginPromptObserver::new("leoneta auth login");
        assert!(!observer.has_fired());

        observer.session_expired();

        assert!(observer.has_fired());
    }
}
