//! Signed-in user session.
//!
//! The session is created once in `main` and passed by reference to whatever
//! needs the current user. Logging out ends it; the dashboard then exits.

use crate::config::model::SessionConfig;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn start(user: User) -> Self {
        info!(user = %user.name, "session started");
        Self { user: Some(user) }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::start(User {
            name: config.name.clone(),
            email: config.email.clone(),
        })
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// End the session, returning the user that was signed in.
    pub fn logout(&mut self) -> Option<User> {
        let user = self.user.take();
        if let Some(ref u) = user {
            info!(user = %u.name, "session ended");
        }
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let session = Session::from_config(&SessionConfig {
            name: "Priya".into(),
            email: Some("priya@example.com".into()),
        });
        assert!(session.current_user().is_some());
        assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("Priya"));
    }

    #[test]
    fn test_logout_is_terminal() {
        let mut session = Session::start(User {
            name: "Arun".into(),
            email: None,
        });
        assert_eq!(session.logout().map(|u| u.name), Some("Arun".to_string()));
        assert!(session.current_user().is_none());
        assert!(session.logout().is_none());
    }
}
