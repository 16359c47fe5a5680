//! Sesión de autenticación
//!
//! La sesión se emite en el login, se limpia en el logout y nunca se
//! revalida en silencio: no hay expiración ni refresh del token.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Estado de la sesión del operador
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        username: String,
        issued_at: DateTime<Utc>,
    },
}

impl Session {
    pub fn issue(token: String, username: String) -> Self {
        Session::Authenticated {
            token,
            username,
            issued_at: Utc::now(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token.as_str()),
            Session::Anonymous => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username, .. } => Some(username.as_str()),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

/// Sesión compartida entre el cliente HTTP y el shell
pub type SessionHandle = Arc<RwLock<Session>>;

pub fn new_session_handle() -> SessionHandle {
    Arc::new(RwLock::new(Session::Anonymous))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let anonymous = Session::default();
        assert!(!anonymous.is_authenticated());
        assert_eq!(anonymous.token(), None);

        let session = Session::issue("abc".to_string(), "admin".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.username(), Some("admin"));
    }

    #[tokio::test]
    async fn test_handle_is_shared() {
        let handle = new_session_handle();
        let other = handle.clone();

        *handle.write().await = Session::issue("t".to_string(), "ops".to_string());
        assert_eq!(other.read().await.token(), Some("t"));

        *other.write().await = Session::Anonymous;
        assert!(!handle.read().await.is_authenticated());
    }
}
