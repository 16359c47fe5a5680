//! Cabecera con el estado de la sesión

use crate::models::auth::Session;

pub const APP_TITLE: &str = "Fleet Admin";

pub fn session_label(session: &Session) -> String {
    match session.username() {
        Some(username) => format!("Signed in as {} · Logout", username),
        None => "Login".to_string(),
    }
}
