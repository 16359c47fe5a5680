//! Fila del listado de usuarios

use crate::models::user::User;

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub name: String,
    pub role: String,
    pub email: String,
}

impl UserRow {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.display_name(),
            role: user.role.clone(),
            email: user.email.clone(),
        }
    }

    pub fn render(&self) -> String {
        format!("{} ({}) <{}>", self.name, self.role, self.email)
    }
}
