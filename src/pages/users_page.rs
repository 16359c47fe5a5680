//! Página de usuarios (requiere sesión)

use crate::models::user::User;
use crate::services::UserService;
use crate::state::{ErrorPolicy, ListState};
use crate::views::{render_list, PageLabels, RenderedPage, UserRow};

pub struct UsersPage<S> {
    service: S,
    list: ListState<User>,
}

impl<S: UserService> UsersPage<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            list: ListState::new(ErrorPolicy::Blocking),
        }
    }

    pub fn list(&self) -> &ListState<User> {
        &self.list
    }

    pub async fn refresh(&mut self) {
        self.list.begin_fetch();
        match self.service.list_users().await {
            Ok(users) => self.list.finish_ok(users),
            Err(e) => {
                log::warn!("⚠️ No se pudieron cargar los usuarios: {}", e);
                self.list.finish_err(e.alert_message());
            }
        }
    }

    pub fn render(&self) -> RenderedPage {
        render_list(&self.list, &PageLabels::USERS, |u| {
            UserRow::from_user(u).render()
        })
    }
}
