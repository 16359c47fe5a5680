//! Renderizado de una página de listado completa

use std::fmt;
use std::ops::Deref;

use crate::state::{ListState, ListView};
use crate::views::Badge;

/// Textos de una página de listado
#[derive(Debug, Clone, Copy)]
pub struct PageLabels {
    /// Título usado en la cabecera "Drivers (N)"
    pub title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub error_title: &'static str,
}

impl PageLabels {
    pub const DRIVERS: PageLabels = PageLabels {
        title: "Drivers",
        loading: "Loading drivers...",
        empty: "No drivers found.",
        error_title: "Data Load Error",
    };

    pub const VEHICLES: PageLabels = PageLabels {
        title: "Cars",
        loading: "Loading vehicles...",
        empty: "No vehicles found.",
        error_title: "Data Load Error",
    };

    pub const VEHICLE_TYPES: PageLabels = PageLabels {
        title: "Vehicle Types",
        loading: "Loading vehicle types...",
        empty: "No vehicle types found.",
        error_title: "Data Load Error",
    };

    pub const REPORTS: PageLabels = PageLabels {
        title: "Report Periods",
        loading: "Loading report periods...",
        empty: "No report periods found.",
        error_title: "Data Load Error",
    };

    pub const USERS: PageLabels = PageLabels {
        title: "Users",
        loading: "Loading users...",
        empty: "No users found.",
        error_title: "Error",
    };
}

/// Una fila renderizada, con el badge de estado si la entidad lo tiene
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub text: String,
    pub badge: Option<Badge>,
}

impl RenderedRow {
    pub fn with_badge(text: String, badge: Badge) -> Self {
        Self {
            text,
            badge: Some(badge),
        }
    }
}

impl From<String> for RenderedRow {
    fn from(text: String) -> Self {
        Self { text, badge: None }
    }
}

impl Deref for RenderedRow {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RenderedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedPage {
    Loading(String),
    Error { title: String, message: String },
    Empty(String),
    Items {
        header: String,
        rows: Vec<RenderedRow>,
        warning: Option<String>,
    },
}

impl RenderedPage {
    pub fn row_count(&self) -> usize {
        match self {
            RenderedPage::Items { rows, .. } => rows.len(),
            _ => 0,
        }
    }

    /// Texto plano, sin colores
    pub fn to_text(&self) -> String {
        match self {
            RenderedPage::Loading(msg) | RenderedPage::Empty(msg) => msg.clone(),
            RenderedPage::Error { title, message } => {
                format!("{}\n{}\n[r] Retry", title, message)
            }
            RenderedPage::Items {
                header,
                rows,
                warning,
            } => {
                let mut out = header.clone();
                if let Some(warning) = warning {
                    out.push_str(&format!("\n! {}", warning));
                }
                for row in rows {
                    out.push('\n');
                    out.push_str(row);
                }
                out
            }
        }
    }
}

/// Una fila por elemento, en el orden de la respuesta
pub fn render_list<T, R, F>(state: &ListState<T>, labels: &PageLabels, render_item: F) -> RenderedPage
where
    R: Into<RenderedRow>,
    F: Fn(&T) -> R,
{
    match state.view() {
        ListView::Loading => RenderedPage::Loading(labels.loading.to_string()),
        ListView::Error(message) => RenderedPage::Error {
            title: labels.error_title.to_string(),
            message: message.to_string(),
        },
        ListView::Empty => RenderedPage::Empty(labels.empty.to_string()),
        ListView::Populated { items, warning } => RenderedPage::Items {
            header: format!("{} ({})", labels.title, items.len()),
            rows: items.iter().map(|item| render_item(item).into()).collect(),
            warning: warning.map(str::to_string),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::driver::Driver;
    use crate::state::ErrorPolicy;
    use crate::views::DriverCard;

    fn render_drivers(state: &ListState<Driver>) -> RenderedPage {
        render_list(state, &PageLabels::DRIVERS, |d| {
            DriverCard::from_driver(d).to_row()
        })
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state: ListState<Driver> = ListState::new(ErrorPolicy::KeepPrevious);
        assert_eq!(
            render_drivers(&state),
            RenderedPage::Loading("Loading drivers...".to_string())
        );
    }

    #[test]
    fn test_one_card_per_driver_in_order() {
        let drivers: Vec<Driver> = serde_json::from_str(
            r#"[{"id":"2","fullName":"Zed"},{"id":"1","fullName":"Amy"}]"#,
        )
        .unwrap();
        let mut state = ListState::new(ErrorPolicy::KeepPrevious);
        state.finish_ok(drivers);

        let page = render_drivers(&state);
        assert_eq!(page.row_count(), 2);
        match page {
            RenderedPage::Items { header, rows, .. } => {
                assert_eq!(header, "Drivers (2)");
                assert!(rows[0].contains("Zed"));
                assert!(rows[1].contains("Amy"));
                assert_eq!(
                    rows[0].badge.as_ref().map(|b| b.tone),
                    Some(crate::views::Tone::Neutral)
                );
            }
            other => panic!("unexpected page: {:?}", other),
        }
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let mut state: ListState<Driver> = ListState::new(ErrorPolicy::Blocking);
        state.finish_ok(Vec::new());
        assert_eq!(
            render_drivers(&state).to_text(),
            "No drivers found."
        );
    }

    #[test]
    fn test_error_view_has_retry_hint() {
        let mut state: ListState<Driver> = ListState::new(ErrorPolicy::Blocking);
        state.finish_err("Failed to load driver data from the server.");
        let text = render_drivers(&state).to_text();
        assert!(text.starts_with("Data Load Error"));
        assert!(text.contains("Retry"));
    }
}
