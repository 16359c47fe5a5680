//! Card de conductor

use crate::models::driver::Driver;
use crate::views::{Badge, RenderedRow, Tone};

#[derive(Debug, Clone, PartialEq)]
pub struct DriverCard {
    pub id: String,
    pub title: String,
    pub status: Badge,
    /// Un tag por categoría de licencia
    pub tags: Vec<String>,
    pub address: String,
    pub age: Option<u32>,
    pub employment: String,
}

impl DriverCard {
    pub fn from_driver(driver: &Driver) -> Self {
        let tone = if driver.is_active {
            Tone::Positive
        } else {
            Tone::Neutral
        };

        Self {
            id: driver.id.clone(),
            title: driver.full_name.clone(),
            status: Badge::new(driver.status_label(), tone),
            tags: driver.categories(),
            address: driver.address.clone(),
            age: driver.age,
            employment: driver.employment_type.label().to_string(),
        }
    }

    pub fn to_row(&self) -> RenderedRow {
        RenderedRow::with_badge(self.render(), self.status.clone())
    }

    pub fn render(&self) -> String {
        let tags = if self.tags.is_empty() {
            "—".to_string()
        } else {
            self.tags
                .iter()
                .map(|t| format!("[{}]", t))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let age = self
            .age
            .map(|a| format!("{} years", a))
            .unwrap_or_else(|| "—".to_string());

        format!(
            "#{} {}  ({})\n    License: {}\n    Address: {}\n    Age: {} · {}",
            self.id, self.title, self.status.label, tags, self.address, age, self.employment
        )
    }
}
