//! Navegación (sidebar)

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Drivers,
    VehicleTypes,
    Cars,
    Reports,
    Users,
    Settings,
}

/// Entradas principales del sidebar, en orden
pub const NAV_ITEMS: [Page; 5] = [
    Page::Drivers,
    Page::VehicleTypes,
    Page::Cars,
    Page::Reports,
    Page::Users,
];

/// Entradas del pie del sidebar
pub const FOOTER_ITEMS: [Page; 1] = [Page::Settings];

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Drivers => "Drivers",
            Page::VehicleTypes => "Vehicle Types",
            Page::Cars => "Cars",
            Page::Reports => "Reports",
            Page::Users => "Users",
            Page::Settings => "Settings",
        }
    }

    /// Número con el que se elige en el menú (1-based)
    pub fn shortcut(self) -> usize {
        NAV_ITEMS
            .iter()
            .chain(FOOTER_ITEMS.iter())
            .position(|p| *p == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    pub fn from_choice(choice: &str) -> Option<Self> {
        let index: usize = choice.trim().parse().ok()?;
        NAV_ITEMS
            .iter()
            .chain(FOOTER_ITEMS.iter())
            .nth(index.checked_sub(1)?)
            .copied()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
