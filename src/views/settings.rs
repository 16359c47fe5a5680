//! Página de ajustes (estática)

pub struct SettingsSection {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

pub const SETTINGS_SECTIONS: [SettingsSection; 5] = [
    SettingsSection {
        title: "Profile",
        description: "Manage your personal information and preferences.",
        action: "Edit Profile",
    },
    SettingsSection {
        title: "Notifications",
        description: "Configure how you receive notifications and alerts.",
        action: "Manage Notifications",
    },
    SettingsSection {
        title: "Security",
        description: "Update your password and security preferences.",
        action: "Security Settings",
    },
    SettingsSection {
        title: "Language & Region",
        description: "Set your preferred language and regional settings.",
        action: "Change Language",
    },
    SettingsSection {
        title: "Billing",
        description: "Manage your subscription and payment methods.",
        action: "View Billing",
    },
];

pub fn render_settings() -> String {
    SETTINGS_SECTIONS
        .iter()
        .map(|s| format!("{}\n    {}\n    [{}]", s.title, s.description, s.action))
        .collect::<Vec<_>>()
        .join("\n")
}
