//! Bucle principal del shell
//!
//! Lee comandos de `input`, despacha a la página activa y escribe la vista y
//! las alertas en `output`. Genérico sobre `BufRead`/`Write` para poder
//! manejarlo desde tests.

use colored::*;
use std::io::{BufRead, Write};

use crate::client::FleetApiClient;
use crate::config::EnvironmentConfig;
use crate::forms::LoginForm;
use crate::models::category::{EmploymentType, LicenseCategory};
use crate::models::vehicle_type::VehicleType;
use crate::pages::{CarsPage, DriversPage, ReportsPage, UsersPage, VehicleTypesPage};
use crate::services::AuthService;
use crate::shell::header::{session_label, APP_TITLE};
use crate::shell::page::{Page, FOOTER_ITEMS, NAV_ITEMS};
use crate::state::{ActionOutcome, SubmitOutcome};
use crate::utils::errors::AppResult;
use crate::views::settings::render_settings;
use crate::views::{RenderedPage, Tone};

pub struct App<R, W> {
    client: FleetApiClient,
    input: R,
    output: W,
    current: Page,
    drivers: DriversPage<FleetApiClient>,
    vehicle_types: VehicleTypesPage<FleetApiClient>,
    cars: CarsPage<FleetApiClient>,
    reports: ReportsPage<FleetApiClient>,
    users: UsersPage<FleetApiClient>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(client: FleetApiClient, config: &EnvironmentConfig, input: R, output: W) -> Self {
        Self {
            drivers: DriversPage::new(client.clone(), config.drivers_page_size),
            vehicle_types: VehicleTypesPage::new(client.clone(), config.vehicle_types_page_size),
            cars: CarsPage::new(client.clone()),
            reports: ReportsPage::new(client.clone(), config.export_dir.clone()),
            users: UsersPage::new(client.clone()),
            client,
            input,
            output,
            current: Page::default(),
        }
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "{}", format!("🚚 {}", APP_TITLE).bright_blue().bold())?;
        self.navigate(self.current).await;

        loop {
            self.print_screen().await?;
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            if !self.handle(&line).await? {
                break;
            }
        }

        writeln!(self.output, "{}", "👋 Bye!".bright_green())?;
        Ok(())
    }

    /// Despacha un comando; `false` para salir
    pub async fn handle(&mut self, line: &str) -> AppResult<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }
        if let Some(page) = Page::from_choice(line) {
            self.navigate(page).await;
            return Ok(true);
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_ascii_lowercase();
        let argument = parts.next().map(str::to_string);

        match command.as_str() {
            "q" | "quit" => return Ok(false),
            "l" | "login" | "logout" => self.toggle_session().await?,
            _ => match self.current {
                Page::Drivers => self.drivers_command(&command, argument).await?,
                Page::VehicleTypes => self.vehicle_types_command(&command, argument).await?,
                Page::Cars => self.cars_command(&command, argument).await?,
                Page::Reports => self.reports_command(&command, argument).await?,
                Page::Users if command == "r" => self.users.refresh().await,
                _ => self.alert_failure("Unknown command.")?,
            },
        }
        Ok(true)
    }

    async fn navigate(&mut self, page: Page) {
        log::debug!("🧭 Navegando a {}", page);
        self.current = page;
        match page {
            Page::Drivers => self.drivers.refresh().await,
            Page::VehicleTypes => self.vehicle_types.refresh().await,
            Page::Cars => self.cars.refresh().await,
            Page::Reports => self.reports.refresh().await,
            Page::Users => self.users.refresh().await,
            Page::Settings => {}
        }
    }

    async fn toggle_session(&mut self) -> AppResult<()> {
        if self.client.current_session().await.is_authenticated() {
            self.client.logout().await;
            return self.alert_success("Signed out.");
        }

        let form = LoginForm {
            username: self.prompt("Username: ")?.unwrap_or_default(),
            password: self.prompt("Password: ")?.unwrap_or_default(),
        };
        if let Err(e) = form.check() {
            return self.alert_failure(&e.alert_message());
        }

        match self.client.login(&form.username, &form.password).await {
            Ok(_) => {
                self.alert_success(&format!("Welcome, {}!", form.username.trim()))?;
                if self.current == Page::Users {
                    self.users.refresh().await;
                }
                Ok(())
            }
            Err(e) => self.alert_failure(&e.alert_message()),
        }
    }

    async fn drivers_command(&mut self, command: &str, argument: Option<String>) -> AppResult<()> {
        match (command, argument) {
            ("r", _) => self.drivers.refresh().await,
            ("n", _) => {
                if !self.drivers.next_page().await {
                    self.alert_failure("Already on the last page.")?;
                }
            }
            ("p", _) => {
                if !self.drivers.prev_page().await {
                    self.alert_failure("Already on the first page.")?;
                }
            }
            ("a", _) => {
                self.drivers.open_add();
                loop {
                    let full_name = self.prompt("Full name: ")?.unwrap_or_default();
                    let birth_date = self.prompt("Birth date (YYYY-MM-DD): ")?.unwrap_or_default();
                    let address = self.prompt("Address: ")?.unwrap_or_default();
                    let category = self.prompt_category()?;
                    let employment = self
                        .prompt("Employment type (Full-Time/Part-Time): ")?
                        .and_then(|v| EmploymentType::parse(&v));

                    let form = &mut self.drivers.add_form;
                    form.full_name = full_name;
                    form.birth_date = birth_date;
                    form.address = address;
                    form.category = category;
                    form.employment_type = employment;

                    let outcome = self.drivers.submit_add().await;
                    if !self.report_submit(outcome)? {
                        break;
                    }
                }
                self.drivers.close_modal();
            }
            ("e", Some(id)) => {
                if !self.drivers.open_edit(&id) {
                    return self.alert_failure(&format!("Driver {} not found.", id));
                }
                loop {
                    let Some(current) = self.drivers.edit_form.clone() else {
                        break;
                    };
                    let full_name = self.prompt_default("Full name", &current.full_name)?;
                    let birth_date = self.prompt_default("Birth date", &current.birth_date)?;
                    let address = self.prompt_default("Address", &current.address)?;
                    let category = self
                        .prompt_default("License category", current.category.letter())?;
                    let employment =
                        self.prompt_default("Employment type", current.employment_type.label())?;

                    if let Some(form) = self.drivers.edit_form.as_mut() {
                        form.full_name = full_name;
                        form.birth_date = birth_date;
                        form.address = address;
                        form.category = LicenseCategory::from_letter(&category)
                            .unwrap_or(current.category);
                        form.employment_type = EmploymentType::parse(&employment)
                            .unwrap_or(current.employment_type);
                    }

                    let outcome = self.drivers.submit_edit().await;
                    if !self.report_submit(outcome)? {
                        break;
                    }
                }
                self.drivers.close_modal();
            }
            ("d", Some(id)) => {
                let confirmed = self.confirm(&format!("Delete driver {}?", id))?;
                let outcome = self.drivers.delete(&id, confirmed).await;
                self.report_action(outcome)?;
            }
            _ => self.alert_failure("Unknown command.")?,
        }
        Ok(())
    }

    async fn vehicle_types_command(
        &mut self,
        command: &str,
        argument: Option<String>,
    ) -> AppResult<()> {
        match (command, argument) {
            ("r", _) => self.vehicle_types.refresh().await,
            ("n", _) => {
                if !self.vehicle_types.next_page().await {
                    self.alert_failure("Already on the last page.")?;
                }
            }
            ("p", _) => {
                if !self.vehicle_types.prev_page().await {
                    self.alert_failure("Already on the first page.")?;
                }
            }
            (cmd @ ("a" | "e"), argument) => {
                if cmd == "a" {
                    self.vehicle_types.open_add();
                } else {
                    let id = argument.unwrap_or_default();
                    if !self.vehicle_types.open_edit(&id) {
                        return self.alert_failure(&format!("Vehicle type {} not found.", id));
                    }
                }
                loop {
                    let current = self.vehicle_types.form.clone();
                    let name = self.prompt_default("Name", &current.name)?;
                    let description = self.prompt_default("Description", &current.description)?;
                    self.vehicle_types.form.name = name;
                    self.vehicle_types.form.description = description;

                    let outcome = self.vehicle_types.submit().await;
                    if !self.report_submit(outcome)? {
                        break;
                    }
                }
                self.vehicle_types.close_modal();
            }
            ("d", Some(id)) => {
                let confirmed = self.confirm(&format!("Delete vehicle type {}?", id))?;
                let outcome = self.vehicle_types.delete(&id, confirmed).await;
                self.report_action(outcome)?;
            }
            _ => self.alert_failure("Unknown command.")?,
        }
        Ok(())
    }

    async fn cars_command(&mut self, command: &str, argument: Option<String>) -> AppResult<()> {
        let id = argument.as_deref().and_then(|a| a.parse::<i64>().ok());

        match (command, id) {
            ("r", _) => self.cars.refresh().await,
            ("a", _) => {
                self.cars.open_add().await;
                loop {
                    let plate_number = self.prompt("Plate number: ")?.unwrap_or_default();
                    let model = self.prompt("Model: ")?.unwrap_or_default();
                    let color = self.prompt("Color: ")?.unwrap_or_default();
                    let vehicle_type_id = if self.cars.add_form.shows_vehicle_type() {
                        let options = vehicle_type_options(&self.cars.add_form.vehicle_types);
                        self.prompt(&format!("Vehicle type ({}): ", options))?
                            .and_then(|chosen| chosen.trim().parse::<i64>().ok())
                    } else {
                        None
                    };
                    let category = self.prompt_category()?;

                    let form = &mut self.cars.add_form;
                    form.plate_number = plate_number;
                    form.model = model;
                    form.color = color;
                    form.vehicle_type_id = vehicle_type_id;
                    form.category = category;

                    let outcome = self.cars.submit_add().await;
                    if !self.report_submit(outcome)? {
                        break;
                    }
                }
                self.cars.close_modal();
            }
            ("e", Some(id)) => {
                if !self.cars.open_edit(id).await {
                    return self.alert_failure(&format!("Vehicle {} not found.", id));
                }
                loop {
                    let Some(current) = self.cars.edit_form.clone() else {
                        break;
                    };
                    let plate_number = self.prompt_default("Plate number", &current.plate_number)?;
                    let model = self.prompt_default("Model", &current.model)?;
                    let color = self.prompt_default("Color", &current.color)?;
                    let category =
                        self.prompt_default("License category", current.category.letter())?;
                    let vehicle_type_id = if current.shows_vehicle_type() {
                        let options = vehicle_type_options(&current.vehicle_types);
                        let default = current
                            .vehicle_type_id
                            .map(|id| id.to_string())
                            .unwrap_or_default();
                        let chosen =
                            self.prompt_default(&format!("Vehicle type ({})", options), &default)?;
                        chosen.trim().parse::<i64>().ok()
                    } else {
                        current.vehicle_type_id
                    };

                    if let Some(form) = self.cars.edit_form.as_mut() {
                        form.plate_number = plate_number;
                        form.model = model;
                        form.color = color;
                        form.category =
                            LicenseCategory::from_letter(&category).unwrap_or(current.category);
                        form.vehicle_type_id = vehicle_type_id;
                    }

                    let outcome = self.cars.submit_edit().await;
                    if !self.report_submit(outcome)? {
                        break;
                    }
                }
                self.cars.close_modal();
            }
            ("d", Some(id)) => {
                let confirmed = self.confirm(&format!("Delete vehicle {}?", id))?;
                let outcome = self.cars.delete(id, confirmed).await;
                self.report_action(outcome)?;
            }
            _ => self.alert_failure("Unknown command.")?,
        }
        Ok(())
    }

    async fn reports_command(&mut self, command: &str, argument: Option<String>) -> AppResult<()> {
        let period_id = argument.as_deref().and_then(|a| a.parse::<i64>().ok());

        match (command, period_id) {
            ("r", _) => self.reports.refresh().await,
            ("u", period_id) => {
                self.reports.open_upload(period_id);
                if period_id.is_none() {
                    self.reports.upload_form.period_id = self
                        .prompt("Report period id: ")?
                        .and_then(|v| v.trim().parse().ok());
                }
                self.reports.upload_form.file_path =
                    self.prompt("Spreadsheet path (.xlsx, .xls, .csv): ")?
                        .unwrap_or_default();
                if let Some(name) = self.reports.upload_form.selected_file_name() {
                    writeln!(self.output, "Selected: {}", name)?;
                }
                let outcome = self.reports.submit_upload().await;
                self.report_submit(outcome)?;
                self.reports.close_upload();
            }
            ("g", Some(id)) => {
                writeln!(self.output, "{}", "Assigning...".bright_yellow())?;
                let outcome = self.reports.run_assignment(id).await;
                self.report_action(outcome)?;
            }
            ("x", Some(id)) => {
                let outcome = self.reports.export(id).await;
                self.report_action(outcome)?;
            }
            _ => self.alert_failure("Unknown command.")?,
        }
        Ok(())
    }

    async fn print_screen(&mut self) -> AppResult<()> {
        let session = self.client.current_session().await;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}  {}",
            APP_TITLE.bright_blue().bold(),
            session_label(&session).bright_cyan()
        )?;

        let nav = NAV_ITEMS
            .iter()
            .chain(FOOTER_ITEMS.iter())
            .map(|p| {
                let item = format!("{}. {}", p.shortcut(), p.label());
                if *p == self.current {
                    item.bright_green().bold().to_string()
                } else {
                    item
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(self.output, "{}", nav)?;
        writeln!(self.output, "{}", "=================================".bright_blue())?;

        let rendered = match self.current {
            Page::Drivers => Some(self.drivers.render()),
            Page::VehicleTypes => Some(self.vehicle_types.render()),
            Page::Cars => Some(self.cars.render()),
            Page::Reports => Some(self.reports.render()),
            Page::Users => Some(self.users.render()),
            Page::Settings => None,
        };
        match rendered {
            Some(page) => self.print_page(&page)?,
            None => writeln!(self.output, "{}", render_settings())?,
        }

        if let Some(info) = self.page_footer() {
            writeln!(self.output, "{}", info.dimmed())?;
        }
        let help = self.command_help();
        writeln!(self.output, "{}", help.bright_yellow())?;
        Ok(())
    }

    fn print_page(&mut self, page: &RenderedPage) -> AppResult<()> {
        match page {
            RenderedPage::Loading(msg) => writeln!(self.output, "{}", msg.bright_yellow())?,
            RenderedPage::Empty(msg) => writeln!(self.output, "{}", msg.dimmed())?,
            RenderedPage::Error { title, message } => {
                writeln!(self.output, "{}", title.bright_red().bold())?;
                writeln!(self.output, "{}", message.bright_red())?;
                writeln!(self.output, "[r] Retry")?;
            }
            RenderedPage::Items {
                header,
                rows,
                warning,
            } => {
                writeln!(self.output, "{}", header.bold())?;
                if let Some(warning) = warning {
                    writeln!(self.output, "{}", format!("⚠️ {}", warning).bright_yellow())?;
                }
                for row in rows {
                    match &row.badge {
                        Some(badge) => {
                            writeln!(self.output, "{}", row.text.color(tone_color(badge.tone)))?
                        }
                        None => writeln!(self.output, "{}", row)?,
                    }
                }
            }
        }
        Ok(())
    }

    fn page_footer(&self) -> Option<String> {
        let info = match self.current {
            Page::Drivers => self.drivers.page_info(),
            Page::VehicleTypes => self.vehicle_types.page_info(),
            _ => None,
        }?;
        Some(format!("Page {} of {}", info.page_number, info.total_pages))
    }

    fn command_help(&self) -> &'static str {
        match self.current {
            Page::Drivers | Page::VehicleTypes => {
                "[1-6] navigate  [r] refresh  [n/p] page  [a] add  [e <id>] edit  [d <id>] delete  [l] login/logout  [q] quit"
            }
            Page::Cars => {
                "[1-6] navigate  [r] refresh  [a] add  [e <id>] edit  [d <id>] delete  [l] login/logout  [q] quit"
            }
            Page::Reports => {
                "[1-6] navigate  [r] refresh  [u <id>] upload  [g <id>] run engine  [x <id>] export  [l] login/logout  [q] quit"
            }
            Page::Users => "[1-6] navigate  [r] refresh  [l] login/logout  [q] quit",
            Page::Settings => "[1-6] navigate  [l] login/logout  [q] quit",
        }
    }

    /// Imprime el resultado; `true` si el modal sigue abierto y se puede reintentar
    fn report_submit(&mut self, outcome: SubmitOutcome) -> AppResult<bool> {
        match outcome {
            SubmitOutcome::Saved(message) => {
                self.alert_success(message.as_deref().unwrap_or("Saved."))?;
                Ok(false)
            }
            SubmitOutcome::Failed(message) => {
                self.alert_failure(&message)?;
                self.confirm("Try again?")
            }
            SubmitOutcome::Ignored => Ok(false),
        }
    }

    fn report_action(&mut self, outcome: ActionOutcome) -> AppResult<()> {
        match outcome {
            ActionOutcome::Done(message) => self.alert_success(&message),
            ActionOutcome::Failed(message) => self.alert_failure(&message),
            ActionOutcome::Cancelled => Ok(()),
        }
    }

    fn alert_success(&mut self, message: &str) -> AppResult<()> {
        writeln!(self.output, "{}", format!("✅ {}", message).bright_green())?;
        Ok(())
    }

    fn alert_failure(&mut self, message: &str) -> AppResult<()> {
        writeln!(self.output, "{}", format!("❌ {}", message).bright_red())?;
        Ok(())
    }

    fn prompt_category(&mut self) -> AppResult<Option<LicenseCategory>> {
        let options = LicenseCategory::ALL
            .iter()
            .map(|c| format!("{} ({})", c.letter(), c.description()))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(self
            .prompt(&format!("License category [{}]: ", options))?
            .and_then(|v| LicenseCategory::from_letter(&v)))
    }

    /// Valor vacío conserva el actual
    fn prompt_default(&mut self, label: &str, current: &str) -> AppResult<String> {
        let value = self
            .prompt(&format!("{} [{}]: ", label, current))?
            .unwrap_or_default();
        if value.trim().is_empty() {
            Ok(current.to_string())
        } else {
            Ok(value)
        }
    }

    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        let answer = self.prompt(&format!("{} (y/N): ", question))?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes")
        ))
    }

    /// `None` en fin de entrada
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label.bright_yellow())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

fn vehicle_type_options(vehicle_types: &[VehicleType]) -> String {
    vehicle_types
        .iter()
        .map(|t| format!("{}={}", t.id, t.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Color de una fila según el tono de su badge de estado
fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Neutral => Color::BrightBlack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_tones_have_distinct_colors() {
        assert_eq!(tone_color(Tone::Positive), Color::Green);
        assert_eq!(tone_color(Tone::Warning), Color::Yellow);
        assert_eq!(tone_color(Tone::Neutral), Color::BrightBlack);
    }

    #[test]
    fn test_vehicle_type_options_list_id_and_name() {
        let types: Vec<VehicleType> = serde_json::from_str(
            r#"[{"id":1,"name":"Sedan"},{"id":2,"name":"Van"}]"#,
        )
        .unwrap();
        assert_eq!(vehicle_type_options(&types), "1=Sedan, 2=Van");
    }
}
