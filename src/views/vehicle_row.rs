//! Fila de la tabla de vehículos

use crate::models::vehicle::Vehicle;

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRow {
    pub id: i64,
    pub plate_number: String,
    pub model: String,
    pub color: String,
    pub swatch: String,
    pub category: String,
    pub vehicle_type: String,
}

impl VehicleRow {
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate_number: vehicle.plate_number.clone(),
            model: vehicle
                .model
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "—".to_string()),
            color: vehicle.color.clone(),
            swatch: vehicle.color_swatch(),
            category: vehicle.required_driver_category.letter().to_string(),
            vehicle_type: vehicle
                .vehicle_type_name
                .clone()
                .unwrap_or_else(|| "—".to_string()),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "#{:<4} {:<12} {:<20} {:<10} ({}) cat. {:<2} {}",
            self.id,
            self.plate_number,
            self.model,
            self.color,
            self.swatch,
            self.category,
            self.vehicle_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_renders_category_letter() {
        let vehicle: Vehicle = serde_json::from_str(
            r#"{"id":1,"plateNumber":"ABC-1234","model":"Toyota Camry","color":"Silver",
                "requiredDriverCategory":1}"#,
        )
        .unwrap();
        let row = VehicleRow::from_vehicle(&vehicle);
        assert_eq!(row.category, "B");
        assert_eq!(row.swatch, "#c0c0c0");
        assert_eq!(row.vehicle_type, "—");
        assert!(row.render().contains("ABC-1234"));
    }
}
