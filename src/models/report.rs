//! Modelo de ReportPeriod
//!
//! Periodo de reporte sobre el que se sube la hoja de cálculo, se ejecuta
//! la asignación remota y se exporta el resultado.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::utils::serde_ext::string_or_empty;

/// Estado del periodo
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportStatus {
    #[default]
    Draft,
    Finalized,
    Other(String),
}

impl ReportStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Finalized => "Finalized",
            ReportStatus::Other(s) => s.as_str(),
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, ReportStatus::Finalized)
    }
}

impl FromStr for ReportStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            s if s.eq_ignore_ascii_case("draft") => ReportStatus::Draft,
            s if s.eq_ignore_ascii_case("finalized") => ReportStatus::Finalized,
            s => ReportStatus::Other(s.to_string()),
        })
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .and_then(|s| s.parse::<ReportStatus>().ok())
            .unwrap_or_default())
    }
}

/// Periodo de reporte - mapea a GetReportPeriodDto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub start_date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub end_date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default)]
    pub status: ReportStatus,
}

impl ReportPeriod {
    /// Rango "dd/mm/yyyy - dd/mm/yyyy"; fechas no reconocidas se muestran tal cual
    pub fn date_range(&self) -> String {
        format!(
            "{} - {}",
            display_date(&self.start_date),
            display_date(&self.end_date)
        )
    }
}

/// Acepta "2025-03-01", "2025-03-01T00:00:00" o RFC3339
pub fn parse_backend_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            value
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

fn display_date(value: &str) -> String {
    parse_backend_date(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_period_from_backend_json() {
        let period: ReportPeriod = serde_json::from_str(
            r#"{"id":9,"startDate":"2025-03-01T00:00:00","endDate":"2025-03-31",
                "description":"March 2025","status":"Finalized"}"#,
        )
        .unwrap();

        assert_eq!(period.id, 9);
        assert!(period.status.is_finalized());
        assert_eq!(period.date_range(), "01/03/2025 - 31/03/2025");
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let period: ReportPeriod =
            serde_json::from_str(r#"{"id":1,"status":"Processing"}"#).unwrap();
        assert_eq!(period.status, ReportStatus::Other("Processing".to_string()));
        assert_eq!(period.status.to_string(), "Processing");
    }

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!(" draft ".parse::<ReportStatus>(), Ok(ReportStatus::Draft));
        assert_eq!("FINALIZED".parse::<ReportStatus>(), Ok(ReportStatus::Finalized));
        assert_eq!(
            "Processing".parse::<ReportStatus>(),
            Ok(ReportStatus::Other("Processing".to_string()))
        );
    }

    #[test]
    fn test_parse_backend_date() {
        assert!(parse_backend_date("2025-03-01T10:00:00Z").is_some());
        assert!(parse_backend_date("soon").is_none());
    }
}
