//! Filter criteria sent as query parameters to every chart endpoint.

use serde::{Deserialize, Serialize};

/// Spanish month names, index 0 = January
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

pub fn month_name(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[(month - 1) as usize]),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Centro,
    Ano,
    MesInicio,
    MesFin,
    Mes,
    Contrato,
}

impl FilterField {
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterField::Centro => "Centro",
            FilterField::Ano => "Año",
            FilterField::MesInicio => "Mes inicio",
            FilterField::MesFin => "Mes fin",
            FilterField::Mes => "Mes",
            FilterField::Contrato => "Contrato",
        }
    }
}

/// Center, year and month range: what the period charts need
pub const PERIOD_RANGE: &[FilterField] = &[
    FilterField::Centro,
    FilterField::Ano,
    FilterField::MesInicio,
    FilterField::MesFin,
];

/// Center and year: the month is optional for the profit chart
pub const CENTER_YEAR: &[FilterField] = &[FilterField::Centro, FilterField::Ano];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centro_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ano: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mes_inicio: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mes_fin: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrato_id: Option<String>,
}

impl ChartFilter {
    /// Filter for a center over a month range of one year
    pub fn period(centro_id: impl Into<String>, ano: i32, mes_inicio: u32, mes_fin: u32) -> Self {
        Self {
            centro_id: Some(centro_id.into()),
            ano: Some(ano),
            mes_inicio: Some(mes_inicio),
            mes_fin: Some(mes_fin),
            ..Self::default()
        }
    }

    pub fn is_present(&self, field: FilterField) -> bool {
        fn id_present(id: &Option<String>) -> bool {
            id.as_deref().is_some_and(|v| !v.trim().is_empty())
        }
        fn month_present(month: Option<u32>) -> bool {
            month.is_some_and(|m| (1..=12).contains(&m))
        }

        match field {
            FilterField::Centro => id_present(&self.centro_id),
            FilterField::Ano => self.ano.is_some_and(|a| a > 0),
            FilterField::MesInicio => month_present(self.mes_inicio),
            FilterField::MesFin => month_present(self.mes_fin),
            FilterField::Mes => month_present(self.mes),
            FilterField::Contrato => id_present(&self.contrato_id),
        }
    }

    /// Required fields that are absent or blank, in the order given
    pub fn missing(&self, required: &[FilterField]) -> Vec<FilterField> {
        required
            .iter()
            .copied()
            .filter(|f| !self.is_present(*f))
            .collect()
    }

    pub fn is_complete(&self, required: &[FilterField]) -> bool {
        required.iter().all(|f| self.is_present(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_period() {
        let filter = ChartFilter::period("12", 2024, 1, 6);
        assert!(filter.is_complete(PERIOD_RANGE));
        assert!(filter.missing(PERIOD_RANGE).is_empty());
    }

    #[test]
    fn test_blank_center_is_missing() {
        let filter = ChartFilter::period("  ", 2024, 1, 6);
        assert_eq!(filter.missing(PERIOD_RANGE), vec![FilterField::Centro]);
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let filter = ChartFilter {
            centro_id: Some("3".into()),
            ..ChartFilter::default()
        };
        assert_eq!(
            filter.missing(PERIOD_RANGE),
            vec![FilterField::Ano, FilterField::MesInicio, FilterField::MesFin]
        );
        assert!(!filter.is_complete(CENTER_YEAR));
    }

    #[test]
    fn test_out_of_range_month_is_missing() {
        let filter = ChartFilter::period("3", 2024, 0, 13);
        assert_eq!(
            filter.missing(PERIOD_RANGE),
            vec![FilterField::MesInicio, FilterField::MesFin]
        );
    }

    #[test]
    fn test_serializes_only_present_fields() {
        let filter = ChartFilter::period("3", 2024, 2, 5);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"centroId": "3", "ano": 2024, "mesInicio": 2, "mesFin": 5})
        );
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("Enero"));
        assert_eq!(month_name(12), Some("Diciembre"));
        assert_eq!(month_name(0), None);
    }
}
