//! Raw rows returned by the `/api/graficos/*` endpoints, one per period.
//!
//! Numeric columns come from SQL aggregates and may arrive as JSON numbers,
//! numeric strings or `null`; all of them deserialize to `f64` (null = 0).
//! `NaN` and `Infinity` (valid in Postgres `numeric`) are rejected.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

pub(crate) fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => 0.0,
        Some(NumberOrText::Number(v)) => v,
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => 0.0,
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid number {:?}: {}", s, e)))?,
    };
    if !value.is_finite() {
        return Err(de::Error::custom(format!("non-finite number {}", value)));
    }
    Ok(value)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Int(i64),
    Text(String),
}

pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Int(v) => v.to_string(),
        IdValue::Text(s) => s,
    })
}

/// Single numeric cell inside a served dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Value(#[serde(deserialize_with = "de_number")] pub f64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRow {
    #[serde(default)]
    pub fecha_label: String,
    #[serde(default, deserialize_with = "de_number")]
    pub facturacion_valor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRow {
    #[serde(default)]
    pub fecha_label: String,
    #[serde(default, deserialize_with = "de_number")]
    pub nomina_valor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadcountRow {
    #[serde(default)]
    pub fecha_label: String,
    #[serde(default, deserialize_with = "de_number")]
    pub personas_valor: f64,
}

/// Monthly cost composition (five stacked categories)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    #[serde(default)]
    pub fecha_label: String,
    #[serde(default, deserialize_with = "de_number")]
    pub nomina: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub aux_transporte: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub prestaciones: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub gastos_fijos: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub gastos_variable: f64,
}

/// Payroll novelties summed per period. `recaro_total` is the API's column
/// name for the surcharge total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoveltyRow {
    #[serde(default)]
    pub fecha_label: String,
    #[serde(default, deserialize_with = "de_number")]
    pub recaro_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub extras_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub dominical_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub bonificacion_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub incapacidad_total: f64,
}

/// Aggregate over the whole period for the novelty share chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoveltyTotals {
    #[serde(default, deserialize_with = "de_number")]
    pub recaro_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub extras_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub dominical_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub bonificacion_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub incapacidad_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryTransportRow {
    #[serde(default)]
    pub fecha_label: String,
    #[serde(default, deserialize_with = "de_number")]
    pub salario_total: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub transporte_total: f64,
}

/// The profit endpoint serves labeled series directly; values are ratios
/// (0.25 = 25 %).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitMarginResponse {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ServedDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServedDataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_row_from_number() {
        let rows: Vec<BillingRow> =
            serde_json::from_str(r#"[{"fecha_label":"Ene","facturacion_valor":192494889}]"#).unwrap();
        assert_eq!(rows[0].fecha_label, "Ene");
        assert_eq!(rows[0].facturacion_valor, 192494889.0);
    }

    #[test]
    fn test_numeric_strings_and_nulls() {
        let row: ExpenseRow = serde_json::from_str(
            r#"{"fecha_label":"Feb","nomina":"1500.50","aux_transporte":null,"prestaciones":" ","gastos_fijos":10}"#,
        )
        .unwrap();
        assert_eq!(row.nomina, 1500.5);
        assert_eq!(row.aux_transporte, 0.0);
        assert_eq!(row.prestaciones, 0.0);
        assert_eq!(row.gastos_fijos, 10.0);
        assert_eq!(row.gastos_variable, 0.0);
    }

    #[test]
    fn test_garbage_number_is_an_error() {
        let result: Result<PayrollRow, _> =
            serde_json::from_str(r#"{"fecha_label":"Mar","nomina_valor":"abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_strings_are_errors() {
        for text in ["Infinity", "-Infinity", "NaN", "inf"] {
            let json = format!(r#"[{{"fecha_label":"Ene","nomina":"{}"}}]"#, text);
            let result: Result<Vec<ExpenseRow>, _> = serde_json::from_str(&json);
            assert!(result.is_err(), "{} accepted", text);
        }
    }

    #[test]
    fn test_empty_totals_object() {
        let totals: NoveltyTotals = serde_json::from_str("{}").unwrap();
        assert_eq!(totals, NoveltyTotals::default());
    }

    #[test]
    fn test_profit_response() {
        let response: ProfitMarginResponse = serde_json::from_str(
            r#"{"labels":["Ene","Feb"],"datasets":[{"label":"Utilidad","data":[0.25,"0.1"]}]}"#,
        )
        .unwrap();
        assert_eq!(response.datasets[0].data, vec![Value(0.25), Value(0.1)]);
    }
}
