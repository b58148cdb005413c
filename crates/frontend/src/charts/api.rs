use contracts::catalog::{Centro, Contrato};
use contracts::charts::ChartFilter;
use serde::Serialize;

use super::definition::ChartDefinition;
use crate::shared::http::{get_json, get_json_with_token, with_query, ApiError};

/// The contract only scopes the center picker; chart endpoints never see it
pub fn chart_path<D: ChartDefinition>(filter: &ChartFilter) -> Result<String, ApiError> {
    let query = ChartFilter {
        contrato_id: None,
        ..filter.clone()
    };
    with_query(&format!("/api/graficos/{}", D::ENDPOINT), &query)
}

pub async fn fetch_chart<D: ChartDefinition>(
    filter: &ChartFilter,
    token: &str,
) -> Result<D::Response, ApiError> {
    let path = chart_path::<D>(filter)?;
    get_json_with_token(&path, token).await
}

/// Companies offered in the payroll filters
pub async fn fetch_contratos() -> Result<Vec<Contrato>, ApiError> {
    get_json("/api/graficos/contratos").await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CentrosQuery<'a> {
    contrato_id: &'a str,
}

/// Payroll centers belonging to one company
pub async fn fetch_centros_nomina(contrato_id: &str) -> Result<Vec<Centro>, ApiError> {
    let path = with_query("/api/graficos/centros-nomina", &CentrosQuery { contrato_id })?;
    get_json(&path).await
}

/// Billing centers for the profit chart
pub async fn fetch_centros() -> Result<Vec<Centro>, ApiError> {
    get_json("/api/centros").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::kinds::{ProfitMargin, SalaryTransport};

    #[test]
    fn test_chart_path() {
        let filter = ChartFilter::period("5", 2023, 2, 4);
        assert_eq!(
            chart_path::<SalaryTransport>(&filter).unwrap(),
            "/api/graficos/salario-transporte?centroId=5&ano=2023&mesInicio=2&mesFin=4"
        );

        let scoped = ChartFilter {
            contrato_id: Some("77".into()),
            ..filter
        };
        assert_eq!(
            chart_path::<SalaryTransport>(&scoped).unwrap(),
            "/api/graficos/salario-transporte?centroId=5&ano=2023&mesInicio=2&mesFin=4"
        );
    }

    #[test]
    fn test_profit_path_sends_month_only_when_chosen() {
        let mut filter = ChartFilter {
            centro_id: Some("9".into()),
            ano: Some(2024),
            ..ChartFilter::default()
        };
        assert_eq!(
            chart_path::<ProfitMargin>(&filter).unwrap(),
            "/api/graficos/utilidad?centroId=9&ano=2024"
        );

        filter.mes = Some(3);
        assert_eq!(
            chart_path::<ProfitMargin>(&filter).unwrap(),
            "/api/graficos/utilidad?centroId=9&ano=2024&mes=3"
        );
    }

    #[test]
    fn test_centros_query() {
        assert_eq!(
            with_query("/api/graficos/centros-nomina", &CentrosQuery { contrato_id: "77" }).unwrap(),
            "/api/graficos/centros-nomina?contratoId=77"
        );
    }
}
