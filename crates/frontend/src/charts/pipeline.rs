//! Filter -> request -> display state, independent of the browser.

use std::sync::atomic::{AtomicU64, Ordering};

use contracts::charts::{ChartData, ChartFilter, FilterField};

use super::definition::ChartDefinition;
use crate::shared::http::ApiError;

pub const NOT_AUTHENTICATED_MESSAGE: &str = "Usuario no autenticado.";
pub const LOADING_MESSAGE: &str = "Cargando gráfico...";

/// What a chart panel shows. A single enum, so "incomplete" and "ready"
/// can never be shown together.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDisplay {
    /// Required filters are missing; nothing was requested
    Incomplete(String),
    Loading,
    Failed(String),
    /// `notice` is set when the response had no data
    Ready {
        data: ChartData,
        notice: Option<String>,
    },
}

impl ChartDisplay {
    pub fn is_loading(&self) -> bool {
        matches!(self, ChartDisplay::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Filters incomplete: no request
    Skip,
    /// No session token: no request
    Reject,
    Issue { token: String },
}

impl FetchPlan {
    /// State to show while the plan runs
    pub fn display<D: ChartDefinition>(&self) -> ChartDisplay {
        match self {
            FetchPlan::Skip => ChartDisplay::Incomplete(D::INCOMPLETE_MESSAGE.to_string()),
            FetchPlan::Reject => ChartDisplay::Failed(NOT_AUTHENTICATED_MESSAGE.to_string()),
            FetchPlan::Issue { .. } => ChartDisplay::Loading,
        }
    }
}

/// Decides whether a filter change leads to a request. Filters are checked
/// before the token, which is only read once they are complete.
pub fn plan_fetch(
    filter: &ChartFilter,
    required: &[FilterField],
    token: impl FnOnce() -> Option<String>,
) -> FetchPlan {
    let missing = filter.missing(required);
    if !missing.is_empty() {
        log::debug!("chart request skipped, missing filters: {:?}", missing);
        return FetchPlan::Skip;
    }
    match token() {
        Some(token) => FetchPlan::Issue { token },
        None => FetchPlan::Reject,
    }
}

/// Final state for a finished request
pub fn settle<D: ChartDefinition>(result: Result<D::Response, ApiError>) -> ChartDisplay {
    match result {
        Ok(response) => {
            let data = D::transform(response);
            let notice = data.is_empty().then(|| D::EMPTY_MESSAGE.to_string());
            ChartDisplay::Ready { data, notice }
        }
        Err(e) => {
            log::error!("chart {}: {}", D::KEY, e);
            ChartDisplay::Failed(D::FAILURE_MESSAGE.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out increasing tickets; only the most recently issued one is current
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::kinds::{Billing, NoveltyShare, ProfitMargin};
    use crate::system::session::{MemorySession, SessionStore};
    use contracts::charts::{BillingRow, NoveltyTotals, PERIOD_RANGE};

    fn full_filter() -> ChartFilter {
        ChartFilter::period("12", 2024, 1, 12)
    }

    #[test]
    fn test_missing_filter_skips_without_reading_token() {
        let mut filter = full_filter();
        filter.centro_id = Some(String::new());

        let plan = plan_fetch(&filter, PERIOD_RANGE, || panic!("token must not be read"));
        assert_eq!(plan, FetchPlan::Skip);
        assert_eq!(
            plan.display::<Billing>(),
            ChartDisplay::Incomplete("Seleccione un Centro, Año y Rango de Meses.".into())
        );
    }

    #[test]
    fn test_missing_token_rejects() {
        let session = MemorySession::default();
        let plan = plan_fetch(&full_filter(), PERIOD_RANGE, || session.token());

        assert_eq!(plan, FetchPlan::Reject);
        assert_eq!(
            plan.display::<Billing>(),
            ChartDisplay::Failed("Usuario no autenticado.".into())
        );
    }

    #[test]
    fn test_complete_filter_with_token_issues() {
        let session = MemorySession::with_token("tkn");
        let plan = plan_fetch(&full_filter(), PERIOD_RANGE, || session.token());

        assert_eq!(plan, FetchPlan::Issue { token: "tkn".into() });
        assert!(plan.display::<Billing>().is_loading());
    }

    #[test]
    fn test_profit_margin_needs_only_center_and_year() {
        let filter = ChartFilter {
            centro_id: Some("3".into()),
            ano: Some(2024),
            ..ChartFilter::default()
        };
        let plan = plan_fetch(&filter, ProfitMargin::REQUIRED, || Some("t".into()));
        assert!(matches!(plan, FetchPlan::Issue { .. }));
    }

    #[test]
    fn test_settle_ready() {
        let rows = vec![BillingRow {
            fecha_label: "Ene".into(),
            facturacion_valor: 192494889.0,
        }];
        match settle::<Billing>(Ok(rows)) {
            ChartDisplay::Ready { data, notice } => {
                assert_eq!(notice, None);
                assert_eq!(data.series[0].data, vec![192494889.0]);
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_settle_empty_is_ready_with_notice() {
        match settle::<Billing>(Ok(Vec::new())) {
            ChartDisplay::Ready { data, notice } => {
                assert!(data.is_empty());
                assert_eq!(notice.as_deref(), Some("No hay datos para este Centro/Período."));
            }
            other => panic!("unexpected state: {:?}", other),
        }

        match settle::<NoveltyShare>(Ok(NoveltyTotals::default())) {
            ChartDisplay::Ready { notice, .. } => assert_eq!(
                notice.as_deref(),
                Some("No hay valores de novedades positivos para el período seleccionado.")
            ),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_settle_error_shows_generic_message() {
        let err = ApiError::Status {
            status: 500,
            body: "stack trace".into(),
        };
        assert_eq!(
            settle::<Billing>(Err(err)),
            ChartDisplay::Failed("Error al cargar datos del gráfico de facturación.".into())
        );
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let sequencer = RequestSequencer::default();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_late_response_for_old_ticket_is_dropped() {
        let sequencer = RequestSequencer::default();
        let old = sequencer.issue();
        let new = sequencer.issue();

        // the newer request resolves first, the older one after it
        let mut shown = None;
        for (ticket, label) in [(new, "new"), (old, "old")] {
            if sequencer.is_current(ticket) {
                shown = Some(label);
            }
        }
        assert_eq!(shown, Some("new"));
    }
}
