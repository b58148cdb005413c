use std::sync::Arc;

use contracts::charts::ChartFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::fetch_chart;
use super::definition::ChartDefinition;
use super::kinds::{
    Billing, ChartKind, Expenses, Headcount, Novelties, NoveltyShare, Payroll, ProfitMargin,
    SalaryTransport,
};
use super::pipeline::{plan_fetch, settle, ChartDisplay, FetchPlan, RequestSequencer};
use crate::system::session::{BrowserSession, SessionStore};

/// Re-fetches chart `D` whenever `filter` changes. Responses to anything
/// but the latest request are dropped.
pub fn use_chart<D: ChartDefinition>(filter: Signal<ChartFilter>) -> ReadSignal<ChartDisplay> {
    let (display, set_display) =
        signal(ChartDisplay::Incomplete(D::INCOMPLETE_MESSAGE.to_string()));
    let sequencer = Arc::new(RequestSequencer::default());

    Effect::new(move |_| {
        let filter = filter.get();
        // A new ticket also retires whatever is still in flight
        let ticket = sequencer.issue();
        let plan = plan_fetch(&filter, D::REQUIRED, || BrowserSession.token());
        set_display.set(plan.display::<D>());

        let FetchPlan::Issue { token } = plan else {
            return;
        };
        let sequencer = Arc::clone(&sequencer);
        spawn_local(async move {
            let result = fetch_chart::<D>(&filter, &token).await;
            if !sequencer.is_current(ticket) {
                log::debug!("chart {}: dropping stale response", D::KEY);
                return;
            }
            set_display.set(settle::<D>(result));
        });
    });

    display
}

pub fn use_chart_kind(kind: ChartKind, filter: Signal<ChartFilter>) -> ReadSignal<ChartDisplay> {
    match kind {
        ChartKind::Billing => use_chart::<Billing>(filter),
        ChartKind::Payroll => use_chart::<Payroll>(filter),
        ChartKind::Headcount => use_chart::<Headcount>(filter),
        ChartKind::Expenses => use_chart::<Expenses>(filter),
        ChartKind::Novelties => use_chart::<Novelties>(filter),
        ChartKind::SalaryTransport => use_chart::<SalaryTransport>(filter),
        ChartKind::NoveltyShare => use_chart::<NoveltyShare>(filter),
        ChartKind::ProfitMargin => use_chart::<ProfitMargin>(filter),
    }
}
