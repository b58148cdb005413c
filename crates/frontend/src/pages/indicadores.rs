use contracts::catalog::DocumentPage;
use leptos::prelude::*;

use crate::charts::{ChartKind, ChartPanel};
use crate::documents::ui::links::DocumentLinks;
use crate::shared::filters::{default_period_filter, PeriodFilterBar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

const CHARTS: [ChartKind; 4] = [
    ChartKind::Billing,
    ChartKind::Payroll,
    ChartKind::Headcount,
    ChartKind::Expenses,
];

#[component]
pub fn IndicadoresPage() -> impl IntoView {
    let filter = RwSignal::new(default_period_filter());

    view! {
        <PageFrame page_id="indicadores--dashboard" category=PAGE_CAT_DASHBOARD title="Indicadores">
            <PeriodFilterBar filter=filter />
            <div class="charts-grid">
                {CHARTS.into_iter().map(|kind| view! { <ChartPanel kind=kind filter=filter /> }).collect_view()}
            </div>
            <DocumentLinks page=DocumentPage::Indicadores />
        </PageFrame>
    }
}
