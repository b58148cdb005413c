use leptos::prelude::*;

use crate::charts::{ChartKind, ChartPanel};
use crate::shared::filters::{default_period_filter, PeriodFilterBar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

#[component]
pub fn NominaPage() -> impl IntoView {
    let filter = RwSignal::new(default_period_filter());

    view! {
        <PageFrame page_id="nomina--dashboard" category=PAGE_CAT_DASHBOARD title="Informes de Nómina">
            <PeriodFilterBar filter=filter />
            <div class="charts-grid charts-grid--single">
                <section class="charts-grid__group">
                    <h2>"Reporte salarial"</h2>
                    <ChartPanel kind=ChartKind::SalaryTransport filter=filter />
                </section>
                <section class="charts-grid__group">
                    <h2>"Reporte novedades"</h2>
                    <ChartPanel kind=ChartKind::Novelties filter=filter />
                    <ChartPanel kind=ChartKind::NoveltyShare filter=filter />
                </section>
            </div>
        </PageFrame>
    }
}
