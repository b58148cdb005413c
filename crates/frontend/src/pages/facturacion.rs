use contracts::catalog::DocumentPage;
use contracts::charts::ChartFilter;
use leptos::prelude::*;

use crate::charts::{ChartKind, ChartPanel};
use crate::documents::ui::links::DocumentLinks;
use crate::shared::filters::{current_year, CenterYearFilterBar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

#[component]
pub fn FacturacionPage() -> impl IntoView {
    let filter = RwSignal::new(ChartFilter {
        ano: Some(current_year()),
        ..Default::default()
    });

    view! {
        <PageFrame page_id="facturacion--dashboard" category=PAGE_CAT_DASHBOARD title="Facturación">
            <CenterYearFilterBar filter=filter />
            <div class="charts-grid charts-grid--single">
                <ChartPanel kind=ChartKind::ProfitMargin filter=filter />
            </div>
            <DocumentLinks page=DocumentPage::Facturacion />
        </PageFrame>
    }
}
