use contracts::catalog::DocumentPage;
use leptos::prelude::*;

use crate::documents::ui::links::DocumentLinks;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DOCUMENTS;

#[component]
pub fn PlaneacionPage() -> impl IntoView {
    view! {
        <PageFrame page_id="planeacion--documents" category=PAGE_CAT_DOCUMENTS title="Planeación">
            <DocumentLinks page=DocumentPage::Planeacion />
        </PageFrame>
    }
}

#[component]
pub fn GestionPage() -> impl IntoView {
    view! {
        <PageFrame page_id="gestion--documents" category=PAGE_CAT_DOCUMENTS title="Gestión">
            <DocumentLinks page=DocumentPage::Gestion />
        </PageFrame>
    }
}
