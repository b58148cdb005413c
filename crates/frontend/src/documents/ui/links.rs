//! Document links published under one dashboard section.

use contracts::catalog::DocumentPage;
use contracts::documents::{visible_documents, Document, VisibilityRule};
use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::documents::api;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

pub const LOADING_MESSAGE: &str = "Cargando documentos...";
pub const EMPTY_MESSAGE: &str = "No hay documentos disponibles para tu rol en esta sección.";
pub const LOAD_FAILED: &str = "No se pudieron cargar los documentos.";

#[derive(Debug, Clone, PartialEq)]
enum LinksState {
    Loading,
    Failed(String),
    Loaded(Vec<Document>),
}

/// Documents of `page` the viewer may open
pub fn documents_for(page: DocumentPage, docs: &[Document], viewer: Option<&UserProfile>) -> Vec<Document> {
    let on_page: Vec<Document> = docs
        .iter()
        .filter(|d| d.id_pagina == page.id())
        .cloned()
        .collect();
    visible_documents(&on_page, VisibilityRule::for_page(page), viewer)
}

#[component]
pub fn DocumentLinks(page: DocumentPage) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (state, set_state) = signal(LinksState::Loading);

    spawn_local(async move {
        match api::fetch_documents(Some(page)).await {
            Ok(docs) => set_state.set(LinksState::Loaded(docs)),
            Err(e) => {
                log::error!("fetch documents for page {} failed: {}", page.id(), e);
                set_state.set(LinksState::Failed(e.user_message(LOAD_FAILED)));
            }
        }
    });

    let visible = Memo::new(move |_| match state.get() {
        LinksState::Loaded(docs) => {
            let viewer = auth_state.with(|s| s.user.clone());
            Some(documents_for(page, &docs, viewer.as_ref()))
        }
        _ => None,
    });

    view! {
        <section class="documents">
            <h2 class="documents__title">"Documentos"</h2>
            {move || match state.get() {
                LinksState::Loading => view! { <p class="documents__status">{LOADING_MESSAGE}</p> }.into_any(),
                LinksState::Failed(msg) => view! { <div class="alert alert--error">{msg}</div> }.into_any(),
                LinksState::Loaded(_) => {
                    let docs = visible.get().unwrap_or_default();
                    if docs.is_empty() {
                        view! { <p class="documents__status">{EMPTY_MESSAGE}</p> }.into_any()
                    } else {
                        view! {
                            <div class="documents__grid">
                                {docs.into_iter().map(|doc| view! {
                                    <a class="documents__link" href=doc.url target="_blank" rel="noopener noreferrer">
                                        {icon("external-link")}
                                        <span>{doc.nombre}</span>
                                    </a>
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: i64, id_rol: i32, id_pagina: i32) -> Document {
        Document {
            id,
            nombre: format!("doc {}", id),
            url: format!("https://example.org/{}", id),
            id_rol,
            id_pagina,
            id_subregion: None,
        }
    }

    fn viewer(id_rol: i32) -> UserProfile {
        UserProfile {
            id_rol: Some(id_rol),
            ..Default::default()
        }
    }

    #[test]
    fn test_other_pages_are_dropped() {
        let docs = vec![doc(1, 2, 1), doc(2, 2, 3)];
        let shown = documents_for(DocumentPage::Planeacion, &docs, Some(&viewer(2)));
        assert_eq!(shown.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_admin_documents_hidden_on_planeacion() {
        let docs = vec![doc(1, 1, 1), doc(2, 3, 1)];
        let shown = documents_for(DocumentPage::Planeacion, &docs, Some(&viewer(3)));
        assert_eq!(shown.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(documents_for(DocumentPage::Planeacion, &docs, Some(&viewer(1))).len(), 2);
    }

    #[test]
    fn test_indicadores_without_profile_shows_nothing() {
        let docs = vec![doc(1, 3, 2)];
        assert!(documents_for(DocumentPage::Indicadores, &docs, None).is_empty());
        assert_eq!(documents_for(DocumentPage::Indicadores, &docs, Some(&viewer(3))).len(), 1);
    }
}
