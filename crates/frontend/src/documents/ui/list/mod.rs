use contracts::catalog::{DocumentPage, Role, Subregion, UNKNOWN_LABEL};
use contracts::documents::Document;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::DocumentForm;
use crate::documents::api;
use crate::shared::flash::{confirm, Flash, FlashMessage};
use crate::shared::list_utils::{cmp_text, sort_list, Sortable, SortableHeaderCell};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const LOAD_FAILED: &str = "No se pudieron cargar los documentos.";
const DELETE_FAILED: &str = "No se pudo eliminar el documento.";

impl Sortable for Document {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "nombre" => cmp_text(&self.nombre, &other.nombre),
            "url" => self.url.cmp(&other.url),
            "rol" => Role::label_for(self.id_rol).cmp(Role::label_for(other.id_rol)),
            "clase" => self.id_pagina.cmp(&other.id_pagina),
            "subregion" => self.id_subregion.cmp(&other.id_subregion),
            _ => self.id.cmp(&other.id),
        }
    }
}

pub fn delete_prompt(doc: &Document) -> String {
    format!(
        "Se eliminará el documento '{}'. Esta acción no se puede revertir.",
        doc.nombre
    )
}

/// What the form modal is showing
#[derive(Debug, Clone, PartialEq)]
enum FormMode {
    Closed,
    Create,
    Edit(Document),
}

#[component]
pub fn DocumentsListPage() -> impl IntoView {
    let all_docs: RwSignal<Vec<Document>> = RwSignal::new(Vec::new());
    let sort_field = RwSignal::new("id".to_string());
    let sort_ascending = RwSignal::new(true);
    let (loading, set_loading) = signal(false);
    let form_mode = RwSignal::new(FormMode::Closed);
    let flash = Flash::new();

    let items = Memo::new(move |_| {
        let mut data = all_docs.get();
        sort_list(&mut data, &sort_field.get(), sort_ascending.get());
        data
    });

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_documents(None).await {
                Ok(data) => all_docs.set(data),
                Err(e) => {
                    log::error!("fetch documents failed: {}", e);
                    flash.error(e.user_message(LOAD_FAILED));
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let toggle_sort = Callback::new(move |field: &'static str| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|asc| *asc = !*asc);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    });

    let delete_doc = move |doc: Document| {
        if !confirm(&delete_prompt(&doc)) {
            return;
        }
        spawn_local(async move {
            match api::delete_document(doc.id).await {
                Ok(()) => {
                    flash.success("El documento ha sido eliminado.");
                    load_data();
                }
                Err(e) => {
                    log::error!("delete document {} failed: {}", doc.id, e);
                    flash.error(e.user_message(DELETE_FAILED));
                }
            }
        });
    };

    let current_sort = Signal::derive(move || sort_field.get());
    let ascending = Signal::derive(move || sort_ascending.get());

    view! {
        <PageFrame page_id="documentos--list" category=PAGE_CAT_LIST title="Documentos">
            <div class="page__toolbar">
                <Badge>{move || items.get().len().to_string()}</Badge>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form_mode.set(FormMode::Create)
                >
                    "Crear Nuevo Documento"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Cargando..." } else { "Actualizar" }}
                </Button>
            </div>

            <FlashMessage flash=flash />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="ID" sort_field="id" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort min_width=60.0 />
                            <SortableHeaderCell label="Nombre" sort_field="nombre" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort min_width=180.0 />
                            <SortableHeaderCell label="URL" sort_field="url" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort min_width=200.0 />
                            <SortableHeaderCell label="Rol" sort_field="rol" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort />
                            <SortableHeaderCell label="Clase" sort_field="clase" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort />
                            <SortableHeaderCell label="Subregión" sort_field="subregion" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort min_width=140.0 />
                            <TableHeaderCell min_width=100.0>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|d| d.id
                            children=move |doc| {
                                let doc_for_edit = doc.clone();
                                let doc_for_delete = doc.clone();
                                let subregion = doc.id_subregion.map_or(UNKNOWN_LABEL, Subregion::label_for);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{doc.id.to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{doc.nombre.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <a href=doc.url.clone() target="_blank" rel="noopener noreferrer" title=doc.url.clone()>
                                                    {doc.url.clone()}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{Role::label_for(doc.id_rol)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{DocumentPage::label_for(doc.id_pagina)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{subregion}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| form_mode.set(FormMode::Edit(doc_for_edit.clone()))
                                            >
                                                "Editar"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| delete_doc(doc_for_delete.clone())
                                            >
                                                "Borrar"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            {move || {
                let document = match form_mode.get() {
                    FormMode::Closed => return None,
                    FormMode::Create => None,
                    FormMode::Edit(doc) => Some(doc),
                };
                let created = document.is_none();
                Some(view! {
                    <DocumentForm
                        document=document
                        on_close=move || form_mode.set(FormMode::Closed)
                        on_saved=move || {
                            form_mode.set(FormMode::Closed);
                            if created {
                                flash.success("El documento ha sido registrado.");
                            } else {
                                flash.success("Los datos del documento han sido actualizados.");
                            }
                            load_data();
                        }
                    />
                })
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: i64, nombre: &str, id_pagina: i32) -> Document {
        Document {
            id,
            nombre: nombre.into(),
            url: String::new(),
            id_rol: 2,
            id_pagina,
            id_subregion: Some(1),
        }
    }

    #[test]
    fn test_sort_documents() {
        let mut docs = vec![doc(1, "wms", 3), doc(2, "Agenda", 1), doc(3, "plan", 2)];
        sort_list(&mut docs, "nombre", true);
        assert_eq!(docs[0].nombre, "Agenda");

        sort_list(&mut docs, "clase", false);
        assert_eq!(docs.iter().map(|d| d.id_pagina).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_delete_prompt_names_document() {
        assert_eq!(
            delete_prompt(&doc(1, "WMS", 3)),
            "Se eliminará el documento 'WMS'. Esta acción no se puede revertir."
        );
    }
}
