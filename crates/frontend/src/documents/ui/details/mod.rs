use contracts::catalog::{DocumentPage, Role, Subregion};
use contracts::documents::{Document, DocumentDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::documents::api;
use crate::shared::catalog_select::{catalog_options, parse_id, CatalogSelect};

const SAVE_FAILED: &str = "Ocurrió un error al guardar el documento.";

/// Raw form values, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFormValues {
    pub nombre: String,
    pub url: String,
    pub rol: String,
    pub pagina: String,
    pub subregion: String,
}

impl DocumentFormValues {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            nombre: doc.nombre.clone(),
            url: doc.url.clone(),
            rol: doc.id_rol.to_string(),
            pagina: doc.id_pagina.to_string(),
            subregion: doc.id_subregion.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    /// Every field is required
    pub fn to_dto(&self) -> Result<DocumentDto, &'static str> {
        let nombre = self.nombre.trim();
        let url = self.url.trim();
        if nombre.is_empty() || url.is_empty() {
            return Err("Por favor, rellena todos los campos.");
        }
        match (parse_id(&self.rol), parse_id(&self.pagina), parse_id(&self.subregion)) {
            (Some(id_rol), Some(id_pagina), Some(id_subregion)) => Ok(DocumentDto {
                nombre: nombre.to_string(),
                url: url.to_string(),
                id_rol,
                id_pagina,
                id_subregion,
            }),
            _ => Err("Por favor, rellena todos los campos."),
        }
    }
}

/// Create form when `document` is `None`, edit form otherwise
#[component]
pub fn DocumentForm<F1, F2>(
    document: Option<Document>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let initial = document
        .as_ref()
        .map(DocumentFormValues::from_document)
        .unwrap_or_default();
    let editing_id = document.as_ref().map(|d| d.id);
    let title = match &document {
        Some(doc) => format!("Editar Documento: {}", doc.nombre),
        None => "Crear Nuevo Documento".to_string(),
    };

    let nombre = RwSignal::new(initial.nombre);
    let url = RwSignal::new(initial.url);
    let rol = RwSignal::new(initial.rol);
    let pagina = RwSignal::new(initial.pagina);
    let subregion = RwSignal::new(initial.subregion);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let values = DocumentFormValues {
            nombre: nombre.get(),
            url: url.get(),
            rol: rol.get(),
            pagina: pagina.get(),
            subregion: subregion.get(),
        };
        let dto = match values.to_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                set_error.set(Some(msg.to_string()));
                return;
            }
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_document(id, &dto).await,
                None => api::create_document(&dto).await,
            };
            match result {
                Ok(()) => on_saved(),
                Err(e) => {
                    log::error!("save document failed: {}", e);
                    set_error.set(Some(e.user_message(SAVE_FAILED)));
                    set_saving.set(false);
                }
            }
        });
    };

    let busy = Signal::derive(move || saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        "×"
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Nombre de documento"</Label>
                        <Input value=nombre placeholder="Escribe el nombre del documento" disabled=busy />
                    </div>

                    <div class="form__group">
                        <Label>"URL"</Label>
                        <Input value=url placeholder="Escribe el link del documento" disabled=busy />
                    </div>

                    <div class="form__group">
                        <Label>"Visible para Rol"</Label>
                        <CatalogSelect
                            id="doc-rol"
                            options=catalog_options(Role::all(), Role::id, Role::display_name)
                            value=rol
                            placeholder="Selecciona un rol"
                            disabled=busy
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Pestaña"</Label>
                        <CatalogSelect
                            id="doc-pagina"
                            options=catalog_options(DocumentPage::all(), DocumentPage::id, DocumentPage::display_name)
                            value=pagina
                            placeholder="Selecciona una pestaña"
                            disabled=busy
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Subregión"</Label>
                        <CatalogSelect
                            id="doc-subregion"
                            options=catalog_options(Subregion::all(), Subregion::id, Subregion::display_name)
                            value=subregion
                            placeholder="Selecciona una subregión"
                            disabled=busy
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close() disabled=busy>
                        "Cancelar"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=busy>
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> DocumentFormValues {
        DocumentFormValues {
            nombre: " Plan de Operaciones ".into(),
            url: "https://example.org/plan".into(),
            rol: "2".into(),
            pagina: "1".into(),
            subregion: "5".into(),
        }
    }

    #[test]
    fn test_to_dto() {
        let dto = values().to_dto().unwrap();
        assert_eq!(dto.nombre, "Plan de Operaciones");
        assert_eq!((dto.id_rol, dto.id_pagina, dto.id_subregion), (2, 1, 5));
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut v = values();
        v.subregion.clear();
        assert!(v.to_dto().is_err());

        let mut v = values();
        v.url = "   ".into();
        assert!(v.to_dto().is_err());
    }

    #[test]
    fn test_values_from_document() {
        let doc = Document {
            id: 9,
            nombre: "WMS".into(),
            url: "https://example.org/wms".into(),
            id_rol: 4,
            id_pagina: 3,
            id_subregion: None,
        };
        let v = DocumentFormValues::from_document(&doc);
        assert_eq!(v.rol, "4");
        assert_eq!(v.subregion, "");
        assert!(v.to_dto().is_err());
    }
}
