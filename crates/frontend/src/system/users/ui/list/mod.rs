mod state;

use contracts::catalog::{Role, Subregion, UNKNOWN_LABEL};
use contracts::system::users::{UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::catalog_select::{catalog_options, parse_id, CatalogSelect};
use crate::shared::flash::{confirm, Flash, FlashMessage};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, sort_list, SortableHeaderCell, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::users::api;
use state::create_state;

const LOAD_FAILED: &str = "No se pudieron cargar los usuarios.";
const DELETE_FAILED: &str = "No se pudo eliminar el usuario.";
const UPDATE_FAILED: &str = "No se pudo actualizar el usuario.";

fn subregion_label(id: Option<i32>) -> &'static str {
    id.map_or(UNKNOWN_LABEL, Subregion::label_for)
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "nombre" => cmp_text(&self.nombre, &other.nombre),
            "usuario" => cmp_text(&self.usuario, &other.usuario),
            "rol" => Role::label_for(self.id_rol).cmp(Role::label_for(other.id_rol)),
            "subregion" => subregion_label(self.id_subregion).cmp(subregion_label(other.id_subregion)),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Case-insensitive match on nombre or usuario
pub fn matches_query(user: &User, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || user.nombre.to_lowercase().contains(&query)
        || user.usuario.to_lowercase().contains(&query)
}

pub fn delete_prompt(user: &User) -> String {
    format!(
        "Esta acción no se puede revertir. Se eliminará al usuario '{}'.",
        user.nombre
    )
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);
    let flash = Flash::new();

    let refresh_view = move || {
        let query = state.with_untracked(|s| s.search_query.clone());
        let mut data = all_users.get_untracked();
        data.retain(|u| matches_query(u, &query));
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.items = data;
        });
    };

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    all_users.set(data);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => {
                    log::error!("fetch users failed: {}", e);
                    flash.error(e.user_message(LOAD_FAILED));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());

    let apply_search = move || {
        state.update(|s| s.search_query = search_signal.get_untracked());
        refresh_view();
    };

    let toggle_sort = Callback::new(move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
        refresh_view();
    });

    let delete_user = move |user: User| {
        if !confirm(&delete_prompt(&user)) {
            return;
        }
        spawn_local(async move {
            match api::delete_user(user.id).await {
                Ok(()) => {
                    flash.success("El usuario ha sido eliminado.");
                    load_data();
                }
                Err(e) => {
                    log::error!("delete user {} failed: {}", user.id, e);
                    flash.error(e.user_message(DELETE_FAILED));
                }
            }
        });
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="usuarios--list" category=PAGE_CAT_LIST title="Usuarios">
            <div class="page__toolbar">
                <Badge>
                    {move || state.get().items.len().to_string()}
                </Badge>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| set_show_create_form.set(true)
                >
                    "Crear Nuevo Usuario"
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

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search_signal placeholder="Nombre o usuario..." />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                        "Buscar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            search_signal.set(String::new());
                            apply_search();
                        }
                    >
                        "Limpiar"
                    </Button>
                </Flex>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="ID" sort_field="id" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=60.0 />
                            <SortableHeaderCell label="Nombre" sort_field="nombre" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=160.0 />
                            <SortableHeaderCell label="Usuario" sort_field="usuario" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=140.0 />
                            <SortableHeaderCell label="Rol" sort_field="rol" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort />
                            <SortableHeaderCell label="Subregión" sort_field="subregion" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=140.0 />
                            <TableHeaderCell min_width=100.0>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || state.get().items
                            key=|u| u.id
                            children=move |user| {
                                let user_for_edit = user.clone();
                                let user_for_delete = user.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{user.id.to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{user.nombre.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{user.usuario.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if user.id_rol == Role::Administracion.id() {
                                                    view! { <span class="badge badge--warning">{Role::label_for(user.id_rol)}</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge--neutral">{Role::label_for(user.id_rol)}</span> }.into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{subregion_label(user.id_subregion)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| editing_user.set(Some(user_for_edit.clone()))
                                                attr:title="Editar"
                                            >
                                                "Editar"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| delete_user(user_for_delete.clone())
                                                attr:title="Borrar"
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

            {move || if show_create_form.get() {
                view! {
                    <super::details::CreateUserForm
                        on_close=move || set_show_create_form.set(false)
                        on_created=move || {
                            set_show_create_form.set(false);
                            flash.success("El usuario ha sido registrado.");
                            load_data();
                        }
                    />
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            {move || editing_user.get().map(|user| view! {
                <EditUserForm
                    user=user
                    on_close=move || editing_user.set(None)
                    on_saved=move || {
                        editing_user.set(None);
                        flash.success("Los datos del usuario han sido actualizados.");
                        load_data();
                    }
                />
            })}
        </PageFrame>
    }
}

#[component]
fn EditUserForm<F1, F2>(user: User, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let nombre = RwSignal::new(user.nombre.clone());
    let rol = RwSignal::new(user.id_rol.to_string());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Editar Usuario: {}", user.nombre);
    let user_id = user.id;

    let on_save = move |_| {
        let Some(id_rol) = parse_id(&rol.get()) else {
            set_error.set(Some("Seleccione un rol.".to_string()));
            return;
        };
        if nombre.get().trim().is_empty() {
            set_error.set(Some("El nombre es obligatorio.".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        let dto = UpdateUserDto {
            nombre: nombre.get().trim().to_string(),
            id_rol,
        };

        spawn_local(async move {
            match api::update_user(user_id, &dto).await {
                Ok(()) => on_saved(),
                Err(e) => {
                    log::error!("update user {} failed: {}", user_id, e);
                    set_error.set(Some(e.user_message(UPDATE_FAILED)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                    >
                        "×"
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Nombre"</Label>
                        <Input
                            value=nombre
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Rol"</Label>
                        <CatalogSelect
                            id="edit-rol"
                            options=catalog_options(Role::all(), Role::id, Role::display_name)
                            value=rol
                            placeholder="Selecciona un rol..."
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
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

    fn user(id: i64, nombre: &str, usuario: &str, id_rol: i32) -> User {
        User {
            id,
            nombre: nombre.into(),
            usuario: usuario.into(),
            id_rol,
            id_subregion: None,
        }
    }

    #[test]
    fn test_matches_query() {
        let u = user(1, "Ana Gómez", "agomez", 2);
        assert!(matches_query(&u, ""));
        assert!(matches_query(&u, "GÓMEZ"));
        assert!(matches_query(&u, "agom"));
        assert!(!matches_query(&u, "pedro"));
    }

    #[test]
    fn test_sort_by_role_label() {
        let mut users = vec![user(1, "a", "a", 4), user(2, "b", "b", 1), user(3, "c", "c", 2)];
        sort_list(&mut users, "rol", true);
        let roles: Vec<_> = users.iter().map(|u| Role::label_for(u.id_rol)).collect();
        assert_eq!(roles, vec!["Administración", "Coordinación", "Desarrollo"]);
    }

    #[test]
    fn test_delete_prompt_names_user() {
        let u = user(7, "Edison", "edison", 3);
        assert_eq!(
            delete_prompt(&u),
            "Esta acción no se puede revertir. Se eliminará al usuario 'Edison'."
        );
    }
}
