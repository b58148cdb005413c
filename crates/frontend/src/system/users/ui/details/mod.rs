use contracts::catalog::Role;
use contracts::system::users::CreateUserDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::catalog_select::{catalog_options, parse_id, CatalogSelect};
use crate::system::users::api;

const CREATE_FAILED: &str = "Ocurrió un error al crear el usuario.";

/// Builds the create request; every field is required
pub fn build_create_dto(
    nombre: &str,
    contrasena: &str,
    rol: &str,
) -> Result<CreateUserDto, &'static str> {
    let nombre = nombre.trim();
    match (nombre.is_empty(), contrasena.is_empty(), parse_id(rol)) {
        (false, false, Some(id_rol)) => Ok(CreateUserDto {
            nombre: nombre.to_string(),
            contrasena: contrasena.to_string(),
            id_rol,
        }),
        _ => Err("Por favor, rellena todos los campos."),
    }
}

#[component]
pub fn CreateUserForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy,
    F2: Fn() + 'static + Copy,
{
    let (nombre, set_nombre) = signal(String::new());
    let (contrasena, set_contrasena) = signal(String::new());
    let rol = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = match build_create_dto(&nombre.get(), &contrasena.get(), &rol.get()) {
            Ok(dto) => dto,
            Err(msg) => {
                set_error_message.set(Some(msg.to_string()));
                return;
            }
        };

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::create_user(&dto).await {
                Ok(()) => {
                    log::info!("user '{}' created", dto.nombre);
                    on_created();
                }
                Err(e) => {
                    log::error!("create user failed: {}", e);
                    set_error_message.set(Some(e.user_message(CREATE_FAILED)));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Crear Nuevo Usuario"</h3>
                    <button class="btn-close" on:click=move |_| on_close()>"×"</button>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="nombre">"Nombre de usuario"</label>
                        <input
                            type="text"
                            id="nombre"
                            placeholder="Escribe el nombre de usuario"
                            prop:value=move || nombre.get()
                            on:input=move |ev| set_nombre.set(event_target_value(&ev))
                            disabled=move || is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Escribe una contraseña temporal"
                            prop:value=move || contrasena.get()
                            on:input=move |ev| set_contrasena.set(event_target_value(&ev))
                            disabled=move || is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="rol">"Rol de usuario"</label>
                        <CatalogSelect
                            id="rol"
                            options=catalog_options(Role::all(), Role::id, Role::display_name)
                            value=rol
                            placeholder="Selecciona un rol..."
                            disabled=Signal::derive(move || is_saving.get())
                        />
                    </div>

                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=move |_| on_close()
                            disabled=move || is_saving.get()
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_saving.get()
                        >
                            {move || if is_saving.get() { "Creando..." } else { "Crear Usuario" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_create_dto() {
        let dto = build_create_dto("  Edison ", "temporal", "3").unwrap();
        assert_eq!(dto.nombre, "Edison");
        assert_eq!(dto.id_rol, 3);

        assert!(build_create_dto("", "temporal", "3").is_err());
        assert!(build_create_dto("Edison", "", "3").is_err());
        assert!(build_create_dto("Edison", "temporal", "").is_err());
    }
}
