use contracts::system::users::ChangePasswordDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::registry::Page;
use crate::shared::flash::{Flash, FlashMessage};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::api;

const MIN_PASSWORD_LEN: usize = 6;
const UPDATE_FAILED: &str = "No se pudo actualizar la contraseña. Intenta de nuevo.";

/// Checks the form before anything is sent
pub fn validate_change(
    actual: &str,
    nueva: &str,
    confirmacion: &str,
) -> Result<ChangePasswordDto, &'static str> {
    if actual.is_empty() || nueva.is_empty() || confirmacion.is_empty() {
        return Err("Por favor, rellena todos los campos.");
    }
    if nueva != confirmacion {
        return Err("Las nuevas contraseñas no coinciden.");
    }
    if nueva.chars().count() < MIN_PASSWORD_LEN {
        return Err("La nueva contraseña debe tener al menos 6 caracteres.");
    }
    Ok(ChangePasswordDto {
        contrasena_actual: actual.to_string(),
        nueva_contrasena: nueva.to_string(),
    })
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let (actual, set_actual) = signal(String::new());
    let (nueva, set_nueva) = signal(String::new());
    let (confirmacion, set_confirmacion) = signal(String::new());
    let (is_saving, set_is_saving) = signal(false);
    let flash = Flash::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = match validate_change(&actual.get(), &nueva.get(), &confirmacion.get()) {
            Ok(dto) => dto,
            Err(msg) => {
                flash.error(msg);
                return;
            }
        };

        set_is_saving.set(true);
        spawn_local(async move {
            match api::change_password(&dto).await {
                Ok(()) => {
                    flash.success("Tu contraseña ha sido actualizada.");
                    set_actual.set(String::new());
                    set_nueva.set(String::new());
                    set_confirmacion.set(String::new());
                }
                Err(e) => {
                    log::error!("change password failed: {}", e);
                    flash.error(e.user_message(UPDATE_FAILED));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="cambiar-contrasena--system" category=PAGE_CAT_SYSTEM title=Page::ChangePassword.title()>
            <FlashMessage flash=flash />
            <form class="form-change-password" on:submit=on_submit>
                <div class="form-group">
                    <label for="currentPassword">"Contraseña Actual"</label>
                    <input
                        type="password"
                        id="currentPassword"
                        prop:value=move || actual.get()
                        on:input=move |ev| set_actual.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>
                <div class="form-group">
                    <label for="newPassword">"Nueva Contraseña"</label>
                    <input
                        type="password"
                        id="newPassword"
                        prop:value=move || nueva.get()
                        on:input=move |ev| set_nueva.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>
                <div class="form-group">
                    <label for="confirmPassword">"Confirmar Nueva Contraseña"</label>
                    <input
                        type="password"
                        id="confirmPassword"
                        prop:value=move || confirmacion.get()
                        on:input=move |ev| set_confirmacion.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Actualizando..." } else { "Actualizar Contraseña" }}
                </button>
            </form>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_change() {
        assert_eq!(validate_change("", "abcdef", "abcdef").unwrap_err(), "Por favor, rellena todos los campos.");
        assert_eq!(validate_change("old", "abcdef", "abcdeg").unwrap_err(), "Las nuevas contraseñas no coinciden.");
        assert!(validate_change("old", "abc", "abc").is_err());

        let dto = validate_change("old", "ñandú1", "ñandú1").unwrap();
        assert_eq!(dto.contrasena_actual, "old");
        assert_eq!(dto.nueva_contrasena, "ñandú1");
    }
}
