use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::flash::Flash;
use crate::system::auth::context::{do_login, use_auth};

pub const WELCOME_MESSAGE: &str = "¡Bienvenido! Has iniciado sesión correctamente.";
const LOGIN_FAILED: &str = "No se pudo iniciar sesión. Verifique sus credenciales.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (usuario, set_usuario) = signal(String::new());
    let (contrasena, set_contrasena) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let flash = use_context::<Flash>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let usuario_val = usuario.get();
        let contrasena_val = contrasena.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(set_auth_state, usuario_val, contrasena_val).await {
                Ok(()) => {
                    if let Some(flash) = flash {
                        flash.success(WELCOME_MESSAGE);
                    }
                }
                Err(e) => {
                    log::error!("login failed: {}", e);
                    set_error_message.set(Some(e.user_message(LOGIN_FAILED)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Panel de Reportes"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="usuario">"Usuario"</label>
                        <input
                            type="text"
                            id="usuario"
                            prop:value=move || usuario.get()
                            on:input=move |ev| set_usuario.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="contrasena">"Contraseña"</label>
                        <input
                            type="password"
                            id="contrasena"
                            prop:value=move || contrasena.get()
                            on:input=move |ev| set_contrasena.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
