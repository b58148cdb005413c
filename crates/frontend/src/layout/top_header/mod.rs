//! Application top bar: sidebar toggle, brand, user name, settings and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::Page;
use crate::shared::flash::confirm;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

const LOGOUT_PROMPT: &str = "¿Quieres cerrar la sesión?";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        if confirm(LOGOUT_PROMPT) {
            do_logout(set_auth_state);
            ctx.navigate(Page::Home);
        }
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Panel de Reportes"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Inicio" on:click=move |_| ctx.navigate(Page::Home)>
                    {icon("home")}
                </button>

                <button class="top-header__icon-btn" title="Opciones de Usuario" on:click=move |_| ctx.navigate(Page::Settings)>
                    {icon("settings")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_else(|| "Invitado".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
