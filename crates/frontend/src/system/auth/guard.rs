use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only for administrators
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                let state = auth_state.get();
                state.is_authenticated() && state.is_admin()
            }
            fallback=|| view! { <div class="alert alert--error">"Acceso denegado. Se requieren permisos de administrador."</div> }
        >
            {children()}
        </Show>
    }
}
