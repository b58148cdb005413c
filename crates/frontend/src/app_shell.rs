//! Auth gate and main layout.
//!
//! - `AppShell` shows the public landing page (or the login form for
//!   `?page=login`) until a session token exists
//! - `MainLayout` is the shell with the sidebar and the active page

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::registry::render_page;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::landing::{LandingPage, SignedOutScreen};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use web_sys::window;

/// Syncs the active page with `?page=` once, when created.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <div class="page-host">
                        {move || render_page(ctx.active.get())}
                    </div>
                }.into_any()
            }
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let screen = RwSignal::new(SignedOutScreen::from_query(&search));
    let open_login = Callback::new(move |_: ()| screen.set(SignedOutScreen::Login));

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=move || match screen.get() {
                SignedOutScreen::Landing => view! { <LandingPage on_login=open_login /> }.into_any(),
                SignedOutScreen::Login => view! { <LoginPage /> }.into_any(),
            }
        >
            <MainLayout />
        </Show>
    }
}
