use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::Page;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let greeting = move || {
        auth_state
            .get()
            .user
            .map(|u| format!("Hola, {}", u.display_name()))
            .unwrap_or_else(|| "Hola".to_string())
    };

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_DASHBOARD title="Inicio">
            <p class="home__greeting">{greeting}</p>
            <div class="home__grid">
                {Page::navigation().into_iter().filter(|p| *p != Page::Home).map(|page| view! {
                    <button class="home__card" on:click=move |_| ctx.navigate(page)>
                        {icon(page.icon())}
                        <span>{page.title()}</span>
                    </button>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}
