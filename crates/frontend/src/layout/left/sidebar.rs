//! Sidebar with one entry per dashboard section

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="app-sidebar__content">
            {Page::navigation().into_iter().map(|page| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == page
                        style:padding-left="12px"
                        on:click=move |_| ctx.navigate(page)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(page.icon())}
                            <span>{page.title()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
