use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::flash::{Flash, FlashMessage};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // App-wide alert, used for messages that outlive the page that raised them
    let flash = Flash::new();
    provide_context(flash);

    view! {
        <AuthProvider>
            <div class="app-flash">
                <FlashMessage flash=flash />
            </div>
            <AppShell />
        </AuthProvider>
    }
}
