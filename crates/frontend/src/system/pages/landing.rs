//! Public page shown to signed-out visitors, with the way into the login form.

use std::collections::HashMap;

use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::PAGE_PARAM;
use crate::shared::icons::icon;

/// `?page=` value that opens the login form directly
pub const LOGIN_KEY: &str = "login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignedOutScreen {
    #[default]
    Landing,
    Login,
}

impl SignedOutScreen {
    pub fn from_query(search: &str) -> Self {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get(PAGE_PARAM).map(String::as_str) {
            Some(LOGIN_KEY) => Self::Login,
            _ => Self::Landing,
        }
    }
}

#[component]
pub fn LandingPage(on_login: Callback<()>) -> impl IntoView {
    view! {
        <div class="landing-page">
            <nav class="landing-page__nav">
                <h1>"Información"</h1>
                <div class="landing-page__login">
                    <span>"Ingresa"</span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_login.run(())
                    >
                        {icon("user")}
                    </Button>
                </div>
            </nav>

            <section class="landing-page__content">
                <h2>"Bienvenido a la sección de Información"</h2>
                <p>"Aquí encontrarás detalles relevantes y actualizaciones importantes."</p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_screen_from_query() {
        assert_eq!(SignedOutScreen::from_query(""), SignedOutScreen::Landing);
        assert_eq!(SignedOutScreen::from_query("?page=nomina"), SignedOutScreen::Landing);
        assert_eq!(SignedOutScreen::from_query("?page=login"), SignedOutScreen::Login);
    }
}
