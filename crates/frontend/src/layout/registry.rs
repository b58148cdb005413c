//! Page registry: the one place that maps a page key to its view.

use leptos::prelude::*;

use crate::documents::ui::list::DocumentsListPage;
use crate::pages::{
    FacturacionPage, GestionPage, HomePage, IndicadoresPage, NominaPage, PlaneacionPage,
};
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::change_password::ChangePasswordPage;
use crate::system::pages::settings::SettingsPage;
use crate::system::users::ui::list::UsersListPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Planeacion,
    Indicadores,
    Gestion,
    Facturacion,
    Nomina,
    Settings,
    Users,
    Documents,
    ChangePassword,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![
            Page::Home,
            Page::Planeacion,
            Page::Indicadores,
            Page::Gestion,
            Page::Facturacion,
            Page::Nomina,
            Page::Settings,
            Page::Users,
            Page::Documents,
            Page::ChangePassword,
        ]
    }

    /// Pages listed in the sidebar, in order
    pub fn navigation() -> Vec<Page> {
        vec![
            Page::Home,
            Page::Planeacion,
            Page::Indicadores,
            Page::Gestion,
            Page::Facturacion,
            Page::Nomina,
        ]
    }

    /// Value carried in the `?page=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Planeacion => "planeacion",
            Page::Indicadores => "indicadores",
            Page::Gestion => "gestion",
            Page::Facturacion => "facturacion",
            Page::Nomina => "nomina",
            Page::Settings => "configuracion",
            Page::Users => "usuarios",
            Page::Documents => "documentos",
            Page::ChangePassword => "cambiar-contrasena",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Inicio",
            Page::Planeacion => "Planeación",
            Page::Indicadores => "Indicadores",
            Page::Gestion => "Gestión",
            Page::Facturacion => "Facturación",
            Page::Nomina => "Nómina",
            Page::Settings => "Opciones de Usuario",
            Page::Users => "Usuarios",
            Page::Documents => "Documentos",
            Page::ChangePassword => "Cambiar Contraseña",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Planeacion => "clipboard",
            Page::Indicadores => "bar-chart",
            Page::Gestion => "folder",
            Page::Facturacion => "dollar-sign",
            Page::Nomina => "users",
            Page::Settings => "settings",
            Page::Users => "user",
            Page::Documents => "file-text",
            Page::ChangePassword => "key",
        }
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, Page::Users | Page::Documents)
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Self::all().into_iter().find(|p| p.key() == key)
    }
}

fn page_content(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Planeacion => view! { <PlaneacionPage /> }.into_any(),
        Page::Indicadores => view! { <IndicadoresPage /> }.into_any(),
        Page::Gestion => view! { <GestionPage /> }.into_any(),
        Page::Facturacion => view! { <FacturacionPage /> }.into_any(),
        Page::Nomina => view! { <NominaPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
        Page::Users => view! { <UsersListPage /> }.into_any(),
        Page::Documents => view! { <DocumentsListPage /> }.into_any(),
        Page::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
    }
}

/// Renders the content of `page`, behind the admin guard when required
pub fn render_page(page: Page) -> AnyView {
    if page.admin_only() {
        view! { <RequireAdmin>{move || page_content(page)}</RequireAdmin> }.into_any()
    } else {
        page_content(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = Page::all().iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), Page::all().len());
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("a001_connection_1c"), None);
    }

    #[test]
    fn test_navigation_excludes_admin_pages() {
        let nav = Page::navigation();
        assert_eq!(nav.first(), Some(&Page::Home));
        assert!(nav.contains(&Page::Nomina));
        assert!(nav.iter().all(|p| !p.admin_only()));
    }
}
