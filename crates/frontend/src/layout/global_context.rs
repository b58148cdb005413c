use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::registry::Page;

pub const PAGE_PARAM: &str = "page";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Selects the page named in `?page=` and keeps the query in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(PAGE_PARAM).and_then(|key| Page::from_key(key))
}

pub fn query_for(page: Page) -> String {
    let query = HashMap::from([(PAGE_PARAM.to_string(), page.key().to_string())]);
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query() {
        assert_eq!(query_for(Page::Nomina), "?page=nomina");
        assert_eq!(page_from_query("?page=facturacion"), Some(Page::Facturacion));
        assert_eq!(page_from_query("?page=unknown"), None);
        assert_eq!(page_from_query(""), None);
    }
}
