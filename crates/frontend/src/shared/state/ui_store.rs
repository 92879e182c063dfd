//! UI preference store.
//!
//! Process-wide state with explicit init and mutation only through the
//! named setters below. Only the theme survives a reload; the sidebar
//! always starts open and the filter state is transient.

use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "bi-dashboard-theme";

/// Pages reachable from the sidebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Clients,
    Companies,
    Products,
    Pedidos,
    Facturas,
    ResumenVentas,
    Vendedores,
    AnalisisFinanciero,
}

impl Page {
    /// Key used in the URL query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Clients => "clientes",
            Page::Companies => "companias",
            Page::Products => "productos",
            Page::Pedidos => "pedidos",
            Page::Facturas => "ventas",
            Page::ResumenVentas => "resumen-ventas",
            Page::Vendedores => "vendedores",
            Page::AnalisisFinanciero => "analisis-financiero",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "clientes" => Page::Clients,
            "companias" => Page::Companies,
            "productos" => Page::Products,
            "pedidos" => Page::Pedidos,
            "ventas" => Page::Facturas,
            "resumen-ventas" => Page::ResumenVentas,
            "vendedores" => Page::Vendedores,
            "analisis-financiero" => Page::AnalisisFinanciero,
            _ => Page::Dashboard,
        }
    }

    /// Sidebar label.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Clients => "Clientes",
            Page::Companies => "Compañías",
            Page::Products => "Productos",
            Page::Pedidos => "Pedidos",
            Page::Facturas => "Gestión de Ventas",
            Page::ResumenVentas => "Resumen de Ventas",
            Page::Vendedores => "Vendedores",
            Page::AnalisisFinanciero => "Análisis Financiero",
        }
    }

    pub fn all() -> [Page; 9] {
        [
            Page::Dashboard,
            Page::Clients,
            Page::Companies,
            Page::Products,
            Page::Pedidos,
            Page::Facturas,
            Page::ResumenVentas,
            Page::Vendedores,
            Page::AnalisisFinanciero,
        ]
    }
}

fn load_dark_mode_from_storage() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| s == "dark")
        .unwrap_or(false)
}

fn save_dark_mode_to_storage(dark: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, if dark { "dark" } else { "light" });
    }
}

fn apply_theme(dark: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", if dark { "dark" } else { "light" });
    }
}

fn page_from_url() -> Page {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("page")
        .map(|p| Page::from_str(p))
        .unwrap_or_default()
}

/// UI preference context.
#[derive(Clone, Copy)]
pub struct UiStore {
    pub dark_mode: RwSignal<bool>,
    /// Transient on purpose: the sidebar always starts open.
    pub sidebar_open: RwSignal<bool>,
    pub selected_company: RwSignal<Option<i64>>,
    pub search_query: RwSignal<String>,
    pub active_page: RwSignal<Page>,
}

impl UiStore {
    pub fn new() -> Self {
        let dark = load_dark_mode_from_storage();
        apply_theme(dark);
        Self {
            dark_mode: RwSignal::new(dark),
            sidebar_open: RwSignal::new(true),
            selected_company: RwSignal::new(None),
            search_query: RwSignal::new(String::new()),
            active_page: RwSignal::new(page_from_url()),
        }
    }

    pub fn toggle_dark_mode(&self) {
        let dark = !self.dark_mode.get_untracked();
        self.dark_mode.set(dark);
        save_dark_mode_to_storage(dark);
        apply_theme(dark);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn set_selected_company(&self, company: Option<i64>) {
        self.selected_company.set(company);
    }

    pub fn set_search_query(&self, query: String) {
        self.search_query.set(query);
    }

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }

    /// Mirrors the active page into the URL query string so reloads and
    /// shared links land on the same page.
    pub fn init_router_integration(&self) {
        let this = *self;
        Effect::new(move |_| {
            let page = this.active_page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.as_str().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

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
}

/// Hook to use the UI store context.
pub fn use_ui() -> UiStore {
    use_context::<UiStore>().expect("UiStore not found. Wrap your app with App.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_round_trips_through_url_key() {
        for page in Page::all() {
            assert_eq!(Page::from_str(page.as_str()), page);
        }
    }

    #[test]
    fn unknown_page_key_falls_back_to_dashboard() {
        assert_eq!(Page::from_str("nope"), Page::Dashboard);
        assert_eq!(Page::from_str(""), Page::Dashboard);
    }
}
