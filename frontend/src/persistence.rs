use shared::limits::DEFAULT_TITLE;
use web_sys::{window, UrlSearchParams};

pub const OPTIONS_PARAM: &str = "options";
pub const TITLE_PARAM: &str = "title";

/// Raw query-parameter values as read from the address bar at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub options: Option<String>,
    pub title: Option<String>,
}

/// Reads the persisted wheel state from the current URL.
pub fn read() -> QueryState {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params = match UrlSearchParams::new_with_str(search.trim_start_matches('?')) {
        Ok(params) => params,
        Err(_) => return QueryState::default(),
    };
    QueryState {
        options: params.get(OPTIONS_PARAM),
        title: params.get(TITLE_PARAM),
    }
}

/// Writes the label list and title back to the URL with `replaceState`, so
/// the wheel survives a reload or can be shared as a link without touching
/// the browser history.
pub fn write(options_value: &str, title: &str) {
    let window = match window() {
        Some(window) => window,
        None => return,
    };
    let params = match UrlSearchParams::new() {
        Ok(params) => params,
        Err(_) => return,
    };
    if !options_value.is_empty() {
        params.set(OPTIONS_PARAM, options_value);
    }
    if !title.is_empty() && title != DEFAULT_TITLE {
        params.set(TITLE_PARAM, title);
    }
    let query = String::from(params.to_string());
    let pathname = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    let url = if query.is_empty() {
        pathname
    } else {
        format!("{}?{}", pathname, query)
    };
    if let Ok(history) = window.history() {
        if let Err(err) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::warn!("failed to persist wheel state to URL: {:?}", err);
        }
    }
}
