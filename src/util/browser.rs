//! Thin wrappers over `window` side effects.
//!
//! Each helper is a no-op outside the browser build so callers in shared
//! logic stay unconditional.

/// Navigate the whole page (`window.location.assign`).
pub fn assign_location(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().assign(url) {
                log::error!("browser: location.assign failed: {e:?}");
                if let Err(e) = window.location().set_href(url) {
                    log::error!("browser: location.href failed: {e:?}");
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("browser: would navigate to {url}");
    }
}

/// Current `location.pathname`, `None` outside the browser.
pub fn current_path() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        match web_sys::window()?.location().pathname() {
            Ok(path) => Some(path),
            Err(e) => {
                log::error!("browser: location.pathname failed: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("browser: alert failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("browser: alert: {message}");
    }
}
