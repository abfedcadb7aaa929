// folio-ui/src/viewport_port.rs
//! DOM-backed implementation of the viewport port.

use folio_core::{FolioError, Result, ViewportPort};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

/// Browser window as seen by the showcase.
#[derive(Clone, Debug)]
pub struct BrowserViewport {
    window: Option<Window>,
}

impl BrowserViewport {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }

    fn window(&self) -> Result<&Window> {
        self.window
            .as_ref()
            .ok_or_else(|| FolioError::ViewportUnavailable("no window".to_string()))
    }

    /// Logical cores reported by the navigator, if the API exists.
    pub fn reported_cores(&self) -> Option<u32> {
        let window = self.window.as_ref()?;
        let navigator = window.navigator();
        let supported =
            js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("hardwareConcurrency"))
                .unwrap_or(false);
        if !supported {
            return None;
        }
        cores_from_report(navigator.hardware_concurrency())
    }
}

impl Default for BrowserViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportPort for BrowserViewport {
    fn width(&self) -> Result<f64> {
        self.window()?
            .inner_width()
            .map_err(|e| js_error("innerWidth", e))?
            .as_f64()
            .ok_or_else(|| FolioError::ViewportUnavailable("innerWidth is not a number".to_string()))
    }

    fn element_top_offset(&self, id: &str) -> Result<f64> {
        let window = self.window()?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::ViewportUnavailable("no document".to_string()))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| FolioError::ElementNotFound(id.to_string()))?;
        let scroll_y = window.scroll_y().map_err(|e| js_error("scrollY", e))?;
        Ok(element.get_bounding_client_rect().top() + scroll_y)
    }

    fn scroll_to(&self, offset: f64, animated: bool) -> Result<()> {
        let window = self.window()?;
        let has_scroll = js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("scrollTo"))
            .unwrap_or(false);
        if !has_scroll {
            return Err(FolioError::ViewportUnavailable("window.scrollTo".to_string()));
        }

        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(if animated {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}

fn js_error(what: &str, value: JsValue) -> FolioError {
    FolioError::ViewportUnavailable(format!("{}: {:?}", what, value))
}

/// `navigator.hardwareConcurrency` is 0 or missing on browsers that hide it.
fn cores_from_report(reported: f64) -> Option<u32> {
    if reported.is_finite() && reported >= 1.0 {
        Some(reported as u32)
    } else {
        None
    }
}


#[cfg(test)]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn width_is_positive() {
        let width = BrowserViewport::new().width().unwrap();
        assert!(width > 0.0);
    }

    #[wasm_bindgen_test]
    fn missing_element_is_reported() {
        let result = BrowserViewport::new().element_top_offset("folio-no-such-element");
        assert_eq!(
            result,
            Err(FolioError::ElementNotFound("folio-no-such-element".to_string()))
        );
    }

    #[wasm_bindgen_test]
    fn element_offset_includes_scroll_position() {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_id("folio-offset-probe");
        document.body().unwrap().append_child(&element).unwrap();

        let viewport = BrowserViewport::new();
        let top = viewport.element_top_offset("folio-offset-probe").unwrap();
        assert!(top >= 0.0);

        element.remove();
    }

    #[wasm_bindgen_test]
    fn instant_scroll_is_accepted() {
        assert!(BrowserViewport::new().scroll_to(0.0, false).is_ok());
    }
}
