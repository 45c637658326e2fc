use gloo::events::EventListener;
use gloo_console::warn;
use thiserror::Error;
use web_sys::Element;

/// A region of the page whose content can be replaced wholesale.
pub trait Surface {
    /// Overwrites the whole content. `markup` is not escaped.
    fn set_content(&self, markup: &str);
}

/// Something a click handler can be attached to.
///
/// The handler stays attached for as long as the returned listener is alive.
pub trait Clickable {
    type Listener;

    fn on_click<F: FnMut() + 'static>(&self, handler: F) -> Self::Listener;
}

impl Surface for Element {
    fn set_content(&self, markup: &str) {
        self.set_inner_html(markup);
    }
}

impl Clickable for Element {
    type Listener = EventListener;

    fn on_click<F: FnMut() + 'static>(&self, mut handler: F) -> EventListener {
        EventListener::new(self, "click", move |_event| handler())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no document to look up '{0}' in")]
    NoDocument(String),
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
}

/// Resolves `selector` against the current document. `Ok(None)` if nothing matches.
pub fn lookup(selector: &str) -> Result<Option<Element>, LookupError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| LookupError::NoDocument(selector.to_string()))?;
    document
        .query_selector(selector)
        .map_err(|_| LookupError::InvalidSelector(selector.to_string()))
}

/// Like [`lookup`], but every failure counts as "not found".
///
/// A missing element is silent. Host failures are logged first.
pub fn query(selector: &str) -> Option<Element> {
    match lookup(selector) {
        Ok(element) => element,
        Err(err) => {
            warn!(format!("{}", err));
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_error_display() {
        assert_eq!(LookupError::InvalidSelector("##".to_string()).to_string(), "invalid selector '##'");
        assert_eq!(LookupError::NoDocument("#app".to_string()).to_string(), "no document to look up '#app' in");
    }

    #[test]
    fn mock_click_runs_every_handler() {
        use std::{cell::Cell, rc::Rc};

        let surface = mock::MockSurface::new();
        let hits = Rc::new(Cell::new(0));
        let _a = surface.on_click({
            let hits = hits.clone();
            move || hits.set(hits.get() + 1)
        });
        let _b = surface.on_click({
            let hits = hits.clone();
            move || hits.set(hits.get() + 10)
        });
        surface.click();
        assert_eq!(hits.get(), 11);
        assert_eq!(surface.handler_count(), 2);
    }
}
