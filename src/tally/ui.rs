use std::{cell::RefCell, fmt::Write, rc::Rc};

use web_sys::Element;

use crate::{
    counter::Counter,
    surface::{query, Clickable, Surface},
    wiring::wire_counter,
};

pub use crate::render::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub href: String,
    pub src: String,
    pub alt: String,
    pub class: String,
}

impl Logo {
    fn new(href: &str, src: &str, alt: &str, class: &str) -> Self {
        Self {
            href: href.to_string(),
            src: src.to_string(),
            alt: alt.to_string(),
            class: class.to_string(),
        }
    }
}

/// What goes into the page shell and where it is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub app_selector: String,
    pub counter_selector: String,
    pub logos: Vec<Logo>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Hello tally".to_string(),
            app_selector: "#app".to_string(),
            counter_selector: "#counter".to_string(),
            logos: vec![
                Logo::new("https://www.rust-lang.org/", "/rust.svg", "Rust logo", "logo"),
                Logo::new("https://webassembly.org/", "/wasm.svg", "WebAssembly logo", "logo wasm"),
            ],
        }
    }
}

impl PageConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Page shell markup. The title is inserted as is, without escaping.
pub fn shell_markup(config: &PageConfig) -> String {
    let mut links = String::new();
    for logo in &config.logos {
        // Writing to a String cannot fail.
        let _ = write!(
            links,
            r#"
      <a href="{}" target="_blank">
        <img src="{}" class="{}" alt="{}" />
      </a>"#,
            logo.href, logo.src, logo.class, logo.alt
        );
    }
    format!(
        r#"
    <div>
      <h1>{}</h1>{}
      <h1>Rust + WebAssembly</h1>
      <div class="card">
        <button id="counter" type="button"></button>
      </div>
      <p class="read-the-docs">
        Click on the Rust and WebAssembly logos to learn more
      </p>
    </div>
  "#,
        config.title, links
    )
}

/// Injects the page shell into the app element, if there is one.
pub fn render_content(config: &PageConfig) {
    render(query(&config.app_selector).as_ref(), &shell_markup(config));
}

/// A counter bound to one element, which is both its button and its display.
pub struct CounterWidget<E: Clickable> {
    counter: Rc<RefCell<Counter<E>>>,
    listener: Option<E::Listener>,
}

impl<E> CounterWidget<E>
where
    E: Surface + Clickable + Clone + 'static,
{
    /// Wires clicks on `element` and shows the initial `count is 0`.
    pub fn mount(element: Option<E>) -> Self {
        let counter = Rc::new(RefCell::new(Counter::new(element.clone())));
        let listener = wire_counter(element.as_ref(), &counter);
        counter.borrow_mut().set_counter(0);
        Self { counter, listener }
    }

    pub fn count(&self) -> i64 {
        self.counter.borrow().count()
    }

    pub fn is_wired(&self) -> bool {
        self.listener.is_some()
    }
}

impl CounterWidget<Element> {
    /// Keeps the click handler attached after the widget is dropped.
    pub fn forget(self) {
        if let Some(listener) = self.listener {
            listener.forget();
        }
    }
}

/// Mounts a counter on the counter element of the live document.
pub fn render_counter(config: &PageConfig) -> CounterWidget<Element> {
    CounterWidget::mount(query(&config.counter_selector))
}
