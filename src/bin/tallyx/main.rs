use gloo_console::log;
use tally::ui::{render_content, render_counter, PageConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = PageConfig::default();
    log!(format!("tally: mounting into {}", config.app_selector));

    render_content(&config);
    // The handler has to outlive main, the page keeps running after it returns.
    render_counter(&config).forget();
}
