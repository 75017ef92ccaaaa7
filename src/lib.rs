pub mod application;
pub mod domain;
#[cfg(target_arch = "wasm32")]
pub mod infrastructure;
#[cfg(target_arch = "wasm32")]
pub mod presentation;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Initialize the module when loaded in the browser
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Wire the browser console into the domain logging facade
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    domain::logging::get_logger().info(
        domain::logging::LogComponent::Presentation("Initialize"),
        "🚀 Stock dashboard module initialized",
    );
}
