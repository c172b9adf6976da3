pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;

pub use error::{Error, Result};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    macro_rules! console_log {
        ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
    }

    macro_rules! console_error {
        ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
    }

    mod gl;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or(crate::Error::MissingDom("window"))?;
        let document = window.document().ok_or(crate::Error::MissingDom("document"))?;
        let canvas = document
            .get_element_by_id("gl-canvas")
            .ok_or(crate::Error::MissingDom("canvas"))?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        if let Err(err) = render::start(canvas) {
            console_error!("startup failed: {:?}", err);
            return Err(err);
        }
        Ok(())
    }
}
