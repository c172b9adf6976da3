use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("circle resolution must be at least 5, got {0}")]
    InvalidResolution(usize),

    #[error("no {0} available")]
    MissingDom(&'static str),

    #[error("your browser doesn't support WebGL2")]
    ContextUnavailable,

    #[error("could not create {0}")]
    Allocation(&'static str),

    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    #[error("program link failed: {0}")]
    ProgramLink(String),

    #[error("attribute `{0}` not found in program")]
    MissingAttribute(&'static str),

    #[error("uniform `{0}` not found in program")]
    MissingUniform(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
