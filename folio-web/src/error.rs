//! Errors raised while wiring the page.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window`")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element #{0}")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongType { id: String, expected: &'static str },

    #[error("canvas #{0} has no 2d rendering context")]
    NoContext(String),

    #[error("copy command was rejected by the browser")]
    CopyRejected,

    /// A JS exception thrown by a DOM call
    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(error) => String::from(error.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        DomError::Js { context, message }
    }
}
