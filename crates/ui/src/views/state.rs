use thiserror::Error;

/// Failures raised while driving the webview from a view.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewError {
    #[error("The media player did not respond: {0}")]
    Script(String),
}
