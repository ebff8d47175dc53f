//! Error types for the portfolio page

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A carousel or lightbox was handed an empty image list
    #[error("widget requires at least one image")]
    EmptyImageList,

    /// Theme preference file could not be read or written
    #[error("theme storage error: {0}")]
    ThemeStorage(#[from] std::io::Error),

    /// Theme preference file held something other than a theme flag
    #[error("theme serialization error: {0}")]
    ThemeSerialization(#[from] serde_json::Error),

    /// Theme flag held a value that is neither "light" nor "dark"
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Contact form rejected before submission
    #[error("invalid contact form: {0}")]
    InvalidContactForm(String),
}
