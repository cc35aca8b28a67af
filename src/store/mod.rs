//! Site-specific scraping logic: category catalog, CSS selectors, HTML
//! parsing, and data models.

pub mod catalog;
pub mod models;
pub mod parser;
pub mod selectors;

pub use catalog::Category;
pub use models::Product;

use thiserror::Error;

/// Errors raised while turning a rendered listing into product records.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A product card is missing one of its required sub-elements.
    #[error("no element matching `{selector}` in product card")]
    MissingElement { selector: &'static str },

    /// A sub-element exists but lacks the attribute we read from it.
    #[error("element `{selector}` has no `{attr}` attribute")]
    MissingAttr { selector: &'static str, attr: &'static str },

    /// A sub-element's text could not be coerced to the field's type.
    #[error("could not parse {field} from {text:?}")]
    InvalidField { field: &'static str, text: String },

    /// The "load more" control was still visible after the configured
    /// maximum number of clicks.
    #[error("load-more control still visible after {clicks} clicks")]
    LoadMoreStuck { clicks: u32 },
}
