//! HTML parsing for rendered listing pages.

use crate::store::models::Product;
use crate::store::selectors;
use crate::store::ScrapeError;
use anyhow::Result;
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

/// Parses every product card in a listing-page snapshot, in document order.
///
/// The first card that fails to parse aborts the whole listing; there is no
/// partial-record fallback.
pub fn parse_listing(html: &str) -> Result<Vec<Product>> {
    let document = Html::parse_document(html);

    let mut products = Vec::new();
    for card in document.select(&selectors::CARD) {
        let product = parse_card(card)?;
        trace!("parsed product: {}", product.title);
        products.push(product);
    }

    debug!("parsed {} products", products.len());
    Ok(products)
}

/// Extracts one [`Product`] from a card element.
pub fn parse_card(card: ElementRef<'_>) -> Result<Product> {
    let title_el = sub_element(card, &selectors::TITLE, selectors::TITLE_CSS)?;
    let title = title_el
        .value()
        .attr(selectors::TITLE_ATTR)
        .ok_or(ScrapeError::MissingAttr {
            selector: selectors::TITLE_CSS,
            attr: selectors::TITLE_ATTR,
        })?
        .to_string();

    let price_text = element_text(sub_element(card, &selectors::PRICE, selectors::PRICE_CSS)?);
    let price = parse_price(&price_text)?;

    let description =
        element_text(sub_element(card, &selectors::DESCRIPTION, selectors::DESCRIPTION_CSS)?);

    let reviews_text =
        element_text(sub_element(card, &selectors::REVIEW_COUNT, selectors::REVIEW_COUNT_CSS)?);
    let num_of_reviews = parse_review_count(&reviews_text)?;

    let rating = card.select(&selectors::STAR).count() as u32;

    Ok(Product { title, description, price, rating, num_of_reviews })
}

fn sub_element<'a>(
    card: ElementRef<'a>,
    selector: &scraper::Selector,
    css: &'static str,
) -> Result<ElementRef<'a>, ScrapeError> {
    card.select(selector).next().ok_or(ScrapeError::MissingElement { selector: css })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Strips a leading currency symbol and parses the remainder as a decimal.
fn parse_price(text: &str) -> Result<f64, ScrapeError> {
    let amount = text.strip_prefix('$').unwrap_or(text);
    amount
        .parse()
        .map_err(|_| ScrapeError::InvalidField { field: "price", text: text.to_string() })
}

/// Parses the leading whitespace-delimited token, e.g. `"14 reviews"` -> 14.
fn parse_review_count(text: &str) -> Result<u32, ScrapeError> {
    let token = text.split_whitespace().next().ok_or_else(|| ScrapeError::InvalidField {
        field: "num_of_reviews",
        text: text.to_string(),
    })?;
    token
        .parse()
        .map_err(|_| ScrapeError::InvalidField { field: "num_of_reviews", text: text.to_string() })
}
