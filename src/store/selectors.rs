//! CSS selectors for the demo site's listing pages.
//!
//! Everything that ties the crawler to the site's DOM lives here. Update this
//! file when the site changes its markup.

use scraper::Selector;
use std::sync::LazyLock;

/// Cookie-consent accept button, clicked in the live page.
pub const COOKIE_ACCEPT: &str = ".acceptCookies";

/// "Load more" control appending cards to the listing. The class name carries
/// the site's own misspelling.
pub const LOAD_MORE: &str = ".ecomerce-items-scroll-more";

/// Product card container.
pub const CARD_CSS: &str = ".thumbnail";
pub static CARD: LazyLock<Selector> = LazyLock::new(|| Selector::parse(CARD_CSS).unwrap());

/// Title link inside a card; the full title is in its `title` attribute, the
/// visible text is truncated.
pub const TITLE_CSS: &str = ".caption .title";
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(TITLE_CSS).unwrap());

/// Attribute of [`TITLE`] holding the untruncated product title.
pub const TITLE_ATTR: &str = "title";

/// Price element, text like `$295.99`.
pub const PRICE_CSS: &str = ".caption .price";
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(PRICE_CSS).unwrap());

/// Product description paragraph.
pub const DESCRIPTION_CSS: &str = ".description";
pub static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(DESCRIPTION_CSS).unwrap());

/// Review-count paragraph, text like `14 reviews`. First `p` under `.ratings`
/// in document order.
pub const REVIEW_COUNT_CSS: &str = ".ratings p";
pub static REVIEW_COUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(REVIEW_COUNT_CSS).unwrap());

/// One filled star icon; the rating is the number of matches per card.
pub const STAR_CSS: &str = ".ratings .glyphicon-star";
pub static STAR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(STAR_CSS).unwrap());
