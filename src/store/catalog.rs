//! The fixed category catalog of the demo site.

use std::fmt;

/// Base URL all category paths are appended to.
pub const BASE_URL: &str = "https://webscraper.io/test-sites/e-commerce/more/";

/// The six product categories, in crawl order. Each maps to one output CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Home,
    Computers,
    Laptops,
    Tablets,
    Phones,
    Touch,
}

impl Category {
    /// Returns the catalog name, used as the output filename stem.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Home => "home",
            Category::Computers => "computers",
            Category::Laptops => "laptops",
            Category::Tablets => "tablets",
            Category::Phones => "phones",
            Category::Touch => "touch",
        }
    }

    /// Returns the URL path segment under [`BASE_URL`].
    pub fn path(&self) -> &'static str {
        match self {
            Category::Home => "",
            Category::Computers => "computers",
            Category::Laptops => "computers/laptops",
            Category::Tablets => "computers/tablets",
            Category::Phones => "phones",
            Category::Touch => "phones/touch",
        }
    }

    /// Returns the full listing-page URL for this category.
    pub fn url(&self) -> String {
        format!("{}{}", BASE_URL, self.path())
    }

    /// Returns the output filename for this category.
    pub fn csv_name(&self) -> String {
        format!("{}.csv", self.name())
    }

    /// Returns all categories in crawl order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Home,
            Category::Computers,
            Category::Laptops,
            Category::Tablets,
            Category::Phones,
            Category::Touch,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
