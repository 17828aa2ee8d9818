//! Per-request UI state for the home page.
//!
//! Each toggle (mobile menu, cart drawer, FAQ accordion) is an independent
//! value carried in the query string. Links that flip one toggle keep the
//! others as they were.

use serde::Deserialize;

/// Query string value that marks a panel as open.
const OPEN: &str = "open";

/// Raw query parameters for `GET /`.
///
/// Every field is kept as text so a hand-edited link never fails the
/// request; values that don't parse leave their panel closed.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub cart: Option<String>,
    pub menu: Option<String>,
    pub faq: Option<String>,
}

/// Which panels are open on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub cart_open: bool,
    pub menu_open: bool,
    /// Index of the expanded FAQ entry, if any.
    pub faq_open: Option<usize>,
}

impl From<PageQuery> for PageState {
    fn from(query: PageQuery) -> Self {
        Self {
            cart_open: query.cart.as_deref() == Some(OPEN),
            menu_open: query.menu.as_deref() == Some(OPEN),
            faq_open: query.faq.as_deref().and_then(|faq| faq.parse().ok()),
        }
    }
}

impl PageState {
    /// The page with only the cart drawer open.
    #[must_use]
    pub const fn cart_open() -> Self {
        Self {
            cart_open: true,
            menu_open: false,
            faq_open: None,
        }
    }

    #[must_use]
    pub const fn with_cart(self, cart_open: bool) -> Self {
        Self { cart_open, ..self }
    }

    #[must_use]
    pub const fn with_menu(self, menu_open: bool) -> Self {
        Self { menu_open, ..self }
    }

    /// Expand FAQ `index`, or collapse it if it is already expanded.
    #[must_use]
    pub fn toggle_faq(self, index: usize) -> Self {
        let faq_open = if self.faq_open == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { faq_open, ..self }
    }

    /// Link to the home page in this state, scrolled to `anchor` when given.
    #[must_use]
    pub fn href(&self, anchor: Option<&str>) -> String {
        let mut params = Vec::new();
        if self.cart_open {
            params.push(format!("cart={OPEN}"));
        }
        if self.menu_open {
            params.push(format!("menu={OPEN}"));
        }
        if let Some(index) = self.faq_open {
            params.push(format!("faq={index}"));
        }

        let mut href = String::from("/");
        if !params.is_empty() {
            href.push('?');
            href.push_str(&params.join("&"));
        }
        if let Some(anchor) = anchor {
            href.push('#');
            href.push_str(anchor);
        }
        href
    }
}
