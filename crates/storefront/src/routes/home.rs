//! Home page route handler.
//!
//! The whole site is one page. Its panels (mobile menu, cart drawer, FAQ
//! accordion) are driven by [`PageState`] from the query string, so every
//! toggle is a plain link and works without JavaScript.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use border3d_core::Notification;
use tower_sessions::Session;
use tracing::instrument;

use crate::content::{self, NavLink, ServiceCategory};
use crate::error::Result;
use crate::filters;
use crate::middleware::CspNonce;
use crate::models::{PageQuery, PageState};
use crate::routes::cart::CartView;
use crate::services::{SessionCart, notifications};
use crate::state::AppState;

// =============================================================================
// View Models
// =============================================================================

/// Navigation bar state and links.
#[derive(Clone)]
pub struct NavView {
    pub links: Vec<NavLink>,
    pub menu_open: bool,
    pub menu_toggle_href: String,
    pub cart_open_href: String,
    pub cart_count: u64,
}

/// Featured product card.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub category: String,
    /// e.g. "From $2.25 USD"
    pub price_label: String,
}

/// Portfolio gallery tile.
#[derive(Clone)]
pub struct PortfolioView {
    pub id: i32,
    pub name: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub price_label: String,
}

/// "How It Works" step with its position.
#[derive(Clone)]
pub struct StepView {
    pub number: usize,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub is_last: bool,
}

/// Testimonial card.
#[derive(Clone)]
pub struct ReviewView {
    pub name: &'static str,
    pub headline: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub stars: String,
}

/// FAQ accordion entry.
#[derive(Clone)]
pub struct FaqView {
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
    pub toggle_href: String,
}

/// Full home page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nonce: String,
    pub announcement: &'static str,
    pub nav: NavView,
    pub categories: Vec<ServiceCategory>,
    pub portfolio: Vec<PortfolioView>,
    pub steps: Vec<StepView>,
    pub products: Vec<ProductCardView>,
    pub reviews: Vec<ReviewView>,
    pub faqs: Vec<FaqView>,
    pub footer_quick_links: Vec<NavLink>,
    pub footer_support_links: Vec<&'static str>,
    pub cart: CartView,
    pub cart_open: bool,
    pub cart_close_href: String,
    pub toasts: Vec<Notification>,
}

impl HomeTemplate {
    /// Build the page for `page` state from the catalog and the visitor's cart.
    #[must_use]
    pub fn build(
        state: &AppState,
        page: PageState,
        cart: CartView,
        toasts: Vec<Notification>,
        nonce: String,
    ) -> Self {
        let catalog = state.catalog();

        let nav = NavView {
            links: catalog.nav_links.clone(),
            menu_open: page.menu_open,
            menu_toggle_href: page.with_menu(!page.menu_open).href(None),
            cart_open_href: page.with_cart(true).href(Some("cart")),
            cart_count: cart.item_count,
        };

        let products = catalog
            .products
            .iter()
            .map(|product| ProductCardView {
                id: product.id.as_i32(),
                name: product.name.clone(),
                image: product.image.clone(),
                category: product.category.clone(),
                price_label: format!("From {}", product.price.display_with_code()),
            })
            .collect();

        let portfolio = catalog
            .portfolio
            .iter()
            .map(|item| PortfolioView {
                id: item.id.as_i32(),
                name: item.name,
                image: item.image,
                category: item.category,
                price_label: item.price.display_with_code(),
            })
            .collect();

        let step_count = catalog.steps.len();
        let steps = catalog
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| StepView {
                number: index + 1,
                icon: step.icon,
                title: step.title,
                description: step.description,
                is_last: index + 1 == step_count,
            })
            .collect();

        let reviews = catalog
            .reviews
            .iter()
            .map(|review| ReviewView {
                name: review.name,
                headline: review.headline,
                text: review.text,
                rating: review.rating,
                stars: "★".repeat(usize::from(review.rating)),
            })
            .collect();

        let faqs = catalog
            .faqs
            .iter()
            .enumerate()
            .map(|(index, faq)| FaqView {
                question: faq.question,
                answer: faq.answer,
                open: page.faq_open == Some(index),
                toggle_href: page.toggle_faq(index).href(Some("faq")),
            })
            .collect();

        Self {
            nonce,
            announcement: content::ANNOUNCEMENT,
            nav,
            categories: catalog.categories.clone(),
            portfolio,
            steps,
            products,
            reviews,
            faqs,
            footer_quick_links: catalog.footer_quick_links.clone(),
            footer_support_links: catalog.footer_support_links.clone(),
            cart,
            cart_open: page.cart_open,
            cart_close_href: page.with_cart(false).href(None),
            toasts,
        }
    }
}

/// Display the home page.
///
/// Queued notifications are taken from the session and shown once.
#[instrument(skip(state, session, nonce))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
    Query(query): Query<PageQuery>,
) -> Result<HomeTemplate> {
    let page = PageState::from(query);
    let cart = SessionCart::new(&session).load().await?;
    let toasts = notifications::take(&session).await?;

    Ok(HomeTemplate::build(
        &state,
        page,
        CartView::from(&cart),
        toasts,
        nonce,
    ))
}
