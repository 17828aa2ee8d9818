//! Contact handlers: newsletter signup and quote requests.
//!
//! Neither has a backing service yet: a valid signup is logged and
//! acknowledged, and quote requests announce that the form is coming.

use axum::{Form, response::Redirect};
use border3d_core::{Email, Notification};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::services::notifications;

const SUBSCRIBED_MESSAGE: &str = "Subscribed successfully!";
const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
const QUOTE_MESSAGE: &str = "Quote form coming soon!";

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub email: String,
}

/// Quote request form data. `section` is the page section to return to.
#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    pub section: Option<String>,
}

/// Subscribe to the newsletter.
#[instrument(skip(session, form))]
pub async fn subscribe(session: Session, Form(form): Form<SubscribeForm>) -> Result<Redirect> {
    let notification = match Email::parse(&form.email) {
        Ok(email) => {
            tracing::info!(domain = %email.domain(), "Newsletter subscription");
            Notification::success(SUBSCRIBED_MESSAGE)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected newsletter email");
            Notification::error(INVALID_EMAIL_MESSAGE)
        }
    };

    notifications::push(&session, notification).await?;
    Ok(Redirect::to("/#newsletter"))
}

/// Request a custom quote.
#[instrument(skip(session))]
pub async fn request_quote(session: Session, Form(form): Form<QuoteForm>) -> Result<Redirect> {
    notifications::push(&session, Notification::info(QUOTE_MESSAGE)).await?;
    Ok(Redirect::to(&quote_return_href(form.section.as_deref())))
}

/// Return anchor for a quote request. Only known sections are honoured.
fn quote_return_href(section: Option<&str>) -> String {
    let anchor = match section {
        Some("contact") => "contact",
        _ => "quote",
    };
    format!("/#{anchor}")
}
