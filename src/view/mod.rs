//! Page models for the two surfaces: the landing highlight section and the
//! portfolio listing. Each model is plain data handed to the templates in
//! [`crate::render`].

pub mod card;
pub mod highlight;
pub mod listing;
pub mod session;
pub mod state;

use serde::Serialize;

pub use card::{Card, CardAction, DetailPanel, DetailSection};
pub use highlight::{HighlightSection, LandingPage};
pub use listing::{ListingPage, ListingView};
pub use session::Session;
pub use state::ViewState;

/// Labelled link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkButton {
    pub label: String,
    pub href: String,
}
