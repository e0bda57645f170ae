//! View handlers.
//!
//! Each page handler produces a fixed [`ViewDescriptor`] and hands it to the
//! template resolver. The descriptors take no input and never vary.

use axum::extract::State;
use axum::response::Html;

use factoid_core::contracts::http::views as view_contract;

use crate::error::HttpError;
use crate::state::AppState;
use crate::views::ViewDescriptor;

/// Descriptor for the abstract test page.
pub fn test_abstract_view() -> ViewDescriptor {
    ViewDescriptor::create(
        view_contract::TEST_ABSTRACT_VIEW,
        view_contract::TEST_ABSTRACT_TEMPLATE,
    )
}

/// Descriptor for the home page.
pub fn home_view() -> ViewDescriptor {
    ViewDescriptor::create(view_contract::HOME_VIEW, view_contract::HOME_TEMPLATE)
}

/// Render the abstract test page.
pub async fn test_abstract(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    state.views.render(&test_abstract_view()).await
}

/// Render the home page.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    state.views.render(&home_view()).await
}
