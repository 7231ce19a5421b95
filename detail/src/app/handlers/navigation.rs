//! # Navigation Handlers
//!
//! Back button and header card: both return the login to the caller and close.

use crate::app::state::{ScreenResult, RESULT_CODE_SELECTED};
use crate::app::DetailScreen;

/// Affordance that closed the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseReason {
    Back,
    Card,
}

/// Deliver `{user_key → login}` to the caller and tear the screen down.
///
/// Internal handler function - use [`DetailScreen::on_close`] or
/// [`DetailScreen::on_card_click`] instead. Calling it again after the screen
/// is gone returns the stored result without notifying the presenter twice.
pub(crate) fn finish(screen: &mut DetailScreen, reason: CloseReason) -> ScreenResult {
    if let Some(result) = screen.state.read().result.clone() {
        tracing::debug!(reason = ?reason, "Screen already finished");
        return result;
    }

    let result = {
        let mut state = screen.state.write();
        let result = ScreenResult {
            code: RESULT_CODE_SELECTED,
            key: screen.view_model.preference_user_key_name().to_string(),
            identifier: state.identifier.clone(),
        };
        state.result = Some(result.clone());
        result
    };

    tracing::info!(
        reason = ?reason,
        key = %result.key,
        login = %result.identifier,
        "Closing detail screen with result"
    );

    screen.presenter.finish_with_result(result.clone());
    screen.on_destroy();
    result
}
