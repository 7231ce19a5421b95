//! # Service Traits
//!
//! Collaborators the screen depends on, injected through constructors so tests
//! can substitute fakes.

use crate::app::state::{AttributeRow, ProfileEntity, ProfileHeader, ScreenResult};
use crate::services::image::{LoadedImage, RequestOptions};
use async_trait::async_trait;

/// Data-access collaborator for user profiles.
///
/// At most one call is in flight per screen instance. Errors are
/// human-readable and are shown to the user as-is.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch the full profile for `login`.
    async fn fetch_user(&self, login: &str) -> Result<ProfileEntity, String>;
}

/// Image-loading collaborator: fetch, decode and transform one image.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Load `source` applying `options`. Errors are descriptive strings.
    async fn load(&self, source: &str, options: &RequestOptions) -> Result<LoadedImage, String>;
}

/// Presentation collaborator.
///
/// Every method has immediate effect and is only ever called from the thread
/// that owns the screen. Row appends are never undone.
pub trait Presenter: Send {
    /// Toolbar title.
    fn set_title(&mut self, title: &str);

    /// Hold back the screen-enter animation until [`Presenter::start_enter_transition`].
    fn postpone_enter_transition(&mut self);

    /// Run the held-back enter animation.
    fn start_enter_transition(&mut self);

    /// Put the decoded avatar into the header, animated as `options` says.
    fn show_avatar(&mut self, image: LoadedImage, options: RequestOptions);

    /// Login, display name and biography (`None` hides the bio view).
    fn render_header(&mut self, header: &ProfileHeader);

    /// Append one attribute row to the list.
    fn append_row(&mut self, row: AttributeRow);

    /// Display a transient message (toast).
    fn show_message(&mut self, message: &str);

    /// Shimmer over the chart area.
    fn set_loading_indicator(&mut self, active: bool);

    /// Put the decoded contribution chart into its container, crossfading
    /// from the placeholder when `options.crossfade` is set.
    fn show_chart(&mut self, image: LoadedImage, options: RequestOptions);

    /// Show or hide the chart container.
    fn set_chart_visible(&mut self, visible: bool);

    /// Show or hide the placeholder drawn while the chart loads.
    fn set_chart_placeholder_visible(&mut self, visible: bool);

    /// Deliver the close result to the caller and close the screen.
    fn finish_with_result(&mut self, result: ScreenResult);
}
