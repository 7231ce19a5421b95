//! Test doubles for the screen's collaborators.

use crate::app::state::{AttributeRow, ProfileEntity, ProfileHeader, ScreenResult};
use crate::core::service::{ImageLoader, Presenter, ProfileService};
use crate::services::image::{LoadedImage, RequestOptions};
use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Profile service returning a canned result.
pub struct FakeProfileService {
    result: Result<ProfileEntity, String>,
    calls: AtomicUsize,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeProfileService {
    pub fn ok(entity: ProfileEntity) -> Self {
        Self::with_result(Ok(entity))
    }

    pub fn err(message: &str) -> Self {
        Self::with_result(Err(message.to_string()))
    }

    fn with_result(result: Result<ProfileEntity, String>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            gate: Mutex::new(None),
        }
    }

    pub fn octocat() -> ProfileEntity {
        ProfileEntity {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            bio: None,
            company: Some("@github".to_string()),
            location: Some("San Francisco".to_string()),
            blog: Some("https://github.blog".to_string()),
            html_url: "https://github.com/octocat".to_string(),
        }
    }

    /// Hold every fetch until the returned notify is signalled.
    pub fn gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock() = Some(Arc::clone(&notify));
        notify
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileService for FakeProfileService {
    async fn fetch_user(&self, _login: &str) -> Result<ProfileEntity, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.result.clone()
    }
}

/// Image loader that succeeds with a 2x2 image unless told otherwise.
#[derive(Default)]
pub struct FakeImageLoader {
    failing: HashSet<String>,
    panicking: HashSet<String>,
    gate: Mutex<Option<Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, source: &str) -> Self {
        self.failing.insert(source.to_string());
        self
    }

    pub fn panicking(mut self, source: &str) -> Self {
        self.panicking.insert(source.to_string());
        self
    }

    /// Hold every load until the returned notify is signalled.
    pub fn gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock() = Some(Arc::clone(&notify));
        notify
    }

    /// Sources requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ImageLoader for FakeImageLoader {
    async fn load(&self, source: &str, _options: &RequestOptions) -> Result<LoadedImage, String> {
        self.calls.lock().push(source.to_string());
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.panicking.contains(source) {
            panic!("loader exploded on {}", source);
        }
        if self.failing.contains(source) {
            return Err(format!("Failed to fetch image: 404 ({})", source));
        }
        Ok(LoadedImage::from_rgba_image(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]))))
    }
}

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    SetTitle(String),
    PostponeEnterTransition,
    StartEnterTransition,
    ShowAvatar(RequestOptions),
    RenderHeader(ProfileHeader),
    AppendRow(AttributeRow),
    ShowMessage(String),
    SetLoadingIndicator(bool),
    ShowChart(RequestOptions),
    SetChartVisible(bool),
    SetChartPlaceholderVisible(bool),
    FinishWithResult(ScreenResult),
}

/// Presenter that records every call into a shared log.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    log: Arc<Mutex<Vec<PresenterCall>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PresenterCall> {
        self.log.lock().clone()
    }

    pub fn count(&self, pred: impl Fn(&PresenterCall) -> bool) -> usize {
        self.log.lock().iter().filter(|c| pred(c)).count()
    }

    /// Index of the first call matching `pred`.
    pub fn position(&self, pred: impl Fn(&PresenterCall) -> bool) -> Option<usize> {
        self.log.lock().iter().position(|c| pred(c))
    }

    fn push(&self, call: PresenterCall) {
        self.log.lock().push(call);
    }
}

impl Presenter for RecordingPresenter {
    fn set_title(&mut self, title: &str) {
        self.push(PresenterCall::SetTitle(title.to_string()));
    }

    fn postpone_enter_transition(&mut self) {
        self.push(PresenterCall::PostponeEnterTransition);
    }

    fn start_enter_transition(&mut self) {
        self.push(PresenterCall::StartEnterTransition);
    }

    fn show_avatar(&mut self, _image: LoadedImage, options: RequestOptions) {
        self.push(PresenterCall::ShowAvatar(options));
    }

    fn render_header(&mut self, header: &ProfileHeader) {
        self.push(PresenterCall::RenderHeader(header.clone()));
    }

    fn append_row(&mut self, row: AttributeRow) {
        self.push(PresenterCall::AppendRow(row));
    }

    fn show_message(&mut self, message: &str) {
        self.push(PresenterCall::ShowMessage(message.to_string()));
    }

    fn set_loading_indicator(&mut self, active: bool) {
        self.push(PresenterCall::SetLoadingIndicator(active));
    }

    fn show_chart(&mut self, _image: LoadedImage, options: RequestOptions) {
        self.push(PresenterCall::ShowChart(options));
    }

    fn set_chart_visible(&mut self, visible: bool) {
        self.push(PresenterCall::SetChartVisible(visible));
    }

    fn set_chart_placeholder_visible(&mut self, visible: bool) {
        self.push(PresenterCall::SetChartPlaceholderVisible(visible));
    }

    fn finish_with_result(&mut self, result: ScreenResult) {
        self.push(PresenterCall::FinishWithResult(result));
    }
}
