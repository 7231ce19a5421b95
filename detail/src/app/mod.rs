//! # Detail Screen Orchestrator
//!
//! The [`DetailScreen`] sequences the avatar load, the profile fetch and the
//! chart load, and turns their results into presenter calls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Owning thread                            │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  DetailScreen (orchestrator)                          │   │
//! │  │  - on_create() / on_close() / on_card_click()         │   │
//! │  │  - on_tick() / pump() - apply async results           │   │
//! │  │  - Presenter calls                                    │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<DetailState>>                      │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio tasks                                    │
//! │  - ImageLoadCoordinator (primary)   → ImageLoaded            │
//! │  - DetailViewModel::fetch_entity    → user / message slots   │
//! │  - ImageLoadCoordinator (secondary) → ImageLoaded            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Slots forward their writes into the same channel through the screen's
//! subscriptions, so every state change is applied on the owning thread.
//!
//! ## Lifecycle
//!
//! ```text
//! Created ──on_create──► AwaitingPrimaryImage ──avatar outcome──► Observing
//!                                                                    │
//!                                  Rendered ◄──profile──────────────┘
//! any phase ──on_close / on_card_click / on_destroy──► Destroyed
//! ```

pub mod state;
pub mod events;
pub mod view_model;
pub mod tasks;
mod handlers;
mod event_handler;

#[cfg(test)]
pub(crate) mod testing;

pub use events::DetailEvent;
pub use state::*;
pub use tasks::ImageLoadCoordinator;
pub use view_model::DetailViewModel;

use crate::core::config::DetailConfig;
use crate::core::error::{DetailError, Result};
use crate::core::service::{ImageLoader, Presenter, ProfileService};
use crate::core::slot::Subscription;
use crate::services::image::RequestOptions;
use crate::utils::validation::require_input;
use async_channel::{unbounded, Receiver, Sender};
use event_handler::DetailEventHandler;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Subscriptions held while the screen observes the view model.
struct Observation {
    _user: Subscription<ProfileEntity>,
    _message: Subscription<TransientMessage>,
}

/// Controller for one detail screen instance.
///
/// Construct with explicit collaborators, call [`DetailScreen::on_create`],
/// then drive it with [`DetailScreen::on_tick`] (non-blocking, once per frame)
/// or [`DetailScreen::pump`] (awaits the next result).
pub struct DetailScreen {
    /// Controller state. Lock briefly; presenter calls happen outside the lock.
    pub state: Arc<RwLock<DetailState>>,

    /// Async results waiting to be applied.
    pub event_rx: Receiver<DetailEvent>,

    event_tx: Sender<DetailEvent>,
    view_model: DetailViewModel,
    presenter: Box<dyn Presenter>,
    primary: ImageLoadCoordinator,
    secondary: ImageLoadCoordinator,
    chart_template: String,
    observation: Option<Observation>,
    fetch_task: Option<JoinHandle<()>>,
}

impl DetailScreen {
    pub fn new(
        view_model: DetailViewModel,
        image_loader: Arc<dyn ImageLoader>,
        presenter: Box<dyn Presenter>,
        chart_template: &str,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();

        Self {
            state: Arc::new(RwLock::new(DetailState::default())),
            event_rx,
            event_tx,
            view_model,
            presenter,
            primary: ImageLoadCoordinator::new(Pipeline::Primary, Arc::clone(&image_loader)),
            secondary: ImageLoadCoordinator::new(Pipeline::Secondary, image_loader),
            chart_template: chart_template.to_string(),
            observation: None,
            fetch_task: None,
        }
    }

    /// Build a screen whose view model and chart URL come from `config`.
    pub fn from_config(
        config: &DetailConfig,
        profile_service: Arc<dyn ProfileService>,
        image_loader: Arc<dyn ImageLoader>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        let view_model = DetailViewModel::new(profile_service, config.user_key.as_str());
        Self::new(view_model, image_loader, presenter, &config.chart_url)
    }

    /// Start the screen for `identifier`, loading `avatar_ref` first.
    ///
    /// Both inputs are required. When one is blank no async work starts, the
    /// screen still opens and shows the error as a transient message, and
    /// [`DetailError::MissingInput`] is returned.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn on_create(&mut self, identifier: &str, avatar_ref: &str) -> Result<()> {
        let phase = self.phase();
        if phase != ScreenPhase::Created {
            return Err(DetailError::State(format!("on_create called in phase {:?}", phase)));
        }

        let validated = require_input("login", identifier)
            .and_then(|_| require_input("avatar_url", avatar_ref));
        if let Err(e) = validated {
            tracing::error!(error = %e, "Detail screen opened without required input");
            self.presenter.set_title(identifier);
            self.presenter.show_message(&e.to_string());
            return Err(e);
        }

        {
            let mut state = self.state.write();
            state.identifier = identifier.to_string();
            state.avatar_ref = avatar_ref.to_string();
            state.enter_transition = EnterTransition::Postponed;
        }
        self.advance(ScreenPhase::AwaitingPrimaryImage)?;

        self.presenter.postpone_enter_transition();
        self.presenter.set_title(identifier);
        self.primary
            .start(avatar_ref, RequestOptions::avatar(), self.event_tx.clone());

        tracing::info!(login = %identifier, avatar = %avatar_ref, "Detail screen created - awaiting avatar");
        Ok(())
    }

    /// Apply every pending async result without blocking. Returns how many were applied.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        processed
    }

    /// Wait for the next async result and apply it.
    ///
    /// Returns `false` once the screen is destroyed.
    pub async fn pump(&mut self) -> bool {
        if self.phase().is_destroyed() {
            return false;
        }
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply one async result.
    pub fn handle_event(&mut self, event: DetailEvent) {
        self.handle_event_impl(event);
    }

    pub fn phase(&self) -> ScreenPhase {
        self.state.read().phase
    }

    /// True when no further async result is expected.
    ///
    /// That is: destroyed, failed to fetch the profile, or rendered with the
    /// latest chart load resolved. Outcomes of superseded chart loads do not
    /// count.
    pub fn is_settled(&self) -> bool {
        let state = self.state.read();
        match state.phase {
            ScreenPhase::Destroyed => true,
            ScreenPhase::Created => state.identifier.is_empty(),
            ScreenPhase::AwaitingPrimaryImage => false,
            ScreenPhase::Observing => state.fetch_failed,
            ScreenPhase::Rendered => !state.loading && state.secondary_outcome.is_some(),
        }
    }

    pub fn view_model(&self) -> &DetailViewModel {
        &self.view_model
    }

    /// Toolbar back button.
    pub fn on_close(&mut self) -> ScreenResult {
        handlers::navigation::finish(self, handlers::navigation::CloseReason::Back)
    }

    /// Header card tap.
    pub fn on_card_click(&mut self) -> ScreenResult {
        handlers::navigation::finish(self, handlers::navigation::CloseReason::Card)
    }

    /// Tear down: release observations and abort image loads.
    ///
    /// The profile request, if still running, is left to finish unobserved.
    /// Safe to call more than once.
    pub fn on_destroy(&mut self) {
        {
            let mut state = self.state.write();
            if state.phase.is_destroyed() {
                return;
            }
            tracing::info!(from = ?state.phase, login = %state.identifier, "Detail screen destroyed");
            state.phase = ScreenPhase::Destroyed;
            state.loading = false;
        }

        self.observation = None;
        self.primary.cancel();
        self.secondary.cancel();
        self.fetch_task = None;
    }

    /// Move to `next`, rejecting illegal transitions.
    fn advance(&self, next: ScreenPhase) -> Result<()> {
        let mut state = self.state.write();
        if !state.phase.can_advance_to(next) {
            return Err(DetailError::State(format!(
                "illegal transition {:?} -> {:?}",
                state.phase, next
            )));
        }
        tracing::debug!(from = ?state.phase, to = ?next, "Phase transition");
        state.phase = next;
        Ok(())
    }
}

impl Drop for DetailScreen {
    fn drop(&mut self) {
        self.on_destroy();
    }
}
