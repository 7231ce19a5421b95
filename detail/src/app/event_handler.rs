//! # Event Handler
//!
//! Applies async results to the screen: avatar outcome, profile emission,
//! transient message and chart outcome.

use crate::app::state::{
    EnterTransition, LoadOutcome, Pipeline, ProfileEntity, ScreenPhase, TransientMessage,
};
use crate::app::{DetailEvent, DetailScreen, Observation};
use crate::services::image::{LoadedImage, RequestOptions};

/// Trait for event handling implementation
pub(crate) trait DetailEventHandler {
    fn handle_event_impl(&mut self, event: DetailEvent);
}

impl DetailEventHandler for DetailScreen {
    fn handle_event_impl(&mut self, event: DetailEvent) {
        if self.phase().is_destroyed() {
            tracing::debug!(event = ?event_name(&event), "Dropping event after teardown");
            return;
        }

        match event {
            DetailEvent::ImageLoaded {
                pipeline: Pipeline::Primary,
                source,
                options,
                result,
                ..
            } => self.handle_primary_loaded(&source, options, result),
            DetailEvent::ImageLoaded {
                pipeline: Pipeline::Secondary,
                generation,
                source,
                options,
                result,
            } => self.handle_secondary_loaded(generation, &source, options, result),
            DetailEvent::UserChanged(entity) => self.handle_user_changed(entity),
            DetailEvent::MessagePosted(message) => self.handle_message_posted(message),
        }
    }
}

fn event_name(event: &DetailEvent) -> &'static str {
    match event {
        DetailEvent::ImageLoaded { pipeline: Pipeline::Primary, .. } => "PrimaryImageLoaded",
        DetailEvent::ImageLoaded { pipeline: Pipeline::Secondary, .. } => "SecondaryImageLoaded",
        DetailEvent::UserChanged(_) => "UserChanged",
        DetailEvent::MessagePosted(_) => "MessagePosted",
    }
}

impl DetailScreen {
    /// Avatar resolved. Either outcome releases the enter transition and
    /// starts observing; only the first outcome counts.
    fn handle_primary_loaded(
        &mut self,
        source: &str,
        options: RequestOptions,
        result: Result<LoadedImage, String>,
    ) {
        let outcome = LoadOutcome::from(&result);
        {
            let mut state = self.state.write();
            if state.phase != ScreenPhase::AwaitingPrimaryImage {
                tracing::debug!(phase = ?state.phase, "Ignoring repeated avatar outcome");
                return;
            }
            state.primary_outcome = Some(outcome);
        }

        match result {
            Ok(image) => self.presenter.show_avatar(image, options),
            Err(e) => tracing::warn!(source = %source, error = %e, "Avatar failed - continuing without it"),
        }

        self.release_enter_transition();
        self.start_observing();
    }

    /// Run the postponed enter animation once.
    fn release_enter_transition(&mut self) {
        {
            let mut state = self.state.write();
            if state.enter_transition != EnterTransition::Postponed {
                return;
            }
            state.enter_transition = EnterTransition::Released;
        }
        self.presenter.start_enter_transition();
    }

    /// Subscribe to both view model slots, then start the fetch.
    fn start_observing(&mut self) {
        if let Err(e) = self.advance(ScreenPhase::Observing) {
            tracing::warn!(error = %e, "Cannot start observing");
            return;
        }

        let user = self
            .view_model
            .user_slot()
            .observe_into(self.event_tx.clone(), DetailEvent::UserChanged);
        let message = self
            .view_model
            .message_slot()
            .observe_into(self.event_tx.clone(), DetailEvent::MessagePosted);
        self.observation = Some(Observation {
            _user: user,
            _message: message,
        });

        let login = self.state.read().identifier.clone();
        self.fetch_task = Some(self.view_model.fetch_entity(&login));
    }

    /// Profile arrived: header, rows (first emission only), then the chart.
    fn handle_user_changed(&mut self, entity: ProfileEntity) {
        let (first_render, login) = {
            let state = self.state.read();
            match state.phase {
                ScreenPhase::Observing => (true, state.identifier.clone()),
                ScreenPhase::Rendered => (false, state.identifier.clone()),
                phase => {
                    tracing::warn!(phase = ?phase, "Profile emission outside observation");
                    return;
                }
            }
        };

        self.presenter.render_header(&entity.header());

        if first_render {
            let rows = entity.attribute_rows();
            let count = rows.len();
            for row in rows {
                self.presenter.append_row(row);
            }
            self.state.write().rows_rendered = count;
            tracing::info!(login = %login, rows = count, "Profile rendered");
        } else {
            tracing::debug!(login = %login, "Redundant profile emission - rows kept, chart reloaded");
        }

        if let Err(e) = self.advance(ScreenPhase::Rendered) {
            tracing::warn!(error = %e, "Cannot mark screen rendered");
            return;
        }

        self.start_chart_load(&login);
    }

    /// Start a chart load. An older load still running is superseded: it is
    /// aborted, and an outcome it already queued is ignored.
    fn start_chart_load(&mut self, login: &str) {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.secondary_loads_started += 1;
        }
        self.presenter.set_loading_indicator(true);

        self.secondary.cancel();
        let url = format!("{}{}", self.chart_template, login);
        self.secondary
            .start(&url, RequestOptions::chart(), self.event_tx.clone());
    }

    /// Chart resolved. The latest load's outcome stops the shimmer.
    fn handle_secondary_loaded(
        &mut self,
        generation: u64,
        source: &str,
        options: RequestOptions,
        result: Result<LoadedImage, String>,
    ) {
        let latest = self.secondary.latest_generation();
        if generation != latest {
            tracing::debug!(generation, latest, "Ignoring superseded chart outcome");
            return;
        }

        {
            let mut state = self.state.write();
            state.loading = false;
            state.secondary_outcome = Some(LoadOutcome::from(&result));
        }

        self.presenter.set_loading_indicator(false);
        self.presenter.set_chart_placeholder_visible(false);
        match result {
            Ok(image) => {
                self.presenter.show_chart(image, options);
                self.presenter.set_chart_visible(true);
            }
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "Chart failed - hiding chart");
                self.presenter.set_chart_visible(false);
            }
        }
    }

    /// Show a message at most once, then clear it from the slot.
    fn handle_message_posted(&mut self, message: TransientMessage) {
        {
            let mut state = self.state.write();
            if state.last_message_id.is_some_and(|last| message.id <= last) {
                tracing::debug!(id = message.id, "Message already shown");
                return;
            }
            state.last_message_id = Some(message.id);
            if state.phase == ScreenPhase::Observing {
                state.fetch_failed = true;
            }
        }

        self.presenter.show_message(&message.text);
        self.view_model.consume_message(message.id);
    }
}
