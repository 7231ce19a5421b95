//! # Detail View Model
//!
//! Owns the profile fetch and publishes its outcome through two observable
//! slots: the fetched profile and the latest transient message.

use crate::app::state::{ProfileEntity, TransientMessage};
use crate::core::service::ProfileService;
use crate::core::slot::Slot;
use crate::debug::spawn_tracked;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Fetch state for one screen instance.
pub struct DetailViewModel {
    service: Arc<dyn ProfileService>,
    user: Slot<ProfileEntity>,
    message: Slot<TransientMessage>,
    next_message_id: Arc<AtomicU64>,
    user_key: String,
}

impl DetailViewModel {
    pub fn new(service: Arc<dyn ProfileService>, user_key: impl Into<String>) -> Self {
        Self {
            service,
            user: Slot::new(),
            message: Slot::new(),
            next_message_id: Arc::new(AtomicU64::new(1)),
            user_key: user_key.into(),
        }
    }

    /// Slot holding the fetched profile. Never written on failure.
    pub fn user_slot(&self) -> &Slot<ProfileEntity> {
        &self.user
    }

    /// Slot holding the latest unconsumed transient message.
    pub fn message_slot(&self) -> &Slot<TransientMessage> {
        &self.message
    }

    /// Key the selected login is returned under when the screen closes.
    pub fn preference_user_key_name(&self) -> &str {
        &self.user_key
    }

    /// Start fetching `login`.
    ///
    /// Success writes the user slot, failure writes a message. Repeated calls
    /// each start a new request. Must be called inside a Tokio runtime.
    pub fn fetch_entity(&self, login: &str) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let user = self.user.clone();
        let message = self.message.clone();
        let next_id = Arc::clone(&self.next_message_id);
        let login = login.to_string();

        info!(login = %login, "Fetching profile");

        spawn_tracked("profile_fetch", async move {
            match service.fetch_user(&login).await {
                Ok(entity) => {
                    debug!(login = %login, "Profile fetched - publishing to user slot");
                    user.set(entity);
                }
                Err(e) => {
                    error!(login = %login, error = %e, "Profile fetch failed");
                    let id = next_id.fetch_add(1, Ordering::Relaxed);
                    message.set(TransientMessage { id, text: e });
                }
            }
        })
    }

    /// Drop the message with `id` from the slot so it is never replayed.
    ///
    /// A newer message that replaced it in the meantime is kept.
    pub fn consume_message(&self, id: u64) {
        self.message.clear_if(|m| m.id == id);
    }
}
