//! # Screen State
//!
//! Domain types for the detail screen and the controller's mutable state.

use serde::Serialize;
use shared::dto::user::GithubUser;
use shared::utils::{is_blank, non_empty};

/// Result code attached to the close payload.
pub const RESULT_CODE_SELECTED: i32 = 1000;

/// Controller lifecycle phase.
///
/// ```text
/// Created ──► AwaitingPrimaryImage ──► Observing ──► Rendered
///    └──────────────┴────────────────────┴─────────────┴──► Destroyed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenPhase {
    Created,
    AwaitingPrimaryImage,
    Observing,
    Rendered,
    Destroyed,
}

impl ScreenPhase {
    /// Whether `next` is a legal successor of `self`.
    ///
    /// `Rendered → Rendered` is allowed: a redundant profile emission re-renders.
    pub fn can_advance_to(self, next: ScreenPhase) -> bool {
        use ScreenPhase::*;
        matches!(
            (self, next),
            (Created, AwaitingPrimaryImage)
                | (AwaitingPrimaryImage, Observing)
                | (Observing, Rendered)
                | (Rendered, Rendered)
                | (Created | AwaitingPrimaryImage | Observing | Rendered, Destroyed)
        )
    }

    pub fn is_destroyed(self) -> bool {
        self == ScreenPhase::Destroyed
    }
}

/// Which of the two image pipelines produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    /// Avatar, gates everything else
    Primary,
    /// Contribution chart, best effort
    Secondary,
}

impl Pipeline {
    /// Task name used by the task tracker.
    pub fn task_name(self) -> &'static str {
        match self {
            Pipeline::Primary => "primary_image_load",
            Pipeline::Secondary => "secondary_image_load",
        }
    }
}

/// Completion tag of one image load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Success,
    Failure,
}

impl<T, E> From<&Result<T, E>> for LoadOutcome {
    fn from(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => LoadOutcome::Success,
            Err(_) => LoadOutcome::Failure,
        }
    }
}

/// State of the deferred screen-enter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterTransition {
    /// Never postponed; the screen entered normally.
    Immediate,
    /// Held back until the avatar resolves.
    Postponed,
    /// Released after being postponed.
    Released,
}

/// A user profile as rendered by the screen. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntity {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub html_url: String,
}

impl From<GithubUser> for ProfileEntity {
    fn from(user: GithubUser) -> Self {
        Self {
            login: user.login,
            name: non_empty(user.name),
            bio: non_empty(user.bio),
            company: non_empty(user.company),
            location: non_empty(user.location),
            blog: non_empty(user.blog),
            html_url: user.html_url,
        }
    }
}

impl ProfileEntity {
    /// Name if set and non-empty, else the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }

    pub fn header(&self) -> ProfileHeader {
        ProfileHeader {
            login: self.login.clone(),
            display_name: self.display_name().to_string(),
            bio: self.bio.clone().filter(|b| !b.is_empty()),
        }
    }

    /// Rows in display order: profile URL, company, location, blog.
    ///
    /// The profile URL is always shown; company, location and blog only when
    /// non-empty.
    pub fn attribute_rows(&self) -> Vec<AttributeRow> {
        let mut rows = vec![AttributeRow::new(AttributeKind::ProfileUrl, &self.html_url)];

        let optional = [
            (AttributeKind::Company, &self.company),
            (AttributeKind::Location, &self.location),
            (AttributeKind::Link, &self.blog),
        ];
        for (kind, value) in optional {
            if let Some(text) = value.as_deref().filter(|v| !is_blank(v)) {
                rows.push(AttributeRow::new(kind, text));
            }
        }

        rows
    }
}

/// Icon kind of an attribute row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    ProfileUrl,
    Company,
    Location,
    Link,
}

/// One renderable fact about the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    pub kind: AttributeKind,
    pub text: String,
}

impl AttributeRow {
    pub fn new(kind: AttributeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Header block above the attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeader {
    pub login: String,
    pub display_name: String,
    /// `None` hides the biography view
    pub bio: Option<String>,
}

/// Fire-once notice for the user.
///
/// `id` increases per posted message so a consumer can tell a new message
/// from one it has already displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub id: u64,
    pub text: String,
}

/// Payload handed back to the caller when the screen closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenResult {
    pub code: i32,
    pub key: String,
    pub identifier: String,
}

/// Mutable controller state, shared with renderers through `Arc<RwLock<_>>`.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub phase: ScreenPhase,
    pub identifier: String,
    pub avatar_ref: String,
    pub enter_transition: EnterTransition,
    pub primary_outcome: Option<LoadOutcome>,
    pub secondary_outcome: Option<LoadOutcome>,
    /// Chart shimmer running
    pub loading: bool,
    pub rows_rendered: usize,
    pub secondary_loads_started: u32,
    /// Id of the last transient message handed to the presenter
    pub last_message_id: Option<u64>,
    /// A message arrived while observing without a profile: the fetch failed
    pub fetch_failed: bool,
    pub result: Option<ScreenResult>,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            phase: ScreenPhase::Created,
            identifier: String::new(),
            avatar_ref: String::new(),
            enter_transition: EnterTransition::Immediate,
            primary_outcome: None,
            secondary_outcome: None,
            loading: false,
            rows_rendered: 0,
            secondary_loads_started: 0,
            last_message_id: None,
            fetch_failed: false,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> ProfileEntity {
        ProfileEntity {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            bio: Some("There once was...".to_string()),
            company: Some("@github".to_string()),
            location: Some("San Francisco".to_string()),
            blog: Some("https://github.blog".to_string()),
            html_url: "https://github.com/octocat".to_string(),
        }
    }

    #[test]
    fn test_phase_transitions() {
        use ScreenPhase::*;
        assert!(Created.can_advance_to(AwaitingPrimaryImage));
        assert!(AwaitingPrimaryImage.can_advance_to(Observing));
        assert!(Observing.can_advance_to(Rendered));
        assert!(Rendered.can_advance_to(Destroyed));

        assert!(!Created.can_advance_to(Observing));
        assert!(!Observing.can_advance_to(AwaitingPrimaryImage));
        assert!(!Rendered.can_advance_to(AwaitingPrimaryImage));
        assert!(!Destroyed.can_advance_to(Created));
        assert!(!Destroyed.can_advance_to(Destroyed));
    }

    #[test]
    fn test_rows_full_profile_order() {
        let kinds: Vec<AttributeKind> = entity().attribute_rows().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AttributeKind::ProfileUrl,
                AttributeKind::Company,
                AttributeKind::Location,
                AttributeKind::Link,
            ]
        );
    }

    #[test]
    fn test_rows_skip_absent_fields() {
        let mut e = entity();
        e.company = None;
        e.blog = Some(String::new());

        let rows = e.attribute_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], AttributeRow::new(AttributeKind::ProfileUrl, "https://github.com/octocat"));
        assert_eq!(rows[1], AttributeRow::new(AttributeKind::Location, "San Francisco"));
    }

    #[test]
    fn test_rows_skip_empty_company_and_location() {
        let mut e = entity();
        e.company = Some(String::new());
        e.location = Some("  ".to_string());
        e.blog = None;

        let rows = e.attribute_rows();
        assert_eq!(rows, vec![AttributeRow::new(AttributeKind::ProfileUrl, "https://github.com/octocat")]);
    }

    #[test]
    fn test_display_name_falls_back_to_login() {
        let mut e = entity();
        e.name = Some(String::new());
        assert_eq!(e.display_name(), "octocat");

        e.name = None;
        assert_eq!(e.header().display_name, "octocat");
    }

    #[test]
    fn test_empty_bio_hidden() {
        let mut e = entity();
        e.bio = Some(String::new());
        assert_eq!(e.header().bio, None);
    }

    #[test]
    fn test_from_github_user_normalises_blank_strings() {
        let user = GithubUser {
            login: "octocat".to_string(),
            name: Some(String::new()),
            bio: Some("  ".to_string()),
            company: Some(String::new()),
            location: Some("Berlin".to_string()),
            blog: Some(String::new()),
            html_url: "https://github.com/octocat".to_string(),
            avatar_url: None,
            followers: 0,
            following: 0,
            public_repos: 0,
        };

        let e = ProfileEntity::from(user);
        assert_eq!(e.name, None);
        assert_eq!(e.bio, None);
        assert_eq!(e.blog, None);
        assert_eq!(e.company, None);
        assert_eq!(e.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_load_outcome_from_result() {
        let ok: Result<(), String> = Ok(());
        let err: Result<(), String> = Err("boom".to_string());
        assert_eq!(LoadOutcome::from(&ok), LoadOutcome::Success);
        assert_eq!(LoadOutcome::from(&err), LoadOutcome::Failure);
    }
}
