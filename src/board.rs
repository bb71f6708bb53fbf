//! DOM-free state of the activity board.

use std::fmt;

use activity_board_api as api;
use activity_board_boundary::{Activities, Activity, ActivityDetail, Participant};

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// Content of the activities container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Loading,
    Loaded(Vec<Activity>),
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub list: ListState,
    /// Names offered by the activity selection.
    pub options: Vec<String>,
}

impl Board {
    /// Replace the rendered snapshot.
    ///
    /// A failed load only touches the list, the selection keeps
    /// whatever it offered before.
    pub fn apply(&mut self, result: api::Result<Activities>) {
        match result {
            Ok(activities) => {
                self.options = activities.names().map(ToOwned::to_owned).collect();
                self.list = ListState::Loaded(activities.into_iter().collect());
            }
            Err(err) => {
                log::error!("Error fetching activities: {err}");
                self.list = ListState::Failed;
            }
        }
    }
}

#[must_use]
pub fn availability(detail: &ActivityDetail) -> String {
    format!("{} spots left", detail.spots_left())
}

/// Metadata attached to a removable participant entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

impl RemovalTarget {
    #[must_use]
    pub fn of(activity: &str, participant: &Participant) -> Option<Self> {
        participant.email().map(|email| Self {
            activity: activity.to_owned(),
            email: email.to_owned(),
        })
    }

    /// Both values are read back from the DOM and might be missing.
    #[must_use]
    pub fn from_dataset(activity: Option<String>, email: Option<String>) -> Option<Self> {
        let activity = activity.filter(|a| !a.is_empty())?;
        let email = email.filter(|e| !e.is_empty())?;
        Some(Self { activity, email })
    }

    #[must_use]
    pub fn confirmation(&self) -> String {
        format!("Unregister {} from {}?", self.email, self.activity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: Option<StatusKind>,
    pub text: String,
    pub hidden: bool,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            kind: None,
            text: String::new(),
            hidden: true,
        }
    }
}

impl Status {
    fn shown(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            text: text.into(),
            hidden: false,
        }
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    #[must_use]
    pub fn class(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes = vec![];
        if let Some(kind) = self.kind {
            classes.push("message");
            classes.push(kind.as_str());
        }
        if self.hidden {
            classes.push("hidden");
        }
        f.write_str(&classes.join(" "))
    }
}

/// What the board does after a signup or removal request finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub reset_form: bool,
    pub reload: bool,
}

impl Outcome {
    #[must_use]
    pub fn of_signup(result: api::Result<Option<String>>) -> Self {
        match result {
            Ok(message) => Self {
                status: Status::shown(
                    StatusKind::Success,
                    message.unwrap_or_else(|| "Successfully signed up".to_owned()),
                ),
                reset_form: true,
                reload: true,
            },
            Err(api::Error::Api(detail)) => Self::failed(
                detail.unwrap_or_else(|| "An error occurred".to_owned()),
            ),
            Err(api::Error::Fetch(err)) => {
                log::error!("Error signing up: {err}");
                Self::failed("Failed to sign up. Please try again.")
            }
        }
    }

    #[must_use]
    pub fn of_removal(result: api::Result<Option<String>>) -> Self {
        match result {
            Ok(message) => Self {
                status: Status::shown(
                    StatusKind::Success,
                    message.unwrap_or_else(|| "Participant removed".to_owned()),
                ),
                reset_form: false,
                reload: true,
            },
            Err(api::Error::Api(detail)) => Self::failed(
                detail.unwrap_or_else(|| "Failed to remove participant".to_owned()),
            ),
            Err(api::Error::Fetch(err)) => {
                log::error!("Error removing participant: {err}");
                Self::failed("Failed to remove participant. Please try again.")
            }
        }
    }

    fn failed(text: impl Into<String>) -> Self {
        Self {
            status: Status::shown(StatusKind::Error, text),
            reset_form: false,
            reload: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chess_club() -> Activities {
        serde_json::from_value(json!({
            "Chess Club": {
                "description": "d",
                "schedule": "Mon",
                "max_participants": 2,
                "participants": ["a@x.com"]
            }
        }))
        .unwrap()
    }

    #[test]
    fn render_chess_club() {
        let mut board = Board::default();
        board.apply(Ok(chess_club()));
        assert_eq!(board.options, ["Chess Club"]);
        let ListState::Loaded(activities) = &board.list else {
            panic!("activities not loaded");
        };
        assert_eq!(activities.len(), 1);
        let Activity { name, detail } = &activities[0];
        assert_eq!(name, "Chess Club");
        assert_eq!(availability(detail), "1 spots left");
        assert_eq!(detail.participants.len(), 1);
        assert_eq!(
            RemovalTarget::of(name, &detail.participants[0]),
            Some(RemovalTarget {
                activity: "Chess Club".into(),
                email: "a@x.com".into()
            })
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut once = Board::default();
        once.apply(Ok(chess_club()));
        let mut twice = once.clone();
        twice.apply(Ok(chess_club()));
        assert_eq!(once, twice);
        assert_eq!(twice.options.len(), 1);
    }

    #[test]
    fn next_snapshot_replaces_previous() {
        let mut board = Board::default();
        board.apply(Ok(chess_club()));
        let other: Activities = serde_json::from_value(json!({ "Art": {}, "Zumba": {} })).unwrap();
        board.apply(Ok(other));
        assert_eq!(board.options, ["Art", "Zumba"]);
        let ListState::Loaded(activities) = &board.list else {
            panic!("activities not loaded");
        };
        assert_eq!(activities.len(), 2);
    }

    #[test]
    fn failed_load_keeps_selection() {
        let mut board = Board::default();
        board.apply(Ok(chess_club()));
        board.apply(Err(api::Error::Fetch("network unreachable".into())));
        assert_eq!(board.list, ListState::Failed);
        assert_eq!(board.options, ["Chess Club"]);
    }

    #[test]
    fn initial_load_failure() {
        let mut board = Board::default();
        assert_eq!(board.list, ListState::Loading);
        board.apply(Err(api::Error::Fetch("network unreachable".into())));
        assert_eq!(board.list, ListState::Failed);
        assert!(board.options.is_empty());
    }

    #[test]
    fn availability_is_clamped() {
        let detail: ActivityDetail = serde_json::from_value(json!({
            "max_participants": 1,
            "participants": ["a@x.com", "b@x.com"]
        }))
        .unwrap();
        assert_eq!(availability(&detail), "0 spots left");
    }

    #[test]
    fn removal_only_with_email() {
        let anonymous = Participant::Anonymous {
            label: "Ann".into(),
        };
        assert_eq!(RemovalTarget::of("Art", &anonymous), None);
        let identified = Participant::Identified {
            label: "Ann".into(),
            email: "ann@x.com".into(),
        };
        let target = RemovalTarget::of("Art", &identified).unwrap();
        assert_eq!(target.email, "ann@x.com");
        assert_eq!(target.confirmation(), "Unregister ann@x.com from Art?");
    }

    #[test]
    fn removal_target_from_incomplete_dataset() {
        assert_eq!(RemovalTarget::from_dataset(None, Some("a@x.com".into())), None);
        assert_eq!(RemovalTarget::from_dataset(Some("Art".into()), None), None);
        assert_eq!(
            RemovalTarget::from_dataset(Some("Art".into()), Some(String::new())),
            None
        );
        assert!(RemovalTarget::from_dataset(Some("Art".into()), Some("a@x.com".into())).is_some());
    }

    #[test]
    fn status_classes() {
        let mut status = Status::default();
        assert_eq!(status.class(), "hidden");
        status = Status::shown(StatusKind::Success, "ok");
        assert_eq!(status.class(), "message success");
        status.hide();
        assert_eq!(status.class(), "message success hidden");
        assert_eq!(Status::shown(StatusKind::Error, "no").class(), "message error");
    }

    #[test]
    fn signup_rejected() {
        let outcome = Outcome::of_signup(Err(api::Error::Api(Some("Already signed up".into()))));
        assert_eq!(outcome.status.text, "Already signed up");
        assert_eq!(outcome.status.kind, Some(StatusKind::Error));
        assert!(!outcome.status.hidden);
        assert!(!outcome.reset_form);
        assert!(!outcome.reload);
    }

    #[test]
    fn signup_rejected_without_detail() {
        let outcome = Outcome::of_signup(Err(api::Error::Api(None)));
        assert_eq!(outcome.status.text, "An error occurred");
    }

    #[test]
    fn signup_accepted() {
        let outcome = Outcome::of_signup(Ok(Some("Signed up!".into())));
        assert_eq!(outcome.status.text, "Signed up!");
        assert_eq!(outcome.status.kind, Some(StatusKind::Success));
        assert!(outcome.reset_form);
        assert!(outcome.reload);

        let outcome = Outcome::of_signup(Ok(None));
        assert_eq!(outcome.status.text, "Successfully signed up");
    }

    #[test]
    fn signup_with_unparseable_body() {
        let result = api::parse_message(true, "<html>OK</html>", api::Body::Strict);
        let outcome = Outcome::of_signup(result);
        assert_eq!(outcome.status.text, "Failed to sign up. Please try again.");
        assert!(!outcome.reset_form);
        assert!(!outcome.reload);
    }

    #[test]
    fn signup_transport_failure() {
        let outcome = Outcome::of_signup(Err(api::Error::Fetch("TypeError".into())));
        assert_eq!(outcome.status.text, "Failed to sign up. Please try again.");
        assert_eq!(outcome.status.kind, Some(StatusKind::Error));
        assert!(!outcome.reload);
    }

    #[test]
    fn removal_with_unparseable_body() {
        let result = api::parse_message(true, "<html>OK</html>", api::Body::Lenient);
        let outcome = Outcome::of_removal(result);
        assert_eq!(outcome.status.text, "Participant removed");
        assert_eq!(outcome.status.kind, Some(StatusKind::Success));
        assert!(!outcome.reset_form);
        assert!(outcome.reload);
    }

    #[test]
    fn removal_rejected() {
        let outcome = Outcome::of_removal(Err(api::Error::Api(None)));
        assert_eq!(outcome.status.text, "Failed to remove participant");
        assert!(!outcome.reload);

        let outcome = Outcome::of_removal(Err(api::Error::Fetch("offline".into())));
        assert_eq!(
            outcome.status.text,
            "Failed to remove participant. Please try again."
        );
    }
}
