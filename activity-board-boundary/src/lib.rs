use serde::Deserialize;
use serde_json::{Map, Value};

mod conv;

const DEFAULT_SCHEDULE: &str = "TBA";

/// All activities as returned by `GET /activities`,
/// in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Activities(Vec<Activity>);

impl Activities {
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| a.name.as_str())
    }
}

impl IntoIterator for Activities {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Activity> for Activities {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique key, display label and form option value at once.
    pub name: String,
    pub detail: ActivityDetail,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct ActivityDetail {
    pub description      : String,
    pub schedule         : String,
    pub max_participants : u64,
    pub participants     : Vec<Participant>,
}

impl Default for ActivityDetail {
    fn default() -> Self {
        Self {
            description: String::new(),
            schedule: DEFAULT_SCHEDULE.to_owned(),
            max_participants: 0,
            participants: vec![],
        }
    }
}

impl ActivityDetail {
    /// Never negative, even if the roster exceeds the capacity.
    #[must_use]
    pub fn spots_left(&self) -> u64 {
        let taken = u64::try_from(self.participants.len()).unwrap_or(u64::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// A roster entry.
///
/// Only participants with an identifying email address
/// can be unregistered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum Participant {
    Identified { label: String, email: String },
    Anonymous { label: String },
}

impl Participant {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Identified { label, .. } | Self::Anonymous { label } => label,
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Identified { email, .. } => Some(email),
            Self::Anonymous { .. } => None,
        }
    }
}

/// Response body of the signup and unregister endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct ServerMessage {
    /// Present on success.
    pub message: Option<String>,
    /// Present on failure.
    pub detail: Option<String>,
}
