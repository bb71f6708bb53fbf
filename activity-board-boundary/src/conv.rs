use super::*;

impl From<Map<String, Value>> for Activities {
    fn from(from: Map<String, Value>) -> Self {
        from.into_iter()
            .map(|(name, detail)| Activity {
                name,
                detail: detail.into(),
            })
            .collect()
    }
}

impl From<Value> for ActivityDetail {
    fn from(from: Value) -> Self {
        let Value::Object(mut map) = from else {
            return Self::default();
        };
        let description = take_non_empty_string(&mut map, "description").unwrap_or_default();
        let schedule = take_non_empty_string(&mut map, "schedule")
            .unwrap_or_else(|| DEFAULT_SCHEDULE.to_owned());
        let max_participants = map
            .get("max_participants")
            .and_then(capacity)
            .unwrap_or_default();
        let participants = match map.remove("participants") {
            Some(Value::Array(values)) => values.into_iter().map(Participant::from).collect(),
            _ => vec![],
        };
        Self {
            description,
            schedule,
            max_participants,
            participants,
        }
    }
}

impl From<Value> for Participant {
    fn from(from: Value) -> Self {
        match from {
            Value::String(raw) => {
                if raw.contains('@') {
                    Self::Identified {
                        label: raw.clone(),
                        email: raw,
                    }
                } else {
                    Self::Anonymous { label: raw }
                }
            }
            Value::Object(mut map) => {
                let name = map.remove("name").and_then(into_text);
                let email = map.remove("email").and_then(into_text);
                match (name, email) {
                    (Some(label), Some(email)) => Self::Identified { label, email },
                    (None, Some(email)) => Self::Identified {
                        label: email.clone(),
                        email,
                    },
                    (Some(label), None) => Self::Anonymous { label },
                    (None, None) => Self::Anonymous {
                        label: String::new(),
                    },
                }
            }
            other => Self::Anonymous {
                label: into_text(other).unwrap_or_default(),
            },
        }
    }
}

impl From<Value> for ServerMessage {
    fn from(from: Value) -> Self {
        let Value::Object(mut map) = from else {
            return Self::default();
        };
        Self {
            message: take_non_empty_string(&mut map, "message"),
            detail: take_non_empty_string(&mut map, "detail"),
        }
    }
}

/// Text of a truthy scalar, as a browser would print it.
fn into_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}

fn take_non_empty_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn capacity(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let n = value.as_f64()?;
    // negative and fractional numbers
    Some(if n > 0.0 { n.trunc() as u64 } else { 0 })
}
