use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use activity_board_boundary::ServerMessage;

mod public;
mod util;

pub use self::{public::*, util::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The request could not be sent or the
    /// response body could not be read.
    #[error("{0}")]
    Fetch(String),

    /// The server answered with a non-2xx status.
    #[error("{}", .0.as_deref().unwrap_or("request failed"))]
    Api(Option<String>),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(response.json().await?)
}

/// How to treat a response body that is not valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// Fail with [`Error::Fetch`].
    Strict,
    /// Treat it as an empty [`ServerMessage`].
    Lenient,
}

/// The body must be valid JSON, regardless of the status.
pub async fn into_message(response: Response) -> Result<Option<String>> {
    let body = response.text().await?;
    parse_message(response.ok(), &body, Body::Strict)
}

/// Like [`into_message`] but an unreadable body counts as empty.
pub async fn into_message_lenient(response: Response) -> Result<Option<String>> {
    let body = response.text().await.unwrap_or_default();
    parse_message(response.ok(), &body, Body::Lenient)
}

pub fn parse_message(ok: bool, body: &str, parsing: Body) -> Result<Option<String>> {
    let body = match serde_json::from_str::<ServerMessage>(body) {
        Ok(body) => body,
        Err(_) if parsing == Body::Lenient => ServerMessage::default(),
        Err(err) => return Err(Error::Fetch(format!("{err}"))),
    };
    message_or_detail(ok, body)
}

pub fn message_or_detail(ok: bool, body: ServerMessage) -> Result<Option<String>> {
    let ServerMessage { message, detail } = body;
    // ensure we've got 2xx status
    if ok {
        Ok(message)
    } else {
        Err(Error::Api(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_returns_message() {
        let body: ServerMessage = serde_json::from_str(r#"{"message":"Signed up!"}"#).unwrap();
        assert_eq!(
            message_or_detail(true, body),
            Ok(Some("Signed up!".to_string()))
        );
    }

    #[test]
    fn failure_returns_detail() {
        let body: ServerMessage =
            serde_json::from_str(r#"{"detail":"Already signed up"}"#).unwrap();
        let err = message_or_detail(false, body).unwrap_err();
        assert_eq!(err, Error::Api(Some("Already signed up".to_string())));
        assert_eq!(err.to_string(), "Already signed up");
    }

    #[test]
    fn failure_without_detail() {
        let err = message_or_detail(false, ServerMessage::default()).unwrap_err();
        assert_eq!(err, Error::Api(None));
        assert_eq!(err.to_string(), "request failed");
    }

    #[test]
    fn strict_body_must_be_json() {
        for body in ["not json", ""] {
            for ok in [true, false] {
                let err = parse_message(ok, body, Body::Strict).unwrap_err();
                assert!(matches!(err, Error::Fetch(_)), "{body:?} -> {err:?}");
            }
        }
    }

    #[test]
    fn lenient_body_may_be_garbage() {
        for body in ["not json", ""] {
            assert_eq!(parse_message(true, body, Body::Lenient), Ok(None));
            assert_eq!(
                parse_message(false, body, Body::Lenient),
                Err(Error::Api(None))
            );
        }
    }

    #[test]
    fn parse_valid_body() {
        for parsing in [Body::Strict, Body::Lenient] {
            assert_eq!(
                parse_message(true, r#"{"message":"Signed up!"}"#, parsing),
                Ok(Some("Signed up!".to_string()))
            );
            assert_eq!(
                parse_message(false, r#"{"detail":"Already signed up"}"#, parsing),
                Err(Error::Api(Some("Already signed up".to_string())))
            );
        }
    }

    #[test]
    fn success_ignores_detail() {
        let body = ServerMessage {
            message: None,
            detail: Some("ignored".to_string()),
        };
        assert_eq!(message_or_detail(true, body), Ok(None));
    }
}
