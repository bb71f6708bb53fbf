use gloo_net::http::Request;

use activity_board_boundary::Activities;

use crate::{into_json, into_message, into_message_lenient, signup_url, Result};

/// Activities API
#[derive(Debug, Clone)]
pub struct ActivitiesApi {
    url: String,
}

impl ActivitiesApi {
    /// An empty `url` addresses the origin the app was loaded from.
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn activities(&self) -> Result<Activities> {
        let url = format!("{}/activities", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>> {
        let url = signup_url(&self.url, activity, email);
        let response = Request::post(&url).send().await?;
        into_message(response).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>> {
        let url = signup_url(&self.url, activity, email);
        let response = Request::delete(&url).send().await?;
        into_message_lenient(response).await
    }
}
