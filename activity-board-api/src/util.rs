use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped by JavaScript's `encodeURIComponent`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn signup_url(base_url: &str, activity: &str, email: &str) -> String {
    let activity = utf8_percent_encode(activity, URI_COMPONENT);
    let email = utf8_percent_encode(email, URI_COMPONENT);
    format!("{base_url}/activities/{activity}/signup?email={email}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_activity_and_email() {
        assert_eq!(
            signup_url("", "Chess Club", "a+b@x.com"),
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn keep_unreserved_characters() {
        assert_eq!(
            signup_url("/api", "Art (2d)", "first.last-1_x~y@x.com"),
            "/api/activities/Art%20(2d)/signup?email=first.last-1_x~y%40x.com"
        );
    }

    #[test]
    fn encode_path_separators_and_unicode() {
        assert_eq!(
            signup_url("http://localhost:8000", "A/B?c", "ü@x.com"),
            "http://localhost:8000/activities/A%2FB%3Fc/signup?email=%C3%BC%40x.com"
        );
    }
}
