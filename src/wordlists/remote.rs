//! Remote word-list client
//!
//! The word service answers a GET with a JSON array of words; only the first one is used.

use super::WordSource;
use crate::error::WordSourceError;
use tracing::debug;

/// Word list service queried when no `--url` is given
pub const DEFAULT_WORD_URL: &str = "https://random-word-api.vercel.app/api?words=1";

/// HTTP client for the remote word-list service
#[derive(Debug, Clone)]
pub struct RemoteWordClient {
    client: reqwest::Client,
    url: String,
}

impl RemoteWordClient {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RemoteWordClient {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_URL)
    }
}

impl WordSource for RemoteWordClient {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        debug!(url = %self.url, "requesting word");

        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        first_word_from_body(&body)
    }
}

/// Extract the first word from a word-list response body
///
/// # Errors
/// Returns `WordSourceError::Parse` if the body is not a JSON array of strings,
/// or `WordSourceError::EmptyList` if the array is empty.
///
/// # Examples
/// ```
/// use hangman::wordlists::remote::first_word_from_body;
///
/// assert_eq!(first_word_from_body(r#"["Lantern","moss"]"#).unwrap(), "lantern");
/// assert!(first_word_from_body("[]").is_err());
/// ```
pub fn first_word_from_body(body: &str) -> Result<String, WordSourceError> {
    let words: Vec<String> = serde_json::from_str(body)?;

    words
        .into_iter()
        .next()
        .map(|word| word.trim().to_lowercase())
        .ok_or(WordSourceError::EmptyList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::fetch_word_or_empty;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(status: u16, body: &str) -> (MockServer, RemoteWordClient) {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .and(query_param("words", "1"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;

        let client = RemoteWordClient::new(format!("{}/api?words=1", mock_server.uri()));
        (mock_server, client)
    }

    #[tokio::test]
    async fn fetch_returns_first_word_of_response() {
        let (_server, client) = serve(200, r#"["Walrus","otter"]"#).await;

        assert_eq!(client.fetch_word().await.unwrap(), "walrus");
    }

    #[tokio::test]
    async fn server_error_is_a_request_error() {
        let (_server, client) = serve(500, "internal error").await;

        assert!(matches!(
            client.fetch_word().await,
            Err(WordSourceError::Request(_))
        ));
        assert_eq!(fetch_word_or_empty(&client).await, "");
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let (_server, client) = serve(200, "<html>maintenance</html>").await;

        assert!(matches!(
            client.fetch_word().await,
            Err(WordSourceError::Parse(_))
        ));
        assert_eq!(fetch_word_or_empty(&client).await, "");
    }

    #[test]
    fn first_word_is_taken() {
        let word = first_word_from_body(r#"["apple", "banana", "cherry"]"#).unwrap();
        assert_eq!(word, "apple");
    }

    #[test]
    fn first_word_is_normalized() {
        let word = first_word_from_body(r#"["  Giraffe "]"#).unwrap();
        assert_eq!(word, "giraffe");
    }

    #[test]
    fn empty_array_is_an_error() {
        assert!(matches!(
            first_word_from_body("[]"),
            Err(WordSourceError::EmptyList)
        ));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(
            first_word_from_body("<html>503</html>"),
            Err(WordSourceError::Parse(_))
        ));
        assert!(matches!(
            first_word_from_body(r#"{"word": "apple"}"#),
            Err(WordSourceError::Parse(_))
        ));
        assert!(matches!(
            first_word_from_body("[1, 2, 3]"),
            Err(WordSourceError::Parse(_))
        ));
    }

    #[test]
    fn default_client_targets_default_url() {
        let client = RemoteWordClient::default();
        assert_eq!(client.url(), DEFAULT_WORD_URL);
    }
}
