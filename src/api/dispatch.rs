use crate::error::AppError;
use serde_json::Value;
use std::fmt;

pub const CREDENTIAL_HEADER: &str = "X-Riot-Token";
pub const USER_AGENT: &str = concat!("lol_stats/", env!("CARGO_PKG_VERSION"));

/// Riot API key. Only ever leaves the process as the `X-Riot-Token` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Self {
        ApiCredential(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(***)")
    }
}

pub fn build_agent() -> ureq::Agent {
    ureq::AgentBuilder::new().user_agent(USER_AGENT).build()
}

/// Issues a single GET and parses the body as JSON.
///
/// Non-2xx statuses become [`AppError::HttpStatus`], connection and body read
/// failures [`AppError::Transport`], unparsable bodies [`AppError::Decode`].
/// Nothing is retried.
pub fn fetch_json(
    agent: &ureq::Agent,
    url: &str,
    credential: Option<&ApiCredential>,
) -> Result<Value, AppError> {
    log::debug!("GET {}", url);

    let mut request = agent.get(url);
    if let Some(credential) = credential {
        request = request.set(CREDENTIAL_HEADER, credential.expose());
    }

    let response = match request.call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, _)) => {
            log::warn!("GET {} returned HTTP {}", url, code);
            return Err(AppError::HttpStatus(code));
        }
        Err(ureq::Error::Transport(transport)) => {
            log::warn!("GET {} failed: {}", url, transport);
            return Err(AppError::Transport(transport.to_string()));
        }
    };

    // ureq only errors on 4xx/5xx; unfollowed 3xx arrive here
    let status = response.status();
    if !(200..300).contains(&status) {
        log::warn!("GET {} returned HTTP {}", url, status);
        return Err(AppError::HttpStatus(status));
    }

    let body = response
        .into_string()
        .map_err(|e| AppError::Transport(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn returns_parsed_json_and_sends_token() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/lol/spectator/v4/featured-games")
            .match_header(CREDENTIAL_HEADER, "RGAPI-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"gameList":[],"clientRefreshInterval":300}"#)
            .create();

        let url = format!("{}/lol/spectator/v4/featured-games", server.url());
        let credential = ApiCredential::new("RGAPI-test");
        let value = fetch_json(&build_agent(), &url, Some(&credential)).unwrap();

        mock.assert();
        assert_eq!(value, json!({"gameList": [], "clientRefreshInterval": 300}));
    }

    #[test]
    fn omits_token_without_credential() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/cdn/13.6.1/data/en_US/champion.json")
            .match_header(CREDENTIAL_HEADER, Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"data":{}}"#)
            .create();

        let url = format!("{}/cdn/13.6.1/data/en_US/champion.json", server.url());
        fetch_json(&build_agent(), &url, None).unwrap();
        mock.assert();
    }

    #[test]
    fn not_found_status_is_reported_once() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body(r#"{"status":{"message":"Data not found","status_code":404}}"#)
            .expect(1)
            .create();

        let url = format!("{}/missing", server.url());
        let err = fetch_json(&build_agent(), &url, None).unwrap_err();

        mock.assert();
        assert!(matches!(err, AppError::HttpStatus(404)), "{err:?}");
    }

    #[test]
    fn server_errors_are_not_retried() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/flaky")
            .with_status(503)
            .expect(1)
            .create();

        let url = format!("{}/flaky", server.url());
        let err = fetch_json(&build_agent(), &url, None).unwrap_err();

        mock.assert();
        assert!(matches!(err, AppError::HttpStatus(503)));
    }

    #[test]
    fn unfollowed_redirect_statuses_are_errors() {
        let mut server = Server::new();
        server
            .mock("GET", "/choices")
            .with_status(300)
            .with_header("content-type", "application/json")
            .with_body(r#"{"a":1}"#)
            .create();
        server.mock("GET", "/unchanged").with_status(304).create();

        let agent = build_agent();
        let err = fetch_json(&agent, &format!("{}/choices", server.url()), None).unwrap_err();
        assert!(matches!(err, AppError::HttpStatus(300)), "{err:?}");

        let err = fetch_json(&agent, &format!("{}/unchanged", server.url()), None).unwrap_err();
        assert!(matches!(err, AppError::HttpStatus(304)), "{err:?}");
    }

    #[test]
    fn invalid_body_is_a_decode_error() {
        let mut server = Server::new();
        server
            .mock("GET", "/garbled")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let url = format!("{}/garbled", server.url());
        let err = fetch_json(&build_agent(), &url, None).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)), "{err:?}");
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let url = format!("http://127.0.0.1:{}/anything", port);
        let err = fetch_json(&build_agent(), &url, None).unwrap_err();
        assert!(matches!(err, AppError::Transport(_)), "{err:?}");
    }

    #[test]
    fn credential_debug_is_redacted() {
        let credential = ApiCredential::new("RGAPI-secret");
        assert!(!format!("{:?}", credential).contains("secret"));
    }
}
