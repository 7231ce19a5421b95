//! # User Endpoints
//!
//! Profile lookup by login.

use super::client::ApiClient;
use reqwest::Url;
use shared::dto::user::GithubUser;

/// `<base>/users/<login>` with `login` encoded as one path segment.
pub(crate) fn user_url(base_url: &str, login: &str) -> Result<Url, String> {
    let mut url = Url::parse(base_url).map_err(|e| format!("Invalid API URL: {}", e))?;
    url.path_segments_mut()
        .map_err(|_| format!("Invalid API URL: {}", base_url))?
        .pop_if_empty()
        .push("users")
        .push(login);
    Ok(url)
}

/// Get the public profile of `login`.
#[tracing::instrument(skip(client), fields(login = %login))]
pub async fn get_user(client: &ApiClient, login: &str) -> Result<GithubUser, String> {
    let url = user_url(client.base_url(), login)?;
    let start = std::time::Instant::now();

    tracing::debug!(url = %url, "Fetching user");

    let response = client
        .client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                duration_ms = start.elapsed().as_millis(),
                "User fetch network error"
            );
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let user = response.json::<GithubUser>().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "User response parse error");
            format!("Failed to parse response: {}", e)
        })?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "User fetched successfully"
        );
        Ok(user)
    } else if status == reqwest::StatusCode::NOT_FOUND {
        tracing::warn!(url = %url, duration_ms = duration.as_millis(), "User not found");
        Err(format!("User not found: {}", login))
    } else {
        tracing::warn!(
            url = %url,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "User fetch failed with non-success status"
        );
        Err(format!("Failed to fetch user: {}", status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::ProfileService;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::with_base_url(&server.uri(), Duration::from_secs(5), "detail-tests")
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .and(header("user-agent", "detail-tests"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "octocat",
                "name": "The Octocat",
                "company": "@github",
                "blog": "",
                "location": "San Francisco",
                "bio": null,
                "html_url": "https://github.com/octocat"
            })))
            .mount(&server)
            .await;

        let entity = client_for(&server)
            .fetch_user("octocat")
            .await
            .expect("user should load");

        assert_eq!(entity.login, "octocat");
        assert_eq!(entity.display_name(), "The Octocat");
        assert_eq!(entity.blog, None);
        assert_eq!(entity.attribute_rows().len(), 3);
    }

    #[test]
    fn test_user_url_escapes_login() {
        let url = user_url("https://api.github.com", "a/b?c#d").expect("valid base");
        assert_eq!(url.as_str(), "https://api.github.com/users/a%2Fb%3Fc%23d");

        let url = user_url("http://127.0.0.1:8080/api/v3/", "octocat").expect("valid base");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v3/users/octocat");
    }

    #[test]
    fn test_user_url_rejects_bad_base() {
        let err = user_url("not a url", "octocat").unwrap_err();
        assert!(err.starts_with("Invalid API URL"), "got {}", err);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/nobody"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = get_user(&client_for(&server), "nobody").await.unwrap_err();
        assert_eq!(err, "User not found: nobody");
    }

    #[tokio::test]
    async fn test_get_user_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = get_user(&client_for(&server), "octocat").await.unwrap_err();
        assert!(err.starts_with("Failed to fetch user: 503"), "got {}", err);
    }

    #[tokio::test]
    async fn test_get_user_bad_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = get_user(&client_for(&server), "octocat").await.unwrap_err();
        assert!(err.starts_with("Failed to parse response"), "got {}", err);
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "octocat",
                "html_url": "https://github.com/octocat"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_url(
            &format!("{}/", server.uri()),
            Duration::from_secs(5),
            "detail-tests",
        );
        assert!(get_user(&client, "octocat").await.is_ok());
    }
}
