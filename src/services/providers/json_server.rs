use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, UserProfile},
    services::providers::DataProvider,
};

/// Provider backed by a json-server style data service.
///
/// Expects `GET {base}/movies` to return an object mapping id -> title and
/// `GET {base}/users` to return an array of user profiles.
#[derive(Clone)]
pub struct JsonServerProvider {
    http_client: HttpClient,
    base_url: String,
}

impl JsonServerProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::DataService(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::DataService(format!("{} returned malformed JSON: {}", url, e)))
    }
}

#[async_trait::async_trait]
impl DataProvider for JsonServerProvider {
    async fn fetch_catalog(&self) -> AppResult<Catalog> {
        self.get_json("movies").await
    }

    async fn fetch_profiles(&self) -> AppResult<Vec<UserProfile>> {
        self.get_json("users").await
    }

    fn name(&self) -> &'static str {
        "json-server"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = JsonServerProvider::new("http://localhost:3030/".to_string());
        assert_eq!(provider.base_url, "http://localhost:3030");
    }
}
