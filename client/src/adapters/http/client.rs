//! HTTP client for the Cochera REST backend
//!
//! Thin typed wrappers over the backend endpoints. Authentication is an
//! ambient bearer token set as a default header; without one the feed
//! endpoint degrades to the public explore view (upstream contract, not
//! verified here).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::{
    Car, CollectionGroup, FeedPage, FeedQuery, NewCar, NewGroup, NewWishlistItem, WishlistItem,
};
use crate::domain::ports::FeedApi;
use crate::error::ApiError;

/// HTTP client for communicating with the Cochera API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from environment configuration
    pub fn from_env() -> Result<Self, ApiError> {
        let config = Config::from_env();
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_url, config.api_token.as_deref())
    }

    /// Create a client with explicit configuration
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::Deserialization(format!("Invalid token format: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- Cars ---

    /// List the authenticated collector's cars
    pub async fn list_cars(&self) -> Result<Vec<Car>, ApiError> {
        self.get_json("/cars", &[]).await
    }

    /// Register a new car in the collection
    pub async fn create_car(&self, car: &NewCar) -> Result<Car, ApiError> {
        self.post_json("/cars", car).await
    }

    /// Remove a car from the collection
    pub async fn delete_car(&self, car_id: i64) -> Result<(), ApiError> {
        let url = format!("{}/cars/{}", self.base_url, car_id);
        let response = self.client.delete(&url).send().await?;
        check_status(response).await.map(|_| ())
    }

    // --- Groups ---

    pub async fn list_groups(&self) -> Result<Vec<CollectionGroup>, ApiError> {
        self.get_json("/groups", &[]).await
    }

    pub async fn create_group(&self, group: &NewGroup) -> Result<CollectionGroup, ApiError> {
        self.post_json("/groups", group).await
    }

    /// Add an owned car to a group
    pub async fn add_car_to_group(
        &self,
        group_id: i64,
        car_id: i64,
    ) -> Result<CollectionGroup, ApiError> {
        self.post_json(
            &format!("/groups/{}/cars", group_id),
            &AddCarRequest { car_id },
        )
        .await
    }

    // --- Wishlist ---

    pub async fn list_wishlist(&self) -> Result<Vec<WishlistItem>, ApiError> {
        self.get_json("/wishlist", &[]).await
    }

    pub async fn create_wishlist_item(
        &self,
        item: &NewWishlistItem,
    ) -> Result<WishlistItem, ApiError> {
        self.post_json("/wishlist", item).await
    }

    /// Mark a wishlist entry as obtained. The backend moves it into the
    /// collection and emits a `wishlist_achieved` feed event.
    pub async fn achieve_wishlist_item(&self, item_id: i64) -> Result<WishlistItem, ApiError> {
        self.post_json(
            &format!("/wishlist/{}/achieve", item_id),
            &serde_json::json!({}),
        )
        .await
    }

    // --- Internal helpers ---

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        handle_json_response(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        handle_json_response(response).await
    }
}

#[async_trait]
impl FeedApi for ApiClient {
    async fn fetch_page(&self, query: &FeedQuery) -> Result<FeedPage, ApiError> {
        tracing::debug!(
            tab = %query.tab,
            page = query.page,
            limit = query.limit,
            "fetching feed page"
        );
        self.get_json("/feed", &query.to_query_pairs()).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), body))
}

async fn handle_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddCarRequest {
    car_id: i64,
}
