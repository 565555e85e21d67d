use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub title: String,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("search result is missing {0}")]
    Malformed(&'static str),
}

/// Finds a single video for a free-text query. Failures are reported as no result.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &str) -> Option<VideoResult>;
}

// YouTube Data API v3 search
pub struct YouTubeClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

impl YouTubeClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    async fn fetch(&self, api_key: &str, query: &str) -> Result<Option<VideoResult>, SearchError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "1"),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        debug!("Search response: {}", body);
        first_video(&body)
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(&self, query: &str) -> Option<VideoResult> {
        let api_key = self.api_key.as_deref()?;
        info!("Searching videos for: {}", query);

        match self.fetch(api_key, query).await {
            Ok(Some(video)) => {
                info!("Found video {} ({})", video.video_id, video.title);
                Some(video)
            }
            Ok(None) => {
                info!("No video found for: {}", query);
                None
            }
            Err(e) => {
                warn!("YouTube API error: {}", e);
                None
            }
        }
    }
}

/// Picks the first item of a search response. An empty item list is not an error.
fn first_video(body: &Value) -> Result<Option<VideoResult>, SearchError> {
    let item = match body.get("items").and_then(|items| items.get(0)) {
        Some(item) => item,
        None => return Ok(None),
    };

    let video_id = item
        .pointer("/id/videoId")
        .and_then(Value::as_str)
        .ok_or(SearchError::Malformed("id.videoId"))?;
    let title = item
        .pointer("/snippet/title")
        .and_then(Value::as_str)
        .ok_or(SearchError::Malformed("snippet.title"))?;

    Ok(Some(VideoResult {
        video_id: video_id.to_string(),
        title: title.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::json;

    #[test]
    fn takes_first_item() {
        let body = json!({
            "items": [
                { "id": { "videoId": "jfKfPfyJRdk" }, "snippet": { "title": "lofi hip hop radio" } },
                { "id": { "videoId": "other" }, "snippet": { "title": "Other" } }
            ]
        });
        assert_eq!(
            first_video(&body).unwrap(),
            Some(VideoResult {
                video_id: "jfKfPfyJRdk".into(),
                title: "lofi hip hop radio".into(),
            })
        );
    }

    #[test]
    fn empty_results_are_none() {
        assert_eq!(first_video(&json!({ "items": [] })).unwrap(), None);
        assert_eq!(first_video(&json!({})).unwrap(), None);
    }

    #[test]
    fn missing_fields_are_errors() {
        let body = json!({ "items": [{ "id": { "kind": "youtube#channel" } }] });
        assert!(matches!(first_video(&body), Err(SearchError::Malformed("id.videoId"))));
    }

    #[actix_web::test]
    async fn without_key_returns_none() {
        // Nothing listens on the discard port.
        let client = YouTubeClient::new(None, "http://127.0.0.1:9");
        assert_eq!(client.search("anything").await, None);
    }

    async fn fake_search(req: HttpRequest) -> HttpResponse {
        let query = req.query_string().to_string();
        if query.contains("key=bad") {
            return HttpResponse::Forbidden().body("quotaExceeded");
        }
        if query.contains("q=nothing") {
            return HttpResponse::Ok().json(json!({ "items": [] }));
        }
        HttpResponse::Ok().json(json!({
            "items": [{ "id": { "videoId": "vid42" }, "snippet": { "title": "Found it" } }]
        }))
    }

    #[actix_web::test]
    async fn queries_upstream_and_absorbs_failures() {
        let server = HttpServer::new(|| App::new().route("/search", web::get().to(fake_search)))
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        let handle = server.workers(1).run();
        actix_web::rt::spawn(handle);
        let base = format!("http://{}", addr);

        let client = YouTubeClient::new(Some("good".into()), base.clone());
        assert_eq!(
            client.search("jazz").await,
            Some(VideoResult {
                video_id: "vid42".into(),
                title: "Found it".into(),
            })
        );
        assert_eq!(client.search("nothing").await, None);

        let rejected = YouTubeClient::new(Some("bad".into()), base);
        assert_eq!(rejected.search("jazz").await, None);
    }
}
