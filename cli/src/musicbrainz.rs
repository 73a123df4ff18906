use std::thread;
use std::time::Duration;

use featgraph_core::api::{FetchError, MusicApi, ReleasePage, SearchPage};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use uuid::Uuid;

const MUSICBRAINZ_URL: &str = "https://musicbrainz.org/ws/2";

// MusicBrainz rejects anonymous clients, so identify ourselves.
const USER_AGENT: &str = concat!(
    "featgraph/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/featgraph/featgraph)"
);

pub struct MusicBrainzClient {
    client: Client,
    base_url: String,
    retries: u32,
    retry_delay: Duration,
}

impl MusicBrainzClient {
    pub fn new(
        timeout: Duration,
        retries: u32,
        retry_delay: Duration,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: MUSICBRAINZ_URL.to_string(),
            retries,
            retry_delay,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.get_with_retry(url)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Transport errors and error statuses are retried with a doubling delay;
    /// a body that fails to parse is surfaced immediately by the caller since
    /// re-requesting malformed data would not fix it.
    fn get_with_retry(&self, url: &str) -> Result<String, FetchError> {
        let mut delay = self.retry_delay;
        let mut attempt = 0;

        loop {
            match self.try_get(url) {
                Ok(body) => return Ok(body),
                Err(_) if attempt < self.retries => {
                    attempt += 1;
                    thread::sleep(delay);
                    delay *= 2;
                }
                Err(error) => return Err(FetchError::Request(Box::new(error))),
            }
        }
    }

    fn try_get(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send()?.error_for_status()?;
        response.text()
    }
}

impl MusicApi for MusicBrainzClient {
    fn search_artists(&self, name: &str) -> Result<SearchPage, FetchError> {
        self.get_json(&search_url(&self.base_url, name))
    }

    fn release_page(
        &self,
        artist_id: Uuid,
        offset: u32,
        limit: u32,
    ) -> Result<ReleasePage, FetchError> {
        self.get_json(&release_url(&self.base_url, artist_id, offset, limit))
    }
}

pub fn search_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/artist?query={}&fmt=json",
        base_url,
        urlencoding::encode(name)
    )
}

pub fn release_url(base_url: &str, artist_id: Uuid, offset: u32, limit: u32) -> String {
    format!(
        "{}/release?artist={}&inc=recordings+artist-credits&fmt=json&offset={}&limit={}",
        base_url, artist_id, offset, limit
    )
}
