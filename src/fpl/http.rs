use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::cli::types::GameweekId;
use crate::core::{config::Settings, http::build_client};
use crate::Result;


/// Thin client over the two FPL endpoints the tool reads.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self::with_client(
            build_client(settings)?,
            settings.api_base_url.clone(),
        ))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /bootstrap-static/`: every player with season totals, plus
    /// teams and gameweeks.
    pub async fn get_bootstrap_static(&self) -> Result<Value> {
        self.get_json("bootstrap-static/").await
    }

    /// `GET /event/{id}/live/`: per-player stats for one gameweek.
    pub async fn get_gameweek_live(&self, gameweek: GameweekId) -> Result<Value> {
        self.get_json(&format!("event/{}/live/", gameweek.as_u16()))
            .await
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}
