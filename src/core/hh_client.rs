// src/core/hh_client.rs
//! HTTP client for the hh.ru vacancy search API

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, error, info};

use crate::core::config_manager::ServiceConfig;
use crate::types::{HhSearchResponse, WireVacancy};

/// hh.ru caps `per_page` at 100
pub const MAX_PER_PAGE: u32 = 100;

pub struct HeadHunterClient {
    client: reqwest::Client,
    api_url: String,
}

impl HeadHunterClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Status of a bare GET on the API root, `None` when the request failed
    async fn connection_status(&self) -> Option<StatusCode> {
        match self.client.get(&self.api_url).send().await {
            Ok(response) => Some(response.status()),
            Err(e) => {
                debug!("Connection check to {} failed: {}", self.api_url, e);
                None
            }
        }
    }

    pub async fn check_connection(&self) -> bool {
        self.connection_status().await == Some(StatusCode::OK)
    }

    /// First page of postings whose name matches `search_query`
    pub async fn get_vacancies(&self, search_query: &str, top_n: u32) -> Result<Vec<WireVacancy>> {
        match self.connection_status().await {
            Some(StatusCode::OK) => {}
            Some(status) => {
                error!("hh.ru API unavailable, status {}", status);
                anyhow::bail!("Server unavailable. Status code: {}", status);
            }
            None => anyhow::bail!("Server unreachable: {}", self.api_url),
        }

        let per_page = per_page(top_n);
        info!(
            "Requesting vacancies: query='{}', per_page={}",
            search_query, per_page
        );

        let response = self
            .client
            .get(&self.api_url)
            .query(&search_params(search_query, per_page))
            .send()
            .await
            .context("Failed to call hh.ru API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("hh.ru API error response: {}", error_text);
            anyhow::bail!("hh.ru API returned status {}: {}", status, error_text);
        }

        let body: HhSearchResponse = response
            .json()
            .await
            .context("Failed to parse hh.ru search response")?;

        let vacancies = body.vacancies();
        info!("Received {} vacancies", vacancies.len());
        Ok(vacancies)
    }
}

fn per_page(top_n: u32) -> u32 {
    top_n.clamp(1, MAX_PER_PAGE)
}

fn search_params(search_query: &str, per_page: u32) -> [(&'static str, String); 4] {
    [
        ("text", search_query.to_string()),
        ("per_page", per_page.to_string()),
        ("search_field", "name".to_string()),
        ("page", "0".to_string()),
    ]
}
