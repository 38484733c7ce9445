// src/types/response.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::vacancy::WireVacancy;

// ===== hh.ru Search Response =====

/// Body of `GET /vacancies`. Items stay untyped until [`HhSearchResponse::vacancies`]
/// so one malformed posting does not reject the whole page.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HhSearchResponse {
    #[serde(default)]
    pub items: Vec<Value>,
    pub found: Option<u64>,
    pub pages: Option<u64>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl HhSearchResponse {
    pub fn vacancies(self) -> Vec<WireVacancy> {
        self.items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<WireVacancy>(item) {
                Ok(vacancy) => Some(vacancy),
                Err(e) => {
                    warn!("Skipping malformed vacancy at index {}: {}", index, e);
                    None
                }
            })
            .collect()
    }
}
