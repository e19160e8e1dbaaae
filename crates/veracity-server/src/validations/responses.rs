use serde::{Deserialize, Serialize};
use veracity_core::models::StoredValidation;

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub data: Vec<StoredValidation>,
    pub count: usize,
}
