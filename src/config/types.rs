use indexmap::IndexMap;
use serde::Deserialize;

use crate::validate::JsonType;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "base_endpoint")]
    pub base_url: Option<String>,
    pub headers: Option<Vec<String>>,
    pub content_type: Option<String>,
    pub bearer_token: Option<String>,
    pub basic_auth: Option<String>,
    pub check: Option<CheckConfig>,
}

/// Defaults for `loadkit check`; flags given on the command line win.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct CheckConfig {
    pub expected_status: Option<u16>,
    pub required_fields: Option<Vec<String>>,
    pub schema: Option<IndexMap<String, JsonType>>,
    pub max_duration_ms: Option<f64>,
    pub min_items: Option<usize>,
}
