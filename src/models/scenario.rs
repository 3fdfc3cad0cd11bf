use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored scenario. `data_json` is kept verbatim; the service never parses it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: u64,
    pub name: String,
    pub kind: String,
    pub data_json: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    #[schema(example = "maze with a detour")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "GRID")]
    pub kind: String,
    /// Opaque client payload, usually a serialised grid.
    pub data_json: String,
}

impl ScenarioRequest {
    /// Names of the fields that are empty or whitespace only.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("type", &self.kind),
            ("dataJson", &self.data_json),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResponse {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data_json: String,
    pub created_at: DateTime<Utc>,
}

impl From<Scenario> for ScenarioResponse {
    fn from(scenario: Scenario) -> Self {
        Self {
            id: scenario.id,
            name: scenario.name,
            kind: scenario.kind,
            data_json: scenario.data_json,
            created_at: scenario.created_at,
        }
    }
}
