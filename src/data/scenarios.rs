use std::collections::BTreeMap;

use chrono::Utc;
use log::info;
use tokio::sync::RwLock;

use crate::models::scenario::{Scenario, ScenarioRequest};

#[derive(Debug)]
struct Inner {
    next_id: u64,
    scenarios: BTreeMap<u64, Scenario>,
}

/// In-memory scenario storage shared by the HTTP workers.
/// Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct ScenarioStore {
    inner: RwLock<Inner>,
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                scenarios: BTreeMap::new(),
            }),
        }
    }

    pub async fn create(&self, request: ScenarioRequest) -> Scenario {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let scenario = Scenario {
            id,
            name: request.name,
            kind: request.kind,
            data_json: request.data_json,
            created_at: Utc::now(),
        };
        inner.scenarios.insert(id, scenario.clone());
        info!("stored scenario {id} ({:?}, type {})", scenario.name, scenario.kind);
        scenario
    }

    pub async fn get(&self, id: u64) -> Option<Scenario> {
        self.inner.read().await.scenarios.get(&id).cloned()
    }

    /// All scenarios, ordered by id.
    pub async fn list(&self) -> Vec<Scenario> {
        self.inner.read().await.scenarios.values().cloned().collect()
    }
}
