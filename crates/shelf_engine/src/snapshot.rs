use crate::{
    de::null_as_default,
    error::{PlanogramError, Result},
    facets::Filters,
    model::{Bay, ProductPlacement},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the engine needs for one planogram session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanogramSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bays: Vec<Bay>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<ProductPlacement>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: Filters,
}

impl PlanogramSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: PlanogramSnapshot = serde_json::from_str(json)?;
        debug!(
            "Loaded snapshot: {} bays, {} placements",
            snapshot.bays.len(),
            snapshot.products.len()
        );
        Ok(snapshot)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PlanogramError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Placement by product id, first match
    pub fn product(&self, product_id: &str) -> Option<&ProductPlacement> {
        self.products.iter().find(|p| p.product_id == product_id)
    }
}
