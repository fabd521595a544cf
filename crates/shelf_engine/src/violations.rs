//! Request/response shapes of the external rule-violation checker.
//!
//! Only parsing lives here: the checker reports affected products in
//! `extras.product_id_list*` fields that arrive either as a comma-delimited
//! string or as an array.

use crate::{
    de::{null_as_default, opt_string_or_number, scalar_to_string},
    error::Result,
    snapshot::PlanogramSnapshot,
};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct ViolationRequest<'a> {
    pub planogram_instance_id: String,
    pub snapshot: &'a PlanogramSnapshot,
}

/// `{ violation_count: 0, violations: [] }` is the safe default when the
/// checker cannot be reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViolationReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub violation_count: u64,
    #[serde(default, deserialize_with = "skip_unreadable")]
    pub violations: Vec<Violation>,
}

/// Decodes violations one by one, dropping entries that do not parse so the
/// rest of the report survives
fn skip_unreadable<'de, D>(deserializer: D) -> std::result::Result<Vec<Violation>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(entries) => entries,
        other => {
            warn!("Ignoring violations field of unexpected shape: {other}");
            return Ok(Vec::new());
        }
    };
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, entry)| match serde_json::from_value(entry) {
            Ok(violation) => Some(violation),
            Err(e) => {
                warn!("Skipping unreadable violation #{idx}: {e}");
                None
            }
        })
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "type", default, deserialize_with = "opt_string_or_number")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub level_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub level_value: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extras: ViolationExtras,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViolationExtras {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub bay: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub shelf: Option<String>,
    #[serde(default)]
    pub product_id_list: ProductIdList,
    #[serde(default)]
    pub product_id_list_shelf_1: ProductIdList,
    #[serde(default)]
    pub product_id_list_shelf_2: ProductIdList,
}

/// Product ids from a string (`"a, b,c"`) or an array (`["a", 7]`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductIdList(pub Vec<String>);

impl<'de> Deserialize<'de> for ProductIdList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let ids = match value {
            Value::Null => Vec::new(),
            Value::String(s) => s.split(',').map(str::to_string).collect(),
            number @ Value::Number(_) => scalar_to_string(&number).into_iter().collect(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(_) => scalar_to_string(item),
                    _ => None,
                })
                .collect(),
            other => {
                warn!("Ignoring product id list of unexpected shape: {other}");
                Vec::new()
            }
        };
        Ok(ProductIdList(
            ids.into_iter()
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect(),
        ))
    }
}

impl Violation {
    /// Affected ids of this violation across all `product_id_list*` fields
    pub fn affected_product_ids(&self) -> Vec<String> {
        let extras = &self.extras;
        [
            &extras.product_id_list,
            &extras.product_id_list_shelf_1,
            &extras.product_id_list_shelf_2,
        ]
        .into_iter()
        .flat_map(|list| list.0.iter().cloned())
        .unique()
        .collect()
    }
}

impl ViolationReport {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a checker response, falling back to the empty report on any error
    pub fn from_json_str_or_default(json: &str) -> Self {
        Self::from_json_str(json).unwrap_or_else(|e| {
            warn!("Unreadable violation response, assuming no violations: {e}");
            Self::default()
        })
    }

    /// Flat, deduplicated ids of every product involved in a violation,
    /// in first-seen order
    pub fn affected_product_ids(&self) -> Vec<String> {
        self.violations
            .iter()
            .flat_map(Violation::affected_product_ids)
            .unique()
            .collect()
    }
}
