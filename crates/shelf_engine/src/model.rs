use crate::de::{
    opt_lenient_f64, opt_string_or_number, scalar_to_string, string_or_number, value_is_truthy,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One product placed on a sub-shelf, as loaded from a saved layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPlacement {
    #[serde(deserialize_with = "string_or_number")]
    pub product_id: String,
    pub bay: usize,   // 1-based
    pub shelf: usize, // 1-based sub-shelf index
    pub position: f64, // pre-scale offset from the left edge
    #[serde(default = "one_facing")]
    pub facings_wide: u32,
    #[serde(default = "one_facing")]
    pub facings_high: u32,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub orientation: Option<String>,
    #[serde(default)]
    pub product_details: ProductDetails,
}

fn one_facing() -> u32 {
    1
}

/// Catalogue attributes of a product.
///
/// Dimensions are optional here; layout defaults live in
/// [`LayoutConfig`](crate::config::LayoutConfig) and placement search rejects
/// a missing dimension through [`Footprint`](crate::layout::Footprint).
/// Fields this struct does not name are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default, deserialize_with = "opt_lenient_f64")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "opt_lenient_f64")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "opt_lenient_f64")]
    pub depth: Option<f64>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub brand_name: Option<String>,
    #[serde(
        rename = "subCategory_name",
        default,
        deserialize_with = "opt_string_or_number"
    )]
    pub sub_category_name: Option<String>,
    #[serde(default)]
    pub price: Price,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub tpnb: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub intensity: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub platform: Option<String>,
    #[serde(default)]
    pub npd: Flag,
    #[serde(default)]
    pub benchmark: Flag,
    #[serde(rename = "promoItem", alias = "promo_item", default)]
    pub promo_item: Flag,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductDetails {
    /// Text value of a details field by its wire name, `None` when absent or falsy
    /// (empty string, zero, `false`).
    pub fn attribute(&self, key: &str) -> Option<String> {
        let number = |v: Option<f64>| v.filter(|f| *f != 0.0).map(|f| format!("{f}"));
        let flag = |f: Flag| f.is_set().then(|| "1".to_string());
        let value = match key {
            "width" => number(self.width),
            "height" => number(self.height),
            "depth" => number(self.depth),
            "price" => match &self.price {
                Price::Numeric(p) => number(Some(*p)),
                Price::Invalid(raw) => Some(raw.clone()),
                Price::Missing => None,
            },
            "brand_name" => self.brand_name.clone(),
            "subCategory_name" => self.sub_category_name.clone(),
            "name" => self.name.clone(),
            "tpnb" => self.tpnb.clone(),
            "intensity" => self.intensity.clone(),
            "platform" => self.platform.clone(),
            "npd" => flag(self.npd),
            "benchmark" => flag(self.benchmark),
            "promoItem" | "promo_item" => flag(self.promo_item),
            other => self.extra.get(other).and_then(|v| match v {
                Value::Number(n) if n.as_f64() == Some(0.0) => None,
                Value::Bool(false) => None,
                v => scalar_to_string(v),
            }),
        };
        value.filter(|s| !s.is_empty())
    }
}

/// A product price as delivered upstream. Non-numeric prices are kept so that
/// they can fail an active price constraint instead of vanishing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Price {
    #[default]
    Missing,
    Numeric(f64),
    Invalid(String),
}

impl Price {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Price::Numeric(p) => Some(*p),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => Price::Missing,
            Value::Number(n) => match n.as_f64() {
                Some(p) if p.is_finite() => Price::Numeric(p),
                _ => Price::Invalid(n.to_string()),
            },
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(p) if p.is_finite() => Price::Numeric(p),
                _ => Price::Invalid(s),
            },
            other => Price::Invalid(other.to_string()),
        })
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Price::Missing => serializer.serialize_none(),
            Price::Numeric(p) => serializer.serialize_f64(*p),
            Price::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

/// Boolean-shaped product attribute (NPD, benchmark, promo)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flag(bool);

impl Flag {
    pub fn new(set: bool) -> Self {
        Self(set)
    }

    pub fn is_set(self) -> bool {
        self.0
    }

    /// 0/1 form used by the filter arrays
    pub fn as_number(self) -> u8 {
        u8::from(self.0)
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Flag(value_is_truthy(&value)))
    }
}

impl Serialize for Flag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_number())
    }
}

/// Physical shelving column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bay {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub sub_shelves: Vec<SubShelf>,
}

/// Single shelf level within a bay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubShelf {
    pub width: f64,
    #[serde(default)]
    pub height: Option<f64>,
}

impl Bay {
    /// Height of a sub-shelf, unbounded when the shelf or its height is unknown
    pub fn sub_shelf_height(&self, shelf_idx: usize) -> f64 {
        self.sub_shelves
            .get(shelf_idx)
            .and_then(|s| s.height)
            .unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placement_from_json() {
        let placement: ProductPlacement = serde_json::from_value(json!({
            "product_id": 1042,
            "bay": 1,
            "shelf": 2,
            "position": 12.5,
            "facings_wide": 3,
            "orientation": 0,
            "product_details": {
                "width": 80,
                "height": "120",
                "brand_name": "Lavazza",
                "subCategory_name": "Beans",
                "price": 5.99,
                "npd": true,
                "promoItem": 0,
                "tpnb": 50001234,
                "shelf_life": "12m"
            }
        }))
        .unwrap();

        assert_eq!(placement.product_id, "1042");
        assert_eq!(placement.facings_wide, 3);
        assert_eq!(placement.facings_high, 1);
        assert_eq!(placement.orientation.as_deref(), Some("0"));

        let details = &placement.product_details;
        assert_eq!(details.width, Some(80.0));
        assert_eq!(details.height, Some(120.0));
        assert_eq!(details.depth, None);
        assert_eq!(details.price, Price::Numeric(5.99));
        assert!(details.npd.is_set());
        assert!(!details.promo_item.is_set());
        assert_eq!(details.tpnb.as_deref(), Some("50001234"));
        assert_eq!(details.attribute("shelf_life").as_deref(), Some("12m"));
    }

    #[test]
    fn test_price_variants() {
        let parse = |v: Value| serde_json::from_value::<Price>(v).unwrap();
        assert_eq!(parse(json!(3.49)), Price::Numeric(3.49));
        assert_eq!(parse(json!("4.99")), Price::Numeric(4.99));
        assert_eq!(parse(json!("invalid")), Price::Invalid("invalid".into()));
        assert_eq!(parse(json!(null)), Price::Missing);
        assert_eq!(parse(json!(true)), Price::Invalid("true".into()));
    }

    #[test]
    fn test_attribute_skips_falsy_values() {
        let details: ProductDetails = serde_json::from_value(json!({
            "brand_name": "",
            "width": 0,
            "benchmark": 1,
            "rank": 0,
            "label": "Fairtrade"
        }))
        .unwrap();

        assert_eq!(details.attribute("brand_name"), None);
        assert_eq!(details.attribute("width"), None);
        assert_eq!(details.attribute("benchmark").as_deref(), Some("1"));
        assert_eq!(details.attribute("rank"), None);
        assert_eq!(details.attribute("label").as_deref(), Some("Fairtrade"));
        assert_eq!(details.attribute("missing"), None);
    }

    #[test]
    fn test_sub_shelf_height_defaults_to_unbounded() {
        let bay = Bay {
            width: 100.0,
            height: 200.0,
            sub_shelves: vec![
                SubShelf {
                    width: 100.0,
                    height: Some(40.0),
                },
                SubShelf {
                    width: 100.0,
                    height: None,
                },
            ],
        };
        assert_eq!(bay.sub_shelf_height(0), 40.0);
        assert!(bay.sub_shelf_height(1).is_infinite());
        assert!(bay.sub_shelf_height(7).is_infinite());
    }
}
