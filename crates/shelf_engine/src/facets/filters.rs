use crate::{
    de::{flag_list, number_list, string_list},
    model::ProductPlacement,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Filterable product attribute. The string form is the canonical key the
/// filter UI uses (`"brands"`, `"priceRange"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum FacetKey {
    #[strum(serialize = "subCategories")]
    SubCategory,
    #[strum(serialize = "brands")]
    Brand,
    #[strum(serialize = "priceRange")]
    Price,
    #[strum(serialize = "intensities")]
    Intensity,
    #[strum(serialize = "npds")]
    Npd,
    #[strum(serialize = "benchmarks")]
    Benchmark,
    #[strum(serialize = "promoItems")]
    PromoItem,
    #[strum(serialize = "platforms")]
    Platform,
}

impl FacetKey {
    /// Value of this facet on a product, in the same text form the filter
    /// arrays use. Price has no discrete value.
    pub fn value_of(self, product: &ProductPlacement) -> Option<String> {
        let details = &product.product_details;
        match self {
            FacetKey::SubCategory => details.sub_category_name.clone(),
            FacetKey::Brand => details.brand_name.clone(),
            FacetKey::Intensity => details.intensity.clone(),
            FacetKey::Platform => details.platform.clone(),
            FacetKey::Npd => Some(details.npd.as_number().to_string()),
            FacetKey::Benchmark => Some(details.benchmark.as_number().to_string()),
            FacetKey::PromoItem => Some(details.promo_item.as_number().to_string()),
            FacetKey::Price => None,
        }
    }
}

/// Independent facet constraints. An empty list means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, deserialize_with = "string_list")]
    pub brands: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub sub_categories: Vec<String>,
    #[serde(default, deserialize_with = "number_list")]
    pub price_range: Vec<f64>, // [min, max] or empty
    #[serde(default, deserialize_with = "string_list")]
    pub intensities: Vec<String>,
    #[serde(default, deserialize_with = "flag_list")]
    pub npds: Vec<u8>,
    #[serde(default, deserialize_with = "flag_list")]
    pub benchmarks: Vec<u8>,
    #[serde(default, deserialize_with = "flag_list")]
    pub promo_items: Vec<u8>,
    #[serde(default, deserialize_with = "string_list")]
    pub platforms: Vec<String>,
}

impl Filters {
    /// True when no facet is constrained
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
            && self.sub_categories.is_empty()
            && self.price_range.is_empty()
            && self.intensities.is_empty()
            && self.npds.is_empty()
            && self.benchmarks.is_empty()
            && self.promo_items.is_empty()
            && self.platforms.is_empty()
    }

    pub fn is_active(&self, facet: FacetKey) -> bool {
        match facet {
            FacetKey::SubCategory => !self.sub_categories.is_empty(),
            FacetKey::Brand => !self.brands.is_empty(),
            FacetKey::Price => !self.price_range.is_empty(),
            FacetKey::Intensity => !self.intensities.is_empty(),
            FacetKey::Npd => !self.npds.is_empty(),
            FacetKey::Benchmark => !self.benchmarks.is_empty(),
            FacetKey::PromoItem => !self.promo_items.is_empty(),
            FacetKey::Platform => !self.platforms.is_empty(),
        }
    }

    /// Constrained facets, in canonical order
    pub fn active_facets(&self) -> Vec<FacetKey> {
        FacetKey::iter().filter(|f| self.is_active(*f)).collect()
    }

    /// Copy of these filters with `facet` narrowed to exactly `value`.
    /// Price cannot be narrowed to a single value and is left unchanged.
    pub fn with_only(&self, facet: FacetKey, value: &str) -> Filters {
        let mut narrowed = self.clone();
        let flag = || vec![u8::from(value.trim() == "1")];
        match facet {
            FacetKey::SubCategory => narrowed.sub_categories = vec![value.to_string()],
            FacetKey::Brand => narrowed.brands = vec![value.to_string()],
            FacetKey::Intensity => narrowed.intensities = vec![value.to_string()],
            FacetKey::Platform => narrowed.platforms = vec![value.to_string()],
            FacetKey::Npd => narrowed.npds = flag(),
            FacetKey::Benchmark => narrowed.benchmarks = flag(),
            FacetKey::PromoItem => narrowed.promo_items = flag(),
            FacetKey::Price => {}
        }
        narrowed
    }
}
