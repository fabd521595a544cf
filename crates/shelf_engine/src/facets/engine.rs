use crate::{
    config::FilterConfig,
    facets::{
        filters::{FacetKey, Filters},
        price::PriceConstraint,
    },
    model::ProductPlacement,
};
use itertools::Itertools;
use log::trace;

/// Filters product lists against [`Filters`] and discovers facet options.
///
/// Stateless apart from the fallback price bounds; every call works on the
/// snapshot it is given.
#[derive(Debug, Clone, Default)]
pub struct FacetFilter {
    config: FilterConfig,
}

impl FacetFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Products passing every facet. `exclude` drops one facet from the check,
    /// which is how the UI counts options for the facet it is displaying.
    /// Input order is preserved.
    pub fn filter<'p>(
        &self,
        products: &'p [ProductPlacement],
        filters: &Filters,
        exclude: Option<FacetKey>,
    ) -> Vec<&'p ProductPlacement> {
        let price = if exclude == Some(FacetKey::Price) {
            PriceConstraint::Unconstrained
        } else {
            PriceConstraint::resolve(&filters.price_range, products, &self.config)
        };
        let kept: Vec<_> = products
            .iter()
            .filter(|p| matches_all(p, filters, price, exclude))
            .collect();
        trace!(
            "Filter kept {}/{} products (excluding {:?})",
            kept.len(),
            products.len(),
            exclude
        );
        kept
    }

    /// Distinct non-empty values of `product_details[key]`, first-seen order
    pub fn unique_options(&self, products: &[ProductPlacement], key: &str) -> Vec<String> {
        products
            .iter()
            .filter_map(|p| p.product_details.attribute(key))
            .unique()
            .collect()
    }
}

fn matches_all(
    product: &ProductPlacement,
    filters: &Filters,
    price: PriceConstraint,
    exclude: Option<FacetKey>,
) -> bool {
    let details = &product.product_details;
    let skip = |facet: FacetKey| exclude == Some(facet);
    let in_set = |set: &[String], value: &Option<String>| {
        set.is_empty() || value.as_ref().is_some_and(|v| set.contains(v))
    };
    let in_flags = |set: &[u8], value: u8| set.is_empty() || set.contains(&value);

    (skip(FacetKey::SubCategory) || in_set(&filters.sub_categories, &details.sub_category_name))
        && (skip(FacetKey::Brand) || in_set(&filters.brands, &details.brand_name))
        && (skip(FacetKey::Price) || price.accepts(product))
        && (skip(FacetKey::Intensity) || in_set(&filters.intensities, &details.intensity))
        && (skip(FacetKey::Npd) || in_flags(&filters.npds, details.npd.as_number()))
        && (skip(FacetKey::Benchmark) || in_flags(&filters.benchmarks, details.benchmark.as_number()))
        && (skip(FacetKey::PromoItem)
            || in_flags(&filters.promo_items, details.promo_item.as_number()))
        && (skip(FacetKey::Platform) || in_set(&filters.platforms, &details.platform))
}
