use crate::{
    facets::{
        engine::FacetFilter,
        filters::{FacetKey, Filters},
    },
    model::ProductPlacement,
};
use std::collections::BTreeMap;

impl FacetFilter {
    /// Match count for every value of `facet` present in `products`.
    ///
    /// Each count is the number of products that pass `filters` with `facet`
    /// narrowed to that one value, so every other active facet (price
    /// included) still applies. Values filtered out entirely report 0.
    pub fn facet_counts(
        &self,
        products: &[ProductPlacement],
        filters: &Filters,
        facet: FacetKey,
    ) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = products
            .iter()
            .filter_map(|p| facet.value_of(p))
            .filter(|v| !v.is_empty())
            .map(|v| (v, 0))
            .collect();

        for product in self.filter(products, filters, Some(facet)) {
            if let Some(count) = facet.value_of(product).and_then(|v| counts.get_mut(&v)) {
                *count += 1;
            }
        }
        counts
    }

    pub fn brand_counts(
        &self,
        products: &[ProductPlacement],
        filters: &Filters,
    ) -> BTreeMap<String, usize> {
        self.facet_counts(products, filters, FacetKey::Brand)
    }

    pub fn sub_category_counts(
        &self,
        products: &[ProductPlacement],
        filters: &Filters,
    ) -> BTreeMap<String, usize> {
        self.facet_counts(products, filters, FacetKey::SubCategory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Price, ProductDetails};

    fn product(brand: &str, sub_category: &str, price: Price) -> ProductPlacement {
        ProductPlacement {
            product_id: format!("{brand}-{sub_category}"),
            bay: 1,
            shelf: 1,
            position: 0.0,
            facings_wide: 1,
            facings_high: 1,
            orientation: None,
            product_details: ProductDetails {
                brand_name: Some(brand.into()),
                sub_category_name: Some(sub_category.into()),
                price,
                ..Default::default()
            },
        }
    }

    fn catalogue() -> Vec<ProductPlacement> {
        vec![
            product("Lavazza", "Beans", Price::Numeric(5.99)),
            product("Kenco", "Ground", Price::Numeric(3.49)),
            product("Lavazza", "Ground", Price::Numeric(7.99)),
            product("Nescafe", "Instant", Price::Numeric(4.99)),
        ]
    }

    #[test]
    fn test_brand_counts_ignore_selected_brands() {
        let products = catalogue();
        let filters = Filters {
            brands: vec!["Kenco".into()],
            sub_categories: vec!["Ground".into()],
            ..Default::default()
        };
        let counts = FacetFilter::default().brand_counts(&products, &filters);

        assert_eq!(counts.get("Lavazza"), Some(&1));
        assert_eq!(counts.get("Kenco"), Some(&1));
        assert_eq!(counts.get("Nescafe"), Some(&0));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_counts_respect_price() {
        let products = catalogue();
        let filters = Filters {
            price_range: vec![4.0, 6.0],
            ..Default::default()
        };
        let counts = FacetFilter::default().sub_category_counts(&products, &filters);

        assert_eq!(counts.get("Beans"), Some(&1));
        assert_eq!(counts.get("Ground"), Some(&0));
        assert_eq!(counts.get("Instant"), Some(&1));
    }

    #[test]
    fn test_malformed_price_range_matches_derived_bounds() {
        let products = catalogue();
        let engine = FacetFilter::default();
        let malformed = Filters {
            price_range: vec![1.0],
            ..Default::default()
        };
        let derived = Filters {
            price_range: vec![3.49, 7.99],
            ..Default::default()
        };
        assert_eq!(
            engine.brand_counts(&products, &malformed),
            engine.brand_counts(&products, &derived)
        );
    }

    #[test]
    fn test_counts_match_narrowed_filter() {
        let products = catalogue();
        let engine = FacetFilter::default();
        let filters = Filters {
            sub_categories: vec!["Ground".into(), "Beans".into()],
            price_range: vec![3.0, 6.0],
            ..Default::default()
        };
        for (brand, count) in engine.brand_counts(&products, &filters) {
            let narrowed = filters.with_only(FacetKey::Brand, &brand);
            assert_eq!(engine.filter(&products, &narrowed, None).len(), count, "{brand}");
        }
    }

    #[test]
    fn test_empty_products_give_empty_counts() {
        let engine = FacetFilter::default();
        assert!(engine.brand_counts(&[], &Filters::default()).is_empty());
        assert!(engine.sub_category_counts(&[], &Filters::default()).is_empty());
    }
}
