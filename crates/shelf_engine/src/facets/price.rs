use crate::{config::FilterConfig, model::ProductPlacement};
use log::warn;

/// Price facet after resolving the raw `priceRange` array
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceConstraint {
    Unconstrained,
    Between { min: f64, max: f64 },
}

impl PriceConstraint {
    /// Resolve a raw range against the dataset it will filter.
    ///
    /// - `[]` means no constraint
    /// - `[min, max]` is used as given (inclusive)
    /// - any other length is malformed; bounds are derived from the numeric
    ///   prices in `products`, or from the configured fallback if there are none
    pub fn resolve(range: &[f64], products: &[ProductPlacement], config: &FilterConfig) -> Self {
        match range {
            [] => PriceConstraint::Unconstrained,
            [min, max] => PriceConstraint::Between {
                min: *min,
                max: *max,
            },
            malformed => {
                let (min, max) = dataset_bounds(products).unwrap_or((
                    config.fallback_price_min,
                    config.fallback_price_max,
                ));
                warn!(
                    "Malformed price range {:?}; using dataset bounds [{}, {}]",
                    malformed, min, max
                );
                PriceConstraint::Between { min, max }
            }
        }
    }

    /// Products with a non-numeric price never pass an active constraint
    pub fn accepts(&self, product: &ProductPlacement) -> bool {
        match self {
            PriceConstraint::Unconstrained => true,
            PriceConstraint::Between { min, max } => product
                .product_details
                .price
                .as_f64()
                .is_some_and(|p| p >= *min && p <= *max),
        }
    }
}

fn dataset_bounds(products: &[ProductPlacement]) -> Option<(f64, f64)> {
    products
        .iter()
        .filter_map(|p| p.product_details.price.as_f64())
        .fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Price, ProductDetails};

    fn priced(price: Price) -> ProductPlacement {
        ProductPlacement {
            product_id: "p".into(),
            bay: 1,
            shelf: 1,
            position: 0.0,
            facings_wide: 1,
            facings_high: 1,
            orientation: None,
            product_details: ProductDetails {
                price,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_malformed_range_uses_dataset_bounds() {
        let products: Vec<_> = [5.99, 3.49, 7.99, 4.99]
            .into_iter()
            .map(|p| priced(Price::Numeric(p)))
            .chain([priced(Price::Invalid("n/a".into()))])
            .collect();

        let resolved = PriceConstraint::resolve(&[1.0], &products, &FilterConfig::default());
        assert_eq!(
            resolved,
            PriceConstraint::Between {
                min: 3.49,
                max: 7.99
            }
        );
        let three = PriceConstraint::resolve(&[1.0, 2.0, 3.0], &products, &FilterConfig::default());
        assert_eq!(three, resolved);
    }

    #[test]
    fn test_malformed_range_without_numeric_prices_uses_fallback() {
        let products = vec![priced(Price::Missing)];
        let resolved = PriceConstraint::resolve(&[1.0], &products, &FilterConfig::default());
        assert_eq!(
            resolved,
            PriceConstraint::Between {
                min: 0.0,
                max: 1_000_000.0
            }
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let c = PriceConstraint::Between { min: 2.0, max: 4.0 };
        assert!(c.accepts(&priced(Price::Numeric(2.0))));
        assert!(c.accepts(&priced(Price::Numeric(4.0))));
        assert!(!c.accepts(&priced(Price::Numeric(4.01))));
    }

    #[test]
    fn test_non_numeric_price_only_passes_unconstrained() {
        let invalid = priced(Price::Invalid("invalid".into()));
        let missing = priced(Price::Missing);
        let wide = PriceConstraint::Between {
            min: f64::MIN,
            max: f64::MAX,
        };
        assert!(!wide.accepts(&invalid));
        assert!(!wide.accepts(&missing));
        assert!(PriceConstraint::Unconstrained.accepts(&invalid));
    }
}
