use crate::{
    constants::DETAILS_TO_SHELF_UNITS,
    error::{PlanogramError, Result},
    model::ProductPlacement,
};

/// Validated display-unit size a new placement needs on a shelf
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    width: f64,
    height: f64,
}

impl Footprint {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(PlanogramError::InvalidFootprint { width, height });
        }
        Ok(Self { width, height })
    }

    /// Footprint of a product about to be placed. Unlike shelf-line building,
    /// missing dimensions are an error here rather than a default.
    pub fn for_product(product: &ProductPlacement, scale: f64) -> Result<Self> {
        let details = &product.product_details;
        let missing = |dimension: &'static str| PlanogramError::MissingDimension {
            product_id: product.product_id.clone(),
            dimension,
        };
        let width = details.width.ok_or_else(|| missing("width"))?;
        let height = details.height.ok_or_else(|| missing("height"))?;

        let to_display =
            |d: f64, facings: u32| d / DETAILS_TO_SHELF_UNITS * scale * f64::from(facings);
        Self::new(
            to_display(width, product.facings_wide),
            to_display(height, product.facings_high),
        )
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductDetails;

    fn product(width: Option<f64>, height: Option<f64>) -> ProductPlacement {
        ProductPlacement {
            product_id: "p1".into(),
            bay: 1,
            shelf: 1,
            position: 0.0,
            facings_wide: 2,
            facings_high: 1,
            orientation: None,
            product_details: ProductDetails {
                width,
                height,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(Footprint::new(0.0, 10.0).is_err());
        assert!(Footprint::new(10.0, -1.0).is_err());
        assert!(Footprint::new(f64::NAN, 10.0).is_err());
        assert!(Footprint::new(10.0, 10.0).is_ok());
    }

    #[test]
    fn test_for_product_scales_and_multiplies_facings() {
        let fp = Footprint::for_product(&product(Some(250.0), Some(400.0)), 2.0).unwrap();
        assert_eq!(fp.width(), 100.0);
        assert_eq!(fp.height(), 80.0);
    }

    #[test]
    fn test_for_product_requires_dimensions() {
        let err = Footprint::for_product(&product(None, Some(400.0)), 1.0).unwrap_err();
        assert!(matches!(
            err,
            PlanogramError::MissingDimension {
                dimension: "width",
                ..
            }
        ));
        assert!(Footprint::for_product(&product(Some(100.0), None), 1.0).is_err());
    }
}
