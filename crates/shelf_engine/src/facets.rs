pub mod counts;
pub mod engine;
pub mod filters;
pub mod price;

pub use engine::FacetFilter;
pub use filters::{FacetKey, Filters};
pub use price::PriceConstraint;
