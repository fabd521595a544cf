/// Shelf filler chunk width (display units)
pub const DEFAULT_FILLER_UNIT: f64 = 5.0;

/// Fallback product width/height per facing when the details omit them (display units)
pub const DEFAULT_PRODUCT_DIMENSION: f64 = 50.0;

/// product_details dimensions are stored in mm, shelves in cm
pub const DETAILS_TO_SHELF_UNITS: f64 = 10.0;

/// Default display scale (display units per domain unit)
pub const DEFAULT_SCALE: f64 = 1.0;

/// Price bounds used when a malformed range meets a dataset with no numeric prices
pub const FALLBACK_PRICE_MIN: f64 = 0.0;
pub const FALLBACK_PRICE_MAX: f64 = 1_000_000.0;

/// Debounce window callers are expected to apply before re-running the engine
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Tolerance for floating point comparisons on shelf widths
pub const WIDTH_EPSILON: f64 = 1e-9;

/// Id prefix for filler slots
pub const EMPTY_SLOT_PREFIX: &str = "empty";
