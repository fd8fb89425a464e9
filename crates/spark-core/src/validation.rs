//! # Validation Module
//!
//! Product intake validation for Spark Cart.
//!
//! The cart itself never fails: unknown ids are no-ops and quantities that
//! drop to zero remove the line. Validation exists at the intake seam, where
//! the page scraper hands over a product, so a malformed card is rejected
//! before it can become a line item.
//!
//! ## Usage
//! ```rust
//! use spark_core::validation::{validate_line_id, validate_price_cents};
//!
//! validate_line_id("1722945600000-4fa3b2c1d").unwrap();
//! validate_price_cents(8000).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a line identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_line_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a unit price in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a quantity at the intake seam.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Note this is intake-only: `update_quantity` deliberately accepts ≤ 0 and
/// treats it as removal.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Product Validator
// =============================================================================

/// Validates a whole product before it enters the cart.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_line_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price.cents())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::PricingPolicy;

    #[test]
    fn test_validate_line_id() {
        assert!(validate_line_id("1722945600000-4fa3b2c1d").is_ok());
        assert!(validate_line_id("a").is_ok());
        assert!(validate_line_id("").is_err());
        assert!(validate_line_id("   ").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Sky Rocket 12-Shot").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(8000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_product() {
        let good = Product::new("a", "Rocket", Money::from_cents(80), "x.jpg");
        assert!(validate_product(&good).is_ok());

        let bad = Product::new("", "Rocket", Money::from_cents(80), "x.jpg");
        assert!(validate_product(&bad).is_err());

        let negative = Product::new("a", "Rocket", Money::from_cents(-1), "x.jpg");
        assert!(validate_product(&negative).is_err());
    }

    #[test]
    fn test_scanned_products_always_validate() {
        let product = Product::scanned(None, None, &PricingPolicy::default());
        assert!(validate_product(&product).is_ok());
    }
}
