//! # Validation Module
//!
//! Input validation for draft line items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Entry form                                                   │
//! │  ├── Field minimums (dimension > 0, quantity ≥ 1)                      │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (draft add_item)                                 │
//! │  ├── Same minimums re-checked                                          │
//! │  └── Thickness rule for thickness-specified families                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL and foreign key constraints                              │
//! │                                                                         │
//! │  Deliberately thin: beyond these minimums, values pass through         │
//! │  as-is. The aggregator accepts whatever the draft admitted.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::requires_thickness;
use crate::error::ValidationError;
use crate::types::{MadeItem, RollItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a dimension (length, width) is strictly positive and finite.
pub fn validate_dimension(field: &'static str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::MustBePositive { field });
    }
    Ok(())
}

/// Validates a quantity is at least one.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::QuantityTooSmall { got: quantity });
    }
    Ok(())
}

/// Validates a product name is present.
pub fn validate_product(product: &str) -> ValidationResult<()> {
    if product.trim().is_empty() {
        return Err(ValidationError::Required { field: "product" });
    }
    Ok(())
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates a made item before it enters a draft.
pub fn validate_made_item(item: &MadeItem) -> ValidationResult<()> {
    validate_product(&item.product)?;
    validate_dimension("length", item.length_m)?;
    validate_dimension("width", item.width_m)?;
    validate_quantity(item.quantity)?;
    Ok(())
}

/// Validates a roll item before it enters a draft.
///
/// On top of the shared minimums, thickness-specified product families
/// (Geomembrana, Vitro, Filme, ...) must carry a thickness.
pub fn validate_roll_item(item: &RollItem) -> ValidationResult<()> {
    validate_product(&item.product)?;
    validate_dimension("length", item.length_m)?;
    validate_dimension("width", item.width_m)?;
    validate_quantity(item.quantity)?;

    if requires_thickness(&item.product) && item.thickness_mm.is_none() {
        return Err(ValidationError::ThicknessRequired {
            product: item.product.clone(),
        });
    }
    if let Some(thickness) = item.thickness_mm {
        validate_dimension("thickness", thickness)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
