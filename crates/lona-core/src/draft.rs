//! # Draft Quote
//!
//! The mutable pre-submission state: header fields plus the two item lists
//! the operator builds up one action at a time.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Quote Operations                               │
//! │                                                                         │
//! │  Operator Action           Draft Method            State Change         │
//! │  ───────────────           ────────────            ────────────         │
//! │                                                                         │
//! │  Add measure ────────────► add_made_item() ──────► made.push(item)     │
//! │                                                                         │
//! │  Add roll ───────────────► add_roll_item() ──────► rolls.push(item)    │
//! │                                                                         │
//! │  Remove line ────────────► remove_*_item(i) ─────► list.remove(i)      │
//! │                                                                         │
//! │  Clear list ─────────────► clear_*_items() ──────► list.clear()        │
//! │                                                                         │
//! │  Preview totals ─────────► totals() ─────────────► (read only)         │
//! │                                                                         │
//! │  Submit ─────────────────► submit() ─────────────► QuoteSubmission     │
//! │                                                                         │
//! │  The draft is owned by exactly one caller; every mutation goes          │
//! │  through `&mut self`. submit() borrows, so a failed persist leaves      │
//! │  the draft intact for a retry.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reopening
//! A stored quote can be reopened with [`DraftQuote::from_stored`]; editing
//! continues on the reconstructed draft and submits as a NEW quote. There is
//! no update-in-place.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::pricing::{price_made_items, price_roll_items, MadeTotals, RollTotals};
use crate::tax::TaxTables;
use crate::types::{MadeItem, Quote, QuoteHeader, RollItem};
use crate::validation::{validate_made_item, validate_roll_item};

// =============================================================================
// Draft Quote
// =============================================================================

/// The in-progress quote before submission.
///
/// ## Invariants
/// - Every item in the lists passed validation when it was added
///   (positive dimensions, quantity ≥ 1, thickness where required).
/// - Header fields are free-form and validated nowhere beyond their types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftQuote {
    /// Client, seller, mode and base-price fields, edited freely.
    pub header: QuoteHeader,

    made_items: Vec<MadeItem>,
    roll_items: Vec<RollItem>,
}

impl DraftQuote {
    /// Creates an empty draft.
    pub fn new() -> Self {
        DraftQuote::default()
    }

    /// Reconstructs a draft from a stored quote so the operator can edit it
    /// and submit it as a new quote.
    ///
    /// Items coming from storage were validated when first added and are
    /// trusted here.
    pub fn from_stored(quote: &Quote, made_items: Vec<MadeItem>, roll_items: Vec<RollItem>) -> Self {
        DraftQuote {
            header: quote.header(),
            made_items,
            roll_items,
        }
    }

    // -------------------------------------------------------------------------
    // Item list access
    // -------------------------------------------------------------------------

    /// The made (cut-to-order) items added so far.
    pub fn made_items(&self) -> &[MadeItem] {
        &self.made_items
    }

    /// The roll items added so far.
    pub fn roll_items(&self) -> &[RollItem] {
        &self.roll_items
    }

    /// True when neither list has items.
    pub fn is_empty(&self) -> bool {
        self.made_items.is_empty() && self.roll_items.is_empty()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a made item after validating it.
    pub fn add_made_item(&mut self, item: MadeItem) -> CoreResult<()> {
        validate_made_item(&item)?;
        self.made_items.push(item);
        Ok(())
    }

    /// Adds a roll item after validating it (including the thickness rule).
    pub fn add_roll_item(&mut self, item: RollItem) -> CoreResult<()> {
        validate_roll_item(&item)?;
        self.roll_items.push(item);
        Ok(())
    }

    /// Removes the made item at `index`.
    pub fn remove_made_item(&mut self, index: usize) -> CoreResult<MadeItem> {
        if index >= self.made_items.len() {
            return Err(CoreError::NoSuchItem {
                kind: "made",
                index,
            });
        }
        Ok(self.made_items.remove(index))
    }

    /// Removes the roll item at `index`.
    pub fn remove_roll_item(&mut self, index: usize) -> CoreResult<RollItem> {
        if index >= self.roll_items.len() {
            return Err(CoreError::NoSuchItem {
                kind: "roll",
                index,
            });
        }
        Ok(self.roll_items.remove(index))
    }

    /// Sets the color of the made item at `index` (edited in the listing,
    /// not at add time).
    pub fn set_made_color(&mut self, index: usize, color: impl Into<String>) -> CoreResult<()> {
        match self.made_items.get_mut(index) {
            Some(item) => {
                item.color = color.into();
                Ok(())
            }
            None => Err(CoreError::NoSuchItem {
                kind: "made",
                index,
            }),
        }
    }

    /// Sets the color of the roll item at `index`.
    pub fn set_roll_color(&mut self, index: usize, color: impl Into<String>) -> CoreResult<()> {
        match self.roll_items.get_mut(index) {
            Some(item) => {
                item.color = color.into();
                Ok(())
            }
            None => Err(CoreError::NoSuchItem {
                kind: "roll",
                index,
            }),
        }
    }

    /// Clears the made-item list.
    pub fn clear_made_items(&mut self) {
        self.made_items.clear();
    }

    /// Clears the roll-item list.
    pub fn clear_roll_items(&mut self) {
        self.roll_items.clear();
    }

    /// Full reset: blank header, empty lists.
    pub fn clear(&mut self) {
        *self = DraftQuote::default();
    }

    // -------------------------------------------------------------------------
    // Totals and submission
    // -------------------------------------------------------------------------

    /// Live preview of both sections' totals. Empty sections yield all-zero
    /// totals, never an error.
    pub fn totals(&self, tables: &TaxTables) -> (MadeTotals, RollTotals) {
        (
            price_made_items(&self.made_items, &self.header, tables),
            price_roll_items(&self.roll_items, &self.header),
        )
    }

    /// Snapshots the draft for persistence and rendering.
    ///
    /// Borrows the draft: a persistence failure downstream leaves the draft
    /// untouched so the operator can retry.
    ///
    /// ## Errors
    /// [`CoreError::EmptyQuote`] when both item lists are empty.
    pub fn submit(&self, tables: &TaxTables) -> CoreResult<QuoteSubmission> {
        if self.is_empty() {
            return Err(CoreError::EmptyQuote);
        }

        let (made_totals, roll_totals) = self.totals(tables);
        Ok(QuoteSubmission {
            header: self.header.clone(),
            made_items: self.made_items.clone(),
            roll_items: self.roll_items.clone(),
            made_totals,
            roll_totals,
        })
    }
}

// =============================================================================
// Quote Submission
// =============================================================================

/// A validated, fully-priced snapshot of a draft, ready for the persistence
/// gateway and the document renderer. The renderer consumes the totals
/// as-is and never recomputes tax logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSubmission {
    pub header: QuoteHeader,
    pub made_items: Vec<MadeItem>,
    pub roll_items: Vec<RollItem>,
    pub made_totals: MadeTotals,
    pub roll_totals: RollTotals,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClientKind, OrderMode};
    use chrono::Utc;

    fn sample_made() -> MadeItem {
        MadeItem {
            product: "Lonil de PVC".to_string(),
            length_m: 2.0,
            width_m: 1.5,
            quantity: 3,
            color: String::new(),
            unit_price: None,
        }
    }

    fn sample_roll() -> RollItem {
        RollItem {
            product: "Capota Marítima".to_string(),
            length_m: 10.0,
            width_m: 1.4,
            quantity: 2,
            color: String::new(),
            thickness_mm: None,
            unit_price: None,
        }
    }

    #[test]
    fn test_add_and_remove() {
        let mut draft = DraftQuote::new();
        draft.add_made_item(sample_made()).unwrap();
        draft.add_made_item(sample_made()).unwrap();
        assert_eq!(draft.made_items().len(), 2);

        let removed = draft.remove_made_item(0).unwrap();
        assert_eq!(removed.product, "Lonil de PVC");
        assert_eq!(draft.made_items().len(), 1);

        assert!(draft.remove_made_item(5).is_err());
    }

    #[test]
    fn test_add_rejects_invalid_item() {
        let mut draft = DraftQuote::new();
        let mut bad = sample_made();
        bad.length_m = 0.0;
        assert!(draft.add_made_item(bad).is_err());
        assert!(draft.is_empty());
    }

    #[test]
    fn test_roll_thickness_enforced_at_add() {
        let mut draft = DraftQuote::new();
        let mut film = sample_roll();
        film.product = "Filme Liso".to_string();
        assert!(draft.add_roll_item(film.clone()).is_err());

        film.thickness_mm = Some(0.1);
        assert!(draft.add_roll_item(film).is_ok());
    }

    #[test]
    fn test_set_color() {
        let mut draft = DraftQuote::new();
        draft.add_made_item(sample_made()).unwrap();
        draft.set_made_color(0, "Azul").unwrap();
        assert_eq!(draft.made_items()[0].color, "Azul");

        assert!(draft.set_roll_color(0, "Verde").is_err());
    }

    #[test]
    fn test_clear() {
        let mut draft = DraftQuote::new();
        draft.header.client_name = "Cliente".to_string();
        draft.add_made_item(sample_made()).unwrap();
        draft.add_roll_item(sample_roll()).unwrap();

        draft.clear_made_items();
        assert!(draft.made_items().is_empty());
        assert!(!draft.roll_items().is_empty());

        draft.clear();
        assert!(draft.is_empty());
        assert!(draft.header.client_name.is_empty());
    }

    #[test]
    fn test_submit_empty_draft_fails() {
        let draft = DraftQuote::new();
        assert!(matches!(
            draft.submit(&TaxTables::new()),
            Err(CoreError::EmptyQuote)
        ));
    }

    #[test]
    fn test_submit_snapshots_totals() {
        let mut draft = DraftQuote::new();
        draft.header.base_price = 10.0;
        draft.header.order_mode = OrderMode::Direta;
        draft.add_made_item(sample_made()).unwrap();

        let submission = draft.submit(&TaxTables::new()).unwrap();
        assert_eq!(submission.made_items.len(), 1);
        assert_eq!(submission.made_totals.area_total, 9.0);
        assert_eq!(submission.made_totals.gross_total, 90.0);
        // Draft is still usable after a borrow-based submit
        assert_eq!(draft.made_items().len(), 1);
    }

    #[test]
    fn test_from_stored_reopens_for_new_quote() {
        let quote = Quote {
            id: 42,
            created_at: Utc::now(),
            client_name: "Transportes Andrade".to_string(),
            client_tax_id: String::new(),
            client_kind: ClientKind::Revenda,
            state: "SP".to_string(),
            freight: Default::default(),
            order_mode: OrderMode::Direta,
            seller_name: "Paula".to_string(),
            seller_phone: String::new(),
            seller_email: String::new(),
            note: String::new(),
            base_price: 15.0,
        };

        let draft = DraftQuote::from_stored(&quote, vec![sample_made()], vec![sample_roll()]);
        assert_eq!(draft.header.client_name, "Transportes Andrade");
        assert_eq!(draft.header.base_price, 15.0);
        assert_eq!(draft.made_items().len(), 1);
        assert_eq!(draft.roll_items().len(), 1);

        // The reconstructed draft submits like any other
        let submission = draft.submit(&TaxTables::new()).unwrap();
        assert!(submission.made_totals.final_total > 0.0);
        assert!(submission.roll_totals.final_total > 0.0);
    }
}
