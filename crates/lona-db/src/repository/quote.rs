//! # Quote Repository
//!
//! Database operations for quotes and their line items.
//!
//! ## Quote Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quote Lifecycle                                   │
//! │                                                                         │
//! │  1. SUBMIT                                                             │
//! │     └── insert(header, made_items, roll_items)                         │
//! │         One transaction: quote row, then every item row.               │
//! │         Returns the sequential quote id.                               │
//! │                                                                         │
//! │  2. READ BACK                                                          │
//! │     └── get_by_id() → (Quote, made items, roll items)                  │
//! │     └── list() → newest-first summaries for the history page           │
//! │                                                                         │
//! │  3. (OPTIONAL) DELETE                                                  │
//! │     └── delete() → cascades to both item tables                        │
//! │                                                                         │
//! │  There is NO update: a stored quote is immutable. Editing reopens      │
//! │  it as a draft that submits as a new quote.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use lona_core::{MadeItem, Quote, QuoteHeader, QuoteSummary, RollItem};

/// Repository for quote database operations.
#[derive(Debug, Clone)]
pub struct QuoteRepository {
    pool: SqlitePool,
}

impl QuoteRepository {
    /// Creates a new QuoteRepository.
    pub fn new(pool: SqlitePool) -> Self {
        QuoteRepository { pool }
    }

    /// Inserts a complete quote graph and returns the assigned id.
    ///
    /// ## Transaction
    /// The quote row and every item row go in one transaction: either the
    /// whole graph is stored or nothing is. On failure the caller's draft
    /// is untouched and the submission can be retried.
    pub async fn insert(
        &self,
        header: &QuoteHeader,
        made_items: &[MadeItem],
        roll_items: &[RollItem],
    ) -> DbResult<i64> {
        let created_at = Utc::now();

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO quotes (
                created_at,
                client_name, client_tax_id, client_kind, state, freight, order_mode,
                seller_name, seller_phone, seller_email,
                note, base_price
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(created_at)
        .bind(&header.client_name)
        .bind(&header.client_tax_id)
        .bind(header.client_kind)
        .bind(&header.state)
        .bind(header.freight)
        .bind(header.order_mode)
        .bind(&header.seller_name)
        .bind(&header.seller_phone)
        .bind(&header.seller_email)
        .bind(&header.note)
        .bind(header.base_price)
        .execute(&mut *tx)
        .await?;

        let quote_id = result.last_insert_rowid();
        debug!(quote_id, "Inserted quote header");

        for item in made_items {
            sqlx::query(
                r#"
                INSERT INTO made_items (
                    quote_id, product, length_m, width_m, quantity, color, unit_price
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
            )
            .bind(quote_id)
            .bind(&item.product)
            .bind(item.length_m)
            .bind(item.width_m)
            .bind(item.quantity)
            .bind(&item.color)
            .bind(item.unit_price)
            .execute(&mut *tx)
            .await?;
        }

        for item in roll_items {
            sqlx::query(
                r#"
                INSERT INTO roll_items (
                    quote_id, product, length_m, width_m, quantity, color,
                    thickness_mm, unit_price
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
            )
            .bind(quote_id)
            .bind(&item.product)
            .bind(item.length_m)
            .bind(item.width_m)
            .bind(item.quantity)
            .bind(&item.color)
            .bind(item.thickness_mm)
            .bind(item.unit_price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            quote_id,
            made = made_items.len(),
            rolls = roll_items.len(),
            "Quote stored"
        );
        Ok(quote_id)
    }

    /// Loads a quote with both item lists.
    ///
    /// Returns `None` when the id does not exist.
    pub async fn get_by_id(
        &self,
        id: i64,
    ) -> DbResult<Option<(Quote, Vec<MadeItem>, Vec<RollItem>)>> {
        let quote: Option<Quote> = sqlx::query_as(
            r#"
            SELECT
                id, created_at,
                client_name, client_tax_id, client_kind, state, freight, order_mode,
                seller_name, seller_phone, seller_email,
                note, base_price
            FROM quotes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(quote) = quote else {
            return Ok(None);
        };

        let made_items: Vec<MadeItem> = sqlx::query_as(
            r#"
            SELECT product, length_m, width_m, quantity, color, unit_price
            FROM made_items
            WHERE quote_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let roll_items: Vec<RollItem> = sqlx::query_as(
            r#"
            SELECT product, length_m, width_m, quantity, color, thickness_mm, unit_price
            FROM roll_items
            WHERE quote_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some((quote, made_items, roll_items)))
    }

    /// Lists quote summaries for the history page, newest first.
    pub async fn list(&self) -> DbResult<Vec<QuoteSummary>> {
        let summaries: Vec<QuoteSummary> = sqlx::query_as(
            r#"
            SELECT id, created_at, client_name, seller_name
            FROM quotes
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    /// Deletes a quote; the item tables cascade.
    ///
    /// ## Errors
    /// `DbError::NotFound` when no quote has this id.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Quote", id));
        }

        info!(quote_id = id, "Quote deleted");
        Ok(())
    }

    /// Number of stored quotes.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use lona_core::{ClientKind, FreightTerm, OrderMode};

    fn sample_header() -> QuoteHeader {
        QuoteHeader {
            client_name: "Transportes Andrade".to_string(),
            client_tax_id: "12.345.678/0001-00".to_string(),
            client_kind: ClientKind::Revenda,
            state: "SP".to_string(),
            freight: FreightTerm::Fob,
            order_mode: OrderMode::Direta,
            seller_name: "Paula".to_string(),
            seller_phone: "(11) 99999-0000".to_string(),
            seller_email: "paula@example.com".to_string(),
            note: "Entrega em 10 dias".to_string(),
            base_price: 32.5,
        }
    }

    fn sample_made() -> MadeItem {
        MadeItem {
            product: "Encerado".to_string(),
            length_m: 2.0,
            width_m: 1.5,
            quantity: 3,
            color: "Azul".to_string(),
            unit_price: None,
        }
    }

    fn sample_roll() -> RollItem {
        RollItem {
            product: "Vitro 0,60".to_string(),
            length_m: 50.0,
            width_m: 1.4,
            quantity: 2,
            color: "Cristal".to_string(),
            thickness_mm: Some(0.6),
            unit_price: Some(18.9),
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let db = test_db().await;
        let repo = db.quotes();

        let id = repo
            .insert(&sample_header(), &[sample_made()], &[sample_roll()])
            .await
            .unwrap();
        assert!(id > 0);

        let (quote, made, rolls) = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(quote.id, id);
        assert_eq!(quote.client_name, "Transportes Andrade");
        assert_eq!(quote.client_kind, ClientKind::Revenda);
        assert_eq!(quote.order_mode, OrderMode::Direta);
        assert_eq!(quote.freight, FreightTerm::Fob);
        assert_eq!(quote.base_price, 32.5);

        assert_eq!(made, vec![sample_made()]);
        assert_eq!(rolls, vec![sample_roll()]);
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let db = test_db().await;
        let repo = db.quotes();

        let first = repo.insert(&sample_header(), &[sample_made()], &[]).await.unwrap();
        let second = repo.insert(&sample_header(), &[sample_made()], &[]).await.unwrap();
        assert_eq!(second, first + 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let db = test_db().await;
        assert!(db.quotes().get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = test_db().await;
        let repo = db.quotes();

        let mut header = sample_header();
        header.client_name = "Primeiro".to_string();
        repo.insert(&header, &[sample_made()], &[]).await.unwrap();
        header.client_name = "Segundo".to_string();
        repo.insert(&header, &[sample_made()], &[]).await.unwrap();

        let summaries = repo.list().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].client_name, "Segundo");
        assert_eq!(summaries[1].client_name, "Primeiro");
    }

    #[tokio::test]
    async fn test_delete_cascades_to_items() {
        let db = test_db().await;
        let repo = db.quotes();

        let id = repo
            .insert(&sample_header(), &[sample_made()], &[sample_roll()])
            .await
            .unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.get_by_id(id).await.unwrap().is_none());

        // The cascade must have emptied the item tables too
        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM made_items")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(orphans, 0);
        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roll_items")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let db = test_db().await;
        let err = db.quotes().delete(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_count() {
        let db = test_db().await;
        let repo = db.quotes();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(&sample_header(), &[sample_made()], &[]).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_reopen_stored_quote_submits_as_new_quote() {
        use lona_core::{DraftQuote, TaxTables};

        let db = test_db().await;
        let repo = db.quotes();

        let original_id = repo
            .insert(&sample_header(), &[sample_made()], &[sample_roll()])
            .await
            .unwrap();

        // Reopen: reconstruct a draft from storage, tweak it, submit again
        let (quote, made, rolls) = repo.get_by_id(original_id).await.unwrap().unwrap();
        let mut draft = DraftQuote::from_stored(&quote, made, rolls);
        draft.header.note = "Revisado".to_string();

        let submission = draft.submit(&TaxTables::new()).unwrap();
        let new_id = repo
            .insert(&submission.header, &submission.made_items, &submission.roll_items)
            .await
            .unwrap();

        // A new quote, not an update of the old one
        assert!(new_id > original_id);
        let (old, _, _) = repo.get_by_id(original_id).await.unwrap().unwrap();
        assert_eq!(old.note, "Entrega em 10 dias");
        let (new, new_made, _) = repo.get_by_id(new_id).await.unwrap().unwrap();
        assert_eq!(new.note, "Revisado");
        assert_eq!(new_made, vec![sample_made()]);
    }

    #[tokio::test]
    async fn test_items_without_overrides_roundtrip_as_none() {
        let db = test_db().await;
        let repo = db.quotes();

        let mut roll = sample_roll();
        roll.thickness_mm = None;
        roll.unit_price = None;
        roll.product = "Encerado".to_string();

        let id = repo.insert(&sample_header(), &[], &[roll]).await.unwrap();
        let (_, _, rolls) = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(rolls[0].thickness_mm, None);
        assert_eq!(rolls[0].unit_price, None);
    }
}
