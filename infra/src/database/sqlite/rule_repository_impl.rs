//! SQLite implementation of the RuleRepository trait.
//!
//! Rules live in the `forwarding_rules` table. Ids come from an
//! AUTOINCREMENT primary key, which guarantees they are never reused
//! after a delete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use sf_core::domain::entities::{ForwardingRule, RuleDraft, RuleId};
use sf_core::errors::DomainError;
use sf_core::repositories::RuleRepository;

const SELECT_COLUMNS: &str = "SELECT id, sender_number, sender_exact_match, message_content, \
     forward_to_number, is_enabled, created_at, updated_at FROM forwarding_rules";

/// SQLite implementation of RuleRepository
pub struct SqliteRuleRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteRuleRepository {
    /// Create a new SQLite rule repository
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool from SQLx, with the schema created
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn read_error(context: &str, e: sqlx::Error) -> DomainError {
        DomainError::StoreRead {
            message: format!("{}: {}", context, e),
        }
    }

    fn write_error(context: &str, e: sqlx::Error) -> DomainError {
        DomainError::StoreWrite {
            message: format!("{}: {}", context, e),
        }
    }

    /// Convert database row to ForwardingRule entity
    fn row_to_rule(row: &SqliteRow) -> Result<ForwardingRule, DomainError> {
        let column_error = |e: sqlx::Error| Self::read_error("Failed to decode rule row", e);

        let id: RuleId = row.try_get("id").map_err(column_error)?;
        let draft = RuleDraft {
            sender_number: row.try_get("sender_number").map_err(column_error)?,
            sender_exact_match: row.try_get("sender_exact_match").map_err(column_error)?,
            message_content: row.try_get("message_content").map_err(column_error)?,
            forward_to_number: row.try_get("forward_to_number").map_err(column_error)?,
            is_enabled: row.try_get("is_enabled").map_err(column_error)?,
        };
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(column_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(column_error)?;

        Ok(ForwardingRule::restore(id, draft, created_at, updated_at))
    }

    async fn fetch_rules(&self, query: &str) -> Result<Vec<ForwardingRule>, DomainError> {
        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::read_error("Failed to load forwarding rules", e))?;

        rows.iter().map(Self::row_to_rule).collect()
    }
}

#[async_trait]
impl RuleRepository for SqliteRuleRepository {
    async fn list_enabled(&self) -> Result<Vec<ForwardingRule>, DomainError> {
        self.fetch_rules(&format!("{} WHERE is_enabled = 1 ORDER BY id", SELECT_COLUMNS))
            .await
    }

    async fn list_all(&self) -> Result<Vec<ForwardingRule>, DomainError> {
        self.fetch_rules(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .await
    }

    async fn find_by_id(&self, id: RuleId) -> Result<Option<ForwardingRule>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::read_error("Failed to find forwarding rule", e))?;

        row.as_ref().map(Self::row_to_rule).transpose()
    }

    async fn insert(&self, draft: &RuleDraft) -> Result<RuleId, DomainError> {
        let query = r#"
            INSERT INTO forwarding_rules (
                sender_number, sender_exact_match, message_content,
                forward_to_number, is_enabled, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(&draft.sender_number)
            .bind(draft.sender_exact_match)
            .bind(&draft.message_content)
            .bind(&draft.forward_to_number)
            .bind(draft.is_enabled)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("Failed to insert forwarding rule", e))?;

        let id = result.last_insert_rowid();
        tracing::debug!(rule_id = id, "Inserted forwarding rule");
        Ok(id)
    }

    async fn update(&self, rule: &ForwardingRule) -> Result<(), DomainError> {
        let query = r#"
            UPDATE forwarding_rules
            SET sender_number = ?, sender_exact_match = ?, message_content = ?,
                forward_to_number = ?, is_enabled = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&rule.sender_number)
            .bind(rule.sender_exact_match)
            .bind(&rule.message_content)
            .bind(&rule.forward_to_number)
            .bind(rule.is_enabled)
            .bind(rule.updated_at)
            .bind(rule.id())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("Failed to update forwarding rule", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::rule_not_found(rule.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: RuleId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM forwarding_rules WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("Failed to delete forwarding rule", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM forwarding_rules")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::read_error("Failed to count forwarding rules", e))?;

        Ok(count.max(0) as u64)
    }
}
