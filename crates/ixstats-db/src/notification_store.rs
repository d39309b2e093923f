//! Notification persistence.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use ixstats_types::{CountryId, Notification, NotificationId};

use crate::codec::{enum_from_db, enum_to_db};
use crate::error::DbError;

/// Default maximum number of notifications returned by a listing.
const DEFAULT_LIST_LIMIT: i64 = 100;

/// Raw database row for the `notifications` table.
#[derive(Debug, sqlx::FromRow)]
pub struct NotificationRow {
    /// Notification UUID.
    pub id: Uuid,
    /// Related country UUID, if any.
    pub country_id: Option<Uuid>,
    /// Severity variant name.
    pub level: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the notification has been read.
    pub is_read: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<NotificationRow> for Notification {
    type Error = DbError;

    fn try_from(row: NotificationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: NotificationId::from(row.id),
            country_id: row.country_id.map(CountryId::from),
            level: enum_from_db(&row.level)?,
            title: row.title,
            message: row.message,
            read: row.is_read,
            created_at: row.created_at,
        })
    }
}

/// Operations on the `notifications` table.
pub struct NotificationStore<'a> {
    pool: &'a PgPool,
}

impl<'a> NotificationStore<'a> {
    /// Create a new notification store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the statement fails, or
    /// [`DbError::InvalidValue`] if the level cannot be encoded.
    pub async fn insert(&self, notification: &Notification) -> Result<(), DbError> {
        sqlx::query(
            r"INSERT INTO notifications (id, country_id, level, title, message, is_read, created_at)
              VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(notification.id.into_inner())
        .bind(notification.country_id.map(CountryId::into_inner))
        .bind(enum_to_db(&notification.level)?)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.read)
        .bind(notification.created_at)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// List notifications newest first, optionally only unread ones.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::InvalidValue`] if a stored value cannot be decoded.
    pub async fn list(
        &self,
        unread_only: bool,
        limit: Option<i64>,
    ) -> Result<Vec<Notification>, DbError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let rows = sqlx::query_as::<_, NotificationRow>(
            r"SELECT id, country_id, level, title, message, is_read, created_at
              FROM notifications
              WHERE ($1 = FALSE OR is_read = FALSE)
              ORDER BY created_at DESC
              LIMIT $2",
        )
        .bind(unread_only)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Notification::try_from).collect()
    }

    /// Mark a notification read. Returns whether a row was updated.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the statement fails.
    pub async fn mark_read(&self, id: NotificationId) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
