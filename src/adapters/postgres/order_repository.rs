//! PostgreSQL implementation of OrderRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, Timestamp, UserId};
use crate::domain::order::{AddressRecord, Order, PaidOrderUpdate};
use crate::ports::OrderRepository;

/// PostgreSQL implementation of the OrderRepository port.
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgresOrderRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row returned by the paid-order update.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: String,
    user_id: String,
    is_paid: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: OrderId::new(row.id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid order id: {}", e))
            })?,
            user_id: UserId::new(row.user_id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            is_paid: row.is_paid,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

/// Address tables share a shape; only the table name differs.
#[derive(Debug, Clone, Copy)]
enum AddressTable {
    Shipping,
    Billing,
}

impl AddressTable {
    fn insert_sql(self) -> &'static str {
        match self {
            AddressTable::Shipping => {
                r#"
                INSERT INTO shipping_addresses (id, name, street, city, postal_code, country, state)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#
            }
            AddressTable::Billing => {
                r#"
                INSERT INTO billing_addresses (id, name, street, city, postal_code, country, state)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#
            }
        }
    }
}

async fn insert_address(
    tx: &mut Transaction<'_, Postgres>,
    table: AddressTable,
    record: &AddressRecord,
) -> Result<String, DomainError> {
    let id = Uuid::new_v4().to_string();

    sqlx::query(table.insert_sql())
        .bind(&id)
        .bind(&record.name)
        .bind(&record.address.street)
        .bind(&record.address.city)
        .bind(&record.address.postal_code)
        .bind(&record.address.country)
        .bind(record.address.state.as_deref())
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert {:?} address: {}", table, e),
            )
        })?;

    Ok(id)
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn mark_paid(&self, update: &PaidOrderUpdate) -> Result<Order, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to start transaction: {}", e),
            )
        })?;

        let shipping_id =
            insert_address(&mut tx, AddressTable::Shipping, &update.shipping_address).await?;
        let billing_id =
            insert_address(&mut tx, AddressTable::Billing, &update.billing_address).await?;

        let row: Option<OrderRow> = sqlx::query_as(
            r#"
            UPDATE orders
            SET is_paid = TRUE,
                shipping_address_id = $2,
                billing_address_id = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, is_paid, created_at
            "#,
        )
        .bind(update.order_id.as_str())
        .bind(&shipping_id)
        .bind(&billing_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update order: {}", e))
        })?;

        // Dropping the transaction rolls back the address inserts
        let row = row.ok_or_else(|| {
            DomainError::new(ErrorCode::OrderNotFound, update.order_id.to_string())
        })?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit transaction: {}", e),
            )
        })?;

        Order::try_from(row)
    }
}
