//! 检查记录存储
//!
//! `CheckStore` 只提供 create / list / delete 三个操作，记录创建后不可修改。
//! - `PgCheckStore`: PostgreSQL 实现
//! - `MemoryCheckStore`: 进程内实现，未配置 DATABASE_URL 时使用

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::anagram_check::{AnagramCheck, NewAnagramCheck};

#[async_trait]
pub trait CheckStore: Send + Sync {
    async fn create(&self, input: NewAnagramCheck) -> Result<AnagramCheck, StoreError>;

    /// `order` 形如 "-created_date" (降序) 或 "created_date" (升序)
    async fn list(&self, order: &str, limit: i64) -> Result<Vec<AnagramCheck>, StoreError>;

    /// 删除不存在的 id 不算错误
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSpec {
    CreatedAsc,
    CreatedDesc,
}

impl OrderSpec {
    pub fn parse(spec: &str) -> Result<Self, StoreError> {
        match spec {
            "-created_date" => Ok(OrderSpec::CreatedDesc),
            "created_date" => Ok(OrderSpec::CreatedAsc),
            other => Err(StoreError::InvalidOrder(other.to_string())),
        }
    }

    // 同一时间戳按 id 排，保证顺序稳定
    fn sql(self) -> &'static str {
        match self {
            OrderSpec::CreatedAsc => "created_date ASC, id ASC",
            OrderSpec::CreatedDesc => "created_date DESC, id DESC",
        }
    }
}

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS anagram_checks (
    id BIGSERIAL PRIMARY KEY,
    word1 TEXT NOT NULL,
    word2 TEXT NOT NULL,
    normalized_word1 TEXT NOT NULL,
    normalized_word2 TEXT NOT NULL,
    is_anagram BOOLEAN NOT NULL,
    message TEXT NOT NULL,
    created_date TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS anagram_checks_created_date_idx ON anagram_checks (created_date DESC)";

const RETURNING_COLUMNS: &str =
    "id, word1, word2, normalized_word1, normalized_word2, is_anagram, message, created_date";

pub struct PgCheckStore {
    pool: PgPool,
}

impl PgCheckStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 启动时建表 (幂等)
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CheckStore for PgCheckStore {
    async fn create(&self, input: NewAnagramCheck) -> Result<AnagramCheck, StoreError> {
        input.validate().map_err(StoreError::InvalidRecord)?;

        let sql = format!(
            r#"
            INSERT INTO anagram_checks (word1, word2, normalized_word1, normalized_word2, is_anagram, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {RETURNING_COLUMNS}
            "#
        );
        let check = sqlx::query_as::<_, AnagramCheck>(&sql)
            .bind(&input.word1)
            .bind(&input.word2)
            .bind(&input.normalized_word1)
            .bind(&input.normalized_word2)
            .bind(input.is_anagram)
            .bind(&input.message)
            .fetch_one(&self.pool)
            .await?;
        Ok(check)
    }

    async fn list(&self, order: &str, limit: i64) -> Result<Vec<AnagramCheck>, StoreError> {
        let order = OrderSpec::parse(order)?;
        let sql = format!(
            "SELECT {RETURNING_COLUMNS} FROM anagram_checks ORDER BY {} LIMIT $1",
            order.sql()
        );
        let checks = sqlx::query_as::<_, AnagramCheck>(&sql)
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await?;
        Ok(checks)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM anagram_checks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryInner {
    next_id: i64,
    checks: Vec<AnagramCheck>,
}

#[derive(Default)]
pub struct MemoryCheckStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryCheckStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckStore for MemoryCheckStore {
    async fn create(&self, input: NewAnagramCheck) -> Result<AnagramCheck, StoreError> {
        input.validate().map_err(StoreError::InvalidRecord)?;

        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let check = AnagramCheck::from_new(inner.next_id, Utc::now(), input);
        inner.checks.push(check.clone());
        Ok(check)
    }

    async fn list(&self, order: &str, limit: i64) -> Result<Vec<AnagramCheck>, StoreError> {
        let order = OrderSpec::parse(order)?;
        let inner = self.inner.read().await;

        let mut checks = inner.checks.clone();
        checks.sort_by(|a, b| (a.created_date, a.id).cmp(&(b.created_date, b.id)));
        if order == OrderSpec::CreatedDesc {
            checks.reverse();
        }
        checks.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        Ok(checks)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.checks.retain(|check| check.id != id);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::new_check;
    use super::*;

    #[test]
    fn order_spec_accepts_only_created_date() {
        assert_eq!(OrderSpec::parse("-created_date").unwrap(), OrderSpec::CreatedDesc);
        assert_eq!(OrderSpec::parse("created_date").unwrap(), OrderSpec::CreatedAsc);
        assert!(matches!(OrderSpec::parse("-word1"), Err(StoreError::InvalidOrder(_))));
        assert!(OrderSpec::parse("").is_err());
    }

    #[tokio::test]
    async fn memory_store_assigns_increasing_ids() {
        let store = MemoryCheckStore::new();
        let first = store.create(new_check("Listen", "Silent")).await.unwrap();
        let second = store.create(new_check("Hello", "World")).await.unwrap();
        assert!(second.id > first.id);
        assert!(second.created_date >= first.created_date);
        assert!(first.is_anagram);
        assert!(!second.is_anagram);
    }

    #[tokio::test]
    async fn memory_store_lists_newest_first_with_limit() {
        let store = MemoryCheckStore::new();
        for i in 0..15 {
            store.create(new_check(&format!("ab{i}"), &format!("ba{i}"))).await.unwrap();
        }

        let newest = store.list("-created_date", 10).await.unwrap();
        assert_eq!(newest.len(), 10);
        assert_eq!(newest[0].word1, "ab14");
        assert!(newest.windows(2).all(|w| (w[0].created_date, w[0].id) > (w[1].created_date, w[1].id)));

        let oldest = store.list("created_date", 3).await.unwrap();
        assert_eq!(oldest.iter().map(|c| c.word1.as_str()).collect::<Vec<_>>(), ["ab0", "ab1", "ab2"]);

        assert!(store.list("-created_date", -1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_store_rejects_unknown_order() {
        let store = MemoryCheckStore::new();
        assert!(matches!(store.list("id", 10).await, Err(StoreError::InvalidOrder(_))));
    }

    #[tokio::test]
    async fn memory_store_rejects_inconsistent_records() {
        let store = MemoryCheckStore::new();
        let mut input = new_check("Listen", "Silent");
        input.is_anagram = false;
        assert!(matches!(store.create(input).await, Err(StoreError::InvalidRecord(_))));
        assert!(store.list("-created_date", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_store_delete_is_idempotent() {
        let store = MemoryCheckStore::new();
        let check = store.create(new_check("Listen", "Silent")).await.unwrap();

        store.delete(check.id).await.unwrap();
        store.delete(check.id).await.unwrap();
        store.delete(9999).await.unwrap();
        assert!(store.list("-created_date", 10).await.unwrap().is_empty());
    }
}
