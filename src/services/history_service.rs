use crate::models::anagram_check::AnagramCheck;
use crate::services::check_store::CheckStore;

/// 历史页最多显示的记录数
pub const HISTORY_LIMIT: i64 = 10;
pub const HISTORY_ORDER: &str = "-created_date";

/// 历史页持有的记录列表 (最新在前，最多 10 条)
#[derive(Debug, Default, Clone)]
pub struct HistoryView {
    checks: Vec<AnagramCheck>,
}

impl HistoryView {
    /// 加载最近的记录；存储失败时记录日志并返回空列表
    pub async fn load(store: &dyn CheckStore) -> Self {
        match store.list(HISTORY_ORDER, HISTORY_LIMIT).await {
            Ok(mut checks) => {
                checks.truncate(HISTORY_LIMIT as usize);
                Self { checks }
            }
            Err(e) => {
                tracing::error!("Error loading history: {}", e);
                Self::default()
            }
        }
    }

    /// 删除一条记录。成功才从列表中移除；失败时列表不变，只记录日志。
    /// 返回存储调用是否成功。
    pub async fn delete(&mut self, store: &dyn CheckStore, id: i64) -> bool {
        match store.delete(id).await {
            Ok(()) => {
                self.checks.retain(|check| check.id != id);
                true
            }
            Err(e) => {
                tracing::error!("Error deleting check {}: {}", id, e);
                false
            }
        }
    }

    pub fn checks(&self) -> &[AnagramCheck] {
        &self.checks
    }

    pub fn into_checks(self) -> Vec<AnagramCheck> {
        self.checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::check_store::testing::{new_check, FailingCheckStore};
    use crate::error::StoreError;
    use crate::models::anagram_check::NewAnagramCheck;
    use crate::services::check_store::MemoryCheckStore;
    use async_trait::async_trait;
    use chrono::Utc;

    /// 无视 limit，总是返回全部记录
    struct UnboundedCheckStore {
        checks: Vec<AnagramCheck>,
    }

    #[async_trait]
    impl CheckStore for UnboundedCheckStore {
        async fn create(&self, _input: NewAnagramCheck) -> Result<AnagramCheck, StoreError> {
            Err(StoreError::InvalidRecord("read-only".into()))
        }

        async fn list(&self, _order: &str, _limit: i64) -> Result<Vec<AnagramCheck>, StoreError> {
            Ok(self.checks.clone())
        }

        async fn delete(&self, _id: i64) -> Result<(), StoreError> {
            Ok(())
        }
    }

    async fn seeded(count: usize) -> MemoryCheckStore {
        let store = MemoryCheckStore::new();
        for i in 0..count {
            store.create(new_check(&format!("ab{i}"), &format!("ba{i}"))).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn load_returns_at_most_ten_newest_first() {
        let store = seeded(12).await;
        let view = HistoryView::load(&store).await;

        assert_eq!(view.checks().len(), 10);
        assert_eq!(view.checks()[0].word1, "ab11");
        assert_eq!(view.checks()[9].word1, "ab2");
        assert!(view
            .checks()
            .windows(2)
            .all(|w| w[0].created_date >= w[1].created_date));
    }

    #[tokio::test]
    async fn load_caps_oversized_store_results() {
        let checks = (1..=13)
            .rev()
            .map(|id| AnagramCheck::from_new(id, Utc::now(), new_check(&format!("ab{id}"), &format!("ba{id}"))))
            .collect();
        let store = UnboundedCheckStore { checks };

        let view = HistoryView::load(&store).await;
        assert_eq!(view.checks().len(), 10);
        assert_eq!(view.checks()[0].id, 13);
        assert_eq!(view.checks()[9].id, 4);
    }

    #[tokio::test]
    async fn load_failure_degrades_to_empty_view() {
        let view = HistoryView::load(&FailingCheckStore).await;
        assert!(view.checks().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_entry_from_view_and_store() {
        let store = seeded(3).await;
        let mut view = HistoryView::load(&store).await;
        let target = view.checks()[1].id;

        assert!(view.delete(&store, target).await);
        assert_eq!(view.checks().len(), 2);
        assert!(view.checks().iter().all(|c| c.id != target));
        assert_eq!(store.list(HISTORY_ORDER, HISTORY_LIMIT).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn deleting_unknown_id_leaves_view_unchanged() {
        let store = seeded(3).await;
        let mut view = HistoryView::load(&store).await;
        let before = view.checks().to_vec();

        assert!(view.delete(&store, 12345).await);
        assert_eq!(view.checks(), before.as_slice());
    }

    #[tokio::test]
    async fn delete_failure_leaves_view_unchanged() {
        let store = seeded(2).await;
        let mut view = HistoryView::load(&store).await;
        let before = view.checks().to_vec();
        let target = before[0].id;

        assert!(!view.delete(&FailingCheckStore, target).await);
        assert_eq!(view.into_checks(), before);
    }
}
