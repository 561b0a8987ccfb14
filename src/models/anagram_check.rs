use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};

use crate::services::anagram_service::normalize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AnagramCheck {
    pub id: i64,
    pub word1: String,
    pub word2: String,
    pub normalized_word1: String,
    pub normalized_word2: String,
    pub is_anagram: bool,
    pub message: String,
    pub created_date: DateTime<Utc>, // 由存储层写入
}

/// 待入库的检查记录 (不含 id 和 created_date)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAnagramCheck {
    pub word1: String,
    pub word2: String,
    pub normalized_word1: String,
    pub normalized_word2: String,
    pub is_anagram: bool,
    pub message: String,
}

impl NewAnagramCheck {
    /// 校验记录形状：规范化形式必须与原词一致，is_anagram 必须与比较结果一致
    pub fn validate(&self) -> Result<(), String> {
        if self.normalized_word1 != normalize(&self.word1) {
            return Err("normalized_word1 does not match word1".into());
        }
        if self.normalized_word2 != normalize(&self.word2) {
            return Err("normalized_word2 does not match word2".into());
        }
        if self.is_anagram != (self.normalized_word1 == self.normalized_word2) {
            return Err("is_anagram disagrees with normalized forms".into());
        }
        Ok(())
    }
}

impl AnagramCheck {
    /// 由存储层在分配 id 和时间后调用
    pub fn from_new(id: i64, created_date: DateTime<Utc>, input: NewAnagramCheck) -> Self {
        Self {
            id,
            word1: input.word1,
            word2: input.word2,
            normalized_word1: input.normalized_word1,
            normalized_word2: input.normalized_word2,
            is_anagram: input.is_anagram,
            message: input.message,
            created_date,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateCheckRequest {
    #[serde(default)]
    pub word1: String,
    #[serde(default)]
    pub word2: String,
}
