use crate::error::CheckError;
use crate::models::anagram_check::{AnagramCheck, NewAnagramCheck};
use crate::services::anagram_service::{compare, normalize};
use crate::services::check_store::CheckStore;

/// 提交一次检查：去空格 -> 校验 -> 比较 -> 入库 (只调用一次，不重试)
pub async fn submit_check(
    store: &dyn CheckStore,
    word1: &str,
    word2: &str,
) -> Result<AnagramCheck, CheckError> {
    let word1 = trim_input(word1);
    let word2 = trim_input(word2);

    if word1.is_empty() || word2.is_empty() {
        return Err(CheckError::MissingInput);
    }
    // 相同输入在数学上也是变位词，这里按产品规则拒绝
    if word1 == word2 {
        return Err(CheckError::SameInput);
    }

    let verdict = compare(word1, word2);
    let input = NewAnagramCheck {
        word1: word1.to_string(),
        word2: word2.to_string(),
        normalized_word1: normalize(word1),
        normalized_word2: normalize(word2),
        is_anagram: verdict.is_anagram,
        message: verdict.message.to_string(),
    };

    match store.create(input).await {
        Ok(check) => {
            tracing::info!(id = check.id, is_anagram = check.is_anagram, "anagram check saved");
            Ok(check)
        }
        Err(e) => {
            tracing::error!("Error checking anagram: {}", e);
            Err(CheckError::Store(e))
        }
    }
}

/// 去掉首尾空白，包括字节序标记 U+FEFF (`str::trim` 不处理它)
fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
