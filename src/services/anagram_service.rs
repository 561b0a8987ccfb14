use serde::Serialize;

pub const ANAGRAM_MESSAGE: &str = "Correct, this is an anagram 😁";
pub const NOT_ANAGRAM_MESSAGE: &str = "Sorry, this is not an anagram 😢";

/// 比较结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_anagram: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExamplePair {
    pub word1: &'static str,
    pub word2: &'static str,
}

/// 页面上 "Try These Fun Examples!" 的示例
pub const EXAMPLES: [ExamplePair; 3] = [
    ExamplePair { word1: "Listen", word2: "Silent" },
    ExamplePair { word1: "Astronomer", word2: "Moon starer" },
    ExamplePair { word1: "Eleven plus two", word2: "Twelve plus one" },
];

/// 规范化：小写 -> 只保留 ASCII 字母和数字 -> 按码点升序排序
///
/// 小写使用完整的 Unicode 映射，之后非 ASCII 字符全部丢弃，
/// 所以 'É' 被删除，而开尔文符号 (U+212A) 会变成 'k'。
pub fn normalize(text: &str) -> String {
    let mut chars: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// 调用方负责保证输入非空且不相同
pub fn compare(word1: &str, word2: &str) -> Verdict {
    let is_anagram = normalize(word1) == normalize(word2);
    Verdict { is_anagram, message: verdict_message(is_anagram) }
}

pub fn verdict_message(is_anagram: bool) -> &'static str {
    if is_anagram {
        ANAGRAM_MESSAGE
    } else {
        NOT_ANAGRAM_MESSAGE
    }
}
