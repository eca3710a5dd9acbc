//! 答案归一化
//!
//! 把原始答案文本解析为规范的选项字母集合。字母证据永远优先于
//! 文本匹配；文本匹配依次尝试精确、包含、反向包含三种策略。

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use super::normalize::normalize_line;

/// 答案文本里的列举分隔符：中英文逗号、分号
static ANSWER_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[，,;；]\s*").unwrap());

/// 判断是否为规范的字母答案（1~8 个 A-H 字母）
pub fn is_letter_answer(answer: &str) -> bool {
    let trimmed = answer.trim();
    let count = trimmed.chars().count();
    (1..=8).contains(&count)
        && trimmed
            .chars()
            .all(|c| matches!(c.to_ascii_uppercase(), 'A'..='H'))
}

/// 判断选项是否构成判断题
///
/// 恰好 A/B 两项，且文本为固定的肯定/否定词对。
pub fn infer_judge_from_options(options: &BTreeMap<char, String>) -> bool {
    if options.len() != 2 || !options.contains_key(&'A') || !options.contains_key(&'B') {
        return false;
    }
    let a = normalize_line(options.get(&'A').map(String::as_str).unwrap_or(""));
    let b = normalize_line(options.get(&'B').map(String::as_str).unwrap_or(""));
    matches!(
        (a.as_str(), b.as_str()),
        ("对", "错") | ("正确", "错误") | ("是", "否")
    )
}

/// 尝试把答案文本映射为选项字母
///
/// 支持：
/// - 已是字母的答案："ABCD"
/// - 答案等于某个选项的文本："提高教育质量" -> "B"
/// - 逗号分隔的多个选项文本
/// - 答案行中夹杂字母："A ……，B ……" -> "AB"
///
/// 无法归一化时原样返回规范化后的文本，由调用方决定是否采纳。
pub fn map_answer_to_letters(answer_raw: &str, options: &BTreeMap<char, String>) -> String {
    let answer = normalize_line(answer_raw);
    if answer.is_empty() {
        return answer;
    }

    // 字母证据优先于文本匹配
    let letters: BTreeSet<char> = answer
        .to_uppercase()
        .chars()
        .filter(|c| ('A'..='H').contains(c))
        .collect();
    if !letters.is_empty() {
        let uniq: String = letters.into_iter().collect();
        if is_letter_answer(&uniq) {
            return uniq;
        }
    }

    // 没有选项可供比对：按填空题答案原样保留
    if options.is_empty() {
        return answer;
    }

    let normalized_options: Vec<(char, String)> = options
        .iter()
        .map(|(label, text)| (*label, normalize_line(text).to_lowercase()))
        .collect();

    // 按常见分隔符拆成候选短语；只有一段时整体作为唯一候选
    let parts: Vec<String> = ANSWER_SEPARATOR_RE
        .split(&answer)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    let candidates = if parts.len() > 1 {
        parts
    } else {
        vec![answer.clone()]
    };

    let mut matched: Vec<char> = Vec::new();
    for part in &candidates {
        let part_lower = normalize_line(part).to_lowercase();

        // 先做精确匹配
        if let Some((label, _)) = normalized_options
            .iter()
            .find(|(_, text)| part_lower == *text)
        {
            matched.push(*label);
            continue;
        }

        // 其次是包含匹配（候选短语较长、裹着选项文本）
        for (label, text) in &normalized_options {
            if !text.is_empty() && part_lower.contains(text.as_str()) {
                matched.push(*label);
            }
        }

        // 全部落空时再反向包含（候选是某个选项文本的一部分）。
        // 选项间存在公共子串时可能误匹配，维持现状不做裁决。
        if matched.is_empty() {
            for (label, text) in &normalized_options {
                if !part_lower.is_empty() && text.contains(part_lower.as_str()) {
                    matched.push(*label);
                }
            }
        }
    }

    if matched.is_empty() {
        answer
    } else {
        let uniq: BTreeSet<char> = matched.into_iter().collect();
        uniq.into_iter().collect()
    }
}
