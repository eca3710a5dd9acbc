//! 行模式库
//!
//! 题目起始、选项、答案等行级识别器。每个识别器都是全函数：
//! 不匹配时返回 `None`，绝不报错。多个识别器可能同时命中一行，
//! 调用方（组装状态机）负责按固定优先级裁决。

use regex::Regex;
use std::sync::LazyLock;

use super::normalize::normalize_line;
use crate::models::QuestionType;

/// 带题型标签的起始行：`1.【单选题】……`
static TAGGED_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<num>\d+)[\.．。]\s*【(?P<type>单选题|多选题|判断题|填空题)】(?P<rest>.*)$")
        .unwrap()
});

/// 纯编号起始行：`1.` / `1．` / `1、`
static PLAIN_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<num>\d+)[\.．。、]\s*(?P<rest>.*)$").unwrap());

/// 选项行：`A.` / `A．` / `A、` / `A:` / `A：`
static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<label>[A-H])[\.．。、:：]\s*(?P<text>.*)$").unwrap());

static ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^答案[:：]\s*(?P<ans>.*)$").unwrap());

static EXPLANATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^答案解释[:：]\s*(?P<expl>.*)$").unwrap());

static DIFFICULTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^难易度[:：](?P<diff>.*)$").unwrap());

static PAREN_ANSWER_INLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[（(]\s*([A-H]{1,8})\s*[)）]").unwrap());

static PAREN_ANSWER_STANDALONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[（(]\s*([A-H]{1,8})\s*[)）]\s*$").unwrap());

static INLINE_OPTION_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<label>[A-H])[\.．。、]\s*").unwrap());

/// 带题型标签的题目起始行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedStart {
    pub number: u64,
    pub question_type: QuestionType,
    pub rest: String,
}

/// 匹配形如 `1.【单选题】……` 的起始行
pub fn match_tagged_start(line: &str) -> Option<TaggedStart> {
    let caps = TAGGED_START_RE.captures(line)?;
    Some(TaggedStart {
        number: caps["num"].parse().ok()?,
        question_type: QuestionType::from_tag(&caps["type"])?,
        rest: normalize_line(&caps["rest"]),
    })
}

/// 纯编号的题目起始行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainStart {
    pub number: u64,
    pub rest: String,
}

/// 匹配形如 `12. ……` / `12、……` 的起始行
///
/// 选项行和答案行也可能撞上这种结构，调用方必须先做排除检查
/// 再认定为题目起始。
pub fn match_plain_start(line: &str) -> Option<PlainStart> {
    let caps = PLAIN_START_RE.captures(line)?;
    Some(PlainStart {
        number: caps["num"].parse().ok()?,
        rest: normalize_line(&caps["rest"]),
    })
}

/// 单个选项行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLine {
    pub label: char,
    pub text: String,
}

/// 匹配形如 `A、市场经济` 的选项行
pub fn match_option(line: &str) -> Option<OptionLine> {
    let caps = OPTION_RE.captures(line)?;
    Some(OptionLine {
        label: caps["label"].chars().next()?,
        text: normalize_line(&caps["text"]),
    })
}

/// 匹配 `答案：……` 行，返回规范化后的答案原文
pub fn match_answer(line: &str) -> Option<String> {
    let caps = ANSWER_RE.captures(line)?;
    Some(normalize_line(&caps["ans"]))
}

/// 匹配 `答案解释：……` 行
pub fn match_explanation(line: &str) -> Option<String> {
    let caps = EXPLANATION_RE.captures(line)?;
    Some(normalize_line(&caps["expl"]))
}

/// 匹配 `难易度：……` 行
pub fn match_difficulty(line: &str) -> Option<String> {
    let caps = DIFFICULTY_RE.captures(line)?;
    Some(normalize_line(&caps["diff"]))
}

/// 整行形如 `( C )` 的独立括号答案
pub fn match_paren_answer_standalone(line: &str) -> Option<String> {
    let caps = PAREN_ANSWER_STANDALONE_RE.captures(line)?;
    Some(normalize_line(&caps[1]).to_uppercase())
}

/// 行内任意位置的括号答案，如 `……。( C )`
///
/// 返回答案字母与剥离全部括号答案后的剩余文本。答案取第一处
/// 匹配，剥离则作用于所有匹配，和题干中重复出现的脏数据对齐。
pub fn strip_paren_answer_inline(line: &str) -> Option<(String, String)> {
    let caps = PAREN_ANSWER_INLINE_RE.captures(line)?;
    let answer = normalize_line(&caps[1]).to_uppercase();
    let remainder = normalize_line(&PAREN_ANSWER_INLINE_RE.replace_all(line, ""));
    Some((answer, remainder))
}

/// 从一行中切分内嵌选项
///
/// 例：
///   "…… 根基是。 A、师德建设 B、提高教育质量 C、…… D、……"
///   "A.接力跑B.持久战C.耐力赛D.持续跑"
///
/// 每个选项的文本从其标记处延伸到下一个标记（或行尾）。至少切出
/// 两个选项才认定切分成立；若整行以选项标记开头，一个也算。
/// 返回 `(题干前缀, 有序的标签/文本对)`，不成立时返回 `None`。
pub fn extract_inline_options(line: &str) -> Option<(String, Vec<(char, String)>)> {
    let marks: Vec<(char, usize, usize)> = INLINE_OPTION_MARK_RE
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.name("label")?.as_str().chars().next()?;
            Some((label, whole.start(), whole.end()))
        })
        .collect();
    if marks.is_empty() {
        return None;
    }

    let starts_with_marker = OPTION_RE.is_match(line);
    if marks.len() < 2 && !starts_with_marker {
        return None;
    }

    let prefix = normalize_line(&line[..marks[0].1]);
    let mut options: Vec<(char, String)> = Vec::new();
    for (index, &(label, _, text_start)) in marks.iter().enumerate() {
        let text_end = marks.get(index + 1).map_or(line.len(), |next| next.1);
        let text = normalize_line(&line[text_start..text_end]);
        if text.is_empty() {
            continue;
        }
        // 同一行内重复标签以后出现者为准
        if let Some(existing) = options.iter_mut().find(|(l, _)| *l == label) {
            existing.1 = text;
        } else {
            options.push((label, text));
        }
    }

    if options.len() >= 2 || (starts_with_marker && !options.is_empty()) {
        Some((prefix, options))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_tagged_start() {
        let start = match_tagged_start("1.【单选题】我国的根本制度是").unwrap();
        assert_eq!(start.number, 1);
        assert_eq!(start.question_type, QuestionType::Single);
        assert_eq!(start.rest, "我国的根本制度是");

        assert!(match_tagged_start("12.【填空题】").is_some());
        assert!(match_tagged_start("1.【解答题】略").is_none());
        assert!(match_tagged_start("A.【单选题】干扰项").is_none());
    }

    #[test]
    fn test_match_plain_start() {
        let start = match_plain_start("12、下列说法正确的是（ ）").unwrap();
        assert_eq!(start.number, 12);
        assert_eq!(start.rest, "下列说法正确的是（ ）");

        // 选项行也会命中，由调用方排除
        assert!(match_plain_start("3．全角句点编号").is_some());
        assert!(match_plain_start("无编号行").is_none());
    }

    #[test]
    fn test_match_option_separators() {
        for line in ["A.市场经济", "A．市场经济", "A、市场经济", "A：市场经济"] {
            let option = match_option(line).unwrap();
            assert_eq!(option.label, 'A');
            assert_eq!(option.text, "市场经济");
        }
        assert!(match_option("I.超出标签集").is_none());
    }

    #[test]
    fn test_match_answer_and_metadata_lines() {
        assert_eq!(match_answer("答案：B").as_deref(), Some("B"));
        assert_eq!(match_answer("答案: AB").as_deref(), Some("AB"));
        assert!(match_answer("答案解释：略").is_none());
        assert_eq!(match_explanation("答案解释：考查基本制度").as_deref(), Some("考查基本制度"));
        assert_eq!(match_difficulty("难易度：中等").as_deref(), Some("中等"));
    }

    #[test]
    fn test_paren_answer_standalone() {
        assert_eq!(match_paren_answer_standalone("（ C ）").as_deref(), Some("C"));
        assert_eq!(match_paren_answer_standalone("(ABD)").as_deref(), Some("ABD"));
        // 标签集只收大写字母，小写不认定为括号答案
        assert!(match_paren_answer_standalone("(abd)").is_none());
        assert!(match_paren_answer_standalone("前文（C）").is_none());
    }

    #[test]
    fn test_strip_paren_answer_inline() {
        let (answer, remainder) = strip_paren_answer_inline("正确的是（ C ）。").unwrap();
        assert_eq!(answer, "C");
        assert_eq!(remainder, "正确的是。");

        assert!(strip_paren_answer_inline("没有括号答案").is_none());
    }

    #[test]
    fn test_extract_inline_options_packed() {
        let (prefix, options) = extract_inline_options("A.接力跑B.持久战C.耐力赛D.持续跑").unwrap();
        assert!(prefix.is_empty());
        assert_eq!(
            options,
            vec![
                ('A', "接力跑".to_string()),
                ('B', "持久战".to_string()),
                ('C', "耐力赛".to_string()),
                ('D', "持续跑".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_inline_options_with_prefix() {
        let (prefix, options) =
            extract_inline_options("根基是。 A、师德建设 B、提高教育质量").unwrap();
        assert_eq!(prefix, "根基是。");
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_extract_inline_options_rejects_single_mid_line_marker() {
        // 行中只出现一个标记且不以标记开头，不认定为内嵌选项
        assert!(extract_inline_options("如图 B、两点之间的距离").is_none());
        assert!(extract_inline_options("本题考查 A、即第一项").is_none());
    }

    #[test]
    fn test_extract_inline_options_single_leading_marker() {
        let (prefix, options) = extract_inline_options("A、市场经济").unwrap();
        assert!(prefix.is_empty());
        assert_eq!(options, vec![('A', "市场经济".to_string())]);
    }
}
