use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 题型
///
/// 组装过程中题型会随证据调整：带两个以上字母的答案把单选升级为
/// 多选；选项为固定的肯定/否定词对时归类为判断题。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// 单选题
    Single,
    /// 多选题
    Multiple,
    /// 判断题
    Judge,
    /// 填空题
    Blank,
}

impl QuestionType {
    /// 从题干标签解析题型（如 `【单选题】` 中的标签部分）
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "单选题" => Some(QuestionType::Single),
            "多选题" => Some(QuestionType::Multiple),
            "判断题" => Some(QuestionType::Judge),
            "填空题" => Some(QuestionType::Blank),
            _ => None,
        }
    }

    /// 是否为选择类题型（单选/多选/判断）
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            QuestionType::Single | QuestionType::Multiple | QuestionType::Judge
        )
    }

    /// 获取中文名称
    pub fn name(self) -> &'static str {
        match self {
            QuestionType::Single => "单选题",
            QuestionType::Multiple => "多选题",
            QuestionType::Judge => "判断题",
            QuestionType::Blank => "填空题",
        }
    }
}

/// 题目来源信息（页码从 1 起计，题号为文档内编号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSource {
    pub page: usize,
    pub number: u64,
}

/// 结构化题目记录
///
/// `answer` 对选择/判断题是规范化后的选项字母（如 `"A"`、`"ABD"`），
/// 对填空题或归一化失败的情况保留原始文本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub stem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<char, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub source: QuestionSource,
}

impl Question {
    /// 新建一条空壳记录，字段在组装过程中逐步填充
    pub fn new(question_type: QuestionType, page: usize, number: u64) -> Self {
        Self {
            id: format!("p{}-{}", page, number),
            question_type,
            stem: String::new(),
            options: None,
            answer: None,
            explanation: None,
            difficulty: None,
            source: QuestionSource { page, number },
        }
    }
}

/// 单个文档的解析结果
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub questions: Vec<Question>,
    /// 因缺少题干或答案而被丢弃的记录数
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_tag_and_name_roundtrip() {
        for question_type in [
            QuestionType::Single,
            QuestionType::Multiple,
            QuestionType::Judge,
            QuestionType::Blank,
        ] {
            assert_eq!(
                QuestionType::from_tag(question_type.name()),
                Some(question_type)
            );
        }
        assert!(QuestionType::from_tag("解答题").is_none());
    }

    #[test]
    fn test_new_question_id_from_page_and_number() {
        let question = Question::new(QuestionType::Single, 58, 7);
        assert_eq!(question.id, "p58-7");
        assert_eq!(question.source.page, 58);
        assert_eq!(question.source.number, 7);
        assert!(question.stem.is_empty());
        assert!(question.answer.is_none());
    }
}
