//! 题目解析核心
//!
//! 把按页提取出的原始文本行解析为结构化题目序列：
//! 行规范化 -> 模式识别 -> 状态机组装 -> 答案归一化 -> 去重。
//!
//! 核心是纯同步逻辑，不做任何 I/O；页文本在进入前已完整就绪。
//! 对同一输入的解析结果是确定且可重复的。

pub mod answer;
pub mod assembler;
pub mod normalize;
pub mod patterns;

pub use assembler::QuestionAssembler;

use std::collections::HashSet;
use tracing::debug;

use crate::models::{ParseOutcome, Question, QuestionType};

/// 解析单个文档的所有页面文本
///
/// `pages` 按文档顺序排列，页码按 1 起计。取不到文本的页传入
/// 空行序列即可，不影响其余页面。
pub fn parse_document(pages: &[Vec<String>]) -> ParseOutcome {
    let mut assembler = QuestionAssembler::new();
    for (index, lines) in pages.iter().enumerate() {
        assembler.feed_page(index + 1, lines);
    }

    let mut outcome = assembler.finish();
    outcome.questions = dedup_questions(outcome.questions);

    if outcome.skipped > 0 {
        debug!("跳过 {} 条缺少题干或答案的记录", outcome.skipped);
    }
    outcome
}

/// 按（题型、题干、答案）去重，保留先出现的记录
///
/// 页眉页脚等内容可能被重复提取并解析成几乎相同的冗余题目，
/// 在全部页面处理完后统一清理。
pub fn dedup_questions(questions: Vec<Question>) -> Vec<Question> {
    let mut seen: HashSet<(QuestionType, String, String)> = HashSet::new();
    let mut unique = Vec::with_capacity(questions.len());
    for question in questions {
        let key = (
            question.question_type,
            question.stem.clone(),
            question.answer.clone().unwrap_or_default(),
        );
        if seen.insert(key) {
            unique.push(question);
        }
    }
    unique
}
