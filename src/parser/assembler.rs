//! 题目组装状态机
//!
//! 逐行消费规范化文本，判定每行归属的字段（题干/选项/答案/解释/
//! 难易度/续行）并累积成题目记录。同一时刻最多只有一道题处于
//! 组装中；题干和选项可以跨页，新题起始或输入结束时才定稿。
//!
//! 行的裁决顺序是调过参的启发式，依赖观测到的真实版式：
//! 带标签起始 > 纯编号起始（排除选项/答案行）> 括号答案 >
//! 答案/解释/难易度行 > 解释续行 > 内嵌选项 > 选项行 > 普通续行。
//! 调整顺序前先想清楚哪类文档会因此解析失败。

use std::collections::BTreeMap;
use tracing::debug;

use super::answer::{infer_judge_from_options, is_letter_answer, map_answer_to_letters};
use super::normalize::{is_noise_line, join_parts, normalize_line};
use super::patterns;
use crate::models::{ParseOutcome, Question, QuestionType};

/// 题目组装状态机
///
/// 每个文档使用独立实例，状态不跨文档共享；跨页的在组装状态
/// 由同一个实例自然延续。
#[derive(Debug, Default)]
pub struct QuestionAssembler {
    questions: Vec<Question>,
    current: Option<Question>,
    stem_parts: Vec<String>,
    current_option_label: Option<char>,
    option_parts: BTreeMap<char, Vec<String>>,
    explanation_parts: Vec<String>,
    skipped: usize,
}

impl QuestionAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一页文本（页码从 1 起计）
    pub fn feed_page(&mut self, page_number: usize, lines: &[String]) {
        for raw in lines {
            self.feed_line(page_number, raw);
        }
    }

    /// 结束输入，定稿最后一道题并产出解析结果
    pub fn finish(mut self) -> ParseOutcome {
        self.finalize_current();
        ParseOutcome {
            questions: self.questions,
            skipped: self.skipped,
        }
    }

    fn feed_line(&mut self, page_number: usize, raw: &str) {
        let mut line = normalize_line(raw);
        if is_noise_line(&line) {
            return;
        }

        // 带题型标签的起始行，如 `1.【单选题】……`
        if let Some(start) = patterns::match_tagged_start(&line) {
            self.finalize_current();
            self.current = Some(Question::new(
                start.question_type,
                page_number,
                start.number,
            ));
            if !start.rest.is_empty() {
                self.stem_parts.push(start.rest);
            }
            return;
        }

        // 纯编号起始行，如 `12. ……`，答案以 `( C )` 形式行内或独立给出。
        // 选项行和 `答案：` 行同样以这种结构开头，必须先排除。
        if let Some(start) = patterns::match_plain_start(&line) {
            if !line.starts_with("答案") && patterns::match_option(&line).is_none() {
                self.finalize_current();
                let mut question = Question::new(QuestionType::Single, page_number, start.number);
                let mut rest = start.rest;
                if !rest.is_empty() {
                    if let Some((answer, remainder)) = patterns::strip_paren_answer_inline(&rest) {
                        question.question_type = if answer.chars().count() > 1 {
                            QuestionType::Multiple
                        } else {
                            QuestionType::Single
                        };
                        question.answer = Some(answer);
                        rest = remainder;
                    }
                    if !rest.is_empty() {
                        self.stem_parts.push(rest);
                    }
                }
                self.current = Some(question);
                return;
            }
        }

        // 没有进行中的题目，此行无处归属
        let Some(current) = self.current.as_mut() else {
            return;
        };

        if current.answer.is_none() {
            // 独立一行的括号答案，如 `( C )`
            if let Some(answer) = patterns::match_paren_answer_standalone(&line) {
                current.question_type = if answer.chars().count() > 1 {
                    QuestionType::Multiple
                } else {
                    QuestionType::Single
                };
                current.answer = Some(answer);
                self.current_option_label = None;
                return;
            }
            // 续行中夹带的括号答案，如 `……。( C )`，剥掉答案后剩余
            // 文本继续走后面的判定
            if let Some((answer, remainder)) = patterns::strip_paren_answer_inline(&line) {
                current.question_type = if answer.chars().count() > 1 {
                    QuestionType::Multiple
                } else {
                    QuestionType::Single
                };
                current.answer = Some(answer);
                if remainder.is_empty() {
                    return;
                }
                line = remainder;
            }
        }

        if let Some(answer) = patterns::match_answer(&line) {
            current.answer = Some(answer);
            self.current_option_label = None;
            return;
        }

        if let Some(explanation) = patterns::match_explanation(&line) {
            self.explanation_parts.push(explanation);
            self.current_option_label = None;
            return;
        }

        if let Some(difficulty) = patterns::match_difficulty(&line) {
            current.difficulty = Some(difficulty);
            self.current_option_label = None;
            return;
        }

        // 已进入解释段则持续收集，直到出现新题、选项或答案行
        if !self.explanation_parts.is_empty()
            && patterns::match_option(&line).is_none()
            && patterns::match_answer(&line).is_none()
        {
            self.explanation_parts.push(line);
            return;
        }

        // 与题干同行内嵌的选项
        if let Some((prefix, inline_options)) = patterns::extract_inline_options(&line) {
            if !prefix.is_empty() {
                self.append_continuation(prefix);
            }
            for (label, text) in inline_options {
                self.current_option_label = Some(label);
                let parts = self.option_parts.entry(label).or_default();
                if !text.is_empty() {
                    parts.push(text);
                }
            }
            return;
        }

        if let Some(option) = patterns::match_option(&line) {
            self.current_option_label = Some(option.label);
            let parts = self.option_parts.entry(option.label).or_default();
            if !option.text.is_empty() {
                parts.push(option.text);
            }
            return;
        }

        // 普通续行：有打开的选项归选项，否则归题干
        self.append_continuation(line);
    }

    /// 把续行文本归入当前打开的选项缓冲，没有则归入题干
    fn append_continuation(&mut self, text: String) {
        match self.current_option_label {
            Some(label) if self.option_parts.contains_key(&label) => {
                self.option_parts.entry(label).or_default().push(text);
            }
            _ => self.stem_parts.push(text),
        }
    }

    /// 完成当前题目的组装
    ///
    /// 拼接各缓冲、归一化答案并重算题型，按"题干与答案均非空"
    /// 的留存条件决定入列还是计入跳过数，随后重置状态。
    fn finalize_current(&mut self) {
        let Some(mut question) = self.current.take() else {
            return;
        };

        question.stem = join_parts(&self.stem_parts);

        if !self.option_parts.is_empty() {
            let options: BTreeMap<char, String> = self
                .option_parts
                .iter()
                .map(|(label, parts)| (*label, join_parts(parts)))
                .collect();
            question.options = Some(options);
        }

        // 对给出答案文本的选择/判断题做答案归一化
        if question.question_type.is_choice() {
            if let (Some(answer), Some(options)) =
                (question.answer.as_ref(), question.options.as_ref())
            {
                if !answer.is_empty() {
                    let mapped = map_answer_to_letters(answer, options);
                    if !mapped.is_empty() && is_letter_answer(&mapped) {
                        question.question_type = if mapped.chars().count() > 1 {
                            QuestionType::Multiple
                        } else {
                            QuestionType::Single
                        };
                        if infer_judge_from_options(options) {
                            question.question_type = QuestionType::Judge;
                        }
                        question.answer = Some(mapped);
                    }
                }
            }
        }

        if !self.explanation_parts.is_empty() {
            question.explanation = Some(join_parts(&self.explanation_parts));
        }

        let has_answer = question.answer.as_ref().is_some_and(|a| !a.is_empty());
        if !question.stem.is_empty() && has_answer {
            debug!(
                "✓ {} [{}] 已入列",
                question.id,
                question.question_type.name()
            );
            self.questions.push(question);
        } else {
            debug!("题干或答案缺失，丢弃 {}", question.id);
            self.skipped += 1;
        }

        self.stem_parts.clear();
        self.current_option_label = None;
        self.option_parts.clear();
        self.explanation_parts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(assembler: &mut QuestionAssembler, page: usize, lines: &[&str]) {
        let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        assembler.feed_page(page, &lines);
    }

    #[test]
    fn test_tagged_question_with_explanation_and_difficulty() {
        let mut assembler = QuestionAssembler::new();
        feed(
            &mut assembler,
            3,
            &[
                "7.【多选题】下列属于中华优秀传统文化的是",
                "A、讲仁爱",
                "B、重民本",
                "C、守诚信",
                "答案：A,B,C",
                "答案解释：三项均出自",
                "相关论述。",
                "难易度：较难",
            ],
        );
        let outcome = assembler.finish();

        assert_eq!(outcome.questions.len(), 1);
        assert_eq!(outcome.skipped, 0);
        let question = &outcome.questions[0];
        assert_eq!(question.id, "p3-7");
        assert_eq!(question.question_type, QuestionType::Multiple);
        assert_eq!(question.answer.as_deref(), Some("ABC"));
        assert_eq!(question.explanation.as_deref(), Some("三项均出自 相关论述。"));
        assert_eq!(question.difficulty.as_deref(), Some("较难"));
    }

    #[test]
    fn test_plain_question_with_standalone_paren_answer() {
        let mut assembler = QuestionAssembler::new();
        feed(
            &mut assembler,
            1,
            &[
                "3、体育课中 800 米跑属于",
                "A.接力跑B.持久战C.耐力赛D.持续跑",
                "（ C ）",
            ],
        );
        let outcome = assembler.finish();

        assert_eq!(outcome.questions.len(), 1);
        let question = &outcome.questions[0];
        assert_eq!(question.question_type, QuestionType::Single);
        assert_eq!(question.answer.as_deref(), Some("C"));
        let options = question.options.as_ref().unwrap();
        assert_eq!(options.len(), 4);
        assert_eq!(options.get(&'C').map(String::as_str), Some("耐力赛"));
    }

    #[test]
    fn test_option_continuation_appends_not_replaces() {
        let mut assembler = QuestionAssembler::new();
        feed(
            &mut assembler,
            1,
            &[
                "1.【单选题】下列说法正确的是",
                "A、第一段文本",
                "接上一行的续文",
                "B、第二项",
                "答案：A",
            ],
        );
        let outcome = assembler.finish();

        let options = outcome.questions[0].options.as_ref().unwrap();
        assert_eq!(
            options.get(&'A').map(String::as_str),
            Some("第一段文本 接上一行的续文")
        );
    }

    #[test]
    fn test_line_without_open_question_is_dropped() {
        let mut assembler = QuestionAssembler::new();
        feed(&mut assembler, 1, &["游离的续行文本", "答案：A"]);
        let outcome = assembler.finish();
        assert!(outcome.questions.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_missing_answer_counts_as_skipped() {
        let mut assembler = QuestionAssembler::new();
        feed(
            &mut assembler,
            1,
            &[
                "1.【单选题】没有给出答案的题目",
                "A、甲",
                "B、乙",
                "2.【单选题】正常的题目",
                "A、丙",
                "B、丁",
                "答案：B",
            ],
        );
        let outcome = assembler.finish();
        assert_eq!(outcome.questions.len(), 1);
        assert_eq!(outcome.questions[0].id, "p1-2");
        assert_eq!(outcome.skipped, 1);
    }
}
