//! 行规范化
//!
//! 所有行在进入模式识别之前都要先经过这里：去掉会破坏正则锚点的
//! 隐形字符、折叠空白、修剪首尾。

/// 规范化一行文本
///
/// 去掉 BOM 和零宽空格，把全角空格转成普通空格，并将连续空白
/// （含各类 Unicode 空白）折叠为单个空格。
pub fn normalize_line(line: &str) -> String {
    let cleaned: String = line
        .chars()
        .filter(|c| !matches!(c, '\u{feff}' | '\u{200b}'))
        .map(|c| if c == '\u{3000}' { ' ' } else { c })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 判断是否为噪声行（空行、残留的独立页码等）
pub fn is_noise_line(line: &str) -> bool {
    if line.is_empty() {
        return true;
    }
    // 类似 "56"、"57" 的独立页码
    line.len() <= 3 && line.chars().all(|c| c.is_ascii_digit())
}

/// 将多段缓冲文本拼接成最终字段
pub fn join_parts(parts: &[String]) -> String {
    let text = parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_removes_invisible_chars() {
        assert_eq!(normalize_line("\u{feff}1.【单选题】测试"), "1.【单选题】测试");
        assert_eq!(normalize_line("答\u{200b}案：A"), "答案：A");
    }

    #[test]
    fn test_normalize_line_collapses_whitespace() {
        assert_eq!(normalize_line("  A、 师德\u{3000}建设  "), "A、 师德 建设");
        assert_eq!(normalize_line("a\t\tb"), "a b");
    }

    #[test]
    fn test_is_noise_line() {
        assert!(is_noise_line(""));
        assert!(is_noise_line("56"));
        assert!(is_noise_line("123"));
        assert!(!is_noise_line("1234"));
        assert!(!is_noise_line("1.题目"));
    }

    #[test]
    fn test_join_parts_skips_empty() {
        let parts = vec!["我国的".to_string(), String::new(), "根本制度".to_string()];
        assert_eq!(join_parts(&parts), "我国的 根本制度");
    }
}
