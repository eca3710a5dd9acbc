//! 文档加载
//!
//! 读取预提取好的逐页文本文件（每页以换页符 U+000C 分隔），
//! 还原为"页 -> 行"的输入结构交给解析核心。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::error::{AppError, FileError};

/// 页分隔符：逐页导出文本时写入的换页符
const PAGE_SEPARATOR: char = '\u{0c}';

/// 一个待解析的源文档
#[derive(Debug, Clone)]
pub struct Document {
    /// 展示名（文件名去掉扩展名）
    pub name: String,
    /// 原始文件名
    pub file_name: String,
    /// 逐页的原始文本行
    pub pages: Vec<Vec<String>>,
}

/// 加载单个文档文本文件
///
/// 空文件或缺页只会得到空的行序列，不视为错误。
pub async fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        AppError::File(FileError::ReadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    })?;

    let pages: Vec<Vec<String>> = content
        .split(PAGE_SEPARATOR)
        .map(|page_text| page_text.lines().map(str::to_string).collect())
        .collect();

    let name = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(Document {
        name,
        file_name,
        pages,
    })
}

/// 从文件夹加载所有文档（按文件名排序）
///
/// 单个文件加载失败只记录警告并跳过，不中断整批处理。
pub async fn load_all_documents(folder_path: &str) -> Result<Vec<Document>> {
    let folder = PathBuf::from(folder_path);
    if !folder.exists() {
        return Err(AppError::File(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        })
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        match load_document(&path).await {
            Ok(document) => {
                info!("共 {} 页文本", document.pages.len());
                documents.push(document);
            }
            Err(e) => {
                warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_document_splits_pages() {
        let dir = std::env::temp_dir().join("qbb_loader_test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("样例试卷.txt");
        tokio::fs::write(&path, "第一页第一行\n第一页第二行\u{0c}第二页第一行")
            .await
            .unwrap();

        let document = load_document(&path).await.unwrap();
        assert_eq!(document.name, "样例试卷");
        assert_eq!(document.file_name, "样例试卷.txt");
        assert_eq!(document.pages.len(), 2);
        assert_eq!(document.pages[0].len(), 2);
        assert_eq!(document.pages[1][0], "第二页第一行");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_all_documents_missing_folder() {
        let result = load_all_documents("不存在的目录_qbb").await;
        assert!(result.is_err());
    }
}
