//! フィードバックログ
//!
//! 評価（星1〜5）とコメントの追記専用ログ。重複排除やレート制限は
//! 行わない。

use super::JsonFile;
use crate::error::{FashionError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// フィードバック1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub stars: u8,
    pub comment: String,
}

pub struct FeedbackLog {
    file: JsonFile<Vec<FeedbackRecord>>,
}

impl FeedbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    /// ログ末尾に追記。starsは1〜5のみ有効
    pub fn append(&self, stars: u8, comment: &str) -> Result<()> {
        if !(1..=5).contains(&stars) {
            return Err(FashionError::InvalidInput(format!(
                "評価は1〜5で指定してください: {}",
                stars
            )));
        }

        self.file.update(|records| {
            records.push(FeedbackRecord {
                stars,
                comment: comment.to_string(),
            });
            Ok(())
        })
    }

    /// 全件を投稿順で返す
    pub fn all(&self) -> Result<Vec<FeedbackRecord>> {
        self.file.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_append_and_read_back() {
        let dir = tempdir().expect("Failed to create temp dir");
        let log = FeedbackLog::new(dir.path().join("feedback.json"));

        log.append(3, "まずまず").expect("追記失敗");
        log.append(5, "great").expect("追記失敗");

        let records = log.all().expect("読み込み失敗");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records.last(),
            Some(&FeedbackRecord {
                stars: 5,
                comment: "great".to_string()
            })
        );
    }

    #[test]
    fn test_empty_comment_is_allowed() {
        let dir = tempdir().expect("Failed to create temp dir");
        let log = FeedbackLog::new(dir.path().join("feedback.json"));

        log.append(4, "").expect("追記失敗");
        assert_eq!(log.all().expect("読み込み失敗")[0].comment, "");
    }

    #[test]
    fn test_stars_out_of_range() {
        let dir = tempdir().expect("Failed to create temp dir");
        let log = FeedbackLog::new(dir.path().join("feedback.json"));

        assert!(matches!(
            log.append(0, "bad"),
            Err(FashionError::InvalidInput(_))
        ));
        assert!(matches!(
            log.append(6, "bad"),
            Err(FashionError::InvalidInput(_))
        ));
        assert!(log.all().expect("読み込み失敗").is_empty());
    }

    #[test]
    fn test_order_preserved_across_reopen() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("feedback.json");

        let log = FeedbackLog::new(&path);
        for stars in 1..=5 {
            log.append(stars, &format!("comment {}", stars)).expect("追記失敗");
        }

        let reopened = FeedbackLog::new(&path);
        let records = reopened.all().expect("読み込み失敗");
        let stars: Vec<u8> = records.iter().map(|r| r.stars).collect();
        assert_eq!(stars, vec![1, 2, 3, 4, 5]);
    }
}
