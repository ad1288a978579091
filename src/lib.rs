//! Fashion Vision コアライブラリ
//!
//! 服飾画像1枚から属性（支配色・柄・素材・スタイル）をヒューリスティックに
//! 推定し、外部分類器のラベルと合わせて1つの属性レコードにまとめる。
//! 資格情報ストアとフィードバックログも提供する。

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod pipeline;
pub mod scanner;
pub mod store;

pub use classifier::{Classification, FixedClassifier, ItemClassifier};
pub use error::{FashionError, Result};
pub use pipeline::{analyze, AttributeRecord};
pub use store::{CredentialStore, FeedbackLog, FeedbackRecord};
