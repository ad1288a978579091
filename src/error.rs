use thiserror::Error;

#[derive(Error, Debug)]
pub enum FashionError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("画像が不正です: {0}")]
    InvalidImage(String),

    #[error("ユーザー名は既に登録されています: {0}")]
    DuplicateUser(String),

    #[error("入力が不正です: {0}")]
    InvalidInput(String),

    #[error("ユーザー名またはパスワードが違います")]
    AuthFailure,

    #[error("ストレージエラー: {0}")]
    Storage(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FashionError>;
