//! 資格情報ストア
//!
//! ユーザー名→パスワードダイジェストのフラットJSONオブジェクト。
//! ダイジェストは無塩・単一パスのSHA-256。デモ用資格情報にのみ
//! 許容できる既知の弱い方式であり、仕様上ドキュメント化された制限。

use super::JsonFile;
use crate::error::{FashionError, Result};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub struct CredentialStore {
    file: JsonFile<BTreeMap<String, String>>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    fn hash_password(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// ユーザー登録
    ///
    /// 空のユーザー名/パスワード、確認入力の不一致は `InvalidInput`、
    /// 登録済みユーザー名は `DuplicateUser`。
    pub fn register(&self, username: &str, password: &str, confirm: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(FashionError::InvalidInput(
                "ユーザー名とパスワードは必須です".to_string(),
            ));
        }
        if password != confirm {
            return Err(FashionError::InvalidInput(
                "パスワードが一致しません".to_string(),
            ));
        }

        self.file.update(|users| {
            if users.contains_key(username) {
                return Err(FashionError::DuplicateUser(username.to_string()));
            }
            users.insert(username.to_string(), Self::hash_password(password));
            Ok(())
        })
    }

    /// ログイン検証
    ///
    /// ユーザー不在とパスワード不一致は区別せずfalseを返す
    /// （呼び出し側は一様な失敗メッセージを表示する）。
    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let users = self.file.load()?;
        Ok(users
            .get(username)
            .map(|hash| *hash == Self::hash_password(password))
            .unwrap_or(false))
    }
}
