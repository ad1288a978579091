//! 永続化ストアのテスト
//!
//! 資格情報ストアとフィードバックログのファイル永続化・排他動作を検証する

use fashion_vision::error::FashionError;
use fashion_vision::store::{CredentialStore, FeedbackLog, FeedbackRecord};
use std::sync::Arc;
use tempfile::tempdir;

/// 登録→検証の基本フロー
#[test]
fn test_register_and_verify() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = CredentialStore::new(dir.path().join("users.json"));

    store.register("alice", "pw1", "pw1").expect("登録失敗");

    assert!(store.verify("alice", "pw1").expect("検証失敗"));
    assert!(!store.verify("alice", "wrong").expect("検証失敗"));
    assert!(!store.verify("mallory", "pw1").expect("検証失敗"));
}

/// 同名ユーザーの二重登録はDuplicateUser
#[test]
fn test_duplicate_registration() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = CredentialStore::new(dir.path().join("users.json"));

    store.register("alice", "pw1", "pw1").expect("登録失敗");
    let err = store.register("alice", "pw1", "pw1").unwrap_err();
    assert!(matches!(err, FashionError::DuplicateUser(_)));
}

/// 資格情報は別インスタンスからも読める
#[test]
fn test_credentials_survive_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("users.json");

    CredentialStore::new(&path)
        .register("bob", "secret", "secret")
        .expect("登録失敗");

    let reopened = CredentialStore::new(&path);
    assert!(reopened.verify("bob", "secret").expect("検証失敗"));
}

/// フィードバック追記の末尾が直前の投稿と一致する
#[test]
fn test_feedback_append_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FeedbackLog::new(dir.path().join("feedback.json"));

    log.append(2, "so-so").expect("追記失敗");
    log.append(5, "great").expect("追記失敗");

    let records = log.all().expect("読み込み失敗");
    assert_eq!(
        records.last(),
        Some(&FeedbackRecord {
            stars: 5,
            comment: "great".to_string()
        })
    );
}

/// フィードバックは別インスタンスからも順序どおり読める
#[test]
fn test_feedback_survives_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("feedback.json");

    let log = FeedbackLog::new(&path);
    log.append(1, "first").expect("追記失敗");
    log.append(2, "second").expect("追記失敗");

    let reopened = FeedbackLog::new(&path);
    let records = reopened.all().expect("読み込み失敗");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].comment, "first");
    assert_eq!(records[1].comment, "second");
}

/// 並行追記でも更新が失われない（ストア単位の排他ロック）
#[test]
fn test_concurrent_appends_are_not_lost() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = Arc::new(FeedbackLog::new(dir.path().join("feedback.json")));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let log = Arc::clone(&log);
            std::thread::spawn(move || {
                for j in 0..5 {
                    log.append(1 + (i % 5) as u8, &format!("t{}-{}", i, j))
                        .expect("追記失敗");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("スレッド失敗");
    }

    assert_eq!(log.all().expect("読み込み失敗").len(), 40);
}

/// 破損したストアファイルはStorageエラーとして表面化する
#[test]
fn test_corrupt_store_is_reported() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("feedback.json");
    std::fs::write(&path, "garbage").unwrap();

    let log = FeedbackLog::new(&path);
    assert!(matches!(log.all(), Err(FashionError::Storage(_))));
    assert!(matches!(
        log.append(3, "x"),
        Err(FashionError::Storage(_))
    ));
}
