use anyhow::Result;
use chrono::Local;
use clap::Parser;
use dialoguer::Password;
use fashion_vision::classifier::{FixedClassifier, ItemClassifier};
use fashion_vision::cli::{Cli, Commands};
use fashion_vision::config::Config;
use fashion_vision::error::FashionError;
use fashion_vision::pipeline::AttributeRecord;
use fashion_vision::{pipeline, scanner, store};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            path,
            label,
            confidence,
            output,
        } => {
            println!("👗 fashion-vision - 属性解析\n");

            let classifier = FixedClassifier::new(label, confidence);
            if path.is_dir() {
                analyze_folder(&path, &classifier, &config, output, cli.verbose)?;
            } else {
                analyze_single(&path, &classifier, &config, output)?;
            }
        }

        Commands::Register { username } => {
            let credentials = store::CredentialStore::new(config.users_path()?);

            let password = Password::new().with_prompt("パスワード").interact()?;
            let confirm = Password::new().with_prompt("パスワード（確認）").interact()?;

            credentials.register(&username, &password, &confirm)?;
            println!("✔ 登録しました: {}", username);
        }

        Commands::Login { username } => {
            let credentials = store::CredentialStore::new(config.users_path()?);

            let password = Password::new().with_prompt("パスワード").interact()?;

            if credentials.verify(&username, &password)? {
                println!("✔ ログイン成功: {}", username);
            } else {
                // 不在と不一致は区別せず一様に報告する
                return Err(FashionError::AuthFailure.into());
            }
        }

        Commands::Feedback { stars, comment } => {
            let log = store::FeedbackLog::new(config.feedback_path()?);
            log.append(stars, &comment)?;
            println!("✔ フィードバックを記録しました（全{}件）", log.all()?.len());
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ データディレクトリを設定しました");
            }

            if show {
                println!("設定:");
                println!("  データディレクトリ: {}", config.data_dir()?.display());
                println!("  タグ: {}", config.tags.join(", "));
            }
        }
    }

    Ok(())
}

fn analyze_single(
    path: &Path,
    classifier: &dyn ItemClassifier,
    config: &Config,
    output: Option<PathBuf>,
) -> Result<()> {
    let image = scanner::load_image(path)?;
    let candidates = classifier.classify(&image)?;
    let top = candidates
        .first()
        .ok_or_else(|| FashionError::InvalidInput("分類結果が空です".to_string()))?;

    let record = pipeline::analyze(&image, top, &config.tags)?;
    print_card(&record);

    let output = output.unwrap_or_else(|| PathBuf::from("fashion_result.json"));
    std::fs::write(&output, serde_json::to_string_pretty(&record)?)?;
    println!("\n✔ 結果を保存: {}", output.display());

    Ok(())
}

fn analyze_folder<C: ItemClassifier + Sync>(
    folder: &Path,
    classifier: &C,
    config: &Config,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("[1/2] 画像をスキャン中...");
    let images = scanner::scan_folder(folder)?;
    println!("✔ {}枚の画像を検出\n", images.len());

    if images.is_empty() {
        return Err(FashionError::NoImagesFound(folder.display().to_string()).into());
    }

    println!("[2/2] 属性を解析中...");
    let pb = ProgressBar::new(images.len() as u64);

    let records: fashion_vision::Result<Vec<AttributeRecord>> = images
        .par_iter()
        .map(|info| {
            let image = scanner::load_image(&info.path)?;
            let candidates = classifier.classify(&image)?;
            let top = candidates
                .first()
                .ok_or_else(|| FashionError::InvalidInput("分類結果が空です".to_string()))?;
            let record = pipeline::analyze(&image, top, &config.tags)?;
            pb.inc(1);
            Ok(record)
        })
        .collect();

    pb.finish_and_clear();
    let records = records?;
    println!("✔ 解析完了\n");

    if verbose {
        for (info, record) in images.iter().zip(&records) {
            println!(
                "  {}: {} / {:?} / {:?} / {}",
                info.file_name, record.item, record.pattern, record.material, record.color.name
            );
        }
        println!();
    }

    let output = output.unwrap_or_else(|| folder.join("result.json"));
    std::fs::write(&output, serde_json::to_string_pretty(&records)?)?;
    println!("✔ 結果を保存: {}", output.display());

    Ok(())
}

/// 結果カードの端末表示
fn print_card(record: &AttributeRecord) {
    println!("📝 解析結果 ({})", Local::now().format("%Y-%m-%d %H:%M"));
    println!("  👕 アイテム: {}", record.item);
    println!("  柄: {:?}", record.pattern);
    println!("  素材: {:?}", record.material);
    println!("  スタイル: {:?}", record.style);
    println!(
        "  色: {} ({}, {:?})",
        record.color.name, record.color.hex, record.color.rgb
    );

    let filled = (record.confidence * 20.0).round() as usize;
    println!(
        "  信頼度: {:>5.1}% [{}{}]",
        record.confidence * 100.0,
        "█".repeat(filled),
        "░".repeat(20usize.saturating_sub(filled))
    );
    println!("  タグ: {}", record.tags.join(" / "));
}
