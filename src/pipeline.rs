//! 属性解析パイプライン
//!
//! 4つの推定器の結果と外部分類器のラベルを1つの属性レコードに
//! まとめ、JSON契約どおりにシリアライズできる形にする。

use crate::classifier::Classification;
use crate::error::Result;
use crate::estimator::{
    estimate_material, estimate_pattern, estimate_style, extract_dominant_color, ColorResult,
    Material, Pattern, Style,
};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// デフォルトのタグ一覧
///
/// 元デモ由来のプレースホルダ値。画像内容とは連動しないため
/// 設定ファイルで差し替え可能にしてある。
pub const DEFAULT_TAGS: &[&str] = &["elegant", "office", "minimalist"];

/// 属性レコード
///
/// JSON契約: `item, color{name,hex,rgb}, pattern, material, style,
/// confidence, tags[]`。ダウンロード出力もこの形をそのまま使う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub item: String,
    pub color: ColorResult,
    pub pattern: Pattern,
    pub material: Material,
    pub style: Style,
    pub confidence: f32,
    pub tags: Vec<String>,
}

pub fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|&t| t.to_string()).collect()
}

/// 分類器ラベル "cowboy_boot" → 表示名 "Cowboy Boot"
fn display_item(label: &str) -> String {
    label
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 画像と分類結果から属性レコードを生成
///
/// 推定器同士に依存関係はない。失敗するのは画像が空の場合の
/// `InvalidImage` の伝播のみ。
pub fn analyze(
    image: &DynamicImage,
    top: &Classification,
    tags: &[String],
) -> Result<AttributeRecord> {
    let color = extract_dominant_color(image)?;
    let pattern = estimate_pattern(image);
    let material = estimate_material(image);
    let style = estimate_style(image);

    Ok(AttributeRecord {
        item: display_item(&top.label),
        color,
        pattern,
        material,
        style,
        confidence: top.confidence.clamp(0.0, 1.0),
        tags: tags.to_vec(),
    })
}
