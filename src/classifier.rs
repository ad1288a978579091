//! 画像分類器との連携
//!
//! 一般物体分類モデル（ImageNet学習済みCNNなど）を外部コラボレータとして
//! 扱う。コアが消費するのはトップ1のラベル文字列と信頼度のみ。

use crate::error::Result;
use image::{imageops::FilterType, DynamicImage};

/// モデル入力の一辺サイズ
pub const INPUT_SIZE: u32 = 224;

/// 分類候補（ラベルと信頼度）
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// 外部画像分類器のインターフェース
///
/// 実装は信頼度の高い順に候補を返すこと。
pub trait ItemClassifier {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>>;
}

/// モデル入力用の前処理
///
/// 224x224のRGBにリサイズし、[0,1]へ正規化したf32列
/// （行優先・チャンネルインターリーブ）を返す。
pub fn preprocess(image: &DynamicImage) -> Vec<f32> {
    let resized = image
        .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
        .to_rgb8();
    resized.as_raw().iter().map(|&v| v as f32 / 255.0).collect()
}

/// 固定ラベルを返す分類器
///
/// モデルを同梱しないCLIでラベルを外部指定する場合と、テストで使う。
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    results: Vec<Classification>,
}

impl FixedClassifier {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            results: vec![Classification {
                label: label.into(),
                confidence,
            }],
        }
    }
}

impl ItemClassifier for FixedClassifier {
    fn classify(&self, _image: &DynamicImage) -> Result<Vec<Classification>> {
        Ok(self.results.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_preprocess_shape_and_range() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            640,
            480,
            image::Rgb([255, 128, 0]),
        ));
        let tensor = preprocess(&image);

        assert_eq!(tensor.len(), (INPUT_SIZE * INPUT_SIZE * 3) as usize);
        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
        // 一様画像なので先頭ピクセルの各チャンネルが正規化値と一致する
        assert!((tensor[0] - 1.0).abs() < 1e-6);
        assert!((tensor[2] - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_classifier_returns_label() {
        let classifier = FixedClassifier::new("jersey", 0.83);
        let image = DynamicImage::ImageRgb8(RgbImage::new(1, 1));
        let results = classifier.classify(&image).expect("分類失敗");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, "jersey");
        assert!((results[0].confidence - 0.83).abs() < 1e-6);
    }
}
