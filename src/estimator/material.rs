//! 素材推定モジュール
//!
//! 全チャンネルのピクセル値の標準偏差から素材を推定する
//! （デモ用ヒューリスティック）。

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// 素材の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Cotton,
    Denim,
    Silk,
    Leather,
}

const COTTON_MAX: f64 = 20.0;
const DENIM_MAX: f64 = 40.0;
const SILK_MAX: f64 = 60.0;

/// RGB全チャンネルにわたる母標準偏差
pub fn pixel_std_dev(image: &DynamicImage) -> f64 {
    let rgb = image.to_rgb8();
    let samples = rgb.as_raw();
    if samples.is_empty() {
        return 0.0;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    variance.sqrt()
}

/// 素材を推定
pub fn estimate_material(image: &DynamicImage) -> Material {
    let std = pixel_std_dev(image);
    if std < COTTON_MAX {
        Material::Cotton
    } else if std < DENIM_MAX {
        Material::Denim
    } else if std < SILK_MAX {
        Material::Silk
    } else {
        Material::Leather
    }
}
