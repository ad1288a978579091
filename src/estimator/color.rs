//! 支配色抽出モジュール
//!
//! 画像のカラーパレットをヒストグラム量子化して支配色を求め、
//! 固定スウォッチ表の最近傍色にマッピングする。

use crate::error::{FashionError, Result};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// 基準色スウォッチ（色名とRGB値）
#[derive(Debug, Clone, Copy)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

/// 固定スウォッチ表。距離が同じ場合は先頭側が優先される
pub const SWATCHES: &[ColorSwatch] = &[
    ColorSwatch { name: "White", rgb: [255, 255, 255] },
    ColorSwatch { name: "Black", rgb: [0, 0, 0] },
    ColorSwatch { name: "Red", rgb: [255, 0, 0] },
    ColorSwatch { name: "Green", rgb: [0, 255, 0] },
    ColorSwatch { name: "Blue", rgb: [0, 0, 255] },
    ColorSwatch { name: "Yellow", rgb: [255, 255, 0] },
    ColorSwatch { name: "Orange", rgb: [255, 165, 0] },
    ColorSwatch { name: "Purple", rgb: [128, 0, 128] },
    ColorSwatch { name: "Cyan", rgb: [0, 255, 255] },
    ColorSwatch { name: "Gray", rgb: [128, 128, 128] },
    ColorSwatch { name: "Brown", rgb: [165, 42, 42] },
    ColorSwatch { name: "Pink", rgb: [255, 192, 203] },
    ColorSwatch { name: "Beige", rgb: [245, 245, 220] },
    ColorSwatch { name: "Dark Green", rgb: [0, 128, 0] },
    ColorSwatch { name: "Navy", rgb: [0, 0, 128] },
];

/// 支配色の抽出結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorResult {
    pub name: String,
    pub hex: String,
    pub rgb: [u8; 3],
}

fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// 最近傍スウォッチを返す（二乗ユークリッド距離、先頭優先）
pub fn nearest_swatch(rgb: [u8; 3]) -> (&'static ColorSwatch, u32) {
    let mut best = &SWATCHES[0];
    let mut best_dist = distance_sq(rgb, best.rgb);

    for swatch in &SWATCHES[1..] {
        let dist = distance_sq(rgb, swatch.rgb);
        if dist < best_dist {
            best = swatch;
            best_dist = dist;
        }
    }

    (best, best_dist)
}

// 量子化バケット: 5bit/チャンネル = 32768通り
const BUCKET_BITS: u32 = 5;
const BUCKET_COUNT: usize = 1 << (BUCKET_BITS * 3);

fn bucket_index(rgb: [u8; 3]) -> usize {
    let r = (rgb[0] >> (8 - BUCKET_BITS)) as usize;
    let g = (rgb[1] >> (8 - BUCKET_BITS)) as usize;
    let b = (rgb[2] >> (8 - BUCKET_BITS)) as usize;
    (r << (BUCKET_BITS * 2)) | (g << BUCKET_BITS) | b
}

/// 支配色を抽出
///
/// パレットをヒストグラム量子化し、最多バケットの平均色を代表色とする。
/// ピクセルが1つもない画像は `InvalidImage` エラー。
pub fn extract_dominant_color(image: &DynamicImage) -> Result<ColorResult> {
    let rgb = image.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(FashionError::InvalidImage(
            "ピクセルのない画像です".to_string(),
        ));
    }

    // バケットごとの件数とチャンネル合計
    let mut counts = vec![0u32; BUCKET_COUNT];
    let mut sums = vec![[0u64; 3]; BUCKET_COUNT];

    for pixel in rgb.pixels() {
        let p = [pixel.0[0], pixel.0[1], pixel.0[2]];
        let idx = bucket_index(p);
        counts[idx] += 1;
        sums[idx][0] += p[0] as u64;
        sums[idx][1] += p[1] as u64;
        sums[idx][2] += p[2] as u64;
    }

    // 最多バケット（同数は先頭優先）
    let mut top = 0usize;
    let mut top_count = 0u32;
    for (i, &c) in counts.iter().enumerate() {
        if c > top_count {
            top = i;
            top_count = c;
        }
    }

    let dominant = [
        (sums[top][0] / top_count as u64) as u8,
        (sums[top][1] / top_count as u64) as u8,
        (sums[top][2] / top_count as u64) as u8,
    ];

    let (swatch, _) = nearest_swatch(dominant);

    Ok(ColorResult {
        name: swatch.name.to_string(),
        hex: format!("#{:02x}{:02x}{:02x}", dominant[0], dominant[1], dominant[2]),
        rgb: dominant,
    })
}
