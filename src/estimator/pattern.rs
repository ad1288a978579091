//! 柄推定モジュール
//!
//! エッジ密度から見かけの柄の複雑さを分類する。
//! しきい値は学習結果ではなく固定の較正定数（ヒューリスティック）。

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// 柄の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    Solid,
    Striped,
    Floral,
    Complex,
}

// 二段しきい値（Canny風）: 強エッジと、強エッジに隣接する弱エッジを採用する
const LOW_THRESHOLD: u16 = 100;
const HIGH_THRESHOLD: u16 = 200;

// エッジ密度の分類しきい値
const SOLID_MAX: f64 = 0.02;
const STRIPED_MAX: f64 = 0.07;
const FLORAL_MAX: f64 = 0.15;

/// エッジ密度 = エッジ判定されたピクセルの割合
///
/// 輝度画像に対して隣接差分の勾配強度を計算し、二段しきい値で
/// エッジを判定する。3x3未満の画像は密度0とみなす。
pub fn edge_density(image: &DynamicImage) -> f64 {
    let gray = image.to_luma8();
    let (w, h) = gray.dimensions();
    if w < 2 || h < 2 {
        return 0.0;
    }

    // 勾配強度（L1ノルム）: |dx| + |dy|
    let mut magnitude = vec![0u16; (w * h) as usize];
    for y in 0..h {
        for x in 0..w {
            let v = gray.get_pixel(x, y).0[0] as i32;
            let dx = if x + 1 < w {
                (gray.get_pixel(x + 1, y).0[0] as i32 - v).abs()
            } else {
                0
            };
            let dy = if y + 1 < h {
                (gray.get_pixel(x, y + 1).0[0] as i32 - v).abs()
            } else {
                0
            };
            magnitude[(y * w + x) as usize] = (dx + dy) as u16;
        }
    }

    let strong = |x: i64, y: i64| -> bool {
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            return false;
        }
        magnitude[(y as u32 * w + x as u32) as usize] >= HIGH_THRESHOLD
    };

    let mut edges = 0usize;
    for y in 0..h as i64 {
        for x in 0..w as i64 {
            let mag = magnitude[(y as u32 * w + x as u32) as usize];
            if mag >= HIGH_THRESHOLD {
                edges += 1;
            } else if mag >= LOW_THRESHOLD {
                // 弱エッジは8近傍に強エッジがある場合のみ採用
                let promoted = (-1..=1).any(|dy| {
                    (-1..=1).any(|dx| (dx != 0 || dy != 0) && strong(x + dx, y + dy))
                });
                if promoted {
                    edges += 1;
                }
            }
        }
    }

    edges as f64 / (w as f64 * h as f64)
}

/// 柄を推定
pub fn estimate_pattern(image: &DynamicImage) -> Pattern {
    let density = edge_density(image);
    if density < SOLID_MAX {
        Pattern::Solid
    } else if density < STRIPED_MAX {
        Pattern::Striped
    } else if density < FLORAL_MAX {
        Pattern::Floral
    } else {
        Pattern::Complex
    }
}
