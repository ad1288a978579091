//! スタイル推定モジュール
//!
//! 輝度の平均値からスタイルを推定する（デモ用ヒューリスティック）。

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// スタイルの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    Formal,
    Casual,
    Party,
    Streetwear,
}

const FORMAL_MIN: f64 = 200.0;
const CASUAL_MIN: f64 = 120.0;
const PARTY_MIN: f64 = 80.0;

/// 輝度画像の平均明度
pub fn mean_brightness(image: &DynamicImage) -> f64 {
    let gray = image.to_luma8();
    let samples = gray.as_raw();
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|&v| v as f64).sum::<f64>() / samples.len() as f64
}

/// スタイルを推定
pub fn estimate_style(image: &DynamicImage) -> Style {
    let brightness = mean_brightness(image);
    if brightness > FORMAL_MIN {
        Style::Formal
    } else if brightness > CASUAL_MIN {
        Style::Casual
    } else if brightness > PARTY_MIN {
        Style::Party
    } else {
        Style::Streetwear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, RgbImage};

    fn uniform_gray(value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(16, 16, image::Luma([value])))
    }

    #[test]
    fn test_pure_white_is_formal() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            16,
            16,
            image::Rgb([255, 255, 255]),
        ));
        assert_eq!(mean_brightness(&image), 255.0);
        assert_eq!(estimate_style(&image), Style::Formal);
    }

    #[test]
    fn test_brightness_bands() {
        assert_eq!(estimate_style(&uniform_gray(201)), Style::Formal);
        assert_eq!(estimate_style(&uniform_gray(200)), Style::Casual);
        assert_eq!(estimate_style(&uniform_gray(121)), Style::Casual);
        assert_eq!(estimate_style(&uniform_gray(120)), Style::Party);
        assert_eq!(estimate_style(&uniform_gray(81)), Style::Party);
        assert_eq!(estimate_style(&uniform_gray(80)), Style::Streetwear);
        assert_eq!(estimate_style(&uniform_gray(0)), Style::Streetwear);
    }

    #[test]
    fn test_empty_image_is_streetwear() {
        let image = DynamicImage::ImageLuma8(GrayImage::new(0, 0));
        assert_eq!(estimate_style(&image), Style::Streetwear);
    }
}
