//! 属性推定モジュール群
//!
//! 各推定器は `&DynamicImage` を読むだけの純関数で、互いに依存しない。
//! 将来学習モデルに置き換える場合も推定器単位で差し替えられる。

pub mod color;
pub mod material;
pub mod pattern;
pub mod style;

pub use color::{extract_dominant_color, nearest_swatch, ColorResult, ColorSwatch, SWATCHES};
pub use material::{estimate_material, Material};
pub use pattern::{estimate_pattern, Pattern};
pub use style::{estimate_style, Style};
