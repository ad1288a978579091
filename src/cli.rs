use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fashion-vision")]
#[command(about = "服飾画像のAI属性解析ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像（またはフォルダ）を解析して属性カードとJSONを出力
    Analyze {
        /// 画像ファイルまたは画像フォルダのパス
        #[arg(required = true)]
        path: PathBuf,

        /// 外部分類器のトップラベル
        #[arg(short, long, default_value = "jersey")]
        label: String,

        /// 外部分類器の信頼度 (0.0〜1.0)
        #[arg(short, long, default_value = "0.5")]
        confidence: f32,

        /// 結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ユーザー登録（パスワードは対話入力）
    Register {
        /// ユーザー名
        #[arg(required = true)]
        username: String,
    },

    /// ログイン検証
    Login {
        /// ユーザー名
        #[arg(required = true)]
        username: String,
    },

    /// フィードバックを追記
    Feedback {
        /// 評価（1〜5）
        #[arg(required = true)]
        stars: u8,

        /// コメント
        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// 設定の表示・変更
    Config {
        /// フラットファイルの置き場所を設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
