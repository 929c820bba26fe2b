//! 変換ステージの合成
//!
//! CLI 層の「1 ファイルを変換する」処理が呼ぶ順序をそのまま関数にしたもの。
//! ファイルの読み書きは行わない。

use crate::config::Config;
use crate::provenance::add_origin_header_at;
use crate::transform::casing_normalizer::normalize_import_paths;
use crate::transform::package_imports::transform_imports;
use crate::transform::relative_imports::{transform_relative_imports, transform_vform_imports};
use chrono::{NaiveDate, Utc};

/// ファイル移動の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMove<'a> {
    /// コンポーネントエイリアス配下へ移動（ui-interfaces など）
    Components { source: &'a str, dest: &'a str },
    /// 共有フォームパッケージ（ui-form）を `vform` 配下へ移動
    VForm { source: &'a str, dest: &'a str },
}

/// 由来ヘッダーに記録する情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOrigin<'a> {
    pub package_name: &'a str,
    pub subpath: &'a str,
    pub version: &'a str,
}

/// 1 ファイル分の変換要求
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformRequest<'a> {
    /// 移動が無ければ相対 import の再計算は行わない
    pub file_move: Option<FileMove<'a>>,
    /// 指定があればヘッダーを付与する
    pub origin: Option<SourceOrigin<'a>>,
    /// ヘッダーの日付（省略時は今日）
    pub date: Option<NaiveDate>,
}

impl<'a> TransformRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_move(mut self, file_move: FileMove<'a>) -> Self {
        self.file_move = Some(file_move);
        self
    }

    pub fn with_origin(mut self, origin: SourceOrigin<'a>) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// 全ステージを順に適用する
pub fn transform_source(content: &str, request: &TransformRequest<'_>, config: &Config) -> String {
    let content = transform_imports(content, config);

    let content = match request.file_move {
        Some(FileMove::Components { source, dest }) => {
            transform_relative_imports(&content, source, dest, &config.aliases.components)
        }
        Some(FileMove::VForm { source, dest }) => transform_vform_imports(&content, source, dest),
        None => content,
    };

    let content = normalize_import_paths(&content);

    match request.origin {
        Some(origin) => add_origin_header_at(
            &content,
            origin.subpath,
            origin.package_name,
            origin.version,
            request.date.unwrap_or_else(|| Utc::now().date_naive()),
        ),
        None => content,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
