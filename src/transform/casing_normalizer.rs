//! 相対 import のファイル名 casing 正規化
//!
//! コピー先ではファイル名が kebab-case になるため、相対指定子の末尾セグメントが
//! PascalCase なら kebab-case に書き換える。
//!
//! ```text
//! './FileImage'        -> './file-image'
//! '../Upload/Upload'   -> './upload'      (同名ディレクトリ/ファイルの畳み込み)
//! './Preview/index'    -> './preview/index'
//! ```
//!
//! 最初の import より前に `// @microbuild-preserve-casing` 行がある場合は
//! ファイル全体を一切変更しない。

use crate::casing::{is_pascal_case, to_kebab_case};
use crate::conventions::PRESERVE_CASING_DIRECTIVE;
use crate::transform::scanner::{first_import_offset, rewrite_specifiers, SpecifierKind};

const INDEX_SEGMENT: &str = "index";

/// casing 無効化ディレクティブを含むか
///
/// 最初の import 文より前の行のみを見る。import が無い場合はファイル全体。
pub fn has_preserve_casing_directive(content: &str) -> bool {
    let head = match first_import_offset(content) {
        Some(offset) => &content[..offset],
        None => content,
    };

    head.lines().any(|line| {
        line.trim()
            .strip_prefix(PRESERVE_CASING_DIRECTIVE)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
    })
}

/// 相対 import の PascalCase ファイル名を kebab-case へ正規化する
///
/// 冪等。パッケージ import・エイリアス import は対象外。
pub fn normalize_import_paths(content: &str) -> String {
    if has_preserve_casing_directive(content) {
        tracing::debug!("preserve-casing directive found, skipping casing normalization");
        return content.to_string();
    }

    rewrite_specifiers(content, |statement| match statement.specifier_kind() {
        SpecifierKind::Relative => normalize_specifier(statement.specifier),
        SpecifierKind::Package | SpecifierKind::Other => None,
    })
}

/// 単一の相対指定子を正規化する（変化がなければ None）
pub fn normalize_specifier(specifier: &str) -> Option<String> {
    let mut parts: Vec<String> = specifier.split('/').map(str::to_string).collect();

    let has_index = parts.len() > 2 && parts.last().is_some_and(|p| p == INDEX_SEGMENT);
    if has_index {
        parts.pop();
    }

    let last = parts.pop()?;
    let (stem, extension) = match last.split_once('.') {
        Some((stem, extension)) => (stem, Some(extension)),
        None => (last.as_str(), None),
    };
    if !is_pascal_case(stem) {
        return None;
    }

    let kebab = to_kebab_case(stem);

    // `../Upload/Upload`: ディレクトリと同名のファイルは 1 つの兄弟ファイルへ畳む
    let duplicated = parts
        .last()
        .is_some_and(|prev| !is_dot_segment(prev) && to_kebab_case(prev) == kebab);
    if duplicated {
        parts.pop();
        if let Some(up) = parts.iter().position(|p| p == "..") {
            parts.remove(up);
        }
        if !parts.first().is_some_and(|p| is_dot_segment(p)) {
            parts.insert(0, ".".to_string());
        }
    }

    parts.push(match extension {
        Some(extension) => format!("{}.{}", kebab, extension),
        None => kebab,
    });
    if has_index {
        parts.push(INDEX_SEGMENT.to_string());
    }

    let normalized = parts.join("/");
    (normalized != specifier).then_some(normalized)
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

#[cfg(test)]
#[path = "casing_normalizer_test.rs"]
mod tests;
