//! 由来ヘッダー（provenance header）
//!
//! コピーしたファイルの先頭に、どのパッケージ・バージョンから来たかを記録する
//! コメントブロックを付与し、後から読み戻す。
//!
//! ```text
//! /**
//!  * @microbuild-origin @microbuild/ui-interfaces/file-image
//!  * @microbuild-version 1.4.0
//!  * @microbuild-date 2026-10-17
//!  */
//! ```

use crate::conventions::{DATE_TAG, ORIGIN_TAG, VERSION_TAG};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// ファイル先頭に置かれる必要があるディレクティブ
const LEADING_DIRECTIVES: [&str; 2] = ["use client", "use server"];

/// ヘッダーから読み取った由来情報
///
/// 部分的なヘッダーでも見つかったフィールドだけを返す。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl OriginInfo {
    /// origin をパッケージ名とサブパスに分解する
    ///
    /// `@microbuild/ui-interfaces/file-image` -> (`@microbuild/ui-interfaces`, `file-image`)
    pub fn package_and_subpath(&self) -> Option<(&str, &str)> {
        let origin = self.origin.as_deref()?;
        let package_segments = if origin.starts_with('@') { 2 } else { 1 };

        let split_at = origin
            .match_indices('/')
            .nth(package_segments - 1)
            .map(|(i, _)| i);

        Some(match split_at {
            Some(i) => (&origin[..i], &origin[i + 1..]),
            None => (origin, ""),
        })
    }

    /// date を日付として解釈する（ISO 形式以外は None）
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    fn is_empty(&self) -> bool {
        self.origin.is_none() && self.version.is_none() && self.date.is_none()
    }
}

/// ヘッダーブロックを組み立てる
pub fn build_origin_header(
    subpath: &str,
    package_name: &str,
    version: &str,
    date: NaiveDate,
) -> String {
    let package_name = package_name.trim_end_matches('/');
    let subpath = subpath.trim_matches('/');
    let origin = if subpath.is_empty() {
        package_name.to_string()
    } else {
        format!("{}/{}", package_name, subpath)
    };

    format!(
        "/**\n * {} {}\n * {} {}\n * {} {}\n */\n",
        ORIGIN_TAG, origin, VERSION_TAG, version, DATE_TAG, date
    )
}

/// 今日の日付（UTC）で由来ヘッダーを付与する
///
/// 現在時刻を読むため、呼び出し日によって結果が変わる。同じ入力から常に同じ
/// 出力が必要な場合（並列ワーカーでの一括変換や差分比較）は日付を引数に取る
/// [`add_origin_header_at`] を使う。
pub fn add_origin_header(
    content: &str,
    subpath: &str,
    package_name: &str,
    version: &str,
) -> String {
    add_origin_header_at(content, subpath, package_name, version, Utc::now().date_naive())
}

/// 指定日付で由来ヘッダーを付与する
///
/// - 先頭行が `"use client";` などのディレクティブなら、その直後に挿入する
/// - それ以外はファイル先頭に挿入する
/// - 既存のヘッダーがあれば置き換える
pub fn add_origin_header_at(
    content: &str,
    subpath: &str,
    package_name: &str,
    version: &str,
    date: NaiveDate,
) -> String {
    let content = strip_origin_header(content);
    let header = build_origin_header(subpath, package_name, version, date);

    let directive_len = leading_directive_len(&content);
    let (directive, rest) = content.split_at(directive_len);

    let mut result = String::with_capacity(content.len() + header.len() + 1);
    result.push_str(directive);
    if !directive.is_empty() && !directive.ends_with('\n') {
        result.push('\n');
    }
    result.push_str(&header);
    result.push_str(rest);
    result
}

/// 由来ヘッダーを読み取る
///
/// タグが 1 つも無ければ None。
pub fn extract_origin_info(content: &str) -> Option<OriginInfo> {
    let mut info = OriginInfo::default();

    for line in content.lines() {
        let Some(body) = comment_line_body(line) else {
            continue;
        };

        for (tag, slot) in [
            (ORIGIN_TAG, &mut info.origin),
            (VERSION_TAG, &mut info.version),
            (DATE_TAG, &mut info.date),
        ] {
            if slot.is_none() {
                if let Some(value) = tag_value(body, tag) {
                    *slot = Some(value.to_string());
                }
            }
        }
    }

    (!info.is_empty()).then_some(info)
}

/// 先頭の由来ヘッダーブロックを取り除く
///
/// ディレクティブ行と空行の直後にあるブロックコメントのうち、
/// 由来タグを含むものだけが対象。
pub fn strip_origin_header(content: &str) -> String {
    let mut offset = leading_directive_len(content);
    let mut block_start = None;

    for line in content[offset..].split_inclusive('\n') {
        let trimmed = line.trim();
        match block_start {
            None if trimmed.is_empty() => {}
            None if trimmed == "/**" => block_start = Some(offset),
            None => break,
            Some(start) => {
                if trimmed.ends_with("*/") {
                    let end = offset + line.len();
                    let block = &content[start..end];
                    if [ORIGIN_TAG, VERSION_TAG, DATE_TAG]
                        .iter()
                        .any(|tag| block.contains(tag))
                    {
                        tracing::debug!("replacing existing origin header");
                        return format!("{}{}", &content[..start], &content[end..]);
                    }
                    break;
                }
            }
        }
        offset += line.len();
    }

    content.to_string()
}

/// 先頭行がディレクティブなら、その行（改行含む）のバイト長
fn leading_directive_len(content: &str) -> usize {
    let first_line = content.split_inclusive('\n').next().unwrap_or("");
    if is_directive(first_line) {
        first_line.len()
    } else {
        0
    }
}

fn is_directive(line: &str) -> bool {
    let line = line.trim().trim_end_matches(';').trim_end();
    let unquoted = line
        .strip_prefix('"')
        .and_then(|l| l.strip_suffix('"'))
        .or_else(|| line.strip_prefix('\'').and_then(|l| l.strip_suffix('\'')));

    unquoted.is_some_and(|d| LEADING_DIRECTIVES.contains(&d))
}

/// コメント行の本文（`*` や `/**` を除いた部分）
fn comment_line_body(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let body = trimmed
        .strip_prefix("/**")
        .or_else(|| trimmed.strip_prefix('*'))?;
    Some(body.trim_end_matches("*/").trim())
}

fn tag_value<'a>(body: &'a str, tag: &str) -> Option<&'a str> {
    let rest = body.strip_prefix(tag)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let value = rest.trim();
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
#[path = "provenance_test.rs"]
mod tests;
