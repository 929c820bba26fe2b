//! import 文スキャナー
//!
//! ソーステキストから import / export-from 文を正規表現で検出し、
//! 指定子（specifier）の文字列だけを差し替える。AST は構築しない。
//!
//! 書き換え側はすべて [`rewrite_specifiers`] を経由するため、将来 AST ベースの
//! 実装へ置き換える場合もこのモジュールだけを差し替えればよい。

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// バインディング中に現れてよいコメント（`// ...` / `/* ... */`）
const COMMENT: &str = r"//[^\r\n]*|/\*(?s:.*?)\*/";

/// import 文（行頭から始まるもの）
///
/// - `import X from '...'` / `import { A, B } from "..."`（複数行可）
/// - `import type { T } from '...'`
/// - `export { A } from '...'` / `export * from '...'` / `export * as ns from '...'`
/// - `import '...'`（副作用 import）
///
/// import のバインディング部分には引用符・セミコロン・括弧・`=`・`:` が現れない
/// （コメント内を除く）。export は再エクスポートの形（`*` か `{ ... }`）に限る。
static IMPORT_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r#"(?m)^[ \t]*(?:import\b(?P<import_clause>(?:{comment}|[^;'"`()=:<>/])*?)\bfrom[ \t]*|export[ \t]+(?P<export_clause>(?:type[ \t]*)?(?:\*(?:[ \t]+as[ \t]+[\w$]+)?|\{{(?:{comment}|[^}}'"`/;])*\}}))\s*from[ \t]*|import[ \t]*)['"](?P<specifier>[^'"\r\n]+)['"]"#,
        comment = COMMENT
    );
    Regex::new(&pattern).unwrap()
});

/// import 文の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// `import X from '...'`
    Value,
    /// `import type X from '...'`
    TypeOnly,
    /// `import '...'`
    SideEffect,
    /// `export ... from '...'`
    ReExport,
}

/// 指定子の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// パッケージスコープ配下（`@microbuild/...`）
    Package,
    /// `./` または `../` で始まる相対指定子
    Relative,
    /// それ以外（サードパーティ、エイリアスなど）
    Other,
}

impl SpecifierKind {
    /// 指定子を分類する
    ///
    /// スコープ判定を相対判定より先に行う。
    pub fn classify(specifier: &str) -> Self {
        if crate::conventions::is_scoped_specifier(specifier) {
            SpecifierKind::Package
        } else if is_relative(specifier) {
            SpecifierKind::Relative
        } else {
            SpecifierKind::Other
        }
    }
}

/// 検出された import 文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStatement<'a> {
    pub kind: ImportKind,
    pub specifier: &'a str,
    /// content 内での文の開始位置（バイト）
    pub offset: usize,
}

impl ImportStatement<'_> {
    pub fn specifier_kind(&self) -> SpecifierKind {
        SpecifierKind::classify(self.specifier)
    }
}

/// 相対指定子かどうか
pub fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier == "."
        || specifier == ".."
}

/// content 内の import 文を出現順に列挙する
pub fn find_imports(content: &str) -> Vec<ImportStatement<'_>> {
    IMPORT_STATEMENT
        .captures_iter(content)
        .filter_map(|caps| statement_from(&caps))
        .collect()
}

/// 最初の import 文の開始位置
pub fn first_import_offset(content: &str) -> Option<usize> {
    IMPORT_STATEMENT.find(content).map(|m| m.start())
}

/// 指定子を書き換える
///
/// `mapper` が `Some(new)` を返した import 文は指定子のみ `new` に置換され、
/// `None` の場合は元のまま残る。バインディング・`type` キーワード・引用符は
/// 変更しない。
pub fn rewrite_specifiers<F>(content: &str, mut mapper: F) -> String
where
    F: FnMut(&ImportStatement<'_>) -> Option<String>,
{
    let mut result = String::with_capacity(content.len());
    let mut last = 0;

    for caps in IMPORT_STATEMENT.captures_iter(content) {
        let Some(statement) = statement_from(&caps) else {
            continue;
        };
        let Some(replacement) = mapper(&statement) else {
            continue;
        };
        let Some(span) = caps.name("specifier") else {
            continue;
        };

        if replacement != statement.specifier {
            tracing::trace!(from = statement.specifier, to = %replacement, "rewrite specifier");
        }

        result.push_str(&content[last..span.start()]);
        result.push_str(&replacement);
        last = span.end();
    }

    result.push_str(&content[last..]);
    result
}

fn statement_from<'a>(caps: &Captures<'a>) -> Option<ImportStatement<'a>> {
    let whole = caps.get(0)?;
    let specifier = caps.name("specifier")?.as_str();

    let kind = if caps.name("export_clause").is_some() {
        ImportKind::ReExport
    } else {
        match caps.name("import_clause") {
            Some(clause) if is_type_only(clause.as_str()) => ImportKind::TypeOnly,
            Some(_) => ImportKind::Value,
            None => ImportKind::SideEffect,
        }
    };

    Some(ImportStatement {
        kind,
        specifier,
        offset: whole.start(),
    })
}

/// `import type { T }` / `import type T` の判定
fn is_type_only(clause: &str) -> bool {
    let clause = clause.trim_start();
    match clause.strip_prefix("type") {
        Some(rest) => rest.starts_with(|c: char| c.is_whitespace() || c == '{' || c == '*'),
        None => false,
    }
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod tests;
