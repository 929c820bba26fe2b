//! 命名規約の定数
//!
//! パッケージスコープとタグ名前空間はソースパッケージ側の規約で固定されている。

/// 書き換え対象となるパッケージスコープ
pub const PACKAGE_SCOPE: &str = "@microbuild";

/// ヘッダータグ・ディレクティブの名前空間
pub const TAG_NAMESPACE: &str = "microbuild";

/// 由来タグ (`@microbuild-origin`)
pub const ORIGIN_TAG: &str = "@microbuild-origin";

/// バージョンタグ (`@microbuild-version`)
pub const VERSION_TAG: &str = "@microbuild-version";

/// 日付タグ (`@microbuild-date`)
pub const DATE_TAG: &str = "@microbuild-date";

/// casing 正規化を無効化するディレクティブ
pub const PRESERVE_CASING_DIRECTIVE: &str = "// @microbuild-preserve-casing";

/// 指定子がパッケージスコープに属するか
///
/// `@microbuild` そのもの、または `@microbuild/` で始まる場合のみ true。
/// `@microbuild-extra/...` のような別スコープは含まない。
pub fn is_scoped_specifier(specifier: &str) -> bool {
    match specifier.strip_prefix(PACKAGE_SCOPE) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
