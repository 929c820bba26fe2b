//! パッケージ import の書き換え
//!
//! `@microbuild/<subpackage>[/<path>]` をプロジェクトローカルのエイリアスへ
//! 置き換える。対応表は固定で、未知のサブパッケージは推測せずそのまま残す。

use crate::config::Config;
use crate::conventions::{is_scoped_specifier, PACKAGE_SCOPE};
use crate::transform::scanner::{find_imports, rewrite_specifiers, SpecifierKind};
use std::collections::BTreeSet;

/// 書き換え対象のサブパッケージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subpackage {
    /// `types` / `services` / `hooks` / `utils`: `aliases.lib` 配下
    Lib(&'static str),
    /// `ui-interfaces`: `aliases.components` 直下
    UiInterfaces,
    /// `ui-form`: `aliases.components/vform`
    UiForm,
}

/// `aliases.lib` 配下に置かれるサブパッケージ
const LIB_SUBPACKAGES: [&str; 4] = ["types", "services", "hooks", "utils"];

impl Subpackage {
    /// サブパッケージ名（`@microbuild/` の直後のセグメント）から対応を引く
    ///
    /// 対応表に無い名前は None。
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ui-interfaces" => Some(Subpackage::UiInterfaces),
            "ui-form" => Some(Subpackage::UiForm),
            other => LIB_SUBPACKAGES
                .into_iter()
                .find(|lib| *lib == other)
                .map(Subpackage::Lib),
        }
    }

    /// サブパッケージのルートに対応するローカルパス
    fn base(&self, config: &Config) -> String {
        match self {
            Subpackage::Lib(name) => format!("{}/{}", config.aliases.lib, name),
            Subpackage::UiInterfaces => config.aliases.components.clone(),
            Subpackage::UiForm => format!("{}/vform", config.aliases.components),
        }
    }
}

/// 単一の指定子をローカルパスへ解決する
///
/// スコープ外、スコープ直下（`@microbuild`）、未知のサブパッケージは `None`。
pub fn resolve_package_specifier(specifier: &str, config: &Config) -> Option<String> {
    let rest = specifier.strip_prefix(PACKAGE_SCOPE)?.strip_prefix('/')?;
    let (name, subpath) = match rest.split_once('/') {
        Some((name, subpath)) => (name, Some(subpath)),
        None => (rest, None),
    };

    let Some(subpackage) = Subpackage::from_name(name) else {
        tracing::debug!(specifier, "unknown subpackage, leaving import unchanged");
        return None;
    };

    let base = subpackage.base(config);
    Some(match subpath.filter(|s| !s.is_empty()) {
        Some(subpath) => format!("{}/{}", base, subpath),
        None => base,
    })
}

/// パッケージ import をプロジェクトローカルのエイリアスへ書き換える
///
/// import / `import type` / 副作用 import / `export ... from` が対象。
/// 指定子以外（バインディング、`type` キーワード、引用符）は変更しない。
pub fn transform_imports(content: &str, config: &Config) -> String {
    rewrite_specifiers(content, |statement| match statement.specifier_kind() {
        SpecifierKind::Package => resolve_package_specifier(statement.specifier, config),
        SpecifierKind::Relative | SpecifierKind::Other => None,
    })
}

/// パッケージスコープからの import を含むか
///
/// 変換パイプライン全体をスキップしてよいかの判定に使う。
pub fn has_microbuild_imports(content: &str) -> bool {
    find_imports(content)
        .iter()
        .any(|statement| is_scoped_specifier(statement.specifier))
}

/// ファイルが import している lib 系サブパッケージ名の一覧
///
/// 共有ライブラリを併せてインストールすべきかの判定用。
pub fn required_libs(content: &str) -> BTreeSet<String> {
    find_imports(content)
        .iter()
        .filter_map(|statement| statement.specifier.strip_prefix(PACKAGE_SCOPE)?.strip_prefix('/'))
        .filter_map(|rest| {
            let name = rest.split('/').next()?;
            match Subpackage::from_name(name)? {
                Subpackage::Lib(lib) => Some(lib.to_string()),
                Subpackage::UiInterfaces | Subpackage::UiForm => None,
            }
        })
        .collect()
}

/// 未インストールの lib 系サブパッケージ
pub fn missing_libs(content: &str, config: &Config) -> BTreeSet<String> {
    required_libs(content)
        .into_iter()
        .filter(|lib| !config.is_lib_installed(lib))
        .collect()
}

#[cfg(test)]
#[path = "package_imports_test.rs"]
mod tests;
