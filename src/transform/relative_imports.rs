//! 相対 import の再計算
//!
//! ソースパッケージ内の位置（例: `ui-interfaces/src/file-image/FileImage.tsx`）から
//! コピー先の位置（例: `components/ui/file-image.tsx`）へファイルが移動したとき、
//! 相対指定子が同じ論理ファイルを指し続けるよう `./` / `../` を計算し直す。
//!
//! ## モデル
//!
//! - ソースのルートは最初の `src` ディレクトリ（無ければパス先頭）
//! - コピー先のルートはコンポーネントエイリアスのディレクトリ（vform 版は `vform`）
//! - ファイルのディレクトリはルート相対で `from` から `to` へ移動する
//! - `from` 配下を指す指定子は一緒に移動し、それ以外はルート相対位置を保つ
//!   （`from` がルート直下の場合、移動するのはファイル自身のみ）

use crate::transform::scanner::{rewrite_specifiers, SpecifierKind};
use crate::transform::segments::{parent_dirs, relative_specifier, resolve, rfind_run, split_path};

/// ソース側ルートとみなすディレクトリ名
const SOURCE_ROOT_DIR: &str = "src";

/// 共有フォームパッケージのコピー先ディレクトリ名
const VFORM_DIR: &str = "vform";

/// ファイルの移動元と移動先（スラッシュ区切りの相対パス）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation<'a> {
    pub source: &'a str,
    pub dest: &'a str,
}

impl<'a> Relocation<'a> {
    pub fn new(source: &'a str, dest: &'a str) -> Self {
        Self { source, dest }
    }
}

/// コピー先ルートの指定方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationRoot<'a> {
    /// エイリアス（`@/components/ui`）またはそのディレクトリ（`components/ui`）
    Alias(&'a str),
    /// ディレクトリ名（最後に現れる位置をルートとする）
    Directory(&'a str),
}

/// ルート相対で見たディレクトリの移動
#[derive(Debug, Clone, PartialEq, Eq)]
struct DirectoryMove {
    from: Vec<String>,
    to: Vec<String>,
}

impl DirectoryMove {
    fn new(relocation: &Relocation<'_>, root: DestinationRoot<'_>) -> Self {
        Self {
            from: source_dirs(relocation.source),
            to: dest_dirs(relocation.dest, root),
        }
    }

    fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// 指定子を移動後の位置から見た形へ変換する（変化がなければ None）
    fn rewrite(&self, specifier: &str) -> Option<String> {
        let mut target = resolve(&self.from, specifier);
        let unchanged = relative_specifier(&self.from, &target);

        if !self.from.is_empty()
            && target.ups == 0
            && target.segments.starts_with(&self.from)
        {
            let rest = target.segments.split_off(self.from.len());
            target.segments = self.to.iter().cloned().chain(rest).collect();
        }

        // 移動前の正規形と一致する場合は元の表記を残す
        let rewritten = relative_specifier(&self.to, &target);
        (rewritten != unchanged).then_some(rewritten)
    }
}

/// ソースパス -> ルート相対ディレクトリ
fn source_dirs(source: &str) -> Vec<String> {
    let dirs = parent_dirs(source);
    match dirs.iter().position(|d| d == SOURCE_ROOT_DIR) {
        Some(index) => dirs[index + 1..].to_vec(),
        None => dirs,
    }
}

/// コピー先パス -> ルート相対ディレクトリ
fn dest_dirs(dest: &str, root: DestinationRoot<'_>) -> Vec<String> {
    let dirs = parent_dirs(dest);
    let root_segments = match root {
        DestinationRoot::Alias(alias) => split_path(strip_alias_prefix(alias)),
        DestinationRoot::Directory(name) => split_path(name),
    };

    match rfind_run(&dirs, &root_segments) {
        Some(index) => dirs[index + root_segments.len()..].to_vec(),
        None => {
            tracing::debug!(
                dest,
                ?root,
                "destination root not found in path, using the file's directory"
            );
            Vec::new()
        }
    }
}

/// `@/components/ui` -> `components/ui`
fn strip_alias_prefix(alias: &str) -> &str {
    ["@/", "~/", "#/", "./", "/"]
        .iter()
        .find_map(|prefix| alias.strip_prefix(*prefix))
        .unwrap_or(alias)
}

/// 移動に合わせて相対 import を書き換える
///
/// 移動前後でルート相対のディレクトリが同じ場合、内容はそのまま返す。
/// パッケージ import やエイリアス import には触れない。
pub fn relocate_imports(
    content: &str,
    relocation: &Relocation<'_>,
    root: DestinationRoot<'_>,
) -> String {
    let directory_move = DirectoryMove::new(relocation, root);
    if directory_move.is_identity() {
        return content.to_string();
    }

    rewrite_specifiers(content, |statement| match statement.specifier_kind() {
        SpecifierKind::Relative => directory_move.rewrite(statement.specifier),
        SpecifierKind::Package | SpecifierKind::Other => None,
    })
}

/// 汎用版: コピー先ルートはコンポーネントエイリアス
///
/// ```text
/// ui-interfaces/src/file-image/FileImage.tsx  -> components/ui/file-image.tsx
/// import { Upload } from '../upload'          -> import { Upload } from './upload'
/// ```
pub fn transform_relative_imports(
    content: &str,
    source_file_path: &str,
    dest_file_path: &str,
    components_root: &str,
) -> String {
    relocate_imports(
        content,
        &Relocation::new(source_file_path, dest_file_path),
        DestinationRoot::Alias(components_root),
    )
}

/// 共有フォームパッケージ（ui-form）版: コピー先ルートは `vform` ディレクトリ
///
/// コピー先は `components/` の 1 階層を含めて構成を保つため、
/// `../types` / `./types` は移動後も同じ types モジュールを指す。
pub fn transform_vform_imports(
    content: &str,
    source_file_path: &str,
    dest_file_path: &str,
) -> String {
    relocate_imports(
        content,
        &Relocation::new(source_file_path, dest_file_path),
        DestinationRoot::Directory(VFORM_DIR),
    )
}

#[cfg(test)]
#[path = "relative_imports_test.rs"]
mod tests;
