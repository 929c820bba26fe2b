//! import/パス変換パイプライン
//!
//! 呼び出し順: パッケージ import → 相対 import（移動がある場合のみ）→ casing 正規化。
//! 由来ヘッダーは [`crate::provenance`] で別途付与する。

pub mod casing_normalizer;
pub mod package_imports;
pub mod pipeline;
pub mod relative_imports;
pub mod scanner;
pub mod segments;

pub use casing_normalizer::{has_preserve_casing_directive, normalize_import_paths};
pub use package_imports::{has_microbuild_imports, resolve_package_specifier, transform_imports};
pub use pipeline::{transform_source, FileMove, SourceOrigin, TransformRequest};
pub use relative_imports::{transform_relative_imports, transform_vform_imports, Relocation};
pub use scanner::{rewrite_specifiers, ImportKind, ImportStatement, SpecifierKind};

#[cfg(test)]
mod transform_proptests;
