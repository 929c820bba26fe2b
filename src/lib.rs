//! microbuild-transform
//!
//! copy & own 方式で配布するコンポーネントのソースを、コピー先プロジェクトで
//! そのままコンパイルできる形へ書き換えるエンジン。
//!
//! - パッケージ import (`@microbuild/types` など) をプロジェクトのエイリアスへ置換
//! - ディレクトリ移動に合わせて相対 import を再計算
//! - PascalCase のファイル名参照を kebab-case へ正規化
//! - 由来ヘッダー（provenance header）の付与と抽出
//!
//! すべての変換は `(content, config)` から新しい文字列を返す純粋関数で、
//! ファイル I/O は行わない。

pub mod casing;
pub mod config;
pub mod conventions;
pub mod error;
pub mod provenance;
pub mod transform;

pub use config::{Aliases, Config};
pub use error::{Result, TransformError};
pub use provenance::{add_origin_header, extract_origin_info, OriginInfo};
pub use transform::{
    has_microbuild_imports, normalize_import_paths, transform_imports, transform_relative_imports,
    transform_vform_imports,
};
