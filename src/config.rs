//! エンジン設定
//!
//! CLI の init/config 層が一度だけ構築し、以降は読み取り専用で各変換へ
//! 参照渡しされる値オブジェクト。グローバル状態は持たない。

use crate::error::{Result, TransformError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 既定の配布モード
const DEFAULT_MODEL: &str = "copy-own";

/// 既定のコンポーネントエイリアス
const DEFAULT_COMPONENTS_ALIAS: &str = "@/components/ui";

/// 既定のライブラリエイリアス
const DEFAULT_LIB_ALIAS: &str = "@/lib/microbuild";

/// パスエイリアス設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases {
    /// コンポーネント配置先（例: `@/components/ui`）
    pub components: String,
    /// 共有ライブラリ配置先（例: `@/lib/microbuild`）
    pub lib: String,
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            components: DEFAULT_COMPONENTS_ALIAS.to_string(),
            lib: DEFAULT_LIB_ALIAS.to_string(),
        }
    }
}

/// プロジェクト設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// 配布モード識別子
    #[serde(default = "default_model")]
    pub model: String,
    /// プロジェクトが TSX を使うか
    #[serde(default = "default_true")]
    pub tsx: bool,
    /// コンポーネントが `src/` 配下にあるか
    #[serde(default)]
    pub src_dir: bool,
    #[serde(default)]
    pub aliases: Aliases,
    /// インストール済みの共有パッケージ名
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub installed_lib: BTreeSet<String>,
    /// インストール済みのコンポーネント名
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub installed_components: BTreeSet<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            tsx: true,
            src_dir: false,
            aliases: Aliases::default(),
            installed_lib: BTreeSet::new(),
            installed_components: BTreeSet::new(),
        }
    }
}

impl Config {
    /// JSON 文字列から設定を読み込み、検証する
    ///
    /// ファイルの読み込みは呼び出し側（CLI 層）の責務。
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// エイリアスを差し替えた設定を返す
    pub fn with_aliases(mut self, components: impl Into<String>, lib: impl Into<String>) -> Self {
        self.aliases = Aliases {
            components: components.into(),
            lib: lib.into(),
        };
        self
    }

    /// 設定を検証
    ///
    /// - エイリアスは空文字列不可
    /// - エイリアスは末尾スラッシュ不可（連結時に `//` になるため）
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("aliases.components", &self.aliases.components),
            ("aliases.lib", &self.aliases.lib),
        ] {
            if value.trim().is_empty() {
                return Err(TransformError::InvalidConfig(format!(
                    "{} cannot be empty",
                    key
                )));
            }
            if value.ends_with('/') {
                return Err(TransformError::InvalidConfig(format!(
                    "{} must not end with '/': {}",
                    key, value
                )));
            }
        }
        Ok(())
    }

    pub fn is_lib_installed(&self, name: &str) -> bool {
        self.installed_lib.contains(name)
    }

    pub fn is_component_installed(&self, name: &str) -> bool {
        self.installed_components.contains(name)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
