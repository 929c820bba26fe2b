use super::*;
use crate::config::Config;
use crate::provenance::{add_origin_header, extract_origin_info};
use proptest::prelude::*;

/// PascalCase のファイル名
fn pascal_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,6}([A-Z][a-z]{1,6}){0,2}".prop_map(|s| s)
}

/// サードパーティのパッケージ名
fn third_party_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,12}".prop_map(|s| s),
        "@[a-z]{2,8}/[a-z][a-z0-9-]{0,10}".prop_map(|s| s),
    ]
    .prop_filter("must not be the package scope", |s| {
        !crate::conventions::is_scoped_specifier(s)
    })
}

/// 相対指定子（PascalCase / kebab 混在）
fn relative_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("./"), Just("../"), Just("../../")],
        proptest::collection::vec(
            prop_oneof![pascal_strategy(), "[a-z]{2,6}(-[a-z]{2,6})?".prop_map(|s| s)],
            1..4,
        ),
    )
        .prop_map(|(prefix, segments)| format!("{}{}", prefix, segments.join("/")))
}

proptest! {
    /// 正規化は冪等
    #[test]
    fn prop_normalize_import_paths_is_idempotent(specifier in relative_strategy()) {
        let content = format!("import {{ X }} from '{}';\n", specifier);
        let once = normalize_import_paths(&content);
        prop_assert_eq!(normalize_import_paths(&once), once);
    }

    /// ディレクティブがあれば一切変更しない
    #[test]
    fn prop_directive_bypass_is_total(specifier in relative_strategy()) {
        let content = format!(
            "// @microbuild-preserve-casing\nimport {{ X }} from '{}';\n",
            specifier
        );
        prop_assert_eq!(normalize_import_paths(&content), content);
    }

    /// スコープ外の import は変更しない
    #[test]
    fn prop_transform_imports_non_interference(package in third_party_strategy()) {
        let content = format!("import Thing from '{}';\n", package);
        prop_assert_eq!(transform_imports(&content, &Config::default()), content);
    }

    /// lib エイリアスの変更は出力の接頭辞だけを変える
    #[test]
    fn prop_alias_respect(lib in "[@~]/[a-z]{2,8}(/[a-z]{2,8})?") {
        let content = "import { Field } from '@microbuild/types';";
        let config = Config::default().with_aliases("@/components/ui", lib.clone());
        prop_assert_eq!(
            transform_imports(content, &config),
            format!("import {{ Field }} from '{}/types';", lib)
        );
    }

    /// ヘッダーの付与と抽出の往復
    #[test]
    fn prop_header_round_trip(
        subpath in "[a-z]{1,8}(-[a-z]{1,8})?",
        package in "@[a-z]{2,8}/[a-z]{2,8}",
        version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        use_client in any::<bool>(),
    ) {
        let body = "export const X = 1;\n";
        let content = if use_client {
            format!("\"use client\";\n\n{}", body)
        } else {
            body.to_string()
        };

        let stamped = add_origin_header(&content, &subpath, &package, &version);
        let info = extract_origin_info(&stamped).unwrap();

        let expected_origin = format!("{}/{}", package, subpath);
        prop_assert_eq!(info.origin.as_deref(), Some(expected_origin.as_str()));
        prop_assert_eq!(info.version.as_deref(), Some(version.as_str()));
        if use_client {
            prop_assert!(stamped.starts_with("\"use client\";\n"));
        }
    }
}
