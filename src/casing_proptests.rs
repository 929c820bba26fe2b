use super::*;
use proptest::prelude::*;

/// PascalCase / camelCase の識別子
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,24}".prop_map(|s| s)
}

/// kebab-case の識別子
fn kebab_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}(-[a-z][a-z0-9]{0,8}){0,3}".prop_map(|s| s)
}

proptest! {
    /// to_kebab_case は冪等
    #[test]
    fn prop_to_kebab_case_is_idempotent(s in identifier_strategy()) {
        let once = to_kebab_case(&s);
        prop_assert_eq!(to_kebab_case(&once), once);
    }

    /// 結果に大文字は残らない
    #[test]
    fn prop_to_kebab_case_is_lowercase(s in identifier_strategy()) {
        prop_assert!(is_kebab_case(&to_kebab_case(&s)));
    }

    /// ハイフンを除けば元の文字列の小文字化と一致する
    #[test]
    fn prop_to_kebab_case_only_inserts_hyphens(s in identifier_strategy()) {
        let kebab = to_kebab_case(&s);
        prop_assert_eq!(kebab.replace('-', ""), s.to_lowercase());
    }

    /// kebab -> Pascal -> kebab で元に戻る（数字直後の大文字は区切られないため数字なし）
    #[test]
    fn prop_kebab_pascal_round_trip(s in "[a-z]{2,8}(-[a-z]{2,8}){0,3}") {
        prop_assert_eq!(to_kebab_case(&to_pascal_case(&s)), s);
    }

    /// kebab 入力は変更されない
    #[test]
    fn prop_kebab_input_unchanged(s in kebab_strategy()) {
        prop_assert_eq!(to_kebab_case(&s), s);
    }
}
