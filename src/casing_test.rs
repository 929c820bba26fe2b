use super::*;

// ============================================================================
// to_kebab_case
// ============================================================================

#[test]
fn test_to_kebab_case_pascal() {
    assert_eq!(to_kebab_case("InputBlockEditor"), "input-block-editor");
    assert_eq!(to_kebab_case("FileImage"), "file-image");
    assert_eq!(to_kebab_case("Upload"), "upload");
}

#[test]
fn test_to_kebab_case_single_leading_capital() {
    // 先頭の 1 文字大文字は頭字語ではなく最初の単語の一部
    assert_eq!(to_kebab_case("VForm"), "vform");
    assert_eq!(to_kebab_case("VFormField"), "vform-field");
}

#[test]
fn test_to_kebab_case_acronym_boundary() {
    assert_eq!(to_kebab_case("HTMLParser"), "html-parser");
    assert_eq!(to_kebab_case("IOStream"), "io-stream");
    assert_eq!(to_kebab_case("parseHTML"), "parse-html");
}

#[test]
fn test_to_kebab_case_camel() {
    assert_eq!(to_kebab_case("inputBlock"), "input-block");
    assert_eq!(to_kebab_case("useFileUpload"), "use-file-upload");
}

#[test]
fn test_to_kebab_case_already_kebab() {
    assert_eq!(to_kebab_case("input-block-editor"), "input-block-editor");
    assert_eq!(to_kebab_case("upload"), "upload");
}

#[test]
fn test_to_kebab_case_single_letter() {
    assert_eq!(to_kebab_case("X"), "x");
    assert_eq!(to_kebab_case(""), "");
}

#[test]
fn test_to_kebab_case_digits() {
    assert_eq!(to_kebab_case("Input2"), "input2");
    assert_eq!(to_kebab_case("Step2Form"), "step2form");
}

// ============================================================================
// to_pascal_case / to_camel_case
// ============================================================================

#[test]
fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("input-block-editor"), "InputBlockEditor");
    assert_eq!(to_pascal_case("upload"), "Upload");
    assert_eq!(to_pascal_case("vform"), "Vform");
}

#[test]
fn test_to_pascal_case_skips_empty_segments() {
    assert_eq!(to_pascal_case("file--image"), "FileImage");
    assert_eq!(to_pascal_case("-upload-"), "Upload");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn test_to_pascal_case_keeps_existing_pascal() {
    assert_eq!(to_pascal_case("FileImage"), "FileImage");
}

#[test]
fn test_to_camel_case() {
    assert_eq!(to_camel_case("use-file-upload"), "useFileUpload");
    assert_eq!(to_camel_case("upload"), "upload");
    assert_eq!(to_camel_case(""), "");
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_is_pascal_case() {
    assert!(is_pascal_case("Upload"));
    assert!(is_pascal_case("FileImage"));
    assert!(is_pascal_case("VForm"));
    assert!(!is_pascal_case("upload"));
    assert!(!is_pascal_case("file-image"));
    assert!(!is_pascal_case("File-Image"));
    assert!(!is_pascal_case(""));
    assert!(!is_pascal_case(".."));
}

#[test]
fn test_is_kebab_case() {
    assert!(is_kebab_case("file-image"));
    assert!(is_kebab_case("index"));
    assert!(!is_kebab_case("FileImage"));
    assert!(!is_kebab_case(""));
}
