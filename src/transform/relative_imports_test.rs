use super::*;

const FILE_IMAGE_SRC: &str = "ui-interfaces/src/file-image/FileImage.tsx";
const FILE_IMAGE_DEST: &str = "components/ui/file-image.tsx";

// ============================================================================
// transform_relative_imports
// ============================================================================

#[test]
fn test_collapsed_directory_parent_becomes_sibling() {
    let content = "import { Upload } from '../upload';\n";

    let result =
        transform_relative_imports(content, FILE_IMAGE_SRC, FILE_IMAGE_DEST, "@/components/ui");

    assert_eq!(result, "import { Upload } from './upload';\n");
}

#[test]
fn test_collapsed_directory_keeps_own_siblings() {
    // 同じディレクトリ内のファイルは一緒に移動する
    let content = "import { Preview } from './Preview';\n";

    let result =
        transform_relative_imports(content, FILE_IMAGE_SRC, FILE_IMAGE_DEST, "@/components/ui");

    assert_eq!(result, content);
}

#[test]
fn test_nested_target_is_repointed() {
    let content = "import { UploadZone } from '../upload/UploadZone';\n";

    let result =
        transform_relative_imports(content, FILE_IMAGE_SRC, FILE_IMAGE_DEST, "@/components/ui");

    assert_eq!(result, "import { UploadZone } from './upload/UploadZone';\n");
}

#[test]
fn test_escape_above_source_root() {
    let content = "import { format } from '../../lib/format';\n";

    let result =
        transform_relative_imports(content, FILE_IMAGE_SRC, FILE_IMAGE_DEST, "@/components/ui");

    assert_eq!(result, "import { format } from '../lib/format';\n");
}

#[test]
fn test_src_dir_destination() {
    let content = "import { Upload } from '../upload';\n";

    let result = transform_relative_imports(
        content,
        FILE_IMAGE_SRC,
        "src/components/ui/file-image.tsx",
        "@/components/ui",
    );

    assert_eq!(result, "import { Upload } from './upload';\n");
}

#[test]
fn test_same_depth_is_unchanged() {
    let content = "import { Upload } from '../upload';\nimport { x } from './x/';\n";

    let result = transform_relative_imports(
        content,
        "ui-interfaces/src/file-image/FileImage.tsx",
        "components/ui/file-image/file-image.tsx",
        "@/components/ui",
    );

    assert_eq!(result, content);
}

#[test]
fn test_deeper_destination_adds_levels() {
    let content = "import { Upload } from './upload';\n";

    let result = transform_relative_imports(
        content,
        "ui-interfaces/src/Button.tsx",
        "components/ui/button/button.tsx",
        "components/ui",
    );

    assert_eq!(result, "import { Upload } from '../upload';\n");
}

#[test]
fn test_only_relative_specifiers_are_touched() {
    let content = r#"import React from 'react';
import { Field } from '@microbuild/types';
import { cn } from '@/lib/utils';
import { Upload } from "../upload";
"#;

    let result =
        transform_relative_imports(content, FILE_IMAGE_SRC, FILE_IMAGE_DEST, "@/components/ui");

    assert_eq!(
        result,
        r#"import React from 'react';
import { Field } from '@microbuild/types';
import { cn } from '@/lib/utils';
import { Upload } from "./upload";
"#
    );
}

#[test]
fn test_unknown_destination_root_falls_back_to_file_dir() {
    let content = "import { Upload } from '../upload';\n";

    let result =
        transform_relative_imports(content, FILE_IMAGE_SRC, "widgets/file-image.tsx", "@/components/ui");

    assert_eq!(result, "import { Upload } from './upload';\n");
}

#[test]
fn test_windows_separators() {
    let content = "import { Upload } from '../upload';\n";

    let result = transform_relative_imports(
        content,
        "ui-interfaces\\src\\file-image\\FileImage.tsx",
        "components\\ui\\file-image.tsx",
        "@/components/ui",
    );

    assert_eq!(result, "import { Upload } from './upload';\n");
}

// ============================================================================
// transform_vform_imports
// ============================================================================

#[test]
fn test_vform_types_import_from_nested_component() {
    let content = "import type { FieldProps } from '../types';\n";

    let result = transform_vform_imports(
        content,
        "ui-form/src/components/InputField.tsx",
        "components/ui/vform/components/input-field.tsx",
    );

    assert_eq!(result, content);
}

#[test]
fn test_vform_types_import_from_package_root() {
    let content = "import type { VFormProps } from './types';\n";

    let result = transform_vform_imports(
        content,
        "ui-form/src/VForm.tsx",
        "src/components/ui/vform/vform.tsx",
    );

    assert_eq!(result, content);
}

#[test]
fn test_vform_flattened_component_repoints_types() {
    let content = "import type { FieldProps } from '../types';\n";

    let result = transform_vform_imports(
        content,
        "ui-form/src/components/InputField.tsx",
        "components/ui/vform/input-field.tsx",
    );

    assert_eq!(result, "import type { FieldProps } from './types';\n");
}

// ============================================================================
// relocate_imports
// ============================================================================

#[test]
fn test_relocate_imports_directory_root() {
    let relocation = Relocation::new("pkg/src/a/b/File.tsx", "out/root/a/file.tsx");

    let result = relocate_imports(
        "import x from '../../shared';\n",
        &relocation,
        DestinationRoot::Directory("root"),
    );

    assert_eq!(result, "import x from '../shared';\n");
}

#[test]
fn test_strip_alias_prefix() {
    assert_eq!(strip_alias_prefix("@/components/ui"), "components/ui");
    assert_eq!(strip_alias_prefix("~/components/ui"), "components/ui");
    assert_eq!(strip_alias_prefix("components/ui"), "components/ui");
}
