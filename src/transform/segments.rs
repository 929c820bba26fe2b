//! スラッシュ区切りパスのセグメント演算
//!
//! ディスク上のファイルを解決せず、2 つのパス文字列だけから相対指定子を
//! 計算する（POSIX の relpath 相当）。

/// ルートからの相対位置
///
/// `ups > 0` はルートより上位（`ups` 階層上がった先の `segments`）を表す。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RootRelative {
    pub ups: usize,
    pub segments: Vec<String>,
}

/// パスをセグメント列に分解する
///
/// バックスラッシュは `/` として扱い、空セグメントと `.` は捨てる。
pub fn split_path(path: &str) -> Vec<String> {
    path.replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .map(str::to_string)
        .collect()
}

/// ファイルパスのディレクトリ部分
pub fn parent_dirs(file_path: &str) -> Vec<String> {
    let mut segments = split_path(file_path);
    segments.pop();
    segments
}

/// `dir` を起点に相対指定子を解決する
pub fn resolve(dir: &[String], specifier: &str) -> RootRelative {
    let mut target = RootRelative {
        ups: 0,
        segments: dir.to_vec(),
    };

    for part in specifier.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if target.segments.pop().is_none() {
                    target.ups += 1;
                }
            }
            name => target.segments.push(name.to_string()),
        }
    }

    target
}

/// `from_dir` から `target` への相対指定子
///
/// 同階層以下は `./` で始まり、上位へ出る場合は `../` を必要数だけ重ねる。
pub fn relative_specifier(from_dir: &[String], target: &RootRelative) -> String {
    let (ups, rest) = if target.ups > 0 {
        (from_dir.len() + target.ups, target.segments.as_slice())
    } else {
        let common = from_dir
            .iter()
            .zip(&target.segments)
            .take_while(|(a, b)| a == b)
            .count();
        (from_dir.len() - common, &target.segments[common..])
    };

    let mut parts: Vec<&str> = Vec::with_capacity(ups + rest.len() + 1);
    if ups == 0 {
        parts.push(".");
    } else {
        parts.extend(std::iter::repeat("..").take(ups));
    }
    parts.extend(rest.iter().map(String::as_str));
    parts.join("/")
}

/// `needle` が連続して現れる最後の位置（`haystack` 内の開始インデックス）
pub fn rfind_run(haystack: &[String], needle: &[String]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&i| haystack[i..i + needle.len()] == *needle)
}

#[cfg(test)]
#[path = "segments_test.rs"]
mod tests;
