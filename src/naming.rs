//! Part paths and file names.
//!
//! Every path that depends on a slide number is produced here so the
//! content-type manifest, the relationship files and the archive entries
//! agree on it.

use std::cmp::Ordering;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Name used when no usable download name can be derived.
pub const DEFAULT_DECK_NAME: &str = "presentation.pptx";

/// Archive path of a slide part.
pub fn slide_path(index: usize) -> String {
    format!("ppt/slides/slide{}.xml", index)
}

/// Archive path of a slide's relationship file.
pub fn slide_rels_path(index: usize) -> String {
    format!("ppt/slides/_rels/slide{}.xml.rels", index)
}

/// Archive path of a slide's embedded page image.
pub fn media_path(index: usize) -> String {
    format!("ppt/media/image{}.png", index)
}

/// Path of the relationship file describing `part_path`'s outgoing references.
///
/// An empty part path names the package itself.
pub fn rels_path_for(part_path: &str) -> String {
    if part_path.is_empty() || part_path == "/" {
        return "_rels/.rels".to_string();
    }
    match part_path.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_path),
    }
}

/// Resolve a relationship target against the part that owns it.
///
/// Absolute targets (leading `/`) are taken from the package root.
pub fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(stripped) = target.strip_prefix('/') {
        return stripped.to_string();
    }

    let mut segments: Vec<&str> = match source_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };

    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." | "" => {}
            other => segments.push(other),
        }
    }

    segments.join("/")
}

/// Derive a safe download name for the deck built from `source_name`.
///
/// The directory part is dropped, a `.pdf` extension is swapped for `.pptx`,
/// and characters that would break a `Content-Disposition` header or a file
/// system path are replaced.
///
/// # Example
///
/// ```
/// use pagedeck::naming::deck_file_name;
///
/// assert_eq!(deck_file_name("uploads/Quarterly Report.pdf"), "Quarterly Report.pptx");
/// assert_eq!(deck_file_name("a\"b.pdf"), "a_b.pptx");
/// ```
pub fn deck_file_name(source_name: &str) -> String {
    let normalized: String = source_name.nfc().collect();
    let base = normalized
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let stem = match base.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case("pdf") => stem,
        _ => base,
    };

    let cleaned: String = stem
        .chars()
        .map(|c| match c {
            '"' | '\'' | ';' | ':' | '*' | '?' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim().trim_matches('.');

    if cleaned.is_empty() {
        DEFAULT_DECK_NAME.to_string()
    } else {
        format!("{}.pptx", cleaned)
    }
}

/// Order page image paths the way a rasterizer numbers them.
///
/// Digit runs compare numerically, so `page-2.png` sorts before
/// `page-10.png` and zero-padded names keep their order.
pub fn compare_page_names(a: &Path, b: &Path) -> Ordering {
    let a = a.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let b = b.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    natural_cmp(&a, &b)
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_number(&mut left);
                let rn = take_number(&mut right);
                let trimmed_l = ln.trim_start_matches('0');
                let trimmed_r = rn.trim_start_matches('0');
                let ord = trimmed_l
                    .len()
                    .cmp(&trimmed_r.len())
                    .then_with(|| trimmed_l.cmp(trimmed_r));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}
