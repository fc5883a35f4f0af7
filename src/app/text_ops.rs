use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be
/// extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Find next occurrence of search string in text
///
/// Returns the byte position and byte length of the match in the original
/// text, or None if not found. Searches from start_pos onwards. The length
/// can differ from the needle's under case-insensitive matching (lowercasing
/// is not length-preserving, e.g. 'İ'), which is why offsets are never
/// mapped back from a lowercased copy.
pub fn find_in_text(
    text: &str,
    search: &str,
    start_pos: usize,
    case_sensitive: bool,
) -> Option<(usize, usize)> {
    if search.is_empty() || start_pos >= text.len() {
        return None;
    }

    if case_sensitive {
        return text[start_pos..]
            .find(search)
            .map(|pos| (start_pos + pos, search.len()));
    }

    let needle: Vec<char> = search.chars().flat_map(char::to_lowercase).collect();
    let tail = &text[start_pos..];
    for (offset, _) in tail.char_indices() {
        if let Some(len) = folded_prefix_len(&tail[offset..], &needle) {
            return Some((start_pos + offset, len));
        }
    }
    None
}

/// Byte length of the prefix of `text` whose per-char lowercase folding is
/// exactly `needle`, if any. The needle must cover whole characters'
/// expansions, so a returned length always lands on a char boundary of the
/// original text.
fn folded_prefix_len(text: &str, needle: &[char]) -> Option<usize> {
    let mut remaining = needle.iter();
    let mut need = remaining.next();
    let mut len = 0;
    for c in text.chars() {
        for folded in c.to_lowercase() {
            match need {
                Some(&n) if n == folded => need = remaining.next(),
                // Mismatch, or the needle ran out inside this char's
                // expansion: either way no whole-char match here.
                _ => return None,
            }
        }
        len += c.len_utf8();
        if need.is_none() {
            return Some(len);
        }
    }
    None
}

/// Replace every occurrence of `search` with `replacement`.
///
/// Returns the new text and the number of replacements made.
pub fn replace_all_in_text(
    text: &str,
    search: &str,
    replacement: &str,
    case_sensitive: bool,
) -> (String, usize) {
    if search.is_empty() {
        return (text.to_string(), 0);
    }

    let mut result = String::with_capacity(text.len());
    let mut count = 0;
    let mut pos = 0;
    while let Some((found, len)) = find_in_text(text, search, pos, case_sensitive) {
        result.push_str(&text[pos..found]);
        result.push_str(replacement);
        count += 1;
        pos = found + len;
    }
    result.push_str(&text[pos..]);
    (result, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename() {
        assert_eq!(extract_filename("/home/user/page.html"), "page.html");
        assert_eq!(extract_filename("page.html"), "page.html");
        assert_eq!(extract_filename("C:/docs/index.htm"), "index.htm");
    }

    #[test]
    fn test_extract_filename_degenerate() {
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_find_in_text_case_insensitive() {
        let text = "<DIV>content</DIV>";
        assert_eq!(find_in_text(text, "div", 0, false), Some((1, 3)));
        assert_eq!(find_in_text(text, "div", 2, false), Some((14, 3)));
    }

    #[test]
    fn test_find_in_text_case_sensitive() {
        let text = "<DIV>div</DIV>";
        assert_eq!(find_in_text(text, "div", 0, true), Some((5, 3)));
        assert_eq!(find_in_text(text, "span", 0, true), None);
    }

    #[test]
    fn test_find_in_text_empty_or_out_of_range() {
        assert_eq!(find_in_text("abc", "", 0, true), None);
        assert_eq!(find_in_text("abc", "a", 3, true), None);
    }

    #[test]
    fn test_find_offsets_survive_length_changing_folds() {
        // Lowercasing 'İ' (U+0130, 2 bytes) yields "i\u{307}" (3 bytes), so
        // offsets must come from the original text, not a lowercased copy.
        let text = "A\u{130}B";
        assert_eq!(find_in_text(text, "b", 0, false), Some((3, 1)));
        // The expanded needle matches the single original char.
        assert_eq!(find_in_text(text, "i\u{307}", 0, false), Some((1, 2)));
        // A bare "i" covers only part of the expansion: no whole-char match.
        assert_eq!(find_in_text("\u{130}", "i", 0, false), None);
    }

    #[test]
    fn test_replace_all() {
        let (out, n) = replace_all_in_text("<b>x</b><b>y</b>", "<b>", "<i>", true);
        assert_eq!(out, "<i>x</b><i>y</b>");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_replace_all_case_insensitive() {
        let (out, n) = replace_all_in_text("<DIV></div>", "div", "span", false);
        assert_eq!(out, "<span></span>");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_replace_all_case_insensitive_non_ascii() {
        // Used to slice past the end of the buffer when the lowercased
        // haystack was longer than the original.
        let (out, n) = replace_all_in_text("A\u{130}B", "b", "x", false);
        assert_eq!(out, "A\u{130}x");
        assert_eq!(n, 1);

        let (out, n) = replace_all_in_text("caf\u{e9} CAF\u{c9}", "caf\u{e9}", "tea", false);
        assert_eq!(out, "tea tea");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_replace_all_no_match_or_empty_needle() {
        let (out, n) = replace_all_in_text("abc", "z", "q", true);
        assert_eq!(out, "abc");
        assert_eq!(n, 0);

        let (out, n) = replace_all_in_text("abc", "", "q", true);
        assert_eq!(out, "abc");
        assert_eq!(n, 0);
    }
}
