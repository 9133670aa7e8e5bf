//! Filename sanitization for note and folder names.

/// Characters that may not appear in a vault path segment.
const RESERVED: &[char] = &[
    '`', '~', '|', '!', '@', '#', '$', '%', '^', '&', '*', '=', '?', ';', ':', '\'', '"', '<',
    '>', '{', '}', '[', ']', '\\', '/',
];

/// Replace every filesystem-unsafe character in a title with `_`.
///
/// Applied to every title used as a path segment or filename stem.
/// Titles used as tag or heading text are left untouched.
pub fn sanitize(title: &str) -> String {
    title
        .chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_path_separators_and_colons() {
        assert_eq!(sanitize("A/B:C"), "A_B_C");
    }

    #[test]
    fn replaces_every_reserved_character() {
        let input = "`~|!@#$%^&*=?;:'\"<>{}[]\\/";
        let expected = "_".repeat(input.chars().count());
        assert_eq!(sanitize(input), expected);
    }

    #[test]
    fn keeps_safe_characters() {
        assert_eq!(sanitize("Notes (draft) - v2.1"), "Notes (draft) - v2.1");
    }

    #[test]
    fn is_idempotent() {
        let once = sanitize("a/b<c>d");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn handles_empty_and_unicode_titles() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("ノート 📚"), "ノート 📚");
    }
}
