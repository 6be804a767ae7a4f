use std::ffi::{OsStr, OsString};

/// Literal token replaced with the project's display name in every file.
pub const PLACEHOLDER: &str = "{{SDK_NAME}}";

/// Template file name that is written out as [`DOTFILE`].
pub const DOTFILE_TEMPLATE: &str = "gitignore.template";

pub const DOTFILE: &str = ".gitignore";

/// Map a template file name to its name in the generated project.
///
/// Only [`DOTFILE_TEMPLATE`] is renamed; everything else passes through.
pub fn rename_entry(file_name: &OsStr) -> OsString {
    if file_name == DOTFILE_TEMPLATE {
        OsString::from(DOTFILE)
    } else {
        file_name.to_os_string()
    }
}

/// Replace every occurrence of [`PLACEHOLDER`] in `content` with `value`.
///
/// Works on raw bytes, so the result for UTF-8 text is the same as a string
/// replace and other content is never rejected. Returns the new content and
/// the number of replacements made.
pub fn substitute_placeholder(content: &[u8], value: &str) -> (Vec<u8>, usize) {
    let token = PLACEHOLDER.as_bytes();
    let mut out = Vec::with_capacity(content.len());
    let mut count = 0;
    let mut rest = content;

    while let Some(pos) = find(rest, token) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(value.as_bytes());
        rest = &rest[pos + token.len()..];
        count += 1;
    }
    out.extend_from_slice(rest);

    (out, count)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Detect binary content using content_inspector (BOM-aware, null-byte scanning).
///
/// Only the first 8KB are inspected.
pub fn looks_binary(content: &[u8]) -> bool {
    let head = &content[..content.len().min(8192)];
    !content_inspector::inspect(head).is_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello {{SDK_NAME}}!", "foo-sdk", "Hello foo-sdk!", 1)]
    #[case("{{SDK_NAME}}{{SDK_NAME}}", "x", "xx", 2)]
    #[case("no token here", "x", "no token here", 0)]
    #[case("{{SDK_NAME}", "x", "{{SDK_NAME}", 0)]
    #[case("", "x", "", 0)]
    #[case("\"name\": \"{{SDK_NAME}}\"", "@acme/pay", "\"name\": \"@acme/pay\"", 1)]
    fn substitutes_every_literal_occurrence(
        #[case] input: &str,
        #[case] value: &str,
        #[case] expected: &str,
        #[case] expected_count: usize,
    ) {
        let (out, count) = substitute_placeholder(input.as_bytes(), value);
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(count, expected_count);
    }

    #[test]
    fn substitution_leaves_non_utf8_bytes_intact() {
        let mut input = vec![0xff, 0x00, 0xfe];
        input.extend_from_slice(PLACEHOLDER.as_bytes());
        input.push(0x80);

        let (out, count) = substitute_placeholder(&input, "ab");

        assert_eq!(out, vec![0xff, 0x00, 0xfe, b'a', b'b', 0x80]);
        assert_eq!(count, 1);
    }

    #[test]
    fn value_containing_token_is_not_rescanned() {
        let (out, count) = substitute_placeholder(b"{{SDK_NAME}}", PLACEHOLDER);
        assert_eq!(out, PLACEHOLDER.as_bytes());
        assert_eq!(count, 1);
    }

    #[rstest]
    #[case("gitignore.template", ".gitignore")]
    #[case("gitignore", "gitignore")]
    #[case("npmignore.template", "npmignore.template")]
    #[case("README.md", "README.md")]
    fn only_the_gitignore_template_is_renamed(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rename_entry(OsStr::new(input)), OsString::from(expected));
    }

    #[rstest]
    #[case(b"Hello, world!", false)]
    #[case(&(0..256).map(|i| i as u8).collect::<Vec<u8>>(), true)]
    fn test_looks_binary(#[case] content: &[u8], #[case] expected_binary: bool) {
        assert_eq!(looks_binary(content), expected_binary);
    }
}
