use bytes::Bytes;

/// Path components parsed from an archive entry's full name.
///
/// An entry name like `a/b/c.txt` splits into the directory prefix
/// (`a/b/`, always with a trailing slash), the base name (`c`) and the
/// extension (`txt`, without the dot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    /// Directory prefix ending in `/`. A root-level entry yields `/`.
    pub path: String,
    /// Base name without the final extension.
    pub file_name: String,
    /// Final extension without the dot; empty if the name has no dot.
    pub file_type: String,
}

impl ParsedPath {
    /// Parse an entry name into its path components.
    ///
    /// Splits on both `/` and `\` separators. The last segment splits at
    /// its last dot, so `archive.tar.gz` keeps `archive.tar` as the base
    /// name and `gz` as the extension. A segment with no dot yields an
    /// empty extension.
    pub fn parse(entry_name: &str) -> Self {
        let mut parts: Vec<&str> = entry_name.split(['/', '\\']).collect();
        let last = parts.pop().unwrap_or_default();

        let (file_name, file_type) = match last.rsplit_once('.') {
            Some((name, ext)) => (name, ext),
            None => (last, ""),
        };

        let mut path = parts.join("/");
        path.push('/');

        Self {
            path,
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
        }
    }
}

/// One extracted archive entry: parsed path components plus its content
/// decoded to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub path: String,
    pub file_name: String,
    pub file_type: String,
    pub content: String,
}

impl ExtractedFile {
    /// Pair parsed path components with decoded entry content.
    pub fn new(parsed: ParsedPath, content: String) -> Self {
        Self {
            path: parsed.path,
            file_name: parsed.file_name,
            file_type: parsed.file_type,
            content,
        }
    }

    /// File name as written to the destination directory.
    pub fn disk_name(&self) -> String {
        format!("{}.{}", self.file_name, self.file_type)
    }
}

/// Decode entry bytes as UTF-8 text, replacing invalid sequences.
pub(crate) fn decode_text(data: Bytes) -> String {
    String::from_utf8_lossy(&data).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_path() {
        let parsed = ParsedPath::parse("a/b/c.txt");
        assert_eq!(parsed.path, "a/b/");
        assert_eq!(parsed.file_name, "c");
        assert_eq!(parsed.file_type, "txt");
    }

    #[test]
    fn parse_root_entry() {
        let parsed = ParsedPath::parse("root.txt");
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.file_name, "root");
        assert_eq!(parsed.file_type, "txt");
    }

    #[test]
    fn parse_backslash_separators() {
        let parsed = ParsedPath::parse("dir\\sub\\file.json");
        assert_eq!(parsed.path, "dir/sub/");
        assert_eq!(parsed.file_name, "file");
        assert_eq!(parsed.file_type, "json");
    }

    #[test]
    fn parse_multi_dot_name_splits_at_last_dot() {
        let parsed = ParsedPath::parse("pkg/archive.tar.gz");
        assert_eq!(parsed.file_name, "archive.tar");
        assert_eq!(parsed.file_type, "gz");
    }

    #[test]
    fn parse_name_without_extension() {
        let parsed = ParsedPath::parse("docs/README");
        assert_eq!(parsed.path, "docs/");
        assert_eq!(parsed.file_name, "README");
        assert_eq!(parsed.file_type, "");
    }

    #[test]
    fn parse_dotfile_keeps_suffix_as_type() {
        let parsed = ParsedPath::parse(".gitignore");
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.file_name, "");
        assert_eq!(parsed.file_type, "gitignore");
    }

    #[test]
    fn decode_replaces_invalid_utf8() {
        let decoded = decode_text(Bytes::from_static(b"ok\xff"));
        assert_eq!(decoded, "ok\u{fffd}");
    }
}
