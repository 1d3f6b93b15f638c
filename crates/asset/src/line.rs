//! Line tokenizer shared by the OBJ and MTL parsers.
//!
//! Wavefront files are one directive per line: a leading keyword followed by
//! whitespace-separated arguments. Handlers get both the split tokens and the
//! verbatim remainder of the line, because some directives (`newmtl`) take a
//! name that may contain spaces.

/// One meaningful line: comments and blank lines never reach this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Record<'a> {
    /// 1-based source line number, for diagnostics.
    pub line_no: usize,
    /// Leading run of word characters. May be empty for garbage lines; the
    /// dispatch default arm treats that like any other unknown keyword.
    pub keyword: &'a str,
    /// Whitespace-split tokens after the keyword.
    pub args: Vec<&'a str>,
    /// Verbatim remainder after the keyword, leading spaces stripped.
    pub rest: &'a str,
}

/// Iterate the non-empty, non-comment records of `text` in source order.
pub(crate) fn records(text: &str) -> impl Iterator<Item = Record<'_>> {
    text.lines().enumerate().filter_map(|(i, raw)| {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let keyword_end = line
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(line.len());
        let keyword = &line[..keyword_end];
        let rest = line[keyword_end..].trim_start_matches(' ');
        let args = line.split_whitespace().skip(1).collect();

        Some(Record {
            line_no: i + 1,
            keyword,
            args,
            rest,
        })
    })
}
