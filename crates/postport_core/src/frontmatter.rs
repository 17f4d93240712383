use thiserror::Error;

const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("malformed document: expected two `---` delimiter lines, found {delimiters}")]
    MalformedDocument { delimiters: usize },
}

/// Header fields recognized in a source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// Split a document into its raw header region and body.
///
/// The header is the text strictly between the first and the last `---`
/// line. The body starts right after the newline ending the last delimiter.
pub fn split_document(text: &str) -> Result<(&str, &str), FrontMatterError> {
    let mut first: Option<(usize, usize)> = None;
    let mut last: Option<(usize, usize)> = None;
    let mut delimiters = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if line.trim() == DELIMITER {
            delimiters += 1;
            if first.is_none() {
                first = Some((start, offset));
            }
            last = Some((start, offset));
        }
    }

    match (first, last) {
        (Some((_, header_start)), Some((header_end, body_start))) if delimiters >= 2 => {
            Ok((&text[header_start..header_end], &text[body_start..]))
        }
        _ => Err(FrontMatterError::MalformedDocument { delimiters }),
    }
}

/// Parse the recognized `title`, `date` and `tags` fields from a header region.
///
/// Unknown lines are ignored; a repeated field keeps its last value.
pub fn parse_header(header: &str) -> FrontMatter {
    let mut fm = FrontMatter::default();
    for line in header.lines() {
        let line = line.trim();
        if let Some(value) = field_value(line, "title") {
            fm.title = value.to_string();
        } else if let Some(value) = field_value(line, "date") {
            fm.date = value.to_string();
        } else if let Some(value) = field_value(line, "tags") {
            fm.tags = split_tags(value);
        }
    }
    fm
}

fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let marker = format!("{field}: ");
    line.find(&marker).map(|pos| &line[pos + marker.len()..])
}

fn split_tags(value: &str) -> Vec<String> {
    let value = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    if value.is_empty() {
        return Vec::new();
    }
    value.split(", ").map(str::to_string).collect()
}
