//! Markdown FAQ parsing: front-matter extraction and level-2 section splitting.

use super::metadata::Metadata;

const FRONT_MATTER_DELIMITER: &str = "---";
const SECTION_MARKER: &str = "## ";

/// One `## ` section of a document body, trimmed but not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// Split a document into its front-matter metadata and body text.
///
/// Front-matter is a `---` line at the very start of the document, followed by
/// `key: value` lines, closed by another `---` line. Without an opening
/// delimiter, or without a closing one, the whole text is body and the
/// metadata is empty.
pub fn split_front_matter(content: &str) -> (Metadata, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some((first_line, mut rest)) = content.split_once('\n') else {
        return (Metadata::new(), content);
    };
    if first_line.trim_end() != FRONT_MATTER_DELIMITER {
        return (Metadata::new(), content);
    }

    let matter_start = rest;
    let mut matter_len = 0;
    loop {
        let (line, next) = match rest.split_once('\n') {
            Some((line, next)) => (line, Some(next)),
            None => (rest, None),
        };

        if line.trim_end() == FRONT_MATTER_DELIMITER {
            let metadata = parse_key_values(&matter_start[..matter_len]);
            return (metadata, next.unwrap_or(""));
        }

        match next {
            Some(next) => {
                matter_len += line.len() + 1;
                rest = next;
            }
            None => return (Metadata::new(), content),
        }
    }
}

// Flat `key: value` subset of YAML. Nested or indented lines are ignored.
fn parse_key_values(block: &str) -> Metadata {
    let mut metadata = Metadata::new();

    for line in block.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        if line.starts_with(char::is_whitespace) || line.starts_with('-') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = value.trim();
        if let Some(quoted) = unquote(value) {
            metadata.insert_string(key, quoted);
        } else if is_null(value) {
            continue;
        } else if let Ok(n) = value.parse::<i64>() {
            metadata.insert_number(key, n);
        } else if let Some(flag) = parse_bool(value) {
            metadata.insert_bool(key, flag);
        } else {
            metadata.insert_string(key, value);
        }
    }

    metadata
}

// A null key carries no value at all.
fn is_null(value: &str) -> bool {
    matches!(value, "null" | "Null" | "NULL" | "~")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn unquote(value: &str) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
}

/// Split a body into `## ` sections.
///
/// Every line beginning with `"## "` starts a new segment, and so does the
/// start of the body. A segment's heading is its first line (the text after
/// the marker, or the first line of any text before the first marker) and its
/// body is the remaining lines. Blank segments are dropped.
pub fn split_sections(body: &str) -> Vec<Section> {
    let mut segments: Vec<Vec<&str>> = vec![Vec::new()];

    for line in body.split('\n') {
        if let Some(heading) = line.strip_prefix(SECTION_MARKER) {
            segments.push(vec![heading]);
        } else if let Some(segment) = segments.last_mut() {
            segment.push(line);
        }
    }

    segments
        .into_iter()
        .filter(|lines| lines.iter().any(|line| !line.trim().is_empty()))
        .filter_map(|lines| {
            let (heading, rest) = lines.split_first()?;
            Some(finish_section(heading, rest))
        })
        .collect()
}

fn finish_section(heading: &str, lines: &[&str]) -> Section {
    Section {
        heading: heading.trim().to_string(),
        body: lines.join("\n").trim().to_string(),
    }
}
