//! A deliberately small CSV reader: quote-aware splitting of a single line, and
//! iteration over the data lines of a file.

/// Splits a single line into fields on `,`.
///
/// A `"` toggles whether commas are treated as separators and is never copied into
/// the field. There is no escaping of literal quotes, and an unterminated quote
/// simply leaves the remainder of the line in the current field.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// Splits `contents` into lines ending in `\r\n`, `\r` or `\n`.
///
/// A terminator at the very end does not start another line.
pub fn lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Returns every line of `contents` after the header line.
pub fn data_lines(contents: &str) -> impl Iterator<Item = &str> {
    lines(contents).skip(1)
}

/// Whether `contents` has at least one line beyond the header.
pub fn has_data_lines(contents: &str) -> bool {
    data_lines(contents).next().is_some()
}
