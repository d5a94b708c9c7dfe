/// The maximum number of characters kept from a composed strip before it is cut.
pub const MAX_STRIP_CHARS: usize = 100;

/// Appended to a strip that was cut at [`MAX_STRIP_CHARS`].
pub const ELLIPSIS: char = '…';

/// The minimum number of fields a row needs to be considered.
pub const MIN_FIELDS: usize = 7;

const ARTIST_FIELD: usize = 1;
const TITLE_FIELD: usize = 2;
const ALBUM_FIELD: usize = 3;
const YEAR_FIELD: usize = 6;

/// A song, as a title strip cares about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    /// The song artist
    pub artist: String,
    /// The song title
    pub title: String,
    /// The album; may be empty
    pub album: String,
    /// The release year, as written in the source; may be empty or non-numeric
    pub year: String,
}
impl SongRecord {
    /// Extracts a record from the fields of a CSV row.
    ///
    /// Returns `None` for rows with fewer than [`MIN_FIELDS`] fields, or whose artist
    /// or title is empty once trimmed.
    pub fn from_fields(fields: &[String]) -> Option<Self> {
        if fields.len() < MIN_FIELDS {
            return None;
        }

        let field = |index: usize| fields[index].trim().to_string();
        let record = SongRecord {
            artist: field(ARTIST_FIELD),
            title: field(TITLE_FIELD),
            album: field(ALBUM_FIELD),
            year: field(YEAR_FIELD),
        };

        if record.artist.is_empty() || record.title.is_empty() {
            return None;
        }
        Some(record)
    }

    /// The decade this record belongs to.
    pub fn decade(&self) -> Decade {
        Decade::from_year(&self.year)
    }
}

/// The text printed onto a single jukebox label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleStrip(String);
impl TitleStrip {
    /// Composes and truncates the strip for `record`.
    pub fn new(record: &SongRecord) -> Self {
        Self(truncate(&compose(record), MAX_STRIP_CHARS))
    }

    /// The strip's text, including its line breaks.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// The strip's text split into lines, without the trailing empty line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}
impl std::fmt::Display for TitleStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds the untruncated strip text: the title, then the artist and year separated by
/// two spaces, then the album if there is one. Every line ends with `\n`.
pub fn compose(record: &SongRecord) -> String {
    let SongRecord {
        artist,
        title,
        album,
        year,
    } = record;

    let mut text = format!("{title}\n{artist}  {year}\n");
    if !album.is_empty() {
        text.push_str(album);
        text.push('\n');
    }
    text
}

/// Keeps the first `max_chars` characters of `text`, appending [`ELLIPSIS`] if anything
/// was cut. Characters are Unicode scalar values.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut truncated = text[..cut].to_string();
            truncated.push(ELLIPSIS);
            truncated
        }
        None => text.to_string(),
    }
}

/// The decade a song was released in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decade {
    /// A decade, identified by its first year (e.g. `1990`).
    Known(i32),
    /// The year was missing or not a number.
    Unknown,
}
impl Decade {
    /// Parses `year` as an integer and rounds it toward zero to a multiple of ten.
    pub fn from_year(year: &str) -> Self {
        match year.trim().parse::<i32>() {
            Ok(year) => Decade::Known((year / 10) * 10),
            Err(_) => Decade::Unknown,
        }
    }

    /// The label used to key and sort decade buckets (e.g. `"1990s"` or `"Unknown"`).
    pub fn label(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for Decade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decade::Known(start) => write!(f, "{start}s"),
            Decade::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_row(fields: &[&str]) -> Option<SongRecord> {
        let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        SongRecord::from_fields(&fields)
    }

    fn record(artist: &str, title: &str, album: &str, year: &str) -> SongRecord {
        SongRecord {
            artist: artist.to_string(),
            title: title.to_string(),
            album: album.to_string(),
            year: year.to_string(),
        }
    }

    fn opera() -> SongRecord {
        record("Queen", "Bohemian Rhapsody", "A Night at the Opera", "1975")
    }

    #[test]
    fn test_from_fields_extracts_and_trims() {
        let fields = [
            "1",
            " Queen ",
            "Bohemian Rhapsody ",
            " A Night at the Opera",
            "x",
            "y",
            " 1975 ",
        ];
        assert_eq!(from_row(&fields), Some(opera()));
    }

    #[test]
    fn test_from_fields_rejects_short_rows() {
        assert_eq!(from_row(&["1", "a", "t", "al", "x"]), None);
        assert_eq!(from_row(&["1", "a", "t", "al", "x", "y"]), None);
        assert!(from_row(&["1", "a", "t", "", "", "", ""]).is_some());
    }

    #[test]
    fn test_from_fields_rejects_blank_artist_or_title() {
        assert_eq!(from_row(&["1", "  ", "t", "", "", "", "1990"]), None);
        assert_eq!(from_row(&["1", "a", "", "", "", "", "1990"]), None);
    }

    #[test]
    fn test_compose() {
        assert_eq!(
            compose(&opera()),
            "Bohemian Rhapsody\nQueen  1975\nA Night at the Opera\n"
        );
        // No album line at all when the album is empty.
        assert_eq!(
            compose(&record("Queen", "Innuendo", "", "")),
            "Innuendo\nQueen  \n"
        );
    }

    #[test]
    fn test_truncate() {
        let short = "a".repeat(MAX_STRIP_CHARS);
        assert_eq!(truncate(&short, MAX_STRIP_CHARS), short);

        let long = "b".repeat(MAX_STRIP_CHARS + 25);
        let truncated = truncate(&long, MAX_STRIP_CHARS);
        assert_eq!(truncated.chars().count(), MAX_STRIP_CHARS + 1);
        assert!(truncated.starts_with(&"b".repeat(MAX_STRIP_CHARS)));
        assert!(truncated.ends_with(ELLIPSIS));

        // Multi-byte characters are counted as one each.
        let accented = "é".repeat(MAX_STRIP_CHARS + 1);
        assert_eq!(
            truncate(&accented, MAX_STRIP_CHARS),
            format!("{}{ELLIPSIS}", "é".repeat(MAX_STRIP_CHARS))
        );
    }

    #[test]
    fn test_title_strip_truncates() {
        let strip = TitleStrip::new(&record("Artist", &"t".repeat(120), "Album", "2001"));
        assert_eq!(strip.text().chars().count(), MAX_STRIP_CHARS + 1);
        assert_eq!(strip.lines().count(), 1);

        let strip = TitleStrip::new(&opera());
        assert_eq!(
            strip.lines().collect::<Vec<_>>(),
            vec!["Bohemian Rhapsody", "Queen  1975", "A Night at the Opera"]
        );
    }

    #[test]
    fn test_decade_from_year() {
        assert_eq!(Decade::from_year("1975"), Decade::Known(1970));
        assert_eq!(Decade::from_year("1990"), Decade::Known(1990));
        assert_eq!(Decade::from_year("1999"), Decade::Known(1990));
        assert_eq!(Decade::from_year("+2004"), Decade::Known(2000));
        assert_eq!(Decade::from_year("-5"), Decade::Known(0));
        assert_eq!(Decade::from_year("-15"), Decade::Known(-10));
        assert_eq!(Decade::from_year(""), Decade::Unknown);
        assert_eq!(Decade::from_year("1975-06-01"), Decade::Unknown);
        assert_eq!(Decade::from_year("nineteen"), Decade::Unknown);
        assert_eq!(Decade::from_year("99999999999"), Decade::Unknown);
    }

    #[test]
    fn test_decade_label() {
        assert_eq!(Decade::Known(1980).label(), "1980s");
        assert_eq!(Decade::Known(0).label(), "0s");
        assert_eq!(Decade::Unknown.label(), "Unknown");
        assert_eq!(
            Decade::from_year("1985").label(),
            Decade::from_year("1981").label()
        );
    }
}
