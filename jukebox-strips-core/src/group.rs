use std::collections::BTreeMap;

use crate::{
    csv,
    strip::{Decade, SongRecord, TitleStrip},
};

/// Title strips grouped by the label of their decade.
///
/// Labels iterate in plain string order, so `"Unknown"` comes after every numeric
/// decade and `"2000s"` comes before `"990s"`. Strips within a decade keep the order
/// they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecadeBuckets {
    buckets: BTreeMap<String, Vec<TitleStrip>>,
    rows_read: usize,
    rows_skipped: usize,
}
impl DecadeBuckets {
    /// Creates an empty set of buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups every usable row of a CSV file, skipping the header.
    ///
    /// `on_strip` is called once per accepted row, in file order.
    pub fn from_csv(contents: &str, mut on_strip: impl FnMut(&Decade, &TitleStrip)) -> Self {
        let mut buckets = Self::new();
        for (index, line) in csv::data_lines(contents).enumerate() {
            buckets.rows_read += 1;

            let fields = csv::parse_line(line);
            let Some(record) = SongRecord::from_fields(&fields) else {
                // Header is line 1.
                tracing::debug!(
                    "skipping line {} ({} fields): {line:?}",
                    index + 2,
                    fields.len()
                );
                buckets.rows_skipped += 1;
                continue;
            };

            let decade = record.decade();
            let strip = TitleStrip::new(&record);
            on_strip(&decade, &strip);
            buckets.insert(decade, strip);
        }

        tracing::info!(
            "grouped {} strips into {} decades ({} of {} rows skipped)",
            buckets.strip_count(),
            buckets.len(),
            buckets.rows_skipped,
            buckets.rows_read
        );
        buckets
    }

    /// Appends `strip` to the bucket for `decade`, creating the bucket if needed.
    pub fn insert(&mut self, decade: Decade, strip: TitleStrip) {
        self.buckets.entry(decade.label()).or_default().push(strip);
    }

    /// The strips for the decade labelled `label`.
    pub fn get(&self, label: &str) -> Option<&[TitleStrip]> {
        self.buckets.get(label).map(Vec::as_slice)
    }

    /// Iterates over `(label, strips)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TitleStrip])> {
        self.buckets
            .iter()
            .map(|(label, strips)| (label.as_str(), strips.as_slice()))
    }

    /// The number of decades.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether there are no strips at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The number of strips across all decades.
    pub fn strip_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// The number of data rows read by [`Self::from_csv`].
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// The number of data rows [`Self::from_csv`] could not use.
    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Id,Artist,Title,Album,Genre,Length,Year
1,Queen,Bohemian Rhapsody,A Night at the Opera,Rock,5:55,1975
2,\"Earth, Wind & Fire\",September,,Funk,3:35,1978
3,Nirvana,Smells Like Teen Spirit,Nevermind,Grunge,5:01,1991
4,Short,Row,Only,Five
5,,No Artist,Album,Pop,3:00,1980
6,Mystery,No Year,,Pop,3:00,
7,Queen,Under Pressure,Hot Space,Rock,4:08,1981
";

    #[test]
    fn test_from_csv_groups_by_decade() {
        let buckets = DecadeBuckets::from_csv(CSV, |_, _| {});

        assert_eq!(
            buckets.iter().map(|(label, _)| label).collect::<Vec<_>>(),
            vec!["1970s", "1980s", "1990s", "Unknown"]
        );
        assert_eq!(buckets.strip_count(), 5);
        assert_eq!(buckets.rows_read(), 7);
        assert_eq!(buckets.rows_skipped(), 2);

        let seventies = buckets.get("1970s").unwrap();
        assert_eq!(
            seventies[0].text(),
            "Bohemian Rhapsody\nQueen  1975\nA Night at the Opera\n"
        );
        assert_eq!(seventies[1].text(), "September\nEarth, Wind & Fire  1978\n");
        assert_eq!(
            buckets.get("Unknown").unwrap()[0].text(),
            "No Year\nMystery  \n"
        );
    }

    #[test]
    fn test_from_csv_reports_rows_in_order() {
        let mut seen = vec![];
        DecadeBuckets::from_csv(CSV, |decade, strip| {
            seen.push(format!("{decade}: {}", strip.lines().next().unwrap()));
        });
        assert_eq!(
            seen,
            vec![
                "1970s: Bohemian Rhapsody",
                "1970s: September",
                "1990s: Smells Like Teen Spirit",
                "Unknown: No Year",
                "1980s: Under Pressure",
            ]
        );
    }

    #[test]
    fn test_from_csv_is_repeatable() {
        assert_eq!(
            DecadeBuckets::from_csv(CSV, |_, _| {}),
            DecadeBuckets::from_csv(CSV, |_, _| {})
        );
    }

    #[test]
    fn test_from_csv_carriage_return_line_endings() {
        let csv = "Id,Artist,Title,Album,Genre,Length,Year\r\
                   1,Queen,Bohemian Rhapsody,Opera,Rock,5:55,1975\r\
                   2,TLC,No Scrubs,FanMail,R&B,3:34,1999\r";
        let buckets = DecadeBuckets::from_csv(csv, |_, _| {});

        assert_eq!(buckets.strip_count(), 2);
        assert_eq!(buckets.rows_read(), 2);
        assert_eq!(
            buckets.get("1990s").unwrap()[0].text(),
            "No Scrubs\nTLC  1999\nFanMail\n"
        );
    }

    #[test]
    fn test_from_csv_header_only() {
        let buckets =
            DecadeBuckets::from_csv("Id,Artist,Title,Album,Genre,Length,Year\n", |_, _| {});
        assert!(buckets.is_empty());
        assert_eq!(buckets.rows_read(), 0);
        assert!(DecadeBuckets::from_csv("", |_, _| {}).is_empty());
    }

    #[test]
    fn test_two_decades_one_strip_each() {
        let csv = "h\n1,A,One,,x,x,1985\n2,B,Two,,x,x,1999\n";
        let buckets = DecadeBuckets::from_csv(csv, |_, _| {});
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.get("1980s").map(<[_]>::len), Some(1));
        assert_eq!(buckets.get("1990s").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_labels_sort_as_strings() {
        let mut buckets = DecadeBuckets::new();
        let strip = TitleStrip::new(&SongRecord {
            artist: "a".into(),
            title: "t".into(),
            album: String::new(),
            year: String::new(),
        });
        for decade in [
            Decade::Unknown,
            Decade::Known(1990),
            Decade::Known(2000),
            Decade::Known(990),
        ] {
            buckets.insert(decade, strip.clone());
        }
        assert_eq!(
            buckets.iter().map(|(label, _)| label).collect::<Vec<_>>(),
            vec!["1990s", "2000s", "990s", "Unknown"]
        );
    }
}
