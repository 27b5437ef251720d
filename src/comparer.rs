//! Per-approach line orderings
//!
//! Every comparer answers a three-way question about two lines in ascending
//! order. Direction and error latching are applied by the caller.

use crate::address::{parse_address, parse_cidr};
use crate::config::PathFlavor;
use crate::error::{SortError, SortResult};
use crate::locale::LocaleComparer;
use crate::path_semantics::{is_absolute, is_drive_letter, split_segments};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::cmp::Ordering;
use tracing::trace;

/// A line together with its 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }
}

/// Ascending three-way comparison of two lines under one interpretation
pub trait Comparer {
    fn compare(&self, a: LineRef<'_>, b: LineRef<'_>) -> SortResult<Ordering>;
}

/// Whole lines as text
#[derive(Debug)]
pub struct TextComparer {
    text: LocaleComparer,
}

impl TextComparer {
    pub fn new(text: LocaleComparer) -> Self {
        Self { text }
    }
}

impl Comparer for TextComparer {
    fn compare(&self, a: LineRef<'_>, b: LineRef<'_>) -> SortResult<Ordering> {
        Ok(self.text.cmp(a.text, b.text))
    }
}

/// A line split into an optional leading number and the remaining text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberedText<'a> {
    HasPrefix { number: &'a str, rest: &'a str },
    NoPrefix(&'a str),
}

impl<'a> NumberedText<'a> {
    /// Split off a leading `digits[.digits]` run
    pub fn split(line: &'a str) -> Self {
        let bytes = line.as_bytes();
        let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if int_len == 0 {
            return NumberedText::NoPrefix(line);
        }

        let mut end = int_len;
        if bytes.get(int_len) == Some(&b'.') {
            let frac_len = bytes[int_len + 1..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if frac_len > 0 {
                end = int_len + 1 + frac_len;
            }
        }

        NumberedText::HasPrefix {
            number: &line[..end],
            rest: &line[end..],
        }
    }
}

/// Lines with a numeric prefix first, by value, then by remaining text
#[derive(Debug)]
pub struct NumberedTextComparer {
    text: LocaleComparer,
}

impl NumberedTextComparer {
    pub fn new(text: LocaleComparer) -> Self {
        Self { text }
    }

    fn parse_number(number: &str, line: usize) -> SortResult<f64> {
        number
            .parse::<f64>()
            .map_err(|_| SortError::numeric_prefix(number, line))
    }
}

impl Comparer for NumberedTextComparer {
    fn compare(&self, a: LineRef<'_>, b: LineRef<'_>) -> SortResult<Ordering> {
        let (rest_a, rest_b) = match (NumberedText::split(a.text), NumberedText::split(b.text)) {
            (
                NumberedText::HasPrefix {
                    number: num_a,
                    rest: rest_a,
                },
                NumberedText::HasPrefix {
                    number: num_b,
                    rest: rest_b,
                },
            ) => {
                let value_a = Self::parse_number(num_a, a.number)?;
                let value_b = Self::parse_number(num_b, b.number)?;
                if value_a != value_b {
                    trace!(num_a, num_b, "numbered-text decided by number");
                    return Ok(value_a.total_cmp(&value_b));
                }
                (rest_a, rest_b)
            }
            (NumberedText::HasPrefix { .. }, NumberedText::NoPrefix(_)) => {
                trace!("numbered-text: only the left side has a number");
                return Ok(Ordering::Less);
            }
            (NumberedText::NoPrefix(_), NumberedText::HasPrefix { .. }) => {
                trace!("numbered-text: only the right side has a number");
                return Ok(Ordering::Greater);
            }
            (NumberedText::NoPrefix(rest_a), NumberedText::NoPrefix(rest_b)) => (rest_a, rest_b),
        };

        Ok(self.text.cmp(rest_a, rest_b))
    }
}

/// Leading whitespace-free token starting with a digit, at least two chars long
pub fn datetime_token(line: &str) -> Option<&str> {
    if !line.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    (end >= 2).then(|| &line[..end])
}

/// Offset-bearing shapes `dateparser` does not cover, such as `+hhmm`
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M%z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%dT%H:%M:%S",
    "%Y/%m/%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Parse a date or datetime token
///
/// Values without an offset are UTC and dates without a time are midnight.
/// `M/D/Y` style tokens are rejected because month and day cannot be told apart.
pub fn parse_datetime(token: &str) -> Result<DateTime<Utc>, String> {
    if is_month_day_ambiguous(token) {
        return Err("ambiguous month and day order".to_string());
    }

    if token.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(dt) = parse_digits(token) {
            return Ok(dt);
        }
    }

    match dateparser::parse_with(token, &Utc, NaiveTime::MIN) {
        Ok(dt) => Ok(dt),
        Err(err) => parse_with_formats(token).ok_or_else(|| err.to_string()),
    }
}

/// Two short numbers before the year, separated by `/` or `.`
fn is_month_day_ambiguous(token: &str) -> bool {
    let short_number = |part: Option<&str>| {
        part.is_some_and(|p| (1..=2).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit()))
    };
    let mut parts = token.split(['/', '.']);
    short_number(parts.next()) && short_number(parts.next()) && parts.next().is_some()
}

/// `YYYYMMDD` or Unix epoch seconds
fn parse_digits(token: &str) -> Option<DateTime<Utc>> {
    match token.len() {
        8 => NaiveDate::parse_from_str(token, "%Y%m%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN).and_utc()),
        10 => token
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        _ => None,
    }
}

fn parse_with_formats(token: &str) -> Option<DateTime<Utc>> {
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(token, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(token, format) {
            return Some(dt.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    // Year and month only
    if token.len() == 7 && token.as_bytes()[4] == b'-' {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d") {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    None
}

/// Lines with a leading datetime first, chronologically, then by whole line
#[derive(Debug)]
pub struct DatetimeTextComparer {
    text: LocaleComparer,
}

impl DatetimeTextComparer {
    pub fn new(text: LocaleComparer) -> Self {
        Self { text }
    }

    fn parse(token: &str, line: usize) -> SortResult<DateTime<Utc>> {
        parse_datetime(token).map_err(|message| SortError::datetime(token, line, message))
    }
}

impl Comparer for DatetimeTextComparer {
    fn compare(&self, a: LineRef<'_>, b: LineRef<'_>) -> SortResult<Ordering> {
        match (datetime_token(a.text), datetime_token(b.text)) {
            (Some(token_a), Some(token_b)) => {
                let dt_a = Self::parse(token_a, a.number)?;
                let dt_b = Self::parse(token_b, b.number)?;
                if dt_a != dt_b {
                    trace!(%dt_a, %dt_b, "datetime-text decided by instant");
                    return Ok(dt_a.cmp(&dt_b));
                }
            }
            (Some(_), None) => return Ok(Ordering::Less),
            (None, Some(_)) => return Ok(Ordering::Greater),
            (None, None) => {}
        }

        // Ties fall back to the entire line, not just the text after the date.
        Ok(self.text.cmp(a.text, b.text))
    }
}

/// Paths: absolute first, drive letters first (Windows), shallower first,
/// then segment by segment
#[derive(Debug)]
pub struct PathComparer {
    text: LocaleComparer,
    flavor: PathFlavor,
}

impl PathComparer {
    pub fn new(text: LocaleComparer, flavor: PathFlavor) -> Self {
        Self { text, flavor }
    }

    fn compare_drive_letters(first_a: Option<&str>, first_b: Option<&str>) -> Option<Ordering> {
        let drive_a = first_a.filter(|s| is_drive_letter(s));
        let drive_b = first_b.filter(|s| is_drive_letter(s));
        match (drive_a, drive_b) {
            (Some(_), None) => Some(Ordering::Less),
            (None, Some(_)) => Some(Ordering::Greater),
            (Some(a), Some(b)) => match a.as_bytes()[0].cmp(&b.as_bytes()[0]) {
                Ordering::Equal => None,
                ord => Some(ord),
            },
            (None, None) => None,
        }
    }
}

impl Comparer for PathComparer {
    fn compare(&self, a: LineRef<'_>, b: LineRef<'_>) -> SortResult<Ordering> {
        let abs_a = is_absolute(a.text, self.flavor);
        let abs_b = is_absolute(b.text, self.flavor);
        if abs_a != abs_b {
            trace!(abs_a, abs_b, "path decided by absoluteness");
            return Ok(if abs_a {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }

        let segments_a = split_segments(a.text, self.flavor);
        let segments_b = split_segments(b.text, self.flavor);

        if self.flavor == PathFlavor::Windows {
            if let Some(ord) = Self::compare_drive_letters(
                segments_a.first().map(|s| s.as_ref()),
                segments_b.first().map(|s| s.as_ref()),
            ) {
                trace!(?ord, "path decided by drive letter");
                return Ok(ord);
            }
        }

        if segments_a.len() != segments_b.len() {
            trace!(
                depth_a = segments_a.len(),
                depth_b = segments_b.len(),
                "path decided by depth"
            );
            return Ok(segments_a.len().cmp(&segments_b.len()));
        }

        for (seg_a, seg_b) in segments_a.iter().zip(&segments_b) {
            if seg_a == seg_b {
                continue;
            }
            let ord = self.text.cmp(seg_a, seg_b);
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }

        Ok(Ordering::Equal)
    }
}

/// Raw IP addresses: IPv4 before IPv6, then by bytes
#[derive(Debug, Default)]
pub struct IpComparer;

impl Comparer for IpComparer {
    fn compare(&self, a: LineRef<'_>, b: LineRef<'_>) -> SortResult<Ordering> {
        let addr_a =
            parse_address(a.text).ok_or_else(|| SortError::invalid_address(a.text, a.number))?;
        let addr_b =
            parse_address(b.text).ok_or_else(|| SortError::invalid_address(b.text, b.number))?;
        Ok(addr_a.cmp(&addr_b))
    }
}

/// CIDR networks: IPv4 before IPv6, then by address, then by prefix length
#[derive(Debug, Default)]
pub struct NetworkComparer;

impl Comparer for NetworkComparer {
    fn compare(&self, a: LineRef<'_>, b: LineRef<'_>) -> SortResult<Ordering> {
        let net_a = parse_cidr(a.text).ok_or_else(|| SortError::invalid_network(a.text, a.number))?;
        let net_b = parse_cidr(b.text).ok_or_else(|| SortError::invalid_network(b.text, b.number))?;
        Ok(net_a.cmp(&net_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocaleTag;

    fn sorted(comparer: &dyn Comparer, input: &[&str]) -> Vec<String> {
        let mut lines: Vec<(usize, &str)> = input.iter().copied().enumerate().collect();
        lines.sort_by(|(i, a), (j, b)| {
            comparer
                .compare(LineRef::new(i + 1, a), LineRef::new(j + 1, b))
                .expect("comparison failed")
        });
        lines.into_iter().map(|(_, l)| l.to_string()).collect()
    }

    fn ordinal() -> LocaleComparer {
        LocaleComparer::ordinal()
    }

    fn folded() -> LocaleComparer {
        LocaleComparer::new(&LocaleTag::Undetermined, true, false)
            .expect("Failed to build comparer")
    }

    fn locale(tag: &str) -> LocaleComparer {
        LocaleComparer::new(&LocaleTag::Tag(tag.to_string()), false, false)
            .expect("Failed to build comparer")
    }

    #[test]
    fn test_numbered_text_split() {
        assert_eq!(
            NumberedText::split("10 apple"),
            NumberedText::HasPrefix {
                number: "10",
                rest: " apple"
            }
        );
        assert_eq!(
            NumberedText::split("27.2314 - bar"),
            NumberedText::HasPrefix {
                number: "27.2314",
                rest: " - bar"
            }
        );
        assert_eq!(
            NumberedText::split("5. And"),
            NumberedText::HasPrefix {
                number: "5",
                rest: ". And"
            }
        );
        assert_eq!(NumberedText::split("apple"), NumberedText::NoPrefix("apple"));
        assert_eq!(NumberedText::split(""), NumberedText::NoPrefix(""));
    }

    #[test]
    fn test_numbered_text_numeric_not_lexical() {
        let comparer = NumberedTextComparer::new(ordinal());
        assert_eq!(
            sorted(&comparer, &["10 apple", "2 banana"]),
            ["2 banana", "10 apple"]
        );
        assert_eq!(sorted(&comparer, &["apple", "1 foo"]), ["1 foo", "apple"]);
    }

    #[test]
    fn test_numbered_text_ties_use_rest() {
        let input = [
            "120001 go",
            "0. bears",
            "15 - above",
            "5. And",
            "1. all",
            "5. act",
            "2. home",
        ];
        let comparer = NumberedTextComparer::new(ordinal());
        assert_eq!(
            sorted(&comparer, &input),
            [
                "0. bears",
                "1. all",
                "2. home",
                "5. And",
                "5. act",
                "15 - above",
                "120001 go"
            ]
        );

        let comparer = NumberedTextComparer::new(folded());
        assert_eq!(
            sorted(&comparer, &input),
            [
                "0. bears",
                "1. all",
                "2. home",
                "5. act",
                "5. And",
                "15 - above",
                "120001 go"
            ]
        );
    }

    #[test]
    fn test_numbered_text_decimals_and_mixed() {
        let comparer = NumberedTextComparer::new(ordinal());
        assert_eq!(
            sorted(&comparer, &["10.1 - x", "27.2314 - bar", "1.00 - hello"]),
            ["1.00 - hello", "10.1 - x", "27.2314 - bar"]
        );
        assert_eq!(
            sorted(&comparer, &["10. x", "aloe", "27. bar", "love", "1. hello"]),
            ["1. hello", "10. x", "27. bar", "aloe", "love"]
        );
        // Equal values compare the text after the number.
        assert_eq!(
            comparer
                .compare(LineRef::new(1, "1.0 b"), LineRef::new(2, "1 a"))
                .expect("comparison failed"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_numbered_text_with_locale() {
        let comparer = NumberedTextComparer::new(locale("sv-SE"));
        assert_eq!(
            sorted(&comparer, &["3. zoo", "1. foo", "2. öoo", "2. zoo"]),
            ["1. foo", "2. zoo", "2. öoo", "3. zoo"]
        );
    }

    #[test]
    fn test_datetime_token() {
        assert_eq!(datetime_token("2023-06-01 event"), Some("2023-06-01"));
        assert_eq!(datetime_token("2023-06-01"), Some("2023-06-01"));
        assert_eq!(datetime_token("event 2023-06-01"), None);
        assert_eq!(datetime_token(" 2023-06-01"), None);
        assert_eq!(datetime_token("5 apples"), None);
    }

    #[test]
    fn test_parse_datetime_formats() {
        let date = parse_datetime("2017-1-12").expect("Failed to parse date");
        let datetime = parse_datetime("2017-1-12T01:00:37").expect("Failed to parse datetime");
        assert!(date < datetime);

        let utc = parse_datetime("2019-08-27T19:13:16Z").expect("Failed to parse rfc3339");
        let offset = parse_datetime("2019-08-27T21:13:16+02:00").expect("Failed to parse rfc3339");
        assert_eq!(utc, offset);

        assert!(parse_datetime("2017-13-45").is_err());
        assert!(parse_datetime("12abc").is_err());
    }

    fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid date")
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    #[test]
    fn test_parse_datetime_wide_shapes() {
        assert_eq!(parse_datetime("20140601"), Ok(midnight(2014, 6, 1)));
        assert_eq!(parse_datetime("2014.03.30"), Ok(midnight(2014, 3, 30)));
        assert_eq!(parse_datetime("2014/3/31"), Ok(midnight(2014, 3, 31)));
        assert_eq!(parse_datetime("2014-04"), Ok(midnight(2014, 4, 1)));
        assert_eq!(
            parse_datetime("1332151919"),
            Ok(DateTime::from_timestamp(1_332_151_919, 0).expect("valid timestamp"))
        );

        let compact_offset =
            parse_datetime("2019-08-27T19:13:16+0200").expect("Failed to parse offset");
        let utc = parse_datetime("2019-08-27T17:13:16Z").expect("Failed to parse rfc3339");
        assert_eq!(compact_offset, utc);
    }

    #[test]
    fn test_parse_datetime_rejects_month_day_ambiguity() {
        assert!(parse_datetime("3/1/2014").is_err());
        assert!(parse_datetime("03/31/2014").is_err());
        assert!(parse_datetime("3.31.2014").is_err());
        assert!(is_month_day_ambiguous("8/1/71"));
        assert!(!is_month_day_ambiguous("2014/3/31"));
        assert!(!is_month_day_ambiguous("2014.03.30"));
    }

    #[test]
    fn test_datetime_text_mixed_shapes() {
        let comparer = DatetimeTextComparer::new(ordinal());
        assert_eq!(
            sorted(
                &comparer,
                &["20140602 b", "2014.06.01 a", "1332151919 epoch", "2014-05 month"]
            ),
            ["1332151919 epoch", "2014-05 month", "2014.06.01 a", "20140602 b"]
        );
    }

    #[test]
    fn test_datetime_text_chronological() {
        let comparer = DatetimeTextComparer::new(ordinal());
        assert_eq!(
            sorted(&comparer, &["2023-06-01 event", "2023-01-02 event"]),
            ["2023-01-02 event", "2023-06-01 event"]
        );
        assert_eq!(
            sorted(
                &comparer,
                &["2017-1-12 hello", "no dt", "also none", "1973-01-01 and"]
            ),
            ["1973-01-01 and", "2017-1-12 hello", "also none", "no dt"]
        );
        assert_eq!(
            sorted(
                &comparer,
                &["2017-1-12T01:00:37", "1991-01-02", "2017-1-12T14:01:01"]
            ),
            ["1991-01-02", "2017-1-12T01:00:37", "2017-1-12T14:01:01"]
        );
    }

    #[test]
    fn test_datetime_text_ties_use_whole_line() {
        let comparer = DatetimeTextComparer::new(ordinal());
        assert_eq!(
            sorted(
                &comparer,
                &["2017-1-12 hello", "2014-05-07 foo", "2018-12-30 bar", "2014-05-07 FUN"]
            ),
            ["2014-05-07 FUN", "2014-05-07 foo", "2017-1-12 hello", "2018-12-30 bar"]
        );
        // Same instant written differently: the whole line decides.
        let ord = comparer
            .compare(
                LineRef::new(1, "2014-5-7 b"),
                LineRef::new(2, "2014-05-07 a"),
            )
            .expect("comparison failed");
        assert_eq!(ord, "2014-5-7 b".cmp("2014-05-07 a"));
    }

    #[test]
    fn test_datetime_text_bad_token_is_error() {
        let comparer = DatetimeTextComparer::new(ordinal());
        let result = comparer.compare(
            LineRef::new(1, "2023-01-02 ok"),
            LineRef::new(4, "12abc nope"),
        );
        match result {
            Err(SortError::Datetime { text, line, .. }) => {
                assert_eq!(text, "12abc");
                assert_eq!(line, 4);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_path_absolute_and_depth() {
        let comparer = PathComparer::new(ordinal(), PathFlavor::Posix);
        assert_eq!(sorted(&comparer, &["a/b", "/z"]), ["/z", "a/b"]);
        assert_eq!(sorted(&comparer, &["/a/b/c", "/a/b"]), ["/a/b", "/a/b/c"]);
        assert_eq!(
            sorted(&comparer, &["/zzz", "/bbb", "/xxx/a", "/aaaaaa/q/r"]),
            ["/bbb", "/zzz", "/xxx/a", "/aaaaaa/q/r"]
        );
        assert_eq!(
            sorted(
                &comparer,
                &["/foo", "/bar", "baz/quux", "a/q", "C:\\", "/X", "/A"]
            ),
            ["/A", "/X", "/bar", "/foo", "C:\\", "a/q", "baz/quux"]
        );
    }

    #[test]
    fn test_path_equal_is_not_less() {
        let comparer = PathComparer::new(ordinal(), PathFlavor::Posix);
        let ord = comparer
            .compare(LineRef::new(1, "/a/b"), LineRef::new(2, "/a//b/"))
            .expect("comparison failed");
        assert_eq!(ord, Ordering::Equal);
    }

    #[test]
    fn test_path_windows_drive_letters() {
        let comparer = PathComparer::new(ordinal(), PathFlavor::Windows);
        assert_eq!(
            sorted(
                &comparer,
                &[
                    "C:\\foo",
                    "\\a\\b",
                    "\\b",
                    "C:\\bar",
                    "E:\\a",
                    "B:\\x",
                    "C:\\a\\b\\c",
                    "C:\\a\\b"
                ]
            ),
            [
                "B:\\x",
                "C:\\bar",
                "C:\\foo",
                "C:\\a\\b",
                "C:\\a\\b\\c",
                "E:\\a",
                "\\b",
                "\\a\\b"
            ]
        );
    }

    #[test]
    fn test_path_with_locale() {
        let comparer = PathComparer::new(locale("sv-SE"), PathFlavor::Posix);
        assert_eq!(
            sorted(&comparer, &["/zoo", "/öoo", "/foo"]),
            ["/foo", "/zoo", "/öoo"]
        );
    }

    #[test]
    fn test_ip_v4_before_v6() {
        let comparer = IpComparer;
        assert_eq!(sorted(&comparer, &["::1", "10.0.0.1"]), ["10.0.0.1", "::1"]);
        assert_eq!(
            sorted(
                &comparer,
                &[
                    "::1",
                    "::0",
                    "255.255.255.255",
                    "::1234",
                    "9876::fe01:1234:457f",
                    "1.2.3.4",
                    "1234::"
                ]
            ),
            [
                "1.2.3.4",
                "255.255.255.255",
                "::0",
                "::1",
                "::1234",
                "1234::",
                "9876::fe01:1234:457f"
            ]
        );
    }

    #[test]
    fn test_ip_invalid_reports_position() {
        let result = IpComparer.compare(LineRef::new(1, "10.0.0.1"), LineRef::new(3, "not-an-ip"));
        match result {
            Err(SortError::InvalidAddress { text, line }) => {
                assert_eq!(text, "not-an-ip");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_network_order() {
        let comparer = NetworkComparer;
        assert_eq!(
            sorted(&comparer, &["10.0.0.0/24", "10.0.0.0/16"]),
            ["10.0.0.0/16", "10.0.0.0/24"]
        );
        assert_eq!(
            sorted(
                &comparer,
                &[
                    "::1/128",
                    "::0/127",
                    "1.2.3.0/18",
                    "::0/42",
                    "1.2.3.0/16",
                    "9876::fe01:1234:0/24",
                    "255.255.255.0/25",
                    "1234::/90"
                ]
            ),
            [
                "1.2.3.0/16",
                "1.2.3.0/18",
                "255.255.255.0/25",
                "::0/42",
                "::0/127",
                "::1/128",
                "1234::/90",
                "9876::fe01:1234:0/24"
            ]
        );
    }

    #[test]
    fn test_network_invalid() {
        let result = NetworkComparer.compare(LineRef::new(2, "10.0.0.0"), LineRef::new(1, "::/0"));
        assert!(matches!(
            result,
            Err(SortError::InvalidNetwork { line: 2, .. })
        ));
    }
}
