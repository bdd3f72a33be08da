use linechart_rs::{StandardFormatter, ValueFormatter};

#[test]
fn filesize_steps_by_1024() {
    let f = StandardFormatter::default();
    assert_eq!(f.format(0.0, Some("filesize"), true), "0 B");
    assert_eq!(f.format(1000.0, Some("filesize"), true), "1,000 B");
    assert_eq!(f.format(1536.0, Some("filesize"), true), "1.5 KB");
    assert_eq!(f.format(1.5 * 1024f64.powi(3), Some("filesize"), true), "1.5 GB");
    assert_eq!(f.format(3.0 * 1024f64.powi(6), Some("filesize"), true), "3,072 PB");
}

#[test]
fn filesize_is_more_precise_off_axis() {
    let f = StandardFormatter::default();
    let v = 1.234 * 1024f64.powi(2);
    assert_eq!(f.format(v, Some("filesize"), true), "1.2 MB");
    assert_eq!(f.format(v, Some("filesize"), false), "1.23 MB");
}

#[test]
fn percent_token() {
    let f = StandardFormatter::default();
    assert_eq!(f.format(42.4, Some("percent"), true), "42%");
    assert_eq!(f.format(42.4, Some("percent"), false), "42.4%");
    assert_eq!(f.format(100.0, Some("percent"), false), "100%");
}

#[test]
fn duration_token() {
    let f = StandardFormatter::default();
    assert_eq!(f.format(59.0, Some("duration"), true), "59s");
    assert_eq!(f.format(125.0, Some("duration"), true), "2m 5s");
    assert_eq!(f.format(7_500.0, Some("time"), true), "2h 5m");
    assert_eq!(f.format(90_061.0, Some("duration"), true), "1d 1h");
}

#[test]
fn tokens_ignore_case_and_whitespace() {
    let f = StandardFormatter::default();
    assert_eq!(f.format(1536.0, Some(" FileSize "), true), "1.5 KB");
    assert_eq!(f.format(2.6, Some("   "), true), "3");
}

#[test]
fn locale_applies_to_every_token() {
    let f = StandardFormatter::new("de");
    assert_eq!(f.format(1536.0, Some("filesize"), true), "1,5 KB");
    assert_eq!(f.format(12_345.0, None, true), "12.345");
    // unknown tags fall back to English
    let f = StandardFormatter::new("xx");
    assert_eq!(f.format(12_345.0, None, true), "12,345");
}

#[test]
fn custom_formatter_is_object_safe() {
    struct Dollars;
    impl ValueFormatter for Dollars {
        fn format(&self, value: f64, _token: Option<&str>, _axis: bool) -> String {
            format!("${value:.0}")
        }
    }
    let boxed: Box<dyn ValueFormatter> = Box::new(Dollars);
    assert_eq!(boxed.format(12.0, None, true), "$12");
}

#[test]
fn magnitudes_beyond_u64_keep_their_digits() {
    let f = StandardFormatter::default();
    assert_eq!(f.format(1e20, None, true), "100,000,000,000,000,000,000");
    assert_eq!(f.format(-3e20, Some("number"), true), "-300,000,000,000,000,000,000");
    assert_eq!(
        StandardFormatter::new("de").format(1e20, None, true),
        "100.000.000.000.000.000.000"
    );
    let huge = f.format(1e300, None, true);
    assert!(huge.starts_with("1,000,"));
    assert_eq!(huge.chars().filter(char::is_ascii_digit).count(), 301);
}
