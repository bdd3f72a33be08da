use chrono::{TimeZone, Utc};
use linechart_rs::viz::{Color, Palette};
use linechart_rs::models::MAX_DEVICE_SIDE;
use linechart_rs::{ChartDataset, ChartError, ChartOptions, LineChart, Series};

#[test]
fn dataset_from_json() {
    let json = r#"{
        "labels": ["2024-03-01T00:00:00Z", "2024-03-01T06:00:00+02:00"],
        "series": [
            { "name": "Files", "data": [3, 5.5] },
            { "name": "Folders", "data": [1] }
        ],
        "y_axis_formatter": "filesize"
    }"#;
    let data: ChartDataset = serde_json::from_str(json).unwrap();
    assert_eq!(data.labels[1], Utc.with_ymd_and_hms(2024, 3, 1, 4, 0, 0).unwrap());
    assert_eq!(data.series_names(), ["Files", "Folders"]);
    assert_eq!(data.y_axis_formatter.as_deref(), Some("filesize"));
    assert_eq!(data.max_value(), Some(5.5));
    data.validate().unwrap();
}

#[test]
fn formatter_token_is_optional() {
    let json = r#"{
        "labels": ["2024-03-01T00:00:00Z"],
        "series": [{ "name": "a", "data": [1] }]
    }"#;
    let data: ChartDataset = serde_json::from_str(json).unwrap();
    assert!(data.y_axis_formatter.is_none());
}

#[test]
fn label_range_ignores_order() {
    let a = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let c = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
    let data = ChartDataset::new(vec![a, b, c], vec![Series::new("s", vec![1.0])]);
    assert_eq!(data.label_range(), Some((b, a)));
}

#[test]
fn max_value_skips_non_finite() {
    let data = ChartDataset::new(
        vec![],
        vec![
            Series::new("a", vec![f64::NAN, 2.0]),
            Series::new("b", vec![f64::INFINITY, -1.0]),
        ],
    );
    assert_eq!(data.max_value(), Some(2.0));
    let empty = ChartDataset::new(vec![], vec![Series::new("a", vec![f64::NAN])]);
    assert_eq!(empty.max_value(), None);
}

#[test]
fn partial_options_keep_defaults() {
    let opts: ChartOptions = serde_json::from_str(r#"{ "width": 800, "locale": "de" }"#).unwrap();
    assert_eq!(opts.width, 800);
    assert_eq!(opts.height, 300);
    assert_eq!(opts.scale, 2);
    assert_eq!(opts.locale, "de");
    assert_eq!(opts.palette, Palette::default());
    assert_eq!(opts.device_size().unwrap(), (1600, 600));
}

#[test]
fn palette_and_theme_from_json() {
    let opts: ChartOptions = serde_json::from_str(
        r#"{
            "palette": [[255, 0, 0], [0, 0, 255]],
            "theme": { "plot_background": [255, 255, 255] }
        }"#,
    )
    .unwrap();
    assert_eq!(opts.palette.len(), 2);
    assert_eq!(opts.palette.color(3), Color(0, 0, 255));
    assert_eq!(opts.theme.plot_background, Color::WHITE);
    assert_eq!(opts.theme.background, Color::WHITE);
}

#[test]
fn empty_palette_is_rejected() {
    assert!(serde_json::from_str::<ChartOptions>(r#"{ "palette": [] }"#).is_err());
}

#[test]
fn invalid_options() {
    let bad = [
        ChartOptions::default().with_size(0, 100),
        ChartOptions {
            scale: 0,
            ..ChartOptions::default()
        },
        ChartOptions {
            font_px: f64::NAN,
            ..ChartOptions::default()
        },
        ChartOptions {
            utc_offset_minutes: 24 * 60,
            ..ChartOptions::default()
        },
    ];
    for opts in bad {
        assert!(matches!(opts.validate(), Err(ChartError::InvalidOptions(_))), "{opts:?}");
    }
    ChartOptions::default().validate().unwrap();
}

#[test]
fn oversized_rasters_are_rejected_up_front() {
    let mut overflow = ChartOptions::default().with_size(3_000_000_000, 3_000_000_000);
    overflow.scale = 1;
    assert!(matches!(overflow.validate(), Err(ChartError::InvalidOptions(_))));
    assert!(matches!(LineChart::new(overflow), Err(ChartError::InvalidOptions(_))));

    // fits in u32 but not in memory
    let huge = ChartOptions::default().with_size(100_000, 100_000);
    assert!(matches!(huge.device_size(), Err(ChartError::InvalidOptions(_))));
    assert!(LineChart::new(huge).is_err());

    // the scale alone can push a side past the limit
    let mut scaled = ChartOptions::default().with_size(MAX_DEVICE_SIDE / 2 + 1, 100);
    scaled.scale = 2;
    assert!(scaled.validate().is_err());
    scaled.scale = 1;
    scaled.validate().unwrap();
    assert_eq!(scaled.device_size().unwrap(), (MAX_DEVICE_SIDE / 2 + 1, 100));
}
