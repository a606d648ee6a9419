use crate::formatter::MagnitudeBucket;

/// Circle colors for magnitude buckets `1` through `10+`, as RGB.
const MAGNITUDE_COLORS: [(u8, u8, u8); 10] = [
    (0x4a, 0x7b, 0xa7),
    (0x04, 0xb4, 0xb3),
    (0x10, 0xca, 0xc9),
    (0xf5, 0xa6, 0x23),
    (0xff, 0x7d, 0x50),
    (0xfc, 0x66, 0x44),
    (0xe7, 0x5f, 0x40),
    (0xe1, 0x3a, 0x20),
    (0xd9, 0x32, 0x18),
    (0xc0, 0x38, 0x23),
];

#[inline]
pub fn bucket_rgb(bucket: MagnitudeBucket) -> (u8, u8, u8) {
    MAGNITUDE_COLORS[bucket.level() as usize - 1]
}

/// `text` wrapped in a 24-bit ANSI foreground color escape.
pub fn ansi_paint(bucket: MagnitudeBucket, text: &str) -> String {
    let (r, g, b) = bucket_rgb(bucket);
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
}

#[test]
fn test_palette_covers_all_buckets() {
    assert_eq!(
        bucket_rgb(MagnitudeBucket::from_magnitude(-1.0)),
        (0x4a, 0x7b, 0xa7)
    );
    assert_eq!(bucket_rgb(MagnitudeBucket::TEN_PLUS), (0xc0, 0x38, 0x23));
    for m in 1..=10 {
        bucket_rgb(MagnitudeBucket::from_magnitude(m as f64));
    }
}

#[test]
fn test_ansi_paint() {
    assert_eq!(
        ansi_paint(MagnitudeBucket::from_magnitude(4.2), "4.2"),
        "\x1b[38;2;245;166;35m4.2\x1b[0m"
    );
}
