use framemark::{parse_hex_rgb, rgb_to_hex};

#[test]
fn parse_hex_with_hash_prefix() {
    assert_eq!(parse_hex_rgb("#FF0080"), Some((0xFF, 0x00, 0x80)));
}

#[test]
fn parse_hex_without_prefix() {
    assert_eq!(parse_hex_rgb("336699"), Some((0x33, 0x66, 0x99)));
}

#[test]
fn parse_hex_trims_and_accepts_mixed_case() {
    assert_eq!(parse_hex_rgb("  #ff00Aa  "), Some((0xFF, 0x00, 0xAA)));
}

#[test]
fn parse_hex_rejects_wrong_length() {
    assert_eq!(parse_hex_rgb("#FFF"), None);
    assert_eq!(parse_hex_rgb("#FF0080AA"), None);
}

#[test]
fn parse_hex_rejects_non_hex_digits() {
    assert_eq!(parse_hex_rgb("#GGHHII"), None);
}

#[test]
fn hex_roundtrip() {
    let hex = rgb_to_hex(0x12, 0xAB, 0xEF);
    assert_eq!(hex, "#12ABEF");
    assert_eq!(parse_hex_rgb(&hex), Some((0x12, 0xAB, 0xEF)));
}
