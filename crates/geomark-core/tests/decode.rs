use geomark_core::{PacketError, decode_coordinates, int24_be};

#[test]
fn decode_marker_at_start() {
    let pos = decode_coordinates("2500006400 0032").expect("decode");
    assert_eq!(pos.lat, 100.0 / 30_000.0);
    assert_eq!(pos.lon, 50.0 / 30_000.0);
}

#[test]
fn decode_is_whitespace_insensitive() {
    let spaced = decode_coordinates("25 00 00 64 00 00 32").expect("spaced");
    let packed = decode_coordinates("2500006400 0032").expect("packed");
    assert_eq!(spaced, packed);
}

#[test]
fn decode_negative_coordinates() {
    // lat FF FF 9C = -100, lon FF FF CE = -50
    let pos = decode_coordinates("25 FFFF9C FFFFCE").expect("decode");
    assert_eq!(pos.lat, -100.0 / 30_000.0);
    assert_eq!(pos.lon, -50.0 / 30_000.0);
}

#[test]
fn decode_ignores_leading_bytes() {
    let pos = decode_coordinates("DE AD BE EF 25 00 00 64 00 00 32").expect("decode");
    assert_eq!(pos.lat, 100.0 / 30_000.0);
    assert_eq!(pos.lon, 50.0 / 30_000.0);
}

#[test]
fn decode_first_marker_wins() {
    // A second marker with distinct trailing data must not move the anchor.
    let first = decode_coordinates("25 000064 000032 25 7FFFFF 800000").expect("two markers");
    let only = decode_coordinates("25 000064 000032").expect("one marker");
    assert_eq!(first, only);
}

#[test]
fn decode_trailing_bytes_ignored() {
    let pos = decode_coordinates("25 000064 000032 AABBCC").expect("decode");
    assert_eq!(pos.lat, 100.0 / 30_000.0);
    assert_eq!(pos.lon, 50.0 / 30_000.0);
}

#[test]
fn decode_missing_marker() {
    let err = decode_coordinates("0011223344").unwrap_err();
    assert!(matches!(err, PacketError::MarkerNotFound));
}

#[test]
fn decode_truncated_after_marker() {
    let err = decode_coordinates("25 00 00").unwrap_err();
    assert!(matches!(
        err,
        PacketError::Truncated {
            needed: 7,
            actual: 3
        }
    ));
}

#[test]
fn decode_rejects_odd_length_hex() {
    let err = decode_coordinates("25 000").unwrap_err();
    assert!(matches!(err, PacketError::InvalidHex(_)));
}

#[test]
fn decode_rejects_non_hex_characters() {
    let err = decode_coordinates("25 00 00 64 00 00 3g").unwrap_err();
    assert!(matches!(err, PacketError::InvalidHex(_)));
}

#[test]
fn decode_is_idempotent() {
    let first = decode_coordinates("25 FFFF9C 000032").expect("first");
    for _ in 0..10 {
        let again = decode_coordinates("25 FFFF9C 000032").expect("again");
        assert_eq!(again.lat.to_bits(), first.lat.to_bits());
        assert_eq!(again.lon.to_bits(), first.lon.to_bits());
    }
}

#[test]
fn int24_encode_decode_round_trip() {
    for value in [
        -8_388_608i32,
        -8_388_607,
        -65_536,
        -100,
        -1,
        0,
        1,
        50,
        100,
        65_535,
        8_388_606,
        8_388_607,
    ] {
        let be = value.to_be_bytes();
        assert_eq!(int24_be([be[1], be[2], be[3]]), value, "value {value}");
    }
}

#[test]
fn extreme_fields_exceed_geographic_range() {
    // No plausibility validation: max positive raw value is ~279.6 degrees.
    let pos = decode_coordinates("25 7FFFFF 800000").expect("decode");
    assert_eq!(pos.lat, 8_388_607.0 / 30_000.0);
    assert_eq!(pos.lon, -8_388_608.0 / 30_000.0);
    assert!(pos.lat > 180.0);
    assert!(pos.lon < -180.0);
}
