//! Tests for gray-core

use super::*;
use crate::notation::{bit_length, parse_bits, parse_decimal, to_binary_string};

fn raw(codes: &[GrayValue]) -> Vec<u64> {
    codes.iter().map(|c| c.get()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENCODING / DECODING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_to_gray_known_values() {
    let expected = [(0, 0), (1, 1), (2, 3), (3, 2), (4, 6), (5, 7)];
    for (n, g) in expected {
        assert_eq!(to_gray(n), g, "to_gray({})", n);
    }
}

#[test]
fn test_from_gray_known_values() {
    assert_eq!(from_gray(3), 2);
    assert_eq!(from_gray(7), 5);
    assert_eq!(from_gray(0), 0);
    assert_eq!(from_gray(1), 1);
    assert_eq!(from_gray(2), 3);
}

#[test]
fn test_round_trip_twenty_bits() {
    for n in 0u64..(1 << 20) {
        assert_eq!(from_gray(to_gray(n)), n);
    }
}

#[test]
fn test_round_trip_full_width() {
    let samples = [
        u64::MAX,
        u64::MAX - 1,
        1 << 63,
        (1 << 63) - 1,
        0xDEAD_BEEF_CAFE_BABE,
        0x5555_5555_5555_5555,
        0xAAAA_AAAA_AAAA_AAAA,
    ];
    for v in samples {
        assert_eq!(from_gray(to_gray(v)), v);
        assert_eq!(to_gray(from_gray(v)), v);
    }
}

#[test]
fn test_gray_to_binary_round_trip_twenty_bits() {
    for g in 0u64..(1 << 20) {
        assert_eq!(to_gray(from_gray(g)), g);
    }
}

#[test]
fn test_typed_values() {
    let binary = BinaryValue::new(4);
    let gray = binary.to_gray();
    assert_eq!(gray, GrayValue::new(6));
    assert_eq!(gray.to_binary(), binary);
    assert_eq!(GrayValue::from(binary), gray);
    assert_eq!(BinaryValue::from(gray), binary);
    assert_eq!(gray.to_string(), "110");
    assert_eq!(binary.to_string(), "4");
}

#[test]
fn test_display_notation() {
    // numbers print in decimal, codewords in unpadded base 2
    assert_eq!(BinaryValue::new(10).to_string(), "10");
    assert_eq!(GrayValue::new(10).to_string(), "1010");
    assert_eq!(GrayValue::new(0b0011).to_string(), "11");
    assert_eq!(GrayValue::new(0).to_string(), "0");
    assert_eq!(BinaryValue::new(3).to_gray().to_string(), "10");
}

#[test]
fn test_code_word_bit() {
    let gray = GrayValue::new(0b1010);
    assert!(!gray.bit(0));
    assert!(gray.bit(1));
    assert!(gray.bit(3));
    assert!(!gray.bit(64));
}

// ═══════════════════════════════════════════════════════════════════════════════
// SEQUENCES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_sequence_one_bit() {
    assert_eq!(raw(&gray_sequence(1).unwrap()), vec![0, 1]);
}

#[test]
fn test_sequence_three_bits() {
    let seq = gray_sequence(3).unwrap();
    assert_eq!(raw(&seq), vec![0, 1, 3, 2, 6, 7, 5, 4]);
}

#[test]
fn test_sequence_eight_bits_is_permutation() {
    let seq = gray_sequence(8).unwrap();
    assert_eq!(seq.len(), 256);

    let mut values = raw(&seq);
    assert!(values.iter().all(|&v| v <= 255));
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), 256);
}

#[test]
fn test_sequence_cyclic_single_bit_transitions() {
    for bits in 1..=12 {
        let seq = gray_sequence(bits).unwrap();
        let len = seq.len();
        for i in 0..len {
            let a = seq[i];
            let b = seq[(i + 1) % len];
            assert!(
                is_single_bit_transition(a, b),
                "bits={} i={} {:b} -> {:b}",
                bits,
                i,
                a.get(),
                b.get()
            );
        }
    }
}

#[test]
fn test_sequence_is_deterministic() {
    assert_eq!(gray_sequence(5).unwrap(), gray_sequence(5).unwrap());
}

#[test]
fn test_sequence_not_sorted_by_value() {
    let seq = raw(&gray_sequence(2).unwrap());
    assert_eq!(seq, vec![0, 1, 3, 2]);
}

#[test]
fn test_sequence_invalid_widths() {
    assert!(matches!(
        gray_sequence(0),
        Err(GrayError::InvalidWidth { bits: 0, .. })
    ));
    assert!(gray_sequence(usize::BITS).is_err());
    assert!(validate_width(64).is_err());
    assert_eq!(validate_width(12).unwrap(), 4096);
}

#[test]
fn test_lazy_sequence() {
    let seq = GraySequence::new(3).unwrap();
    assert_eq!(seq.len(), 8);

    let reversed: Vec<u64> = seq.rev().map(|c| c.get()).collect();
    assert_eq!(reversed, vec![4, 5, 7, 6, 2, 3, 1, 0]);

    let mut seq = GraySequence::new(1).unwrap();
    assert_eq!(seq.next(), Some(GrayValue::new(0)));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.next(), Some(GrayValue::new(1)));
    assert_eq!(seq.next(), None);
    assert_eq!(seq.next(), None);
}

// ═══════════════════════════════════════════════════════════════════════════════
// BIT DIFFERENCES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_bit_diff_basic_cases() {
    let diff = |a, b| bit_diff(BinaryValue::new(a), BinaryValue::new(b)).map(BitPosition::index);
    assert_eq!(diff(2, 3), Some(0));
    assert_eq!(diff(5, 5), None);
    assert_eq!(diff(0, 8), Some(3));
    assert_eq!(diff(8, 0), Some(3));
}

#[test]
fn test_bit_diff_reports_lowest_of_several() {
    let a = GrayValue::new(0b0110);
    let b = GrayValue::new(0b0000);
    assert_eq!(bit_diff(a, b), Some(BitPosition::new(1)));
    assert!(!is_single_bit_transition(a, b));
}

#[test]
fn test_single_bit_transition_predicate() {
    let g = |v| GrayValue::new(v);
    assert!(is_single_bit_transition(g(2), g(6)));
    assert!(!is_single_bit_transition(g(5), g(5)));
    assert!(!is_single_bit_transition(g(0), g(3)));
    assert!(is_single_bit_transition(g(0), g(1 << 63)));
}

#[test]
fn test_bit_position_weight() {
    let pos = BitPosition::new(3);
    assert_eq!(pos.weight(), 8);
    assert_eq!(pos.to_string(), "Bit 3 (2^3)");
}

// ═══════════════════════════════════════════════════════════════════════════════
// NOTATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_to_binary_string_padding() {
    assert_eq!(to_binary_string(5, 8), "00000101");
    assert_eq!(to_binary_string(0, 1), "0");
    assert_eq!(to_binary_string(0, 4), "0000");
    assert_eq!(to_binary_string(255, 4), "11111111");
}

#[test]
fn test_parse_decimal() {
    assert_eq!(parse_decimal("42").unwrap(), 42);
    assert_eq!(parse_decimal("  7 ").unwrap(), 7);
    assert_eq!(parse_decimal("18446744073709551615").unwrap(), u64::MAX);

    for bad in ["", "   ", "-1", "+1", "abc", "1.5", "18446744073709551616"] {
        assert!(
            matches!(parse_decimal(bad), Err(GrayError::InvalidDecimal(_))),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn test_parse_bits() {
    assert_eq!(parse_bits("101").unwrap(), 5);
    assert_eq!(parse_bits(" 0011 ").unwrap(), 3);
    assert_eq!(parse_bits(&"1".repeat(64)).unwrap(), u64::MAX);

    for bad in ["", "102", "0b101", "1 0"] {
        assert!(parse_bits(bad).is_err(), "accepted {:?}", bad);
    }
    assert!(parse_bits(&"1".repeat(65)).is_err());
}

#[test]
fn test_bit_length() {
    assert_eq!(bit_length(0), 1);
    assert_eq!(bit_length(1), 1);
    assert_eq!(bit_length(8), 4);
    assert_eq!(bit_length(u64::MAX), 64);
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONVERTER
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_conversion_from_decimal() {
    let c = Conversion::from_decimal(5);
    assert_eq!(c.decimal, 5);
    assert_eq!(c.binary, "101");
    assert_eq!(c.gray, "111");

    let zero = Conversion::from_decimal(0);
    assert_eq!(zero.binary, "0");
    assert_eq!(zero.gray, "0");
}

#[test]
fn test_conversion_from_binary() {
    let c = Conversion::from_binary("0110").unwrap();
    assert_eq!(c.decimal, 6);
    assert_eq!(c.binary, "110");
    assert_eq!(c.gray, "101");
}

#[test]
fn test_conversion_from_gray() {
    let c = Conversion::from_gray("111").unwrap();
    assert_eq!(c.decimal, 5);
    assert_eq!(c.binary, "101");
    assert_eq!(c.gray, "111");

    let c = Conversion::from_gray("10").unwrap();
    assert_eq!(c.decimal, 3);
    assert_eq!(c.binary, "11");
}

#[test]
fn test_conversion_rejects_bad_input() {
    let err = Conversion::from_gray("abc").unwrap_err();
    assert_eq!(err.code(), "INVALID_BINARY");

    let err = Conversion::parse_decimal("-3").unwrap_err();
    assert_eq!(err.code(), "INVALID_DECIMAL");
}

// ═══════════════════════════════════════════════════════════════════════════════
// TABLE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_table_three_bits() {
    let rows = gray_table(3).unwrap();
    assert_eq!(rows.len(), 8);

    assert_eq!(rows[0].changed_bit, None);
    assert_eq!(rows[0].binary, "000");
    assert_eq!(rows[0].gray, "000");

    assert_eq!(rows[1].changed_bit, Some(BitPosition::new(0)));
    assert_eq!(rows[2].gray, "011");
    assert_eq!(rows[2].changed_bit, Some(BitPosition::new(1)));
    assert_eq!(rows[4].gray, "110");
    assert_eq!(rows[4].changed_bit, Some(BitPosition::new(2)));
    assert_eq!(rows[5].binary, "101");
    assert_eq!(rows[7].gray, "100");
}

#[test]
fn test_table_changed_bits_match_rows() {
    let rows = gray_table(6).unwrap();
    for pair in rows.windows(2) {
        let prev = GrayValue::new(parse_bits(&pair[0].gray).unwrap());
        let curr = GrayValue::new(parse_bits(&pair[1].gray).unwrap());
        assert!(is_single_bit_transition(prev, curr));
        assert_eq!(pair[1].changed_bit, bit_diff(prev, curr));
    }
}

#[test]
fn test_table_json_shape() {
    let rows = gray_table(1).unwrap();
    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[0]["changed_bit"], serde_json::Value::Null);
    assert_eq!(json[1]["changed_bit"], 0);
    assert_eq!(json[1]["gray"], "1");
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENCODER DISK
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_disk_creation() {
    let disk = EncoderDisk::new(5).unwrap();
    assert_eq!(disk.bits(), 5);
    assert_eq!(disk.sectors(), 32);

    assert!(EncoderDisk::new(0).is_err());
    assert!(EncoderDisk::new(MAX_DISK_TRACKS).is_ok());
    assert!(EncoderDisk::new(MAX_DISK_TRACKS + 1).is_err());
}

#[test]
fn test_disk_track_state() {
    let disk = EncoderDisk::new(5).unwrap();
    // sector 2 carries 0b011
    assert!(disk.track_active(2, 0).unwrap());
    assert!(disk.track_active(2, 1).unwrap());
    assert!(!disk.track_active(2, 2).unwrap());

    assert!(matches!(
        disk.track_active(32, 0),
        Err(GrayError::SectorOutOfRange { sector: 32, sectors: 32 })
    ));
    assert!(matches!(
        disk.track_active(0, 5),
        Err(GrayError::TrackOutOfRange { track: 5, tracks: 5 })
    ));
}

#[test]
fn test_disk_one_track_per_boundary() {
    let disk = EncoderDisk::new(5).unwrap();
    let tracks = disk.tracks();
    assert_eq!(tracks.len(), 5);

    for sector in 0..disk.sectors() {
        let next = (sector + 1) % disk.sectors();
        let toggled = tracks
            .iter()
            .filter(|t| t.active[sector as usize] != t.active[next as usize])
            .count();
        assert_eq!(toggled, 1, "sector {}", sector);
    }

    assert_eq!(disk.boundary_track(31).unwrap(), BitPosition::new(4));
    assert_eq!(disk.boundary_track(0).unwrap(), BitPosition::new(0));
    assert_eq!(disk.boundary_track(1).unwrap(), BitPosition::new(1));
}

#[test]
fn test_disk_svg() {
    let disk = EncoderDisk::new(5).unwrap();
    let svg = disk.to_svg();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("5-Bit Gray Code"));

    // one ring per track plus one arc per set bit: 5 * 2^4 set bits
    assert_eq!(svg.matches("<path").count(), 5 + 80);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SERIALIZATION / ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_values_serialize_transparently() {
    assert_eq!(serde_json::to_string(&GrayValue::new(6)).unwrap(), "6");
    assert_eq!(serde_json::to_string(&BitPosition::new(2)).unwrap(), "2");
    let back: BinaryValue = serde_json::from_str("9").unwrap();
    assert_eq!(back, BinaryValue::new(9));
}

#[test]
fn test_error_messages() {
    let err = gray_sequence(0).unwrap_err();
    assert_eq!(err.code(), "INVALID_WIDTH");
    assert!(err.to_string().contains("at least 1"));
}
