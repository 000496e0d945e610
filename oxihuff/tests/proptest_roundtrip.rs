//! Property-based tests for the Huffman codec.
//!
//! These tests verify that the codec properties hold across arbitrary inputs:
//! - Encoding followed by decoding reproduces the input (both body formats)
//! - Header serialization round-trips every frequency table
//! - Tree construction is deterministic and its codes are prefix-free

use proptest::prelude::*;

use oxihuff::{
    CodecConfig, FrequencyTable, build_tree, count_frequencies, create_codes, create_header,
    decode_with, encode_with, parse_header,
};

/// Strategy for byte inputs ranging from tiny to skewed alphabets.
fn input_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..512),
        prop::collection::vec(prop::sample::select(b"ab\n".to_vec()), 0..256),
        prop::collection::vec(0u8..4, 1..64),
    ]
}

/// Strategy for frequency tables with at least one non-zero count.
fn frequency_strategy() -> impl Strategy<Value = FrequencyTable> {
    prop::collection::vec((any::<u8>(), 1u64..1_000_000), 1..40).prop_map(|pairs| {
        let mut table = FrequencyTable::new();
        for (byte, count) in pairs {
            table.set(byte, count);
        }
        table
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: decode(encode(b)) == b with the text body.
    #[test]
    fn prop_roundtrip_text(input in input_strategy()) {
        let encoded = encode_with(&input, CodecConfig::TEXT).unwrap();
        prop_assert_eq!(decode_with(&encoded, CodecConfig::TEXT).unwrap(), input);
    }

    /// Property: decode(encode(b)) == b with the packed body.
    #[test]
    fn prop_roundtrip_packed(input in input_strategy()) {
        let encoded = encode_with(&input, CodecConfig::PACKED).unwrap();
        prop_assert_eq!(decode_with(&encoded, CodecConfig::PACKED).unwrap(), input);
    }

    /// Property: parse_header(create_header(f)) == f.
    #[test]
    fn prop_header_roundtrip(table in frequency_strategy()) {
        let header = create_header(&table);
        prop_assert!(!header.ends_with(' '));
        prop_assert_eq!(parse_header(&header).unwrap(), table);
    }

    /// Property: building twice gives structurally equal trees.
    #[test]
    fn prop_tree_deterministic(table in frequency_strategy()) {
        let first = build_tree(&table);
        let second = build_tree(&table.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.map(|root| root.weight()), Some(table.total()));
    }

    /// Property: every present byte gets a code and no code prefixes another.
    #[test]
    fn prop_codes_prefix_free(input in prop::collection::vec(any::<u8>(), 2..256)) {
        let freqs = count_frequencies(&input);
        prop_assume!(freqs.distinct() > 1);
        let tree = build_tree(&freqs);
        let codes = create_codes(tree.as_ref());

        let assigned: Vec<&str> = codes.iter_assigned().map(|(_, code)| code).collect();
        prop_assert_eq!(assigned.len(), freqs.distinct());
        for a in &assigned {
            for b in &assigned {
                prop_assert!(a == b || !b.starts_with(a));
            }
        }
    }

    /// Property: the text body is exactly the sum of count * code length.
    #[test]
    fn prop_text_body_length(input in input_strategy()) {
        let freqs = count_frequencies(&input);
        let codes = create_codes(build_tree(&freqs).as_ref());
        let encoded = encode_with(&input, CodecConfig::TEXT).unwrap();
        let header_len = create_header(&freqs).len() + 1;
        let body_len = (encoded.len() - header_len) as u64;

        if freqs.distinct() > 1 {
            prop_assert_eq!(body_len, codes.encoded_bits(&freqs));
        } else {
            prop_assert_eq!(body_len, 0);
        }
    }
}
