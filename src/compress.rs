/// Folds `bytes` down to at most `target` values by XOR-ing contiguous
/// segments together. Returns the input unchanged when it already fits.
///
/// Segment assignment uses double-precision division on purpose: index `i`
/// lands in segment `floor(i / (len / target))`, clamped to the last segment
/// so floating-point overshoot on the final index cannot walk off the end.
/// The rounding behavior is a compatibility surface; an integer-only
/// reformulation can shift boundary bytes into a different segment and change
/// the output.
pub fn compress(bytes: &[u8], target: usize) -> Vec<u8> {
    if target == 0 {
        return Vec::new();
    }

    let length = bytes.len();
    if target >= length {
        return bytes.to_vec();
    }

    let seg_size = length as f64 / target as f64;
    let mut segments = vec![0u8; target];
    for (i, &byte) in bytes.iter().enumerate() {
        let seg_num = ((i as f64 / seg_size).floor() as usize).min(target - 1);
        segments[seg_num] ^= byte;
    }

    segments
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::compress;

    const REFERENCE_INPUT: [u8; 11] = [96, 173, 141, 13, 135, 27, 96, 149, 128, 130, 151];

    #[test]
    fn reference_vector_folds_to_four_bytes() {
        assert_eq!(compress(&REFERENCE_INPUT, 4), vec![64, 145, 117, 21]);
    }

    #[test]
    fn target_beyond_length_returns_input_unchanged() {
        assert_eq!(compress(&REFERENCE_INPUT, 15), REFERENCE_INPUT.to_vec());
        assert_eq!(compress(&REFERENCE_INPUT, 11), REFERENCE_INPUT.to_vec());
    }

    #[test]
    fn zero_target_yields_empty_output_regardless_of_input() {
        assert_eq!(compress(&REFERENCE_INPUT, 0), Vec::<u8>::new());
        assert_eq!(compress(&[], 0), Vec::<u8>::new());
    }

    #[test]
    fn empty_input_is_identity_for_any_target() {
        assert_eq!(compress(&[], 4), Vec::<u8>::new());
        assert_eq!(compress(&[], 1), Vec::<u8>::new());
    }

    #[test]
    fn single_segment_xors_every_byte() {
        let folded = compress(&REFERENCE_INPUT, 1);
        let expected = REFERENCE_INPUT.iter().fold(0u8, |acc, &b| acc ^ b);
        assert_eq!(folded, vec![expected]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_output_length_is_min_of_target_and_input(
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
            target in 0usize..32,
        ) {
            let expected_len = if target == 0 { 0 } else { target.min(bytes.len()) };
            prop_assert_eq!(compress(&bytes, target).len(), expected_len);
        }

        #[test]
        fn prop_identity_when_target_covers_input(
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
            slack in 0usize..16,
        ) {
            let target = bytes.len() + slack;
            if target > 0 {
                prop_assert_eq!(compress(&bytes, target), bytes);
            }
        }

        #[test]
        fn prop_xor_preserves_total_parity(
            bytes in proptest::collection::vec(any::<u8>(), 1..64),
            target in 1usize..16,
        ) {
            // XOR is associative, so folding the segments again must equal
            // folding the whole input at once.
            let input_checksum = bytes.iter().fold(0u8, |acc, &b| acc ^ b);
            let folded = compress(&bytes, target);
            let folded_checksum = folded.iter().fold(0u8, |acc, &b| acc ^ b);
            prop_assert_eq!(folded_checksum, input_checksum);
        }

        #[test]
        fn prop_deterministic(
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
            target in 0usize..16,
        ) {
            prop_assert_eq!(compress(&bytes, target), compress(&bytes, target));
        }
    }
}
