// Round-trip coverage for the whole pipeline: header + body, both directions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use lzdict_core::{
        codec::PairReader,
        coding::CodePolicy,
        compress, compress_bytes,
        config::CodecConfig,
        constants::{EMPTY_CODE, STOP_CODE},
        decompress, decompress_after_header, decompress_bytes,
        headers::{FileHeader, HEADER_LEN},
        io::read_header,
        telemetry::TelemetryTimer,
    };

    fn roundtrip(data: &[u8], config: &CodecConfig) -> Vec<u8> {
        let packed = compress_bytes(data, config).unwrap();
        decompress_bytes(&packed, config).unwrap()
    }

    #[test]
    fn empty_input_is_header_plus_stop_pair() {
        let config = CodecConfig::default();
        let packed = compress_bytes(&[], &config).unwrap();
        // 8-byte header, then STOP_CODE in 2 bits + 8 symbol bits -> 2 bytes
        assert_eq!(packed.len(), HEADER_LEN + 2);
        assert_eq!(&packed[HEADER_LEN..], &[0x00, 0x00]);
        assert!(decompress_bytes(&packed, &config).unwrap().is_empty());
    }

    #[test]
    fn single_byte() {
        assert_eq!(roundtrip(b"x", &CodecConfig::default()), b"x");
    }

    #[test]
    fn repeated_run_survives_resets() {
        let config = CodecConfig::new(256, 512).unwrap();
        let data = vec![b'z'; 100_000];

        let mut packed = Vec::new();
        let snap = compress(&data[..], &mut packed, &FileHeader::default(), &config).unwrap();
        assert!(snap.resets >= 1, "run should overflow a 256-entry dictionary");

        let mut out = Vec::new();
        let (_, dsnap) = decompress(&packed[..], &mut out, &config).unwrap();
        assert_eq!(out.len(), data.len());
        assert!(out.iter().all(|&b| b == b'z'));
        assert_eq!(dsnap.resets, snap.resets);
        assert_eq!(dsnap.pairs, snap.pairs);
    }

    #[test]
    fn every_byte_value_once_gets_first_level_codes() {
        let data: Vec<u8> = (0..=255u8).collect();
        let config = CodecConfig::default();
        let packed = compress_bytes(&data, &config).unwrap();

        let mut policy = CodePolicy::from_config(&config);
        let mut reader = PairReader::new(&packed[HEADER_LEN..]);
        let mut seen = Vec::new();
        while let Some(pair) = reader.read_pair(policy.width()).unwrap() {
            assert_eq!(pair.code, EMPTY_CODE);
            assert_ne!(pair.code, STOP_CODE);
            seen.push(pair.symbol);
            policy.advance();
        }
        assert_eq!(seen, data);
        assert_eq!(policy.next_code(), 2 + 256);

        assert_eq!(decompress_bytes(&packed, &config).unwrap(), data);
    }

    #[test]
    fn text_compresses_and_restores() {
        let text = "the rain in spain falls mainly on the plain. ".repeat(400);
        let config = CodecConfig::default();
        let packed = compress_bytes(text.as_bytes(), &config).unwrap();
        assert!(packed.len() < text.len() / 2);
        assert_eq!(decompress_bytes(&packed, &config).unwrap(), text.as_bytes());
    }

    #[test]
    fn random_bytes_across_block_sizes() {
        let mut rng = StdRng::seed_from_u64(0x8BAD_BEEF);
        let data: Vec<u8> = (0..50_000).map(|_| rng.gen::<u8>() % 16).collect();
        for block in [1usize, 7, 4096, 65536] {
            let config = CodecConfig::new(1 << 12, block).unwrap();
            assert_eq!(roundtrip(&data, &config), data, "block size {block}");
        }
    }

    #[test]
    fn block_size_does_not_change_the_wire() {
        let data = b"abracadabra abracadabra abracadabra".repeat(50);
        let a = compress_bytes(&data, &CodecConfig::with_block_size(3).unwrap()).unwrap();
        let b = compress_bytes(&data, &CodecConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn trailing_bytes_after_stop_are_ignored() {
        let config = CodecConfig::default();
        let mut packed = compress_bytes(b"hello hello hello", &config).unwrap();
        packed.extend_from_slice(&[0xFF; 32]);
        assert_eq!(decompress_bytes(&packed, &config).unwrap(), b"hello hello hello");
    }

    #[test]
    fn split_header_and_body_match_whole_stream() {
        let config = CodecConfig::default();
        let data = b"mississippi mississippi".repeat(10);
        let mut packed = Vec::new();
        compress(&data[..], &mut packed, &FileHeader::new(0o640), &config).unwrap();

        let mut whole = Vec::new();
        let (header, full) = decompress(&packed[..], &mut whole, &config).unwrap();

        let mut input = &packed[..];
        let timer = TelemetryTimer::new();
        let split_header = read_header(&mut input).unwrap();
        let mut split = Vec::new();
        let snap = decompress_after_header(input, &mut split, &config, timer).unwrap();

        assert_eq!(split_header, header);
        assert_eq!(split, whole);
        assert_eq!(split, data);
        assert_eq!(snap.bytes_compressed, full.bytes_compressed);
        assert_eq!(snap.bytes_uncompressed, full.bytes_uncompressed);
        assert_eq!(snap.bytes_header, HEADER_LEN as u64);
        assert_eq!(snap.pairs, full.pairs);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_default(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
            prop_assert_eq!(roundtrip(&data, &CodecConfig::default()), data);
        }

        #[test]
        fn prop_roundtrip_small_dictionary(
            data in proptest::collection::vec(0u8..4, 0..8192),
            shift in 2u32..10,
        ) {
            let config = CodecConfig::new(1 << shift, 64).unwrap();
            prop_assert_eq!(roundtrip(&data, &config), data);
        }
    }
}
