use super::*;

/// Known first outputs of Mulberry32.
#[test]
fn test_mulberry32_known_values() {
    let mut rng = Mulberry32::new(1971);
    assert_eq!(rng.next_u32(), 169_184_693);
    assert_eq!(rng.next_u32(), 3_663_442_931);
    assert_eq!(rng.next_u32(), 71_290_369);

    let mut rng = Mulberry32::new(1);
    assert_eq!(rng.next_u32(), 2_693_262_067);
}

#[test]
fn test_next_unit_matches_known_values() {
    let mut rng = Mulberry32::new(1);
    assert_eq!(rng.next_unit(), 0.627_073_940_588_161_3);
}

#[test]
fn test_next_unit_in_range() {
    let mut rng = Mulberry32::new(7);
    for _ in 0..10_000 {
        let value = rng.next_unit();
        assert!((0.0..1.0).contains(&value), "{value} out of [0, 1)");
    }
}

#[test]
fn test_seed_uses_low_32_bits() {
    let mut wide = Mulberry32::new((1u64 << 32) + 1971);
    let mut narrow = Mulberry32::new(1971);
    assert_eq!(wide.next_u32(), narrow.next_u32());
}

#[test]
fn test_seedable_matches_new() {
    let mut from_bytes = Mulberry32::from_seed(1971u32.to_le_bytes());
    let mut from_u64 = Mulberry32::seed_from_u64(1971);
    let mut direct = Mulberry32::new(1971);
    let expected = direct.next_u32();
    assert_eq!(from_bytes.next_u32(), expected);
    assert_eq!(from_u64.next_u32(), expected);
}

#[test]
fn test_fill_bytes_handles_partial_chunk() {
    let mut rng = Mulberry32::new(3);
    let mut reference = rng.clone();
    let mut buf = [0u8; 6];
    rng.fill_bytes(&mut buf);

    let first = reference.next_u32().to_le_bytes();
    let second = reference.next_u32().to_le_bytes();
    assert_eq!(&buf[..4], &first);
    assert_eq!(&buf[4..], &second[..2]);
}

#[test]
fn test_trait_object_stream() {
    let mut rng = Mulberry32::new(1);
    let stream: &mut dyn RngCore = &mut rng;
    assert_eq!(stream.next_unit(), 0.627_073_940_588_161_3);
}
