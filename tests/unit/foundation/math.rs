use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn premultiply_scales_color_by_alpha() {
    let mut px = vec![100u8, 50, 200, 128, 9, 9, 9, 0, 10, 20, 30, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[50, 25, 100, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[10, 20, 30, 255]);
}

#[test]
fn opaque_source_replaces_destination() {
    let mut dst = vec![0u8, 0, 0, 255, 1, 2, 3, 255];
    let src = vec![255u8, 255, 255, 255, 0, 0, 0, 0];
    assert!(premul_over_in_place(&mut dst, &src));
    assert_eq!(dst, vec![255, 255, 255, 255, 1, 2, 3, 255]);
}

#[test]
fn half_alpha_source_blends() {
    let mut dst = vec![0u8, 0, 0, 255];
    let src = vec![128u8, 0, 0, 128];
    assert!(premul_over_in_place(&mut dst, &src));
    assert_eq!(dst, vec![128, 0, 0, 255]);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let mut dst = vec![0u8; 8];
    assert!(!premul_over_in_place(&mut dst, &[0u8; 4]));
}
