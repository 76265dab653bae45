use stochast::generator::bits::{mantissa_f64, unit_f32, unit_f64};

#[test]
fn zero_word_maps_to_zero() {
    assert_eq!(unit_f32(u32::MIN), 0.0);
    assert_eq!(unit_f64(u64::MIN), 0.0);
}

#[test]
fn all_ones_word_maps_to_one_minus_epsilon() {
    assert_eq!(1.0 - unit_f32(u32::MAX), f32::EPSILON);
    assert_eq!(1.0 - unit_f64(u64::MAX), f64::EPSILON);
}

#[test]
fn only_mantissa_bits_matter() {
    assert_eq!(unit_f64(0xFFF0_0000_0000_0000), 0.0);
    assert_eq!(unit_f32(0xFF80_0000), 0.0);
    assert_eq!(unit_f64(1 << 51), 0.5);
    assert_eq!(unit_f32(1 << 22), 0.5);
}

#[test]
fn mantissa_inverts_unit_conversion() {
    for word in [0u64, 1, 0x1234_5678_9ABC, 0x000F_FFFF_FFFF_FFFF] {
        assert_eq!(mantissa_f64(unit_f64(word) + 1.0), word);
    }
}
