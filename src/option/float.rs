//! Nullable IEEE 754 floats.
//!
//! Ordering is the IEEE total order (`f64::total_cmp`), so `-0.0 < +0.0` and
//! NaN sorts above `+inf`. Equality and hashing use the sortable bit pattern:
//! two NaNs with the same bits are equal, `-0.0` and `+0.0` are not.

use crate::config::{DOUBLE_WIDTH, FLOAT_WIDTH};
use crate::encoding::sortable;
use crate::fixed_width_option;
use crate::record::FieldKind;

fixed_width_option! {
    /// A nullable `f32`.
    Float(f32),
    kind: FieldKind::Float,
    width: FLOAT_WIDTH,
    encode: sortable::encode_f32,
    decode: sortable::decode_f32,
    key: |v| -> u32 { u32::from_be_bytes(sortable::encode_f32(v)) },
}

fixed_width_option! {
    /// A nullable `f64`.
    Double(f64),
    kind: FieldKind::Double,
    width: DOUBLE_WIDTH,
    encode: sortable::encode_f64,
    decode: sortable::decode_f64,
    key: |v| -> u64 { u64::from_be_bytes(sortable::encode_f64(v)) },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::ValueOption;
    use std::cmp::Ordering;

    #[test]
    fn ordering_matches_total_cmp() {
        let values = [
            f64::NEG_INFINITY,
            f64::MIN,
            -1.0,
            -0.0,
            0.0,
            f64::MIN_POSITIVE,
            1.0,
            f64::MAX,
            f64::INFINITY,
            f64::NAN,
        ];
        for &a in &values {
            for &b in &values {
                let (oa, ob) = (DoubleOption::of(a), DoubleOption::of(b));
                assert_eq!(oa.cmp(&ob), a.total_cmp(&b), "{} vs {}", a, b);
                let (ea, eb) = (oa.to_bytes(), ob.to_bytes());
                assert_eq!(
                    DoubleOption::compare_bytes(&ea, 0, ea.len(), &eb, 0, eb.len()),
                    a.total_cmp(&b)
                );
            }
        }
    }

    #[test]
    fn signed_zeros_are_distinct() {
        assert_ne!(FloatOption::of(-0.0), FloatOption::of(0.0));
        assert_eq!(FloatOption::of(f32::NAN), FloatOption::of(f32::NAN));
    }

    #[test]
    fn extremes_round_trip_bit_exact() {
        for v in [f32::MIN, f32::MAX, f32::MIN_POSITIVE, -0.0, f32::INFINITY] {
            let bytes = FloatOption::of(v).to_bytes();
            let mut slot = FloatOption::new();
            slot.restore(&bytes, 0, bytes.len()).unwrap();
            assert_eq!(slot.get().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn nan_payload_survives_stream() {
        let mut out = Vec::new();
        DoubleOption::of(f64::NAN).write(&mut out).unwrap();
        let mut slot = DoubleOption::new();
        slot.read_fields(&mut out.as_slice()).unwrap();
        assert!(slot.get().is_nan());
    }

    #[test]
    fn null_sorts_after_nan() {
        assert_eq!(
            DoubleOption::of(f64::NAN).cmp(&DoubleOption::new()),
            Ordering::Less
        );
    }
}
