//! Nullable fixed-width integers.
//!
//! Payloads are stored big-endian with the sign bit flipped, so the raw bytes
//! of two encoded values compare like the integers themselves.

use crate::config::{BYTE_WIDTH, INT_WIDTH, LONG_WIDTH, SHORT_WIDTH};
use crate::encoding::sortable;
use crate::fixed_width_option;
use crate::record::FieldKind;

fixed_width_option! {
    /// A nullable `i8`.
    Byte(i8),
    kind: FieldKind::Byte,
    width: BYTE_WIDTH,
    encode: sortable::encode_i8,
    decode: sortable::decode_i8,
    key: |v| -> i8 { v },
}

fixed_width_option! {
    /// A nullable `i16`.
    Short(i16),
    kind: FieldKind::Short,
    width: SHORT_WIDTH,
    encode: sortable::encode_i16,
    decode: sortable::decode_i16,
    key: |v| -> i16 { v },
}

fixed_width_option! {
    /// A nullable `i32`.
    Int(i32),
    kind: FieldKind::Int,
    width: INT_WIDTH,
    encode: sortable::encode_i32,
    decode: sortable::decode_i32,
    key: |v| -> i32 { v },
}

fixed_width_option! {
    /// A nullable `i64`.
    Long(i64),
    kind: FieldKind::Long,
    width: LONG_WIDTH,
    encode: sortable::encode_i64,
    decode: sortable::decode_i64,
    key: |v| -> i64 { v },
}

macro_rules! integer_arithmetic {
    ($option:ident, $int:ty) => {
        impl $option {
            /// Adds `delta` to the payload.
            ///
            /// # Panics
            ///
            /// Panics if the slot is null, or on overflow in debug builds.
            pub fn add(&mut self, delta: $int) -> &mut Self {
                let current = self.get();
                self.value = Some(current + delta);
                self
            }

            /// Adds the payload of `other`; a null `other` leaves `self`
            /// unchanged.
            ///
            /// # Panics
            ///
            /// Panics if `self` is null while `other` is present.
            pub fn add_option(&mut self, other: &$option) -> &mut Self {
                if let Some(delta) = other.value {
                    self.add(delta);
                }
                self
            }
        }
    };
}

integer_arithmetic!(ByteOption, i8);
integer_arithmetic!(ShortOption, i16);
integer_arithmetic!(IntOption, i32);
integer_arithmetic!(LongOption, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::ValueOption;
    use std::cmp::Ordering;

    fn round_trip<T: ValueOption>(value: &T) -> T {
        let bytes = value.to_bytes();
        let mut restored = T::default();
        let end = restored.restore(&bytes, 0, bytes.len()).unwrap();
        assert_eq!(end, bytes.len());

        let mut streamed = T::default();
        streamed.read_fields(&mut bytes.as_slice()).unwrap();
        assert_eq!(restored, streamed);
        restored
    }

    #[test]
    fn default_is_null() {
        assert!(IntOption::default().is_null());
        assert!(ByteOption::new().is_null());
        assert_eq!(IntOption::new().to_string(), "null");
    }

    #[test]
    fn boundaries_round_trip() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(round_trip(&IntOption::of(v)).get(), v);
        }
        for v in [i64::MIN, 0, i64::MAX] {
            assert_eq!(round_trip(&LongOption::of(v)).get(), v);
        }
        for v in [i8::MIN, 0, i8::MAX] {
            assert_eq!(round_trip(&ByteOption::of(v)).get(), v);
        }
        for v in [i16::MIN, 0, i16::MAX] {
            assert_eq!(round_trip(&ShortOption::of(v)).get(), v);
        }
        assert!(round_trip(&IntOption::new()).is_null());
    }

    #[test]
    fn layout_is_marker_plus_flipped_big_endian() {
        assert_eq!(IntOption::of(1).to_bytes(), vec![0x01, 0x80, 0, 0, 1]);
        assert_eq!(IntOption::of(-1).to_bytes(), vec![0x01, 0x7F, 0xFF, 0xFF, 0xFF]);
        assert_eq!(IntOption::new().to_bytes(), vec![0xFF, 0, 0, 0, 0]);
        assert_eq!(ShortOption::new().to_bytes(), vec![0xFF, 0, 0]);
    }

    #[test]
    fn compare_bytes_agrees_with_ord() {
        let values = [
            LongOption::of(i64::MIN),
            LongOption::of(-5),
            LongOption::of(0),
            LongOption::of(7),
            LongOption::of(i64::MAX),
            LongOption::new(),
        ];
        for a in &values {
            for b in &values {
                let (ea, eb) = (a.to_bytes(), b.to_bytes());
                assert_eq!(
                    LongOption::compare_bytes(&ea, 0, ea.len(), &eb, 0, eb.len()),
                    a.cmp(b),
                    "{} vs {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn null_sorts_last() {
        assert_eq!(IntOption::of(i32::MAX).cmp(&IntOption::new()), Ordering::Less);
        assert_eq!(IntOption::new().cmp(&IntOption::of(i32::MIN)), Ordering::Greater);
        assert_eq!(IntOption::new().cmp(&IntOption::new()), Ordering::Equal);
    }

    #[test]
    fn or_and_modify() {
        let mut slot = IntOption::new();
        assert_eq!(slot.or(9), 9);
        slot.modify(3);
        assert_eq!(slot.or(9), 3);
        slot.modify_opt(None);
        assert!(slot.is_null());
        assert_eq!(IntOption::from(Some(4)).get(), 4);
    }

    #[test]
    #[should_panic(expected = "get() called on null IntOption")]
    fn get_on_null_panics() {
        IntOption::new().get();
    }

    #[test]
    fn add_and_add_option() {
        let mut total = LongOption::of(10);
        total.add(5).add_option(&LongOption::of(-3));
        total.add_option(&LongOption::new());
        assert_eq!(total.get(), 12);
    }

    #[test]
    #[should_panic]
    fn add_to_null_panics() {
        ShortOption::new().add(1);
    }

    #[test]
    fn restore_reports_truncation_and_bad_marker() {
        let mut slot = IntOption::new();
        assert!(slot.restore(&[0x01, 0x80, 0], 0, 3).is_err());
        assert!(slot.restore(&[0x07, 0, 0, 0, 0], 0, 5).is_err());
        assert!(IntOption::bytes_length(&[0x01, 0, 0, 0, 0], 1, 5).is_err());
    }

    #[test]
    fn dirty_null_padding_is_rejected_by_every_decoder() {
        let dirty = [0xFF, 0, 0, 0, 1];
        let mut slot = IntOption::of(9);
        assert!(slot.restore(&dirty, 0, 5).is_err());
        assert!(IntOption::bytes_length(&dirty, 0, 5).is_err());
        let err = slot.read_fields(&mut &dirty[..]).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert_eq!(slot.get(), 9);
    }

    #[test]
    fn restore_walks_packed_values() {
        let mut buf = Vec::new();
        for v in [3, -4, 5] {
            IntOption::of(v).write(&mut buf).unwrap();
        }
        IntOption::new().write(&mut buf).unwrap();

        let mut slot = IntOption::new();
        let mut offset = 0;
        let mut seen = Vec::new();
        while offset < buf.len() {
            offset = slot.restore(&buf, offset, buf.len()).unwrap();
            seen.push(slot.as_option());
        }
        assert_eq!(seen, vec![Some(3), Some(-4), Some(5), None]);
    }
}
