//! Nullable boolean; `false < true`, encoded as one payload byte.

use crate::config::BOOLEAN_WIDTH;
use crate::fixed_width_option;
use crate::record::FieldKind;

fixed_width_option! {
    /// A nullable `bool`.
    Boolean(bool),
    kind: FieldKind::Boolean,
    width: BOOLEAN_WIDTH,
    encode: |v: bool| [v as u8],
    decode: |b: [u8; 1]| b[0] != 0,
    key: |v| -> bool { v },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::ValueOption;

    #[test]
    fn layout() {
        assert_eq!(BooleanOption::of(false).to_bytes(), vec![0x01, 0x00]);
        assert_eq!(BooleanOption::of(true).to_bytes(), vec![0x01, 0x01]);
        assert_eq!(BooleanOption::new().to_bytes(), vec![0xFF, 0x00]);
    }

    #[test]
    fn order_and_round_trip() {
        let values = [
            BooleanOption::of(false),
            BooleanOption::of(true),
            BooleanOption::new(),
        ];
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for v in &values {
            let bytes = v.to_bytes();
            let mut slot = BooleanOption::of(true);
            slot.read_fields(&mut bytes.as_slice()).unwrap();
            assert_eq!(&slot, v);
        }
    }

    #[test]
    fn display() {
        assert_eq!(BooleanOption::of(true).to_string(), "true");
        assert_eq!(BooleanOption::new().to_string(), "null");
    }
}
