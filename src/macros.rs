//! # Internal Macros
//!
//! ## fixed_width_option!
//!
//! Generates a nullable slot type for a `Copy` payload with a fixed-width,
//! byte-order-preserving encoding. The generated type gets:
//!
//! - `new`, `of`, `get`, `or`, `modify`, `modify_opt`, `as_option`
//! - `Ord`, `Eq` and `Hash` through a sort key, with null last
//! - `Display` ("null" for null), `From<T>` and `From<Option<T>>`
//! - a full [`ValueOption`](crate::option::ValueOption) implementation
//!
//! ### Usage
//!
//! ```ignore
//! fixed_width_option! {
//!     /// A nullable `i32`.
//!     Int(i32),
//!     kind: FieldKind::Int,
//!     width: INT_WIDTH,
//!     encode: sortable::encode_i32,
//!     decode: sortable::decode_i32,
//!     key: |v| -> i32 { v },
//! }
//!
//! // Generates `pub struct IntOption`.
//! ```
//!
//! The sort key must order exactly like the encoded payload bytes; that is
//! what keeps `compare_bytes` sign-consistent with `Ord`.

#[macro_export]
macro_rules! fixed_width_option {
    (
        $(#[$meta:meta])*
        $kind:ident($value:ty),
        kind: $field_kind:expr,
        width: $width:expr,
        encode: $encode:expr,
        decode: $decode:expr,
        key: |$v:ident| -> $key:ty $key_body:block $(,)?
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct [<$kind Option>] {
                value: Option<$value>,
            }

            impl [<$kind Option>] {
                /// A null slot.
                pub const fn new() -> Self {
                    Self { value: None }
                }

                pub const fn of(value: $value) -> Self {
                    Self { value: Some(value) }
                }

                /// Returns the payload.
                ///
                /// # Panics
                ///
                /// Panics if the slot is null.
                #[inline]
                pub fn get(&self) -> $value {
                    match self.value {
                        Some(v) => v,
                        None => panic!(concat!(
                            "get() called on null ",
                            stringify!([<$kind Option>])
                        )),
                    }
                }

                #[inline]
                pub fn or(&self, fallback: $value) -> $value {
                    self.value.unwrap_or(fallback)
                }

                #[inline]
                pub fn modify(&mut self, value: $value) -> &mut Self {
                    self.value = Some(value);
                    self
                }

                #[inline]
                pub fn modify_opt(&mut self, value: Option<$value>) -> &mut Self {
                    self.value = value;
                    self
                }

                #[inline]
                pub fn as_option(&self) -> Option<$value> {
                    self.value
                }

                #[inline]
                fn sort_key(&self) -> Option<$key> {
                    self.value.map(|$v| $key_body)
                }

                fn encode_fixed(&self) -> [u8; $width] {
                    let mut out = [0u8; $width];
                    match self.value {
                        Some(v) => {
                            out[0] = $crate::config::PRESENT_MARKER;
                            out[1..].copy_from_slice(&($encode)(v));
                        }
                        None => out[0] = $crate::config::NULL_MARKER,
                    }
                    out
                }
            }

            impl Ord for [<$kind Option>] {
                fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                    $crate::option::compare_null_last(self.sort_key(), other.sort_key())
                }
            }

            impl PartialOrd for [<$kind Option>] {
                fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl PartialEq for [<$kind Option>] {
                fn eq(&self, other: &Self) -> bool {
                    self.sort_key() == other.sort_key()
                }
            }

            impl Eq for [<$kind Option>] {}

            impl ::std::hash::Hash for [<$kind Option>] {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(&self.sort_key(), state);
                }
            }

            impl ::std::fmt::Display for [<$kind Option>] {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    match self.value {
                        Some(v) => ::std::fmt::Display::fmt(&v, f),
                        None => f.write_str("null"),
                    }
                }
            }

            impl From<$value> for [<$kind Option>] {
                fn from(value: $value) -> Self {
                    Self::of(value)
                }
            }

            impl From<Option<$value>> for [<$kind Option>] {
                fn from(value: Option<$value>) -> Self {
                    Self { value }
                }
            }

            impl $crate::option::ValueOption for [<$kind Option>] {
                const KIND: $crate::record::FieldKind = $field_kind;

                #[inline]
                fn is_null(&self) -> bool {
                    self.value.is_none()
                }

                #[inline]
                fn set_null(&mut self) {
                    self.value = None;
                }

                fn encoded_len(&self) -> usize {
                    $width
                }

                fn write<W: ::std::io::Write + ?Sized>(
                    &self,
                    out: &mut W,
                ) -> ::std::io::Result<()> {
                    out.write_all(&self.encode_fixed())
                }

                fn read_fields<R: ::std::io::Read + ?Sized>(
                    &mut self,
                    input: &mut R,
                ) -> ::std::io::Result<()> {
                    let mut buf = [0u8; $width];
                    input.read_exact(&mut buf)?;
                    self.value = if $crate::encoding::marker_from_stream(buf[0])? {
                        $crate::encoding::null_padding_from_stream(&buf)?;
                        None
                    } else {
                        Some(($decode)($crate::encoding::sortable::read_array(&buf, 1)))
                    };
                    Ok(())
                }

                fn restore(
                    &mut self,
                    buf: &[u8],
                    offset: usize,
                    limit: usize,
                ) -> ::eyre::Result<usize> {
                    $crate::encoding::ensure_fixed(buf, offset, limit, $width)?;
                    self.value = if buf[offset] == $crate::config::NULL_MARKER {
                        None
                    } else {
                        Some(($decode)($crate::encoding::sortable::read_array(buf, offset + 1)))
                    };
                    Ok(offset + $width)
                }

                fn bytes_length(buf: &[u8], offset: usize, limit: usize) -> ::eyre::Result<usize> {
                    $crate::encoding::ensure_fixed(buf, offset, limit, $width)?;
                    Ok($width)
                }

                fn compare_bytes(
                    a: &[u8],
                    a_offset: usize,
                    a_length: usize,
                    b: &[u8],
                    b_offset: usize,
                    b_length: usize,
                ) -> ::std::cmp::Ordering {
                    $crate::option::compare_fixed(
                        $width, a, a_offset, a_length, b, b_offset, b_length,
                    )
                }
            }
        }
    };
}
