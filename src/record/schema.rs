//! # Record Schema
//!
//! `RecordSchema` fixes the ordered field kinds of a record and knows how to
//! measure and compare encoded records without materializing them.
//!
//! ## Schema Internals
//!
//! - `fields`: ordered field definitions
//! - `by_name`: field name to index
//! - `fixed_offsets`: byte offset of each field inside an encoded record, known
//!   only while every preceding field is fixed-width
//! - `fixed_size`: total encoded width when every field is fixed-width

use std::cmp::Ordering;
use std::ops::Range;

use eyre::{Result, WrapErr};
use hashbrown::HashMap;

use super::types::{FieldDef, FieldKind};

#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub(crate) fields: Vec<FieldDef>,
    pub(crate) by_name: HashMap<String, usize>,
    pub(crate) fixed_offsets: Vec<Option<usize>>,
    pub(crate) fixed_size: Option<usize>,
}

impl RecordSchema {
    /// # Panics
    ///
    /// Panics if two fields share a name.
    pub fn new(fields: Vec<FieldDef>) -> Self {
        let mut by_name = HashMap::with_capacity(fields.len());
        let mut fixed_offsets = Vec::with_capacity(fields.len());
        let mut offset = Some(0usize);

        for (idx, field) in fields.iter().enumerate() {
            let previous = by_name.insert(field.name.clone(), idx);
            assert!(previous.is_none(), "duplicate field name {:?}", field.name);
            fixed_offsets.push(offset);
            offset = offset.zip(field.kind.fixed_size()).map(|(o, w)| o + w);
        }

        Self {
            fields,
            by_name,
            fixed_offsets,
            fixed_size: offset,
        }
    }

    /// Builds a schema from `(name, kind)` pairs.
    pub fn of<S: Into<String>>(fields: impl IntoIterator<Item = (S, FieldKind)>) -> Self {
        Self::new(
            fields
                .into_iter()
                .map(|(name, kind)| FieldDef::new(name, kind))
                .collect(),
        )
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, idx: usize) -> Option<&FieldDef> {
        self.fields.get(idx)
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn kinds(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.fields.iter().map(|f| f.kind)
    }

    /// Encoded width of every record of this schema, when all fields are
    /// fixed-width.
    pub fn fixed_size(&self) -> Option<usize> {
        self.fixed_size
    }

    /// Width of the encoded record starting at `offset`.
    pub fn bytes_length(&self, buf: &[u8], offset: usize, limit: usize) -> Result<usize> {
        let mut pos = offset;
        for field in &self.fields {
            pos += field
                .kind
                .bytes_length(buf, pos, limit)
                .wrap_err_with(|| format!("field {:?} ({})", field.name, field.kind))?;
        }
        Ok(pos - offset)
    }

    /// Byte range of field `idx` inside the encoded record at `offset`.
    ///
    /// Fields behind a fixed-width prefix are located directly; the rest walk
    /// the preceding fields.
    pub fn field_range(
        &self,
        buf: &[u8],
        offset: usize,
        limit: usize,
        idx: usize,
    ) -> Result<Range<usize>> {
        let Some(field) = self.fields.get(idx) else {
            eyre::bail!(
                "field index {} out of range for {} fields",
                idx,
                self.fields.len()
            );
        };
        let start = match self.fixed_offsets[idx] {
            Some(relative) => offset + relative,
            None => {
                let mut pos = offset;
                for previous in &self.fields[..idx] {
                    pos += previous.kind.bytes_length(buf, pos, limit)?;
                }
                pos
            }
        };
        let len = field.kind.bytes_length(buf, start, limit)?;
        Ok(start..start + len)
    }

    /// Compares two encoded records field by field, in schema order.
    ///
    /// # Panics
    ///
    /// Panics if either window does not hold a well-formed record.
    pub fn compare_bytes(
        &self,
        a: &[u8],
        a_offset: usize,
        a_length: usize,
        b: &[u8],
        b_offset: usize,
        b_length: usize,
    ) -> Ordering {
        let (a_end, b_end) = (a_offset + a_length, b_offset + b_length);
        let (mut pa, mut pb) = (a_offset, b_offset);
        for field in &self.fields {
            let la = measure(field, a, pa, a_end);
            let lb = measure(field, b, pb, b_end);
            match field.kind.compare_bytes(a, pa, la, b, pb, lb) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
            pa += la;
            pb += lb;
        }
        Ordering::Equal
    }
}

fn measure(field: &FieldDef, buf: &[u8], offset: usize, limit: usize) -> usize {
    match field.kind.bytes_length(buf, offset, limit) {
        Ok(len) => len,
        Err(e) => panic!("malformed {} field {:?}: {:#}", field.kind, field.name, e),
    }
}

impl PartialEq for RecordSchema {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for RecordSchema {}
