//! Mutable records: one `AnyOption` slot per schema field.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};
use std::sync::Arc;

use eyre::{Result, WrapErr};

use super::any::AnyOption;
use super::schema::RecordSchema;
use crate::error::CollectionError;

#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<RecordSchema>,
    fields: Vec<AnyOption>,
}

impl Record {
    /// A record with every field null.
    pub fn new(schema: Arc<RecordSchema>) -> Self {
        let fields = schema.kinds().map(AnyOption::null).collect();
        Self { schema, fields }
    }

    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, idx: usize) -> Option<&AnyOption> {
        self.fields.get(idx)
    }

    pub fn field_mut(&mut self, idx: usize) -> Option<&mut AnyOption> {
        self.fields.get_mut(idx)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&AnyOption> {
        self.schema.index_of(name).map(|idx| &self.fields[idx])
    }

    pub fn field_by_name_mut(&mut self, name: &str) -> Option<&mut AnyOption> {
        let idx = self.schema.index_of(name)?;
        Some(&mut self.fields[idx])
    }

    /// Replaces field `idx` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not of the field's kind.
    pub fn set(&mut self, idx: usize, value: &AnyOption) -> Result<(), CollectionError> {
        let len = self.fields.len();
        let slot = self
            .fields
            .get_mut(idx)
            .ok_or(CollectionError::IndexOutOfRange { index: idx, len })?;
        slot.copy_from(value);
        Ok(())
    }

    pub fn fields(&self) -> &[AnyOption] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [AnyOption] {
        &mut self.fields
    }

    /// Sets every field to null.
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(AnyOption::set_null);
    }

    /// Deep-copies every field of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the field kinds of the two records differ.
    pub fn copy_from(&mut self, other: &Record) {
        assert_eq!(
            self.fields.len(),
            other.fields.len(),
            "copy_from between records of different arity"
        );
        for (target, source) in self.fields.iter_mut().zip(&other.fields) {
            target.copy_from(source);
        }
    }

    pub fn encoded_len(&self) -> usize {
        self.fields.iter().map(AnyOption::encoded_len).sum()
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for field in &self.fields {
            field.write(out)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        let _ = self.write(&mut out);
        out
    }

    pub fn read_fields<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<()> {
        for field in &mut self.fields {
            field.read_fields(input)?;
        }
        Ok(())
    }

    /// Decodes every field from `buf[offset..limit]` and returns the offset
    /// just past the record.
    pub fn restore(&mut self, buf: &[u8], offset: usize, limit: usize) -> Result<usize> {
        let mut pos = offset;
        for (field, def) in self.fields.iter_mut().zip(self.schema.fields()) {
            pos = field
                .restore(buf, pos, limit)
                .wrap_err_with(|| format!("field {:?} ({})", def.name(), def.kind()))?;
        }
        Ok(pos)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for Record {}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fields.cmp(&other.fields)
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (idx, field) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", field)?;
        }
        f.write_str(")")
    }
}
