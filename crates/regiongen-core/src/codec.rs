//! Reference codec for the persisted binary record layout
//!
//! Mirrors what the binary serialize/deserialize shapes emit: one value per
//! persisted field in declaration order, no tags, no field count. Order is
//! the only framing, so a reader built from the same schema consumes exactly
//! what the writer produced.
//!
//! | Encoding   | Bytes                                              |
//! |------------|----------------------------------------------------|
//! | Boolean    | 1 byte, 0 or 1                                     |
//! | Int32      | 4 bytes, little endian                             |
//! | Single     | 4 bytes, IEEE 754 little endian                    |
//! | Utf16      | i32 code-unit count, then UTF-16LE code units      |
//! | Vector3    | 3 × Single (x, y, z)                               |
//! | Quaternion | 4 × Single (x, y, z, w)                            |
//! | Color      | 4 × Single (r, g, b, a)                            |

use crate::error::{Behavior, GenError, GenResult};
use crate::schema::FieldDescriptor;
use crate::value::{BinaryEncoding, FieldValue};
use std::collections::BTreeMap;

/// Appends encoded values to a byte buffer
#[derive(Debug, Default)]
pub struct RecordWriter {
    buf: Vec<u8>,
}

impl RecordWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, encoding: BinaryEncoding, value: &FieldValue) -> GenResult<()> {
        match (encoding, value) {
            (BinaryEncoding::Boolean, FieldValue::Boolean(b)) => self.buf.push(u8::from(*b)),
            (BinaryEncoding::Int32, FieldValue::Integer(i) | FieldValue::Enum(i)) => {
                self.buf.extend_from_slice(&i.to_le_bytes())
            }
            (BinaryEncoding::Single, FieldValue::Float(f)) => self.write_singles(&[*f]),
            (BinaryEncoding::Utf16, FieldValue::String(s)) => {
                let units: Vec<u16> = s.encode_utf16().collect();
                let count = i32::try_from(units.len())
                    .map_err(|_| GenError::Codec(format!("string of {} units too long", units.len())))?;
                self.buf.extend_from_slice(&count.to_le_bytes());
                for unit in units {
                    self.buf.extend_from_slice(&unit.to_le_bytes());
                }
            }
            (BinaryEncoding::Vector3, FieldValue::Vector3(v)) => self.write_singles(v),
            (BinaryEncoding::Quaternion, FieldValue::Quaternion(q)) => self.write_singles(q),
            (BinaryEncoding::Color, FieldValue::Color(c)) => self.write_singles(c),
            (encoding, value) => {
                return Err(GenError::Codec(format!(
                    "cannot write {} value with {encoding:?} encoding",
                    value.kind()
                )));
            }
        }
        Ok(())
    }

    fn write_singles(&mut self, values: &[f32]) {
        for v in values {
            self.buf.extend_from_slice(&v.to_le_bytes());
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Consumes encoded values from a byte slice
#[derive(Debug)]
pub struct RecordReader<'b> {
    buf: &'b [u8],
    pos: usize,
}

impl<'b> RecordReader<'b> {
    pub fn new(buf: &'b [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn read(&mut self, encoding: BinaryEncoding) -> GenResult<FieldValue> {
        Ok(match encoding {
            BinaryEncoding::Boolean => match self.take::<1>()? {
                [0] => FieldValue::Boolean(false),
                [1] => FieldValue::Boolean(true),
                [other] => {
                    return Err(GenError::Codec(format!("invalid boolean byte {other}")));
                }
            },
            BinaryEncoding::Int32 => FieldValue::Integer(i32::from_le_bytes(self.take()?)),
            BinaryEncoding::Single => FieldValue::Float(self.read_single()?),
            BinaryEncoding::Utf16 => {
                let count = i32::from_le_bytes(self.take()?);
                let count = usize::try_from(count)
                    .map_err(|_| GenError::Codec(format!("negative string length {count}")))?;
                let mut units = Vec::with_capacity(count.min(self.remaining() / 2));
                for _ in 0..count {
                    units.push(u16::from_le_bytes(self.take()?));
                }
                let s = String::from_utf16(&units).map_err(|e| GenError::Codec(e.to_string()))?;
                FieldValue::String(s)
            }
            BinaryEncoding::Vector3 => FieldValue::Vector3([
                self.read_single()?,
                self.read_single()?,
                self.read_single()?,
            ]),
            BinaryEncoding::Quaternion => FieldValue::Quaternion(self.read_singles4()?),
            BinaryEncoding::Color => FieldValue::Color(self.read_singles4()?),
        })
    }

    fn read_single(&mut self) -> GenResult<f32> {
        Ok(f32::from_le_bytes(self.take()?))
    }

    fn read_singles4(&mut self) -> GenResult<[f32; 4]> {
        Ok([
            self.read_single()?,
            self.read_single()?,
            self.read_single()?,
            self.read_single()?,
        ])
    }

    fn take<const N: usize>(&mut self) -> GenResult<[u8; N]> {
        let end = self.pos + N;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or_else(|| GenError::Codec(format!("record truncated at byte {}", self.pos)))?;
        self.pos = end;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

/// Encode `values` for `fields`, in field order
pub fn write_record<'a>(
    fields: impl IntoIterator<Item = &'a FieldDescriptor>,
    values: &BTreeMap<String, FieldValue>,
) -> GenResult<Vec<u8>> {
    let mut writer = RecordWriter::new();
    for field in fields {
        let encoding = field.value_type.require(
            &field.name,
            Behavior::BinaryWrite,
            field.value_type.binary_encoding(),
        )?;
        let value = values
            .get(&field.name)
            .ok_or_else(|| GenError::UnknownField(field.name.clone()))?;
        writer.write(encoding, value)?;
    }
    Ok(writer.into_bytes())
}

/// Decode a record written by [`write_record`] with the same field sequence.
///
/// Trailing bytes are an error: they mean the reader and writer disagree on
/// the field list.
pub fn read_record<'a>(
    fields: impl IntoIterator<Item = &'a FieldDescriptor>,
    bytes: &[u8],
) -> GenResult<BTreeMap<String, FieldValue>> {
    let mut reader = RecordReader::new(bytes);
    let mut values = BTreeMap::new();
    for field in fields {
        let encoding = field.value_type.require(
            &field.name,
            Behavior::BinaryRead,
            field.value_type.binary_encoding(),
        )?;
        values.insert(field.name.clone(), reader.read(encoding)?);
    }
    if reader.remaining() != 0 {
        return Err(GenError::Codec(format!(
            "{} trailing bytes after last field",
            reader.remaining()
        )));
    }
    Ok(values)
}

#[cfg(test)]
#[path = "codec/codec_tests.rs"]
mod codec_tests;
