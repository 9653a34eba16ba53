//! Data model for change records: attribute values, attributes, mod-specs.
//!
//! Everything here is immutable after construction; validation happens in
//! the constructors so rendering can never fail.

use std::fmt;

use crate::encode::{value_spec_checked, wrap};
use crate::error::{Error, Result};

/// One attribute value: either text or raw bytes.
///
/// No normalization is performed; values render in exactly the form and
/// order they were supplied. Bytes are always base64-encoded on output,
/// text only when it is not an LDIF SAFE-STRING.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> AttributeValue {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> AttributeValue {
        AttributeValue::Text(value)
    }
}

impl From<&[u8]> for AttributeValue {
    fn from(value: &[u8]) -> AttributeValue {
        AttributeValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(value: Vec<u8>) -> AttributeValue {
        AttributeValue::Bytes(value)
    }
}

/// An attribute type with its ordered values, as carried by an add record.
///
/// Order is output order. Uniqueness of the type within a record is not
/// enforced; duplicates simply render as repeated lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdifAttribute {
    attribute_type: String,
    values: Vec<AttributeValue>,
}

impl LdifAttribute {
    pub fn new(attribute_type: &str, values: Vec<AttributeValue>) -> Result<LdifAttribute> {
        if attribute_type.trim().is_empty() {
            return Err(Error::EmptyAttributeType);
        }
        Ok(LdifAttribute {
            attribute_type: attribute_type.to_string(),
            values,
        })
    }

    pub fn attribute_type(&self) -> &str {
        &self.attribute_type
    }

    pub fn values(&self) -> &[AttributeValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a LdifAttribute {
    type Item = &'a AttributeValue;
    type IntoIter = std::slice::Iter<'a, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// The semantics of one modify sub-operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModSpecType {
    Add,
    Replace,
    Delete,
}

impl fmt::Display for ModSpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModSpecType::Add => "add",
            ModSpecType::Replace => "replace",
            ModSpecType::Delete => "delete",
        })
    }
}

/// One mod-spec of a modify record: operation, attribute type and the
/// ordered values it applies to.
///
/// The banner line uses the attribute type; the value lines use the
/// attribute description, which defaults to the type and exists so an
/// option such as `;binary` can be attached to values without changing
/// the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModSpec {
    mod_spec_type: ModSpecType,
    attribute_type: String,
    attribute_description: String,
    values: Vec<AttributeValue>,
}

impl ModSpec {
    /// Build a mod-spec whose attribute description equals its type.
    pub fn new(
        mod_spec_type: ModSpecType,
        attribute_type: &str,
        values: Vec<AttributeValue>,
    ) -> Result<ModSpec> {
        ModSpec::with_description(mod_spec_type, attribute_type, attribute_type, values)
    }

    /// Build a mod-spec with a distinct attribute description for the
    /// value lines, e.g. `userCertificate;binary`.
    ///
    /// An `Add` mod-spec must carry at least one value; `Replace` and
    /// `Delete` accept an empty value list (meaning "all values").
    pub fn with_description(
        mod_spec_type: ModSpecType,
        attribute_type: &str,
        attribute_description: &str,
        values: Vec<AttributeValue>,
    ) -> Result<ModSpec> {
        if attribute_type.trim().is_empty() || attribute_description.trim().is_empty() {
            return Err(Error::EmptyAttributeType);
        }
        if mod_spec_type == ModSpecType::Add && values.is_empty() {
            return Err(Error::EmptyModSpecAdd);
        }
        Ok(ModSpec {
            mod_spec_type,
            attribute_type: attribute_type.to_string(),
            attribute_description: attribute_description.to_string(),
            values,
        })
    }

    pub fn mod_spec_type(&self) -> ModSpecType {
        self.mod_spec_type
    }

    pub fn attribute_type(&self) -> &str {
        &self.attribute_type
    }

    pub fn attribute_description(&self) -> &str {
        &self.attribute_description
    }

    pub fn values(&self) -> &[AttributeValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append the banner line, value lines and `-` separator to `out`.
    pub(crate) fn render(&self, out: &mut String) {
        out.push_str(&wrap(&format!(
            "{}: {}",
            self.mod_spec_type, self.attribute_type
        )));
        out.push('\n');
        for value in &self.values {
            out.push_str(&wrap(&value_spec_checked(&self.attribute_description, value)));
            out.push('\n');
        }
        out.push_str("-\n");
    }
}

impl<'a> IntoIterator for &'a ModSpec {
    type Item = &'a AttributeValue;
    type IntoIter = std::slice::Iter<'a, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for ModSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.mod_spec_type, self.attribute_type)
    }
}
