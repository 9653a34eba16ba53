//! The three LDIF change-record kinds and their block renderers.
//!
//! Each record validates its distinguished name (and payload rules) at
//! construction; `dump()` is a pure function of validated state and
//! cannot fail.

use std::fmt;

use crate::data::{LdifAttribute, ModSpec};
use crate::encode::{value_spec_checked, wrap};
use crate::error::{Error, Result};

/// Which LDIF block shape a record renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Add,
    Modify,
    Delete,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeType::Add => "add",
            ChangeType::Modify => "modify",
            ChangeType::Delete => "delete",
        })
    }
}

fn check_dn(distinguished_name: &str) -> Result<()> {
    if distinguished_name.trim().is_empty() {
        return Err(Error::EmptyDistinguishedName);
    }
    Ok(())
}

fn push_dn_line(out: &mut String, distinguished_name: &str) {
    out.push_str(&wrap(&format!("dn: {}", distinguished_name)));
    out.push('\n');
}

/// An add record: a DN with the attributes of the new entry.
///
/// Add is the LDIF default change type, so `dump()` emits no
/// `changetype` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAdd {
    distinguished_name: String,
    attributes: Vec<LdifAttribute>,
}

impl ChangeAdd {
    pub fn new(distinguished_name: &str, attributes: Vec<LdifAttribute>) -> Result<ChangeAdd> {
        check_dn(distinguished_name)?;
        Ok(ChangeAdd {
            distinguished_name: distinguished_name.to_string(),
            attributes,
        })
    }

    pub fn distinguished_name(&self) -> &str {
        &self.distinguished_name
    }

    pub fn change(&self) -> ChangeType {
        ChangeType::Add
    }

    pub fn attributes(&self) -> &[LdifAttribute] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Look up an attribute by type. Case-sensitive; with duplicate types
    /// the first match wins.
    pub fn attribute(&self, attribute_type: &str) -> Option<&LdifAttribute> {
        self.attributes
            .iter()
            .find(|a| a.attribute_type() == attribute_type)
    }

    pub fn contains(&self, attribute_type: &str) -> bool {
        self.attribute(attribute_type).is_some()
    }

    pub fn attribute_types(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.attribute_type())
    }

    /// Render the complete LDIF add block.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        push_dn_line(&mut out, &self.distinguished_name);
        for attribute in &self.attributes {
            for value in attribute.values() {
                out.push_str(&wrap(&value_spec_checked(attribute.attribute_type(), value)));
                out.push('\n');
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a ChangeAdd {
    type Item = &'a LdifAttribute;
    type IntoIter = std::slice::Iter<'a, LdifAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

/// A modify record: a DN with an ordered, non-empty list of mod-specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeModify {
    distinguished_name: String,
    mod_specs: Vec<ModSpec>,
}

impl ChangeModify {
    pub fn new(distinguished_name: &str, mod_specs: Vec<ModSpec>) -> Result<ChangeModify> {
        check_dn(distinguished_name)?;
        if mod_specs.is_empty() {
            return Err(Error::EmptyModSpecs);
        }
        Ok(ChangeModify {
            distinguished_name: distinguished_name.to_string(),
            mod_specs,
        })
    }

    pub fn distinguished_name(&self) -> &str {
        &self.distinguished_name
    }

    pub fn change(&self) -> ChangeType {
        ChangeType::Modify
    }

    pub fn mod_specs(&self) -> &[ModSpec] {
        &self.mod_specs
    }

    pub fn len(&self) -> usize {
        self.mod_specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mod_specs.is_empty()
    }

    /// Render the complete LDIF modify block. Every mod-spec, the last
    /// included, is followed by its `-` separator line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        push_dn_line(&mut out, &self.distinguished_name);
        out.push_str("changetype: modify\n");
        for spec in &self.mod_specs {
            spec.render(&mut out);
        }
        out
    }
}

impl<'a> IntoIterator for &'a ChangeModify {
    type Item = &'a ModSpec;
    type IntoIter = std::slice::Iter<'a, ModSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.mod_specs.iter()
    }
}

/// A delete record: a DN and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDelete {
    distinguished_name: String,
}

impl ChangeDelete {
    pub fn new(distinguished_name: &str) -> Result<ChangeDelete> {
        check_dn(distinguished_name)?;
        Ok(ChangeDelete {
            distinguished_name: distinguished_name.to_string(),
        })
    }

    pub fn distinguished_name(&self) -> &str {
        &self.distinguished_name
    }

    pub fn change(&self) -> ChangeType {
        ChangeType::Delete
    }

    /// Render the complete LDIF delete block.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        push_dn_line(&mut out, &self.distinguished_name);
        out.push_str("changetype: delete\n");
        out
    }
}

/// Any change record, for callers that collect heterogeneous records
/// into one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRecord {
    Add(ChangeAdd),
    Modify(ChangeModify),
    Delete(ChangeDelete),
}

impl ChangeRecord {
    pub fn distinguished_name(&self) -> &str {
        match self {
            ChangeRecord::Add(r) => r.distinguished_name(),
            ChangeRecord::Modify(r) => r.distinguished_name(),
            ChangeRecord::Delete(r) => r.distinguished_name(),
        }
    }

    pub fn change(&self) -> ChangeType {
        match self {
            ChangeRecord::Add(_) => ChangeType::Add,
            ChangeRecord::Modify(_) => ChangeType::Modify,
            ChangeRecord::Delete(_) => ChangeType::Delete,
        }
    }

    pub fn dump(&self) -> String {
        match self {
            ChangeRecord::Add(r) => r.dump(),
            ChangeRecord::Modify(r) => r.dump(),
            ChangeRecord::Delete(r) => r.dump(),
        }
    }
}

impl From<ChangeAdd> for ChangeRecord {
    fn from(record: ChangeAdd) -> ChangeRecord {
        ChangeRecord::Add(record)
    }
}

impl From<ChangeModify> for ChangeRecord {
    fn from(record: ChangeModify) -> ChangeRecord {
        ChangeRecord::Modify(record)
    }
}

impl From<ChangeDelete> for ChangeRecord {
    fn from(record: ChangeDelete) -> ChangeRecord {
        ChangeRecord::Delete(record)
    }
}
