//! RFC2849 LDIF change-record writer.
//!
//! Builds add, modify and delete change records in memory and dumps them as
//! spec-compliant LDIF text: values that are not SAFE-STRINGs are
//! base64-encoded, long lines are folded at [`MAX_LINE_LENGTH`] columns, and
//! every record validates its inputs at construction so `dump()` can never
//! fail. No parsing, no I/O; callers write the produced text wherever they
//! need it.
//!
//! ```
//! use ldifgen::{ChangeAdd, LdifAttribute};
//!
//! let attributes = vec![
//!     LdifAttribute::new("objectClass", vec!["top".into(), "person".into()])?,
//!     LdifAttribute::new("sn", vec!["Wirth".into()])?,
//! ];
//! let record = ChangeAdd::new("cn=Niklaus Wirth,dc=example,dc=com", attributes)?;
//! assert_eq!(
//!     record.dump(),
//!     "dn: cn=Niklaus Wirth,dc=example,dc=com\n\
//!      objectClass: top\n\
//!      objectClass: person\n\
//!      sn: Wirth\n"
//! );
//! # Ok::<(), ldifgen::Error>(())
//! ```

pub mod data;
pub mod encode;
pub mod error;
pub mod records;

pub use data::{AttributeValue, LdifAttribute, ModSpec, ModSpecType};
pub use encode::{is_safe_init_char, is_safe_string, value_spec, wrap, MAX_LINE_LENGTH};
pub use error::{Error, Result};
pub use records::{ChangeAdd, ChangeDelete, ChangeModify, ChangeRecord, ChangeType};
