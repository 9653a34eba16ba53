/// Construction-time contract violations.
///
/// Every failure in this crate is reported eagerly by a constructor; a
/// record that exists is always dumpable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("distinguished name must not be empty or whitespace")]
    EmptyDistinguishedName,

    #[error("attribute type must not be empty or whitespace")]
    EmptyAttributeType,

    #[error("a modify record requires at least one mod-spec")]
    EmptyModSpecs,

    #[error("an add mod-spec requires at least one attribute value")]
    EmptyModSpecAdd,
}

pub type Result<T> = std::result::Result<T, Error>;
