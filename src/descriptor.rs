//! The descriptor of an AMQP 1.0 described type: `0x00` followed by either a `symbol` name or a
//! `ulong` code, then the value itself (§4.6).
//!
//! Every section this crate emits (`Header`, `Properties`, `Data`, `AmqpSequence`, `AmqpValue`)
//! uses the small-ulong code form exclusively, so [`crate::encode::encode_descriptor`] only ever
//! writes the `Code` variant on the write path; `Name` is kept because other AMQP
//! implementations (amqp.net lite, go-amqp, qpid-proton) use a symbolic descriptor name
//! interchangeably with the numeric code for the same described type, and a caller assembling
//! custom described types may want to emit one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// A symbolic descriptor name, e.g. `"amqp:header:list"`.
    Name(crate::primitives::Symbol),
    /// A numeric descriptor code, e.g. `0x70` for `Header`.
    Code(u64),
}

impl From<u64> for Descriptor {
    fn from(code: u64) -> Self {
        Descriptor::Code(code)
    }
}

impl From<crate::primitives::Symbol> for Descriptor {
    fn from(name: crate::primitives::Symbol) -> Self {
        Descriptor::Name(name)
    }
}
