use alloc::string::String;

use thiserror::Error;

use crate::model::{MemberRef, NamespaceRef, TypeRef};

// -----------------------------------------------------------------------------
// AnalysisError

/// Malformed input detected while describing a type.
///
/// Absent well-known symbols and repeated directives are not errors;
/// these variants are faults the driving generator should report as
/// compiler diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("{0} is not part of the semantic model")]
    UnknownType(TypeRef),

    #[error("{0} is not part of the semantic model")]
    UnknownMember(MemberRef),

    #[error("{0} is not part of the semantic model")]
    UnknownNamespace(NamespaceRef),

    #[error("namespace `{name}` appears among its own parents")]
    CyclicNamespace { name: String },

    #[error("type `{name}` appears in its own base type chain")]
    CyclicInheritance { name: String },

    #[error("member `{member}` uses data member mode {value}, which is not a known mode")]
    InvalidMode { member: String, value: i64 },

    #[error("member `{member}` declares order {value}, which does not fit in 32 bits")]
    InvalidOrder { member: String, value: i64 },

    #[error("the model cannot hold more than {} {what}s", u32::MAX)]
    TooManySymbols { what: &'static str },
}
