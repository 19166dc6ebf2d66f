use core::fmt;

// -----------------------------------------------------------------------------
// DataMemberMode

/// How the emitter should (de)serialize a member.
///
/// Values match the underlying constants of the framework's mode enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum DataMemberMode {
    /// Let the emitter pick `Assign` or `Content` from the member type.
    Default = 0,
    /// Deserialize a new value and assign it.
    Assign = 1,
    /// Deserialize into the existing instance; the member may be read-only.
    Content = 2,
    /// Serialize as an opaque binary blob.
    Binary = 3,
    /// Never serialize the member.
    Never = 4,
}

impl DataMemberMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Assign => "Assign",
            Self::Content => "Content",
            Self::Binary => "Binary",
            Self::Never => "Never",
        }
    }
}

impl TryFrom<i64> for DataMemberMode {
    type Error = i64;

    /// Returns the unrecognized value on failure.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Default),
            1 => Ok(Self::Assign),
            2 => Ok(Self::Content),
            3 => Ok(Self::Binary),
            4 => Ok(Self::Never),
            _ => Err(value),
        }
    }
}

impl fmt::Display for DataMemberMode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
