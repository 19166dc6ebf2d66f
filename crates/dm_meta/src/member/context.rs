use alloc::string::String;

use crate::member::DataMemberMode;
use crate::model::{MemberKind, MemberRef};

// -----------------------------------------------------------------------------
// MemberContext

/// The normalized directives of one candidate member.
///
/// A context with no overrides tells the emitter to apply its default
/// conventions. An ignored member keeps its recorded overrides, but
/// [`is_serialized`](Self::is_serialized) is always `false` for it.
///
/// The member itself is referenced by handle; a context never borrows the
/// semantic model.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemberContext {
    pub(super) member: MemberRef,
    pub(super) name: String,
    pub(super) kind: MemberKind,
    pub(super) ignored: bool,
    pub(super) mode: Option<DataMemberMode>,
    pub(super) name_override: Option<String>,
    pub(super) order_override: Option<i32>,
    pub(super) updatable: bool,
    pub(super) is_dictionary: bool,
}

impl MemberContext {
    /// Creates a context with every directive unset.
    pub fn new(member: MemberRef, name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            member,
            name: name.into(),
            kind,
            ignored: false,
            mode: None,
            name_override: None,
            order_override: None,
            updatable: false,
            is_dictionary: false,
        }
    }

    /// The underlying declaration.
    #[inline]
    pub const fn member(&self) -> MemberRef {
        self.member
    }

    /// The declared member name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn kind(&self) -> MemberKind {
        self.kind
    }

    #[inline]
    pub const fn ignored(&self) -> bool {
        self.ignored
    }

    #[inline]
    pub const fn mode(&self) -> Option<DataMemberMode> {
        self.mode
    }

    #[inline]
    pub fn name_override(&self) -> Option<&str> {
        self.name_override.as_deref()
    }

    #[inline]
    pub const fn order_override(&self) -> Option<i32> {
        self.order_override
    }

    #[inline]
    pub const fn updatable(&self) -> bool {
        self.updatable
    }

    /// `true` if the member type implements the generic dictionary interface.
    #[inline]
    pub const fn is_dictionary(&self) -> bool {
        self.is_dictionary
    }

    /// Returns `true` if a mode, name or order override is recorded.
    #[inline]
    pub const fn has_overrides(&self) -> bool {
        self.mode.is_some() || self.name_override.is_some() || self.order_override.is_some()
    }

    /// Returns `true` if no directive of any kind applies to the member.
    #[inline]
    pub const fn is_default(&self) -> bool {
        !self.ignored && !self.updatable && !self.has_overrides()
    }

    /// Returns `true` if the emitter should generate serialization code.
    ///
    /// The ignore directive wins over everything else.
    #[inline]
    pub fn is_serialized(&self) -> bool {
        !self.ignored && self.mode != Some(DataMemberMode::Never)
    }

    /// Returns `true` if the emitter should generate update accessors.
    #[inline]
    pub const fn is_update_target(&self) -> bool {
        !self.ignored && self.updatable
    }

    /// The name written to the serialized form.
    #[inline]
    pub fn serialized_name(&self) -> &str {
        self.name_override.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::MemberContext;
    use crate::member::DataMemberMode;
    use crate::model::{MemberKind, MemberRef};

    #[test]
    fn defaults() {
        let context = MemberContext::new(MemberRef::new(0), "Speed", MemberKind::Property);

        assert!(context.is_default());
        assert!(context.is_serialized());
        assert!(!context.is_update_target());
        assert_eq!(context.serialized_name(), "Speed");
    }

    #[test]
    fn ignore_wins() {
        let mut context = MemberContext::new(MemberRef::new(0), "Health", MemberKind::Field);
        context.ignored = true;
        context.updatable = true;
        context.mode = Some(DataMemberMode::Assign);
        context.name_override = Some("Hp".to_string());

        assert!(!context.is_serialized());
        assert!(!context.is_update_target());
        assert_eq!(context.serialized_name(), "Hp");
    }

    #[test]
    fn never_mode_is_not_serialized() {
        let mut context = MemberContext::new(MemberRef::new(1), "Cache", MemberKind::Field);
        context.mode = Some(DataMemberMode::Never);

        assert!(!context.is_serialized());
        assert!(!context.is_default());
    }
}
