use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use dm_utils::hash::HashMap;
use dm_utils::hash::hashbrown::hash_map::Entry;

use crate::descriptor::{ClassDescriptor, DescriptorKey};
use crate::diagnostic::{
    Diagnostic, GENERATED_IDENTIFIER_COLLISION, PARTIAL_ACCESSIBILITY_MISMATCH,
    PARTIAL_BASE_MISMATCH, PARTIAL_GENERIC_MISMATCH, Severity,
};

// -----------------------------------------------------------------------------
// MergeOutcome

/// Merged descriptors plus the conflicts found while merging.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    pub descriptors: Vec<ClassDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

// -----------------------------------------------------------------------------
// merge

/// Collapses descriptors of the same logical type into one.
///
/// See [`merge_with_diagnostics`] for the rules.
#[inline]
pub fn merge(descriptors: impl IntoIterator<Item = ClassDescriptor>) -> Vec<ClassDescriptor> {
    merge_with_diagnostics(descriptors).descriptors
}

/// Collapses descriptors of the same logical type into one, reporting
/// conflicts between them.
///
/// Descriptors are grouped by [`DescriptorKey`] and come out in first-seen
/// order. Within a group the first descriptor is kept and later ones
/// contribute the members it does not have yet, matched by declaration.
/// Merging an already merged sequence changes nothing.
///
/// A base type named by any declaration of the group applies to the merged
/// descriptor, with its abstract ancestors, interfaces and inherited
/// contract. The result does not depend on the order of the declarations
/// unless a conflict is reported.
///
/// Reported conflicts, where the first declaration wins:
/// - `DM0001` when a later declaration has another accessibility.
/// - `DM0002` when two different types share a generated identifier.
/// - `DM0003` when two declarations name different base types.
/// - `DM0004` when two declarations have different generic parameters.
pub fn merge_with_diagnostics(
    descriptors: impl IntoIterator<Item = ClassDescriptor>,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    let mut groups: HashMap<DescriptorKey, usize> = HashMap::default();
    let mut identifiers: HashMap<String, usize> = HashMap::default();

    for descriptor in descriptors {
        match groups.entry(descriptor.key()) {
            Entry::Occupied(entry) => {
                let target = &mut outcome.descriptors[*entry.get()];
                check_partials(target, &descriptor, &mut outcome.diagnostics);
                target.absorb(descriptor);
            }
            Entry::Vacant(entry) => {
                let index = outcome.descriptors.len();
                let identifier = String::from(descriptor.generated_identifier());

                if let Some(&other) = identifiers.get(&identifier) {
                    let other = &outcome.descriptors[other];
                    log::warn!(
                        "`{}` and `{}` both generate `{identifier}`",
                        qualified(other),
                        qualified(&descriptor),
                    );
                    let message = format!(
                        "`{}` generates `{identifier}`, which is already used by `{}`",
                        qualified(&descriptor),
                        qualified(other),
                    );
                    outcome.diagnostics.push(
                        Diagnostic::new(GENERATED_IDENTIFIER_COLLISION, Severity::Error, message)
                            .at(descriptor.declaration()),
                    );
                } else {
                    identifiers.insert(identifier, index);
                }

                entry.insert(index);
                outcome.descriptors.push(descriptor);
            }
        }
    }

    outcome
}

/// Compares a later partial declaration against the kept one.
fn check_partials(
    kept: &ClassDescriptor,
    later: &ClassDescriptor,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let name = qualified(kept);
    let mut report = |id, severity, message: String| {
        log::warn!("{message}");
        diagnostics.push(Diagnostic::new(id, severity, message).at(later.declaration()));
    };

    if kept.accessibility() != later.accessibility() {
        report(
            PARTIAL_ACCESSIBILITY_MISMATCH,
            Severity::Warning,
            format!(
                "partial declarations of `{name}` disagree on accessibility; using `{}` over `{}`",
                kept.accessibility(),
                later.accessibility(),
            ),
        );
    }

    if let (Some(first), Some(second)) = (kept.base(), later.base())
        && first != second
    {
        report(
            PARTIAL_BASE_MISMATCH,
            Severity::Error,
            format!(
                "partial declarations of `{name}` name different base types; using {first} over {second}",
            ),
        );
    }

    if kept.generic_signature() != later.generic_signature() {
        report(
            PARTIAL_GENERIC_MISMATCH,
            Severity::Error,
            format!(
                "partial declarations of `{name}` disagree on generic parameters: `{}` and `{}`",
                kept.generic_signature(),
                later.generic_signature(),
            ),
        );
    }
}

fn qualified(descriptor: &ClassDescriptor) -> String {
    if descriptor.namespace_path().is_empty() {
        String::from(descriptor.simple_name())
    } else {
        format!("{}.{}", descriptor.namespace_path(), descriptor.simple_name())
    }
}

// -----------------------------------------------------------------------------
// Tests
