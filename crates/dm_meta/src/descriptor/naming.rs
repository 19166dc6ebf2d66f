use alloc::string::String;

/// Prefix of every generated identifier.
pub const GENERATED_PREFIX: &str = "SourceGenerated_";

/// Returns the placeholder signature of a generic type, e.g. `Pair<,>`.
///
/// An arity of zero describes a non-generic type and yields `None`.
///
/// # Examples
///
/// ```
/// use dm_meta::descriptor::generic_signature;
///
/// assert_eq!(generic_signature("Pair", 2).as_deref(), Some("Pair<,>"));
/// assert_eq!(generic_signature("Box", 1).as_deref(), Some("Box<>"));
/// assert_eq!(generic_signature("Foo", 0), None);
/// ```
pub fn generic_signature(simple_name: &str, arity: usize) -> Option<String> {
    if arity == 0 {
        return None;
    }

    let mut signature = String::with_capacity(simple_name.len() + arity + 1);
    signature.push_str(simple_name);
    signature.push('<');
    for _ in 1..arity {
        signature.push(',');
    }
    signature.push('>');
    Some(signature)
}

/// Derives the name of the generated code unit from a dot-joined namespace
/// path and a simple type name.
///
/// Segments are joined with `_`. An underscore inside a segment is written
/// as `_0`; identifiers never start with a digit, so distinct inputs always
/// give distinct outputs.
///
/// # Examples
///
/// ```
/// use dm_meta::descriptor::generated_identifier;
///
/// assert_eq!(generated_identifier("App.Models", "Foo"), "SourceGenerated_App_Models_Foo");
/// assert_eq!(generated_identifier("", "Foo"), "SourceGenerated_Foo");
/// assert_eq!(generated_identifier("A", "B_C"), "SourceGenerated_A_B_0C");
/// ```
pub fn generated_identifier(namespace_path: &str, simple_name: &str) -> String {
    let capacity = GENERATED_PREFIX.len() + namespace_path.len() + simple_name.len() + 1;
    let mut identifier = String::with_capacity(capacity);
    identifier.push_str(GENERATED_PREFIX);

    let segments = namespace_path
        .split('.')
        .filter(|segment| !segment.is_empty())
        .chain(core::iter::once(simple_name));

    for (index, segment) in segments.enumerate() {
        if index > 0 {
            identifier.push('_');
        }
        push_escaped(&mut identifier, segment);
    }
    identifier
}

fn push_escaped(out: &mut String, segment: &str) {
    for c in segment.chars() {
        out.push(c);
        if c == '_' {
            out.push('0');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generated_identifier, generic_signature};

    #[test]
    fn underscores_do_not_collide() {
        let pairs = [
            ("A.B", "C"),
            ("A", "B_C"),
            ("A_B", "C"),
            ("A._B", "C"),
            ("A_", "B_C"),
            ("", "A_B_C"),
        ];

        for (i, a) in pairs.iter().enumerate() {
            for b in &pairs[i + 1..] {
                assert_ne!(
                    generated_identifier(a.0, a.1),
                    generated_identifier(b.0, b.1),
                    "{a:?} and {b:?}",
                );
            }
        }
    }

    #[test]
    fn single_parameter() {
        assert_eq!(generic_signature("List", 1).as_deref(), Some("List<>"));
        assert_eq!(generic_signature("Tuple", 3).as_deref(), Some("Tuple<,,>"));
    }
}
