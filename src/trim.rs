//! Name trimming for stringized constant declarations.
//!
//! The generation layer hands the core the declarations exactly as written,
//! so a raw name may carry a trailing assignment: `"Green = 5"` instead of
//! `"Green"`. The functions here locate where the meaningful name ends and
//! produce the trimmed, process-lifetime name table each generated type
//! caches behind its one-time cell.
//!
//! Everything except [`process_names`] is `const` and allocation-free.

/// Symbols that end the name portion of a stringized declaration.
///
/// A declaration can take several shapes:
///
/// ```text
/// A
/// A = AnotherConstant
/// A = 42
/// A=42
/// ```
///
/// The first `=`, space, tab, or newline marks the end of the actual
/// constant name. End of string (and its C-style stand-in, the NUL byte)
/// implicitly ends a name as well.
pub const NAME_ENDERS: &[u8] = b"= \t\n";

/// Returns `true` if `c` terminates the name portion of a declaration.
///
/// Total and pure; the NUL byte counts as an implicit terminator.
pub const fn ends_name(c: u8) -> bool {
    if c == 0 {
        return true;
    }
    let mut index = 0;
    while index < NAME_ENDERS.len() {
        if c == NAME_ENDERS[index] {
            return true;
        }
        index += 1;
    }
    false
}

/// Byte length of the name portion of a raw declaration string.
///
/// This is the index of the first name-ending symbol, or `raw.len()` when
/// the declaration carries no assignment. Declaration names are plain
/// identifiers, so byte indices and character indices coincide.
pub const fn trimmed_len(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if ends_name(bytes[index]) {
            return index;
        }
        index += 1;
    }
    bytes.len()
}

/// Matches a raw declaration string against a clean reference name without
/// allocating.
///
/// Returns `true` exactly when the portion of `raw` before any name-ending
/// symbol equals `reference` in full.
pub const fn names_match(raw: &str, reference: &str) -> bool {
    let raw = raw.as_bytes();
    let reference = reference.as_bytes();
    let mut index = 0;
    loop {
        let raw_ended = index == raw.len() || ends_name(raw[index]);
        if raw_ended {
            return index == reference.len();
        }
        if index == reference.len() {
            // Reference is a strict prefix of the raw name.
            return false;
        }
        if raw[index] != reference[index] {
            return false;
        }
        index += 1;
    }
}

/// Builds the trimmed name table for a generated type.
///
/// All trimmed names are copied into a single backing buffer sized exactly
/// to their total length, then the buffer and the slice table are leaked:
/// the table is owned by the generated type for the life of the process and
/// is never freed. Called at most once per type, behind the type's one-time
/// cell (see `Introspect::processed_names`); the computation is pure, so a
/// redundant invocation would produce an equivalent table.
///
/// Allocation failure aborts the process via the global allocator's OOM
/// handler. There is no degraded mode for a half-built name table.
pub fn process_names(raw_names: &'static [&'static str]) -> &'static [&'static str] {
    let total: usize = raw_names.iter().map(|raw| trimmed_len(raw)).sum();
    let mut storage = String::with_capacity(total);
    let mut spans = Vec::with_capacity(raw_names.len());

    for raw in raw_names {
        let len = trimmed_len(raw);
        let start = storage.len();
        storage.push_str(&raw[..len]);
        spans.push(start..start + len);
    }

    let storage: &'static str = Box::leak(storage.into_boxed_str());
    let processed: Vec<&'static str> = spans.into_iter().map(|span| &storage[span]).collect();
    Box::leak(processed.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enders_cover_assignment_and_whitespace() {
        assert!(ends_name(b'='));
        assert!(ends_name(b' '));
        assert!(ends_name(b'\t'));
        assert!(ends_name(b'\n'));
        assert!(ends_name(0));
        assert!(!ends_name(b'A'));
        assert!(!ends_name(b'_'));
        assert!(!ends_name(b'0'));
    }

    #[test]
    fn trimmed_len_stops_at_first_ender() {
        assert_eq!(trimmed_len("Red"), 3);
        assert_eq!(trimmed_len("Green = 5"), 5);
        assert_eq!(trimmed_len("Green=5"), 5);
        assert_eq!(trimmed_len("A\t= 1"), 1);
        assert_eq!(trimmed_len(""), 0);
    }

    #[test]
    fn names_match_ignores_assignment_tail() {
        assert!(names_match("Green = 5", "Green"));
        assert!(names_match("Green=5", "Green"));
        assert!(names_match("Red", "Red"));
        assert!(!names_match("Green = 5", "Gree"));
        assert!(!names_match("Green = 5", "Greens"));
        assert!(!names_match("Red", "Green"));
        assert!(!names_match("Red = 1", ""));
        assert!(names_match("= 1", ""));
    }

    #[test]
    fn process_names_trims_every_entry() {
        static RAW: &[&str] = &["Red", "Green = 5", "Blue=6", "Alpha\t= 9"];
        let processed = process_names(RAW);
        assert_eq!(processed, &["Red", "Green", "Blue", "Alpha"]);
    }

    #[test]
    fn processed_names_are_independent_slices() {
        static RAW: &[&str] = &["Aa = 1", "Ab = 2"];
        let processed = process_names(RAW);
        // Adjacent names must not bleed into one another inside the shared
        // backing buffer.
        assert_eq!(processed[0], "Aa");
        assert_eq!(processed[1], "Ab");
    }
}
