//! Placeholder synthesis - picks a literal for variables without a default

/// Which family of type keywords wins when a declared type mentions both,
/// e.g. `list(string)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypePrecedence {
    /// Scalar keywords are checked first, so `list(string)` resolves to the
    /// string placeholder `""`.
    #[default]
    Scalars,
    /// Collection keywords are checked first, so `list(string)` resolves
    /// to `[]`.
    Collections,
}

/// Choose the literal to emit for a variable with no explicit default.
///
/// Matching is substring containment over the declared type expression,
/// first hit wins. An unrecognized or absent type falls back to `""`.
pub fn placeholder_for(declared_type: Option<&str>, precedence: TypePrecedence) -> &'static str {
    let Some(var_type) = declared_type else {
        return "\"\"";
    };

    match precedence {
        TypePrecedence::Scalars => {
            if var_type.contains("string") {
                "\"\""
            } else if var_type.contains("number") {
                "0"
            } else if var_type.contains("bool") {
                "false"
            } else if var_type.contains("list") || var_type.contains("set") {
                "[]"
            } else if var_type.contains("map") {
                "{}"
            } else {
                "\"\""
            }
        }
        TypePrecedence::Collections => {
            if var_type.contains("list") || var_type.contains("set") {
                "[]"
            } else if var_type.contains("map") {
                "{}"
            } else if var_type.contains("string") {
                "\"\""
            } else if var_type.contains("number") {
                "0"
            } else if var_type.contains("bool") {
                "false"
            } else {
                "\"\""
            }
        }
    }
}
