//! tfvars rendering - flat `name = value` assignment lines

use indexmap::IndexMap;

/// Render resolved variables as assignment lines in map order, joined with
/// a single newline. No trailing newline; an empty map renders as the
/// empty string. Names are emitted as-is, without quoting or escaping.
pub fn render(variables: &IndexMap<String, String>) -> String {
    variables
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}
