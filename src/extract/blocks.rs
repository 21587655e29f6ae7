//! Block discovery - locates `variable "<name>" { ... }` declarations

use regex::Regex;
use std::sync::OnceLock;

static BLOCK_RE: OnceLock<Regex> = OnceLock::new();

/// One `variable` declaration: the name as written between the quotes and
/// the raw text of the block interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBlock {
    pub name: String,
    pub body: String,
}

/// Scan input text for variable declaration blocks, yielding them in the
/// order their header appears.
///
/// The body capture is shallow: it ends at the first `}`, not at the
/// brace-matched one. A body containing a nested `{` (an `object({...})`
/// type, a map default) is truncated early, and a block with an empty body
/// is skipped entirely. Callers that need the generated output to stay
/// stable for such inputs rely on this truncation, so it must not be made
/// depth-aware here.
pub fn scan(content: &str) -> impl Iterator<Item = VariableBlock> + '_ {
    let block_re = BLOCK_RE
        .get_or_init(|| Regex::new(r#"variable\s+"([^"]+)"\s+\{([^}]+)\}"#).expect("valid regex"));

    block_re.captures_iter(content).map(|cap| VariableBlock {
        name: cap[1].to_string(),
        body: cap[2].to_string(),
    })
}
