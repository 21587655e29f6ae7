//! Field extraction - pulls `default =` and `type =` lines out of a block body

use regex::Regex;
use std::sync::OnceLock;

static DEFAULT_RE: OnceLock<Regex> = OnceLock::new();
static TYPE_RE: OnceLock<Regex> = OnceLock::new();

/// Fields extracted from one block body. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockFields {
    pub default: Option<String>,
    pub declared_type: Option<String>,
}

/// Extract the first `default = <expr>` and `type = <expr>` assignments
/// from a block body.
///
/// `<expr>` is everything up to end of line, trimmed. There is no
/// expression parsing or quote balancing, so a default spanning multiple
/// lines contributes only its first line. The patterns are unanchored: a
/// key that merely ends in `default` or `type` (e.g. `instance_type`)
/// matches too.
pub fn extract_fields(body: &str) -> BlockFields {
    let default_re =
        DEFAULT_RE.get_or_init(|| Regex::new(r"default\s+=\s+([^\n]+)").expect("valid regex"));
    let type_re = TYPE_RE.get_or_init(|| Regex::new(r"type\s+=\s+([^\n]+)").expect("valid regex"));

    BlockFields {
        default: first_capture(default_re, body),
        declared_type: first_capture(type_re, body),
    }
}

fn first_capture(re: &Regex, body: &str) -> Option<String> {
    re.captures(body)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
}
