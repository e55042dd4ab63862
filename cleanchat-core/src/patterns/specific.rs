//! Case-sensitive rules.

use super::Rule;

/// Matched exactly as written, without case folding.
pub const SPECIFIC: &[Rule] = &[
    Rule::Template(r"{wb}gRAPE{wb}"),
];
