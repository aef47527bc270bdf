//! Reserved word tables.
//!
//! Lookup goes through `match` on the word; the slices exist for callers
//! that want to list the vocabulary (tests, docs pages).

use crate::TokenKind;

/// Control flow, declarations, literals and logical connectives.
pub const KEYWORDS: &[&str] = &[
    "function", "returns", "class", "if", "else", "elif", "while", "for", "repeat", "times",
    "return", "let", "self", "null", "true", "false", "import", "from", "as", "in", "not", "and",
    "or", "break", "continue",
];

/// Primitive and container types.
pub const TYPES: &[&str] = &["int", "str", "bool", "float", "list", "dict", "any", "void"];

/// Standard-library functions.
pub const BUILTINS: &[&str] = &[
    "print",
    "len",
    "range",
    "toString",
    "toInt",
    "toFloat",
    "toBool",
    "chunk",
    "flatten",
    "map",
    "filter",
    "reduce",
    "sort",
    "reverse",
    "read_file",
    "write_file",
    "slugify",
    "uppercase",
    "lowercase",
    "http_get",
    "http_post",
    "json_parse",
    "json_stringify",
];

/// Classify a whole identifier against the reserved tables.
///
/// Keywords win over types, types over builtins. Matching is exact and
/// case-sensitive; `None` means an ordinary identifier.
pub fn word_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "function" | "returns" | "class" | "if" | "else" | "elif" | "while" | "for" | "repeat"
        | "times" | "return" | "let" | "self" | "null" | "true" | "false" | "import" | "from"
        | "as" | "in" | "not" | "and" | "or" | "break" | "continue" => TokenKind::Keyword,
        "int" | "str" | "bool" | "float" | "list" | "dict" | "any" | "void" => TokenKind::Type,
        "print" | "len" | "range" | "toString" | "toInt" | "toFloat" | "toBool" | "chunk"
        | "flatten" | "map" | "filter" | "reduce" | "sort" | "reverse" | "read_file"
        | "write_file" | "slugify" | "uppercase" | "lowercase" | "http_get" | "http_post"
        | "json_parse" | "json_stringify" => TokenKind::Builtin,
        _ => return None,
    };
    Some(kind)
}
