//! Naming convention utilities for code generation.
//!
//! Member names in the contract model are raw identifiers as written in the
//! DSL. The generator spells each one twice: once for the field declaration
//! (member case) and once for the constructor parameter (parameter case).
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `snake_case` | [`to_pascal_case`] | `SnakeCase` |
//! | `word` | [`capitalize`] | `Word` |
//! | `Word` | [`decapitalize`] | `word` |

/// The two spellings a member identifier needs
///
/// Implementations must be pure: the same input always yields the same output.
pub trait NamingStyle {
    /// Spelling used for field declarations and the left side of assignments
    fn member_case(&self, identifier: &str) -> String;

    /// Spelling used for constructor parameters
    fn parameter_case(&self, identifier: &str) -> String;
}

/// C# conventions: PascalCase fields, camelCase parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CSharpNaming;

impl NamingStyle for CSharpNaming {
    fn member_case(&self, identifier: &str) -> String {
        to_pascal_case(identifier)
    }

    fn parameter_case(&self, identifier: &str) -> String {
        let name = decapitalize(&to_pascal_case(identifier));
        if is_csharp_keyword(&name) {
            format!("@{name}")
        } else {
            name
        }
    }
}

/// Convert a string to PascalCase.
///
/// Handles snake_case, kebab-case, and already-capitalized input.
///
/// # Examples
///
/// ```
/// use codedsl_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// assert_eq!(to_pascal_case("accountId"), "AccountId");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use codedsl_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
///
/// # Examples
///
/// ```
/// use codedsl_core::naming::decapitalize;
///
/// assert_eq!(decapitalize("Hello"), "hello");
/// assert_eq!(decapitalize("URL"), "uRL");
/// ```
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}
