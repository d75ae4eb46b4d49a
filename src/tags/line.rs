//! Tag line classification and field extraction.
//!
//! Only the extended ctags format (`--extra=+q --fields=+KSz`) is understood:
//!
//! ```text
//! Foo::calc<TAB>src/foo.cpp<TAB>/^int Foo::calc(int x) {$/;"<TAB>kind:function<TAB>class:Foo<TAB>signature:(int x)
//! ```
//!
//! The prefix (name, file, pattern) is matched with an anchored regex; the
//! suffix after `;"` is read as tab-separated `key:value` fields in any order.

use regex::Regex;
use std::sync::LazyLock;

const CLASS_KIND: &str = "kind:class";
const FUNCTION_KIND: &str = "kind:function";
const CLASS_FIELD: &str = "class:";

// -- Regex patterns -----------------------------------------------------------

// name, file, pattern text, suffix
static RE_CLASS_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(.+)\t(.+)\t/\^(.+).*\$/;"\t(.*)"#).unwrap());

// name, file, pattern text up to the last `(`, suffix
static RE_FUNCTION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(.+)\t(.+)\t/\^(.+)\(.*\$/;"\t(.*)"#).unwrap());

// -- Classification -----------------------------------------------------------

/// What a tag line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Class,
    Method,
    Function,
    Ignored,
}

/// Classify a line by its kind marker alone. Structure is checked later by
/// the matchers.
pub fn classify(line: &str) -> LineKind {
    if line.contains(CLASS_KIND) {
        LineKind::Class
    } else if line.contains(FUNCTION_KIND) {
        // A `class:` field only counts after the line start.
        match line.find(CLASS_FIELD) {
            Some(pos) if pos > 0 => LineKind::Method,
            _ => LineKind::Function,
        }
    } else {
        LineKind::Ignored
    }
}

// -- Matched tags -------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTag<'a> {
    pub name: &'a str,
    pub file_path: &'a str,
    pub raw: &'a str,
    pub kind: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTag<'a> {
    /// Tag name as written, e.g. `Foo::calc`.
    pub qualified_name: &'a str,
    /// Part after the last `::`, e.g. `calc`.
    pub name: &'a str,
    pub file_path: &'a str,
    pub raw: &'a str,
    pub kind: &'a str,
    pub class_name: &'a str,
    /// Parameter list without the surrounding parentheses.
    pub signature: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionTag<'a> {
    pub name: &'a str,
    pub file_path: &'a str,
    pub raw: &'a str,
    pub kind: &'a str,
    pub signature: &'a str,
}

pub fn match_class(line: &str) -> Option<ClassTag<'_>> {
    let caps = RE_CLASS_TAG.captures(line)?;
    let fields = SuffixFields::parse(caps.get(4)?.as_str());
    Some(ClassTag {
        name: caps.get(1)?.as_str(),
        file_path: caps.get(2)?.as_str(),
        raw: caps.get(3)?.as_str(),
        kind: fields.kind?,
    })
}

/// Match a method tag. Only qualified names (`Class::method`) are accepted;
/// the unqualified duplicate ctags emits for the same method never matches.
pub fn match_method(line: &str) -> Option<MethodTag<'_>> {
    let caps = RE_FUNCTION_TAG.captures(line)?;
    let qualified_name = caps.get(1)?.as_str();
    let (qualifier, name) = qualified_name.rsplit_once("::")?;
    if qualifier.is_empty() || name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    let fields = SuffixFields::parse(caps.get(4)?.as_str());
    Some(MethodTag {
        qualified_name,
        name,
        file_path: caps.get(2)?.as_str(),
        raw: caps.get(3)?.as_str(),
        kind: fields.kind?,
        class_name: fields.class?,
        signature: fields.signature?,
    })
}

/// Match a free function tag. The absence of a `class:` field is decided by
/// [`classify`], not here.
pub fn match_function(line: &str) -> Option<FunctionTag<'_>> {
    let caps = RE_FUNCTION_TAG.captures(line)?;
    let fields = SuffixFields::parse(caps.get(4)?.as_str());
    Some(FunctionTag {
        name: caps.get(1)?.as_str(),
        file_path: caps.get(2)?.as_str(),
        raw: caps.get(3)?.as_str(),
        kind: fields.kind?,
        signature: fields.signature?,
    })
}

// -- Suffix fields ------------------------------------------------------------

/// The `key:value` fields after `;"`. The first occurrence of a key wins.
#[derive(Debug, Default)]
struct SuffixFields<'a> {
    kind: Option<&'a str>,
    class: Option<&'a str>,
    signature: Option<&'a str>,
}

impl<'a> SuffixFields<'a> {
    fn parse(suffix: &'a str) -> Self {
        let mut fields = SuffixFields::default();
        for field in suffix.split('\t') {
            let Some((key, value)) = field.split_once(':') else {
                continue;
            };
            match key {
                "kind" if fields.kind.is_none() => fields.kind = leading_token(value),
                "class" if fields.class.is_none() => fields.class = leading_token(value),
                "signature" if fields.signature.is_none() => {
                    fields.signature = parenthesized(value)
                }
                _ => {}
            }
        }
        fields
    }
}

/// Leading run of non-whitespace, `None` if empty.
fn leading_token(value: &str) -> Option<&str> {
    let end = value.find(char::is_whitespace).unwrap_or(value.len());
    (end > 0).then(|| &value[..end])
}

/// `(int x, int y)` → `int x, int y`; up to the last `)`.
fn parenthesized(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('(')?;
    let end = inner.rfind(')')?;
    Some(&inner[..end])
}
