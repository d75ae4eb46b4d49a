//! Return type and argument extraction for function tags.

/// Return type and signature taken from a tag's pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSignature<'a> {
    pub return_type: &'a str,
    pub signature: &'a str,
}

/// Split the pattern text before the parameter list, e.g. `int Foo::calc`.
///
/// Returns `None` when there are fewer than two tokens (`Foo::Foo`). Leading
/// indentation is kept in the signature.
pub fn split_raw(raw: &str) -> Option<RawSignature<'_>> {
    let mut tokens = raw.split_whitespace();
    let return_type = tokens.next()?;
    tokens.next()?;
    Some(RawSignature {
        return_type,
        signature: raw,
    })
}

/// Reduce a typed parameter list to its parameter names.
///
/// `int x, Fibonacci* fib` → `x, fib`, `char const *argv[]` → `argv`.
pub fn extract_args(arguments: &str) -> String {
    arguments
        .split(',')
        .map(arg_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn arg_name(arg: &str) -> &str {
    let name = arg.split_whitespace().last().unwrap_or("");
    let name = match name.rfind('*') {
        Some(pos) => &name[pos + 1..],
        None => name,
    };
    name.strip_suffix("[]").unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_return_and_signature() {
        let raw = split_raw("int Foo::calc").unwrap();
        assert_eq!(raw.return_type, "int");
        assert_eq!(raw.signature, "int Foo::calc");
    }

    #[test]
    fn split_keeps_fragment_verbatim() {
        let raw = split_raw("static const char* name").unwrap();
        assert_eq!(raw.return_type, "static");
        assert_eq!(raw.signature, "static const char* name");
    }

    #[test]
    fn split_keeps_indentation_of_inline_methods() {
        let raw = split_raw("    int get").unwrap();
        assert_eq!(raw.return_type, "int");
        assert_eq!(raw.signature, "    int get");
    }

    #[test]
    fn split_rejects_single_token() {
        assert!(split_raw("Counter::Counter").is_none());
        assert!(split_raw("Counter::~Counter").is_none());
        assert!(split_raw("").is_none());
    }

    #[test]
    fn args_drop_types() {
        assert_eq!(extract_args("int x, Fibonacci* fib"), "x, fib");
        assert_eq!(extract_args("int x"), "x");
        assert_eq!(extract_args("Fibonacci *fib"), "fib");
    }

    #[test]
    fn args_empty() {
        assert_eq!(extract_args(""), "");
    }

    #[test]
    fn args_pointer_and_array() {
        assert_eq!(extract_args("char const *argv[]"), "argv");
        assert_eq!(extract_args("int argc, char const *argv[]"), "argc, argv");
        assert_eq!(extract_args("char **env"), "env");
    }

    #[test]
    fn args_template_types() {
        assert_eq!(
            extract_args("Counter *counter, vector<Fibonacci *> fib"),
            "counter, fib"
        );
    }
}
