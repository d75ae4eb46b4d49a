//! Mock declaration (`mock_*.hpp`) renderer.

use crate::model::{Class, TagModel};
use crate::render::{banner, includes, MockTarget, Renderer};

pub struct HeaderRenderer;

impl Renderer for HeaderRenderer {
    fn render(&self, model: &TagModel, target: &MockTarget) -> String {
        let mut out = String::new();
        banner(&mut out, &target.file.path);
        out.push_str("#pragma once\n");

        let includes = includes(model, target.file);
        if !includes.is_empty() {
            out.push('\n');
            for include in includes {
                out.push_str(&format!("#include \"{}\"\n", include));
            }
        }

        for class in model.classes_of(target.file) {
            out.push('\n');
            render_class(&mut out, class);
        }

        out
    }
}

fn render_class(out: &mut String, class: &Class) {
    let name = &class.name;
    banner(out, &format!("Class {}", name));
    out.push('\n');

    // Interface the test installs as `mock`.
    out.push_str(&format!("class I{name} {{\n"));
    out.push_str("  public:\n");
    out.push_str(&format!("    virtual ~I{name}() = 0;\n"));
    if !class.funcs.is_empty() {
        out.push('\n');
    }
    for func in &class.funcs {
        out.push_str(&format!(
            "    virtual {} {}({}) = 0;\n",
            func.return_type, func.name, func.arg_with_types
        ));
    }
    out.push_str("};\n\n");

    out.push_str(&format!("class Mock{name} {{\n"));
    out.push_str("  public:\n");
    out.push_str("    // for mock\n");
    out.push_str(&format!("    static I{name}* mock;\n"));
    out.push_str("    static bool mockEnable;\n");
    out.push_str("    static bool* useMock;\n\n");
    out.push_str(&format!("    Mock{name}();\n"));
    out.push_str(&format!("    ~Mock{name}();\n"));
    if !class.funcs.is_empty() {
        out.push('\n');
    }
    for func in &class.funcs {
        out.push_str(&format!(
            "    {} {}({});\n",
            func.return_type, func.name, func.arg_with_types
        ));
    }
    out.push('\n');
    out.push_str("  private:\n");
    out.push_str("    // for original\n");
    out.push_str(&format!("    {name}* origin;\n"));
    out.push_str("    int callCount;\n");
    out.push_str("};\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GenerateConfig;
    use crate::tags;

    #[test]
    fn render_header_mock() {
        let input = "Counter\tinc/counter.hpp\t/^class Counter {$/;\"\tkind:class\n\
                     Counter::setFibonacci\tsrc/counter.cpp\t/^void Counter::setFibonacci(Fibonacci *fib) {$/;\"\tkind:function\tclass:Counter\tsignature:(Fibonacci *fib)\n";
        let model = tags::parse(input);
        let file = model.file("inc/counter.hpp").unwrap();
        let target = MockTarget::new(file, &GenerateConfig::default());

        let expected = "\
//////////////////////////////////////////
// for inc/counter.hpp
//////////////////////////////////////////
#pragma once

#include \"counter.hpp\"

//////////////////////////////////////////
// for Class Counter
//////////////////////////////////////////

class ICounter {
  public:
    virtual ~ICounter() = 0;

    virtual void setFibonacci(Fibonacci *fib) = 0;
};

class MockCounter {
  public:
    // for mock
    static ICounter* mock;
    static bool mockEnable;
    static bool* useMock;

    MockCounter();
    ~MockCounter();

    void setFibonacci(Fibonacci *fib);

  private:
    // for original
    Counter* origin;
    int callCount;
};
";
        assert_eq!(HeaderRenderer.render(&model, &target), expected);
    }

    #[test]
    fn class_without_funcs() {
        let model = tags::parse("Base\tbase.hpp\t/^class Base {$/;\"\tkind:class\n");
        let target = MockTarget::new(&model.files()[0], &GenerateConfig::default());
        let output = HeaderRenderer.render(&model, &target);
        assert!(output.contains("    virtual ~IBase() = 0;\n};\n"));
        assert!(output.contains("    ~MockBase();\n\n  private:\n"));
    }
}
