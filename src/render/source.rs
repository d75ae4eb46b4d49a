//! Mock implementation (`mock_*.cpp`) renderer.
//!
//! Each mocked method counts its calls and forwards either to the installed
//! `mock` or to the wrapped original object, depending on `useMock`.

use crate::model::{Class, Func, TagModel};
use crate::render::{banner, includes, MockTarget, Renderer};

pub struct SourceRenderer;

impl Renderer for SourceRenderer {
    fn render(&self, model: &TagModel, target: &MockTarget) -> String {
        let mut out = String::new();
        banner(&mut out, &target.file.path);
        out.push('\n');

        out.push_str(&format!(
            "#include \"{}{}.hpp\"\n",
            target.prefix, target.file_name
        ));
        for include in includes(model, target.file) {
            out.push_str(&format!("#include \"{}\"\n", include));
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

    out.push_str(&format!("I{name} *Mock{name}::mock = nullptr;\n"));
    out.push_str(&format!("bool Mock{name}::mockEnable = false;\n"));
    out.push_str(&format!("bool *Mock{name}::useMock = nullptr;\n"));
    out.push('\n');

    out.push_str(&format!("Mock{name}::Mock{name}() {{\n"));
    out.push_str(&format!("    origin = new {name}();\n"));
    out.push_str("    callCount = 0;\n");
    out.push_str("}\n\n");

    out.push_str(&format!("Mock{name}::~Mock{name}() {{\n"));
    out.push_str("    delete origin;\n");
    out.push_str("}\n");

    for func in &class.funcs {
        out.push('\n');
        render_method(out, name, func);
    }
}

fn render_method(out: &mut String, class: &str, func: &Func) {
    out.push_str(&format!(
        "{} Mock{}::{}({}) {{\n",
        func.return_type, class, func.name, func.arg_with_types
    ));
    out.push_str("    callCount++;\n");
    out.push_str("    if (mockEnable && useMock[callCount - 1]) {\n");
    out.push_str(&format!("        return mock->{}({});\n", func.name, func.args));
    out.push_str("    } else {\n");
    out.push_str(&format!("        return origin->{}({});\n", func.name, func.args));
    out.push_str("    }\n");
    out.push_str("}\n");
}
