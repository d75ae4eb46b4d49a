//! ctags output parser — builds a [`TagModel`] from extended tag lines.
//!
//! Lines are handled top to bottom. Files and classes are created on first
//! reference; a class name maps to one class for the whole listing, however
//! many files mention it. Lines that do not match are skipped silently.

pub mod line;
pub mod signature;

use crate::model::{Class, ClassId, Func, TagModel};
use line::LineKind;
use log::{debug, trace};
use std::collections::HashMap;

pub use signature::extract_args;

// -- Public API ---------------------------------------------------------------

/// Parse ctags output into files, classes and functions.
pub fn parse(tags: &str) -> TagModel {
    let mut session = ParseSession::default();

    for line in tags.lines() {
        match line::classify(line) {
            LineKind::Class => session.class_line(line),
            LineKind::Method => session.method_line(line),
            LineKind::Function => session.function_line(line),
            LineKind::Ignored => {}
        }
    }

    session.model
}

// -- Parse session ------------------------------------------------------------

/// Registries for one call to [`parse`].
#[derive(Default)]
struct ParseSession {
    model: TagModel,
    files_by_path: HashMap<String, usize>,
    classes_by_name: HashMap<String, ClassId>,
}

impl ParseSession {
    fn class_line(&mut self, text: &str) {
        let Some(tag) = line::match_class(text) else {
            trace!("skipped class tag: {}", text);
            return;
        };
        debug!(
            "class name={} filePath={} raw={} kind={}",
            tag.name, tag.file_path, tag.raw, tag.kind
        );

        let file = self.ensure_file(tag.file_path);
        let class = self.ensure_class(tag.name, Some(tag.file_path));
        // No duplicate check here, unlike method lines.
        self.model.file_mut(file).classes.push(class);
    }

    fn method_line(&mut self, text: &str) {
        let Some(tag) = line::match_method(text) else {
            trace!("skipped method tag: {}", text);
            return;
        };
        debug!(
            "method name={} filePath={} raw={} kind={} className={} signature={}",
            tag.qualified_name, tag.file_path, tag.raw, tag.kind, tag.class_name, tag.signature
        );

        let file = self.ensure_file(tag.file_path);
        let class = self.ensure_class(tag.class_name, None);

        let listed = self
            .model
            .files()
            .get(file)
            .map(|f| f.classes.iter().any(|id| self.model.class(*id).name == tag.class_name))
            .unwrap_or(false);
        if !listed {
            self.model.file_mut(file).classes.push(class);
        }

        if is_special_member(tag.name, tag.class_name) {
            trace!("constructor or destructor, skipping {}", tag.qualified_name);
            return;
        }

        let funcs = &mut self.model.class_mut(class).funcs;
        add_func(funcs, tag.name, tag.raw, tag.signature);
    }

    fn function_line(&mut self, text: &str) {
        let Some(tag) = line::match_function(text) else {
            trace!("skipped function tag: {}", text);
            return;
        };
        debug!(
            "func name={} filePath={} raw={} kind={} signature={}",
            tag.name, tag.file_path, tag.raw, tag.kind, tag.signature
        );

        let file = self.ensure_file(tag.file_path);
        let funcs = &mut self.model.file_mut(file).funcs;
        add_func(funcs, tag.name, tag.raw, tag.signature);
    }

    fn ensure_file(&mut self, path: &str) -> usize {
        if let Some(&index) = self.files_by_path.get(path) {
            return index;
        }
        let index = self.model.push_file(path);
        self.files_by_path.insert(path.to_string(), index);
        index
    }

    /// Look up a class by name, creating it if needed. `declared_in` is only
    /// used on creation.
    fn ensure_class(&mut self, name: &str, declared_in: Option<&str>) -> ClassId {
        if let Some(&id) = self.classes_by_name.get(name) {
            return id;
        }
        let id = self.model.push_class(Class {
            name: name.to_string(),
            funcs: Vec::new(),
            declaration_file: declared_in.map(base_name),
        });
        self.classes_by_name.insert(name.to_string(), id);
        id
    }
}

/// Append a function unless one with the same name exists (first one wins,
/// so overloads collapse).
fn add_func(funcs: &mut Vec<Func>, name: &str, raw: &str, arguments: &str) {
    if funcs.iter().any(|f| f.name == name) {
        return;
    }
    let Some(split) = signature::split_raw(raw) else {
        trace!("no return type in {:?}, skipping {}", raw, name);
        return;
    };
    let args = extract_args(arguments);
    debug!(
        "func raw Signature={} Return={} Args={} ArgWithTypes={}",
        split.signature, split.return_type, args, arguments
    );

    funcs.push(Func {
        name: name.to_string(),
        signature: split.signature.to_string(),
        return_type: split.return_type.to_string(),
        args,
        arg_with_types: arguments.to_string(),
    });
}

/// Constructor (`Foo::Foo`) or destructor (`Foo::~Foo`) of `class_name`.
fn is_special_member(name: &str, class_name: &str) -> bool {
    let simple = class_name.rsplit("::").next().unwrap_or(class_name);
    name == simple || name.starts_with('~')
}

/// "inc/fibonacci.hpp" → "fibonacci.hpp"
fn base_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}
