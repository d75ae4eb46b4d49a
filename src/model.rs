//! Data model built from ctags output: files, classes and their functions.
//!
//! Classes live in an arena owned by [`TagModel`]; files refer to them by
//! [`ClassId`], so a class declared in a header and implemented in a source
//! file is one record seen from both files.

/// Index of a class inside a [`TagModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(usize);

/// Result of parsing one tag listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagModel {
    files: Vec<File>,
    classes: Vec<Class>,
}

/// A translation unit as reported by ctags (path is not normalized).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct File {
    pub path: String,
    /// Classes in first-seen order. May repeat (see class tag handling).
    pub classes: Vec<ClassId>,
    /// Free functions.
    pub funcs: Vec<Func>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: String,
    pub funcs: Vec<Func>,
    /// Base name of the file holding the class tag, e.g. `fibonacci.hpp`.
    /// `None` when the class was only seen through its methods.
    pub declaration_file: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Func {
    pub name: String,
    /// Return type and qualified name, e.g. `int Foo::calc`.
    pub signature: String,
    pub return_type: String,
    /// Parameter names, e.g. `x, fib`.
    pub args: String,
    /// Parameter list as written, e.g. `int x, Fibonacci* fib`.
    pub arg_with_types: String,
}

impl TagModel {
    /// Files in first-seen order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.0]
    }

    /// Classes referenced by `file`, in the file's order.
    pub fn classes_of<'a>(&'a self, file: &'a File) -> impl Iterator<Item = &'a Class> + 'a {
        file.classes.iter().map(move |id| self.class(*id))
    }

    pub fn file(&self, path: &str) -> Option<&File> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    // -- Construction (used by the tag parser) --------------------------------

    pub(crate) fn push_file(&mut self, path: &str) -> usize {
        self.files.push(File {
            path: path.to_string(),
            ..Default::default()
        });
        self.files.len() - 1
    }

    pub(crate) fn push_class(&mut self, class: Class) -> ClassId {
        self.classes.push(class);
        ClassId(self.classes.len() - 1)
    }

    pub(crate) fn file_mut(&mut self, index: usize) -> &mut File {
        &mut self.files[index]
    }

    pub(crate) fn class_mut(&mut self, id: ClassId) -> &mut Class {
        &mut self.classes[id.0]
    }
}

impl Class {
    pub fn func(&self, name: &str) -> Option<&Func> {
        self.funcs.iter().find(|f| f.name == name)
    }
}

impl File {
    pub fn func(&self, name: &str) -> Option<&Func> {
        self.funcs.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_class_is_visible_from_every_file() {
        let mut model = TagModel::default();
        let header = model.push_file("inc/foo.hpp");
        let source = model.push_file("src/foo.cpp");
        let id = model.push_class(Class {
            name: "Foo".to_string(),
            declaration_file: Some("foo.hpp".to_string()),
            ..Default::default()
        });
        model.file_mut(header).classes.push(id);
        model.file_mut(source).classes.push(id);

        model.class_mut(id).funcs.push(Func {
            name: "calc".to_string(),
            ..Default::default()
        });

        for file in model.files() {
            let classes: Vec<&Class> = model.classes_of(file).collect();
            assert_eq!(classes.len(), 1);
            assert!(classes[0].func("calc").is_some());
        }
    }

    #[test]
    fn lookup_file_by_path() {
        let mut model = TagModel::default();
        assert!(model.is_empty());
        model.push_file("src/main.cpp");
        assert!(model.file("src/main.cpp").is_some());
        assert!(model.file("main.cpp").is_none());
    }
}
