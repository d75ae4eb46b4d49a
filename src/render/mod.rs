//! Renderer module — mock source/header generation per parsed file.

pub mod header;
pub mod source;

use crate::model::{File, TagModel};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_PREFIX: &str = "mock_";
pub const DEFAULT_OUT_DIR: &str = "generated";

/// Trait for rendering the mock of one parsed file.
pub trait Renderer {
    fn render(&self, model: &TagModel, target: &MockTarget) -> String;
}

/// Which kind of mock a file gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKind {
    /// `.c`, `.cc`, `.cpp`, `.cxx`, ...
    Source,
    Header,
}

/// Create a renderer for the given mock kind.
pub fn create_renderer(kind: MockKind) -> Box<dyn Renderer> {
    match kind {
        MockKind::Source => Box::new(source::SourceRenderer),
        MockKind::Header => Box::new(header::HeaderRenderer),
    }
}

/// Output settings for [`write_mocks`].
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub out_dir: PathBuf,
    /// Prepended to mock file names, e.g. `mock_foo.cpp`.
    pub prefix: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Where and how the mock of one file is written.
#[derive(Debug)]
pub struct MockTarget<'a> {
    pub file: &'a File,
    pub kind: MockKind,
    pub mock_dir: PathBuf,
    pub mock_path: PathBuf,
    /// File name without extension, e.g. `fibonacci`.
    pub file_name: String,
    pub prefix: String,
}

impl<'a> MockTarget<'a> {
    pub fn new(file: &'a File, config: &GenerateConfig) -> Self {
        let path = Path::new(&file.path);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.path.clone());
        let file_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        let kind = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.starts_with('c') => MockKind::Source,
            _ => MockKind::Header,
        };
        debug!("use {:?} mock for {}", kind, file.path);

        let mock_dir = config.out_dir.join(relative_dir(path));
        let mock_path = mock_dir.join(format!("{}{}", config.prefix, name));

        MockTarget {
            file,
            kind,
            mock_dir,
            mock_path,
            file_name,
            prefix: config.prefix.clone(),
        }
    }
}

/// Directory part of `path`, made relative so it stays inside the output dir.
fn relative_dir(path: &Path) -> PathBuf {
    path.parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Declaration files to include for `file`: unique, in class order.
pub fn includes<'a>(model: &'a TagModel, file: &'a File) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for class in model.classes_of(file) {
        if let Some(decl) = class.declaration_file.as_deref() {
            if !decl.is_empty() && !seen.contains(&decl) {
                seen.push(decl);
            }
        }
    }
    seen
}

/// Banner comment used at the top of mocks and before each class.
pub(crate) fn banner(out: &mut String, title: &str) {
    out.push_str("//////////////////////////////////////////\n");
    out.push_str(&format!("// for {}\n", title));
    out.push_str("//////////////////////////////////////////\n");
}

/// Render and write the mock of every file. Returns the written paths.
pub fn write_mocks(model: &TagModel, config: &GenerateConfig) -> Result<Vec<PathBuf>> {
    let total = model.files().len();
    let mut written = Vec::with_capacity(total);

    for (i, file) in model.files().iter().enumerate() {
        println!("[{}/{}] generate for {}", i + 1, total, file.path);

        let target = MockTarget::new(file, config);
        debug!(
            "generated params classes={} funcs={}",
            file.classes.len(),
            file.funcs.len()
        );

        fs::create_dir_all(&target.mock_dir).with_context(|| {
            format!("can't create mock dir: {}", target.mock_dir.display())
        })?;

        let output = create_renderer(target.kind).render(model, &target);
        fs::write(&target.mock_path, output).with_context(|| {
            format!("can't create mock file: {}", target.mock_path.display())
        })?;

        written.push(target.mock_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    fn file(path: &str) -> File {
        File {
            path: path.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn mock_kind_from_extension() {
        let config = GenerateConfig::default();
        for path in ["a.c", "a.cc", "a.cpp", "a.cxx"] {
            let f = file(path);
            assert_eq!(MockTarget::new(&f, &config).kind, MockKind::Source, "{}", path);
        }
        for path in ["a.h", "a.hpp", "a.hh", "Makefile"] {
            let f = file(path);
            assert_eq!(MockTarget::new(&f, &config).kind, MockKind::Header, "{}", path);
        }
    }

    #[test]
    fn mock_paths() {
        let f = file("src/fibonacci.cpp");
        let target = MockTarget::new(&f, &GenerateConfig::default());
        assert_eq!(target.mock_dir, Path::new("generated/src"));
        assert_eq!(target.mock_path, Path::new("generated/src/mock_fibonacci.cpp"));
        assert_eq!(target.file_name, "fibonacci");
        assert_eq!(target.prefix, "mock_");
    }

    #[test]
    fn absolute_paths_stay_in_out_dir() {
        let f = file("/work/src/main.cpp");
        let config = GenerateConfig {
            out_dir: PathBuf::from("out"),
            prefix: "fake_".to_string(),
        };
        let target = MockTarget::new(&f, &config);
        assert_eq!(target.mock_path, Path::new("out/work/src/fake_main.cpp"));
    }

    #[test]
    fn includes_are_unique_and_skip_undeclared() {
        let input = "A\tinc/shapes.hpp\t/^class A {$/;\"\tkind:class\n\
                     B\tinc/shapes.hpp\t/^class B {$/;\"\tkind:class\n\
                     C::run\tsrc/shapes.cpp\t/^void C::run() {$/;\"\tkind:function\tclass:C\tsignature:()\n\
                     A::run\tsrc/shapes.cpp\t/^void A::run() {$/;\"\tkind:function\tclass:A\tsignature:()\n\
                     B::run\tsrc/shapes.cpp\t/^void B::run() {$/;\"\tkind:function\tclass:B\tsignature:()\n";
        let model = tags::parse(input);

        let header = model.file("inc/shapes.hpp").unwrap();
        assert_eq!(includes(&model, header), vec!["shapes.hpp"]);

        let source = model.file("src/shapes.cpp").unwrap();
        assert_eq!(source.classes.len(), 3);
        assert_eq!(includes(&model, source), vec!["shapes.hpp"]);
    }
}
