#![allow(clippy::unwrap_used)]

//! A dictionary processor writing real files through [`FsCodeGenerator`].

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use kaleidoscope::{
    CodeGenerator, Dependencies, DiagnosticCollector, Element, FsCodeGenerator, KldError,
    ProcessingEnvironment, Processor, ProcessorOptions, Resolver, run_round, write_code_to_file,
};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::helpers::table_fixtures::dict;

/// Emits `<Class>Dict.kt` listing the `@Dict` columns of each enclosing class.
struct DictProcessor;

impl Processor for DictProcessor {
    fn process(
        &mut self,
        resolver: &dyn Resolver,
        env: &ProcessingEnvironment<'_>,
    ) -> Result<Vec<Element>, KldError> {
        for field in resolver.symbols_with_annotation("site.addzero.Dict") {
            let owner = field
                .enclosing_element()
                .ok_or_else(|| KldError::processing("field without an enclosing class"))?;
            let column = field
                .annotation("site.addzero.Dict")
                .and_then(|a| a.string_argument("nameColumn"))
                .unwrap_or(field.simple_name());

            let object = format!("{}Dict", owner.simple_name());
            let deps = Dependencies::from_elements(resolver, false, [&field]);
            let mut out = env.code_generator.create_new_file(
                &deps,
                field.package_name().unwrap_or_default(),
                &object,
                "kt",
            )?;
            writeln!(out, "package {}", field.package_name().unwrap_or_default())?;
            writeln!(out)?;
            writeln!(out, "object {object} {{")?;
            writeln!(out, "    const val COLUMN = \"{column}\"")?;
            writeln!(out, "}}")?;
            out.flush()?;
        }
        Ok(Vec::new())
    }
}

fn generated(root: &TempDir) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(root.path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root.path()).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

#[test]
fn test_round_writes_dictionary_file() {
    let root = TempDir::new().unwrap();
    let table = dict();
    let messager = DiagnosticCollector::new();
    let generator = FsCodeGenerator::new(root.path());
    let env = ProcessingEnvironment::new(ProcessorOptions::new(), &messager, &generator);

    run_round(&table, &mut DictProcessor, &env).unwrap();

    assert_eq!(generated(&root), vec![PathBuf::from("app/StatusDict.kt")]);
    let code = fs::read_to_string(root.path().join("app/StatusDict.kt")).unwrap();
    assert!(code.starts_with("package app\n"));
    assert!(code.contains("const val COLUMN = \"name\""));

    let associations = generator.associations();
    assert_eq!(
        associations[&root.path().join("app/StatusDict.kt")],
        vec!["src/main/kotlin/app/Status.kt".to_string()]
    );
    assert!(!messager.has_errors());
}

#[test]
fn test_second_round_rejects_existing_output() {
    let root = TempDir::new().unwrap();
    let table = dict();
    let messager = DiagnosticCollector::new();
    let generator = FsCodeGenerator::new(root.path());
    let env = ProcessingEnvironment::new(ProcessorOptions::new(), &messager, &generator);

    run_round(&table, &mut DictProcessor, &env).unwrap();
    let err = run_round(&table, &mut DictProcessor, &env).unwrap_err();

    assert!(matches!(err, KldError::FileAlreadyExists(_)));
    assert_eq!(messager.error_count(), 1);
    assert_eq!(generator.generated_files().len(), 1);
}

#[test]
fn test_write_code_to_file_outside_generator() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("build/generated/Readme.md");

    write_code_to_file(&path, "# generated\n").unwrap();
    write_code_to_file(&path, "# regenerated\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "# regenerated\n");
    assert_eq!(generated(&root), vec![PathBuf::from("build/generated/Readme.md")]);
}
