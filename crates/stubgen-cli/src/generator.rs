//! The generation pipeline: discover, extract, filter, render, write.

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use stubgen::{ContainerKind, ContainerSpec, StubItem};
use stubgen_php::{extract_file, StubFile};

use crate::config::GeneratorConfig;
use crate::{Error, Result};

/// Counters reported after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Source files parsed
    pub files_scanned: usize,
    /// Function stub files written
    pub functions_written: usize,
    /// Class/interface/trait stub files written
    pub containers_written: usize,
}

/// Generates declaration-only stubs for one application tree.
///
/// The pipeline is strictly sequential and fails fast: the first I/O or
/// parse error aborts the run, leaving already-written stubs on disk.
pub struct StubGenerator {
    app_root: PathBuf,
    output_dir: PathBuf,
    config: GeneratorConfig,
}

impl StubGenerator {
    pub fn new(app_root: PathBuf, output_dir: PathBuf, config: GeneratorConfig) -> Self {
        Self {
            app_root,
            output_dir,
            config,
        }
    }

    /// Run the full pipeline.
    pub fn run(&self) -> Result<GenerateSummary> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| Error::Io(self.output_dir.clone(), e))?;

        let files = self.discover_files()?;
        log::info!("scanning {} PHP files under {}", files.len(), self.app_root.display());

        let mut stub_files = Vec::with_capacity(files.len());
        for file in &files {
            stub_files.push(extract_file(file)?);
        }

        let index = build_container_index(&stub_files);

        let mut summary = GenerateSummary {
            files_scanned: stub_files.len(),
            ..GenerateSummary::default()
        };

        for stub_file in &stub_files {
            let emit_functions = self.keep_file_functions(&stub_file.path);
            for item in stub_file.items() {
                if !self.keep_item(&item, emit_functions) {
                    continue;
                }
                let item = finalize_item(item, &index);
                self.write_item(&item)?;
                match item {
                    StubItem::Function(_) => summary.functions_written += 1,
                    StubItem::Container(_) => summary.containers_written += 1,
                }
            }
        }

        log::info!(
            "wrote {} function stubs and {} container stubs to {}",
            summary.functions_written,
            summary.containers_written,
            self.output_dir.display()
        );
        Ok(summary)
    }

    /// Every `.php` file under the application root minus the skip list, in
    /// sorted path order.
    fn discover_files(&self) -> Result<Vec<PathBuf>> {
        let skip: Vec<PathBuf> = self
            .config
            .skip_files
            .iter()
            .map(|rel| self.app_root.join(rel))
            .collect();

        let mut files = Vec::new();
        collect_php_files(&self.app_root, &skip, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Whether functions defined in this file pass the vendored-path filter.
    ///
    /// Vendored files outside the first-party prefix contribute nothing;
    /// allow-listed names bypass this check at the call site.
    fn keep_file_functions(&self, file: &Path) -> bool {
        let Ok(relative) = file.strip_prefix(&self.app_root) else {
            return true;
        };
        if !relative.starts_with(&self.config.vendor_dir) {
            return true;
        }
        relative.starts_with(&self.config.first_party_vendor)
    }

    /// Whether this extracted entity survives the configured filters.
    fn keep_item(&self, item: &StubItem, emit_functions: bool) -> bool {
        match item {
            StubItem::Function(function) => {
                emit_functions || self.config.is_function_allow_listed(&function.name)
            }
            StubItem::Container(container) => self
                .config
                .is_first_party_container(&container.fully_qualified_name()),
        }
    }

    fn write_item(&self, item: &StubItem) -> Result<()> {
        let prefix = match item {
            StubItem::Function(_) => "<?php\n",
            StubItem::Container(_) => "<?php\n\n",
        };
        let code = format!("{}{}", prefix, item.render()?);
        self.write_stub(&item.fully_qualified_name(), &code)
    }

    fn write_stub(&self, fqn: &str, code: &str) -> Result<()> {
        let filename = format!("{}.php", fqn.replace('\\', "_"));
        let path = self.output_dir.join(filename);
        log::debug!("writing {}", path.display());
        fs::write(&path, code).map_err(|e| Error::Io(path.clone(), e))
    }
}

/// Inheritance facts collected from every parsed container, used to expand
/// each emitted class's interface list the way reflection reports it:
/// including interfaces inherited through parent classes and parent
/// interfaces.
struct ContainerFacts {
    extends: Option<String>,
    implements: Vec<String>,
}

/// Prepare an extracted entity for output.
///
/// Functions are stubbed as declaration-only: the captured body is discarded,
/// signature, types and doc comment survive. Classes and interfaces get their
/// interface list expanded the way reflection reports it.
fn finalize_item(item: StubItem, index: &HashMap<String, ContainerFacts>) -> StubItem {
    match item {
        StubItem::Function(mut function) => {
            function.body = None;
            StubItem::Function(function)
        }
        StubItem::Container(mut container) => {
            if container.kind != ContainerKind::Trait {
                for interface in flattened_implements(&container, index) {
                    container.add_implements(interface);
                }
            }
            StubItem::Container(container)
        }
    }
}

fn build_container_index(stub_files: &[StubFile]) -> HashMap<String, ContainerFacts> {
    let mut index = HashMap::new();
    for stub_file in stub_files {
        for container in &stub_file.containers {
            index.insert(
                container.fully_qualified_name(),
                ContainerFacts {
                    extends: container.extends.clone(),
                    implements: container.implements.clone(),
                },
            );
        }
    }
    index
}

fn flattened_implements(
    container: &ContainerSpec,
    index: &HashMap<String, ContainerFacts>,
) -> Vec<String> {
    let mut result = Vec::new();
    let mut queue: VecDeque<String> = container.implements.iter().cloned().collect();

    // Parent classes contribute their interface lists too. Tracking visited
    // parents keeps a malformed `extends` cycle from walking forever.
    let mut seen = vec![container.fully_qualified_name()];
    let mut parent = container.extends.clone();
    while let Some(name) = parent {
        if seen.contains(&name) {
            break;
        }
        parent = match index.get(&name) {
            Some(facts) => {
                queue.extend(facts.implements.iter().cloned());
                facts.extends.clone()
            }
            None => None,
        };
        seen.push(name);
    }

    while let Some(name) = queue.pop_front() {
        if result.contains(&name) {
            continue;
        }
        if let Some(facts) = index.get(&name) {
            queue.extend(facts.implements.iter().cloned());
        }
        result.push(name);
    }
    result
}

fn collect_php_files(dir: &Path, skip: &[PathBuf], files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::Io(dir.to_path_buf(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::Io(dir.to_path_buf(), e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_php_files(&path, skip, files)?;
        } else if path.extension().is_some_and(|ext| ext == "php")
            && !skip.iter().any(|s| s == &path)
        {
            files.push(path);
        }
    }
    Ok(())
}
