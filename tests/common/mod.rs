// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed Yangine workspace (engine directory,
// templates, project data and one existing project) plus a fluent builder
// and a recording executor, so each integration test can run a command in
// isolation without spawning premake.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use yangine_scaffold::cli::GlobalOpts;
use yangine_scaffold::config::GeneratorConfig;
use yangine_scaffold::exec::{ExecResult, Executor};
use yangine_scaffold::logging::Logger;

/// Name of the project present in every test workspace.
pub const EXISTING_PROJECT: &str = "Pong";

/// Entry appended to the workspace build file by `copy`.
pub const ENTRY_TEMPLATE: &str = "\nproject \"$project_name\"\n    location \"$project_name\"\n    kind \"WindowedApp\"\n";

/// Build file written from scratch by `new`.
pub const NEW_PROJECT_TEMPLATE: &str = "workspace \"$project_name\"\n    startproject \"$project_name\"\n\ninclude \"$engine_dir\"\n\nproject \"$project_name\"\n    location \"$project_name\"\n";

/// Write the engine side of the workspace into `root`.
///
/// Creates:
/// - `Yangine/premake5.lua`                      engine registry (only the engine itself)
/// - `Yangine/premake5_newproject_template.txt`
/// - `Yangine/<generator executable>`
/// - `Yangine/Templates/...`                      layer and entry-point templates
/// - `Yangine/ProjectData/...`                    component templates and scripts
pub fn setup_engine(root: &Path) {
    let engine = root.join("Yangine");
    write(&engine.join("premake5.lua"), "project \"Yangine\"\n    kind \"StaticLib\"\n");
    write(&engine.join("premake5_newproject_template.txt"), NEW_PROJECT_TEMPLATE);
    write(&engine.join(GeneratorConfig::default().executable), "#!/bin/sh\n");

    let templates = engine.join("Templates");
    write(
        &templates.join("Application/$app_layer_header.txt"),
        "#pragma once\nclass $app_layer : public ApplicationLayer\n{\npublic:\n    const char* GetGameTitle() const override { return \"$project_name\"; }\n};\n",
    );
    write(
        &templates.join("Application/$app_layer_source.txt"),
        "#include \"$app_layer_header.txt\"\n#include \"Logic/${game_layer}_header.txt\"\n",
    );
    write(
        &templates.join("Logic/$game_layer_header.txt"),
        "#pragma once\nclass $game_layer : public IGameLayer {};\n",
    );
    write(
        &templates.join("Logic/$game_layer_source.txt"),
        "#include \"$game_layer.h\"\n",
    );
    write(
        &templates.join("$main_source.txt"),
        "#include \"Application/$app_layer.h\"\n\nint $main()\n{\n    return $app_layer().Run(); // costs $$0\n}\n",
    );

    let data = engine.join("ProjectData");
    write(
        &data.join("Data/ComponentTemplates/TemplateComponentHeader.txt"),
        component_header(),
    );
    write(
        &data.join("Data/ComponentTemplates/TemplateComponentCpp.txt"),
        component_source(),
    );
    write(
        &data.join("Scripts/CreateComponent.py"),
        "class_name = input('What component would you like to add?')\n",
    );
}

/// Header template shipped to every project.
pub const fn component_header() -> &'static str {
    "#pragma once\n// $file_name.h\nclass $class_name : public Component\n{\n};\n"
}

/// Source template shipped to every project.
pub const fn component_source() -> &'static str {
    "#include \"$class_name.h\"\n\n$class_name::$class_name() = default;\n"
}

/// Write the workspace-level files and one existing project into `root`.
pub fn setup_workspace(root: &Path) {
    setup_engine(root);
    write(
        &root.join("premake5.lua"),
        "workspace \"Games\"\n\nproject \"Pong\"\n    location \"Pong\"\n",
    );
    write(&root.join("premake5_template.txt"), ENTRY_TEMPLATE);

    let pong = root.join(EXISTING_PROJECT);
    write(&pong.join("Source/Main.cpp"), "int main() { return 0; }\n");
    write(&pong.join("Source/Logic/Components/AI/Brain.h"), "class Brain;\n");
    write(&pong.join("Assets/paddle.png"), "\u{89}PNG");
    write(&pong.join("Scripts/CreateComponent.py"), "print('hi')\n");
    write(
        &pong.join("Data/ComponentTemplates/TemplateComponentHeader.txt"),
        component_header(),
    );
    write(
        &pong.join("Data/ComponentTemplates/TemplateComponentCpp.txt"),
        component_source(),
    );
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, contents).expect("write fixture file");
}

/// An isolated workspace backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestWorkspace {
    /// Temporary workspace root.
    pub root: tempfile::TempDir,
}

impl TestWorkspace {
    /// Create a workspace with the engine, build files and one project.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        setup_workspace(root.path());
        Self { root }
    }

    /// Path to the workspace root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Global options rooted at the workspace.
    pub fn global(&self) -> GlobalOpts {
        GlobalOpts {
            root: Some(self.path().to_path_buf()),
            config: None,
        }
    }

    /// Global options rooted at a project inside the workspace.
    pub fn project_global(&self, project: &str) -> GlobalOpts {
        GlobalOpts {
            root: Some(self.path().join(project)),
            config: None,
        }
    }

    /// Read a workspace-relative file.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).expect("read workspace file")
    }

    /// Whether a workspace-relative path exists.
    pub fn exists(&self, rel: &str) -> bool {
        self.path().join(rel).exists()
    }

    /// Sorted listing of everything under `rel`, one entry per line with
    /// `/` separators; directories end in `/`.
    pub fn tree(&self, rel: &str) -> String {
        let base = self.path().join(rel);
        walkdir::WalkDir::new(&base)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                let entry = entry.expect("walk tree");
                let rel = entry.path().strip_prefix(&base).expect("relative path");
                let mut line = rel
                    .iter()
                    .map(|part| part.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                if entry.file_type().is_dir() {
                    line.push('/');
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Fluent builder for [`TestWorkspace`].
pub struct WorkspaceBuilder {
    ws: TestWorkspace,
}

impl WorkspaceBuilder {
    /// Begin building from the default workspace.
    pub fn new() -> Self {
        Self {
            ws: TestWorkspace::new(),
        }
    }

    /// Write `contents` to a workspace-relative file, replacing any fixture.
    pub fn with_file(self, rel: &str, contents: &str) -> Self {
        write(&self.ws.path().join(rel), contents);
        self
    }

    /// Remove a workspace-relative file or directory.
    pub fn without(self, rel: &str) -> Self {
        let path = self.ws.path().join(rel);
        if path.is_dir() {
            std::fs::remove_dir_all(&path).expect("remove fixture dir");
        } else {
            std::fs::remove_file(&path).expect("remove fixture file");
        }
        self
    }

    /// Finish building and return the workspace.
    pub fn build(self) -> TestWorkspace {
        self.ws
    }
}

/// Executor that records every run instead of spawning processes.
#[derive(Debug)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<(PathBuf, String, Vec<String>)>>,
    exit_code: i32,
}

impl RecordingExecutor {
    /// Executor whose runs all succeed.
    pub fn new() -> Arc<Self> {
        Self::with_exit_code(0)
    }

    /// Executor whose runs all exit with `exit_code`.
    pub fn with_exit_code(exit_code: i32) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            exit_code,
        })
    }

    /// `(dir, program, args)` of every run so far.
    pub fn calls(&self) -> Vec<(PathBuf, String, Vec<String>)> {
        self.calls.lock().expect("lock calls").clone()
    }
}

impl Executor for RecordingExecutor {
    fn run_in(&self, dir: &Path, program: &str, args: &[String]) -> anyhow::Result<ExecResult> {
        self.calls
            .lock()
            .expect("lock calls")
            .push((dir.to_path_buf(), program.to_string(), args.to_vec()));
        Ok(ExecResult {
            stdout: "Building configurations...\n".to_string(),
            stderr: if self.exit_code == 0 {
                String::new()
            } else {
                "Error: unknown action\n".to_string()
            },
            success: self.exit_code == 0,
            code: Some(self.exit_code),
        })
    }

    fn which(&self, program: &str) -> Option<PathBuf> {
        Some(PathBuf::from(program))
    }
}

/// A logger for a test run (no subscriber is installed, so nothing prints).
pub fn logger() -> Arc<Logger> {
    Arc::new(Logger::new("test"))
}
