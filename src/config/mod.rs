//! Scaffolding configuration: file names and tool settings, loaded from an
//! optional `scaffold.toml`.
pub mod toml_loader;
pub mod validation;

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::template::UnknownTokenPolicy;

/// Default configuration file name, looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "scaffold.toml";

/// All scaffolding settings.
///
/// Every path is relative: workspace-level entries resolve against the
/// workspace root, engine-level entries against the engine directory, and
/// [`ComponentConfig`] entries against a project directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Engine directory inside the workspace.
    pub engine_dir: PathBuf,
    /// Build-configuration file, both in the workspace and in the engine dir.
    pub build_file: PathBuf,
    /// Entry template appended by the project copier (workspace-relative).
    pub entry_template: PathBuf,
    /// Template for a fresh build file written by the bootstrapper
    /// (engine-relative).
    pub new_project_template: PathBuf,
    /// Tree rendered into a new project's `Source` (engine-relative).
    pub templates_dir: PathBuf,
    /// Tree copied verbatim into a new project (engine-relative).
    pub project_data_dir: PathBuf,
    /// Handling of placeholders outside the registered token set.
    pub unknown_tokens: UnknownTokenPolicy,
    /// Component generator settings.
    pub component: ComponentConfig,
    /// External build-file generator.
    pub generator: GeneratorConfig,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            engine_dir: PathBuf::from("Yangine"),
            build_file: PathBuf::from("premake5.lua"),
            entry_template: PathBuf::from("premake5_template.txt"),
            new_project_template: PathBuf::from("premake5_newproject_template.txt"),
            templates_dir: PathBuf::from("Templates"),
            project_data_dir: PathBuf::from("ProjectData"),
            unknown_tokens: UnknownTokenPolicy::default(),
            component: ComponentConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Settings for the component generator (project-relative paths).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentConfig {
    /// Directory that target subdirectories are resolved against.
    pub root: PathBuf,
    /// Header template.
    pub header_template: PathBuf,
    /// Source template.
    pub source_template: PathBuf,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("Source/Logic/Components"),
            header_template: PathBuf::from("Data/ComponentTemplates/TemplateComponentHeader.txt"),
            source_template: PathBuf::from("Data/ComponentTemplates/TemplateComponentCpp.txt"),
        }
    }
}

/// External build-file generator invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Program name, resolved on `PATH` unless a local executable exists.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Executable file name shipped in the engine dir and copied next to a
    /// new project's build file.
    pub executable: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "premake5".to_string(),
            args: vec!["vs2019".to_string()],
            executable: if cfg!(windows) {
                "premake5.exe".to_string()
            } else {
                "premake5".to_string()
            },
        }
    }
}

impl ScaffoldConfig {
    /// Load the configuration from `path`, or from `<root>/scaffold.toml`
    /// when `path` is `None`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Self> {
        let path = path.map_or_else(|| root.join(CONFIG_FILE_NAME), Path::to_path_buf);
        toml_loader::load_config(&path)
    }
}
