use std::path::{Component, Path};

use super::ScaffoldConfig;

/// A validation warning detected during configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The configuration key (e.g. "engine_dir", "generator.program").
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Create a warning for `item`.
    #[must_use]
    pub fn new(item: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            message: message.into(),
        }
    }
}

fn escapes_root(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
}

impl ScaffoldConfig {
    /// Check the configuration for values that are likely mistakes.
    ///
    /// Nothing here is fatal; callers log the warnings and carry on.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        let relative = [
            ("engine_dir", &self.engine_dir),
            ("build_file", &self.build_file),
            ("entry_template", &self.entry_template),
            ("new_project_template", &self.new_project_template),
            ("templates_dir", &self.templates_dir),
            ("project_data_dir", &self.project_data_dir),
            ("component.root", &self.component.root),
            ("component.header_template", &self.component.header_template),
            ("component.source_template", &self.component.source_template),
        ];
        for (item, path) in relative {
            if path.as_os_str().is_empty() {
                warnings.push(ValidationWarning::new(item, "path is empty"));
            } else if escapes_root(path) {
                warnings.push(ValidationWarning::new(
                    item,
                    format!("{} leaves the directory it is resolved against", path.display()),
                ));
            }
        }

        if self.templates_dir == self.project_data_dir {
            warnings.push(ValidationWarning::new(
                "project_data_dir",
                "same directory as templates_dir; files will be both rendered and copied",
            ));
        }

        if self.generator.program.trim().is_empty() {
            warnings.push(ValidationWarning::new(
                "generator.program",
                "no generator program configured",
            ));
        }

        if self.generator.executable.contains(['/', '\\']) {
            warnings.push(ValidationWarning::new(
                "generator.executable",
                "should be a file name, not a path",
            ));
        }

        warnings
    }
}
