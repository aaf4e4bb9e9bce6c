//! Component generator: a header/source pair rendered from the project's
//! component templates.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::template::TokenTable;

use super::{Context, names, read_template, render_text, step};

/// A validated request to generate one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    class_name: String,
    target_dir: PathBuf,
    create_missing: bool,
}

impl ComponentRequest {
    /// Validate a class name and a directory relative to the components
    /// root (`""` is the root itself).
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if either value is rejected.
    pub fn new(class_name: &str, target_dir: &str) -> Result<Self, ScaffoldError> {
        Ok(Self {
            class_name: names::identifier("class name", class_name)?,
            target_dir: names::relative_dir("directory", target_dir)?,
            create_missing: false,
        })
    }

    /// Allow the target directory to be created when it does not exist.
    #[must_use]
    pub const fn create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }

    /// Class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Target directory relative to the components root.
    #[must_use]
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Absolute directory the files are written to.
    #[must_use]
    pub fn destination(&self, ctx: &Context) -> PathBuf {
        ctx.root
            .join(&ctx.config.component.root)
            .join(&self.target_dir)
    }

    /// Tokens available to both component templates.
    #[must_use]
    pub fn token_table(&self) -> TokenTable {
        TokenTable::new()
            .with("class_name", self.class_name.as_str())
            .with("file_name", self.class_name.as_str())
    }
}

/// Files written by [`generate_component`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    /// Path of `<Class>.h`.
    pub header: PathBuf,
    /// Path of `<Class>.cpp`.
    pub source: PathBuf,
}

/// Render the component templates and write `<Class>.h` and `<Class>.cpp`
/// into the request's destination, overwriting existing files.
///
/// Both templates are rendered before anything is created, so a missing
/// or broken template leaves the project untouched.
///
/// # Errors
///
/// Returns [`ScaffoldError::Declined`] if the destination is missing and
/// the request does not allow creating it, [`ScaffoldError::TemplateMissing`]
/// or [`ScaffoldError::Template`] for template problems, or an I/O error.
pub fn generate_component(ctx: &Context, request: &ComponentRequest) -> Result<GeneratedComponent> {
    let dest = request.destination(ctx);
    let needs_dir = !dest.is_dir();
    if needs_dir && !request.create_missing {
        return Err(ScaffoldError::Declined { path: dest }.into());
    }

    let table = request.token_table();
    let header_template = ctx.root.join(&ctx.config.component.header_template);
    let source_template = ctx.root.join(&ctx.config.component.source_template);
    let (header_text, source_text) = step(ctx, "Render component templates", || {
        let header = render_text(
            ctx,
            &read_template(&header_template)?,
            &table,
            &header_template.display().to_string(),
        )?;
        let source = render_text(
            ctx,
            &read_template(&source_template)?,
            &table,
            &source_template.display().to_string(),
        )?;
        Ok((header, source))
    })?;

    if needs_dir {
        step(ctx, &format!("Create {}", dest.display()), || {
            std::fs::create_dir_all(&dest)
                .with_context(|| format!("creating directory {}", dest.display()))
        })?;
    }

    let class = request.class_name();
    let header = dest.join(format!("{class}.h"));
    let source = dest.join(format!("{class}.cpp"));
    for (path, text) in [(&header, &header_text), (&source, &source_text)] {
        let file_name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        step(ctx, &format!("Write {file_name}"), || {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            ctx.log.info(&format!("Copied template to {file_name}"));
            Ok(())
        })?;
    }

    Ok(GeneratedComponent { header, source })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::logging::StepStatus;
    use crate::scaffold::test_helpers::make_context;

    const HEADER: &str = "#pragma once\n// $file_name.h\nclass $class_name : public Component {};\n";
    const SOURCE: &str = "#include \"${class_name}.h\"\n$class_name::$class_name() {}\n";

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("Data/ComponentTemplates");
        std::fs::create_dir_all(&templates).unwrap();
        std::fs::write(templates.join("TemplateComponentHeader.txt"), HEADER).unwrap();
        std::fs::write(templates.join("TemplateComponentCpp.txt"), SOURCE).unwrap();
        std::fs::create_dir_all(dir.path().join("Source/Logic/Components/AI")).unwrap();
        dir
    }

    #[test]
    fn request_validates_inputs() {
        assert!(ComponentRequest::new("Health", "AI").is_ok());
        assert!(ComponentRequest::new("", "AI").is_err());
        assert!(ComponentRequest::new("Health", "../Escape").is_err());
    }

    #[test]
    fn writes_header_and_source() {
        let dir = project();
        let (ctx, log, _) = make_context(dir.path());
        let request = ComponentRequest::new("Health", "AI").unwrap();

        let out = generate_component(&ctx, &request).unwrap();

        let header = std::fs::read_to_string(&out.header).unwrap();
        let source = std::fs::read_to_string(&out.source).unwrap();
        assert_eq!(
            header,
            "#pragma once\n// Health.h\nclass Health : public Component {};\n"
        );
        assert_eq!(source, "#include \"Health.h\"\nHealth::Health() {}\n");
        assert!(out.header.ends_with("Source/Logic/Components/AI/Health.h"));
        assert_eq!(log.failure_count(), 0);
    }

    #[test]
    fn empty_target_uses_components_root() {
        let dir = project();
        let (ctx, _, _) = make_context(dir.path());
        let request = ComponentRequest::new("Health", "").unwrap();
        let out = generate_component(&ctx, &request).unwrap();
        assert_eq!(
            out.source,
            dir.path().join("Source/Logic/Components/Health.cpp")
        );
    }

    #[test]
    fn missing_directory_without_approval_is_declined() {
        let dir = project();
        let (ctx, _, _) = make_context(dir.path());
        let request = ComponentRequest::new("Health", "Physics").unwrap();

        let err = generate_component(&ctx, &request).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::Declined { .. })
        ));
        assert!(!dir.path().join("Source/Logic/Components/Physics").exists());
    }

    #[test]
    fn missing_directory_is_created_when_approved() {
        let dir = project();
        let (ctx, _, _) = make_context(dir.path());
        let request = ComponentRequest::new("Body", "Physics/Rigid")
            .unwrap()
            .create_missing(true);

        let out = generate_component(&ctx, &request).unwrap();
        assert!(out.header.is_file());
        assert!(out.source.is_file());
    }

    #[test]
    fn missing_template_writes_nothing() {
        let dir = project();
        std::fs::remove_file(dir.path().join("Data/ComponentTemplates/TemplateComponentCpp.txt"))
            .unwrap();
        let (ctx, log, _) = make_context(dir.path());
        let request = ComponentRequest::new("Health", "New")
            .unwrap()
            .create_missing(true);

        let err = generate_component(&ctx, &request).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::TemplateMissing { .. })
        ));
        assert!(!dir.path().join("Source/Logic/Components/New").exists());
        let entries = log.step_entries();
        assert_eq!(entries.last().map(|e| e.status), Some(StepStatus::Failed));
    }

    #[test]
    fn existing_files_are_overwritten() {
        let dir = project();
        let target = dir.path().join("Source/Logic/Components/AI/Health.h");
        std::fs::write(&target, "old").unwrap();
        let (ctx, _, _) = make_context(dir.path());
        generate_component(&ctx, &ComponentRequest::new("Health", "AI").unwrap()).unwrap();
        assert!(std::fs::read_to_string(&target).unwrap().contains("class Health"));
    }
}
