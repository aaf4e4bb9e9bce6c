//! Project copier: duplicate an existing project under a new name and
//! register it in the workspace build file.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::error::ScaffoldError;
use crate::template::TokenTable;

use super::fs::{Existing, copy_tree, require_dir};
use super::layout::COPIED_SUBTREES;
use super::premake::BuildFile;
use super::{Context, generator, names, read_template, render_text, step};

/// A validated request to copy a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    source: String,
    name: String,
}

impl CopyRequest {
    /// Validate the source and new project names.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if either name is not a single
    /// directory name, the new name cannot be written into the build file,
    /// or both are the same.
    pub fn new(source: &str, name: &str) -> Result<Self, ScaffoldError> {
        let source = names::directory_name("source project", source)?;
        let name = names::registered_name("project name", name)?;
        if source == name {
            return Err(ScaffoldError::InvalidName {
                kind: "project name",
                value: name,
                reason: "must differ from the source project",
            });
        }
        Ok(Self { source, name })
    }

    /// Project being copied.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name of the new project.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Result of [`copy_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Root directory of the new project.
    pub project_root: PathBuf,
    /// Number of files copied.
    pub files_copied: usize,
}

/// Copy the `Source`, `Assets`, `Scripts` and `Data` trees of the source
/// project, append a rendered entry to the build file and run the
/// generator.
///
/// All checks (source trees present, destination trees absent, project not
/// yet registered, entry template renders) happen before anything is
/// written.
///
/// # Errors
///
/// Returns [`ScaffoldError::DuplicateProject`] if the new name is already
/// registered, [`ScaffoldError::SourceMissing`] or
/// [`ScaffoldError::DestinationExists`] for tree problems, template errors,
/// I/O errors, or [`ScaffoldError::GeneratorFailed`].
pub fn copy_project(ctx: &Context, request: &CopyRequest) -> Result<CopyOutcome> {
    let source_root = ctx.root.join(request.source());
    let project_root = ctx.root.join(request.name());
    let build_file = BuildFile::new(ctx.build_file());

    step(ctx, "Check projects", || {
        require_dir(&source_root)?;
        for (subtree, _) in COPIED_SUBTREES {
            require_dir(&source_root.join(subtree))?;
            let dest = project_root.join(subtree);
            if dest.exists() {
                return Err(ScaffoldError::DestinationExists { path: dest }.into());
            }
        }
        Ok(())
    })?;

    step(ctx, "Check premake5 registrations", || {
        build_file.ensure_unregistered(request.name())
    })?;

    let entry_template = ctx.root.join(&ctx.config.entry_template);
    let entry = step(ctx, "Render premake5 entry", || {
        let table = TokenTable::new().with("project_name", request.name());
        render_text(
            ctx,
            &read_template(&entry_template)?,
            &table,
            &entry_template.display().to_string(),
        )
    })?;

    std::fs::create_dir_all(&project_root)
        .with_context(|| format!("creating directory {}", project_root.display()))?;

    let mut files_copied = 0;
    for (subtree, label) in COPIED_SUBTREES {
        let copied = step(ctx, label, || {
            copy_tree(
                &source_root.join(subtree),
                &project_root.join(subtree),
                Existing::Fail,
                |from, to| {
                    ctx.log
                        .debug(&format!("{} -> {}", from.display(), to.display()));
                },
            )
        })?;
        ctx.log
            .debug(&format!("{subtree}: {} files", copied.len()));
        files_copied += copied.len();
    }

    step(ctx, "Editing premake5 file...", || build_file.append(&entry))?;

    generator::generate(ctx)?;

    ctx.log.info("Done!");
    Ok(CopyOutcome {
        project_root,
        files_copied,
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::logging::StepStatus;
    use crate::scaffold::test_helpers::make_context;

    const ENTRY: &str = "\nproject \"$project_name\"\n  location \"$project_name\"\n";

    fn workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let pong = dir.path().join("Pong");
        for sub in ["Source/Logic", "Assets", "Scripts", "Data/ComponentTemplates"] {
            std::fs::create_dir_all(pong.join(sub)).unwrap();
        }
        std::fs::write(pong.join("Source/Logic/Ball.cpp"), "// ball").unwrap();
        std::fs::write(pong.join("Assets/ball.png"), [0x89, 0x50, 0x4e, 0x47]).unwrap();
        std::fs::write(pong.join("Scripts/CreateComponent.py"), "print()").unwrap();
        std::fs::write(pong.join("Data/ComponentTemplates/T.txt"), "$class_name").unwrap();
        std::fs::write(dir.path().join("premake5.lua"), "workspace \"Yangine\"\nproject \"Pong\"\n")
            .unwrap();
        std::fs::write(dir.path().join("premake5_template.txt"), ENTRY).unwrap();
        dir
    }

    #[test]
    fn request_rejects_same_names() {
        assert!(CopyRequest::new("Pong", "Pong").is_err());
        assert!(CopyRequest::new("Pong", "").is_err());
        assert!(CopyRequest::new("Pong", "a/b").is_err());
        assert!(CopyRequest::new("Pong", "Pong2").is_ok());
    }

    #[test]
    fn request_rejects_names_that_break_the_build_file() {
        assert!(CopyRequest::new("Pong", "Pong\"").is_err());
        assert!(CopyRequest::new("Pong", "Pong\n2").is_err());
        assert!(CopyRequest::new("Pong", "$project_name").is_err());
    }

    #[test]
    fn copies_trees_and_appends_entry() {
        let dir = workspace();
        let (ctx, log, executor) = make_context(dir.path());
        let request = CopyRequest::new("Pong", "Tennis").unwrap();

        let outcome = copy_project(&ctx, &request).unwrap();

        assert_eq!(outcome.files_copied, 4);
        let tennis = dir.path().join("Tennis");
        assert_eq!(
            std::fs::read(tennis.join("Assets/ball.png")).unwrap(),
            [0x89, 0x50, 0x4e, 0x47]
        );
        // Data is copied verbatim, not rendered.
        assert_eq!(
            std::fs::read_to_string(tennis.join("Data/ComponentTemplates/T.txt")).unwrap(),
            "$class_name"
        );
        let premake = std::fs::read_to_string(dir.path().join("premake5.lua")).unwrap();
        assert!(premake.starts_with("workspace \"Yangine\"\nproject \"Pong\"\n"));
        assert!(premake.ends_with("project \"Tennis\"\n  location \"Tennis\"\n"));
        assert_eq!(executor.calls().len(), 1);
        assert_eq!(log.failure_count(), 0);
    }

    #[test]
    fn duplicate_registration_copies_nothing() {
        let dir = workspace();
        std::fs::write(
            dir.path().join("premake5.lua"),
            "project \"Pong\"\nproject \"Tennis\"\n",
        )
        .unwrap();
        let (ctx, _, executor) = make_context(dir.path());

        let err = copy_project(&ctx, &CopyRequest::new("Pong", "Tennis").unwrap()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::DuplicateProject { .. })
        ));
        assert!(!dir.path().join("Tennis").exists());
        assert!(executor.calls().is_empty());
    }

    #[test]
    fn existing_destination_subtree_is_fatal() {
        let dir = workspace();
        std::fs::create_dir_all(dir.path().join("Tennis/Assets")).unwrap();
        let (ctx, _, _) = make_context(dir.path());

        let err = copy_project(&ctx, &CopyRequest::new("Pong", "Tennis").unwrap()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::DestinationExists { .. })
        ));
        assert!(!dir.path().join("Tennis/Source").exists());
    }

    #[test]
    fn missing_source_subtree_is_fatal() {
        let dir = workspace();
        std::fs::remove_dir_all(dir.path().join("Pong/Scripts")).unwrap();
        let (ctx, _, _) = make_context(dir.path());

        let err = copy_project(&ctx, &CopyRequest::new("Pong", "Tennis").unwrap()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::SourceMissing { .. })
        ));
    }

    #[test]
    fn generator_can_be_skipped() {
        let dir = workspace();
        let (ctx, log, executor) = make_context(dir.path());
        let ctx = ctx.with_generate(false);

        copy_project(&ctx, &CopyRequest::new("Pong", "Tennis").unwrap()).unwrap();

        assert!(executor.calls().is_empty());
        assert!(
            log.step_entries()
                .iter()
                .any(|e| e.status == StepStatus::Skipped)
        );
    }
}
