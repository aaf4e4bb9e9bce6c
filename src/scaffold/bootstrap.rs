//! Project bootstrapper: create a new project next to the engine from the
//! engine's `Templates` and `ProjectData` trees, then rewrite the workspace
//! build file.
use anyhow::{Context as _, Result, anyhow};
use std::path::{Component, Path, PathBuf};

use crate::error::ScaffoldError;
use crate::logging::StepStatus;
use crate::template::TokenTable;

use super::fs::{Existing, copy_tree, ensure_parent_dir, list_dirs, list_files, require_dir};
use super::layout::create_skeleton;
use super::premake::BuildFile;
use super::{Context, generator, names, read_template, render_text, step};

/// File-name suffixes used to stage sources inside `Templates`, and the
/// extension each one becomes.
pub const STAGING_SUFFIXES: [(&str, &str); 2] = [("_source.txt", ".cpp"), ("_header.txt", ".h")];

/// Value of the `main` token.
const MAIN_NAME: &str = "Main";

/// A validated request to bootstrap a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapRequest {
    name: String,
    title: String,
    app_layer: String,
    game_layer: String,
}

impl BootstrapRequest {
    /// Validate the project name and the optional overrides; missing
    /// overrides fall back to the title `<name>`, `<name>_AppLayer` and
    /// `<name>_GameLayer`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] for the first rejected value.
    pub fn new(
        name: &str,
        title: Option<&str>,
        app_layer: Option<&str>,
        game_layer: Option<&str>,
    ) -> Result<Self, ScaffoldError> {
        let name = names::identifier("project name", name)?;
        let title = names::display_text("window title", title.unwrap_or(&name))?;
        let app_layer = match app_layer {
            Some(layer) => names::identifier("application layer name", layer)?,
            None => Self::default_app_layer(&name),
        };
        let game_layer = match game_layer {
            Some(layer) => names::identifier("game layer name", layer)?,
            None => Self::default_game_layer(&name),
        };
        Ok(Self {
            name,
            title,
            app_layer,
            game_layer,
        })
    }

    /// Application layer name used when none is given.
    #[must_use]
    pub fn default_app_layer(name: &str) -> String {
        format!("{name}_AppLayer")
    }

    /// Game layer name used when none is given.
    #[must_use]
    pub fn default_game_layer(name: &str) -> String {
        format!("{name}_GameLayer")
    }

    /// Project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Window title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Application layer class name.
    #[must_use]
    pub fn app_layer(&self) -> &str {
        &self.app_layer
    }

    /// Game layer class name.
    #[must_use]
    pub fn game_layer(&self) -> &str {
        &self.game_layer
    }

    /// Tokens available to the `Templates` tree (contents and paths).
    #[must_use]
    pub fn token_table(&self) -> TokenTable {
        TokenTable::new()
            .with("app_layer", self.app_layer.as_str())
            .with("game_layer", self.game_layer.as_str())
            .with("project_name", self.title.as_str())
            .with("main", MAIN_NAME)
    }
}

/// Result of [`bootstrap_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOutcome {
    /// Root directory of the new project.
    pub project_root: PathBuf,
    /// Files rendered from `Templates`.
    pub rendered: Vec<PathBuf>,
    /// Files copied from `ProjectData`.
    pub copied: Vec<PathBuf>,
    /// The rewritten workspace build file.
    pub build_file: PathBuf,
}

/// Replace a staging suffix on `file_name` with its real extension.
#[must_use]
pub fn strip_staging_suffix(file_name: &str) -> String {
    STAGING_SUFFIXES
        .iter()
        .find_map(|(suffix, ext)| {
            file_name
                .strip_suffix(suffix)
                .map(|stem| format!("{stem}{ext}"))
        })
        .unwrap_or_else(|| file_name.to_string())
}

/// Replace every staging suffix inside rendered template text, so includes
/// written against staged names (`$app_layer_header.txt`) point at the
/// generated files.
#[must_use]
pub fn remap_staging_suffixes(text: &str) -> String {
    STAGING_SUFFIXES
        .iter()
        .fold(text.to_string(), |acc, (suffix, ext)| acc.replace(suffix, ext))
}

/// `engine_dir` token value: the engine directory relative to a project,
/// always with forward slashes.
#[must_use]
pub fn engine_dir_token(engine_dir: &Path) -> String {
    let parts: Vec<String> = engine_dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    format!("../{}", parts.join("/"))
}

/// Render every component of the relative path `rel`; the last component
/// of a file path also loses its staging suffix.
fn render_path(ctx: &Context, rel: &Path, table: &TokenTable, is_file: bool) -> Result<PathBuf> {
    let parts: Vec<&str> = rel
        .iter()
        .map(|part| {
            part.to_str()
                .ok_or_else(|| anyhow!("non-UTF-8 template path: {}", rel.display()))
        })
        .collect::<Result<_>>()?;
    let last = parts.len().saturating_sub(1);
    let mut out = PathBuf::new();
    for (i, part) in parts.into_iter().enumerate() {
        let rendered = render_text(ctx, part, table, &rel.display().to_string())?;
        if is_file && i == last {
            out.push(strip_staging_suffix(&rendered));
        } else {
            out.push(rendered);
        }
    }
    Ok(out)
}

struct PlannedFile {
    dest: PathBuf,
    contents: String,
}

struct Plan {
    dirs: Vec<PathBuf>,
    files: Vec<PlannedFile>,
}

/// Render the whole `Templates` tree in memory, targeting `source_root`.
fn plan_templates(
    ctx: &Context,
    templates: &Path,
    source_root: &Path,
    table: &TokenTable,
) -> Result<Plan> {
    let dirs = list_dirs(templates)?
        .iter()
        .map(|rel| Ok(source_root.join(render_path(ctx, rel, table, false)?)))
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    for rel in list_files(templates)? {
        let path = templates.join(&rel);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading template {}", path.display()))?;
        files.push(PlannedFile {
            dest: source_root.join(render_path(ctx, &rel, table, true)?),
            contents: remap_staging_suffixes(&render_text(
                ctx,
                &text,
                table,
                &path.display().to_string(),
            )?),
        });
    }
    Ok(Plan { dirs, files })
}

/// Create a new project in the workspace.
///
/// Every input is checked and every template rendered before the first
/// directory is created. The workspace build file is then replaced by the
/// rendered new-project template, the generator executable is copied to
/// the workspace root and the generator runs there.
///
/// # Errors
///
/// Returns [`ScaffoldError::SourceMissing`] or
/// [`ScaffoldError::TemplateMissing`] for missing engine files,
/// [`ScaffoldError::DuplicateProject`] if the engine build file already
/// registers the project, template errors, I/O errors, or
/// [`ScaffoldError::GeneratorFailed`].
pub fn bootstrap_project(ctx: &Context, request: &BootstrapRequest) -> Result<BootstrapOutcome> {
    let engine = ctx.engine_dir();
    let templates = engine.join(&ctx.config.templates_dir);
    let project_data = engine.join(&ctx.config.project_data_dir);
    let premake_template = engine.join(&ctx.config.new_project_template);
    let executable = engine.join(&ctx.config.generator.executable);
    let project_root = ctx.root.join(request.name());
    let build_file = BuildFile::new(ctx.build_file());

    step(ctx, "Check engine files", || {
        require_dir(&engine)?;
        require_dir(&templates)?;
        require_dir(&project_data)?;
        if !premake_template.is_file() {
            return Err(ScaffoldError::TemplateMissing {
                path: premake_template.clone(),
            }
            .into());
        }
        if ctx.generate && !executable.is_file() {
            return Err(ScaffoldError::SourceMissing {
                path: executable.clone(),
            }
            .into());
        }
        Ok(())
    })?;

    step(ctx, "Check premake5 registrations", || {
        BuildFile::new(engine.join(&ctx.config.build_file)).ensure_unregistered(request.name())
    })?;

    let table = request.token_table();
    let plan = step(ctx, "Render templates", || {
        plan_templates(ctx, &templates, &project_root.join("Source"), &table)
    })?;

    let premake = step(ctx, "Render premake5 file", || {
        let table = TokenTable::new()
            .with("project_name", request.name())
            .with("engine_dir", engine_dir_token(&ctx.config.engine_dir));
        render_text(
            ctx,
            &read_template(&premake_template)?,
            &table,
            &premake_template.display().to_string(),
        )
    })?;

    step(ctx, "Create project layout", || {
        create_skeleton(&project_root).map(drop)
    })?;

    let rendered = step(ctx, "Copy templates", || {
        for dir in &plan.dirs {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }
        let mut written = Vec::new();
        for file in &plan.files {
            ctx.log
                .info(&format!("Copying template to: {}", file.dest.display()));
            ensure_parent_dir(&file.dest)?;
            std::fs::write(&file.dest, &file.contents)
                .with_context(|| format!("writing {}", file.dest.display()))?;
            written.push(file.dest.clone());
        }
        Ok(written)
    })?;

    let copied = step(ctx, "Copy project data", || {
        copy_tree(&project_data, &project_root, Existing::Merge, |from, to| {
            ctx.log
                .info(&format!("Copying {} to {}", from.display(), to.display()));
        })
    })?;

    step(ctx, "Editing premake5 file...", || build_file.write_fresh(&premake))?;

    copy_generator(ctx, &executable)?;
    generator::generate(ctx)?;

    ctx.log.info("Done!");
    Ok(BootstrapOutcome {
        project_root,
        rendered,
        copied,
        build_file: build_file.path().to_path_buf(),
    })
}

/// Copy the generator executable from the engine dir to the workspace root.
fn copy_generator(ctx: &Context, executable: &Path) -> Result<()> {
    const STEP: &str = "Copy premake5 executable";
    if !executable.is_file() {
        ctx.log.stage(STEP);
        ctx.log
            .info(&format!("skipped: {} not found", executable.display()));
        ctx.log
            .record_step(STEP, StepStatus::Skipped, Some("executable not found"));
        return Ok(());
    }
    step(ctx, STEP, || {
        let dest = ctx.root.join(&ctx.config.generator.executable);
        std::fs::copy(executable, &dest)
            .with_context(|| format!("copying {} to {}", executable.display(), dest.display()))?;
        Ok(())
    })
}
