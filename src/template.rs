//! Service template lookup and placeholder substitution.
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{constants::BINDIR_PLACEHOLDER, error::InitsysError, initsys::InitSystem};

/// Directory the templates are read from: the override when given, otherwise
/// the directory holding the running executable.
pub fn template_dir(override_dir: Option<&Path>) -> Result<PathBuf, InitsysError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    let exe = env::current_exe().map_err(|source| InitsysError::io("locate", "current executable", source))?;
    let exe = exe.canonicalize().unwrap_or(exe);
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/")))
}

/// Full path of the template for `kind` inside `dir`.
pub fn template_path(dir: &Path, kind: InitSystem) -> PathBuf {
    dir.join(kind.template_name())
}

/// Reads the template for `kind` from `dir`.
pub fn load(dir: &Path, kind: InitSystem) -> Result<String, InitsysError> {
    let path = template_path(dir, kind);
    debug!("Loading template {}", path.display());
    fs::read_to_string(&path).map_err(|source| InitsysError::TemplateRead { path, source })
}

/// Replaces every placeholder occurrence with `bindir`.
pub fn render(template: &str, bindir: &Path) -> String {
    template.replace(BINDIR_PLACEHOLDER, &bindir.to_string_lossy())
}
