use crate::{
    config::Config,
    error::{Error, Result},
    utils::fs::{copy_dir_all, is_non_empty_dir},
};
use log::{error, info};
use std::{
    io,
    path::{Component, Path, PathBuf},
};
use tokio::fs;

/// Named templates stored as directories under one root.
#[derive(Debug, Clone)]
pub struct Templates {
    root: PathBuf,
}

impl Templates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `base_dir` anchors a relative `templates-root` from the config file.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        Self::new(config.templates_root(base_dir))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `name` onto the root. Root and prefix components of `name` are
    /// dropped so an absolute name still lands under the root.
    pub fn template_path(&self, name: &str) -> PathBuf {
        Path::new(name)
            .components()
            .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
            .fold(self.root.clone(), |path, component| path.join(component))
    }

    /// Copies the template `name` into `dest`.
    ///
    /// Fails with [`Error::InvalidTemplate`] when the template is missing or not
    /// a directory, and with [`Error::DestinationNotEmpty`] when `dest` already
    /// has entries. Nothing is written in either case. Errors raised while
    /// copying are returned unchanged and leave the partial copy behind.
    pub async fn copy_template(&self, name: &str, dest: impl AsRef<Path>) -> Result<()> {
        let dest = dest.as_ref();
        let template_path = self.template_path(name);

        match fs::metadata(&template_path).await {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Err(Error::InvalidTemplate(name.to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::InvalidTemplate(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        }

        if is_non_empty_dir(dest).await? {
            error!(
                "Destination directory '{}' already exists and is not empty.",
                dest.display()
            );
            return Err(Error::DestinationNotEmpty(dest.to_path_buf()));
        }

        info!(
            "Copying template {name} from {} to {}",
            template_path.display(),
            dest.display()
        );
        copy_dir_all(&template_path, dest).await?;
        info!("Template {name} copied to {}", dest.display());
        Ok(())
    }
}

/// Copies the template `name` found under `templates_root` into `dest`.
pub async fn copy_template(
    templates_root: impl Into<PathBuf>,
    name: &str,
    dest: impl AsRef<Path>,
) -> Result<()> {
    Templates::new(templates_root).copy_template(name, dest).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_path_joins_under_root() {
        let templates = Templates::new("/opt/scaffold/templates");
        assert_eq!(
            templates.template_path("codemos"),
            PathBuf::from("/opt/scaffold/templates/codemos")
        );
        assert_eq!(
            templates.template_path("web/leptos"),
            PathBuf::from("/opt/scaffold/templates/web/leptos")
        );
    }

    #[cfg(unix)]
    #[test]
    fn template_path_keeps_absolute_names_under_root() {
        let templates = Templates::new("/opt/scaffold/templates");
        assert_eq!(
            templates.template_path("/etc"),
            PathBuf::from("/opt/scaffold/templates/etc")
        );
    }

    #[test]
    fn template_path_keeps_parent_segments() {
        let templates = Templates::new("root/templates");
        assert_eq!(
            templates.template_path("../templates/codemos"),
            PathBuf::from("root/templates/../templates/codemos")
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::InvalidTemplate("nonexistent-template".to_string()).to_string(),
            "nonexistent-template is not a valid directory."
        );
        assert_eq!(
            Error::DestinationNotEmpty(PathBuf::from("./dest")).to_string(),
            "Destination directory is not empty. Operation aborted to prevent overwriting."
        );
    }
}
