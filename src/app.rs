use std::path::{Path, PathBuf};

use crate::cli::output::OutputMode;
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::Result;
use crate::lint::TargetCatalog;
use crate::source::DirectorySource;

pub struct AppContext {
    /// Directory holding one sub-directory per namespace
    pub root: PathBuf,
    pub config: Config,
    pub output_mode: OutputMode,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => Self::find_root()?,
        };
        let config = Config::load(cli.config.as_deref(), &root)?;

        Ok(Self {
            root,
            config,
            output_mode: cli.output_mode(),
            verbosity: cli.verbose,
        })
    }

    /// The nearest directory at or above the working directory that holds a
    /// project config file, else the working directory itself.
    fn find_root() -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(find_upwards(&cwd, PROJECT_CONFIG_FILE).unwrap_or(cwd))
    }

    #[must_use]
    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.root)
    }

    /// Resolve a possibly relative path against the content root.
    #[must_use]
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Load the target catalog named by `explicit` or the config, if any.
    pub fn load_catalog(&self, explicit: Option<&Path>) -> Result<Option<TargetCatalog>> {
        let Some(path) = explicit.or(self.config.validation.catalog.as_deref()) else {
            return Ok(None);
        };
        TargetCatalog::load(&self.resolve_path(path)).map(Some)
    }
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(name).is_file() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}
