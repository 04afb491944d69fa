use std::{fs, path::PathBuf};

use builderforge_config::{CONFIG_FILE, Config};
use clap::Args;
use eyre::{Context, Result, bail};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create forge.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing forge.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        if path.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }

        fs::create_dir_all(&self.dir)
            .wrap_err_with(|| format!("Failed to create {}", self.dir.display()))?;
        fs::write(&path, Config::template())
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        println!("Created {}", path.display());
        Ok(())
    }
}
