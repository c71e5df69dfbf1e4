use crate::profile::ProfileCollection;
use anyhow::{anyhow, Context, Result};
use directories::UserDirs;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct AwsCredentials;

impl AwsCredentials {
    pub fn file_path(path_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = path_override {
            return Ok(path.to_path_buf());
        }

        match UserDirs::new() {
            Some(user_dirs) => Ok(user_dirs.home_dir().join(".aws/credentials")),
            None => Err(anyhow!("Unable to get user directories")),
        }
    }

    /// A missing file is the first run, and reads as no profiles.
    pub fn read_file(path: &Path) -> Result<ProfileCollection> {
        match fs::read_to_string(path) {
            Ok(raw) => {
                let profiles = ProfileCollection::parse(&raw);
                debug!(
                    "Read {} profiles from {}",
                    profiles.profiles.len(),
                    path.display()
                );
                Ok(profiles)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No AWS credentials file at {}", path.display());
                Ok(ProfileCollection::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Unable to read {}", path.display()))
            }
        }
    }

    pub fn write(path: &Path, profiles: &ProfileCollection) -> Result<()> {
        let contents = profiles.render();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_private_dir(parent)
                .with_context(|| format!("Unable to create {}", parent.display()))?;
        }

        let mut file = open_private_file(path)
            .with_context(|| format!("Unable to open {}", path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Unable to write {}", path.display()))?;

        info!("AWS Credentials file modified");

        Ok(())
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn open_private_file(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private_file(path: &Path) -> std::io::Result<fs::File> {
    fs::File::create(path)
}
