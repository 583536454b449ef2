use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod scan;

const BIN_NAME: &str = "langcov";

const MO_MAGIC: u32 = 0x950412de;

const QM_MAGIC: [u8; 16] = [
    0x3c, 0xb8, 0x64, 0x18, 0xca, 0xef, 0x9c, 0x95, 0xcd, 0x21, 0x1c, 0xbf, 0x60, 0xa1, 0xbd, 0xdd,
];

/// A header-only gettext catalog declaring `nstrings` string pairs.
pub fn mo_catalog(nstrings: u32) -> Vec<u8> {
    [MO_MAGIC, 0, nstrings, 28, 28, 0, 0, 0, 0, 0, 0, 0]
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .collect()
}

/// A Qt catalog with `nstrings` context/source/translation messages.
pub fn qm_catalog(nstrings: usize) -> Vec<u8> {
    let mut data = QM_MAGIC.to_vec();
    data.push(0x42);
    data.extend_from_slice(&0u32.to_be_bytes());
    data.push(0x69);
    data.extend_from_slice(&0u32.to_be_bytes());
    for i in 0..nstrings {
        for (tag, text) in [
            (7u8, "Window".to_string()),
            (6, format!("source {i}")),
            (3, format!("translation {i}")),
        ] {
            data.push(tag);
            data.extend_from_slice(&(text.len() as u32).to_be_bytes());
            data.extend_from_slice(text.as_bytes());
        }
        data.push(1);
    }
    data
}

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // stop config discovery at the test directory
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Installs a gettext catalog below `prefix`.
    pub fn write_mo(&self, prefix: &str, locale: &str, domain: &str, nstrings: u32) -> Result<()> {
        self.write_file(
            &format!("{prefix}/share/locale/{locale}/LC_MESSAGES/{domain}.mo"),
            mo_catalog(nstrings),
        )
    }

    /// Installs a Qt catalog below `prefix`.
    pub fn write_qm(&self, prefix: &str, id: &str, locale: &str, nstrings: usize) -> Result<()> {
        self.write_file(
            &format!("{prefix}/share/{id}/translations/{id}_{locale}.qm"),
            qm_catalog(nstrings),
        )
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn scan_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("scan");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
