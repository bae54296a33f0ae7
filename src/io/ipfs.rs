//! Content-addressed storage boundary.
//!
//! Uploads go through the `ipfs` command-line tool:
//! - `ipfs add -r -Q --cid-version 1 <path>` for files and directories
//! - `ipfs add -Q --cid-version 1` with the payload on stdin for inline documents
//! - `ipfs id` as a connectivity probe
//!
//! Each call blocks until the child exits. There is no timeout and no retry.
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::Cid;

const ADD_ARGS: [&str; 4] = ["add", "-Q", "--cid-version", "1"];
const ADD_RECURSIVE_ARGS: [&str; 5] = ["add", "-r", "-Q", "--cid-version", "1"];

/// Something that stores content and hands back its identifier.
pub trait ContentStore {
    /// Fails when the backing node cannot be reached.
    fn check_connection(&self) -> Result<()>;

    /// Upload a file, or a directory recursively.
    fn add_path(&self, path: &Path) -> Result<Cid>;

    /// Upload an in-memory payload.
    fn add_bytes(&self, bytes: &[u8]) -> Result<Cid>;
}

/// `ContentStore` backed by the `ipfs` CLI talking to a local daemon.
#[derive(Debug, Clone)]
pub struct IpfsCli {
    bin: PathBuf,
}

impl Default for IpfsCli {
    fn default() -> Self {
        Self::new("ipfs")
    }
}

impl IpfsCli {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }

    fn render(&self, args: &[&str], path: Option<&Path>) -> String {
        let mut rendered = self.bin.display().to_string();
        for arg in args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        if let Some(path) = path {
            rendered.push(' ');
            rendered.push_str(&path.display().to_string());
        }
        rendered
    }

    fn spawn_error(&self, source: std::io::Error) -> Error {
        Error::Spawn {
            program: self.bin.display().to_string(),
            source,
        }
    }

    fn command_failed(command: String, output: &Output) -> Error {
        Error::CommandFailed {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    fn cid_from_output(command: String, output: Output) -> Result<Cid> {
        if !output.status.success() {
            return Err(Self::command_failed(command, &output));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let cid = stdout.trim();
        if cid.is_empty() {
            return Err(Error::EmptyCid { command });
        }
        Ok(Cid::new(cid))
    }
}

impl ContentStore for IpfsCli {
    fn check_connection(&self) -> Result<()> {
        let output = Command::new(&self.bin)
            .arg("id")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::NodeUnavailable {
                reason: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(Error::NodeUnavailable {
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        info!("Connected to IPFS node");
        Ok(())
    }

    fn add_path(&self, path: &Path) -> Result<Cid> {
        if !path.exists() {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }

        let command = self.render(&ADD_RECURSIVE_ARGS, Some(path));
        info!("Running upload: {}", command);

        let output = Command::new(&self.bin)
            .args(ADD_RECURSIVE_ARGS)
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        let cid = Self::cid_from_output(command, output)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Upload succeeded: {} -> {}", name, cid);
        Ok(cid)
    }

    fn add_bytes(&self, bytes: &[u8]) -> Result<Cid> {
        let command = self.render(&ADD_ARGS, None);
        info!("Uploading inline payload ({} bytes)", bytes.len());
        debug!("Running: {} < stdin", command);

        let mut child = Command::new(&self.bin)
            .args(ADD_ARGS)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Dropping stdin closes the pipe so the child sees EOF. A child that
        // exits early breaks the pipe; its exit status and stderr take priority.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(bytes),
            None => Ok(()),
        };
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Self::command_failed(command, &output));
        }
        written?;

        let cid = Self::cid_from_output(command, output)?;
        info!("Inline payload uploaded: {}", cid);
        Ok(cid)
    }
}
