//! Binstub rendering and writing.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use super::directive::StubOptions;
use crate::error::{BinstubError, Result};

pub const GO_RUN: &str = "go run";

#[cfg(unix)]
const STUB_MODE: u32 = 0o755;

/// Derive the binstub file name from a module path (its last segment).
///
/// Returns `None` when no usable name exists, e.g. `"/"` or `"tool/.."`.
pub fn stub_name(module_path: &str) -> Option<&str> {
    let name = module_path.trim_end_matches('/').rsplit('/').next()?;
    match name {
        "" | "." | ".." => None,
        name => Some(name),
    }
}

/// The command line used to run the module, e.g. `go run -tags postgres`.
pub fn run_command(options: &StubOptions) -> String {
    if options.extra_args.is_empty() {
        GO_RUN.to_string()
    } else {
        format!("{} {}", GO_RUN, options.extra_args)
    }
}

/// Render the binstub script into `writer`.
pub fn render_stub<W: Write>(
    writer: &mut W,
    run_command: &str,
    module_path: &str,
) -> io::Result<()> {
    writeln!(writer, "#!/bin/sh")?;
    writeln!(writer, "# Code generated by binstubs. DO NOT EDIT.")?;
    writeln!(writer)?;
    writeln!(writer, "exec {} {} \"$@\"", run_command, module_path)?;
    Ok(())
}

/// Write a binstub to `path`, replacing any existing file.
///
/// The file is left executable on Unix, even if it existed with other
/// permissions. Its parent directory must exist.
pub fn write_stub(path: &Path, run_command: &str, module_path: &str) -> Result<()> {
    let mut open_options = OpenOptions::new();
    open_options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open_options.mode(STUB_MODE);
    }

    let mut file = open_options
        .open(path)
        .map_err(|err| BinstubError::io(path, err))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(STUB_MODE))
            .map_err(|err| BinstubError::io(path, err))?;
    }

    let mut rendered = Vec::new();
    render_stub(&mut rendered, run_command, module_path)
        .map_err(|err| BinstubError::io(path, err))?;
    file.write_all(&rendered)
        .and_then(|()| file.flush())
        .map_err(|err| BinstubError::io(path, err))?;

    Ok(())
}

/// Create the output directory (and parents) if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| BinstubError::io(dir, err))
}
