//! Corpus file output.
//!
//! Messages are written one file per message into a category-specific
//! directory, numbered sequentially from 1 as `<category><index>.txt`.
//! Each file goes through a hidden temporary file and a rename so no
//! message file is ever left partially written.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};

use crate::category::Category;
use crate::error::WriteError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes every message into the category directory under `root`.
///
/// The category directory is created if absent; creating an existing
/// directory is not an error. Files are named `<category><index>.txt`
/// with indices starting at 1, in message order. Returns the number of
/// files written.
///
/// # Errors
///
/// Returns [`WriteError`] if the directory cannot be created or opened,
/// or if any message file cannot be written.
pub fn write_category(
    root: &Dir,
    category: Category,
    messages: &[String],
) -> Result<usize, WriteError> {
    let label = category.as_str();
    root.create_dir_all(label)
        .map_err(|err| WriteError::CreateDir {
            path: label.into(),
            message: err.to_string(),
        })?;
    let dir = root.open_dir(label).map_err(|err| WriteError::OpenDir {
        path: label.into(),
        message: err.to_string(),
    })?;

    for (message, index) in messages.iter().zip(1_usize..) {
        let file_name = format!("{label}{index}.txt");
        write_atomic(&dir, Utf8Path::new(&file_name), message)?;
    }

    Ok(messages.len())
}

/// Writes contents to a file atomically using a temp file and rename.
fn write_atomic(dir: &Dir, file_name: &Utf8Path, contents: &str) -> Result<(), WriteError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{file_name}.tmp.{}.{counter}", std::process::id());

    write_to_temp_file(dir, &tmp_name, file_name, contents)?;
    rename_temp_to_target(dir, &tmp_name, file_name)
}

fn write_to_temp_file(
    dir: &Dir,
    tmp_name: &str,
    target: &Utf8Path,
    contents: &str,
) -> Result<(), WriteError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| WriteError::Write {
            path: target.to_owned(),
            message: err.to_string(),
        })?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(WriteError::Write {
            path: target.to_owned(),
            message: err.to_string(),
        });
    }

    Ok(())
}

fn rename_temp_to_target(dir: &Dir, tmp_name: &str, target: &Utf8Path) -> Result<(), WriteError> {
    if let Err(err) = rename_impl(dir, tmp_name, target.as_str()) {
        // Best-effort cleanup of the temp file on rename failure.
        drop(dir.remove_file(tmp_name));
        return Err(WriteError::Write {
            path: target.to_owned(),
            message: err.to_string(),
        });
    }
    Ok(())
}

#[cfg(windows)]
fn rename_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}
