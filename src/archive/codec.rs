//! Archive writers
//!
//! Both codecs store every regular file under the project directory with its
//! path relative to the project root. The tar variant additionally nests all
//! entries under the project name and records directories.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use super::ArchiveError;
use crate::models::ArchiveFormat;

/// A walked entry under the project root
struct Entry<'a> {
    absolute: &'a Path,
    relative: &'a Path,
    is_dir: bool,
}

/// Zip entry name for a relative path (`/` separated)
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walk `root` and call `visit` for every directory and regular file below it.
///
/// Directory symlinks are not followed; symlinks pointing at files are
/// stored as the file they point to.
fn walk(
    root: &Path,
    mut visit: impl FnMut(Entry<'_>) -> Result<(), ArchiveError>,
) -> Result<(), ArchiveError> {
    for entry in WalkDir::new(root).min_depth(1).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type();

        let is_dir = file_type.is_dir();
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if !is_dir && !is_file {
            continue;
        }

        let relative = path.strip_prefix(root)?;
        visit(Entry {
            absolute: path,
            relative,
            is_dir,
        })?;
    }
    Ok(())
}

/// Write the archive for `project_dir` into `out` using `format`
pub fn write_archive<W: Write + io::Seek>(
    format: ArchiveFormat,
    project_dir: &Path,
    project_name: &str,
    out: W,
) -> Result<W, ArchiveError> {
    match format {
        ArchiveFormat::Zip => write_zip(project_dir, out),
        ArchiveFormat::TarGz => write_tar_gz(project_dir, project_name, out),
    }
}

fn write_zip<W: Write + io::Seek>(project_dir: &Path, out: W) -> Result<W, ArchiveError> {
    let mut zip = zip::ZipWriter::new(out);

    walk(project_dir, |entry| {
        if entry.is_dir {
            return Ok(());
        }
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(true);
        zip.start_file(entry_name(entry.relative), options)?;
        let mut file = File::open(entry.absolute)?;
        io::copy(&mut file, &mut zip)?;
        Ok(())
    })?;

    Ok(zip.finish()?)
}

fn write_tar_gz<W: Write>(
    project_dir: &Path,
    project_name: &str,
    out: W,
) -> Result<W, ArchiveError> {
    let encoder = GzEncoder::new(out, Compression::default());
    let mut tar = tar::Builder::new(encoder);
    tar.follow_symlinks(true);

    tar.append_dir(project_name, project_dir)?;
    walk(project_dir, |entry| {
        let name = Path::new(project_name).join(entry.relative);
        if entry.is_dir {
            tar.append_dir(name, entry.absolute)?;
        } else {
            tar.append_path_with_name(entry.absolute, name)?;
        }
        Ok(())
    })?;

    Ok(tar.into_inner()?.finish()?)
}
