use crate::error::{CliError, Result};
use chrono::Local;
use shelf_engine::{
    CompatiblePosition, ShelfLineItem,
    export::{write_positions, write_shelf_lines},
};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Creates `<prefix>_<timestamp>.csv` in `output_dir` (or the working directory)
fn create_timestamped(prefix: &str, output_dir: Option<&Path>) -> Result<(PathBuf, BufWriter<File>)> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("{prefix}_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| CliError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| CliError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;
    Ok((file_path, BufWriter::new(file)))
}

pub fn export_shelf_lines(
    shelf_lines: &[Vec<Vec<ShelfLineItem>>],
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let (path, writer) = create_timestamped("shelf_lines", output_dir)?;
    write_shelf_lines(writer, shelf_lines)?;
    Ok(path)
}

pub fn export_positions(
    positions: &[CompatiblePosition],
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let (path, writer) = create_timestamped("positions", output_dir)?;
    write_positions(writer, positions)?;
    Ok(path)
}
