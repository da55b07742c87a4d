use std::{fs, io::Write, path::Path};

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::complaint::Dataset;

/// Writes the header and every row of `dataset`, returning the number of rows.
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(dataset.columns())?;
    for record in dataset {
        writer.write_record(record.cells())?;
    }
    writer.flush()?;
    Ok(dataset.len())
}

/// Exports `dataset` to a CSV file at `path`, creating parent directories.
pub fn export_csv(dataset: &Dataset, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    let file =
        fs::File::create(path).wrap_err_with(|| format!("failed to create {}", path.display()))?;
    let rows = write_csv(dataset, file)?;
    tracing::info!(path = %path.display(), rows, "exported filtered rows");
    Ok(rows)
}
