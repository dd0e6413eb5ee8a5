use std::path::Path;

use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;
use csv::ReaderBuilder;
use csv::StringRecord;
use csv::WriterBuilder;
use glob::glob;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use itertools::Itertools;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

pub mod envelope;
pub mod profile;
pub mod samples;

use samples::Samples;

/// what the harness writes and the plotter reads when nobody says otherwise
pub const RESULTS_FILE: &str = "results.csv";
pub const DELIMITER: u8 = b' ';

/// one line of a results file: `<array_size> <sortedness> <execution_time>`
#[derive(Debug, Clone, Copy, serde_derive::Deserialize, serde_derive::Serialize, PartialEq)]
pub struct SampleRow {
    pub array_size: f64,
    pub sortedness: f64,
    pub execution_time: f64,
}

/// parse a single record. empty fields are dropped first, so repeated or
/// trailing delimiters don't count as columns. `inf` and `NaN` parse as
/// floats but are rejected: nothing can be plotted against them.
///
/// ```
/// # use csv::StringRecord;
/// # use lib::parse_row;
/// let row = StringRecord::from(vec!["100.0", "4.0", "0.25", ""]);
/// let parsed = parse_row(&row).unwrap();
/// assert_eq!(parsed.array_size, 100.0);
/// assert_eq!(parsed.execution_time, 0.25);
///
/// let row = StringRecord::from(vec!["100.0", "4.0", "inf"]);
/// assert!(parse_row(&row).is_err());
/// ```
pub fn parse_row(row: &StringRecord) -> Result<SampleRow> {
    let fields = row
        .iter()
        .filter(|f| !f.is_empty())
        .collect::<StringRecord>();

    if fields.len() != 3 {
        bail!(
            "improper row length ({}): {:?}",
            fields.len(),
            row.iter().collect_vec()
        );
    }

    let p: SampleRow = fields.deserialize(None)?;
    for (name, v) in [
        ("array size", p.array_size),
        ("sortedness", p.sortedness),
        ("execution time", p.execution_time),
    ] {
        if !v.is_finite() {
            bail!("non-finite {name}: {v}");
        }
    }
    Ok(p)
}

/// read every file matching `g` (a plain path is a valid pattern too) and
/// return its records, file by file, in glob order.
pub fn read_glob_csv(g: &str) -> Result<Vec<(String, Vec<StringRecord>)>> {
    let mut files = vec![];

    for src in glob(g)? {
        let path = src?;
        let mut csv_read = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .map_err(|e| anyhow!("couldn't open results file ({}): {e}", path.display()))?;

        let rows = csv_read
            .records()
            .collect::<Result<Vec<_>, csv::Error>>()?;
        files.push((path.display().to_string(), rows));
    }

    if files.is_empty() {
        bail!("no results file found matching {g:?}");
    }

    Ok(files)
}

/// load a results file (or several, via a glob) into parallel sequences.
/// fails on the first malformed row, before anyone gets to plot anything.
pub fn load_samples(g: &str) -> Result<Samples> {
    let mut samples = Samples::new();

    for (path, rows) in read_glob_csv(g)? {
        let parsed = rows
            .par_iter()
            .map(|row| {
                parse_row(row).map_err(|e| {
                    let line = row.position().map_or(0, |p| p.line());
                    anyhow!("malformed row in {path} (line {line}): {e}")
                })
            })
            .collect::<Result<Vec<SampleRow>>>()?;

        log::debug!("{path}: {} rows", parsed.len());
        parsed.into_iter().for_each(|r| samples.push(r));
    }

    Ok(samples)
}

/// write samples in the format [`load_samples`] reads
pub fn write_samples<P: AsRef<Path>>(path: P, samples: &Samples) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_path(path)
        .map_err(|e| anyhow!("couldn't open output file ({}): {e}", path.display()))?;

    samples
        .iter()
        .try_for_each(|row| writer.serialize(row))
        .map_err(|e| anyhow!("writer err: {e:?}"))?;
    writer.flush()?;

    Ok(())
}

pub fn progress_bar(n: u64) -> Result<ProgressBar> {
    Ok(
        ProgressBar::new(n).with_style(ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )?),
    )
}
