use crate::error::AnalysisError;
use crate::services::ImageAnalyzer;
use rayon::prelude::*;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Suffix of the per-run output folder
pub const OUTPUT_FOLDER_SUFFIX: &str = "_colour_analysis";

/// Where and how a batch runs
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory whose files are analyzed
    pub input: PathBuf,
    /// Directory in which the output folder is created
    pub output: PathBuf,
    /// Process files on the rayon thread pool
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            output: PathBuf::from("."),
            parallel: false,
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Folder the records and charts were written to
    pub output_folder: PathBuf,
    /// Files analyzed successfully
    pub processed: usize,
    /// Files that failed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// `<output>/<basename(input)>_colour_analysis`
///
/// The basename is empty for inputs like `.` that have no final component.
pub fn output_folder(input: &Path, output: &Path) -> PathBuf {
    let base = input
        .file_name()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    output.join(format!("{base}{OUTPUT_FOLDER_SUFFIX}"))
}

/// Regular files directly inside `dir`, sorted by name
pub fn list_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Output base names for a sorted file list.
///
/// Each file is named after its stem. Files sharing a stem (`part.png`,
/// `part.bmp`) would overwrite each other's outputs, so those keep their
/// full file name instead.
pub fn output_names(files: &[PathBuf]) -> Vec<String> {
    let stem_of = |file: &PathBuf| {
        file.file_stem()
            .map(OsStr::to_string_lossy)
            .unwrap_or_default()
            .into_owned()
    };

    let mut stem_counts: HashMap<String, usize> = HashMap::new();
    for file in files {
        *stem_counts.entry(stem_of(file)).or_default() += 1;
    }
    for (stem, count) in &stem_counts {
        if *count > 1 {
            tracing::warn!(
                stem = %stem,
                files = count,
                "Files share a name stem, outputs use full file names"
            );
        }
    }

    files
        .iter()
        .map(|file| {
            let stem = stem_of(file);
            if stem_counts[&stem] > 1 {
                file.file_name()
                    .map(OsStr::to_string_lossy)
                    .unwrap_or_default()
                    .into_owned()
            } else {
                stem
            }
        })
        .collect()
}

/// Output paths for one base name: `(<name>.json, <name>_histogram.png)`
pub fn output_paths(folder: &Path, name: &str) -> (PathBuf, PathBuf) {
    (
        folder.join(format!("{name}.json")),
        folder.join(format!("{name}_histogram.png")),
    )
}

/// Analyze every file of the input directory.
///
/// Per-file failures are logged and collected in the report; only problems
/// with the directories themselves abort the run.
pub fn run_batch(
    analyzer: &ImageAnalyzer,
    options: &BatchOptions,
) -> Result<BatchReport, AnalysisError> {
    let folder = output_folder(&options.input, &options.output);
    std::fs::create_dir_all(&folder)?;

    let files = list_files(&options.input)?;
    tracing::info!(
        input = %options.input.display(),
        output = %folder.display(),
        files = files.len(),
        parallel = options.parallel,
        "Starting batch"
    );

    let jobs: Vec<(PathBuf, String)> = {
        let names = output_names(&files);
        files.into_iter().zip(names).collect()
    };

    let process = |(path, name): &(PathBuf, String)| {
        let result = process_file(analyzer, path, &folder, name);
        if let Err(e) = &result {
            log_failure(path, e);
        }
        result.map_err(|e| e.to_string())
    };

    let results: Vec<Result<(), String>> = if options.parallel {
        jobs.par_iter().map(process).collect()
    } else {
        jobs.iter().map(process).collect()
    };

    let mut report = BatchReport {
        output_folder: folder,
        ..Default::default()
    };
    for ((path, _), result) in jobs.into_iter().zip(results) {
        match result {
            Ok(()) => report.processed += 1,
            Err(reason) => report.failed.push((path, reason)),
        }
    }

    tracing::info!(
        processed = report.processed,
        failed = report.failed.len(),
        "Batch complete"
    );
    Ok(report)
}

fn process_file(
    analyzer: &ImageAnalyzer,
    path: &Path,
    folder: &Path,
    name: &str,
) -> Result<(), AnalysisError> {
    let report = analyzer.analyze_path(path)?;
    let (json_path, histogram_path) = output_paths(folder, name);
    analyzer.write_outputs(&report, &json_path, &histogram_path)?;

    tracing::info!(
        file = %path.display(),
        keys = report.result.len(),
        pixels = report.result.total(),
        "Wrote census"
    );
    Ok(())
}

fn log_failure(path: &Path, error: &AnalysisError) {
    match error {
        AnalysisError::Decode(e) => {
            tracing::warn!(file = %path.display(), %e, "Not an image, skipping")
        }
        e => tracing::warn!(file = %path.display(), %e, "Failed to analyze image"),
    }
}
