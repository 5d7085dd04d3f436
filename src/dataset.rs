//! Dataset sources.
//!
//! A source first lists what it has (label and declared size) and then loads
//! datasets one at a time, so a broken dataset only fails its own load.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::LoadError;

/// Column holding the integers in dataset CSV files.
pub const VALUE_COLUMN: &str = "Value";

const FILE_PREFIX: &str = "data_list_";
const FILE_SUFFIX: &str = ".csv";

/// A loaded, validated integer sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    size: usize,
    values: Vec<i64>,
}

impl Dataset {
    /// Validate `values` against the declared size.
    pub fn new(declared_size: usize, values: Vec<i64>) -> Result<Self, LoadError> {
        if values.is_empty() {
            return Err(LoadError::Empty);
        }
        if values.len() != declared_size {
            return Err(LoadError::SizeMismatch {
                declared: declared_size,
                actual: values.len(),
            });
        }
        Ok(Self {
            size: declared_size,
            values,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

/// Something a source can load, identified by `key` within that source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetHandle {
    pub label: String,
    pub declared_size: usize,
    pub key: usize,
}

/// Supplies datasets to the collector.
pub trait DatasetSource {
    /// List available datasets. Order does not matter.
    fn discover(&self) -> Result<Vec<DatasetHandle>, LoadError>;

    /// Load one dataset previously returned by [`discover`](Self::discover).
    fn load(&self, handle: &DatasetHandle) -> Result<Dataset, LoadError>;
}

/// File name for a dataset of `size` values.
pub fn dataset_file_name(size: usize) -> String {
    format!("{FILE_PREFIX}{size}{FILE_SUFFIX}")
}

/// Declared size encoded in a `data_list_<N>.csv` file name.
pub fn parse_dataset_file_name(name: &str) -> Option<usize> {
    name.strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?
        .parse()
        .ok()
}

/// Parse CSV text with a header row and a [`VALUE_COLUMN`] column.
///
/// Blank lines are ignored. Line numbers in errors are 1-based.
pub fn parse_values(text: &str) -> Result<Vec<i64>, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header)) = lines.next() else {
        return Err(LoadError::Empty);
    };
    let column = header
        .trim_start_matches('\u{feff}')
        .split(',')
        .position(|name| name.trim().trim_matches('"') == VALUE_COLUMN)
        .ok_or(LoadError::MissingColumn(VALUE_COLUMN))?;

    lines
        .map(|(idx, line)| {
            let field = line.split(',').nth(column).unwrap_or("").trim().trim_matches('"');
            field.parse::<i64>().map_err(|_| LoadError::Parse {
                line: idx + 1,
                content: field.to_string(),
            })
        })
        .collect()
}

/// Write `values` as a dataset CSV file inside `dir`.
pub fn write_dataset(dir: &Path, values: &[i64]) -> std::io::Result<PathBuf> {
    let path = dir.join(dataset_file_name(values.len()));
    let mut file = std::io::BufWriter::new(fs::File::create(&path)?);

    writeln!(file, "{VALUE_COLUMN}")?;
    for v in values {
        writeln!(file, "{v}")?;
    }
    file.flush()?;
    Ok(path)
}

/// Datasets stored as `data_list_<N>.csv` files in one directory.
///
/// Other files are ignored. The declared size comes from the file name.
#[derive(Clone, Debug)]
pub struct CsvDirSource {
    dir: PathBuf,
    files: Vec<PathBuf>,
}

impl CsvDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: Vec::new(),
        }
    }

    /// Scan the directory. Must be called before handing the source out.
    pub fn scan(mut self) -> Result<Self, LoadError> {
        let io_err = |source| LoadError::Io {
            path: self.dir.clone(),
            source,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let name = entry.file_name();
            if name.to_str().and_then(parse_dataset_file_name).is_some() {
                files.push(entry.path());
            }
        }
        files.sort();
        self.files = files;
        Ok(self)
    }
}

impl DatasetSource for CsvDirSource {
    fn discover(&self) -> Result<Vec<DatasetHandle>, LoadError> {
        Ok(self
            .files
            .iter()
            .enumerate()
            .filter_map(|(key, path)| {
                let label = path.file_name()?.to_str()?.to_string();
                let declared_size = parse_dataset_file_name(&label)?;
                Some(DatasetHandle {
                    label,
                    declared_size,
                    key,
                })
            })
            .collect())
    }

    fn load(&self, handle: &DatasetHandle) -> Result<Dataset, LoadError> {
        let path = self
            .files
            .get(handle.key)
            .ok_or_else(|| LoadError::Unavailable(format!("unknown dataset {}", handle.label)))?;
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        Dataset::new(handle.declared_size, parse_values(&text)?)
    }
}

/// Seeded random datasets, one per requested size.
///
/// Values are drawn from `0..=DEFAULT_MAX_VALUE`, so any negative target is absent.
#[derive(Clone, Debug)]
pub struct SyntheticSource {
    sizes: Vec<usize>,
    seed: u64,
}

impl SyntheticSource {
    pub const DEFAULT_MAX_VALUE: i64 = 1_000_000;

    pub fn new(sizes: Vec<usize>, seed: u64) -> Self {
        Self { sizes, seed }
    }

    /// Values for `size`; the same `(seed, size)` always gives the same data.
    pub fn generate(&self, size: usize) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(self.seed ^ (size as u64).rotate_left(32));
        (0..size).map(|_| rng.random_range(0..=Self::DEFAULT_MAX_VALUE)).collect()
    }
}

impl DatasetSource for SyntheticSource {
    fn discover(&self) -> Result<Vec<DatasetHandle>, LoadError> {
        Ok(self
            .sizes
            .iter()
            .enumerate()
            .map(|(key, &size)| DatasetHandle {
                label: format!("synthetic-{size}"),
                declared_size: size,
                key,
            })
            .collect())
    }

    fn load(&self, handle: &DatasetHandle) -> Result<Dataset, LoadError> {
        Dataset::new(handle.declared_size, self.generate(handle.declared_size))
    }
}

/// Datasets given up front, some of which may be set to fail on load.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    entries: Vec<(String, usize, Result<Vec<i64>, String>)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset whose declared size is its length.
    pub fn with_dataset(self, values: Vec<i64>) -> Self {
        let size = values.len();
        self.with_declared(size, values)
    }

    /// Add a dataset with an explicit declared size.
    pub fn with_declared(mut self, declared_size: usize, values: Vec<i64>) -> Self {
        let label = format!("memory-{}", self.entries.len());
        self.entries.push((label, declared_size, Ok(values)));
        self
    }

    /// Add a dataset that fails to load with `reason`.
    pub fn with_failure(mut self, declared_size: usize, reason: impl Into<String>) -> Self {
        let label = format!("memory-{}", self.entries.len());
        self.entries.push((label, declared_size, Err(reason.into())));
        self
    }
}

impl DatasetSource for InMemorySource {
    fn discover(&self) -> Result<Vec<DatasetHandle>, LoadError> {
        Ok(self
            .entries
            .iter()
            .enumerate()
            .map(|(key, (label, declared_size, _))| DatasetHandle {
                label: label.clone(),
                declared_size: *declared_size,
                key,
            })
            .collect())
    }

    fn load(&self, handle: &DatasetHandle) -> Result<Dataset, LoadError> {
        match self.entries.get(handle.key) {
            Some((_, declared, Ok(values))) => Dataset::new(*declared, values.clone()),
            Some((_, _, Err(reason))) => Err(LoadError::Unavailable(reason.clone())),
            None => Err(LoadError::Unavailable(format!("unknown dataset {}", handle.label))),
        }
    }
}
