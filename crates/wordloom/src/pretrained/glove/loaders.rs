//! # `GloVe` Pretrained Vector Table Loaders

use std::path::Path;

#[cfg(feature = "download")]
use std::path::PathBuf;

#[cfg(feature = "download")]
use crate::disk_cache::WordloomDiskCache;
use crate::{
    errors::{WLResult, WordloomError},
    vectors::{VectorTable, load_vector_table_path},
};

/// Shared download context key.
#[cfg(feature = "download")]
const GLOVE_KEY: &str = "glove";

/// Embedding dimensions with a published `GloVe` 6B table.
pub const SUPPORTED_GLOVE_DIMS: &[usize] = &[50, 100, 200, 300];

/// `GloVe` 6B pretrained vector table types.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[non_exhaustive]
pub enum GloveModel {
    /// `GloVe` 6B, 50-dimensional vectors.
    #[strum(serialize = "glove.6B.50d")]
    Glove6B50d,

    /// `GloVe` 6B, 100-dimensional vectors.
    #[strum(serialize = "glove.6B.100d")]
    Glove6B100d,

    /// `GloVe` 6B, 200-dimensional vectors.
    #[strum(serialize = "glove.6B.200d")]
    Glove6B200d,

    /// `GloVe` 6B, 300-dimensional vectors.
    #[strum(serialize = "glove.6B.300d")]
    Glove6B300d,
}

impl GloveModel {
    /// Resolve the model for a requested dimension.
    ///
    /// Fails before any I/O when `dim` is not one of the published
    /// sizes.
    ///
    /// ## Arguments
    /// * `dim` - the requested embedding dimension.
    ///
    /// ## Returns
    /// The matching model, or
    /// [`WordloomError::UnsupportedDimension`].
    pub fn from_dim(dim: usize) -> WLResult<Self> {
        use GloveModel::*;
        match dim {
            50 => Ok(Glove6B50d),
            100 => Ok(Glove6B100d),
            200 => Ok(Glove6B200d),
            300 => Ok(Glove6B300d),
            _ => Err(WordloomError::UnsupportedDimension {
                dim,
                supported: SUPPORTED_GLOVE_DIMS,
            }),
        }
    }

    /// The embedding dimension of this model.
    pub fn dim(&self) -> usize {
        use GloveModel::*;
        match self {
            Glove6B50d => 50,
            Glove6B100d => 100,
            Glove6B200d => 200,
            Glove6B300d => 300,
        }
    }

    /// The table file name inside the "glove.6B.zip" archive.
    pub fn file_name(&self) -> String {
        format!("{self}.txt")
    }

    /// Load this model's vector table from an extracted file on disk.
    ///
    /// ## Arguments
    /// * `path` - the path to the table file.
    pub fn load_path(
        &self,
        path: impl AsRef<Path>,
    ) -> WLResult<VectorTable> {
        load_vector_table_path(path, self.dim())
    }

    /// Load this model's vector table.
    ///
    /// Downloads and caches resources using the `disk_cache`.
    ///
    /// ## Arguments
    /// * `disk_cache` - the download cache.
    #[cfg(feature = "download")]
    pub fn load(
        &self,
        disk_cache: &mut WordloomDiskCache,
    ) -> WLResult<VectorTable> {
        self.load_path(fetch_glove_6b_table(disk_cache, *self)?)
    }
}

/// Fetch a `GloVe` 6B table file, extracting it from the cached archive.
///
/// Downloads the "glove.6B.zip" archive on first use; individual table
/// files are extracted next to it and reused afterwards.
///
/// ## Arguments
/// * `disk_cache` - the download cache.
/// * `model` - the table to extract.
///
/// ## Returns
/// The path of the extracted table file.
#[cfg(feature = "download")]
pub fn fetch_glove_6b_table(
    disk_cache: &mut WordloomDiskCache,
    model: GloveModel,
) -> WLResult<PathBuf> {
    use std::fs::{self, File};

    use crate::pretrained::glove::resources::GLOVE_6B_ARCHIVE_RESOURCE;

    let table_path = disk_cache.cache_path(&[GLOVE_KEY], model.file_name());
    if table_path.exists() {
        return Ok(table_path);
    }

    let archive_path = disk_cache
        .load_cached_path(&[GLOVE_KEY], GLOVE_6B_ARCHIVE_RESOURCE.urls, true)
        .map_err(|e| WordloomError::External(e.to_string()))?;

    let mut archive = zip::ZipArchive::new(File::open(&archive_path)?)
        .map_err(|e| WordloomError::External(e.to_string()))?;
    let mut member = archive
        .by_name(&model.file_name())
        .map_err(|e| WordloomError::External(e.to_string()))?;

    fs::create_dir_all(table_path.parent().unwrap())?;
    let mut target = File::create(&table_path)?;
    std::io::copy(&mut member, &mut target)?;

    log::info!(
        "extracted {} from {}",
        table_path.display(),
        archive_path.display(),
    );

    Ok(table_path)
}
