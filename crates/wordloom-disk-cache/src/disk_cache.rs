//! # Wordloom Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::WORDLOOM_CACHE_CONFIG;

/// Options for [`WordloomDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct WordloomDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl WordloomDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Disk cache for downloaded vector table files.
///
/// Leverages [`Downloader`] for downloading files, and
/// [`PathResolver`](`crate::PathResolver`) for resolving a cache path
/// appropriate for a user/system combo, and any environment overrides.
pub struct WordloomDiskCache {
    /// Cache directory.
    cache_dir: PathBuf,

    /// Connection pool for downloading files.
    downloader: Downloader,
}

impl Default for WordloomDiskCache {
    fn default() -> Self {
        Self::new(WordloomDiskCacheOptions::default()).unwrap()
    }
}

impl WordloomDiskCache {
    /// Construct a new [`WordloomDiskCache`].
    pub fn new(options: WordloomDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = WORDLOOM_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let downloader = match options.downloader {
            Some(builder) => builder(),
            None => Downloader::builder().build()?,
        };

        Ok(Self {
            cache_dir,
            downloader,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the downloader.
    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    /// Get the cache path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.cache_dir` and `file`.
    /// * `file` - the final file name.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        let mut path = self.cache_dir.clone();
        path.extend(context.iter().map(|s| s.as_ref()));
        path.push(file.as_ref());
        path
    }

    /// Loads a cached file from a specified path or downloads it if it
    /// does not exist.
    ///
    /// # Arguments
    /// * `context` - prefix dirs used in determining the cache location.
    /// * `urls` - the mirror URLs to download the file from if it is
    ///   not already cached.
    /// * `download` - whether to attempt downloading the file when it
    ///   does not already exist in the cache.
    ///
    /// # Returns
    /// A [`PathBuf`] pointing to the cached file if it exists or is
    /// successfully downloaded.
    ///
    /// # Errors
    /// * Returns an error if the cached file does not exist and
    ///   `download` is `false`.
    /// * Returns an error if the downloading process fails.
    pub fn load_cached_path<C, S>(
        &mut self,
        context: &[C],
        urls: &[S],
        download: bool,
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let urls: Vec<_> = urls.iter().map(|s| s.as_ref()).collect();
        let mut dl = Download::new_mirrored(&urls);
        let file_name = dl.file_name.clone();
        let path = self.cache_path(context, &file_name);
        dl.file_name = path.clone();

        if path.exists() {
            return Ok(path);
        }

        if !download {
            anyhow::bail!("cached file not found: {}", path.display());
        }

        fs::create_dir_all(path.parent().unwrap())?;

        self.downloader.download(&[dl])?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf};

    use serial_test::serial;

    use crate::{
        WORDLOOM_CACHE_CONFIG,
        WORDLOOM_CACHE_DIR,
        disk_cache::{WordloomDiskCache, WordloomDiskCacheOptions},
    };

    #[test]
    #[serial]
    fn test_resolve_cache_dir() {
        let orig_cache_dir = env::var(WORDLOOM_CACHE_DIR);

        let pds = WORDLOOM_CACHE_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let user_cache_dir = PathBuf::from("/tmp/wordloom/cache");
        let env_cache_dir = PathBuf::from("/tmp/wordloom/env_cache");

        // No env var.
        unsafe {
            env::remove_var(WORDLOOM_CACHE_DIR);
        }

        let cache = WordloomDiskCache::new(
            WordloomDiskCacheOptions::default().with_cache_dir(Some(user_cache_dir.clone())),
        )
        .unwrap();
        assert_eq!(&cache.cache_dir(), &user_cache_dir);

        let cache = WordloomDiskCache::new(WordloomDiskCacheOptions::default()).unwrap();
        assert_eq!(&cache.cache_dir(), &pds.cache_dir().to_path_buf());

        // With env var.
        unsafe {
            env::set_var(WORDLOOM_CACHE_DIR, env_cache_dir.to_str().unwrap());
        }

        let cache = WordloomDiskCache::new(
            WordloomDiskCacheOptions::default().with_cache_dir(Some(user_cache_dir.clone())),
        )
        .unwrap();
        assert_eq!(&cache.cache_dir(), &user_cache_dir);

        let cache = WordloomDiskCache::new(WordloomDiskCacheOptions::default()).unwrap();
        assert_eq!(&cache.cache_dir(), &env_cache_dir);

        // Restore original env var.
        match orig_cache_dir {
            Ok(original) => unsafe { env::set_var(WORDLOOM_CACHE_DIR, original) },
            Err(_) => unsafe { env::remove_var(WORDLOOM_CACHE_DIR) },
        }
    }

    #[test]
    #[serial]
    fn test_cache_path() {
        let cache = WordloomDiskCache::new(WordloomDiskCacheOptions::default()).unwrap();
        let path = cache.cache_path(&["glove"], "glove.6B.100d.txt");
        assert_eq!(
            path,
            cache.cache_dir().join("glove").join("glove.6B.100d.txt")
        );
    }
}
