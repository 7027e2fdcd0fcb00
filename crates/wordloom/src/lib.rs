//! # `wordloom` Vocabulary & Embedding Builder
//!
//! `wordloom` turns a corpus of raw text into a deterministic
//! word/index vocabulary and a dense embedding matrix seeded from a
//! pretrained word-vector table.
//!
//! See:
//! * [`vocab`] to count corpus words and build a [`vocab::WordVocab`].
//! * [`vectors`] to load pretrained [`vectors::VectorTable`]s.
//! * [`embedding`] to assemble an [`embedding::EmbeddingMatrix`].
//! * [`normalize`] for the shared text normalization rules.
//!
//! Pretrained public vector tables are available through:
//! * [`pretrained::glove`]
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``download``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is
//! a performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WLHash{*}`` type alias machinery.
//!
//! #### feature: ``download``
//!
//! The download feature enables downloading pretrained vector tables
//! from the internet.
//!
//! ## Building a Vocabulary and Matrix
//!
//! ```rust,no_run
//! use wordloom::disk_cache::WordloomDiskCache;
//! use wordloom::embedding::EmbeddingAssemblerOptions;
//! use wordloom::pretrained::glove::GloveModel;
//! use wordloom::vocab::WordVocabBuilderOptions;
//!
//! type T = u32;
//! type C = u64;
//!
//! let mut builder = WordVocabBuilderOptions::default()
//!     .with_min_count(2)
//!     .init::<C>();
//! builder.update_from_samples(["the cat sat", "the cat ran"]);
//! let vocab = builder.build::<T>().unwrap();
//!
//! let mut disk_cache = WordloomDiskCache::default();
//! let table = GloveModel::from_dim(100)
//!     .unwrap()
//!     .load(&mut disk_cache)
//!     .unwrap();
//!
//! let assembly = EmbeddingAssemblerOptions::default()
//!     .with_seed(Some(42))
//!     .init()
//!     .assemble(&vocab, &table);
//! assert_eq!(assembly.matrix.vocab_size(), vocab.len());
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "download")]
#[doc(inline)]
pub use wordloom_disk_cache as disk_cache;

pub mod embedding;
pub mod errors;
pub mod normalize;
pub mod pretrained;
pub mod types;
pub mod vectors;
pub mod vocab;
