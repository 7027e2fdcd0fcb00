//! # Embedding Matrix Assembler

use ndarray::{Array2, aview1};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    embedding::EmbeddingMatrix, types::IndexType, vectors::VectorTable, vocab::WordVocab,
};

/// The default spread of the random row initialization.
pub const DEFAULT_INIT_SCALE: f32 = 0.6;

/// Options for [`EmbeddingAssembler`].
#[derive(Debug, Clone)]
pub struct EmbeddingAssemblerOptions {
    /// Standard deviation of the zero-mean row initialization.
    pub scale: f32,

    /// Explicit random seed.
    ///
    /// `Some(seed)` makes assembly bit-for-bit reproducible;
    /// `None` draws the generator state from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EmbeddingAssemblerOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_INIT_SCALE,
            seed: None,
        }
    }
}

impl EmbeddingAssemblerOptions {
    /// Sets the initialization spread.
    ///
    /// ## Arguments
    /// * `scale` - the new standard deviation.
    ///
    /// ## Returns
    /// The updated `EmbeddingAssemblerOptions` instance.
    pub fn with_scale(
        self,
        scale: f32,
    ) -> Self {
        Self { scale, ..self }
    }

    /// Sets the random seed.
    ///
    /// ## Arguments
    /// * `seed` - the new seed; `None` for OS entropy.
    ///
    /// ## Returns
    /// The updated `EmbeddingAssemblerOptions` instance.
    pub fn with_seed(
        self,
        seed: Option<u64>,
    ) -> Self {
        Self { seed, ..self }
    }

    /// Initializes an [`EmbeddingAssembler`] from these options.
    ///
    /// ## Returns
    /// A new `EmbeddingAssembler` instance.
    pub fn init(self) -> EmbeddingAssembler {
        EmbeddingAssembler::new(self)
    }
}

/// Coverage accounting for an assembled matrix.
///
/// Purely observational; assembly never branches on coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    /// Vocabulary words found in the vector table.
    pub found: usize,

    /// Total vocabulary size.
    pub total: usize,
}

impl Coverage {
    /// The fraction of vocabulary words found in the table; in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.found as f64 / self.total as f64
    }
}

/// Assembles [`EmbeddingMatrix`] values from a vocabulary and a
/// pretrained vector table.
pub struct EmbeddingAssembler {
    /// Assembler options.
    pub options: EmbeddingAssemblerOptions,
}

/// An assembled matrix with its coverage accounting.
#[derive(Debug, Clone)]
pub struct EmbeddingAssembly {
    /// The assembled matrix.
    pub matrix: EmbeddingMatrix,

    /// Vector table coverage of the vocabulary.
    pub coverage: Coverage,
}

impl EmbeddingAssembler {
    /// Initializes an [`EmbeddingAssembler`].
    ///
    /// ## Arguments
    /// * `options` - the assembler options.
    ///
    /// ## Returns
    /// A new `EmbeddingAssembler` instance.
    pub fn new(options: EmbeddingAssemblerOptions) -> Self {
        Self { options }
    }

    /// Assemble a `(|vocab| × dim)` matrix.
    ///
    /// Every row starts from a `Normal(0, scale)` draw; rows whose word
    /// is present in the table are then overwritten with the table
    /// vector verbatim.
    ///
    /// ## Arguments
    /// * `vocab` - the word vocabulary.
    /// * `table` - the pretrained vector table; fixes the dimension.
    ///
    /// ## Returns
    /// The `EmbeddingAssembly` holding the matrix and its coverage.
    pub fn assemble<T: IndexType>(
        &self,
        vocab: &WordVocab<T>,
        table: &VectorTable,
    ) -> EmbeddingAssembly {
        let vocab_size = vocab.len();
        let dim = table.dim();
        let scale = self.options.scale;

        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut weights =
            Array2::from_shape_simple_fn((vocab_size, dim), || scale * sample_normal(&mut rng));

        let mut found = 0;
        for (word, index) in vocab.iter() {
            if let Some(vector) = table.lookup(word) {
                weights
                    .row_mut(index.to_usize().unwrap())
                    .assign(&aview1(vector));
                found += 1;
            }
        }

        let coverage = Coverage {
            found,
            total: vocab_size,
        };

        log::info!(
            "assembled {}x{} embedding matrix; coverage {}/{} words ({:.1}%)",
            vocab_size,
            dim,
            coverage.found,
            coverage.total,
            coverage.ratio() * 100.0,
        );

        EmbeddingAssembly {
            matrix: EmbeddingMatrix::from_weights(weights),
            coverage,
        }
    }
}

/// Standard normal sample via the Box-Muller transform.
fn sample_normal<R: Rng>(rng: &mut R) -> f32 {
    let u1: f64 = rng.random::<f64>().max(1e-10);
    let u2: f64 = rng.random::<f64>();
    ((-2.0 * u1.ln()).sqrt() * (2.0 * core::f64::consts::PI * u2).cos()) as f32
}
