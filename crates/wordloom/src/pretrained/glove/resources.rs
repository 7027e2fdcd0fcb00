//! # Public `GloVe` Resources

use crate::pretrained::ConstUrlResource;

/// The "glove.6B.zip" archive resource.
///
/// One archive carries the 50d/100d/200d/300d tables.
pub const GLOVE_6B_ARCHIVE_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &[
        "https://nlp.stanford.edu/data/glove.6B.zip",
        "https://huggingface.co/stanfordnlp/glove/resolve/main/glove.6B.zip",
    ],
    hash: None,
};
