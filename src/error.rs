use thiserror::Error;

/// The digester is total over its input domain except for allocation
/// failure, which the original C source leaves as an unchecked `malloc`
/// This type surfaces that failure explicitly rather than risk an
/// unchecked allocation.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("allocation failed while growing the output buffer")]
    Alloc,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
