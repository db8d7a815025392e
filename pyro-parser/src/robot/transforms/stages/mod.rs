//! Individual pipeline stages
//!
//! Each stage implements [`Runnable`](super::Runnable) for one step of a parse.

pub mod population;
pub mod postprocessing;
pub mod tokenization;

pub use population::Population;
pub use postprocessing::PostProcessing;
pub use tokenization::Tokenization;
