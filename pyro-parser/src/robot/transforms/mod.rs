//! Composable pipeline stages
//!
//!     Parsing a Robot file is three steps: split the buffer into rows, populate
//!     the line chain from the rows, and run the post-processing passes. Each step
//!     is a stage implementing [`Runnable`], and stages are chained into a
//!     [`Transform`] whose input and output types the compiler checks at every
//!     link:
//!
//!         let pipeline = Transform::from_fn(Ok)
//!             .then(Tokenization::new(Dialect::SpaceSeparated)) // String → Vec<Row>
//!             .then(Population::new(Dialect::SpaceSeparated))   // Vec<Row> → Document
//!             .then(PostProcessing::new());                     // Document → Document
//!
//!     The standard chains for each dialect are prebuilt as `Lazy` statics in
//!     [`standard`]. [`DocumentLoader`](crate::robot::loader::DocumentLoader) picks
//!     the right one for a file.
//!
//!     The standard stages never fail: malformed input degrades into the model.
//!     [`TransformError`] exists for custom stages chained onto them.

pub mod stages;
pub mod standard;

use std::fmt;

/// Error that can occur while running a pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    Error(String),
    StageFailed { stage: String, message: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Error(msg) => write!(f, "{}", msg),
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// A single pipeline stage from `I` to `O`.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A chain of stages from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Feed this transform's output into `stage`.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Feed this transform's output into a prebuilt static transform.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    struct LineCount;
    impl Runnable<String, usize> for LineCount {
        fn run(&self, input: String) -> Result<usize, TransformError> {
            Ok(input.lines().count())
        }
    }

    struct Doubled;
    impl Runnable<usize, usize> for Doubled {
        fn run(&self, input: usize) -> Result<usize, TransformError> {
            Ok(input * 2)
        }
    }

    struct RejectEmpty;
    impl Runnable<usize, usize> for RejectEmpty {
        fn run(&self, input: usize) -> Result<usize, TransformError> {
            if input == 0 {
                return Err(TransformError::StageFailed {
                    stage: "reject-empty".to_string(),
                    message: "no lines".to_string(),
                });
            }
            Ok(input)
        }
    }

    static DOUBLING: Lazy<Transform<usize, usize>> =
        Lazy::new(|| Transform::from_fn(Ok).then(Doubled));

    #[test]
    fn test_chained_stages() {
        let transform = Transform::from_fn(|s: String| Ok(s))
            .then(LineCount)
            .then(Doubled)
            .then(Doubled);
        assert_eq!(transform.run("a\nb\nc".to_string()), Ok(12));
    }

    #[test]
    fn test_then_transform() {
        let transform = Transform::from_fn(|s: String| Ok(s))
            .then(LineCount)
            .then_transform(&DOUBLING);
        assert_eq!(transform.run("a\nb".to_string()), Ok(4));
    }

    #[test]
    fn test_failure_short_circuits() {
        let transform = Transform::from_fn(|s: String| Ok(s))
            .then(LineCount)
            .then(RejectEmpty)
            .then(Doubled);
        assert_eq!(
            transform.run(String::new()),
            Err(TransformError::StageFailed {
                stage: "reject-empty".to_string(),
                message: "no lines".to_string(),
            })
        );
    }

    #[test]
    fn test_error_display_and_conversion() {
        let failed = TransformError::StageFailed {
            stage: "tokenization".to_string(),
            message: "unsupported dialect".to_string(),
        };
        assert_eq!(
            failed.to_string(),
            "Stage 'tokenization' failed: unsupported dialect"
        );
        let plain: TransformError = "plain".into();
        assert_eq!(plain.to_string(), "plain");
        let owned: TransformError = String::from("owned").into();
        assert_eq!(owned, TransformError::Error("owned".to_string()));
    }
}
