//! SVG optimization trait.

use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Transforms raw SVG markup into the form embedded in a component.
///
/// Implementations may fail on input they cannot handle; the pipeline
/// records such failures against the single asset being processed.
/// Idempotence is not required.
///
/// # Type Safety
///
/// All implementations must be `Send + Sync` to be shared across the
/// concurrently running asset tasks.
#[async_trait]
pub trait SvgOptimizer: Send + Sync {
    /// Optimizes one SVG document.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be optimized.
    async fn optimize(&self, content: &str) -> Result<String>;
}

#[async_trait]
impl<T: SvgOptimizer + ?Sized> SvgOptimizer for Arc<T> {
    async fn optimize(&self, content: &str) -> Result<String> {
        (**self).optimize(content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct Uppercase;

    #[async_trait]
    impl SvgOptimizer for Uppercase {
        async fn optimize(&self, content: &str) -> Result<String> {
            if content.is_empty() {
                return Err(Error::OptimizationError {
                    message: "empty document".to_string(),
                });
            }
            Ok(content.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_arc_delegates() {
        let optimizer: Arc<dyn SvgOptimizer> = Arc::new(Uppercase);

        assert_eq!(optimizer.optimize("<svg/>").await.unwrap(), "<SVG/>");
        assert!(optimizer.optimize("").await.unwrap_err().is_optimization_error());
    }
}
