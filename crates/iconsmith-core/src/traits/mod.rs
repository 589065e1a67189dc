//! Collaborator traits for iconsmith.
//!
//! The generation pipeline consumes its filesystem and its SVG optimizer
//! through these traits, so either can be swapped (in-memory storage for
//! tests, an external optimizer for production builds).
//!
//! # Module Structure
//!
//! - `store` - Asset storage capability set
//! - `optimizer` - SVG content transformation
//!
//! # Examples
//!
//! ```
//! use iconsmith_core::traits::SvgOptimizer;
//! use iconsmith_core::Result;
//! use async_trait::async_trait;
//!
//! struct Passthrough;
//!
//! #[async_trait]
//! impl SvgOptimizer for Passthrough {
//!     async fn optimize(&self, content: &str) -> Result<String> {
//!         Ok(content.to_string())
//!     }
//! }
//! ```

mod optimizer;
mod store;

pub use optimizer::SvgOptimizer;
pub use store::AssetStore;
