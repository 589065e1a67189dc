//! React icon component generation.
//!
//! Turns a directory of SVG files into one typed `React.forwardRef`
//! component per icon plus a barrel `index.ts`, processing assets
//! concurrently and isolating failures per asset.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> iconsmith_core::Result<()> {
//! let outcomes = iconsmith_codegen::generate_components().await?;
//! let generated = outcomes.iter().filter(|o| o.success()).count();
//! println!("Generated {generated} of {} icons", outcomes.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod naming;
pub mod optimize;
pub mod pipeline;
pub mod template_engine;
pub mod types;

pub use generator::ComponentGenerator;
pub use naming::{ExportRegistry, NameResolver, ResolvedName};
pub use optimize::DefaultOptimizer;
pub use pipeline::{IconPipeline, generate_components};
pub use types::{GeneratedFile, GenerationOutcome, GenerationReport, SourceAsset};
