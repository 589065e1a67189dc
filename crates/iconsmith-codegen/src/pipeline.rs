//! Concurrent generation pipeline.
//!
//! A run has four phases:
//!
//! 1. **Discovery**: create the components directory, list the icons
//!    directory, keep `.svg` entries sorted by file name.
//! 2. **Resolution**: validate every base name and claim its export name.
//!    Invalid names and collisions fail here, before any task is spawned.
//! 3. **Fan-out**: one task per remaining asset on a [`JoinSet`], bounded by
//!    a [`Semaphore`]. Each task reads, validates, optimizes and renders its
//!    component under a per-asset timeout, then writes it. The write is not
//!    subject to the timeout, so an expired asset never leaves partial
//!    output behind.
//! 4. **Aggregation**: once every task settled, outcomes are put back in
//!    discovery order and the index is written from the successes.
//!
//! Failures in phases 2 and 3 are recorded on the asset's outcome. Only
//! discovery and index failures abort the run.

use crate::generator::ComponentGenerator;
use crate::naming::{ExportRegistry, NameResolver, ResolvedName};
use crate::optimize::DefaultOptimizer;
use crate::types::{GeneratedFile, GenerationOutcome, GenerationReport, SourceAsset};
use iconsmith_core::traits::{AssetStore, SvgOptimizer};
use iconsmith_core::{AssetError, Error, ErrorKind, GeneratorConfig, Result, Stage};
use iconsmith_files::LocalStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::Instrument;

/// Runs the generator with default configuration against the local
/// filesystem and the built-in optimizer.
///
/// Reads `icons/*.svg`, writes `src/components/<name>.tsx` and
/// `src/index.ts`, relative to the working directory.
///
/// # Errors
///
/// Returns error if the icons directory cannot be listed, the components
/// directory cannot be created, or the index cannot be written. Per-asset
/// failures are reported in the returned outcomes instead.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> iconsmith_core::Result<()> {
/// let outcomes = iconsmith_codegen::generate_components().await?;
/// for outcome in outcomes.iter().filter(|o| !o.success()) {
///     eprintln!("{}: {}", outcome.file_name(), outcome.error_message().unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn generate_components() -> Result<Vec<GenerationOutcome>> {
    IconPipeline::new(
        GeneratorConfig::default(),
        LocalStore::new(),
        DefaultOptimizer::new(),
    )
    .run()
    .await
}

/// Icon generation pipeline over pluggable storage and optimizer.
///
/// # Examples
///
/// ```
/// use iconsmith_codegen::{DefaultOptimizer, IconPipeline};
/// use iconsmith_core::GeneratorConfig;
/// use iconsmith_files::MemoryStore;
/// use std::path::Path;
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> iconsmith_core::Result<()> {
/// let store = Arc::new(
///     MemoryStore::builder()
///         .add_file("icons/check.svg", r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#)
///         .build(),
/// );
///
/// let pipeline = IconPipeline::new(GeneratorConfig::default(), Arc::clone(&store), DefaultOptimizer::new());
/// let outcomes = pipeline.run().await?;
///
/// assert!(outcomes[0].success());
/// assert!(store.contains_file(Path::new("src/components/check.tsx")).await);
/// assert!(store.contains_file(Path::new("src/index.ts")).await);
/// # Ok(())
/// # }
/// ```
pub struct IconPipeline {
    config: Arc<GeneratorConfig>,
    store: Arc<dyn AssetStore>,
    optimizer: Arc<dyn SvgOptimizer>,
    resolver: NameResolver,
}

impl std::fmt::Debug for IconPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconPipeline")
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl IconPipeline {
    /// Creates a pipeline.
    pub fn new(
        config: GeneratorConfig,
        store: impl AssetStore + 'static,
        optimizer: impl SvgOptimizer + 'static,
    ) -> Self {
        let resolver = NameResolver::from_config(&config);
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            optimizer: Arc::new(optimizer),
            resolver,
        }
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs the pipeline, returning one outcome per discovered asset in
    /// discovery order.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid, discovery fails, or
    /// the index cannot be written.
    pub async fn run(&self) -> Result<Vec<GenerationOutcome>> {
        Ok(self.run_with_report().await?.into_outcomes())
    }

    /// Runs the pipeline and summarizes it in a [`GenerationReport`].
    ///
    /// # Errors
    ///
    /// Same as [`IconPipeline::run`].
    pub async fn run_with_report(&self) -> Result<GenerationReport> {
        let started = Instant::now();
        self.config.validate()?;

        let generator = Arc::new(ComponentGenerator::new(self.config.default_size)?);

        tracing::info!(
            "Generating components from {} into {}",
            self.config.icons_dir.display(),
            self.config.components_dir.display()
        );

        let assets = self.discover().await?;
        tracing::debug!("Discovered {} source assets", assets.len());

        let outcomes = self.process_all(&assets, &generator).await;
        let index_path = self.write_index(&generator, &outcomes).await?;

        let report = GenerationReport::new(outcomes, index_path, started.elapsed());
        tracing::info!(
            "Generated {} of {} components ({} failed) in {}ms",
            report.succeeded,
            report.total,
            report.failed,
            report.duration_ms
        );

        Ok(report)
    }

    /// Lists source assets in discovery order.
    ///
    /// Creates the components directory first, so a run over an empty
    /// icons directory still leaves the output tree in place.
    ///
    /// # Errors
    ///
    /// Returns error if the components directory cannot be created or the
    /// icons directory cannot be listed.
    pub async fn discover(&self) -> Result<Vec<SourceAsset>> {
        self.store
            .create_dir_all(&self.config.components_dir)
            .await?;

        let mut file_names: Vec<String> = self
            .store
            .list_dir(&self.config.icons_dir)
            .await?
            .into_iter()
            .filter(|name| self.resolver.is_source(name))
            .collect();
        file_names.sort();

        Ok(file_names
            .into_iter()
            .enumerate()
            .map(|(index, file_name)| SourceAsset::new(index, file_name))
            .collect())
    }

    /// Processes a single asset outside of a run.
    ///
    /// Applies name validation and the asset timeout but no collision
    /// check, and does not touch the index.
    pub async fn process(&self, asset: &SourceAsset) -> GenerationOutcome {
        let resolved = match self.resolver.resolve(asset.file_name()) {
            Ok(resolved) => resolved,
            Err(err) => return self.resolve_failure(asset.file_name(), &err),
        };

        match ComponentGenerator::new(self.config.default_size) {
            Ok(generator) => {
                self.worker(Arc::new(generator))
                    .run(resolved, asset.file_name().to_string())
                    .await
            }
            Err(err) => GenerationOutcome::failed(
                resolved.base_name().as_str(),
                resolved.export_name().clone(),
                AssetError::new(Stage::Render, ErrorKind::Template, err.to_string()),
            ),
        }
    }

    async fn process_all(
        &self,
        assets: &[SourceAsset],
        generator: &Arc<ComponentGenerator<'static>>,
    ) -> Vec<GenerationOutcome> {
        let semaphore = Arc::new(Semaphore::new(
            self.config.concurrency.clamp(1, Semaphore::MAX_PERMITS),
        ));
        let mut registry = ExportRegistry::new();
        let mut slots: Vec<Option<GenerationOutcome>> = vec![None; assets.len()];
        let mut tasks = JoinSet::new();

        for (slot, asset) in assets.iter().enumerate() {
            let resolved = match self
                .resolver
                .resolve(asset.file_name())
                .and_then(|resolved| registry.claim(&resolved).map(|()| resolved))
            {
                Ok(resolved) => resolved,
                Err(err) => {
                    slots[slot] = Some(self.resolve_failure(asset.file_name(), &err));
                    continue;
                }
            };

            let worker = self.worker(Arc::clone(generator));
            let semaphore = Arc::clone(&semaphore);
            let file_name = asset.file_name().to_string();

            tasks.spawn(async move {
                let outcome = match semaphore.acquire_owned().await {
                    Ok(_permit) => worker.run(resolved, file_name).await,
                    Err(_) => GenerationOutcome::failed(
                        resolved.base_name().as_str(),
                        resolved.export_name().clone(),
                        AssetError::new(
                            Stage::Execute,
                            ErrorKind::Internal,
                            "concurrency limiter closed",
                        ),
                    ),
                };
                (slot, outcome)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, outcome)) => slots[slot] = Some(outcome),
                Err(err) => tracing::error!("Asset task did not complete: {err}"),
            }
        }

        // Slots still empty belong to tasks that panicked.
        slots
            .into_iter()
            .zip(assets)
            .map(|(outcome, asset)| {
                outcome.unwrap_or_else(|| {
                    let base_name = self.resolver.base_name(asset.file_name());
                    tracing::warn!("Asset {} aborted unexpectedly", asset.file_name());
                    GenerationOutcome::failed(
                        base_name,
                        self.resolver.export_name(base_name),
                        AssetError::new(
                            Stage::Execute,
                            ErrorKind::Internal,
                            format!("Processing of {} panicked", asset.file_name()),
                        ),
                    )
                })
            })
            .collect()
    }

    async fn write_index(
        &self,
        generator: &ComponentGenerator<'_>,
        outcomes: &[GenerationOutcome],
    ) -> Result<PathBuf> {
        let index = GeneratedFile::new(
            self.config.index_path(),
            generator.render_index(outcomes, &self.config.components_module())?,
        );

        if let Some(parent) = index
            .path()
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            self.store.create_dir_all(parent).await?;
        }

        self.store.write(index.path(), &index.content).await?;
        tracing::debug!("Wrote index {}", index.path().display());

        Ok(index.path)
    }

    fn resolve_failure(&self, file_name: &str, err: &Error) -> GenerationOutcome {
        let base_name = self.resolver.base_name(file_name);
        tracing::warn!("Skipping {}: {}", file_name, err);
        GenerationOutcome::failed(
            base_name,
            self.resolver.export_name(base_name),
            AssetError::from_error(Stage::Resolve, err),
        )
    }

    fn worker(&self, generator: Arc<ComponentGenerator<'static>>) -> AssetWorker {
        AssetWorker {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
            optimizer: Arc::clone(&self.optimizer),
            generator,
        }
    }
}

/// Everything one asset task needs, detached from the pipeline borrow.
struct AssetWorker {
    config: Arc<GeneratorConfig>,
    store: Arc<dyn AssetStore>,
    optimizer: Arc<dyn SvgOptimizer>,
    generator: Arc<ComponentGenerator<'static>>,
}

impl AssetWorker {
    async fn run(self, resolved: ResolvedName, file_name: String) -> GenerationOutcome {
        let span = tracing::info_span!("asset", file = %file_name);
        let timeout = self.config.asset_timeout;

        async move {
            let base_name = resolved.base_name().as_str();
            let export_name = resolved.export_name();

            let result = match tokio::time::timeout(timeout, self.build(&resolved, &file_name))
                .await
            {
                Ok(Ok(file)) => self.persist(file).await,
                Ok(Err(err)) => Err(err),
                Err(_) => Err(timed_out(&file_name, timeout)),
            };

            match result {
                Ok(file) => {
                    tracing::debug!("Generated {} at {}", export_name, file.path().display());
                    GenerationOutcome::succeeded(base_name, export_name.clone())
                }
                Err(err) => {
                    tracing::warn!("Failed at {} stage: {}", err.stage(), err);
                    GenerationOutcome::failed(base_name, export_name.clone(), err)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn build(
        &self,
        resolved: &ResolvedName,
        file_name: &str,
    ) -> std::result::Result<GeneratedFile, AssetError> {
        let base_name = resolved.base_name();

        let content = self
            .store
            .read_to_string(&self.config.source_path(file_name))
            .await
            .map_err(failed_at(Stage::Read, ErrorKind::Io))?;

        if !content.contains("viewBox") {
            let err = Error::MissingViewBox {
                name: base_name.to_string(),
            };
            return Err(AssetError::from_error(Stage::Validate, &err));
        }

        let optimized = self
            .optimizer
            .optimize(&content)
            .await
            .map_err(failed_at(Stage::Optimize, ErrorKind::Optimization))?;

        let code = self
            .generator
            .render_component(resolved.export_name(), &optimized)
            .map_err(failed_at(Stage::Render, ErrorKind::Template))?;

        Ok(GeneratedFile::new(self.config.component_path(base_name), code))
    }

    async fn persist(&self, file: GeneratedFile) -> std::result::Result<GeneratedFile, AssetError> {
        self.store
            .write(file.path(), &file.content)
            .await
            .map_err(failed_at(Stage::Write, ErrorKind::Io))?;

        Ok(file)
    }
}

fn failed_at(stage: Stage, kind: ErrorKind) -> impl FnOnce(Error) -> AssetError {
    move |err| AssetError::new(stage, kind, err.to_string())
}

fn timed_out(file_name: &str, timeout: Duration) -> AssetError {
    let err = Error::Timeout {
        operation: format!("generating {file_name}"),
        duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
    };
    AssetError::from_error(Stage::Execute, &err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconsmith_files::MemoryStore;
    use std::path::Path;

    const VALID: &str = r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#;

    fn pipeline(store: &Arc<MemoryStore>) -> IconPipeline {
        IconPipeline::new(
            GeneratorConfig::default(),
            Arc::clone(store),
            DefaultOptimizer::new(),
        )
    }

    #[tokio::test]
    async fn test_discover_filters_and_sorts() {
        let store = Arc::new(
            MemoryStore::builder()
                .add_file("icons/zeta.svg", VALID)
                .add_file("icons/alpha.svg", VALID)
                .add_file("icons/readme.md", "")
                .add_file("icons/upper.SVG", VALID)
                .build(),
        );

        let assets = pipeline(&store).discover().await.unwrap();
        let names: Vec<&str> = assets.iter().map(SourceAsset::file_name).collect();

        assert_eq!(names, vec!["alpha.svg", "zeta.svg"]);
        assert_eq!(assets[1].index(), 1);
        assert!(store.contains_dir(Path::new("src/components")).await);
    }

    #[tokio::test]
    async fn test_discover_missing_icons_dir_is_fatal() {
        let store = Arc::new(MemoryStore::new());
        let err = pipeline(&store).run().await.unwrap_err();

        assert!(err.is_not_found());
        assert!(!store.contains_file(Path::new("src/index.ts")).await);
    }

    #[tokio::test]
    async fn test_process_single_asset() {
        let store = Arc::new(
            MemoryStore::builder()
                .add_file("icons/check.svg", VALID)
                .add_dir("src/components")
                .build(),
        );

        let outcome = pipeline(&store)
            .process(&SourceAsset::new(0, "check.svg"))
            .await;

        assert!(outcome.success());
        assert_eq!(outcome.component_name().as_str(), "CheckIcon");
        assert!(store.contains_file(Path::new("src/components/check.tsx")).await);
        assert!(!store.contains_file(Path::new("src/index.ts")).await);
    }

    #[tokio::test]
    async fn test_process_rejects_invalid_name() {
        let store = Arc::new(MemoryStore::new());
        let outcome = pipeline(&store)
            .process(&SourceAsset::new(0, "My_Icon.svg"))
            .await;

        assert!(!outcome.success());
        assert_eq!(outcome.file_name(), "My_Icon");
        assert_eq!(outcome.component_name().as_str(), "My_IconIcon");
        assert_eq!(outcome.error().unwrap().kind(), ErrorKind::InvalidName);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let store = Arc::new(MemoryStore::builder().add_dir("icons").build());
        let config = GeneratorConfig::builder().concurrency(0).build();
        let err = IconPipeline::new(config, Arc::clone(&store), DefaultOptimizer::new())
            .run()
            .await
            .unwrap_err();

        assert!(err.is_config_error());
    }

    #[test]
    fn test_timed_out_classification() {
        let err = timed_out("a.svg", Duration::from_millis(250));
        assert_eq!(err.stage(), Stage::Execute);
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert!(err.message().contains("250ms"));
    }
}
