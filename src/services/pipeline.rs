use axum::body::Bytes;
use std::sync::Arc;
use std::time::{Duration, Instant};

use paint_grid::{ComplexityAnalyzer, GridQuantizer, ImageAnalysis, Palette, ProcessedGrid};

use super::decoder::{DecodeError, ImageDecoder};
use crate::models::AppConfig;

/// Error from the paint pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Core(#[from] paint_grid::Error),

    #[error("grid size {requested} exceeds the maximum of {max}")]
    GridTooLarge { requested: u32, max: u32 },

    #[error("Processing timed out after {0:?}")]
    Timeout(Duration),

    #[error("Processing task failed: {0}")]
    Task(String),
}

/// Grid options from a request; `None` means "use the default"
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRequest {
    pub grid_size: Option<u32>,
    pub max_colors: Option<usize>,
}

/// Result of a grid run
#[derive(Debug, Clone)]
pub struct GridResult {
    /// Present when the grid size was derived from an analysis
    pub analysis: Option<ImageAnalysis>,
    pub max_colors: usize,
    pub grid: ProcessedGrid,
}

/// Pipeline that orchestrates decode → analyze → quantize
pub struct PaintPipeline {
    decoder: ImageDecoder,
    analyzer: ComplexityAnalyzer,
    quantizer: GridQuantizer,
    timeout: Duration,
    max_grid_size: u32,
    default_max_colors: usize,
}

impl PaintPipeline {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            decoder: ImageDecoder::new(config.max_image_dimension),
            analyzer: ComplexityAnalyzer::default(),
            quantizer: GridQuantizer::default(),
            timeout: config.analysis_timeout(),
            max_grid_size: config.max_grid_size,
            default_max_colors: config.default_max_colors,
        }
    }

    /// The full palette grids are numbered against
    pub fn palette(&self) -> &Palette {
        self.quantizer.palette()
    }

    /// Decode and analyze an upload
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<ImageAnalysis, PipelineError> {
        let started = Instant::now();
        let decoded = self.decoder.decode(bytes)?;
        let image = decoded.as_image_ref().map_err(paint_grid::Error::from)?;
        let analysis = self.analyzer.analyze(&image)?;

        tracing::debug!(
            width = decoded.width,
            height = decoded.height,
            complexity = analysis.complexity(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analyzed image"
        );
        Ok(analysis)
    }

    /// Decode and quantize an upload
    ///
    /// Without an explicit grid size the image is analyzed first and its
    /// suggested size is used.
    pub fn grid_bytes(
        &self,
        bytes: &[u8],
        request: GridRequest,
    ) -> Result<GridResult, PipelineError> {
        let started = Instant::now();
        let decoded = self.decoder.decode(bytes)?;
        let image = decoded.as_image_ref().map_err(paint_grid::Error::from)?;

        let (grid_size, analysis) = match request.grid_size {
            Some(size) => (size, None),
            None => {
                let analysis = self.analyzer.analyze(&image)?;
                // A suggestion never asks for more cells than pixels per side
                let size = analysis
                    .suggested_grid_size()
                    .min(decoded.width.min(decoded.height))
                    .min(self.max_grid_size)
                    .max(1);
                (size, Some(analysis))
            }
        };
        if grid_size > self.max_grid_size {
            return Err(PipelineError::GridTooLarge {
                requested: grid_size,
                max: self.max_grid_size,
            });
        }

        let max_colors = request.max_colors.unwrap_or(self.default_max_colors);
        let grid = self.quantizer.quantize(&image, grid_size, max_colors)?;

        tracing::debug!(
            width = decoded.width,
            height = decoded.height,
            grid_size,
            max_colors,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Quantized image"
        );
        Ok(GridResult {
            analysis,
            max_colors,
            grid,
        })
    }

    /// Analyze off the async runtime, bounded by the configured timeout
    pub async fn analyze(self: Arc<Self>, bytes: Bytes) -> Result<ImageAnalysis, PipelineError> {
        let pipeline = self.clone();
        self.run_blocking(move || pipeline.analyze_bytes(&bytes)).await
    }

    /// Quantize off the async runtime, bounded by the configured timeout
    pub async fn grid(
        self: Arc<Self>,
        bytes: Bytes,
        request: GridRequest,
    ) -> Result<GridResult, PipelineError> {
        let pipeline = self.clone();
        self.run_blocking(move || pipeline.grid_bytes(&bytes, request)).await
    }

    /// Execute CPU-intensive work in a blocking context
    ///
    /// On timeout the blocking task is left to finish in the background;
    /// its result is discarded.
    async fn run_blocking<T, F>(&self, job: F) -> Result<T, PipelineError>
    where
        F: FnOnce() -> Result<T, PipelineError> + Send + 'static,
        T: Send + 'static,
    {
        let task = tokio::task::spawn_blocking(job);
        match tokio::time::timeout(self.timeout, task).await {
            Ok(joined) => joined.map_err(|e| PipelineError::Task(e.to_string()))?,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Processing timed out"
                );
                Err(PipelineError::Timeout(self.timeout))
            }
        }
    }
}
