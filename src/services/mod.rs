pub mod decoder;
pub mod pipeline;

pub use decoder::{DecodeError, DecodedImage, ImageDecoder};
pub use pipeline::{GridRequest, GridResult, PaintPipeline, PipelineError};
