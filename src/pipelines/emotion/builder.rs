use candle_core::Device;
use tokenizers::Tokenizer;

use super::model::EmotionModel;
use super::pipeline::EmotionPipeline;
use crate::core::{DashboardError, EmotionModelConfig, Result};
use crate::models::{DistilRobertaEmotionModel, HubModelOptions};
use crate::pipelines::utils::DeviceRequest;

pub struct EmotionPipelineBuilder<M: EmotionModel> {
    options: M::Options,
    device_request: DeviceRequest,
    top_k: usize,
}

impl<M: EmotionModel> EmotionPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self {
            options,
            device_request: DeviceRequest::Default,
            top_k: 1,
        }
    }

    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    pub fn cuda_device(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    pub fn device(mut self, device: Device) -> Self {
        self.device_request = DeviceRequest::Explicit(device);
        self
    }

    pub fn device_request(mut self, request: DeviceRequest) -> Self {
        self.device_request = request;
        self
    }

    /// Number of labels returned per prediction (default 1).
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Loads the model and tokenizer on the calling thread.
    pub fn build_blocking(self) -> Result<EmotionPipeline<M>> {
        if self.top_k == 0 {
            return Err(DashboardError::Config("top_k must be at least 1".into()));
        }
        let (model, tokenizer) = load::<M>(self.options, self.device_request)?;
        Ok(EmotionPipeline {
            model,
            tokenizer,
            top_k: self.top_k,
        })
    }

    /// Loads the model and tokenizer on a blocking worker thread.
    pub async fn build(self) -> Result<EmotionPipeline<M>>
    where
        M: Send + 'static,
    {
        if self.top_k == 0 {
            return Err(DashboardError::Config("top_k must be at least 1".into()));
        }
        let Self {
            options,
            device_request,
            top_k,
        } = self;
        let (model, tokenizer) =
            tokio::task::spawn_blocking(move || load::<M>(options, device_request)).await??;
        Ok(EmotionPipeline {
            model,
            tokenizer,
            top_k,
        })
    }
}

fn load<M: EmotionModel>(options: M::Options, request: DeviceRequest) -> Result<(M, Tokenizer)> {
    let device = request.resolve()?;
    tracing::info!(?options, device = ?device.location(), "loading emotion model");
    let model = M::new(options.clone(), device)?;
    let tokenizer = M::get_tokenizer(options)?;
    Ok((model, tokenizer))
}

impl EmotionPipelineBuilder<DistilRobertaEmotionModel> {
    /// The English DistilRoBERTa emotion model (anger, disgust, fear, joy, neutral, sadness, surprise).
    pub fn distilroberta() -> Self {
        Self::new(HubModelOptions::default())
    }

    pub fn from_config(config: &EmotionModelConfig) -> Self {
        Self::new(HubModelOptions::from(config))
            .device_request(config.device.into())
            .top_k(config.top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_top_k_fails_before_loading() {
        let result = EmotionPipelineBuilder::distilroberta()
            .cpu()
            .top_k(0)
            .build_blocking();
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[tokio::test]
    async fn async_build_rejects_zero_top_k() {
        let result = EmotionPipelineBuilder::distilroberta().top_k(0).build().await;
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }
}
