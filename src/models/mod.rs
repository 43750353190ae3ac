pub mod distilroberta;

pub use distilroberta::{DistilRobertaEmotionModel, HubModelOptions};
