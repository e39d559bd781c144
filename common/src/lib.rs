pub mod types;

pub use types::{DemoSpec, GenerateRequest, SlideInfo};
