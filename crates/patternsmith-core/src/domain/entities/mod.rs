pub mod model;
pub mod request;
pub mod result;
pub mod target;

pub use model::ModelBinding;
pub use request::GenerationRequest;
pub use result::GenerationResult;
pub use target::ResolvedTarget;
