pub mod redirect_resolver;
pub mod response_synthesizer;

pub use redirect_resolver::RedirectResolver;
pub use response_synthesizer::{ResponseSynthesizer, SINKHOLE_TTL};
