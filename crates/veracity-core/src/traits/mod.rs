mod jitter;
mod prober;
mod store;
mod validator;

pub use jitter::IJitterSource;
pub use prober::ILivenessProber;
pub use store::IValidationStore;
pub use validator::IValidator;
