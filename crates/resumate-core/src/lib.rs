pub mod error;
pub mod form;
pub mod state;
pub mod store;

pub use error::FormError;
pub use form::FormClient;
pub use state::{Action, FormState, Phase, reduce};
pub use store::{FormStore, SubmissionGuard};
