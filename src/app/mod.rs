pub mod event;
pub mod mode;
pub mod state;
pub mod submit;

pub use mode::Mode;
pub use state::{AppState, Outcome};
pub use submit::{SubmitDispatcher, SubmitOutcome};
