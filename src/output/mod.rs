//! Output formatting and response generation.

mod response;

pub use response::{HookResponse, Verdict, emit, response_for};
