//! project-guard: Claude Code safety hooks and project bootstrap.
//!
//! Three hooks read one JSON payload from stdin and print at most one JSON
//! verdict: `safety` (dangerous commands, sensitive files), `boundary`
//! (operations outside the project root) and `prompt` (suspicious prompts).
//! `bootstrap` scaffolds a new project from a template tree.

pub mod analysis;
pub mod audit;
pub mod bootstrap;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod decision;
pub mod hook;
pub mod input;
pub mod output;
pub mod redaction;
pub mod rules;

pub use analysis::{analyze_bash, analyze_boundary, analyze_prompt, analyze_read, analyze_write};
pub use boundary::BoundaryResolver;
pub use config::{CompiledConfig, Config, FailMode};
pub use decision::{Decision, HookOutcome};
pub use hook::HookKind;
pub use input::HookInput;
pub use output::{HookResponse, response_for};
