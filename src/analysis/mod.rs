//! Tool analysis entry points.

mod bash;
mod boundary;
mod prompt;
mod read;
mod write;

pub use bash::analyze_bash;
pub use boundary::analyze_boundary;
pub use prompt::analyze_prompt;
pub use read::analyze_read;
pub use write::analyze_write;

use crate::decision::Decision;
use crate::rules::Rule;

fn block_on(rule: &Rule) -> Decision {
    Decision::block(&rule.id, &rule.reason)
}
