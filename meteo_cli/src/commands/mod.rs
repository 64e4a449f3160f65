mod prompt;
mod serve;

pub use prompt::{list_prompts, render_prompt};
pub use serve::serve;
