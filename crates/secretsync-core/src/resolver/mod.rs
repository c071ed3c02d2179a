//! Secret value resolution (credential store first, prompt fallback)

mod value_resolver;

pub use value_resolver::{
    PromptSource, QueuedPrompt, ResolveError, ResolvedSecret, ValueResolver,
};
