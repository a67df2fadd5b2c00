// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs next to it and pulls cross-cutting pieces from here.

/// Keeps generated career advice anchored to what the candidate actually listed.
pub const PROFILE_GROUNDING_INSTRUCTION: &str = "\
    Base every statement about the candidate strictly on the profile provided. \
    Do NOT assume skills, employers, or degrees that are not listed. \
    When a recommendation depends on a skill the candidate lacks, name it as missing.";
