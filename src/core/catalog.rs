//! Static fallback model catalog.
//!
//! When the provider's live model list cannot be fetched, the host falls
//! back to this fixed catalog so the model picker is never empty. Order is
//! part of the contract: consumers display the top-N entries, so the
//! flagship models come first.

use std::sync::LazyLock;

use crate::core::models::ModelDescriptor;

static FALLBACK_MODELS: LazyLock<Vec<ModelDescriptor>> = LazyLock::new(|| {
    vec![
        ModelDescriptor::new("hf:moonshotai/Kimi-K2.5", "Kimi K2.5"),
        ModelDescriptor::new("hf:moonshotai/Kimi-K2-Thinking", "Kimi K2 Thinking"),
        ModelDescriptor::new("hf:zai-org/GLM-4.6", "GLM 4.6"),
        ModelDescriptor::new("hf:deepseek-ai/DeepSeek-V3.2", "DeepSeek V3.2"),
        ModelDescriptor::new("hf:Qwen/Qwen3-Coder-480B-A35B-Instruct", "Qwen3 Coder 480B"),
        ModelDescriptor::new("hf:MiniMaxAI/MiniMax-M2", "MiniMax M2"),
        ModelDescriptor::new("hf:openai/gpt-oss-120b", "GPT-OSS 120B"),
        ModelDescriptor::new("hf:meta-llama/Llama-3.3-70B-Instruct", "Llama 3.3 70B"),
    ]
});

/// The fixed model list used when a live model list is unavailable.
///
/// Initialized once on first use and never mutated afterwards, so the slice
/// is safe for unsynchronized concurrent reads.
#[must_use]
pub fn fallback_models() -> &'static [ModelDescriptor] {
    &FALLBACK_MODELS
}
