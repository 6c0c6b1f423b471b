use lmsteer_core::{Leaf, ModuleSpec, Node};

/// A two-block GPT-2 shaped tree
#[allow(dead_code)]
pub fn gpt2_spec() -> ModuleSpec {
    let block = |i: usize| {
        ModuleSpec::new(i.to_string(), "GPT2Block")
            .child(ModuleSpec::new("ln_1", "LayerNorm"))
            .child(ModuleSpec::new("attn", "GPT2Attention"))
            .child(ModuleSpec::new("ln_2", "LayerNorm"))
            .child(ModuleSpec::new("mlp", "GPT2MLP"))
    };

    ModuleSpec::new("GPT2Model", "GPT2Model")
        .child(ModuleSpec::new("wte", "Embedding"))
        .child(ModuleSpec::new("wpe", "Embedding"))
        .child(ModuleSpec::new("drop", "Dropout"))
        .child(ModuleSpec::new("h", "ModuleList").child(block(0)).child(block(1)))
        .child(ModuleSpec::new("ln_f", "LayerNorm"))
}

#[allow(dead_code)]
pub fn gpt2_tree() -> Node {
    gpt2_spec().build().unwrap()
}

/// The four-leaf set used by the end-to-end scenarios
#[allow(dead_code)]
pub fn scenario_leaves() -> Vec<Leaf> {
    vec![
        Leaf::new("wte", "Embedding"),
        Leaf::new("h.0.attn", "Attention"),
        Leaf::new("h.0.mlp", "MLP"),
        Leaf::new("ln_f", "LayerNorm"),
    ]
}
