//! Symbolic names of the general purpose registers.

const GPR_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", //
    "$t0", "$t1", "$t2", "$t3", "$t4", "$t5", "$t6", "$t7", //
    "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", //
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Conventional name of general purpose register `index`.
#[must_use]
pub fn gpr_name(index: u32) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| GPR_NAMES.get(i))
        .copied()
}

/// Render register `index` by name, falling back to its decimal index.
#[must_use]
pub fn render_gpr(index: u32) -> String {
    gpr_name(index).map_or_else(|| index.to_string(), str::to_owned)
}
