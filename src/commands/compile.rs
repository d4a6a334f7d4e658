//! Compile command - print the pattern and keys for one or more specs

use pathrex::output::{CompileResult, OutputMode};
use pathrex::{KeyList, PathSpec};

use crate::cli::CompileFlags;

/// Compile the given specs; several specs are joined by alternation
pub fn compile(inputs: &[String], flags: &CompileFlags, mode: OutputMode) -> anyhow::Result<()> {
    let options = flags.options()?;

    let mut specs = inputs
        .iter()
        .map(|input| flags.spec(input, &options))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let spec = if specs.len() == 1 {
        specs.remove(0)
    } else {
        PathSpec::List(specs)
    };

    let mut keys = KeyList::new();
    let pattern = pathrex::compile(spec, &mut keys, &options)?;

    CompileResult::new(&pattern, &keys).render(mode);
    Ok(())
}
