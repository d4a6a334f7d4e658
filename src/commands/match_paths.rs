//! Match command - test paths against a compiled spec

use std::process::ExitCode;

use pathrex::KeyList;
use pathrex::output::{MatchResult, OutputMode, PathMatch};

use crate::cli::CompileFlags;

/// Exit code when at least one path does not match
const NO_MATCH: u8 = 2;

/// Match each path against the compiled pattern and report captured parameters
pub fn match_paths(
    input: &str,
    paths: &[String],
    flags: &CompileFlags,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let options = flags.options()?;
    let spec = flags.spec(input, &options)?;

    let mut keys = KeyList::new();
    let pattern = pathrex::compile(spec, &mut keys, &options)?;
    log::debug!("Matching {} path(s) against {pattern}", paths.len());

    let paths = paths
        .iter()
        .map(|path| Ok(PathMatch::new(path, &keys, pattern.captures(path)?)))
        .collect::<pathrex::Result<Vec<_>>>()?;

    let result = MatchResult {
        source: pattern.source().to_string(),
        paths,
    };
    result.render(mode);

    if result.all_matched() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(NO_MATCH))
    }
}
