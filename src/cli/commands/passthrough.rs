//! passthrough - Run unknown subcommands as git subcommands

use anyhow::Result;

use crate::cli::Context;
use crate::exec;

/// Arguments for `git`, honouring `--cwd` with `git -C`.
fn git_args(ctx: &Context, args: &[String]) -> Vec<String> {
    let mut full = Vec::with_capacity(args.len() + 2);
    if let Some(dir) = &ctx.cwd {
        full.push("-C".to_string());
        full.push(dir.to_string_lossy().into_owned());
    }
    full.extend(args.iter().cloned());
    full
}

/// Run `git <args>` and return its exit code.
///
/// On Unix the process is replaced, so this only returns on failure.
pub fn passthrough(ctx: &Context, args: &[String]) -> Result<i32> {
    let runner = exec::select_runner();
    let code = runner.run("git", &git_args(ctx, args))?;
    Ok(code)
}
