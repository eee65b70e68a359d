use std::future::Future;

use crate::{Error, Result};

pub mod exitcode;

/// Run an async command to completion on a current-thread runtime.
pub fn async_cmd<F, Fut, T>(command_name: &str, f: F) -> Result<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    debug!("running '{command_name}' asynchronously");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::new(exitcode::SOFTWARE, format!("failed to start the runtime: {e}")))?;
    runtime.block_on(f())
}
