use crate::cmds::{build_cli, normalize_args, run};
use clap::App;

pub mod cmds;
pub(crate) mod faas;
pub(crate) mod logging;
pub mod migrate;
pub(crate) mod priority;
pub(crate) mod tls;

/// parses the process arguments, runs the migration and returns the process exit code
pub async fn exec() -> i32 {
    logging::init();

    let app = build_cli();
    let args = app.get_matches_from(normalize_args(std::env::args()));
    match run(&args).await {
        Ok(()) => 0,
        Err(err) => report(&err),
    }
}

/// prints a fatal error for the user and returns the failing exit code.
/// The Debug form is only logged at debug level.
pub(crate) fn report(err: &utility::Error) -> i32 {
    tracing::debug!("{:?}", err);
    colour::red!("{}\n", err);
    1
}

pub(crate) trait CommandAppend {
    fn append_args(app: App<'static, 'static>) -> App<'static, 'static>;
}
