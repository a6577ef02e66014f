use crate::faas::SINGLE_DASH_FLAGS;
use crate::migrate::{Migrate, MigrateConfig};
use crate::CommandAppend;
use clap::{App, AppSettings, ArgMatches};
use utility::Result;

const WELCOME_MSG: &str = r#"Copy OpenFaaS functions from one gateway to another.

Functions missing on the target are created, functions already present are
updated in place. Nothing is deleted from the target."#;

pub fn build_cli() -> App<'static, 'static> {
    let app = App::new("fn-migrate")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::ColoredHelp)
        .setting(AppSettings::DeriveDisplayOrder)
        .about(WELCOME_MSG);

    Migrate::append_args(app)
}

pub async fn run(args: &ArgMatches<'_>) -> Result<()> {
    colour::blue!("fn-migrate {}\n\n", env!("CARGO_PKG_VERSION"));
    let config = MigrateConfig::from_args(args, |key| std::env::var(key).ok())?;
    Migrate::run(&config).await
}

/// rewrites single dash long flags such as `-source` or `-target=URL` into their
/// double dash form so both spellings are accepted
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            if arg.starts_with("--") || !arg.starts_with('-') {
                return arg;
            }
            let name = arg[1..].split('=').next().unwrap_or_default();
            if SINGLE_DASH_FLAGS.contains(&name) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}
