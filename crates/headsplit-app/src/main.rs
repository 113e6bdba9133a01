mod argutil;
mod config;
mod logging;
mod scan;
mod split;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = crate::argutil::build_commands();
    let arg_matches = command.get_matches();

    crate::logging::set_up_logging(&arg_matches)?;

    let result = match arg_matches.subcommand() {
        Some(("split", sub_matches)) => crate::split::run(sub_matches).await,
        Some(("scan", sub_matches)) => crate::scan::run(sub_matches).await,
        Some(("new-config", sub_matches)) => crate::config::run(sub_matches),
        _ => unreachable!(),
    };

    match result {
        Ok(_) => {
            tracing::info!("program exit ok");
            Ok(())
        }
        Err(error) => {
            tracing::error!(%error, "program exit error");
            Err(error)
        }
    }
}
