use std::sync::mpsc;

use anyhow::{Context, Result};

use crate::{
    backend::BackendLink,
    cli::{Cli, Command},
    domain, infra, protocol, ui,
    usecases::{self, bootstrap, shell::DefaultShellOrchestrator},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let mut context = bootstrap::bootstrap(cli.config.as_deref())?;
            if let Some(url) = cli.url {
                context.config.backend.url = url;
            }

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                protocol = protocol::module_name(),
                backend = crate::backend::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .context("failed to build backend runtime")?;

            let (signal_tx, signal_rx) = mpsc::channel();
            let (_link, handle) =
                BackendLink::start(&runtime, context.config.backend.url.clone(), signal_tx)
                    .context("failed to start backend link")?;

            let mut event_source = ui::CompositeEventSource::new(signal_rx);
            let mut orchestrator = DefaultShellOrchestrator::new(handle);

            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
    }

    Ok(())
}
