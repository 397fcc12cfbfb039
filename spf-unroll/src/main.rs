use std::error::Error;
use std::sync::Arc;

use tokio::sync::mpsc;

use query_types::{Handler, NameQuery, QType};
use resolver_actor::{Actor, Transport, UdpTransport};

mod cli_args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: cli_args::CliArgs = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if args.domains.is_empty() {
        return Ok(());
    }

    let transport: Arc<dyn Transport> = Arc::new(UdpTransport::new(args.server));
    let (sink, mut discovered) = mpsc::unbounded_channel::<String>();
    let (handle, actor) = Actor::new(transport, sink);

    for domain in &args.domains {
        handle.lookup(NameQuery::new(domain, QType::Txt), Handler::SpfTxt);
    }

    // one line per discovered address, in discovery order
    let printer = tokio::spawn(async move {
        while let Some(address) = discovered.recv().await {
            println!("{}", address);
        }
    });

    // the loop ends once no query remains pending; the channel to the
    // printer closes when the actor goes away
    actor.run().await?;
    let _ = printer.await;

    Ok(())
}
