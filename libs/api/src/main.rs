use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::serve;
use repository::Repository;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let secrets = util::load_env()?;
    let conn_string = secrets
        .get("LOCAL_DATABASE_URL")
        .and_then(|x| x.as_str())
        .context("LOCAL_DATABASE_URL was not found")?;
    let jwt_secret = secrets
        .get("JWT_SECRET")
        .and_then(|x| x.as_str())
        .context("JWT_SECRET was not found")?;

    let repository = Repository::new(conn_string).await?;
    let router =
        serve(repository, "Config.toml", jwt_secret.to_string()).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(listener, router.into_make_service()).await?)
}
