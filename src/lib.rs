pub mod env;
pub mod error;
pub mod route;
pub mod state;

use std::net::SocketAddr;

use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;

use crate::{env::Env, error::ServeError, state::AppState};

/// A server whose socket is already bound. Holding one means the port is taken.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    state: AppState,
}
impl Server {
    pub async fn bind(env: &Env) -> Result<Self, ServeError> {
        Self::bind_with(env, Default::default()).await
    }

    pub async fn bind_with(env: &Env, state: AppState) -> Result<Self, ServeError> {
        let addr = env.bind();
        let listener = TcpListener::bind(&addr).await.map_err(|source| ServeError::Bind { addr, source })?;
        Ok(Self { listener, state })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServeError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the process ends.
    pub async fn run(self) -> Result<(), ServeError> {
        let addr = self.local_addr()?;
        tracing::info!("start app on {}", addr);
        tracing::info!("Server is running on http://localhost:{}", addr.port());

        let app = route::app_with(self.state);
        Ok(axum::serve(self.listener, ServiceExt::<Request>::into_make_service(app)).await?)
    }
}

pub async fn serve(env: Env) -> Result<(), ServeError> {
    Server::bind(&env).await?.run().await
}
