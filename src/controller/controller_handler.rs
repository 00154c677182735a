use std::sync::Arc;

use log::{error, info};

use crate::configuration::config::Config;
use crate::error_handling::types::ControllerError;
use crate::storage::database_storage::DatabaseStorage;
use crate::storage::item_store::ItemStore;
use crate::web_interface::web_server::WebServer;

/// Owns the stores and runs the web server for one configuration.
pub struct Controller {
    pub config: Config,
    server: WebServer<DatabaseStorage>,
}

impl Controller {
    /// Opens the employee database (when the employee pages are enabled) and
    /// wires the stores into a web server.
    pub async fn new(config: Config) -> Result<Self, ControllerError> {
        config.validate()?;

        let storage = if config.employees_enabled {
            info!("Opening employee database {}", config.database_url);
            Some(Arc::new(
                DatabaseStorage::connect(&config.database_url).await?,
            ))
        } else {
            None
        };
        let items = config.items_enabled.then(|| Arc::new(ItemStore::new()));

        Ok(Self {
            server: WebServer::new(storage, items),
            config,
        })
    }

    /// Serves requests until Ctrl-C.
    pub async fn run(&self) -> Result<(), ControllerError> {
        let addr = self.config.socket_addr()?;
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Unable to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        };
        self.server.start(addr, shutdown).await;
        info!("Controller stopped");
        Ok(())
    }
}
