use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

const APP_NAME: &str = "course-forge";

/// Handle on the course database. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Connects and pings the course database; an unreachable server is an
    /// error here rather than on the first request.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_options(client_options(config).await?)?;
        let database = Self {
            inner: client.database(&config.mongo_db_name),
        };

        database.ping().await?;
        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);

        Ok(database)
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.inner.collection(name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.ping().await.inspect_err(|e| {
            log::warn!("MongoDB health check on '{}' failed: {}", self.inner.name(), e)
        })
    }

    async fn ping(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;

    options.app_name = Some(APP_NAME.to_string());
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.max_pool_size = Some(10);
    options.min_pool_size = Some(1);
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_database_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[tokio::test]
    async fn client_options_carry_app_name_and_timeouts() {
        let options = client_options(&Config::test_config())
            .await
            .expect("test connection string should parse");

        assert_eq!(options.app_name.as_deref(), Some("course-forge"));
        assert_eq!(options.max_pool_size, Some(10));
        assert_eq!(options.server_selection_timeout, Some(Duration::from_secs(5)));
        assert!(options.server_api.is_some());
    }

    #[tokio::test]
    async fn malformed_connection_string_is_database_error() {
        let mut config = Config::test_config();
        config.mongo_conn_string = "not a mongodb uri".to_string();

        let err = client_options(&config).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
