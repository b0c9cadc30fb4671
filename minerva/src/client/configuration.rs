use super::base::MinervaClient;
use crate::errors::GetError;
use crate::models::{ConfigOption, Configuration};
use crate::schema::Context;
use crate::urls::{CONFIGURATION, OPTIONS};

impl MinervaClient {
    /// Get the configuration of the MINERVA instance.
    pub async fn configuration(&self) -> Result<Configuration, GetError> {
        let url = self.endpoint(&[CONFIGURATION]);
        self.get_one(&url, &Context::new()).await
    }

    /// Get the configuration options only.
    pub async fn options(&self) -> Result<Vec<ConfigOption>, GetError> {
        let url = self.endpoint(&[OPTIONS]);
        self.get_many(&url, &Context::new()).await
    }
}
