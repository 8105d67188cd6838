use std::sync::Arc;

use crate::app_info::{AppInfoClient, StaticAppInfo};
use crate::gateway::WaterSourceGateway;

/// Dependencies handed to every reducer.
///
/// Built once by the caller and passed down; reducers clone the `Arc`s
/// into the effects that need them.
#[derive(Clone)]
pub struct AppEnv {
    pub gateway: Arc<dyn WaterSourceGateway>,
    pub app_info: Arc<dyn AppInfoClient>,
}

impl AppEnv {
    pub fn new(gateway: Arc<dyn WaterSourceGateway>, app_info: Arc<dyn AppInfoClient>) -> Self {
        Self { gateway, app_info }
    }

    /// Environment using the built-in author client.
    pub fn with_gateway(gateway: Arc<dyn WaterSourceGateway>) -> Self {
        Self::new(gateway, Arc::new(StaticAppInfo))
    }
}
