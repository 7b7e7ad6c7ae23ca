//! Store Settings Model

use serde::{Deserialize, Serialize};

/// Store settings entity (singleton row)
///
/// Holds the ticket header fields and the network printer target
/// consumed by the print dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StoreSettings {
    pub id: i64,
    pub store_name: String,
    #[serde(default)]
    pub store_address: String,
    pub printer_ip: Option<String>,
    pub printer_port: i64,
    pub updated_at: i64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            id: 1,
            store_name: "Dona Guedes".to_string(),
            store_address: String::new(),
            printer_ip: None,
            printer_port: 9100,
            updated_at: 0,
        }
    }
}

/// Update settings payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreSettingsUpdate {
    pub store_name: Option<String>,
    pub store_address: Option<String>,
    pub printer_ip: Option<String>,
    pub printer_port: Option<i64>,
}
