//! Features available to snapshots.

use request::Time;

endpoint! {
    /// Lists the features that snapshots can include.
    GetFeatures => GetFeaturesRequest {
        name: "features.get_features",
        method: Get,
        paths: ["/_features"],
        body: false,
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

impl GetFeaturesRequest {
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for GetFeaturesRequest {
    fn default() -> Self {
        Self::new()
    }
}
