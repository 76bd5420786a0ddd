//! Discovery of Redis instances a metrics exporter should poll.
//!
//! Targets come from four independent sources: delimited argument strings,
//! a comma-separated file, Cloud Foundry service bindings and Azure Resource
//! Manager. Each source returns its own [`TargetSet`] in discovery order;
//! merging sources is left to the caller.

mod args;
mod azure;
mod cloud_foundry;
mod error;
mod file;
mod lookup;
mod target;

pub use args::{DEFAULT_REDIS_ADDR, load_redis_args};
pub use azure::{
    AccessKeys, ArmClient, AzureEnvironment, AzureSettings, RedisCache, RedisProperties,
    ResourceGroup, ResourceManager, TLS_PORT, azure_redis_services, cache_address,
    discover_azure_redis_from_env,
};
pub use cloud_foundry::{
    Application, CfEnv, PlatformEnv, REDIS_SERVICE_TAG, Service, cloud_foundry_redis_bindings,
    parse_application,
};
pub use error::{CsvError, Error, io_error, parse_error};
pub use file::{load_redis_file, parse_redis_csv};
pub use lookup::lookup;
pub use target::{Discovery, DiscoveryWarning, Target, TargetSet};
