// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Redis service bindings injected by Cloud Foundry.
//!
//! The platform describes bound services through the `VCAP_SERVICES`
//! environment variable. Detection and parsing sit behind [`PlatformEnv`] so
//! callers can substitute a fixed environment.

use std::{collections::BTreeMap, env};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::Error,
    lookup::lookup,
    target::{Discovery, DiscoveryWarning},
};

/// Service tag identifying Redis bindings.
pub const REDIS_SERVICE_TAG: &str = "redis";

const VCAP_APPLICATION: &str = "VCAP_APPLICATION";
const VCAP_SERVICES: &str = "VCAP_SERVICES";

/// Capability exposing the hosting platform to discovery.
pub trait PlatformEnv
{
    /// Returns `true` when the process runs inside the platform.
    fn is_running(&self,) -> bool;

    /// Reads the current application environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Platform`] when the environment is missing or
    /// malformed.
    fn current(&self,) -> Result<Application, Error,>;
}

/// Application environment descriptor.
#[derive(Debug, Clone, Default, Deserialize,)]
pub struct Application
{
    /// Application GUID.
    #[serde(default, rename = "application_id")]
    pub id:         String,
    /// Application name.
    #[serde(default, rename = "application_name")]
    pub name:       String,
    /// Space the application is deployed to.
    #[serde(default)]
    pub space_name: String,
    /// Bound services keyed by service label.
    #[serde(skip)]
    pub services:   BTreeMap<String, Vec<Service,>,>,
}

/// One bound service instance.
#[derive(Debug, Clone, Default, Deserialize,)]
pub struct Service
{
    /// Instance name, used as the target alias.
    #[serde(default)]
    pub name:        String,
    /// Service offering label.
    #[serde(default)]
    pub label:       String,
    /// Tags attached by the service broker.
    #[serde(default)]
    pub tags:        Vec<String,>,
    /// Broker supplied credentials.
    #[serde(default)]
    pub credentials: Map<String, Value,>,
}

impl Application
{
    /// Returns services carrying `tag`, ordered by label and then by
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Platform`] when no service carries the tag.
    pub fn services_with_tag(&self, tag: &str,) -> Result<Vec<&Service,>, Error,>
    {
        let matching: Vec<&Service,> = self
            .services
            .values()
            .flatten()
            .filter(|service| service.tags.iter().any(|candidate| candidate == tag,),)
            .collect();

        if matching.is_empty() {
            return Err(Error::platform(format!("no services with tag {tag}"),),);
        }
        Ok(matching,)
    }
}

/// [`PlatformEnv`] backed by the process environment.
#[derive(Debug, Clone, Copy, Default,)]
pub struct CfEnv;

impl PlatformEnv for CfEnv
{
    fn is_running(&self,) -> bool
    {
        env::var_os(VCAP_APPLICATION,).is_some_and(|value| !value.is_empty(),)
    }

    fn current(&self,) -> Result<Application, Error,>
    {
        let application = env::var(VCAP_APPLICATION,)
            .map_err(|e| Error::platform(format!("{VCAP_APPLICATION}: {e}"),),)?;
        let services = env::var(VCAP_SERVICES,)
            .map_err(|e| Error::platform(format!("{VCAP_SERVICES}: {e}"),),)?;
        parse_application(&application, &services,)
    }
}

/// Parses the `VCAP_APPLICATION` and `VCAP_SERVICES` documents.
///
/// # Errors
///
/// Returns [`Error::Platform`] when either document is not valid JSON of the
/// expected shape.
pub fn parse_application(application: &str, services: &str,) -> Result<Application, Error,>
{
    let mut parsed: Application = serde_json::from_str(application,)
        .map_err(|e| Error::platform(format!("invalid {VCAP_APPLICATION}: {e}"),),)?;
    parsed.services = serde_json::from_str(services,)
        .map_err(|e| Error::platform(format!("invalid {VCAP_SERVICES}: {e}"),),)?;
    Ok(parsed,)
}

/// Collects Redis bindings from the platform environment.
///
/// Never fails: platform errors are recorded as warnings and yield an empty
/// result. A service whose credentials cannot be read is skipped with a
/// warning while the remaining services are still returned.
///
/// # Examples
///
/// ```
/// use redis_discovery::{CfEnv, cloud_foundry_redis_bindings};
///
/// // Outside Cloud Foundry nothing is discovered.
/// let discovery = cloud_foundry_redis_bindings(&CfEnv,);
/// assert!(discovery.targets.is_empty());
/// assert!(discovery.warnings.is_empty());
/// ```
pub fn cloud_foundry_redis_bindings(platform: &impl PlatformEnv,) -> Discovery
{
    let mut discovery = Discovery::default();
    if !platform.is_running() {
        return discovery;
    }

    let application = match platform.current() {
        Ok(application,) => application,
        Err(error,) => {
            discovery.warn(DiscoveryWarning::new(
                "cloud foundry",
                format!("unable to get current environment: {error}"),
            ),);
            return discovery;
        }
    };

    let services = match application.services_with_tag(REDIS_SERVICE_TAG,) {
        Ok(services,) => services,
        Err(error,) => {
            discovery.warn(DiscoveryWarning::new(
                "cloud foundry",
                format!("error while getting redis services: {error}"),
            ),);
            return discovery;
        }
    };

    for service in services {
        match binding_target(service,) {
            Ok((addr, password,),) => {
                debug!("found redis binding {}", service.name);
                discovery.targets.push(addr, password, service.name.as_str(),);
            }
            Err(error,) => discovery.warn(DiscoveryWarning::new(
                service.name.as_str(),
                format!("skipping binding: {error}"),
            ),),
        }
    }

    discovery
}

fn binding_target(service: &Service,) -> Result<(String, String,), Error,>
{
    let credentials = &service.credentials;
    let host = lookup(credentials, &["host", "hostname"],)?;
    let port = lookup(credentials, &["port"],)?;
    let password = lookup(credentials, &["password"],)?;
    Ok((format!("{host}:{port}"), password,),)
}
