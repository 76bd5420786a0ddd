// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Azure Cache for Redis instances enumerated through Azure Resource Manager.
//!
//! Discovery walks every resource group of the subscription, lists the Redis
//! caches in each group and reads their access keys. Only the resource group
//! listing is fatal; failures for individual groups or caches degrade the
//! result and are reported as warnings.

use std::{env, future::Future};

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::{
    error::Error,
    target::{Discovery, DiscoveryWarning},
};

/// Port Azure exposes for TLS connections.
pub const TLS_PORT: u16 = 6380;

const GROUPS_API_VERSION: &str = "2018-02-01";
const REDIS_API_VERSION: &str = "2018-03-01";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sovereign cloud endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct AzureEnvironment
{
    /// Canonical environment name, e.g. `AzurePublicCloud`.
    pub name:                      &'static str,
    /// Token issuer base URL.
    pub active_directory_endpoint: &'static str,
    /// Resource Manager base URL, also the token audience.
    pub resource_manager_endpoint: &'static str,
}

impl AzureEnvironment
{
    /// Azure China operated by 21Vianet.
    pub const CHINA: Self = Self {
        name:                      "AzureChinaCloud",
        active_directory_endpoint: "https://login.chinacloudapi.cn/",
        resource_manager_endpoint: "https://management.chinacloudapi.cn/",
    };
    /// Azure Germany.
    pub const GERMAN: Self = Self {
        name:                      "AzureGermanCloud",
        active_directory_endpoint: "https://login.microsoftonline.de/",
        resource_manager_endpoint: "https://management.microsoftazure.de/",
    };
    /// Global Azure.
    pub const PUBLIC: Self = Self {
        name:                      "AzurePublicCloud",
        active_directory_endpoint: "https://login.microsoftonline.com/",
        resource_manager_endpoint: "https://management.azure.com/",
    };
    /// Azure US Government.
    pub const US_GOVERNMENT: Self = Self {
        name:                      "AzureUSGovernmentCloud",
        active_directory_endpoint: "https://login.microsoftonline.us/",
        resource_manager_endpoint: "https://management.usgovcloudapi.net/",
    };

    /// Resolves an environment by name, ignoring ASCII case.
    ///
    /// An empty name selects the public cloud.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for unknown names.
    ///
    /// # Examples
    ///
    /// ```
    /// use redis_discovery::AzureEnvironment;
    ///
    /// let env = AzureEnvironment::from_name("azurechinacloud",).expect("known cloud",);
    /// assert_eq!(env, AzureEnvironment::CHINA);
    /// assert!(AzureEnvironment::from_name("MarsCloud",).is_err());
    /// ```
    pub fn from_name(name: &str,) -> Result<Self, Error,>
    {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Self::PUBLIC,);
        }

        [Self::PUBLIC, Self::CHINA, Self::US_GOVERNMENT, Self::GERMAN,]
            .into_iter()
            .find(|candidate| candidate.name.eq_ignore_ascii_case(name,),)
            .ok_or_else(|| Error::config(format!("no cloud environment matching the name '{name}'"),),)
    }
}

/// Settings read from `AZURE_*` environment variables.
#[derive(Clone, PartialEq, Eq,)]
pub struct AzureSettings
{
    /// Cloud selected by `AZURE_ENVIRONMENT`.
    pub environment:     AzureEnvironment,
    /// Subscription whose resource groups are enumerated.
    pub subscription_id: String,
    /// Directory tenant of the service principal.
    pub tenant_id:       Option<String,>,
    /// Application id of the service principal.
    pub client_id:       Option<String,>,
    /// Secret of the service principal.
    pub client_secret:   Option<String,>,
}

impl std::fmt::Debug for AzureSettings
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("AzureSettings",)
            .field("environment", &self.environment.name,)
            .field("subscription_id", &self.subscription_id,)
            .field("tenant_id", &self.tenant_id,)
            .field("client_id", &self.client_id,)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>",),)
            .finish()
    }
}

impl AzureSettings
{
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `AZURE_ENVIRONMENT` names an unknown
    /// cloud or `AZURE_SUBSCRIPTION_ID` is missing.
    pub fn from_env() -> Result<Self, Error,>
    {
        Self::from_lookup(|key| env::var(key,).ok(),)
    }

    /// Reads settings through `lookup`, treating empty values as missing.
    ///
    /// # Errors
    ///
    /// See [`AzureSettings::from_env`].
    pub fn from_lookup<F,>(lookup: F,) -> Result<Self, Error,>
    where
        F: Fn(&str,) -> Option<String,>,
    {
        let read = |key: &str| lookup(key,).filter(|value| !value.trim().is_empty(),);

        let environment =
            AzureEnvironment::from_name(read("AZURE_ENVIRONMENT",).as_deref().unwrap_or_default(),)?;
        let subscription_id = read("AZURE_SUBSCRIPTION_ID",)
            .ok_or_else(|| Error::config("AZURE_SUBSCRIPTION_ID is not set",),)?;

        Ok(Self {
            environment,
            subscription_id,
            tenant_id: read("AZURE_TENANT_ID",),
            client_id: read("AZURE_CLIENT_ID",),
            client_secret: read("AZURE_CLIENT_SECRET",),
        },)
    }
}

/// Resource group of the subscription.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct ResourceGroup
{
    /// Resource group name.
    pub name: String,
}

/// Azure Cache for Redis resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct RedisCache
{
    /// Cache name, used as the target alias.
    pub name:       String,
    /// Connection properties.
    #[serde(default)]
    pub properties: RedisProperties,
}

/// Subset of cache properties needed to build an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct RedisProperties
{
    /// DNS name of the cache.
    #[serde(default)]
    pub host_name:           String,
    /// Whether the plain-text port 6379 is open.
    #[serde(default)]
    pub enable_non_ssl_port: bool,
}

/// Access keys of a cache. `Debug` only reports which keys are present.
#[derive(Clone, Default, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeys
{
    /// Key used as the target password.
    #[serde(default)]
    pub primary_key:   Option<String,>,
    /// Rotation key.
    #[serde(default)]
    pub secondary_key: Option<String,>,
}

impl std::fmt::Debug for AccessKeys
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("AccessKeys",)
            .field("primary_key", &self.primary_key.is_some(),)
            .field("secondary_key", &self.secondary_key.is_some(),)
            .finish()
    }
}

/// Read-only view of the resource manager used by discovery.
pub trait ResourceManager
{
    /// Lists every resource group of the subscription.
    fn list_resource_groups(&self,)
    -> impl Future<Output = Result<Vec<ResourceGroup,>, Error,>,> + Send;

    /// Lists the Redis caches of one resource group.
    fn list_redis_caches(
        &self,
        group: &str,
    ) -> impl Future<Output = Result<Vec<RedisCache,>, Error,>,> + Send;

    /// Reads the access keys of one cache.
    fn list_keys(
        &self,
        group: &str,
        cache: &str,
    ) -> impl Future<Output = Result<AccessKeys, Error,>,> + Send;
}

/// Returns the connection address for `cache`.
///
/// Caches with the plain port enabled are reached on the default port,
/// everything else over TLS on [`TLS_PORT`].
pub fn cache_address(cache: &RedisCache,) -> String
{
    let host = &cache.properties.host_name;
    if cache.properties.enable_non_ssl_port {
        format!("redis://{host}")
    } else {
        format!("rediss://{host}:{TLS_PORT}")
    }
}

/// Discovers every Redis cache visible to `manager`.
///
/// Order follows the resource group listing, then the cache listing within
/// each group.
///
/// # Errors
///
/// Propagates the error of the resource group listing. Failures for single
/// groups or caches are recorded in [`Discovery::warnings`] instead.
pub async fn azure_redis_services(manager: &impl ResourceManager,) -> Result<Discovery, Error,>
{
    let groups = manager.list_resource_groups().await?;
    debug!("found {} resource groups", groups.len());

    let mut discovery = Discovery::default();
    for group in &groups {
        let caches = match manager.list_redis_caches(&group.name,).await {
            Ok(caches,) => caches,
            Err(error,) => {
                discovery.warn(DiscoveryWarning::new(
                    group.name.as_str(),
                    format!("failed to list redis caches: {error}"),
                ),);
                continue;
            }
        };

        for cache in &caches {
            let password = match manager.list_keys(&group.name, &cache.name,).await {
                Ok(AccessKeys {
                    primary_key: Some(key,), ..
                },) => key,
                Ok(_,) => {
                    discovery.warn(DiscoveryWarning::new(
                        cache.name.as_str(),
                        "no rights to read redis keys",
                    ),);
                    String::new()
                }
                Err(error,) => {
                    discovery.warn(DiscoveryWarning::new(
                        cache.name.as_str(),
                        format!("failed to read redis keys: {error}"),
                    ),);
                    String::new()
                }
            };

            discovery.targets.push(cache_address(cache,), password, cache.name.as_str(),);
        }
    }

    info!("discovered {} azure redis caches", discovery.targets.len());
    Ok(discovery,)
}

/// Authenticates from the environment and discovers Azure Redis caches.
///
/// # Errors
///
/// Returns [`Error::Config`] for invalid settings, [`Error::Auth`] when no
/// token can be obtained and [`Error::Query`] when resource groups cannot be
/// listed.
pub async fn discover_azure_redis_from_env() -> Result<Discovery, Error,>
{
    let settings = AzureSettings::from_env()?;
    let client = ArmClient::authenticate(&settings,).await?;
    azure_redis_services(&client,).await
}

#[derive(Deserialize,)]
struct TokenResponse
{
    access_token: String,
}

#[derive(Deserialize,)]
struct Page<T,>
{
    #[serde(default = "Vec::new")]
    value:     Vec<T,>,
    #[serde(default, rename = "nextLink")]
    next_link: Option<String,>,
}

/// Resource manager client authenticated with a service principal.
pub struct ArmClient
{
    http:            Client,
    base:            String,
    subscription_id: String,
    token:           String,
}

impl std::fmt::Debug for ArmClient
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("ArmClient",)
            .field("base", &self.base,)
            .field("subscription_id", &self.subscription_id,)
            .finish_non_exhaustive()
    }
}

impl ArmClient
{
    /// Obtains a client-credentials token for the resource manager.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] when tenant, client id or client secret are
    /// missing, or when the token request fails.
    pub async fn authenticate(settings: &AzureSettings,) -> Result<Self, Error,>
    {
        let (Some(tenant,), Some(client_id,), Some(client_secret,),) =
            (&settings.tenant_id, &settings.client_id, &settings.client_secret,)
        else {
            return Err(Error::auth(
                "AZURE_TENANT_ID, AZURE_CLIENT_ID and AZURE_CLIENT_SECRET must be set",
            ),);
        };

        let http = Client::builder()
            .user_agent(USER_AGENT,)
            .build()
            .map_err(|e| Error::auth(format!("failed to initialize HTTP client: {e}"),),)?;

        let environment = settings.environment;
        let url = format!("{}{tenant}/oauth2/token", environment.active_directory_endpoint);
        debug!("requesting token for {} from {}", environment.name, url);

        let response = http
            .post(&url,)
            .form(&[
                ("grant_type", "client_credentials",),
                ("client_id", client_id.as_str(),),
                ("client_secret", client_secret.as_str(),),
                ("resource", environment.resource_manager_endpoint,),
            ],)
            .send()
            .await
            .map_err(|e| Error::auth(format!("token request failed: {e}"),),)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::auth(format!("token request rejected with status {status}"),),);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::auth(format!("invalid token response: {e}"),),)?;

        Ok(Self {
            http,
            base: environment.resource_manager_endpoint.to_owned(),
            subscription_id: settings.subscription_id.clone(),
            token: token.access_token,
        },)
    }

    fn redis_url(&self, group: &str,) -> String
    {
        format!(
            "{}subscriptions/{}/resourceGroups/{group}/providers/Microsoft.Cache/Redis",
            self.base, self.subscription_id
        )
    }

    async fn fetch<T: DeserializeOwned,>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T, Error,>
    {
        let response = request
            .bearer_auth(&self.token,)
            .send()
            .await
            .map_err(|e| Error::query(format!("{what}: {e}"),),)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::query(format!("{what}: status {status}"),),);
        }

        response.json().await.map_err(|e| Error::query(format!("{what}: invalid response: {e}"),),)
    }

    async fn list_all<T: DeserializeOwned,>(&self, url: String, what: &str,) -> Result<Vec<T,>, Error,>
    {
        let mut items = Vec::new();
        let mut next = Some(url,);
        while let Some(url,) = next {
            let page: Page<T,> = self.fetch(self.http.get(&url,), what,).await?;
            items.extend(page.value,);
            next = page.next_link.filter(|link| !link.is_empty(),);
        }
        Ok(items,)
    }
}

impl ResourceManager for ArmClient
{
    async fn list_resource_groups(&self,) -> Result<Vec<ResourceGroup,>, Error,>
    {
        let url = format!(
            "{}subscriptions/{}/resourcegroups?api-version={GROUPS_API_VERSION}",
            self.base, self.subscription_id
        );
        self.list_all(url, "listing resource groups",).await
    }

    async fn list_redis_caches(&self, group: &str,) -> Result<Vec<RedisCache,>, Error,>
    {
        let url = format!("{}?api-version={REDIS_API_VERSION}", self.redis_url(group,));
        self.list_all(url, &format!("listing redis caches in {group}"),).await
    }

    async fn list_keys(&self, group: &str, cache: &str,) -> Result<AccessKeys, Error,>
    {
        let url =
            format!("{}/{cache}/listKeys?api-version={REDIS_API_VERSION}", self.redis_url(group,));
        self.fetch(self.http.post(&url,).body("",), &format!("listing keys of {cache}"),).await
    }
}

#[cfg(test)]
mod tests
{
    use std::collections::HashMap;

    use super::*;

    struct FakeManager
    {
        groups: Result<Vec<&'static str,>, &'static str,>,
        caches: HashMap<&'static str, Result<Vec<RedisCache,>, &'static str,>,>,
        keys:   HashMap<&'static str, Result<Option<&'static str,>, &'static str,>,>,
    }

    impl ResourceManager for FakeManager
    {
        async fn list_resource_groups(&self,) -> Result<Vec<ResourceGroup,>, Error,>
        {
            match &self.groups {
                Ok(names,) => Ok(names
                    .iter()
                    .map(|name| ResourceGroup {
                        name: (*name).to_owned(),
                    },)
                    .collect(),),
                Err(message,) => Err(Error::query(*message,),),
            }
        }

        async fn list_redis_caches(&self, group: &str,) -> Result<Vec<RedisCache,>, Error,>
        {
            match self.caches.get(group,) {
                Some(Ok(caches,),) => Ok(caches.clone(),),
                Some(Err(message,),) => Err(Error::query(*message,),),
                None => Ok(Vec::new(),),
            }
        }

        async fn list_keys(&self, _group: &str, cache: &str,) -> Result<AccessKeys, Error,>
        {
            match self.keys.get(cache,) {
                Some(Ok(primary,),) => Ok(AccessKeys {
                    primary_key: primary.map(str::to_owned,), secondary_key: None,
                },),
                Some(Err(message,),) => Err(Error::query(*message,),),
                None => Ok(AccessKeys::default(),),
            }
        }
    }

    fn cache(name: &str, host: &str, non_ssl: bool,) -> RedisCache
    {
        RedisCache {
            name:       name.to_owned(),
            properties: RedisProperties {
                host_name: host.to_owned(), enable_non_ssl_port: non_ssl,
            },
        }
    }

    fn settings(pairs: &[(&str, &str,)],) -> Result<AzureSettings, Error,>
    {
        let values: HashMap<String, String,> =
            pairs.iter().map(|(k, v,)| ((*k).to_owned(), (*v).to_owned(),),).collect();
        AzureSettings::from_lookup(|key| values.get(key,).cloned(),)
    }

    #[test]
    fn address_reflects_tls_posture()
    {
        assert_eq!(cache_address(&cache("a", "a.redis.cache.windows.net", true,),), "redis://a.redis.cache.windows.net");
        assert_eq!(
            cache_address(&cache("b", "b.redis.cache.windows.net", false,),),
            "rediss://b.redis.cache.windows.net:6380"
        );
    }

    #[test]
    fn environment_names_resolve()
    {
        assert_eq!(AzureEnvironment::from_name("",).expect("default",), AzureEnvironment::PUBLIC);
        assert_eq!(
            AzureEnvironment::from_name("AZUREUSGOVERNMENTCLOUD",).expect("known",),
            AzureEnvironment::US_GOVERNMENT
        );
        assert_eq!(
            AzureEnvironment::from_name("AzureGermanCloud",).expect("known",),
            AzureEnvironment::GERMAN
        );

        let error = AzureEnvironment::from_name("AzureStackCloud",).expect_err("unknown",);
        assert!(matches!(error, Error::Config { .. }));
    }

    #[test]
    fn settings_validate_environment_and_subscription()
    {
        let error = settings(&[("AZURE_ENVIRONMENT", "Nowhere",), ("AZURE_SUBSCRIPTION_ID", "sub",)],)
            .expect_err("unknown environment",);
        assert!(matches!(error, Error::Config { .. }));

        let error = settings(&[("AZURE_SUBSCRIPTION_ID", "  ",)],).expect_err("blank subscription",);
        assert!(matches!(error, Error::Config { .. }));

        let parsed = settings(&[
            ("AZURE_ENVIRONMENT", "AzureChinaCloud",),
            ("AZURE_SUBSCRIPTION_ID", "sub",),
            ("AZURE_TENANT_ID", "tenant",),
        ],)
        .expect("valid settings",);
        assert_eq!(parsed.environment, AzureEnvironment::CHINA);
        assert_eq!(parsed.subscription_id, "sub");
        assert_eq!(parsed.tenant_id.as_deref(), Some("tenant"));
        assert_eq!(parsed.client_id, None);
    }

    #[test]
    fn settings_debug_redacts_secret()
    {
        let parsed = settings(&[("AZURE_SUBSCRIPTION_ID", "sub",), ("AZURE_CLIENT_SECRET", "hunter2",)],)
            .expect("valid settings",);
        let rendered = format!("{parsed:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[tokio::test]
    async fn missing_credentials_fail_authentication()
    {
        let parsed = settings(&[("AZURE_SUBSCRIPTION_ID", "sub",)],).expect("valid settings",);
        let error = ArmClient::authenticate(&parsed,).await.expect_err("no credentials",);
        assert!(matches!(error, Error::Auth { .. }));
    }

    #[tokio::test]
    async fn caches_are_enumerated_in_group_order()
    {
        let manager = FakeManager {
            groups: Ok(vec!["rg-1", "rg-2"],),
            caches: HashMap::from([
                ("rg-1", Ok(vec![cache("one", "one.example", false,), cache("two", "two.example", true,)],),),
                ("rg-2", Ok(vec![cache("three", "three.example", false,)],),),
            ],),
            keys:   HashMap::from([
                ("one", Ok(Some("k1",),),),
                ("two", Ok(Some("k2",),),),
                ("three", Ok(Some("k3",),),),
            ],),
        };

        let discovery = azure_redis_services(&manager,).await.expect("discovery failed",);
        assert_eq!(discovery.targets.addrs, vec![
            "rediss://one.example:6380",
            "redis://two.example",
            "rediss://three.example:6380"
        ]);
        assert_eq!(discovery.targets.passwords, vec!["k1", "k2", "k3"]);
        assert_eq!(discovery.targets.aliases, vec!["one", "two", "three"]);
        assert!(discovery.warnings.is_empty());
    }

    #[tokio::test]
    async fn missing_key_degrades_to_empty_password()
    {
        let manager = FakeManager {
            groups: Ok(vec!["rg"],),
            caches: HashMap::from([(
                "rg",
                Ok(vec![
                    cache("locked", "locked.example", false,),
                    cache("broken", "broken.example", false,),
                    cache("open", "open.example", false,),
                ],),
            )],),
            keys:   HashMap::from([
                ("locked", Ok(None,),),
                ("broken", Err("forbidden",),),
                ("open", Ok(Some("key",),),),
            ],),
        };

        let discovery = azure_redis_services(&manager,).await.expect("discovery failed",);
        assert_eq!(discovery.targets.aliases, vec!["locked", "broken", "open"]);
        assert_eq!(discovery.targets.passwords, vec!["", "", "key"]);
        assert!(discovery.targets.is_aligned());

        let subjects: Vec<&str,> = discovery.warnings.iter().map(|w| w.subject.as_str(),).collect();
        assert_eq!(subjects, vec!["locked", "broken"]);
        assert!(discovery.warnings[0].message.contains("no rights to read redis keys"));
    }

    #[tokio::test]
    async fn failing_group_is_skipped_with_warning()
    {
        let manager = FakeManager {
            groups: Ok(vec!["bad", "good"],),
            caches: HashMap::from([
                ("bad", Err("throttled",),),
                ("good", Ok(vec![cache("c", "c.example", true,)],),),
            ],),
            keys:   HashMap::from([("c", Ok(Some("k",),),)],),
        };

        let discovery = azure_redis_services(&manager,).await.expect("discovery failed",);
        assert_eq!(discovery.targets.aliases, vec!["c"]);
        assert_eq!(discovery.warnings.len(), 1);
        assert_eq!(discovery.warnings[0].subject, "bad");
    }

    #[tokio::test]
    async fn resource_group_failure_is_fatal()
    {
        let manager = FakeManager {
            groups: Err("subscription not found",), caches: HashMap::new(), keys: HashMap::new(),
        };

        let error = azure_redis_services(&manager,).await.expect_err("listing must fail",);
        assert!(matches!(error, Error::Query { .. }));
    }

    #[tokio::test]
    async fn repeated_discovery_is_identical()
    {
        let manager = FakeManager {
            groups: Ok(vec!["rg"],),
            caches: HashMap::from([("rg", Ok(vec![cache("c", "c.example", false,)],),)],),
            keys:   HashMap::from([("c", Ok(Some("k",),),)],),
        };

        let first = azure_redis_services(&manager,).await.expect("discovery failed",);
        let second = azure_redis_services(&manager,).await.expect("discovery failed",);
        assert_eq!(first, second);
    }

    #[test]
    fn resource_manager_payloads_deserialize()
    {
        let page: Page<RedisCache,> = serde_json::from_str(
            r#"{
                "value": [{
                    "name": "cache",
                    "properties": {"hostName": "cache.redis.cache.windows.net", "enableNonSslPort": false, "sslPort": 6380}
                }],
                "nextLink": "https://management.azure.com/next"
            }"#,
        )
        .expect("valid page",);
        assert_eq!(page.value[0].properties.host_name, "cache.redis.cache.windows.net");
        assert!(!page.value[0].properties.enable_non_ssl_port);
        assert_eq!(page.next_link.as_deref(), Some("https://management.azure.com/next"));

        let keys: AccessKeys =
            serde_json::from_str(r#"{"primaryKey": "p", "secondaryKey": "s"}"#,).expect("valid keys",);
        assert_eq!(keys.primary_key.as_deref(), Some("p"));
        assert_eq!(format!("{keys:?}"), "AccessKeys { primary_key: true, secondary_key: true }");
    }
}
