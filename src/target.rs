// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Target model shared by every discovery source.
//!
//! Sources accumulate results as three parallel sequences (addresses,
//! passwords and aliases) in discovery order. Callers that need paired
//! values iterate [`TargetSet::targets`].

use serde::Serialize;
use tracing::warn;

/// One monitorable Redis instance.
///
/// An empty `password` means no authentication. An empty `alias` leaves the
/// label choice to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Target
{
    /// Connection endpoint, either `host:port` or a `redis://` style URI.
    pub addr:     String,
    /// Authentication credential.
    pub password: String,
    /// Human readable label.
    pub alias:    String,
}

/// Ordered parallel sequences of addresses, passwords and aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct TargetSet
{
    /// Addresses in discovery order.
    pub addrs:     Vec<String,>,
    /// Passwords paired by index with `addrs`.
    pub passwords: Vec<String,>,
    /// Aliases paired by index with `addrs`.
    pub aliases:   Vec<String,>,
}

impl TargetSet
{
    /// Creates an empty set.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Appends one triple to all three sequences.
    pub fn push(
        &mut self,
        addr: impl Into<String,>,
        password: impl Into<String,>,
        alias: impl Into<String,>,
    )
    {
        self.addrs.push(addr.into(),);
        self.passwords.push(password.into(),);
        self.aliases.push(alias.into(),);
    }

    /// Number of discovered addresses.
    pub fn len(&self,) -> usize
    {
        self.addrs.len()
    }

    /// Returns `true` when no address was discovered.
    pub fn is_empty(&self,) -> bool
    {
        self.addrs.is_empty()
    }

    /// Returns `true` when all three sequences have the same length.
    pub fn is_aligned(&self,) -> bool
    {
        self.addrs.len() == self.passwords.len() && self.addrs.len() == self.aliases.len()
    }

    /// Iterates paired targets, stopping at the shortest sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use redis_discovery::{Target, TargetSet};
    ///
    /// let mut set = TargetSet::new();
    /// set.push("redis://cache:6379", "", "cache",);
    /// let targets: Vec<Target,> = set.targets().collect();
    /// assert_eq!(targets[0].alias, "cache");
    /// ```
    pub fn targets(&self,) -> impl Iterator<Item = Target,> + '_
    {
        self.addrs.iter().zip(&self.passwords,).zip(&self.aliases,).map(
            |((addr, password,), alias,)| Target {
                addr:     addr.clone(),
                password: password.clone(),
                alias:    alias.clone(),
            },
        )
    }

    /// Collects paired targets, logging when trailing values have no partner.
    pub fn to_targets(&self,) -> Vec<Target,>
    {
        if !self.is_aligned() {
            warn!(
                "discarding unpaired values: {} addresses, {} passwords, {} aliases",
                self.addrs.len(),
                self.passwords.len(),
                self.aliases.len()
            );
        }
        self.targets().collect()
    }

    /// Appends every sequence of `other` after the current contents.
    pub fn extend(&mut self, other: TargetSet,)
    {
        self.addrs.extend(other.addrs,);
        self.passwords.extend(other.passwords,);
        self.aliases.extend(other.aliases,);
    }
}

/// Non-fatal condition observed while discovering targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct DiscoveryWarning
{
    /// Resource, service or step the warning refers to.
    pub subject: String,
    /// Description of what went wrong.
    pub message: String,
}

impl DiscoveryWarning
{
    /// Creates a warning about `subject`.
    pub fn new(subject: impl Into<String,>, message: impl Into<String,>,) -> Self
    {
        Self {
            subject: subject.into(), message: message.into(),
        }
    }
}

impl std::fmt::Display for DiscoveryWarning
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Targets produced by a tolerant source together with the warnings it
/// recorded along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct Discovery
{
    /// Targets in discovery order.
    pub targets:  TargetSet,
    /// Non-fatal problems, in the order they occurred.
    pub warnings: Vec<DiscoveryWarning,>,
}

impl Discovery
{
    /// Logs the warning and keeps it alongside the targets.
    pub(crate) fn warn(&mut self, warning: DiscoveryWarning,)
    {
        warn!("{}", warning);
        self.warnings.push(warning,);
    }
}
