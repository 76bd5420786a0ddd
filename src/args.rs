// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Targets supplied through command line arguments or environment variables.

use crate::target::TargetSet;

/// Address used when no address is configured.
pub const DEFAULT_REDIS_ADDR: &str = "redis://localhost:6379";

/// Splits delimited address, password and alias specifications into
/// parallel sequences.
///
/// Shorter password and alias lists are filled by repeating their first
/// element, so a single password applies to every address. Surplus
/// passwords or aliases are kept as given.
///
/// # Examples
///
/// ```
/// use redis_discovery::load_redis_args;
///
/// let set = load_redis_args("a,b,c", "x", "", ",",);
/// assert_eq!(set.addrs, vec!["a", "b", "c"]);
/// assert_eq!(set.passwords, vec!["x", "x", "x"]);
/// assert_eq!(set.aliases, vec!["", "", ""]);
/// ```
pub fn load_redis_args(addr: &str, password: &str, alias: &str, separator: &str,) -> TargetSet
{
    let addr = if addr.is_empty() { DEFAULT_REDIS_ADDR } else { addr };

    let addrs = split(addr, separator,);
    let mut passwords = split(password, separator,);
    broadcast_first(&mut passwords, addrs.len(),);
    let mut aliases = split(alias, separator,);
    broadcast_first(&mut aliases, addrs.len(),);

    TargetSet {
        addrs,
        passwords,
        aliases,
    }
}

fn split(value: &str, separator: &str,) -> Vec<String,>
{
    if separator.is_empty() {
        return vec![value.to_owned()];
    }
    value.split(separator,).map(str::to_owned,).collect()
}

fn broadcast_first(values: &mut Vec<String,>, len: usize,)
{
    let Some(first,) = values.first().cloned() else {
        return;
    };
    while values.len() < len {
        values.push(first.clone(),);
    }
}
