// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Query-string manipulation, as used for facet and pagination links.

use url::Url;

use crate::RequestContext;

type Params = Vec<(String, String)>;

fn params(url: &Url) -> Params {
    url.query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

fn with_params(url: &Url, params: &Params) -> Url {
    let mut url = url.clone();
    if params.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(params);
    }
    url
}

/// Replaces all values of each given key,
/// keeping the position of the key if it was present already.
#[must_use]
pub fn url_rewrite(url: &Url, changes: &[(&str, &[&str])]) -> Url {
    let mut params = params(url);
    for (key, values) in changes {
        let pos = params.iter().position(|(existing, _)| existing == key);
        params.retain(|(existing, _)| existing != key);
        let new = values
            .iter()
            .map(|value| ((*key).to_owned(), (*value).to_owned()));
        match pos {
            Some(pos) => {
                let tail = params.split_off(pos);
                params.extend(new);
                params.extend(tail);
            }
            None => params.extend(new),
        }
    }
    with_params(url, &params)
}

/// Adds the given key-value pairs, unless already present.
#[must_use]
pub fn url_add(url: &Url, additions: &[(&str, &str)]) -> Url {
    let mut params = params(url);
    for (key, value) in additions {
        if !params
            .iter()
            .any(|(ekey, evalue)| ekey == key && evalue == value)
        {
            params.push(((*key).to_owned(), (*value).to_owned()));
        }
    }
    with_params(url, &params)
}

/// Removes all values of the `keys`,
/// and single values of the `pairs`.
#[must_use]
pub fn url_del(url: &Url, keys: &[&str], pairs: &[(&str, &str)]) -> Url {
    let mut params = params(url);
    params.retain(|(key, _)| !keys.contains(&key.as_str()));
    for (key, value) in pairs {
        if let Some(pos) = params
            .iter()
            .position(|(ekey, evalue)| ekey == key && evalue == value)
        {
            params.remove(pos);
        }
    }
    with_params(url, &params)
}

/// Whether the current request's query contains all the `keys`,
/// and for each of the `pairs`, has the value as the key's first value.
#[must_use]
pub fn in_url(ctx: &RequestContext, keys: &[&str], pairs: &[(&str, &str)]) -> bool {
    let params = params(&ctx.url);
    let first = |key: &str| {
        params
            .iter()
            .find(|(ekey, _)| ekey == key)
            .map(|(_, value)| value.as_str())
    };
    keys.iter().all(|&key| first(key).is_some())
        && pairs.iter().all(|&(key, value)| first(key) == Some(value))
}
