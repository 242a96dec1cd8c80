// File: mutate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::collections::BTreeMap;
use url::Url;

/// A parsed input URL together with its query parameters.
///
/// Duplicate keys collapse to the last value seen, so every key appears
/// exactly once in the mapping and once in any rebuilt query string.
#[derive(Debug, Clone)]
pub struct ParsedRequest {
    url: Url,
    params: BTreeMap<String, String>,
}

impl ParsedRequest {
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self::from_url)
    }

    pub fn from_url(url: Url) -> Self {
        let params = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { url, params }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn substitution(&self, marker: &str) -> MarkerSubstitution {
        MarkerSubstitution::new(self.params.keys(), marker)
    }

    /// Builds the request URL with every query value replaced by `marker`.
    pub fn mutated(&self, marker: &str) -> Url {
        self.substitution(marker).apply(&self.url)
    }
}

/// Maps every query key of a request to the reflection marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSubstitution {
    values: BTreeMap<String, String>,
}

impl MarkerSubstitution {
    pub fn new<I, K>(keys: I, marker: &str) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let values = keys
            .into_iter()
            .map(|k| (k.into(), marker.to_string()))
            .collect();
        Self { values }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rebuilds the query of `url` from this substitution. Keys come out
    /// sorted and form-urlencoded; scheme, host, path and fragment are kept.
    pub fn apply(&self, url: &Url) -> Url {
        let mut mutated = url.clone();
        if self.values.is_empty() {
            mutated.set_query(None);
            return mutated;
        }
        {
            let mut pairs = mutated.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(self.values.iter());
        }
        mutated
    }
}
