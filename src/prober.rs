// File: prober.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::debug;
use url::Url;

use crate::config::ConfigParameter;
use crate::error::ProbeError;
use crate::mutate::ParsedRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The body echoed the marker. Holds the mutated URL.
    Reflected(Url),
    Clean(Url),
}

impl ProbeOutcome {
    pub fn url(&self) -> &Url {
        match self {
            ProbeOutcome::Reflected(url) | ProbeOutcome::Clean(url) => url,
        }
    }

    pub fn is_reflected(&self) -> bool {
        matches!(self, ProbeOutcome::Reflected(_))
    }
}

/// Performs one mutate, fetch and inspect cycle per URL.
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
    marker: String,
}

impl Prober {
    pub fn new(config: &ConfigParameter) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    /// The marker comes from a validated `ConfigParameter`, so it is never
    /// empty.
    pub fn with_client(client: reqwest::Client, config: &ConfigParameter) -> Self {
        Prober {
            client,
            marker: config.reflect().to_string(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub async fn probe(&self, raw: &str) -> Result<ProbeOutcome, ProbeError> {
        let request = ParsedRequest::parse(raw).map_err(|source| ProbeError::Parse {
            url: raw.to_string(),
            source,
        })?;
        let mutated = request.mutated(&self.marker);
        debug!("Probing {} ({} parameter(s))", mutated, request.params().len());

        let response = self
            .client
            .get(mutated.clone())
            .send()
            .await
            .map_err(|source| ProbeError::Request {
                url: mutated.to_string(),
                source,
            })?;

        let body = response.bytes().await.map_err(|source| ProbeError::Body {
            url: mutated.to_string(),
            source,
        })?;

        if contains_marker(&body, self.marker.as_bytes()) {
            Ok(ProbeOutcome::Reflected(mutated))
        } else {
            Ok(ProbeOutcome::Clean(mutated))
        }
    }
}

/// Literal, case-sensitive substring test on the raw body bytes. `marker`
/// must not be empty.
fn contains_marker(body: &[u8], marker: &[u8]) -> bool {
    body.windows(marker.len()).any(|window| window == marker)
}
