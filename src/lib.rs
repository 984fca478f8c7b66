// Copyright 2026 HAC Gateway Contributors
// SPDX-License-Identifier: Apache-2.0

//! HAC gateway library — authenticate against the Home Access Center
//! student portal, scrape its HTML views, and expose them as typed JSON.
//!
//! The pipeline is: credentials → login handshake (`portal::auth`) →
//! authenticated session (`portal::session`) → page fetches
//! (`portal::pages`) → HTML parsers (`extract`) → response shapes
//! (`pipeline`). The `rest` module wraps the pipeline in a thin HTTP
//! boundary that renders every failure as one uniform rejection.

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod portal;
pub mod rest;
