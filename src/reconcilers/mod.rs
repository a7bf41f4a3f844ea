// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One-shot reconcilers that bring cluster objects to the desired label state.

pub mod noproxy;

pub use noproxy::{NoProxyReconciler, ReconcileReport};
