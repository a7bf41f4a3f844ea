// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Value types shared by the tools.

pub mod labels;
pub mod selection;

pub use labels::LabelFilter;
pub use selection::SelectionResult;
