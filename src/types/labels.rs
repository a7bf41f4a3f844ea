// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::ToolsError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Equality label filter parsed from `key1=val1,key2=val2`.
///
/// An empty filter matches every object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    labels: BTreeMap<String, String>,
}

impl LabelFilter {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Check whether every pair of the filter is present in `labels`
    pub fn matches(&self, labels: Option<&BTreeMap<String, String>>) -> bool {
        if self.labels.is_empty() {
            return true;
        }
        let Some(labels) = labels else {
            return false;
        };
        self.labels
            .iter()
            .all(|(k, v)| labels.get(k).is_some_and(|actual| actual == v))
    }
}

impl FromStr for LabelFilter {
    type Err = ToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut labels = BTreeMap::new();

        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((key, value)) = entry.split_once('=') else {
                return Err(ToolsError::InvalidLabelFilter(format!(
                    "'{}' is not a key=value pair",
                    entry
                )));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ToolsError::InvalidLabelFilter(format!(
                    "'{}' has an empty key",
                    entry
                )));
            }
            labels.insert(key.to_string(), value.trim().to_string());
        }

        Ok(LabelFilter { labels })
    }
}

impl fmt::Display for LabelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in &self.labels {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}={}", k, v)?;
            first = false;
        }
        Ok(())
    }
}
