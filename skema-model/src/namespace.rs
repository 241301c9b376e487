//! Namespaces and their import tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved alias for the builtin pseudo-namespace.
///
/// Primitive types resolve against this alias; it has no generated file and
/// must never produce an import line.
pub const PRIMITIVE_ALIAS: &str = "Primitive";

/// A named grouping of schema declarations; the unit of export.
///
/// A namespace is identified by a canonical URI-like name and records which
/// other namespaces its generated output refers to. The import table maps a
/// short alias (the identifier used inside generated code) to the full
/// canonical name of the referenced namespace.
///
/// Entries iterate in ascending alias order so that two export runs over an
/// unchanged model emit byte-identical import blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    name: String,
    imports: BTreeMap<String, ImportEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ImportEntry {
    full_name: String,
    used: bool,
}

impl Namespace {
    /// Create a namespace with the given canonical name and no imports.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: BTreeMap::new(),
        }
    }

    /// Canonical name of this namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an imported namespace under a short alias.
    ///
    /// The import starts out unused; resolution marks it used once a
    /// declaration actually refers to it.
    pub fn add_import(&mut self, alias: impl Into<String>, full_name: impl Into<String>) {
        self.imports.insert(
            alias.into(),
            ImportEntry {
                full_name: full_name.into(),
                used: false,
            },
        );
    }

    /// Register an imported namespace and mark it used in one step.
    pub fn add_used_import(&mut self, alias: impl Into<String>, full_name: impl Into<String>) {
        let alias = alias.into();
        self.add_import(alias.clone(), full_name);
        self.mark_used(&alias);
    }

    /// Mark an alias as referenced by generated output.
    ///
    /// Unknown aliases are ignored.
    pub fn mark_used(&mut self, alias: &str) {
        if let Some(entry) = self.imports.get_mut(alias) {
            entry.used = true;
        }
    }

    /// Full name registered for an alias, if any.
    pub fn import_full_name(&self, alias: &str) -> Option<&str> {
        self.imports.get(alias).map(|e| e.full_name.as_str())
    }

    /// Import table restricted to namespaces actually referenced by
    /// generated output, in ascending alias order.
    pub fn used_import_tbl(&self) -> BTreeMap<&str, &str> {
        self.imports
            .iter()
            .filter(|(_, entry)| entry.used)
            .map(|(alias, entry)| (alias.as_str(), entry.full_name.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_import_tbl_filters_unused() {
        let mut ns = Namespace::new("urn:a");
        ns.add_import("b", "urn:b");
        ns.add_import("c", "urn:c");
        ns.mark_used("b");

        let tbl = ns.used_import_tbl();
        assert_eq!(tbl.len(), 1);
        assert_eq!(tbl.get("b"), Some(&"urn:b"));
    }

    #[test]
    fn test_used_import_tbl_is_alphabetical() {
        let mut ns = Namespace::new("urn:a");
        ns.add_used_import("zeta", "urn:z");
        ns.add_used_import("alpha", "urn:alpha");
        ns.add_used_import("mid", "urn:m");

        let aliases: Vec<&str> = ns.used_import_tbl().into_keys().collect();
        assert_eq!(aliases, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_mark_used_unknown_alias_is_ignored() {
        let mut ns = Namespace::new("urn:a");
        ns.mark_used("nope");
        assert!(ns.used_import_tbl().is_empty());
    }

    #[test]
    fn test_namespace_round_trips_through_json() {
        let mut ns = Namespace::new("urn:a");
        ns.add_used_import("b", "urn:b");

        let json = serde_json::to_string(&ns).unwrap();
        let back: Namespace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ns);
    }
}
