//! Documents and the declarations they carry.

use serde::{Deserialize, Serialize};

use crate::Namespace;

/// The root schema entity bound to one exporter instance.
///
/// A document owns exactly one [`Namespace`] plus the declarations a
/// format-specific renderer turns into source text. It is immutable for the
/// duration of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    namespace: Namespace,
    decls: Vec<TypeDecl>,
}

impl Document {
    /// Create a document for a namespace with no declarations yet.
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            decls: Vec::new(),
        }
    }

    /// Append a declaration, preserving declaration order.
    pub fn push_decl(&mut self, decl: TypeDecl) {
        self.decls.push(decl);
    }

    /// The namespace this document exports.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Declarations in schema order.
    pub fn decls(&self) -> &[TypeDecl] {
        &self.decls
    }
}

/// One named type declaration within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Declared type name.
    pub name: String,
    /// Structural kind of the declaration.
    pub kind: DeclKind,
}

/// Structural kinds of declarations the exporters know how to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclKind {
    /// A record type with named, possibly optional fields.
    Interface { fields: Vec<Field> },
    /// A transparent alias for another type.
    Alias { target: TypeRef },
}

/// A single field of an interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name as declared in the schema.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Whether the field may be absent.
    pub optional: bool,
}

impl Field {
    /// Create a required field.
    pub fn required(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Create an optional field.
    pub fn optional(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
        }
    }
}

/// Reference to a type, optionally qualified by a namespace alias.
///
/// An unqualified reference names a type in the current namespace or a
/// builtin; a qualified one names `alias.Type` in an imported namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Alias of the namespace the type lives in, or `None` for local and
    /// builtin types.
    pub namespace_alias: Option<String>,
    /// Type name within that namespace.
    pub name: String,
}

impl TypeRef {
    /// Reference a type in the current namespace or a builtin.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            namespace_alias: None,
            name: name.into(),
        }
    }

    /// Reference a type through an imported namespace alias.
    pub fn qualified(alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace_alias: Some(alias.into()),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_preserves_decl_order() {
        let mut doc = Document::new(Namespace::new("urn:a"));
        doc.push_decl(TypeDecl {
            name: "Second".to_string(),
            kind: DeclKind::Alias {
                target: TypeRef::local("string"),
            },
        });
        doc.push_decl(TypeDecl {
            name: "First".to_string(),
            kind: DeclKind::Interface { fields: vec![] },
        });

        let names: Vec<&str> = doc.decls().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_type_ref_constructors() {
        assert_eq!(TypeRef::local("string").namespace_alias, None);
        assert_eq!(
            TypeRef::qualified("b", "Person").namespace_alias.as_deref(),
            Some("b")
        );
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let mut ns = Namespace::new("urn:a");
        ns.add_used_import("b", "urn:b");
        let mut doc = Document::new(ns);
        doc.push_decl(TypeDecl {
            name: "Doc".to_string(),
            kind: DeclKind::Interface {
                fields: vec![Field::optional("author", TypeRef::qualified("b", "Person"))],
            },
        });

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
