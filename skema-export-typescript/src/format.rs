//! TypeScript declaration rendering.

use skema_export::{ExportContext, ExportFormat};
use skema_model::{DeclKind, TypeDecl, TypeRef};

const INDENT: &str = "  ";

/// TypeScript declaration file format.
///
/// Output names append `.d.ts` to the canonical namespace name; import
/// specifiers omit the extension, as resolved by the exporter core.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptFormat;

impl TypeScriptFormat {
    /// Create a new TypeScript format.
    pub fn new() -> Self {
        Self
    }
}

impl ExportFormat for TypeScriptFormat {
    fn out_name(&self, namespace_name: &str) -> String {
        format!("{namespace_name}.d.ts")
    }

    fn import_line(&self, alias: &str, relative_path: &str, _full_name: &str) -> String {
        format!("import * as {alias} from '{relative_path}';")
    }

    fn contents(&self, cx: &ExportContext<'_>) -> String {
        let mut out = String::new();

        let header = cx.header();
        if !header.is_empty() {
            out.push_str(&header.join("\n"));
            out.push_str("\n\n");
        }

        let decls: Vec<String> = cx.document().decls().iter().map(render_decl).collect();
        out.push_str(&decls.join("\n"));
        out
    }
}

fn render_decl(decl: &TypeDecl) -> String {
    match &decl.kind {
        DeclKind::Interface { fields } => {
            let mut out = format!("export interface {} {{\n", decl.name);
            for field in fields {
                let marker = if field.optional { "?" } else { "" };
                out.push_str(&format!(
                    "{INDENT}{}{marker}: {};\n",
                    field.name,
                    render_type_ref(&field.ty)
                ));
            }
            out.push_str("}\n");
            out
        }
        DeclKind::Alias { target } => {
            format!("export type {} = {};\n", decl.name, render_type_ref(target))
        }
    }
}

fn render_type_ref(ty: &TypeRef) -> String {
    match &ty.namespace_alias {
        Some(alias) => format!("{alias}.{}", ty.name),
        None => ty.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use skema_model::Field;

    use super::*;

    #[test]
    fn test_out_name_appends_declaration_suffix() {
        let format = TypeScriptFormat::new();
        assert_eq!(format.out_name("urn:a"), "urn:a.d.ts");
    }

    #[test]
    fn test_import_line_uses_star_import() {
        let format = TypeScriptFormat::new();
        assert_eq!(
            format.import_line("b", "./b", "urn:b"),
            "import * as b from './b';"
        );
    }

    #[test]
    fn test_render_interface() {
        let decl = TypeDecl {
            name: "Doc".to_string(),
            kind: DeclKind::Interface {
                fields: vec![
                    Field::required("title", TypeRef::local("string")),
                    Field::optional("author", TypeRef::qualified("b", "Person")),
                ],
            },
        };
        assert_eq!(
            render_decl(&decl),
            "export interface Doc {\n  title: string;\n  author?: b.Person;\n}\n"
        );
    }

    #[test]
    fn test_render_alias() {
        let decl = TypeDecl {
            name: "Title".to_string(),
            kind: DeclKind::Alias {
                target: TypeRef::local("string"),
            },
        };
        assert_eq!(render_decl(&decl), "export type Title = string;\n");
    }
}
