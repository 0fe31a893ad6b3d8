//! Lowering of catalog tables to class descriptors.

use crate::error::EmitError;
use crate::ir::{
    Binding, Class, Constructor, Decode, Header, KeyPredicate, Member, Method, Param, Pass,
    RowValue, Unit, ValueExpr,
};
use crate::naming::class_name;
use crate::EmitOptions;
use ormgen_core::{representation_type, FieldDefinition, LogicalType, SchemaFile, TableDefinition};

/// Lower one schema file to a unit.
pub fn lower_unit(file: &SchemaFile, options: &EmitOptions) -> Result<Unit, EmitError> {
    let classes = file
        .tables
        .iter()
        .map(|table| {
            if table.has_primary_key() {
                Ok(lower_class(table, options))
            } else {
                Err(EmitError::MissingPrimaryKey {
                    file: file.name.clone(),
                    table: table.name.clone(),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Unit {
        file_name: options.file_name(&file.name),
        header: Header {
            generator: options.generator.clone(),
            version: options.version.clone(),
            source: file.path.to_string_lossy().replace('\\', "/"),
        },
        include: options.include.clone(),
        namespace: options.namespace.clone(),
        classes,
    })
}

/// Lower one table to a class. The table must declare a primary key.
pub fn lower_class(table: &TableDefinition, options: &EmitOptions) -> Class {
    let members = table.fields().map(lower_member).collect();

    let constructor = if table.fields.is_empty() {
        None
    } else {
        Some(Constructor {
            params: table
                .fields()
                .map(|f| Param {
                    name: f.name.clone(),
                    ty: representation_type(f.ty).to_string(),
                    pass: if f.ty.is_buffer() {
                        Pass::Move
                    } else {
                        Pass::Copy
                    },
                })
                .collect(),
        })
    };

    let predicate = KeyPredicate {
        fields: table.primary_key.clone(),
    };

    let compare = table
        .key_fields()
        .map(|f| RowValue {
            member: f.name.clone(),
            column: f.ordinal,
            decode: compare_decode(f.ty),
        })
        .collect();

    let read = table
        .fields()
        .map(|f| RowValue {
            member: f.name.clone(),
            column: f.ordinal,
            decode: read_decode(f.ty),
        })
        .collect();

    let updates = table.value_fields().map(binding).collect();
    let inserts = table.fields().map(binding).collect();

    Class {
        name: class_name(&table.name, &options.class_prefix),
        base: options.base_class.clone(),
        table: table.name.clone(),
        comment: table.comment.clone(),
        members,
        constructor,
        methods: vec![
            Method::TableName {
                table: table.name.clone(),
            },
            Method::ComparePrimaryKey { terms: compare },
            Method::Query {
                predicate: predicate.clone(),
            },
            Method::Read { values: read },
            Method::Upsert {
                predicate: predicate.clone(),
                updates,
                inserts,
            },
            Method::Remove { predicate },
        ],
    }
}

fn lower_member(field: &FieldDefinition) -> Member {
    Member {
        name: field.name.clone(),
        ty: representation_type(field.ty).to_string(),
        init: initializer(field),
        comment: field.comment.clone(),
    }
}

fn binding(field: &FieldDefinition) -> Binding {
    let value = if field.ty == LogicalType::Blob {
        ValueExpr::Blob(field.name.clone())
    } else {
        ValueExpr::Member(field.name.clone())
    };
    Binding {
        column: field.name.clone(),
        value,
    }
}

fn read_decode(ty: LogicalType) -> Decode {
    if ty == LogicalType::Blob {
        Decode::Blob
    } else {
        compare_decode(ty)
    }
}

// Key comparison needs an expression, so blob keys are read as the buffer type.
fn compare_decode(ty: LogicalType) -> Decode {
    if ty.is_narrow() {
        Decode::Narrow {
            wide: representation_type(ty.decode_type()).to_string(),
            narrow: representation_type(ty).to_string(),
        }
    } else {
        Decode::Direct {
            ty: representation_type(ty).to_string(),
        }
    }
}

/// Member initialiser for a field's default token.
///
/// Returns `None` for types whose zero value is the default-constructed one.
pub fn initializer(field: &FieldDefinition) -> Option<String> {
    let token = field
        .default
        .as_deref()
        .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("NULL"));

    match field.ty {
        LogicalType::Bool => {
            let truthy = token
                .map(sql_unquote)
                .is_some_and(|t| t.eq_ignore_ascii_case("TRUE") || t == "1");
            Some(truthy.to_string())
        }
        ty if ty.is_numeric() => {
            let value = token.map(sql_unquote).filter(|t| !t.is_empty());
            Some(value.unwrap_or_else(|| "0".to_string()))
        }
        ty if ty.is_character() => token
            .map(sql_unquote)
            .filter(|t| !t.is_empty())
            .map(|t| cpp_string_literal(&t)),
        _ => None,
    }
}

/// Strip SQL quotes from a default token and resolve its escapes.
fn sql_unquote(token: &str) -> String {
    let quote = match token.chars().next() {
        Some(q @ ('\'' | '"')) if token.len() >= 2 && token.ends_with(q) => q,
        _ => return token.to_string(),
    };

    let inner = &token[1..token.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('0') => out.push('\0'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            },
            c if c == quote && chars.peek() == Some(&quote) => {
                chars.next();
                out.push(quote);
            }
            c => out.push(c),
        }
    }
    out
}

fn cpp_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
