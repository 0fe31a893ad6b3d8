//! C++ rendering of lowered units.

use crate::ir::{
    Binding, Class, Constructor, Decode, KeyPredicate, Member, Method, Pass, RowValue, Unit,
    ValueExpr,
};

const INDENT: &str = "    ";

/// Line writer tracking indentation.
struct Writer {
    out: String,
    depth: usize,
}

impl Writer {
    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Render a unit to C++ source text.
pub fn render_unit(unit: &Unit) -> String {
    let mut w = Writer::new();

    w.line("/**");
    w.line(" * Object Relational Mapping class definitions");
    w.line(format!(
        " * This file is generated by {}. Do not edit!",
        unit.header.generator
    ));
    w.line(format!(" * Generator version: v{}", unit.header.version));
    w.line(format!(" * Source file: {}", unit.header.source));
    w.line(" */");
    w.blank();
    w.line("#pragma once");
    w.blank();
    w.line(format!("#include \"{}\"", unit.include));
    w.blank();
    w.line(format!("namespace {} {{", unit.namespace));
    w.blank();

    w.indent();
    for class in &unit.classes {
        render_class(&mut w, class);
        w.blank();
    }
    w.dedent();

    w.line(format!("}} // namespace {}", unit.namespace));
    w.out
}

fn render_class(w: &mut Writer, class: &Class) {
    w.line(format!("// table: {}", class.table));
    if let Some(comment) = &class.comment {
        w.line(format!("// {}", single_line(comment)));
    }
    w.line(format!(
        "class {} final : public {} {{",
        class.name, class.base
    ));
    w.line("public:");
    w.indent();

    for member in &class.members {
        render_member(w, member);
    }
    if !class.members.is_empty() {
        w.blank();
    }

    w.line(format!("{}() = default;", class.name));
    if let Some(constructor) = &class.constructor {
        w.blank();
        render_constructor(w, &class.name, constructor);
    }

    for method in &class.methods {
        w.blank();
        render_method(w, method);
    }

    w.dedent();
    w.line(format!("}}; // {}", class.name));
}

fn render_member(w: &mut Writer, member: &Member) {
    let mut text = match &member.init {
        Some(init) => format!("{} {} = {};", member.ty, member.name, init),
        None => format!("{} {};", member.ty, member.name),
    };
    if let Some(comment) = &member.comment {
        text.push_str(" // ");
        text.push_str(&single_line(comment));
    }
    w.line(text);
}

fn render_constructor(w: &mut Writer, class: &str, constructor: &Constructor) {
    w.line(format!("{}(", class));
    w.indent();
    let last = constructor.params.len().saturating_sub(1);
    for (i, param) in constructor.params.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        match param.pass {
            Pass::Copy => w.line(format!("const {} {}{}", param.ty, param.name, sep)),
            Pass::Move => w.line(format!("{} {}{}", param.ty, param.name, sep)),
        }
    }
    w.dedent();

    for (i, param) in constructor.params.iter().enumerate() {
        let init = match param.pass {
            Pass::Copy => format!("{}({})", param.name, param.name),
            Pass::Move => format!("{}(std::move({}))", param.name, param.name),
        };
        let lead = if i == 0 { ") : " } else { "    " };
        let tail = if i == last { " {}" } else { "," };
        w.line(format!("{}{}{}", lead, init, tail));
    }
}

fn render_method(w: &mut Writer, method: &Method) {
    match method {
        Method::TableName { table } => {
            w.line("[[nodiscard]] constexpr const char* getTableName() const override {");
            w.indent();
            w.line(format!("return \"{}\";", table));
            w.dedent();
            w.line("}");
        }
        Method::ComparePrimaryKey { terms } => {
            w.line("[[nodiscard]] bool comparePrimaryKey(mysqlx::Row &row) const override {");
            w.indent();
            let conjunction = terms
                .iter()
                .map(|t| format!("{} == {}", t.member, decode_expr(t)))
                .collect::<Vec<_>>()
                .join(" && ");
            w.line(format!("return {};", conjunction));
            w.dedent();
            w.line("}");
        }
        Method::Query { predicate } => {
            w.line("mysqlx::RowResult query(mysqlx::Table &table) override {");
            w.indent();
            w.line("return table.select()");
            w.indent();
            w.line(where_clause(predicate));
            w.line(".execute();");
            w.dedent();
            w.dedent();
            w.line("}");
        }
        Method::Read { values } => {
            w.line("void read(mysqlx::Row &row) override {");
            w.indent();
            w.line("if (row.isNull())");
            w.indent();
            w.line("return;");
            w.dedent();
            if !values.is_empty() {
                w.blank();
            }
            for value in values {
                match value.decode {
                    Decode::Blob => w.line(format!(
                        "DB_CAST_FROM_BLOB({}, row[{}]);",
                        value.member, value.column
                    )),
                    _ => w.line(format!("{} = {};", value.member, decode_expr(value))),
                }
            }
            w.dedent();
            w.line("}");
        }
        Method::Upsert {
            predicate,
            updates,
            inserts,
        } => render_upsert(w, predicate, updates, inserts),
        Method::Remove { predicate } => {
            w.line("void remove(mysqlx::Table &table) override {");
            w.indent();
            w.line("table.remove()");
            w.indent();
            w.line(where_clause(predicate));
            w.line(".execute();");
            w.dedent();
            w.dedent();
            w.line("}");
        }
    }
}

fn render_upsert(
    w: &mut Writer,
    predicate: &KeyPredicate,
    updates: &[Binding],
    inserts: &[Binding],
) {
    w.line("void write(mysqlx::Table &table) override {");
    w.indent();

    if updates.is_empty() {
        render_insert(w, inserts);
    } else {
        w.line("mysqlx::RowResult result = query(table);");
        w.blank();
        w.line("if (const mysqlx::Row row = result.fetchOne(); !row.isNull()) {");
        w.indent();
        w.line("table.update()");
        w.indent();
        for update in updates {
            w.line(format!(
                ".set(\"{}\", {})",
                update.column,
                value_expr(&update.value)
            ));
        }
        w.line(where_clause(predicate));
        w.line(".execute();");
        w.dedent();
        w.dedent();
        w.line("} else {");
        w.indent();
        render_insert(w, inserts);
        w.dedent();
        w.line("}");
    }

    w.dedent();
    w.line("}");
}

fn render_insert(w: &mut Writer, inserts: &[Binding]) {
    let columns = inserts
        .iter()
        .map(|b| format!("\"{}\"", b.column))
        .collect::<Vec<_>>()
        .join(", ");
    let values = inserts
        .iter()
        .map(|b| value_expr(&b.value))
        .collect::<Vec<_>>()
        .join(", ");

    w.line(format!("table.insert({})", columns));
    w.indent();
    w.line(format!(".values({})", values));
    w.line(".execute();");
    w.dedent();
}

fn where_clause(predicate: &KeyPredicate) -> String {
    let condition = predicate
        .fields
        .iter()
        .map(|k| format!("{} = :{}", k, k))
        .collect::<Vec<_>>()
        .join(" AND ");
    let binds: String = predicate
        .fields
        .iter()
        .map(|k| format!(".bind(\"{}\", {})", k, k))
        .collect();
    format!(".where(\"{}\"){}", condition, binds)
}

fn decode_expr(value: &RowValue) -> String {
    match &value.decode {
        Decode::Direct { ty } => format!("row[{}].get<{}>()", value.column, ty),
        Decode::Narrow { wide, narrow } => format!(
            "static_cast<{}>(row[{}].get<{}>())",
            narrow, value.column, wide
        ),
        Decode::Blob => format!("row[{}]", value.column),
    }
}

fn value_expr(value: &ValueExpr) -> String {
    match value {
        ValueExpr::Member(name) => name.clone(),
        ValueExpr::Blob(name) => format!("DB_CAST_TO_BLOB({})", name),
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
