//! Line-oriented parser for CREATE TABLE blocks.
//!
//! The parser walks the source line by line. A table opened by a
//! `CREATE TABLE` line stays open after its closing `)` line and is committed
//! when the next table starts or the source ends; committing claims its name
//! in the run's [`TableNames`].

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{tokenize, unquote, SpannedToken, Token};
use crate::span::Span;
use ormgen_core::{mapping, FieldDefinition, TableDefinition, TableNames};

/// Parser state between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any table block.
    Idle,
    /// Between a `CREATE TABLE` line and its closing line.
    InTable,
}

/// What a line is, judged by how it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    TableStart,
    Field,
    PrimaryKey,
    Close,
    Other,
}

/// A table that has been started but not yet committed.
struct OpenTable<'source> {
    table: TableDefinition,
    header: Span,
    lines: Vec<&'source str>,
}

/// Parser for one schema source.
pub struct Parser<'source, 'names> {
    source: &'source str,
    names: &'names mut TableNames,
    state: State,
    open: Option<OpenTable<'source>>,
    tables: Vec<TableDefinition>,
}

impl<'source, 'names> Parser<'source, 'names> {
    /// Create a parser that claims table names in `names`.
    pub fn new(source: &'source str, names: &'names mut TableNames) -> Self {
        Self {
            source,
            names,
            state: State::Idle,
            open: None,
            tables: Vec::new(),
        }
    }

    /// Parse every table in the source.
    pub fn parse_tables(mut self) -> Result<Vec<TableDefinition>, ParseError> {
        let source = self.source;
        let body = source.strip_prefix('\u{feff}').unwrap_or(source);
        let mut offset = source.len() - body.len();
        for raw in body.split_inclusive('\n') {
            let trimmed = raw.trim();
            let indent = raw.len() - raw.trim_start().len();
            self.parse_line(trimmed, offset + indent)?;
            offset += raw.len();
        }

        self.commit()?;
        Ok(self.tables)
    }

    fn parse_line(&mut self, line: &'source str, offset: usize) -> Result<(), ParseError> {
        if line.is_empty() {
            return Ok(());
        }

        match classify(line) {
            LineKind::TableStart => self.parse_table_start(line, offset),
            LineKind::Field => self.parse_field(line, offset),
            LineKind::PrimaryKey => self.parse_primary_key(line, offset),
            LineKind::Close => self.parse_close(line, offset),
            LineKind::Other => {
                if self.state == State::InTable {
                    self.record(line);
                }
                Ok(())
            }
        }
    }

    /// `CREATE TABLE [IF NOT EXISTS] `name` (`
    fn parse_table_start(&mut self, line: &'source str, offset: usize) -> Result<(), ParseError> {
        self.commit()?;

        let span = Span::new(offset, offset + line.len());
        let tokens = lex_line(line, offset, ParseErrorKind::MalformedTableHeader)?;

        // Skip CREATE TABLE and an optional IF NOT EXISTS.
        let mut rest = &tokens[2..];
        if rest.len() >= 3
            && rest[0].token.is_keyword("IF")
            && rest[1].token.is_keyword("NOT")
            && rest[2].token.is_keyword("EXISTS")
        {
            rest = &rest[3..];
        }

        // A schema-qualified name keeps only the table part.
        let mut name_token = rest.first();
        if rest.get(1).is_some_and(|t| t.token == Token::Dot) {
            name_token = rest.get(2);
        }

        let name = table_name(name_token).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::MalformedTableHeader,
                "expected table name after CREATE TABLE",
                span,
            )
            .with_hint("write the table name between backticks: CREATE TABLE `name` (")
        })?;

        self.open = Some(OpenTable {
            table: TableDefinition::new(name),
            header: span,
            lines: vec![line],
        });
        self.state = State::InTable;
        Ok(())
    }

    /// `` `name` TYPE [UNSIGNED] [NOT NULL] [DEFAULT v] [COMMENT 'c'], ``
    fn parse_field(&mut self, line: &'source str, offset: usize) -> Result<(), ParseError> {
        let span = Span::new(offset, offset + line.len());
        if self.state != State::InTable {
            return Err(ParseError::new(
                ParseErrorKind::MalformedFieldLine,
                format!("field declared outside of a table block: {}", line),
                span,
            ));
        }

        let tokens = lex_line(line, offset, ParseErrorKind::MalformedFieldLine)?;
        let malformed = |message: &str| {
            ParseError::new(
                ParseErrorKind::MalformedFieldLine,
                format!("{}: {}", message, line),
                span,
            )
        };

        let name = match tokens.first().map(|t| &t.token) {
            Some(Token::Quoted(name)) if !name.is_empty() => name.clone(),
            _ => return Err(malformed("expected field name")),
        };

        let (type_token, type_span, mut pos) = match tokens.get(1) {
            Some(SpannedToken {
                token: Token::Word(keyword),
                span,
            }) => read_type(keyword, *span, &tokens, 2).ok_or_else(|| {
                malformed("unterminated type arguments")
            })?,
            _ => return Err(malformed("expected field type")),
        };

        let mut ty = mapping::logical_type(&type_token)
            .map_err(|e| ParseError::from_core(e, type_span))?;

        if let Some(tok) = tokens.get(pos) {
            if tok.token.is_keyword("UNSIGNED") {
                ty = mapping::unsigned_of(ty).map_err(|e| ParseError::from_core(e, tok.span))?;
                pos += 1;
            }
        }

        let mut field = FieldDefinition::new(name, ty);

        while pos < tokens.len() {
            let tok = &tokens[pos];
            if tok.token.is_keyword("DEFAULT") {
                let value = match tokens.get(pos + 1).map(|t| &t.token) {
                    Some(Token::Str(s) | Token::Word(s) | Token::Number(s)) => s.clone(),
                    _ => return Err(malformed("expected value after DEFAULT")),
                };
                field.default = Some(value);
                pos += 2;
            } else if tok.token.is_keyword("COMMENT") {
                let comment = match tokens.get(pos + 1).map(|t| &t.token) {
                    Some(Token::Str(s)) => unquote(s),
                    _ => return Err(malformed("expected quoted text after COMMENT")),
                };
                field.comment = Some(comment);
                pos += 2;
            } else if tok.token.is_keyword("NOT")
                && tokens.get(pos + 1).is_some_and(|t| t.token.is_keyword("NULL"))
            {
                field.nullable = false;
                pos += 2;
            } else {
                pos += 1;
            }
        }

        let open = self.open_table()?;
        open.table
            .add_field(field)
            .map_err(|e| ParseError::from_core(e, span))?;
        open.lines.push(line);
        Ok(())
    }

    /// `PRIMARY KEY (`a`, `b`)`
    fn parse_primary_key(&mut self, line: &'source str, offset: usize) -> Result<(), ParseError> {
        let span = Span::new(offset, offset + line.len());
        if self.state != State::InTable {
            return Err(ParseError::new(
                ParseErrorKind::MalformedPrimaryKey,
                "PRIMARY KEY outside of a table block",
                span,
            ));
        }

        let tokens = lex_line(line, offset, ParseErrorKind::MalformedPrimaryKey)?;
        let names = key_list(&tokens[2..]).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::MalformedPrimaryKey,
                format!("expected parenthesised field list: {}", line),
                span,
            )
            .with_hint("PRIMARY KEY (`id`)")
        })?;

        let open = self.open_table()?;
        for (name, name_span) in names {
            open.table
                .mark_primary_key(&name)
                .map_err(|e| ParseError::from_core(e, name_span))?;
        }
        open.lines.push(line);
        Ok(())
    }

    /// `) ENGINE=InnoDB COMMENT='...';`
    fn parse_close(&mut self, line: &'source str, offset: usize) -> Result<(), ParseError> {
        if self.state != State::InTable {
            // Closes some other statement.
            return Ok(());
        }

        let tokens = lex_line(line, offset, ParseErrorKind::MalformedLine)?;
        let mut comment = None;
        let mut pos = 1;
        while pos < tokens.len() {
            if tokens[pos].token.is_keyword("COMMENT") {
                let mut value = pos + 1;
                if tokens.get(value).map(|t| &t.token) == Some(&Token::Eq) {
                    value += 1;
                }
                match tokens.get(value).map(|t| &t.token) {
                    Some(Token::Str(s)) => comment = Some(unquote(s)),
                    _ => {
                        return Err(ParseError::new(
                            ParseErrorKind::MalformedLine,
                            "expected quoted text after COMMENT",
                            tokens[pos].span,
                        ))
                    }
                }
                pos = value + 1;
            } else {
                pos += 1;
            }
        }

        let open = self.open_table()?;
        if comment.is_some() {
            open.table.comment = comment;
        }
        open.lines.push(line);
        self.state = State::Idle;
        Ok(())
    }

    fn record(&mut self, line: &'source str) {
        if let Some(open) = self.open.as_mut() {
            open.lines.push(line);
        }
    }

    fn open_table(&mut self) -> Result<&mut OpenTable<'source>, ParseError> {
        let end = self.source.len();
        self.open.as_mut().ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::MalformedLine,
                "no table is open",
                Span::new(end, end),
            )
        })
    }

    /// Commit the open table, if any, claiming its name.
    fn commit(&mut self) -> Result<(), ParseError> {
        let Some(open) = self.open.take() else {
            return Ok(());
        };
        self.state = State::Idle;

        self.names
            .claim(&open.table.name)
            .map_err(|e| ParseError::from_core(e, open.header))?;

        let mut table = open.table;
        table.source = open.lines.join("\n");
        self.tables.push(table);
        Ok(())
    }
}

/// Classify a trimmed, non-empty line.
fn classify(line: &str) -> LineKind {
    if line.starts_with('`') {
        LineKind::Field
    } else if line.starts_with(')') {
        LineKind::Close
    } else if starts_with_keywords(line, &["CREATE", "TABLE"]) {
        LineKind::TableStart
    } else if starts_with_keywords(line, &["PRIMARY", "KEY"]) {
        LineKind::PrimaryKey
    } else {
        LineKind::Other
    }
}

/// Check if a line starts with the given keywords, ignoring case.
fn starts_with_keywords(line: &str, keywords: &[&str]) -> bool {
    let mut rest = line;
    for keyword in keywords {
        rest = rest.trim_start();
        let Some(head) = rest.get(..keyword.len()) else {
            return false;
        };
        if !head.eq_ignore_ascii_case(keyword) {
            return false;
        }
        rest = &rest[keyword.len()..];
        if rest
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return false;
        }
    }
    true
}

/// Lex a line, shifting spans to source offsets.
fn lex_line(
    line: &str,
    offset: usize,
    kind: ParseErrorKind,
) -> Result<Vec<SpannedToken>, ParseError> {
    let mut tokens = tokenize(line).map_err(|span| {
        let span = span.offset(offset);
        ParseError::new(
            kind,
            format!("unexpected character in line: {}", line),
            span,
        )
    })?;
    for tok in &mut tokens {
        tok.span = tok.span.offset(offset);
    }
    Ok(tokens)
}

fn table_name(token: Option<&SpannedToken>) -> Option<String> {
    match token.map(|t| &t.token) {
        Some(Token::Quoted(name)) if !name.is_empty() => Some(name.clone()),
        Some(Token::Word(name)) => Some(name.clone()),
        _ => None,
    }
}

/// Read a type keyword with its optional parenthesised arguments starting at
/// `pos`, re-joined without whitespace (`VARCHAR ( 255 )` -> `VARCHAR(255)`).
///
/// Returns the token text, its span and the position after it.
fn read_type(
    keyword: &str,
    span: Span,
    tokens: &[SpannedToken],
    pos: usize,
) -> Option<(String, Span, usize)> {
    if tokens.get(pos).map(|t| &t.token) != Some(&Token::LParen) {
        return Some((keyword.to_string(), span, pos));
    }

    let mut text = format!("{}(", keyword);
    let mut pos = pos + 1;
    loop {
        let tok = tokens.get(pos)?;
        if tok.token == Token::RParen {
            text.push(')');
            return Some((text, span.merge(tok.span), pos + 1));
        }
        text.push_str(&tok.token.text());
        pos += 1;
    }
}

/// Parse `( name [, name]* )` into names with their spans.
fn key_list(tokens: &[SpannedToken]) -> Option<Vec<(String, Span)>> {
    let mut iter = tokens.iter();
    if iter.next()?.token != Token::LParen {
        return None;
    }

    let mut names = Vec::new();
    loop {
        let tok = iter.next()?;
        match &tok.token {
            Token::Quoted(name) | Token::Word(name) if !name.is_empty() => {
                names.push((name.clone(), tok.span));
            }
            _ => return None,
        }
        match iter.next()?.token {
            Token::Comma => continue,
            Token::RParen => return Some(names),
            _ => return None,
        }
    }
}

/// Parse a source, claiming table names in a fresh registry.
pub fn parse(source: &str) -> Result<Vec<TableDefinition>, ParseError> {
    let mut names = TableNames::new();
    Parser::new(source, &mut names).parse_tables()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ormgen_core::LogicalType;
    use pretty_assertions::assert_eq;

    const PLAYER: &str = r#"
-- players and their items
CREATE TABLE `player` (
  `id` BIGINT NOT NULL COMMENT 'player id',
  `name` VARCHAR(255) NOT NULL DEFAULT '' COMMENT 'display name',
  `level` TINYINT UNSIGNED DEFAULT 1,
  `online` BOOLEAN DEFAULT TRUE,
  `profile` TEXT,
  `avatar` BLOB,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='player base data';

CREATE TABLE IF NOT EXISTS `player_item` (
  `player` BIGINT NOT NULL,
  `slot` SMALLINT NOT NULL,
  `item` INT UNSIGNED NOT NULL,
  `count` INT DEFAULT 0,
  PRIMARY KEY (`slot`, `player`)
);
"#;

    #[test]
    fn test_parse_two_tables() {
        let tables = parse(PLAYER).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "player");
        assert_eq!(tables[1].name, "player_item");
    }

    #[test]
    fn test_field_order_and_types() {
        let tables = parse(PLAYER).unwrap();
        let player = &tables[0];

        let fields: Vec<_> = player
            .fields()
            .map(|f| (f.name.as_str(), f.ty, f.ordinal))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("id", LogicalType::Int64, 0),
                ("name", LogicalType::String, 1),
                ("level", LogicalType::UInt8, 2),
                ("online", LogicalType::Bool, 3),
                ("profile", LogicalType::Text, 4),
                ("avatar", LogicalType::Blob, 5),
            ]
        );
        assert_eq!(tables[1].field("item").unwrap().ty, LogicalType::UInt32);
    }

    #[test]
    fn test_defaults_and_comments() {
        let tables = parse(PLAYER).unwrap();
        let player = &tables[0];

        let name = player.field("name").unwrap();
        assert_eq!(name.default.as_deref(), Some("''"));
        assert_eq!(name.comment.as_deref(), Some("display name"));

        assert_eq!(player.field("level").unwrap().default.as_deref(), Some("1"));
        assert_eq!(
            player.field("online").unwrap().default.as_deref(),
            Some("TRUE")
        );
        assert_eq!(player.field("profile").unwrap().default, None);
        assert_eq!(player.comment.as_deref(), Some("player base data"));
        assert_eq!(tables[1].comment, None);
    }

    #[test]
    fn test_doubled_quotes_keep_full_text() {
        let source = "CREATE TABLE `player` (\n\
                      `n` TEXT DEFAULT 'it''s' COMMENT 'player''s name',\n\
                      `id` INT,\n\
                      PRIMARY KEY (`id`)\n\
                      ) COMMENT='bob''s table';";
        let tables = parse(source).unwrap();
        let n = tables[0].field("n").unwrap();
        assert_eq!(n.default.as_deref(), Some("'it''s'"));
        assert_eq!(n.comment.as_deref(), Some("player's name"));
        assert_eq!(tables[0].comment.as_deref(), Some("bob's table"));
    }

    #[test]
    fn test_exponent_default() {
        let tables = parse("CREATE TABLE `t` (\n`d` DOUBLE DEFAULT 1e5,\n`f` FLOAT DEFAULT -2.5E-3\n);")
            .unwrap();
        assert_eq!(tables[0].field("d").unwrap().default.as_deref(), Some("1e5"));
        assert_eq!(
            tables[0].field("f").unwrap().default.as_deref(),
            Some("-2.5E-3")
        );
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let tables = parse("\u{feff}CREATE TABLE `t` (\n`d` INT,\nPRIMARY KEY (`d`)\n);").unwrap();
        assert_eq!(tables[0].name, "t");
        assert_eq!(tables[0].primary_key, ["d"]);

        let source = "\u{feff}CREATE TABLE `t` (\n`d` DATE\n);";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownFieldType);
        assert_eq!(&source[err.span.start..err.span.end], "DATE");
        assert_eq!(err.line_col(source), (2, 5));
    }

    #[test]
    fn test_nullability() {
        let tables = parse(PLAYER).unwrap();
        let player = &tables[0];
        assert!(!player.field("id").unwrap().nullable);
        assert!(!player.field("name").unwrap().nullable);
        assert!(player.field("level").unwrap().nullable);
        assert!(player.field("avatar").unwrap().nullable);
    }

    #[test]
    fn test_not_null_position_does_not_matter() {
        let source = "CREATE TABLE `t` (\n\
                      `a` INT DEFAULT 0 COMMENT 'x' NOT NULL,\n\
                      `b` INT NOT NULL DEFAULT 0,\n\
                      `c` INT COMMENT 'not null',\n\
                      PRIMARY KEY (`a`)\n\
                      );";
        let tables = parse(source).unwrap();
        let t = &tables[0];
        assert!(!t.field("a").unwrap().nullable);
        assert!(!t.field("b").unwrap().nullable);
        assert!(t.field("c").unwrap().nullable);
        assert_eq!(t.field("a").unwrap().default.as_deref(), Some("0"));
        assert_eq!(t.field("c").unwrap().comment.as_deref(), Some("not null"));
    }

    #[test]
    fn test_primary_key_clause_order() {
        let tables = parse(PLAYER).unwrap();
        let item = &tables[1];
        assert_eq!(item.primary_key, ["slot", "player"]);
        assert!(item.field("slot").unwrap().primary_key);
        assert!(item.field("player").unwrap().primary_key);
        assert!(!item.field("count").unwrap().primary_key);
    }

    #[test]
    fn test_source_text() {
        let tables = parse(PLAYER).unwrap();
        let item = &tables[1];
        assert!(item
            .source
            .starts_with("CREATE TABLE IF NOT EXISTS `player_item` ("));
        assert!(item.source.ends_with(");"));
        assert_eq!(item.source.lines().count(), 7);
    }

    #[test]
    fn test_keywords_ignore_case() {
        let source = "create table `lower` (\n\
                      `id` int unsigned not null default 3 comment 'lower case',\n\
                      primary key (`id`)\n\
                      ) comment 'quiet';";
        let tables = parse(source).unwrap();
        let id = tables[0].field("id").unwrap();
        assert_eq!(id.ty, LogicalType::UInt32);
        assert!(!id.nullable);
        assert_eq!(id.default.as_deref(), Some("3"));
        assert_eq!(tables[0].comment.as_deref(), Some("quiet"));
    }

    #[test]
    fn test_secondary_keys_are_ignored() {
        let source = "CREATE TABLE `mail` (\n\
                      `id` BIGINT NOT NULL,\n\
                      `owner` BIGINT NOT NULL,\n\
                      PRIMARY KEY (`id`),\n\
                      KEY `idx_owner` (`owner`)\n\
                      );";
        let tables = parse(source).unwrap();
        assert_eq!(tables[0].fields.len(), 2);
        assert_eq!(tables[0].primary_key, ["id"]);
        assert!(tables[0].source.contains("KEY `idx_owner`"));
    }

    #[test]
    fn test_empty_source() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("-- nothing here\nDROP TABLE IF EXISTS `x`;\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unclosed_table_is_committed_at_end() {
        let tables = parse("CREATE TABLE `t` (\n`id` INT,\nPRIMARY KEY (`id`)").unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].primary_key, ["id"]);
    }

    #[test]
    fn test_duplicate_table_in_one_file() {
        let source = "CREATE TABLE `t` (\n`id` INT\n);\nCREATE TABLE `t` (\n`id` INT\n);";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DuplicateTableName);
        assert!(err.message.contains("'t'"));
        // Reported at the second declaration.
        assert_eq!(err.line_col(source).0, 4);
    }

    #[test]
    fn test_duplicate_table_across_sources() {
        let mut names = TableNames::new();
        Parser::new("CREATE TABLE `shared` (\n`id` INT\n);", &mut names)
            .parse_tables()
            .unwrap();
        let err = Parser::new("CREATE TABLE `shared` (\n`id` INT\n);", &mut names)
            .parse_tables()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DuplicateTableName);
    }

    #[test]
    fn test_unknown_field_type() {
        let source = "CREATE TABLE `t` (\n  `at` DATETIME NOT NULL\n);";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownFieldType);
        assert!(err.message.contains("DATETIME"));
        assert_eq!(err.line_col(source), (2, 8));
    }

    #[test]
    fn test_unsupported_varchar_length() {
        let err = parse("CREATE TABLE `t` (\n`n` VARCHAR(64)\n);").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownFieldType);
        assert!(err.message.contains("VARCHAR(64)"));
    }

    #[test]
    fn test_unsigned_non_integer() {
        let err = parse("CREATE TABLE `t` (\n`f` FLOAT UNSIGNED\n);").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnsignedNonInteger);
    }

    #[test]
    fn test_malformed_field_lines() {
        for line in ["`id`,", "`id`", "`id` 42", "`` INT", "`id` VARCHAR(255"] {
            let source = format!("CREATE TABLE `t` (\n{}\n);", line);
            let err = parse(&source).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::MalformedFieldLine, "{}", line);
        }

        let err = parse("CREATE TABLE `t` (\n`a` INT DEFAULT\n);").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedFieldLine);
    }

    #[test]
    fn test_field_outside_table() {
        let err = parse("`id` INT,").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedFieldLine);

        let err = parse("CREATE TABLE `t` (\n`id` INT\n);\n`late` INT").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedFieldLine);
    }

    #[test]
    fn test_unknown_primary_key_field() {
        let err = parse("CREATE TABLE `t` (\n`id` INT,\nPRIMARY KEY (`uid`)\n);").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownPrimaryKeyField);
        assert!(err.message.contains("uid"));
    }

    #[test]
    fn test_malformed_primary_key() {
        let err = parse("CREATE TABLE `t` (\n`id` INT,\nPRIMARY KEY `id`\n);").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedPrimaryKey);
    }

    #[test]
    fn test_duplicate_field() {
        let err = parse("CREATE TABLE `t` (\n`id` INT,\n`id` BIGINT\n);").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DuplicateField);
    }

    #[test]
    fn test_malformed_table_header() {
        let err = parse("CREATE TABLE (\n`id` INT\n);").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedTableHeader);
    }

    #[test]
    fn test_schema_qualified_name() {
        let tables = parse("CREATE TABLE `game`.`bag` (\n`id` INT\n);").unwrap();
        assert_eq!(tables[0].name, "bag");
    }

    #[test]
    fn test_starts_with_keywords() {
        assert!(starts_with_keywords("CREATE TABLE `t`", &["CREATE", "TABLE"]));
        assert!(starts_with_keywords("primary key(`id`)", &["PRIMARY", "KEY"]));
        assert!(!starts_with_keywords("CREATE TABLES", &["CREATE", "TABLE"]));
        assert!(!starts_with_keywords("CREATE", &["CREATE", "TABLE"]));
    }
}
