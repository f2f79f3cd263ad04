use crate::dataset::{parse_number, Attribute, AttributeKind, Dataset, Row, Value};
use crate::error::ParseError;
use std::str::Chars;

/// Parses ARFF text into a dataset. The class index is left unset, since the
/// format does not declare one. String, date and relational attributes are
/// rejected.
pub fn parse(text: &str) -> Result<Dataset, ParseError> {
    let mut relation = None;
    let mut attributes = Vec::new();
    let mut dataset: Option<Dataset> = None;

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if let Some(data) = dataset.as_mut() {
            let row = if line.starts_with('{') {
                parse_sparse_row(&data.attributes, line, line_no)?
            } else {
                parse_dense_row(&data.attributes, line, line_no)?
            };
            data.push_row(row)
                .map_err(|message| ParseError::new(line_no, message))?;
            continue;
        }

        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(end) => (&line[..end], &line[end..]),
            None => (line, ""),
        };
        match keyword.to_ascii_lowercase().as_str() {
            "@relation" => {
                let (name, _) = take_name(rest, line_no)?;
                relation = Some(name);
            }
            "@attribute" => {
                let attribute = parse_attribute(rest, line_no)?;
                if attributes.iter().any(|a: &Attribute| a.name == attribute.name) {
                    return Err(ParseError::new(
                        line_no,
                        format!("duplicate attribute {:?}", attribute.name),
                    ));
                }
                attributes.push(attribute);
            }
            "@data" => {
                if attributes.is_empty() {
                    return Err(ParseError::new(line_no, "no attributes declared"));
                }
                let relation = relation
                    .take()
                    .ok_or_else(|| ParseError::new(line_no, "missing @relation"))?;
                dataset = Some(Dataset::new(relation, std::mem::take(&mut attributes)));
            }
            _ => {
                return Err(ParseError::new(
                    line_no,
                    format!("expected @relation, @attribute or @data, found {:?}", keyword),
                ))
            }
        }
    }

    dataset.ok_or_else(|| ParseError::new(text.lines().count(), "missing @data section"))
}

fn parse_attribute(rest: &str, line: usize) -> Result<Attribute, ParseError> {
    let (name, kind) = take_name(rest, line)?;
    let kind = kind.trim();

    if let Some(body) = kind.strip_prefix('{') {
        let body = body
            .strip_suffix('}')
            .ok_or_else(|| ParseError::new(line, "unterminated nominal value list"))?;
        let mut labels: Vec<String> = Vec::new();
        for field in split_fields(body, line)? {
            if field.text.is_empty() && !field.quoted {
                return Err(ParseError::new(line, "empty nominal value"));
            }
            if labels.contains(&field.text) {
                return Err(ParseError::new(
                    line,
                    format!("duplicate nominal value {:?}", field.text),
                ));
            }
            labels.push(field.text);
        }
        return Ok(Attribute {
            name,
            kind: AttributeKind::Nominal(labels),
        });
    }

    let type_name = kind
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match type_name.as_str() {
        "numeric" | "real" | "integer" => Ok(Attribute::numeric(name)),
        "string" | "date" | "relational" => Err(ParseError::new(
            line,
            format!("unsupported attribute type {:?} for {:?}", type_name, name),
        )),
        "" => Err(ParseError::new(line, format!("missing type for {:?}", name))),
        other => Err(ParseError::new(
            line,
            format!("unknown attribute type {:?}", other),
        )),
    }
}

fn parse_dense_row(
    attributes: &[Attribute],
    line: &str,
    line_no: usize,
) -> Result<Row, ParseError> {
    let mut fields = split_fields(line, line_no)?;

    // Trailing instance weight, e.g. `sunny,85,{2}`.
    if fields.len() == attributes.len() + 1 {
        if let Some(last) = fields.last() {
            if !last.quoted && last.text.starts_with('{') && last.text.ends_with('}') {
                fields.pop();
            }
        }
    }

    if fields.len() != attributes.len() {
        return Err(ParseError::new(
            line_no,
            format!("expected {} values, found {}", attributes.len(), fields.len()),
        ));
    }

    attributes
        .iter()
        .zip(fields.iter())
        .map(|(attribute, field)| parse_cell(attribute, field, line_no))
        .collect()
}

fn parse_sparse_row(
    attributes: &[Attribute],
    line: &str,
    line_no: usize,
) -> Result<Row, ParseError> {
    let end = *unquoted_positions(line, '}', line_no)?
        .first()
        .ok_or_else(|| ParseError::new(line_no, "unterminated sparse row"))?;
    let body = &line[1..end];

    // Only an instance weight may follow, e.g. `{0 x, 2 5}, {3}`.
    let rest = line[end + 1..].trim();
    if !rest.is_empty() {
        let weight = rest.strip_prefix(',').map(str::trim).unwrap_or("");
        if !(weight.starts_with('{') && weight.ends_with('}')) {
            return Err(ParseError::new(
                line_no,
                format!("unexpected text after sparse row: {:?}", rest),
            ));
        }
    }

    let mut row: Row = attributes
        .iter()
        .map(|attribute| match attribute.kind {
            AttributeKind::Numeric => Value::Numeric(0.0),
            AttributeKind::Nominal(_) => Value::Nominal(0),
        })
        .collect();

    let mut start = 0;
    let mut ends = unquoted_positions(body, ',', line_no)?;
    ends.push(body.len());
    for end in ends {
        let entry = body[start..end].trim();
        start = end + 1;
        if entry.is_empty() {
            continue;
        }
        let (index, value) = entry.split_once(char::is_whitespace).ok_or_else(|| {
            ParseError::new(line_no, format!("malformed sparse entry {:?}", entry))
        })?;
        let index: usize = index
            .parse()
            .map_err(|_| ParseError::new(line_no, format!("bad sparse index {:?}", index)))?;
        let attribute = attributes.get(index).ok_or_else(|| {
            ParseError::new(line_no, format!("sparse index {} out of range", index))
        })?;
        let field = unquote(value.trim(), line_no)?;
        row[index] = parse_cell(attribute, &field, line_no)?;
    }

    Ok(row)
}

fn parse_cell(attribute: &Attribute, field: &Field, line: usize) -> Result<Value, ParseError> {
    if !field.quoted && field.text == "?" {
        return Ok(Value::Missing);
    }
    match &attribute.kind {
        AttributeKind::Numeric => parse_number(&field.text).map(Value::Numeric).ok_or_else(|| {
            ParseError::new(
                line,
                format!("{:?} is not a number for {:?}", field.text, attribute.name),
            )
        }),
        AttributeKind::Nominal(_) => attribute
            .value_index(&field.text)
            .map(Value::Nominal)
            .ok_or_else(|| {
                ParseError::new(
                    line,
                    format!(
                        "{:?} is not a declared value of {:?}",
                        field.text, attribute.name
                    ),
                )
            }),
    }
}

#[derive(Debug, PartialEq)]
struct Field {
    text: String,
    quoted: bool,
}

/// Splits on commas outside quotes, unquoting each field.
fn split_fields(s: &str, line: usize) -> Result<Vec<Field>, ParseError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = s.chars();

    loop {
        match chars.next() {
            None => {
                fields.push(finish_field(current, quoted));
                return Ok(fields);
            }
            Some(',') => {
                fields.push(finish_field(std::mem::take(&mut current), quoted));
                quoted = false;
            }
            Some(q @ ('\'' | '"')) if !quoted && current.trim().is_empty() => {
                current.clear();
                read_quoted(&mut chars, q, &mut current, line)?;
                quoted = true;
            }
            Some(c) if quoted => {
                if !c.is_whitespace() {
                    return Err(ParseError::new(line, "unexpected text after closing quote"));
                }
            }
            Some(c) => current.push(c),
        }
    }
}

fn finish_field(text: String, quoted: bool) -> Field {
    if quoted {
        Field { text, quoted }
    } else {
        Field {
            text: text.trim().to_string(),
            quoted,
        }
    }
}

fn unquote(s: &str, line: usize) -> Result<Field, ParseError> {
    let mut chars = s.chars();
    match chars.next() {
        Some(q @ ('\'' | '"')) => {
            let mut text = String::new();
            read_quoted(&mut chars, q, &mut text, line)?;
            if !chars.as_str().trim().is_empty() {
                return Err(ParseError::new(line, "unexpected text after closing quote"));
            }
            Ok(Field { text, quoted: true })
        }
        _ => Ok(Field {
            text: s.to_string(),
            quoted: false,
        }),
    }
}

/// Byte offsets of every `target` that sits outside quotes.
fn unquoted_positions(s: &str, target: char, line: usize) -> Result<Vec<usize>, ParseError> {
    let mut positions = Vec::new();
    let mut quote = None;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == target => positions.push(i),
            None => {}
        }
    }
    if quote.is_some() {
        return Err(ParseError::new(line, "unterminated quoted string"));
    }
    Ok(positions)
}

/// Consumes characters up to the closing `quote`, resolving escapes.
fn read_quoted(
    chars: &mut Chars<'_>,
    quote: char,
    out: &mut String,
    line: usize,
) -> Result<(), ParseError> {
    loop {
        match chars.next() {
            None => return Err(ParseError::new(line, "unterminated quoted string")),
            Some('\\') => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(c) => out.push(c),
                None => return Err(ParseError::new(line, "dangling escape")),
            },
            Some(c) if c == quote => return Ok(()),
            Some(c) => out.push(c),
        }
    }
}

/// Reads a possibly quoted name and returns it with the remaining text.
fn take_name(s: &str, line: usize) -> Result<(String, &str), ParseError> {
    let s = s.trim_start();
    let mut chars = s.chars();
    match chars.next() {
        Some(q @ ('\'' | '"')) => {
            let mut name = String::new();
            read_quoted(&mut chars, q, &mut name, line)?;
            Ok((name, chars.as_str()))
        }
        Some(_) => {
            let end = s
                .find(|c: char| c.is_whitespace() || c == '{')
                .unwrap_or(s.len());
            Ok((s[..end].to_string(), &s[end..]))
        }
        None => Err(ParseError::new(line, "missing name")),
    }
}
