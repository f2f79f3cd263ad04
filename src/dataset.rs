use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeKind {
    Numeric,
    /// Declared labels, in declaration order.
    Nominal(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn numeric(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            kind: AttributeKind::Numeric,
        }
    }

    pub fn nominal<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        Attribute {
            name: name.into(),
            kind: AttributeKind::Nominal(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self.kind, AttributeKind::Nominal(_))
    }

    /// Number of labels of a nominal attribute, zero for numeric ones.
    pub fn num_values(&self) -> usize {
        match &self.kind {
            AttributeKind::Nominal(values) => values.len(),
            AttributeKind::Numeric => 0,
        }
    }

    pub fn value_index(&self, label: &str) -> Option<usize> {
        match &self.kind {
            AttributeKind::Nominal(values) => values.iter().position(|v| v == label),
            AttributeKind::Numeric => None,
        }
    }

    /// Whether `value` is a legal cell for this attribute.
    pub fn accepts(&self, value: Value) -> bool {
        match (value, &self.kind) {
            (Value::Missing, _) => true,
            (Value::Numeric(v), AttributeKind::Numeric) => v.is_finite(),
            (Value::Nominal(index), AttributeKind::Nominal(values)) => index < values.len(),
            _ => false,
        }
    }

    pub fn format_value(&self, value: Value) -> String {
        match (value, &self.kind) {
            (Value::Missing, _) => "?".to_string(),
            (Value::Numeric(v), _) => format_number(v),
            (Value::Nominal(index), AttributeKind::Nominal(values)) => values
                .get(index)
                .map(|label| quote(label))
                .unwrap_or_else(|| "?".to_string()),
            (Value::Nominal(index), AttributeKind::Numeric) => index.to_string(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@attribute {} ", quote(&self.name))?;
        match &self.kind {
            AttributeKind::Numeric => write!(f, "numeric"),
            AttributeKind::Nominal(values) => {
                let labels: Vec<String> = values.iter().map(|v| quote(v)).collect();
                write!(f, "{{{}}}", labels.join(","))
            }
        }
    }
}

/// A single cell. Nominal cells hold the index of their label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Missing,
    Numeric(f64),
    Nominal(usize),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

pub type Row = Vec<Value>;

/// An in-memory table of typed rows with an optional class column.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub relation: String,
    pub attributes: Vec<Attribute>,
    pub class_index: Option<usize>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(relation: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Dataset {
            relation: relation.into(),
            attributes,
            class_index: None,
            rows: Vec::new(),
        }
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn class_attribute(&self) -> Option<&Attribute> {
        self.class_index.and_then(|index| self.attributes.get(index))
    }

    /// Appends a row after checking it against the schema.
    pub fn push_row(&mut self, row: Row) -> Result<(), String> {
        if row.len() != self.attributes.len() {
            return Err(format!(
                "expected {} values, found {}",
                self.attributes.len(),
                row.len()
            ));
        }
        if let Some((attribute, _)) = self
            .attributes
            .iter()
            .zip(row.iter())
            .find(|(attribute, value)| !attribute.accepts(**value))
        {
            return Err(format!("illegal value for attribute {:?}", attribute.name));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn format_row(&self, row: &[Value]) -> String {
        self.attributes
            .iter()
            .zip(row.iter())
            .map(|(attribute, &value)| attribute.format_value(value))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@relation {}", quote(&self.relation))?;
        writeln!(f)?;
        for attribute in &self.attributes {
            writeln!(f, "{}", attribute)?;
        }
        writeln!(f)?;
        writeln!(f, "@data")?;
        for row in &self.rows {
            writeln!(f, "{}", self.format_row(row))?;
        }
        Ok(())
    }
}

/// Parses a numeric cell. `nan` and the infinities are not numbers here.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Quotes a name or label if it would not survive a round trip through ARFF.
pub fn quote(s: &str) -> String {
    let needs_quotes = s.is_empty()
        || s == "?"
        || s
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ',' | '\'' | '"' | '{' | '}' | '%' | '\\'));
    if !needs_quotes {
        return s.to_string();
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\'' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Six decimals at most, trailing zeros dropped.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "?".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{:.0}", v);
    }
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
