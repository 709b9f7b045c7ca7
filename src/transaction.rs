use crate::category::Category;
use crate::error::{CategoriseError, RowFault};

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub category: Option<Category>,
    pub amount: Decimal,
    pub running_total: Decimal,
}

/// The four positional fields of a statement row, before validation.
#[derive(Debug, Default, PartialEq)]
pub struct RawRow<'a> {
    pub date: Option<&'a str>,
    pub description: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub running_total: Option<&'a str>,
}

fn field_pattern() -> &'static Regex {
    static FIELD: OnceLock<Regex> = OnceLock::new();
    FIELD.get_or_init(|| Regex::new(r#"(")?([^,]*?)(")?(,|$)"#).expect("field pattern is valid"))
}

/// Splits a row into comma separated fields, dropping one pair of
/// surrounding quotes from each. Quoted commas are not supported.
pub fn split_fields(line: &str) -> Vec<&str> {
    field_pattern()
        .captures_iter(line)
        .filter_map(|caps| caps.get(2).map(|m| m.as_str()))
        .collect()
}

impl<'a> RawRow<'a> {
    /// Picks date, description, amount and running total out of `line`,
    /// after discarding `leading_columns` fields.
    pub fn extract(line: &'a str, leading_columns: usize) -> Self {
        let mut fields = split_fields(line).into_iter().skip(leading_columns);

        RawRow {
            date: fields.next(),
            description: fields.next(),
            amount: fields.next(),
            running_total: fields.next(),
        }
    }
}

impl TryFrom<RawRow<'_>> for Transaction {
    type Error = RowFault;

    fn try_from(raw: RawRow<'_>) -> Result<Self, Self::Error> {
        let date = required("date", raw.date)?;
        let description = required("description", raw.description)?;
        let amount = required("amount", raw.amount)?;
        let running_total = required("running total", raw.running_total)?;

        Ok(Transaction {
            date: date.to_string(),
            description: description.to_string(),
            category: None,
            amount: number("amount", amount)?,
            running_total: number("running total", running_total)?,
        })
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, RowFault> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RowFault::MissingField(field)),
    }
}

fn number(field: &'static str, value: &str) -> Result<Decimal, RowFault> {
    Decimal::from_str(value.trim()).map_err(|_| RowFault::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl Transaction {
    /// Parses one data row. The header is never passed here.
    pub fn parse_line(line: &str, leading_columns: usize) -> Result<Self, CategoriseError> {
        Transaction::try_from(RawRow::extract(line, leading_columns)).map_err(|fault| {
            CategoriseError::MalformedRow {
                line: line.to_string(),
                fault,
            }
        })
    }

    pub fn is_categorised(&self) -> bool {
        self.category.is_some()
    }
}
