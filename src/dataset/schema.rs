// src/dataset/schema.rs
//
// Header → canonical field mapping.
//
// Per field, two passes over the raw headers:
//   1. trimmed, case-insensitive exact match, aliases in list order;
//   2. case-insensitive containment (header contains alias), aliases in
//      list order, headers left to right.
// Fields are resolved independently, so two fields may land on the same
// column if their aliases overlap.

use std::fmt::Debug;

use crate::config::consts::*;
use crate::error::{Error, Result};

/// A canonical column of some schema.
pub trait Field: Copy + Eq + Debug + 'static {
    fn name(self) -> &'static str;
    fn required(self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectionField {
    Question,
    Answer,
    Category,
    Tags,
}

impl Field for ObjectionField {
    fn name(self) -> &'static str {
        match self {
            ObjectionField::Question => "question",
            ObjectionField::Answer => "answer",
            ObjectionField::Category => "category",
            ObjectionField::Tags => "tags",
        }
    }
    fn required(self) -> bool {
        matches!(self, ObjectionField::Question | ObjectionField::Answer)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BrokerageField {
    Brokerage,
    Rebuttal,
    Sms,
    OneLiner,
    Notes,
}

impl Field for BrokerageField {
    fn name(self) -> &'static str {
        match self {
            BrokerageField::Brokerage => "brokerage",
            BrokerageField::Rebuttal => "rebuttal",
            BrokerageField::Sms => "sms",
            BrokerageField::OneLiner => "one_liner",
            BrokerageField::Notes => "notes",
        }
    }
    fn required(self) -> bool {
        matches!(self, BrokerageField::Brokerage | BrokerageField::Rebuttal)
    }
}

/// Ordered alias lists per field. Order of fields is the order of the
/// resulting `ColumnMap`; order of aliases is match priority.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasTable<F: Field> {
    fields: Vec<(F, Vec<String>)>,
}

impl<F: Field> AliasTable<F> {
    pub fn from_static(table: &[(F, &[&str])]) -> Self {
        let fields = table
            .iter()
            .map(|(f, aliases)| (*f, aliases.iter().map(|a| a.trim().to_lowercase()).collect()))
            .collect();
        Self { fields }
    }

    /// Replace one field's aliases (appends the field if absent).
    pub fn with_aliases(mut self, field: F, aliases: &[&str]) -> Self {
        let list: Vec<String> = aliases.iter().map(|a| a.trim().to_lowercase()).collect();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = list,
            None => self.fields.push((field, list)),
        }
        self
    }

    pub fn aliases(&self, field: F) -> &[String] {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, a)| a.as_slice()).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().map(|(f, _)| *f)
    }
}

impl AliasTable<ObjectionField> {
    pub fn objections() -> Self {
        Self::from_static(&[
            (ObjectionField::Question, QUESTION_ALIASES),
            (ObjectionField::Answer, ANSWER_ALIASES),
            (ObjectionField::Category, CATEGORY_ALIASES),
            (ObjectionField::Tags, TAGS_ALIASES),
        ])
    }
}

impl AliasTable<BrokerageField> {
    pub fn brokerage() -> Self {
        Self::from_static(&[
            (BrokerageField::Brokerage, BROKERAGE_ALIASES),
            (BrokerageField::Rebuttal, REBUTTAL_ALIASES),
            (BrokerageField::Sms, SMS_ALIASES),
            (BrokerageField::OneLiner, ONE_LINER_ALIASES),
            (BrokerageField::Notes, NOTES_ALIASES),
        ])
    }
}

/// Result of header matching: field → column index (or None).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap<F: Field> {
    matched: Vec<(F, Option<usize>)>,
}

impl<F: Field> ColumnMap<F> {
    pub fn get(&self, field: F) -> Option<usize> {
        self.matched.iter().find(|(f, _)| *f == field).and_then(|(_, c)| *c)
    }

    /// Header text of the matched column.
    pub fn column_name<'a>(&self, field: F, columns: &'a [String]) -> Option<&'a str> {
        self.get(field).and_then(|ix| columns.get(ix)).map(|s| s.as_str())
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        self.matched
            .iter()
            .filter(|(f, c)| f.required() && c.is_none())
            .map(|(f, _)| f.name())
            .collect()
    }

    /// Fail with `MissingRequiredColumn` naming every unresolved required field.
    pub fn require(&self, columns: &[String]) -> Result<()> {
        let fields = self.missing_required();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequiredColumn { fields, found: columns.to_vec() })
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, Option<usize>)> + '_ {
        self.matched.iter().copied()
    }
}

pub fn normalize_headers<F: Field>(columns: &[String], table: &AliasTable<F>) -> ColumnMap<F> {
    let lowered: Vec<String> = columns.iter().map(|c| c.trim().to_lowercase()).collect();
    let matched = table
        .fields
        .iter()
        .map(|(field, aliases)| (*field, find_column(&lowered, aliases)))
        .collect();
    ColumnMap { matched }
}

fn find_column(lowered: &[String], aliases: &[String]) -> Option<usize> {
    let exact = aliases
        .iter()
        .find_map(|a| lowered.iter().position(|c| c == a));
    exact.or_else(|| {
        aliases
            .iter()
            .filter(|a| !a.is_empty())
            .find_map(|a| lowered.iter().position(|c| c.contains(a.as_str())))
    })
}
