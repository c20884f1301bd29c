//! Contact data model.
//!
//! `Name`, `Phone` and `Birthday` are validated on construction and immutable
//! afterwards. Serde goes through the same constructors, so a stored book
//! with a malformed value fails to load instead of producing an invalid field.

use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{1,20}$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{10,13}|\+\d{12,13})$").expect("valid phone regex"));

const BIRTHDAY_INPUT_FORMAT: &str = "%Y/%m/%d";

/// Contact name, the unique key of the address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if NAME_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First letter upper-cased, the rest lower-cased.
    pub fn title(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if PHONE_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPhone(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, or the absent sentinel produced by an empty input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Birthday {
    #[default]
    Absent,
    Date(NaiveDate),
}

impl Birthday {
    /// Parses `YYYY/MM/DD`. The empty string is `Absent`, not an error.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Ok(Self::Absent);
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_INPUT_FORMAT)
            .map(Self::Date)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Absent => None,
            Self::Date(date) => Some(*date),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Date(_))
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        match birthday {
            Birthday::Absent => String::new(),
            Birthday::Date(date) => date.format(BIRTHDAY_INPUT_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// One contact: a name, its phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Birthday,
}

impl Record {
    pub fn new(name: Name, phone: Option<Phone>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday: Birthday::Absent,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Birthday {
        self.birthday
    }

    /// Appends without checking for duplicates.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Replaces `old` with `new` (appended at the end). Does nothing when
    /// `old` is not one of this record's phones.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) {
        if let Some(pos) = self.phones.iter().position(|p| p == old) {
            self.phones.remove(pos);
            self.phones.push(new);
        }
    }

    /// Removes the first phone equal to `phone`, if any.
    pub fn del_phone(&mut self, phone: &Phone) {
        if let Some(pos) = self.phones.iter().position(|p| p == phone) {
            self.phones.remove(pos);
        }
    }

    /// An absent birthday never overwrites a stored one.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        if birthday.is_present() {
            self.birthday = birthday;
        }
    }

    /// Whole days from `today` until the next occurrence of the birthday.
    ///
    /// A birthday falling on `today` counts as already passed, so the result
    /// is always positive. Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let date = self.birthday.date()?;
        let this_year = occurrence_in(date, today.year())?;
        let next = if this_year > today {
            this_year
        } else {
            occurrence_in(date, today.year() + 1)?
        };
        Some((next - today).num_days())
    }
}

// Feb 29 birthdays are observed on Feb 28 in non-leap years.
fn occurrence_in(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "{}: [{}]", self.name, phones.join(", "))?;
        if self.birthday.is_present() {
            write!(f, ", Birthday: {}", self.birthday)?;
        }
        Ok(())
    }
}
