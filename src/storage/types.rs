use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Calendar-date format used on forms and in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Auto-assigned primary key of an employee row.
pub type EmployeeId = i32;

/// Largest salary accepted: 10 digits in total, 2 of them fractional.
const MAX_SALARY_CENTS: i64 = 99_999_999_99;
const MAX_INTEGER_DIGITS: usize = 8;
const FRACTIONAL_DIGITS: usize = 2;

/// A non-negative amount with two fractional digits, held as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Salary(i64);

impl Salary {
    pub fn from_cents(cents: i64) -> Option<Self> {
        (0..=MAX_SALARY_CENTS).contains(&cents).then_some(Self(cents))
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSalaryError {
    Empty,
    InvalidDigits,
    TooManyFractionalDigits,
    TooManyIntegerDigits,
}

impl fmt::Display for ParseSalaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSalaryError::Empty => write!(f, "Enter a number."),
            ParseSalaryError::InvalidDigits => write!(f, "Enter a non-negative number."),
            ParseSalaryError::TooManyFractionalDigits => write!(
                f,
                "Ensure that there are no more than {} decimal places.",
                FRACTIONAL_DIGITS
            ),
            ParseSalaryError::TooManyIntegerDigits => write!(
                f,
                "Ensure that there are no more than {} digits before the decimal point.",
                MAX_INTEGER_DIGITS
            ),
        }
    }
}

impl std::error::Error for ParseSalaryError {}

impl FromStr for Salary {
    type Err = ParseSalaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseSalaryError::Empty);
        }
        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseSalaryError::InvalidDigits);
        }
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(ParseSalaryError::InvalidDigits);
        }
        if frac_part.len() > FRACTIONAL_DIGITS {
            return Err(ParseSalaryError::TooManyFractionalDigits);
        }
        let int_part = int_part.trim_start_matches('0');
        if int_part.len() > MAX_INTEGER_DIGITS {
            return Err(ParseSalaryError::TooManyIntegerDigits);
        }

        // Both parts are short ASCII digit runs at this point, so the sums cannot overflow.
        let units = int_part
            .bytes()
            .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        let cents = frac_part
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(FRACTIONAL_DIGITS)
            .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        Ok(Self(units * 100 + cents))
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// The six user-supplied fields of an employee, already coerced to their types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub department: String,
    pub salary: Salary,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub fields: EmployeeFields,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.name)
    }
}
