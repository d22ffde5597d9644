//! Static life-expectancy lookup table.
//!
//! The built-in table is embedded from `data/life_expectancy.csv` and parsed
//! once on first access. Lookups never fail: a country missing from the table
//! resolves to the configured default for the calculator version in use.

use crate::defaults;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

const BUILTIN_CSV: &str = include_str!("../data/life_expectancy.csv");

/// Process-wide table, parsed on first use and never mutated afterwards.
pub static LIFE_EXPECTANCY: Lazy<LifeExpectancyTable> = Lazy::new(|| {
    LifeExpectancyTable::from_csv_str(BUILTIN_CSV).unwrap_or_else(|e| {
        warn!("Built-in life expectancy data is invalid ({}), using defaults only", e);
        LifeExpectancyTable::default()
    })
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender-keyed lifespan pair used by the detailed calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderExpectancy {
    pub male: i32,
    pub female: i32,
}

impl GenderExpectancy {
    pub const DEFAULT: GenderExpectancy = GenderExpectancy {
        male: defaults::DETAILED_DEFAULT_MALE,
        female: defaults::DETAILED_DEFAULT_FEMALE,
    };

    pub fn get(&self, gender: Gender) -> i32 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryExpectancy {
    pub country: String,
    /// Both-sexes figure used by the classic calculator.
    pub overall: i32,
    pub by_gender: GenderExpectancy,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read life expectancy data: {0}")]
    Csv(#[from] csv::Error),
    #[error("life expectancy for {country} must be a positive number of years, got {value}")]
    NonPositive { country: String, value: i64 },
    #[error("country '{0}' is listed more than once")]
    DuplicateCountry(String),
    #[error("country name on line {0} is empty")]
    EmptyCountry(usize),
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    country: String,
    overall: i64,
    male: i64,
    female: i64,
}

fn positive_years(country: &str, value: i64) -> Result<i32, TableError> {
    match i32::try_from(value) {
        Ok(years) if years > 0 => Ok(years),
        _ => Err(TableError::NonPositive {
            country: country.to_string(),
            value,
        }),
    }
}

/// Country to lifespan mapping, kept in source order so the country picker
/// lists entries the way the data file does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LifeExpectancyTable {
    entries: Vec<CountryExpectancy>,
}

impl LifeExpectancyTable {
    /// Parse a `country,overall,male,female` CSV with a header row.
    pub fn from_csv_str(content: &str) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for (i, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row = row?;
            if row.country.is_empty() {
                // header is line 1
                return Err(TableError::EmptyCountry(i + 2));
            }
            if !seen.insert(row.country.clone()) {
                return Err(TableError::DuplicateCountry(row.country));
            }

            let overall = positive_years(&row.country, row.overall)?;
            let male = positive_years(&row.country, row.male)?;
            let female = positive_years(&row.country, row.female)?;

            entries.push(CountryExpectancy {
                country: row.country,
                overall,
                by_gender: GenderExpectancy { male, female },
            });
        }

        info!("Loaded life expectancy for {} countries", entries.len());
        Ok(Self { entries })
    }

    /// The embedded table shared by the whole process.
    pub fn builtin() -> &'static LifeExpectancyTable {
        &LIFE_EXPECTANCY
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.country.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, country: &str) -> Option<&CountryExpectancy> {
        self.entries.iter().find(|e| e.country == country)
    }

    /// Classic lookup: the both-sexes lifespan, or 80 for unlisted countries.
    pub fn overall(&self, country: &str) -> i32 {
        match self.get(country) {
            Some(entry) => entry.overall,
            None => {
                debug!(
                    "Country '{}' not listed, using default expectancy {}",
                    country,
                    defaults::CLASSIC_DEFAULT_EXPECTANCY
                );
                defaults::CLASSIC_DEFAULT_EXPECTANCY
            }
        }
    }

    /// Detailed lookup: gender-specific lifespan, falling back to the
    /// Male 80 / Female 85 pair for unlisted countries.
    pub fn for_gender(&self, country: &str, gender: Gender) -> i32 {
        let pair = match self.get(country) {
            Some(entry) => entry.by_gender,
            None => {
                debug!(
                    "Country '{}' not listed, using default {} expectancy",
                    country, gender
                );
                GenderExpectancy::DEFAULT
            }
        };
        pair.get(gender)
    }

    /// Version-agnostic entry: `None` selects the classic table.
    pub fn lookup(&self, country: &str, gender: Option<Gender>) -> i32 {
        match gender {
            Some(g) => self.for_gender(country, g),
            None => self.overall(country),
        }
    }
}
