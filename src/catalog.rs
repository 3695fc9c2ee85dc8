use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::CatalogError;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_yaml(include_str!("../data/countries.yaml"))
        .expect("built-in country catalog is malformed")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Continent {
    #[serde(rename = "Afrika")]
    Africa,
    #[serde(rename = "Asia")]
    Asia,
    #[serde(rename = "Europa")]
    Europe,
    #[serde(rename = "Nord-Amerika")]
    NorthAmerica,
    #[serde(rename = "Sør-Amerika")]
    SouthAmerica,
    #[serde(rename = "Oseania")]
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Self::Africa,
        Self::Asia,
        Self::Europe,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Oceania,
    ];

    /// Parses the catalog's continent tag. Tag-exact; callers that want a
    /// forgiving parse normalize first.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Afrika" => Some(Self::Africa),
            "Asia" => Some(Self::Asia),
            "Europa" => Some(Self::Europe),
            "Nord-Amerika" => Some(Self::NorthAmerica),
            "Sør-Amerika" => Some(Self::SouthAmerica),
            "Oseania" => Some(Self::Oceania),
            _ => None,
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Africa => "Afrika",
            Self::Asia => "Asia",
            Self::Europe => "Europa",
            Self::NorthAmerica => "Nord-Amerika",
            Self::SouthAmerica => "Sør-Amerika",
            Self::Oceania => "Oseania",
        };
        f.write_str(tag)
    }
}

/// Position of a capital in degrees.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One catalog entry. `code` (ISO 3166-1 alpha-2) is the identity key;
/// `name` and `capital` are display strings and must never be compared
/// for equality.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: String,
    pub capital: String,
    pub code: String,
    pub continent: Continent,
    pub coordinates: Option<Coordinates>,
}

/// Immutable, validated country list.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Result<Self, CatalogError> {
        let mut codes = HashSet::new();
        let mut names = HashSet::new();
        let mut capitals = HashSet::new();
        for country in &countries {
            let code = country.code.as_str();
            if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(CatalogError::InvalidCode(code.to_owned()));
            }
            if !codes.insert(code) {
                return Err(CatalogError::DuplicateCode(code.to_owned()));
            }
            if !names.insert(country.name.as_str()) {
                return Err(CatalogError::DuplicateName(country.name.clone()));
            }
            // Names and capitals are the answer attributes; a repeated
            // value would let the correct answer show up twice among a
            // question's options.
            if !capitals.insert(country.capital.as_str()) {
                return Err(CatalogError::DuplicateCapital(country.capital.clone()));
            }
        }
        Ok(Self { countries })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let countries: Vec<Country> = serde_yaml::from_str(yaml)?;
        Self::new(countries)
    }

    /// The dataset shipped with the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn by_code(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == code)
    }

    pub fn by_continent(&self, continent: Continent) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.continent == continent)
            .collect()
    }
}
