use rand::{seq::SliceRandom, Rng};

use crate::catalog::{Catalog, Country};
use crate::distractor::{pick_distractors, DISTRACTOR_COUNT};
use crate::scope::QuizScope;

/// Which attribute is shown and which is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    CapitalToCountry,
    CountryToCapital,
    FlagToCountry,
    MapToCountry,
}

impl QuizMode {
    /// Parses the kebab-case mode tags the product has always used.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "capital-to-country" => Some(Self::CapitalToCountry),
            "country-to-capital" => Some(Self::CountryToCapital),
            "flag-to-country" => Some(Self::FlagToCountry),
            "map-to-country" => Some(Self::MapToCountry),
            _ => None,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::CapitalToCountry => "Hvilket land har denne hovedstaden?",
            Self::CountryToCapital => "Hva er hovedstaden i dette landet?",
            Self::FlagToCountry => "Hvilket land har dette flagget?",
            Self::MapToCountry => "Hvilket land er dette?",
        }
    }

    /// The stimulus shown to the user. Flag and map questions show the
    /// country code; the caller maps it to an image or a highlight.
    fn display_value(self, country: &Country) -> &str {
        match self {
            Self::CapitalToCountry => &country.capital,
            Self::CountryToCapital => &country.name,
            Self::FlagToCountry | Self::MapToCountry => &country.code,
        }
    }

    /// The attribute answers and distractors are drawn from.
    fn answer_value(self, country: &Country) -> &str {
        match self {
            Self::CountryToCapital => &country.capital,
            Self::CapitalToCountry | Self::FlagToCountry | Self::MapToCountry => &country.name,
        }
    }
}

/// Immutable once generated.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub display_value: String,
    pub correct_answer: String,
    /// The correct answer plus distractors, shuffled. Length 4 whenever
    /// the pool allows.
    pub options: Vec<String>,
    /// Source country, kept for code-dependent rendering (flags, maps).
    pub country: Country,
}

/// Builds one question per country in the resolved pool, in shuffled
/// order. Distractors are drawn from the same pool, so a continent quiz
/// never offers a country from another continent.
pub fn generate_questions(
    mode: QuizMode,
    scope: &QuizScope,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Vec<QuizQuestion> {
    generate_from_pool(mode, &scope.resolve(catalog), rng)
}

pub(crate) fn generate_from_pool(
    mode: QuizMode,
    pool: &[Country],
    rng: &mut impl Rng,
) -> Vec<QuizQuestion> {
    let mut order = pool.to_vec();
    order.shuffle(rng);

    order
        .into_iter()
        .map(|country| {
            let distractors = pick_distractors(&country, pool, DISTRACTOR_COUNT, rng);

            let mut options: Vec<String> = distractors
                .iter()
                .map(|c| mode.answer_value(c).to_owned())
                .collect();
            options.push(mode.answer_value(&country).to_owned());
            options.shuffle(rng);

            QuizQuestion {
                prompt: mode.prompt(),
                display_value: mode.display_value(&country).to_owned(),
                correct_answer: mode.answer_value(&country).to_owned(),
                options,
                country,
            }
        })
        .collect()
}
