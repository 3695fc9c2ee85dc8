use crate::catalog::{Catalog, Continent, Country};

/// Which slice of the catalog a session draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Continent(Continent),
    /// An explicit list of country codes, e.g. the user's practice list.
    /// May resolve to an empty pool; that is a legal, terminal state the
    /// caller has to check for before starting a session.
    Practice(Vec<String>),
}

impl QuizScope {
    /// Resolves the scope to its country pool. Pure filter; a `Practice`
    /// scope keeps catalog order, not the order of the input list.
    pub fn resolve(&self, catalog: &Catalog) -> Vec<Country> {
        match self {
            QuizScope::All => catalog.countries().to_vec(),
            QuizScope::Continent(continent) => catalog
                .countries()
                .iter()
                .filter(|c| c.continent == *continent)
                .cloned()
                .collect(),
            QuizScope::Practice(codes) => catalog
                .countries()
                .iter()
                .filter(|c| codes.iter().any(|code| *code == c.code))
                .cloned()
                .collect(),
        }
    }
}
