use super::elements::element_symbol;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// One element of a [`Formula`]: its symbol and how many atoms carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaEntry {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub count: usize,
}

/// The element multiset of a molecule, ordered by ascending atomic number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formula {
    entries: Vec<FormulaEntry>,
}

impl Formula {
    /// Groups and counts atomic numbers.
    ///
    /// Atomic numbers without a known symbol are skipped with a warning.
    pub fn from_atomic_numbers(atomic_numbers: &[u8]) -> Self {
        let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
        for &z in atomic_numbers {
            *counts.entry(z).or_default() += 1;
        }

        let entries = counts
            .into_iter()
            .filter_map(|(z, count)| match element_symbol(z) {
                Some(symbol) => Some(FormulaEntry {
                    atomic_number: z,
                    symbol,
                    count,
                }),
                None => {
                    warn!("Atomic number {} has no element symbol; omitted from formula.", z);
                    None
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[FormulaEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the count for a symbol, or 0 if the element is absent.
    pub fn count_of(&self, symbol: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map_or(0, |e| e.count)
    }

    pub fn total_atoms(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{}", entry.symbol)?;
            if entry.count > 1 {
                write!(f, "{}", entry.count)?;
            }
        }
        Ok(())
    }
}
