//! The seed dataset: a small, ordered table of option records that the batch
//! driver tiles into its working set.
//!
//! The canonical table ships inside the binary (`data/seed_options.csv`), so
//! loading it never touches the filesystem.

use anyhow::{anyhow, Context, Result};

use crate::batch::types::{OptionRecord, SeedRow};

const EMBEDDED_SEED_CSV: &str = include_str!("data/seed_options.csv");

/// Immutable, ordered collection of seed records.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSet {
    records: Vec<OptionRecord>,
}

impl SeedSet {
    /// Parse the table compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_csv_str(EMBEDDED_SEED_CSV).context("Failed to parse embedded seed dataset")
    }

    /// Parse a seed table in CSV form. The header row must name the nine
    /// record columns; the `option_type` column holds `C` or `P`.
    pub fn from_csv_str(csv_text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<SeedRow>().enumerate() {
            // Data rows start on line 2, after the header.
            let line = i + 2;
            let row = row.with_context(|| format!("Malformed seed row on line {}", line))?;
            let record = row
                .into_record()
                .with_context(|| format!("Invalid seed row on line {}", line))?;
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn from_records(records: Vec<OptionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[OptionRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&OptionRecord> {
        self.records.get(index)
    }

    /// Fails if the set holds no records; the driver cannot tile an empty table.
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(anyhow!("Seed dataset is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bs::OptionKind;

    const HEADER: &str =
        "spot,strike,rate,dividend_yield,volatility,time,option_type,dividend,reference_price\n";

    #[test]
    fn test_embedded_seed_loads() {
        let seed = SeedSet::embedded().unwrap();
        assert_eq!(seed.len(), 24);

        let first = seed.get(0).unwrap();
        assert_eq!(first.spot, 42.0);
        assert_eq!(first.strike, 40.0);
        assert_eq!(first.kind, OptionKind::Call);
        assert_eq!(seed.get(1).unwrap().kind, OptionKind::Put);
        assert!(seed.get(24).is_none());
    }

    #[test]
    fn test_embedded_seed_alternates_call_put() {
        let seed = SeedSet::embedded().unwrap();
        for (i, record) in seed.records().iter().enumerate() {
            let expected = if i % 2 == 0 {
                OptionKind::Call
            } else {
                OptionKind::Put
            };
            assert_eq!(record.kind, expected, "row {}", i);
        }
    }

    #[test]
    fn test_quoted_codes_and_whitespace() {
        let text = format!("{}100, 100, 0.05, 0, 0.2, 1.0, \"P\", 0, 5.5735\n", HEADER);
        let seed = SeedSet::from_csv_str(&text).unwrap();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed.records()[0].kind, OptionKind::Put);
        assert_eq!(seed.records()[0].volatility, 0.2);
    }

    #[test]
    fn test_unknown_option_type_fails_loudly() {
        let text = format!("{}100,100,0.05,0,0.2,1.0,Q,0,10.45\n", HEADER);
        let err = SeedSet::from_csv_str(&text).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"), "{:#}", err);
    }

    #[test]
    fn test_malformed_number_fails() {
        let text = format!("{}abc,100,0.05,0,0.2,1.0,C,0,10.45\n", HEADER);
        assert!(SeedSet::from_csv_str(&text).is_err());
    }

    #[test]
    fn test_empty_table() {
        let seed = SeedSet::from_csv_str(HEADER).unwrap();
        assert!(seed.is_empty());
        assert!(seed.ensure_non_empty().is_err());
    }
}
