//! Equivalence tests for the two derived-column strategies.
//!
//! Verifies that the row-wise visit and the whole-column transform produce
//! identical columns for the same input table.

use anyhow::Result;
use geocrunch::table::{derive, load_csv, IndexColumn, IndexedTable};
use std::io::Write;
use tempfile::NamedTempFile;

const BRICS_SAMPLE: &str = "\
code,country,capital,area,population
BR,Brazil,Brasilia,8.516,200.40
RU,Russia,Moscow,17.10,143.50
IN,India,New Delhi,3.286,1252.00
CH,China,Beijing,9.597,1357.00
SA,South Africa,Pretoria,1.221,52.98
";

fn load_fixture(contents: &str) -> Result<(NamedTempFile, IndexedTable)> {
    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    let table = load_csv(tmp.path(), IndexColumn::Position(0))?;
    Ok((tmp, table))
}

#[test]
fn rowwise_and_columnar_agree() -> Result<()> {
    let (_tmp, base) = load_fixture(BRICS_SAMPLE)?;

    let mut rowwise = base.clone();
    derive::derive_length_rowwise(&mut rowwise, "country", "name_length")?;
    derive::derive_length_rowwise(&mut rowwise, "capital", "cap_length")?;

    let mut columnar = base;
    derive::derive_length_columnar(&mut columnar, "country", "name_length")?;
    derive::derive_length_columnar(&mut columnar, "capital", "cap_length")?;

    assert_eq!(
        rowwise.i64_column("name_length")?,
        columnar.i64_column("name_length")?
    );
    assert_eq!(
        rowwise.i64_column("cap_length")?,
        columnar.i64_column("cap_length")?
    );
    Ok(())
}

#[test]
fn every_row_gets_its_source_field_length() -> Result<()> {
    let (_tmp, mut table) = load_fixture(BRICS_SAMPLE)?;
    derive::derive_length_rowwise(&mut table, "country", "name_length")?;
    derive::derive_length_columnar(&mut table, "capital", "cap_length")?;

    for label in table.labels().to_vec() {
        let pos = table.position_of(&label)?;
        let country = table.str_value(&label, "country")?.unwrap();
        let capital = table.str_value(&label, "capital")?.unwrap();
        assert_eq!(
            table.i64_column("name_length")?.value(pos),
            country.chars().count() as i64
        );
        assert_eq!(
            table.i64_column("cap_length")?.value(pos),
            capital.chars().count() as i64
        );
    }
    Ok(())
}

#[test]
fn two_row_scenario_lengths() -> Result<()> {
    let sample = "\
code,country,capital
BR,Brazil,Brasilia
RU,Russia,Moscow
";
    let (_tmp, mut table) = load_fixture(sample)?;
    derive::derive_length_rowwise(&mut table, "country", "name_length")?;
    derive::derive_length_columnar(&mut table, "capital", "cap_length")?;

    let name_length = table.i64_column("name_length")?;
    let cap_length = table.i64_column("cap_length")?;
    assert_eq!((name_length.value(0), name_length.value(1)), (6, 6));
    assert_eq!((cap_length.value(0), cap_length.value(1)), (8, 6));
    Ok(())
}
