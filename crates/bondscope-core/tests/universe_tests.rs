//! Integration tests for loading and selecting from a bond universe.

use std::io::Write;

use bondscope_core::prelude::*;
use rust_decimal_macros::dec;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn csv_universe_matches_embedded_sample_rows() {
    let file = write_csv(
        "id,issuer,coupon_rate,maturity_years,price,face_value,rating\n\
         B1,Aurora Capital,5.0,5,980,1000,AAA\n\
         B2,Beacon Industries,3.5,10,1020,1000,BBB\n\
         B3,Crestline Holdings,6.0,3,950,1000,AA\n\
         B4,Delta Financial,4.0,7,1000,1000,A\n",
    );

    let loaded = BondUniverse::from_csv_path(file.path()).unwrap();
    let embedded = load_universe();

    assert_eq!(loaded.len(), 4);
    for (csv_bond, embedded_bond) in loaded.records().iter().zip(embedded) {
        assert_eq!(csv_bond, embedded_bond);
    }
}

#[test]
fn selection_from_loaded_universe() {
    let file = write_csv(
        "id,issuer,coupon_rate,maturity_years,price,face_value,rating\n\
         C1,,2.0,2,990,100,\n\
         C2,,3.0,4,101,100,A\n",
    );

    let universe = BondUniverse::from_csv_path(file.path()).unwrap();
    let selected = universe.select(&["C2", "MISSING"]);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, BondId::new("C2"));
    assert_eq!(selected[0].face_value, dec!(100));
    assert_eq!(selected[0].rating, CreditRating::A);
}

#[test]
fn default_universe_is_embedded_table() {
    let universe = BondUniverse::default();
    assert_eq!(universe.records(), load_universe());
}
