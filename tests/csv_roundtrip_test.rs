//! Integration tests for CSV import/export
//!
//! Covers the round-trip guarantee between the codec and the register, and
//! the documented header contract.

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use kardex::adapters::csv::{CsvCodec, EXPECTED_HEADERS};
use kardex::adapters::memory::MemoryRegister;
use kardex::adapters::register::PatientRegister;
use kardex::domain::{KardexError, Patient};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_register_export_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.csv");
    let codec = CsvCodec::default();

    // Populate a register with generated patients.
    let mut register = MemoryRegister::new();
    let mut originals = Vec::new();
    for i in 0..25 {
        let patient = Patient::builder(
            FirstName().fake::<String>(),
            LastName().fake::<String>(),
            format!("{:011}", 10_000_000_000u64 + i),
        )
        .general_practitioner(format!("Dr. {}", LastName().fake::<String>()))
        .build()
        .unwrap();
        originals.push(patient.clone());
        register.add(patient).unwrap();
    }

    // Export, then import into a fresh register.
    codec.write(Some(&path), &register.list().unwrap()).unwrap();
    let mut imported_register = MemoryRegister::new();
    imported_register
        .add_all(codec.read(Some(&path)).unwrap())
        .unwrap();

    assert_eq!(imported_register.count().unwrap(), originals.len());
    let imported = imported_register.list().unwrap();
    for original in &originals {
        assert!(imported.contains(original));
    }
}

#[test]
fn test_round_trip_reproduces_data_rows_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    let codec = CsvCodec::default();

    let patients = vec![
        Patient::builder("TestName", "TestLastName", "123")
            .general_practitioner("Doc1")
            .diagnosis("Diag1")
            .build()
            .unwrap(),
        Patient::builder("TestName2", "TestLastName2", "321")
            .general_practitioner("Olsen; Hansen")
            .build()
            .unwrap(),
    ];

    codec.write(Some(&first), &patients).unwrap();
    let read_back = codec.read(Some(&first)).unwrap();
    codec.write(Some(&second), &read_back).unwrap();

    let mut first_rows: Vec<String> = fs::read_to_string(&first)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    let mut second_rows: Vec<String> = fs::read_to_string(&second)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    first_rows.sort();
    second_rows.sort();

    assert_eq!(first_rows, second_rows);
}

#[test]
fn test_concrete_export_scenario() {
    // Two patients, one with a general practitioner, neither with a
    // diagnosis; both must survive a write/read cycle unchanged.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.csv");
    let codec = CsvCodec::default();

    let mut register = MemoryRegister::new();
    register
        .add(Patient::new("Name1", "LastName1", "123").unwrap())
        .unwrap();
    register
        .add(
            Patient::builder("Name2", "LastName2", "321")
                .general_practitioner("SpongeBob")
                .build()
                .unwrap(),
        )
        .unwrap();

    assert_eq!(register.count().unwrap(), 2);

    codec.write(Some(&path), &register.list().unwrap()).unwrap();
    let read_back = codec.read(Some(&path)).unwrap();

    assert_eq!(read_back.len(), 2);
    let by_ssn = |ssn: &str| {
        read_back
            .iter()
            .find(|p| p.social_security_number() == ssn)
            .unwrap()
    };
    assert_eq!(by_ssn("123").general_practitioner(), "");
    assert_eq!(by_ssn("321").general_practitioner(), "SpongeBob");
    assert_eq!(by_ssn("123").diagnosis(), "");
    assert_eq!(by_ssn("321").diagnosis(), "");
}

#[test]
fn test_header_contract() {
    assert_eq!(
        EXPECTED_HEADERS,
        [
            "firstName",
            "lastName",
            "generalPractitioner",
            "socialSecurityNumber",
            "diagnosis"
        ]
    );

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.csv");
    CsvCodec::default()
        .write(
            Some(&path),
            &[Patient::new("Name1", "LastName1", "123").unwrap()],
        )
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents
        .starts_with("firstName;lastName;generalPractitioner;socialSecurityNumber;diagnosis"));
}

#[test]
fn test_schema_error_aborts_with_no_partial_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wrong.csv");
    fs::write(&path, "name;number\nName1;123\n").unwrap();

    let result = CsvCodec::default().read(Some(&path));

    match result {
        Err(KardexError::Schema { expected, found }) => {
            assert!(expected.contains("socialSecurityNumber"));
            assert_eq!(found, "name;number");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_import_of_duplicate_rows_is_partial() {
    // Bulk import has no rollback: rows before the duplicate stay.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dups.csv");
    fs::write(
        &path,
        "firstName;lastName;generalPractitioner;socialSecurityNumber;diagnosis\n\
         Name1;LastName1;;123;\n\
         Name2;LastName2;;123;\n\
         Name3;LastName3;;456;\n",
    )
    .unwrap();

    let patients = CsvCodec::default().read(Some(&path)).unwrap();
    let mut register = MemoryRegister::new();
    let result = register.add_all(patients);

    assert!(matches!(result, Err(KardexError::DuplicateKey(_))));
    assert_eq!(register.count().unwrap(), 1);
}
