mod common;

use common::fixture_path;
use mo_reader::{Catalog, Endianness};
use std::fs::File;

const MO_FIXTURES: &[(&str, Endianness)] = &[
    ("de-le.mo", Endianness::Little),
    ("de-be.mo", Endianness::Big),
];

const EXPECTED: &[(&str, &str)] = &[
    ("Hello", "Hallo"),
    ("Open file", "Datei öffnen"),
    ("one apple", "eine Frucht"),
    ("%d apples", "%d Früchte"),
    ("Quit", "Beenden"),
];

fn open_fixture(name: &str) -> Catalog {
    let path = fixture_path(&["tests", "fixtures", name]);
    let file = File::open(&path).unwrap_or_else(|e| panic!("failed to open {}: {}", path.display(), e));
    Catalog::parse(file).unwrap_or_else(|e| panic!("failed to decode {}: {}", name, e))
}

#[test]
fn mo_fixtures_match_sources() {
    for (name, endianness) in MO_FIXTURES {
        let catalog = open_fixture(name);

        let header = catalog.header().expect("header");
        assert_eq!(header.endianness, *endianness, "byte order of {}", name);
        assert_eq!(header.version, 0, "format version of {}", name);
        assert_eq!(header.message_count, 5, "record count of {}", name);
        // header entry + 3 singular records + 2 keys from the plural record
        assert_eq!(catalog.len(), 6, "key count of {}", name);

        for (key, expected) in EXPECTED {
            assert_eq!(
                catalog.get(key),
                Some(*expected),
                "translation of {:?} in {}",
                key,
                name
            );
        }
    }
}

#[test]
fn mo_fixtures_expose_header_metadata() {
    for (name, _) in MO_FIXTURES {
        let catalog = open_fixture(name);
        let metadata = catalog.metadata();

        assert_eq!(metadata.get("Project-Id-Version"), Some("mo-reader fixtures 1.0"));
        assert_eq!(metadata.get("language"), Some("de"));
        assert_eq!(metadata.content_type(), Some("text/plain; charset=UTF-8"));
        assert_eq!(metadata.charset(), Some("UTF-8"));
        assert_eq!(metadata.plural_forms(), Some("nplurals=2; plural=(n != 1);"));
    }
}

#[test]
fn mo_fixture_plural_lookups() {
    let catalog = open_fixture("de-le.mo");
    assert_eq!(catalog.lookup_plural("one apple", "%d apples", 1), "eine Frucht");
    assert_eq!(catalog.lookup_plural("one apple", "%d apples", 0), "%d Früchte");
    assert_eq!(catalog.lookup_plural("one apple", "%d apples", 5), "%d Früchte");
}
