use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use simplexml::{DecodeConfig, Error, ErrorKind, LineEnding, Validate, ValidationError, WriterConfig, XmlEnum, XmlObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, XmlEnum)]
#[xml(rename_all = "UPPERCASE")]
enum Gender {
    Male,
    Female,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Default, XmlObject)]
struct Address {
    street: String,
    city: String,
}

#[derive(Debug, Clone, PartialEq, Default, XmlObject)]
struct Book {
    title: String,
}

#[derive(Debug, Clone, PartialEq, XmlObject)]
struct Person {
    #[xml(skip)]
    id: i32,
    first_name: String,
    last_name: String,
    gender: Gender,
    age: i32,
    birth_date: DateTime<Utc>,
    is_detective: bool,
    address: Address,
    books: Vec<Book>,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            id: 1,
            first_name: String::new(),
            last_name: String::new(),
            gender: Gender::None,
            age: 0,
            birth_date: DateTime::default(),
            is_detective: false,
            address: Address::default(),
            books: Vec::new(),
        }
    }
}

fn birth_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1854, 1, 6, 0, 0, 0).unwrap()
}

fn sherlock() -> Person {
    Person {
        id: 2018,
        first_name: "Sherlock".into(),
        last_name: "Holmes".into(),
        gender: Gender::Male,
        age: 164,
        birth_date: birth_date(),
        is_detective: true,
        address: Address {
            street: "221B Baker Street".into(),
            city: "London".into(),
        },
        books: vec![
            Book {
                title: "The Hound of the Baskervilles".into(),
            },
            Book {
                title: "The Sign of Four".into(),
            },
        ],
    }
}

fn sherlock_xml() -> String {
    let birth = format!("  <BirthDate>{}</BirthDate>\r\n", birth_date().timestamp_millis());
    [
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\r\n",
        "<Person>\r\n",
        "  <FirstName>Sherlock</FirstName>\r\n",
        "  <LastName>Holmes</LastName>\r\n",
        "  <Gender>MALE</Gender>\r\n",
        "  <Age>164</Age>\r\n",
        birth.as_str(),
        "  <IsDetective>true</IsDetective>\r\n",
        "  <Address>\r\n",
        "    <Street>221B Baker Street</Street>\r\n",
        "    <City>London</City>\r\n",
        "  </Address>\r\n",
        "  <Books>\r\n",
        "    <Book>\r\n",
        "      <Title>The Hound of the Baskervilles</Title>\r\n",
        "    </Book>\r\n",
        "    <Book>\r\n",
        "      <Title>The Sign of Four</Title>\r\n",
        "    </Book>\r\n",
        "  </Books>\r\n",
        "</Person>\r\n",
    ]
    .concat()
}

#[test]
fn test_serialization() {
    let mut out = Vec::new();
    simplexml::serialize(&mut out, &sherlock()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), sherlock_xml());
}

#[test]
fn test_serialization_is_deterministic() {
    let person = sherlock();
    assert_eq!(simplexml::to_vec(&person).unwrap(), simplexml::to_vec(&person).unwrap());
}

#[test]
fn test_deserialization() {
    let xml = sherlock_xml();
    let result: Person = simplexml::deserialize(xml.as_bytes()).unwrap();

    assert_eq!(result, Person { id: 1, ..sherlock() });
    assert_ne!(result.id, sherlock().id);
}

#[test]
fn test_deserialization_with_wrong_root_node() {
    let xml = sherlock_xml().replace("Person", "P");
    let err = simplexml::from_str::<Person>(&xml).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    match err {
        Error::WrongRoot { expected, found } => {
            assert_eq!(expected, "Person");
            assert_eq!(found, "P");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_deserialization_with_missing_elements() {
    let xml = sherlock_xml().replacen("  <FirstName>Sherlock</FirstName>\r\n", "", 1);
    let result: Person = simplexml::from_str(&xml).unwrap();

    assert_ne!(result, Person { id: 1, ..sherlock() });
    assert_eq!(result.first_name, "");
    assert_eq!(result.last_name, "Holmes");
}

#[test]
fn test_deserialization_with_invalid_values() {
    let xml = sherlock_xml()
        .replacen("<Age>164</Age>", "<Age>old</Age>", 1)
        .replacen("<Gender>MALE</Gender>", "<Gender>UNKNOWN</Gender>", 1);
    let err = simplexml::from_str::<Person>(&xml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);

    let xml = sherlock_xml().replacen("<Gender>MALE</Gender>", "<Gender>UNKNOWN</Gender>", 1);
    match simplexml::from_str::<Person>(&xml).unwrap_err() {
        Error::Conversion { tag, type_name, text, .. } => {
            assert_eq!(tag, "Gender");
            assert_eq!(type_name, "Gender");
            assert_eq!(text, "UNKNOWN");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_elements_are_ignored() {
    let xml = sherlock_xml().replacen(
        "  <Age>164</Age>\r\n",
        "  <Age>164</Age>\r\n  <Nickname>Sherl</Nickname>\r\n",
        1,
    );
    let result: Person = simplexml::from_str(&xml).unwrap();
    assert_eq!(result, Person { id: 1, ..sherlock() });
}

#[test]
fn test_lf_layout() {
    let config = WriterConfig::default().line_ending(LineEnding::Lf);
    let mut out = Vec::new();
    simplexml::serialize_with(&mut out, &sherlock(), &config).unwrap();
    let xml = String::from_utf8(out).unwrap();

    assert_eq!(xml, sherlock_xml().replace("\r\n", "\n"));
    assert_eq!(simplexml::from_str::<Person>(&xml).unwrap(), Person { id: 1, ..sherlock() });
}

#[derive(Debug, Clone, PartialEq, Default, XmlObject)]
#[xml(rename = "Library")]
struct Catalog {
    #[xml(rename = "Shelves")]
    shelf_index: BTreeMap<String, Vec<Book>>,
    featured: Option<Book>,
    ratings: [u8; 3],
    curator: Option<String>,
}

#[test]
fn test_nested_containers() {
    let catalog = Catalog {
        shelf_index: BTreeMap::from([
            ("A".to_string(), vec![Book { title: "A Study in Scarlet".into() }]),
            ("B".to_string(), Vec::new()),
        ]),
        featured: Some(Book {
            title: "The Valley of Fear".into(),
        }),
        ratings: [5, 4, 3],
        curator: None,
    };

    let xml = simplexml::to_string(&catalog).unwrap();
    let expected = [
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\r\n",
        "<Library>\r\n",
        "  <Shelves>\r\n",
        "    <String>A</String>\r\n",
        "    <Vec>\r\n",
        "      <Book>\r\n",
        "        <Title>A Study in Scarlet</Title>\r\n",
        "      </Book>\r\n",
        "    </Vec>\r\n",
        "    <String>B</String>\r\n",
        "    <Vec/>\r\n",
        "  </Shelves>\r\n",
        "  <Featured>\r\n",
        "    <Title>The Valley of Fear</Title>\r\n",
        "  </Featured>\r\n",
        "  <Ratings>\r\n",
        "    <u8>5</u8>\r\n",
        "    <u8>4</u8>\r\n",
        "    <u8>3</u8>\r\n",
        "  </Ratings>\r\n",
        "</Library>\r\n",
    ]
    .concat();
    assert_eq!(xml, expected);

    let back: Catalog = simplexml::from_str(&xml).unwrap();
    assert_eq!(back, catalog);
}

#[test]
fn test_array_length_mismatch() {
    let xml = "<Library><Ratings><u8>1</u8></Ratings></Library>";
    let err = simplexml::from_str::<Catalog>(xml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Instantiation);
}

#[test]
fn test_map_pairing_modes() {
    let xml = "<Library><Shelves><String>A</String><Vec/><String>B</String></Shelves></Library>";

    let lenient: Catalog = simplexml::from_str(xml).unwrap();
    assert!(lenient.shelf_index.is_empty());

    let err = simplexml::deserialize_with::<Catalog, _>(xml.as_bytes(), &DecodeConfig::strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[derive(Debug, Clone, PartialEq, Default, XmlObject)]
#[xml(validate)]
struct Account {
    owner: String,
    balance: i64,
}

impl Validate for Account {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.owner.is_empty() {
            return Err(ValidationError::new("account has no owner"));
        }
        Ok(())
    }
}

#[test]
fn test_post_decode_validation() {
    let ok: Account = simplexml::from_str("<Account><Owner>Hudson</Owner><Balance>12</Balance></Account>").unwrap();
    assert_eq!(
        ok,
        Account {
            owner: "Hudson".into(),
            balance: 12
        }
    );

    let err = simplexml::from_str::<Account>("<Account><Balance>12</Balance></Account>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "validation of Account failed: account has no owner");
}

#[derive(Debug, Clone, PartialEq, Default, XmlObject)]
struct Labelled<T> {
    label: String,
    items: Vec<T>,
}

#[test]
fn test_generic_object() {
    let value = Labelled {
        label: "primes".into(),
        items: vec![2u32, 3, 5],
    };
    let xml = simplexml::to_string(&value).unwrap();
    assert!(xml.contains("<Labelled>"));
    assert!(xml.contains("<u32>3</u32>"));
    assert_eq!(simplexml::from_str::<Labelled<u32>>(&xml).unwrap(), value);
}

#[test]
fn test_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("simplexml-person-{}.xml", std::process::id()));
    simplexml::serialize_file(&path, &sherlock()).unwrap();
    let result: Person = simplexml::deserialize_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(result, Person { id: 1, ..sherlock() });
}
