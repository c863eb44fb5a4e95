//! Type-directed mapping between Rust values and XML documents.
//!
//! A value becomes a document whose root element is tagged with the value's
//! type name. Struct fields become child elements tagged with the field name
//! in upper camel case (`first_name` becomes `FirstName`), scalars become
//! element text, and containers become repeated child elements tagged with
//! their item type names. Decoding walks the same rules backwards, driven by
//! the declared types of the target.
//!
//! # Example
//!
//! ```
//! use simplexml::{XmlEnum, XmlObject};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Default, XmlEnum)]
//! #[xml(rename_all = "UPPERCASE")]
//! enum Gender {
//!     #[default]
//!     Male,
//!     Female,
//! }
//!
//! #[derive(Debug, PartialEq, Default, XmlObject)]
//! struct Book {
//!     title: String,
//! }
//!
//! #[derive(Debug, PartialEq, Default, XmlObject)]
//! struct Person {
//!     first_name: String,
//!     gender: Gender,
//!     books: Vec<Book>,
//!     #[xml(skip)]
//!     id: u64,
//! }
//!
//! let person = Person {
//!     first_name: "Sherlock".into(),
//!     gender: Gender::Male,
//!     books: vec![Book { title: "The Sign of Four".into() }],
//!     id: 7,
//! };
//!
//! let xml = simplexml::to_string(&person)?;
//! assert!(xml.contains("<FirstName>Sherlock</FirstName>"));
//! assert!(xml.contains("<Gender>MALE</Gender>"));
//! assert!(xml.contains("<Book>"));
//! assert!(!xml.contains("<Id>"));
//!
//! let back: Person = simplexml::from_str(&xml)?;
//! assert_eq!(back, Person { id: 0, ..person });
//! # Ok::<(), simplexml::Error>(())
//! ```
//!
//! # Shapes
//!
//! Every type is exactly one [`ShapeKind`]: scalar, object, sequence
//! (`[T; N]`), collection (`Vec`, `VecDeque`, `LinkedList`, `HashSet`,
//! `BTreeSet`) or map (`HashMap`, `BTreeMap`). `Option<T>` and `Box<T>` take
//! the shape of `T`; `None` is the absent value and produces no element.
//!
//! Decoding is lenient about missing data: a field with no matching child
//! keeps its `Default` value. It is strict about data that is present but
//! wrong: text that does not convert fails the whole call.

extern crate self as simplexml;

pub use simplexml_dom as dom;

pub mod codec;
pub mod collection;
pub mod config;
pub mod error;
pub mod map;
pub mod object;
pub mod scalar;
pub mod shape;
mod traits;

pub use codec::{
    decode_document, deserialize, deserialize_file, deserialize_with, encode_document, from_slice, from_str,
    serialize, serialize_file, serialize_with, to_string, to_vec,
};
pub use config::{DecodeConfig, DecodeContext, MapPairing};
pub use dom::{LineEnding, WriterConfig};
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use shape::{shape_of, FieldDescriptor, ShapeKind, TypeDescriptor};
pub use simplexml_derive::{XmlEnum, XmlObject};
pub use traits::{Validate, XmlObject, XmlType};
