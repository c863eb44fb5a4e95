//! Scalar registry.
//!
//! Each supported scalar type has an explicit text encoding and decoding
//! here. There is no fallback: a type that is not registered does not
//! implement [`XmlType`] and is rejected at compile time. Further types are
//! registered with [`impl_xml_scalar!`](crate::impl_xml_scalar) or by
//! deriving `XmlEnum`.
//!
//! | Type | Text |
//! |------|------|
//! | integers, floats, `bool` | `Display` / `FromStr` |
//! | `char` | the character; decoding takes the first character |
//! | `String` | verbatim |
//! | `PathBuf` | the UTF-8 path |
//! | `SystemTime`, `DateTime<Utc>` | signed milliseconds since the Unix epoch |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use simplexml_dom::Element;
use thiserror::Error;

use crate::error::BoxError;
use crate::{DecodeContext, Error, Result, ShapeKind, XmlType};

/// Scalar conversion failures that have no standard library error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// A character was expected but the text was empty.
    #[error("expected a character, found empty text")]
    EmptyChar,

    /// Epoch milliseconds outside the representable range.
    #[error("{0} ms since the epoch is out of range")]
    TimeOutOfRange(i128),

    /// A path that cannot be written as UTF-8 text.
    #[error("path is not valid UTF-8")]
    NonUtf8Path,

    /// Text that names no variant of an enumeration.
    #[error("expected one of {}", .expected.join(", "))]
    UnknownLiteral { expected: &'static [&'static str] },
}

/// Register a type implementing `FromStr` and `Display` as a scalar.
///
/// The second argument is the type name used for element tags; it defaults
/// to the type as written.
///
/// ```
/// use std::fmt;
/// use std::str::FromStr;
///
/// #[derive(Debug, PartialEq)]
/// struct Isbn(String);
///
/// impl fmt::Display for Isbn {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.0)
///     }
/// }
///
/// impl FromStr for Isbn {
///     type Err = std::convert::Infallible;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         Ok(Isbn(s.to_string()))
///     }
/// }
///
/// simplexml::impl_xml_scalar!(Isbn);
///
/// let xml = simplexml::to_string(&Isbn("0-19-283512-8".into()))?;
/// assert!(xml.contains("<Isbn>0-19-283512-8</Isbn>"));
/// # Ok::<(), simplexml::Error>(())
/// ```
#[macro_export]
macro_rules! impl_xml_scalar {
    ($ty:ty, $name:expr) => {
        impl $crate::XmlType for $ty {
            const TYPE_NAME: &'static str = $name;
            const SHAPE: $crate::ShapeKind = $crate::ShapeKind::Scalar;

            fn encode(&self, element: &mut $crate::dom::Element) -> $crate::Result<()> {
                element.set_text(::std::string::ToString::to_string(self));
                ::std::result::Result::Ok(())
            }

            fn decode(
                element: &$crate::dom::Element,
                _ctx: &$crate::DecodeContext<'_>,
            ) -> $crate::Result<Self> {
                $crate::scalar::parse_text(element)
            }
        }
    };
    ($ty:ident) => {
        $crate::impl_xml_scalar!($ty, ::std::stringify!($ty));
    };
}

/// Parse the text of `element` (empty if it has none) with `FromStr`.
pub fn parse_text<T>(element: &Element) -> Result<T>
where
    T: XmlType + FromStr,
    T::Err: Into<BoxError>,
{
    let text = element.text_or_empty();
    text.parse::<T>()
        .map_err(|e| Error::conversion(element, T::TYPE_NAME, text, e))
}

impl_xml_scalar!(bool, "bool");
impl_xml_scalar!(i8, "i8");
impl_xml_scalar!(i16, "i16");
impl_xml_scalar!(i32, "i32");
impl_xml_scalar!(i64, "i64");
impl_xml_scalar!(i128, "i128");
impl_xml_scalar!(isize, "isize");
impl_xml_scalar!(u8, "u8");
impl_xml_scalar!(u16, "u16");
impl_xml_scalar!(u32, "u32");
impl_xml_scalar!(u64, "u64");
impl_xml_scalar!(u128, "u128");
impl_xml_scalar!(usize, "usize");
impl_xml_scalar!(f32, "f32");
impl_xml_scalar!(f64, "f64");

impl XmlType for String {
    const TYPE_NAME: &'static str = "String";
    const SHAPE: ShapeKind = ShapeKind::Scalar;

    fn encode(&self, element: &mut Element) -> Result<()> {
        element.set_text(self.as_str());
        Ok(())
    }

    fn decode(element: &Element, _ctx: &DecodeContext<'_>) -> Result<Self> {
        Ok(element.text_or_empty().to_string())
    }
}

impl XmlType for char {
    const TYPE_NAME: &'static str = "char";
    const SHAPE: ShapeKind = ShapeKind::Scalar;

    fn encode(&self, element: &mut Element) -> Result<()> {
        element.set_text(self.to_string());
        Ok(())
    }

    fn decode(element: &Element, _ctx: &DecodeContext<'_>) -> Result<Self> {
        let text = element.text_or_empty();
        text.chars()
            .next()
            .ok_or_else(|| Error::conversion(element, Self::TYPE_NAME, text, ScalarError::EmptyChar))
    }
}

impl XmlType for PathBuf {
    const TYPE_NAME: &'static str = "PathBuf";
    const SHAPE: ShapeKind = ShapeKind::Scalar;

    fn encode(&self, element: &mut Element) -> Result<()> {
        let text = self.to_str().ok_or_else(|| {
            Error::conversion(
                element,
                Self::TYPE_NAME,
                self.to_string_lossy(),
                ScalarError::NonUtf8Path,
            )
        })?;
        element.set_text(text);
        Ok(())
    }

    fn decode(element: &Element, _ctx: &DecodeContext<'_>) -> Result<Self> {
        Ok(PathBuf::from(element.text_or_empty()))
    }
}

/// Read the text of `element` as signed epoch milliseconds.
fn parse_epoch_millis(element: &Element, type_name: &'static str) -> Result<i64> {
    let text = element.text_or_empty();
    text.parse::<i64>()
        .map_err(|e| Error::conversion(element, type_name, text, e))
}

impl XmlType for SystemTime {
    const TYPE_NAME: &'static str = "SystemTime";
    const SHAPE: ShapeKind = ShapeKind::Scalar;

    fn encode(&self, element: &mut Element) -> Result<()> {
        // Millisecond precision, truncated towards the epoch.
        let millis = match self.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_millis() as i128,
            Err(before) => -(before.duration().as_millis() as i128),
        };
        let millis = i64::try_from(millis).map_err(|_| {
            Error::conversion(
                element,
                Self::TYPE_NAME,
                format!("{:?}", self),
                ScalarError::TimeOutOfRange(millis),
            )
        })?;
        element.set_text(millis.to_string());
        Ok(())
    }

    fn decode(element: &Element, _ctx: &DecodeContext<'_>) -> Result<Self> {
        let millis = parse_epoch_millis(element, Self::TYPE_NAME)?;
        let offset = Duration::from_millis(millis.unsigned_abs());
        let time = if millis >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        };
        time.ok_or_else(|| {
            Error::conversion(
                element,
                Self::TYPE_NAME,
                element.text_or_empty(),
                ScalarError::TimeOutOfRange(i128::from(millis)),
            )
        })
    }
}

#[cfg(feature = "chrono")]
impl XmlType for chrono::DateTime<chrono::Utc> {
    const TYPE_NAME: &'static str = "DateTime";
    const SHAPE: ShapeKind = ShapeKind::Scalar;

    fn encode(&self, element: &mut Element) -> Result<()> {
        element.set_text(self.timestamp_millis().to_string());
        Ok(())
    }

    fn decode(element: &Element, _ctx: &DecodeContext<'_>) -> Result<Self> {
        let millis = parse_epoch_millis(element, Self::TYPE_NAME)?;
        chrono::DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            Error::conversion(
                element,
                Self::TYPE_NAME,
                element.text_or_empty(),
                ScalarError::TimeOutOfRange(i128::from(millis)),
            )
        })
    }
}
