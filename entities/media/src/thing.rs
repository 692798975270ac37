//! A bag of values of unrelated types, each carrying its own tag

use core::fmt;

use crate::MediaItem;

///
#[derive(Clone)]
pub enum Thing {
    ///
    Int(i64),

    ///
    Double(f64),

    ///
    Text(String),

    ///
    Point(f64, f64),

    ///
    Media(MediaItem),

    ///
    Converter(fn(&str) -> String),
}

impl fmt::Debug for Thing {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            &Self::Int(value) => f.debug_tuple("Int").field(&value).finish(),
            &Self::Double(value) => f.debug_tuple("Double").field(&value).finish(),
            &Self::Text(ref value) => f.debug_tuple("Text").field(value).finish(),
            &Self::Point(x, y) => f.debug_tuple("Point").field(&x).field(&y).finish(),
            &Self::Media(ref item) => f.debug_tuple("Media").field(item).finish(),
            &Self::Converter(_) => f.write_str("Converter(..)"),
        }
    }
}

impl Thing {
    /// First matching arm wins, so the specific zero cases have to come
    /// before the general ones.
    #[must_use]
    #[inline]
    pub fn describe(&self) -> String {
        match self {
            &Self::Int(0) => "zero as an Int".to_owned(),
            &Self::Double(value) if value == 0.0 => "zero as a Double".to_owned(),
            &Self::Int(value) => format!("an integer value of {value}"),
            &Self::Double(value) if value > 0.0 => format!("a positive double value of {value:?}"),
            &Self::Double(_) => "some other double value that I don't want to print".to_owned(),
            &Self::Text(ref value) => format!("a string value of \"{value}\""),
            &Self::Point(x, y) => format!("an (x, y) point at {x:?}, {y:?}"),
            &Self::Media(MediaItem::Movie(ref movie)) => {
                format!("a movie called {}, dir. {}", movie.name, movie.director)
            }
            &Self::Converter(convert) => convert("Michael"),
            &Self::Media(_) => "something else".to_owned(),
        }
    }
}

///
fn greet(name: &str) -> String {
    format!("Hello, {name}")
}

///
#[must_use]
#[inline]
#[allow(clippy::approx_constant)]
pub fn demo_things() -> Vec<Thing> {
    vec![
        Thing::Int(0),
        Thing::Double(0.0),
        Thing::Int(42),
        Thing::Double(3.14159),
        Thing::Text("hello".to_owned()),
        Thing::Point(3.0, 5.0),
        Thing::Media(crate::Movie::new("Ghostbusters", "Ivan Reitman").into()),
        Thing::Converter(greet),
    ]
}
