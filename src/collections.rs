//! Human-readable rendering of sequences, e.g. `['First', 3]`.

use std::borrow::Cow;
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

use crate::consts::NULL;
use crate::dates::Timestamp;

/// How one element is written inside a formatted sequence.
///
/// Text renders in single quotes, everything else in its natural form.
/// The trait is object safe, so mixed sequences can be written as
/// `&[&dyn FormatItem]`.
pub trait FormatItem {
    fn format_item(&self) -> String;
}

macro_rules! impl_bare {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FormatItem for $ty {
                fn format_item(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_bare!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    Timestamp,
);

impl FormatItem for str {
    fn format_item(&self) -> String {
        format!("'{self}'")
    }
}

impl FormatItem for String {
    fn format_item(&self) -> String {
        self.as_str().format_item()
    }
}

impl FormatItem for Cow<'_, str> {
    fn format_item(&self) -> String {
        self.as_ref().format_item()
    }
}

impl<T: FormatItem + ?Sized> FormatItem for &T {
    fn format_item(&self) -> String {
        (**self).format_item()
    }
}

impl<T: FormatItem + ?Sized> FormatItem for Box<T> {
    fn format_item(&self) -> String {
        (**self).format_item()
    }
}

impl<T: FormatItem + ?Sized> FormatItem for Rc<T> {
    fn format_item(&self) -> String {
        (**self).format_item()
    }
}

impl<T: FormatItem + ?Sized> FormatItem for Arc<T> {
    fn format_item(&self) -> String {
        (**self).format_item()
    }
}

impl<T: FormatItem> FormatItem for Option<T> {
    fn format_item(&self) -> String {
        match self {
            Some(item) => item.format_item(),
            None => NULL.to_string(),
        }
    }
}

/// Renders any `Display` value unquoted.
#[derive(Debug, Clone, Copy)]
pub struct Plain<T>(pub T);

impl<T: Display> FormatItem for Plain<T> {
    fn format_item(&self) -> String {
        self.0.to_string()
    }
}

/// Renders any `Display` value in single quotes.
#[derive(Debug, Clone, Copy)]
pub struct Quoted<T>(pub T);

impl<T: Display> FormatItem for Quoted<T> {
    fn format_item(&self) -> String {
        format!("'{}'", self.0)
    }
}

/// Formats `items` as `[a, b, ...]` in iteration order.
///
/// Returns `None` for an absent sequence and `"[]"` for an empty one.
pub fn format<I>(items: Option<I>) -> Option<String>
where
    I: IntoIterator,
    I::Item: FormatItem,
{
    let rendered: Vec<String> = items?
        .into_iter()
        .map(|item| item.format_item())
        .collect();
    Some(format!("[{}]", rendered.join(", ")))
}
