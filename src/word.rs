//! Defines the trait for turning caller keys into symbol sequences.
use std::borrow::Cow;

/// A type that can be viewed as a sequence of symbols of type `S`.
///
/// `Cow` allows for borrowing if the key already is a slice of symbols,
/// or owning (e.g., via `Vec<char>`) if the symbols have to be decoded first.
pub trait Word<S: Clone> {
    /// Returns the symbols of this word in order.
    fn symbols(&self) -> Cow<'_, [S]>;
}

/// Strings are decoded into Unicode scalar values.
///
/// Every call collects a fresh `Vec<char>`. Byte trees keyed by `&[u8]`
/// borrow instead.
impl Word<char> for str {
    fn symbols(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl Word<char> for String {
    fn symbols(&self) -> Cow<'_, [char]> {
        self.as_str().symbols()
    }
}

impl<S: Clone> Word<S> for [S] {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self)
    }
}

impl<S: Clone> Word<S> for Vec<S> {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<S: Clone, const N: usize> Word<S> for [S; N] {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(&self[..])
    }
}

impl<S: Clone, W: Word<S> + ?Sized> Word<S> for &W {
    fn symbols(&self) -> Cow<'_, [S]> {
        (**self).symbols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_symbols() {
        let symbols = "hello".symbols();
        assert_eq!(symbols.as_ref(), &['h', 'e', 'l', 'l', 'o']);
        assert!(matches!(symbols, Cow::Owned(_)));
    }

    #[test]
    fn test_str_symbols_are_scalar_values() {
        // Multi-byte characters are a single symbol each
        let symbols = "né✓".symbols();
        assert_eq!(symbols.as_ref(), &['n', 'é', '✓']);
    }

    #[test]
    fn test_string_symbols() {
        let key = "world".to_string();
        let symbols = key.symbols();
        assert_eq!(symbols.len(), 5);
        assert_eq!(symbols[0], 'w');
    }

    #[test]
    fn test_byte_slice_is_borrowed() {
        let key: &[u8] = b"data";
        let symbols = key.symbols();
        assert_eq!(symbols.as_ref(), b"data");
        assert!(matches!(symbols, Cow::Borrowed(_)));
    }

    #[test]
    fn test_vec_and_array_are_borrowed() {
        let key = vec![1u32, 2, 3];
        assert!(matches!(key.symbols(), Cow::Borrowed(_)));

        let array = [10u8, 20, 30];
        assert_eq!(array.symbols().as_ref(), &[10, 20, 30]);
        assert!(matches!(array.symbols(), Cow::Borrowed(_)));
    }

    // Custom symbol type ordered by its own Ord
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    enum Base {
        A,
        C,
        G,
        T,
    }

    #[test]
    fn test_custom_symbols() {
        let strand = [Base::G, Base::A, Base::T, Base::C];
        assert_eq!(strand.symbols()[2], Base::T);
    }
}
