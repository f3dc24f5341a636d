use strum::IntoEnumIterator;

/// A category the app sends as a human-readable label and that is stored as
/// the label's position in its list.
pub trait Label: IntoEnumIterator + Into<&'static str> + Copy + PartialEq {
    fn label(self) -> &'static str {
        self.into()
    }

    fn labels() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|x| Into::<&'static str>::into(*x) == label)
    }

    fn from_index(index: i16) -> Option<Self> {
        let index = usize::try_from(index).ok()?;
        Self::iter().nth(index)
    }

    fn index(self) -> i16 {
        Self::iter().position(|x| x == self).unwrap_or_default() as i16
    }
}

impl<T> Label for T where
    T: IntoEnumIterator + Into<&'static str> + Copy + PartialEq
{
}

/// Resolves every known label and drops the rest.
pub fn resolve_all<T: Label>(labels: &[String]) -> Vec<T> {
    labels.iter().filter_map(|x| T::from_label(x)).collect()
}
