use std::fmt;
use std::hash::Hash;

/// A closed, ordered set of personality attribute labels.
///
/// Implementors are small fieldless enums declared by the embedding
/// application. `ALL` lists every label exactly once in canonical order,
/// and `index` maps each label to a dense index in [0, COUNT). The mapping
/// must be a bijection; `validate_indexing` checks that once per type.
pub trait Attribute: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Number of labels in the set.
    const COUNT: usize;

    /// Every label exactly once, in canonical order.
    const ALL: &'static [Self];

    /// Dense index of this label, in [0, COUNT).
    fn index(self) -> usize;

    /// Static display name, used by `Personality`'s textual form.
    fn label(self) -> &'static str;
}

/// Defect in an `Attribute` impl's label → index mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexingError {
    /// `ALL.len()` disagrees with `COUNT`.
    CountMismatch { listed: usize, count: usize },
    /// A label's index falls outside [0, COUNT).
    OutOfRange {
        label: &'static str,
        index: usize,
        count: usize,
    },
    /// Two labels share one index.
    DuplicateIndex {
        first: &'static str,
        second: &'static str,
        index: usize,
    },
}

impl fmt::Display for IndexingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexingError::CountMismatch { listed, count } => {
                write!(f, "ALL lists {listed} labels but COUNT is {count}")
            }
            IndexingError::OutOfRange {
                label,
                index,
                count,
            } => {
                write!(f, "{label} maps to index {index}, outside [0, {count})")
            }
            IndexingError::DuplicateIndex {
                first,
                second,
                index,
            } => {
                write!(f, "{first} and {second} both map to index {index}")
            }
        }
    }
}

impl std::error::Error for IndexingError {}

/// Check that an `Attribute` impl is a bijection onto [0, COUNT): every
/// index in range, no duplicates, no gaps. Run once per attribute type,
/// typically from a test or a startup assertion.
pub fn validate_indexing<A: Attribute>() -> Result<(), IndexingError> {
    if A::ALL.len() != A::COUNT {
        return Err(IndexingError::CountMismatch {
            listed: A::ALL.len(),
            count: A::COUNT,
        });
    }

    let mut seen: Vec<Option<&'static str>> = vec![None; A::COUNT];
    for &attr in A::ALL {
        let index = attr.index();
        if index >= A::COUNT {
            return Err(IndexingError::OutOfRange {
                label: attr.label(),
                index,
                count: A::COUNT,
            });
        }
        if let Some(first) = seen[index] {
            return Err(IndexingError::DuplicateIndex {
                first,
                second: attr.label(),
                index,
            });
        }
        seen[index] = Some(attr.label());
    }

    // len == COUNT with no out-of-range or duplicate indices leaves no gaps
    Ok(())
}
