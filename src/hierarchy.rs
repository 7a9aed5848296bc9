//! Path algorithms over root paths produced by
//! [`WordNet::find_path_to_root`](crate::store::WordNet::find_path_to_root).
//!
//! A root path lists synset ids from a node up to its root, closest first.
//! Every function scans the first path outward from the query node and stops
//! at the first id the second path also contains. With several shared ids
//! this is not symmetric in its arguments; the similarity metrics depend on
//! that exact behaviour.

/// Lowest common subsumer of two root paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lcs<'a> {
    /// Id of the shared ancestor.
    pub id: &'a str,
    /// Number of ids from the ancestor to the root of the first path,
    /// both inclusive.
    pub depth: usize,
}

fn first_shared<A, B>(first: &[A], second: &[B]) -> Option<(usize, usize)>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    first.iter().enumerate().find_map(|(i, id)| {
        second
            .iter()
            .position(|other| other.as_ref() == id.as_ref())
            .map(|j| (i, j))
    })
}

/// Detour distance through the first meeting point: `i + j - 1`, where `i`
/// and `j` are the meeting point's positions in each path.
///
/// `None` when the paths never meet. Two identical paths meet at index 0 and
/// give `-1`.
pub fn find_path_length<A, B>(first: &[A], second: &[B]) -> Option<i64>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let (i, j) = first_shared(first, second)?;
    Some(i as i64 + j as i64 - 1)
}

/// First id of `first` that also occurs in `second`, with its depth.
pub fn find_lcs<'a, A, B>(first: &'a [A], second: &[B]) -> Option<Lcs<'a>>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let (i, _) = first_shared(first, second)?;
    Some(Lcs {
        id: first[i].as_ref(),
        depth: first.len() - i,
    })
}

/// Depth of [`find_lcs`].
pub fn find_lcs_depth<A, B>(first: &[A], second: &[B]) -> Option<usize>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    find_lcs(first, second).map(|lcs| lcs.depth)
}

/// Id of [`find_lcs`].
pub fn find_lcs_id<'a, A, B>(first: &'a [A], second: &[B]) -> Option<&'a str>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    find_lcs(first, second).map(|lcs| lcs.id)
}
