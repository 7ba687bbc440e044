//! Stream - a non-empty ordered sequence with comonadic extension.
//!
//! `Stream<A>` always holds at least one element (a head plus a
//! possibly-empty tail), so [`Comonad::extract`] is total. Its
//! `extend` views the sequence from every position: the function is
//! applied to each suffix ("tails") in order.
//!
//! The mapping and sequencing operations are inherent methods taking
//! `FnMut`, like the `Vec` extension traits: a multi-element container
//! cannot satisfy the `FnOnce` signatures of `Functor` and `Monad`.
//!
//! # Examples
//!
//! ```rust
//! use lambent::typeclass::{Comonad, Stream};
//!
//! let stream = Stream::from_head_tail(1, vec![2, 3]);
//! let sums = stream.extend(|s| s.iter().sum::<i32>());
//! assert_eq!(sums.to_vec(), vec![6, 5, 3]);
//! ```

use super::comonad::Comonad;
use super::higher::TypeConstructor;

/// A non-empty ordered sequence.
///
/// The head/tail representation makes non-emptiness a structural
/// guarantee rather than a runtime check, which is what allows the
/// total `extract` required by [`Comonad`].
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::Stream;
///
/// let stream = Stream::from_head_tail(1, vec![2, 3]);
/// assert_eq!(stream.len(), 3);
/// assert_eq!(*stream.head(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stream<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> Stream<A> {
    /// Creates a singleton stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Stream;
    ///
    /// let stream = Stream::pure(42);
    /// assert_eq!(stream.to_vec(), vec![42]);
    /// ```
    #[inline]
    pub const fn pure(head: A) -> Self {
        Self { head, tail: Vec::new() }
    }

    /// Creates a stream from a head and a tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Stream;
    ///
    /// let stream = Stream::from_head_tail(1, vec![2, 3]);
    /// assert_eq!(stream.to_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub const fn from_head_tail(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// Creates a stream from a vector, failing on an empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Stream;
    ///
    /// assert!(Stream::from_vec(vec![1, 2]).is_some());
    /// assert!(Stream::<i32>::from_vec(vec![]).is_none());
    /// ```
    pub fn from_vec(elements: Vec<A>) -> Option<Self> {
        let mut iterator = elements.into_iter();
        let head = iterator.next()?;
        Some(Self { head, tail: iterator.collect() })
    }

    /// Returns a reference to the first element.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Returns the elements after the head.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// Returns the number of elements (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`: a stream is non-empty by construction.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over all elements, head first.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Consumes the stream into a plain vector.
    pub fn to_vec(self) -> Vec<A> {
        let mut elements = Vec::with_capacity(1 + self.tail.len());
        elements.push(self.head);
        elements.extend(self.tail);
        elements
    }

    /// Applies a function to every element, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Stream;
    ///
    /// let doubled = Stream::from_head_tail(1, vec![2]).fmap(|x| x * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4]);
    /// ```
    pub fn fmap<B, F>(self, mut function: F) -> Stream<B>
    where
        F: FnMut(A) -> B,
    {
        Stream {
            head: function(self.head),
            tail: self.tail.into_iter().map(function).collect(),
        }
    }

    /// Applies every contained function to every element of `other`.
    ///
    /// The combination is cartesian, in traversal order: all
    /// applications of the first function, then all of the second, and
    /// so on. The result is non-empty because both sides are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Stream;
    ///
    /// let functions: Stream<fn(i32) -> i32> =
    ///     Stream::from_head_tail(|x| x + 1, vec![|x| x * 10]);
    /// let applied = functions.apply(&Stream::from_head_tail(1, vec![2]));
    /// assert_eq!(applied.to_vec(), vec![2, 3, 10, 20]);
    /// ```
    pub fn apply<B, C>(self, other: &Stream<B>) -> Stream<C>
    where
        A: Fn(B) -> C,
        B: Clone,
    {
        let head = (self.head)(other.head.clone());
        let mut tail = Vec::with_capacity(self.len() * other.len() - 1);
        for b in &other.tail {
            tail.push((self.head)(b.clone()));
        }
        for function in &self.tail {
            tail.push(function(other.head.clone()));
            for b in &other.tail {
                tail.push(function(b.clone()));
            }
        }
        Stream { head, tail }
    }

    /// Applies a stream-producing function to every element and
    /// concatenates the results in traversal order.
    ///
    /// Flattens exactly one level; the result is non-empty because
    /// every produced stream is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Stream;
    ///
    /// let result = Stream::from_head_tail(1, vec![2])
    ///     .flat_map(|x| Stream::from_head_tail(x, vec![x * 10]));
    /// assert_eq!(result.to_vec(), vec![1, 10, 2, 20]);
    /// ```
    pub fn flat_map<B, F>(self, mut function: F) -> Stream<B>
    where
        F: FnMut(A) -> Stream<B>,
    {
        let first = function(self.head);
        let mut head_stream_tail = first.tail;
        for element in self.tail {
            let produced = function(element);
            head_stream_tail.push(produced.head);
            head_stream_tail.extend(produced.tail);
        }
        Stream { head: first.head, tail: head_stream_tail }
    }

    /// Returns the suffix starting at `position`.
    ///
    /// Position 0 is the whole stream; positions past the end yield
    /// `None`.
    pub fn suffix(&self, position: usize) -> Option<Self>
    where
        A: Clone,
    {
        if position == 0 {
            Some(self.clone())
        } else {
            let head = self.tail.get(position - 1)?.clone();
            Some(Self { head, tail: self.tail[position..].to_vec() })
        }
    }
}

impl<A> TypeConstructor for Stream<A> {
    type Inner = A;
    type WithType<B> = Stream<B>;
}

impl<A: Clone> Comonad for Stream<A> {
    /// Returns the head of the stream.
    #[inline]
    fn extract(self) -> A {
        self.head
    }

    /// Applies the function to every suffix, head-position first.
    fn extend<B, F>(self, function: F) -> Stream<B>
    where
        F: Fn(&Self) -> B,
        B: 'static,
    {
        let head = function(&self);
        let tail = (1..self.len())
            .filter_map(|position| self.suffix(position))
            .map(|suffix| function(&suffix))
            .collect();
        Stream { head, tail }
    }
}

impl<A> From<A> for Stream<A> {
    fn from(head: A) -> Self {
        Self::pure(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn stream_pure_is_singleton() {
        let stream = Stream::pure(42);
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.to_vec(), vec![42]);
    }

    #[rstest]
    fn stream_from_vec_rejects_empty() {
        assert!(Stream::<i32>::from_vec(vec![]).is_none());
        assert_eq!(Stream::from_vec(vec![1, 2]).map(Stream::to_vec), Some(vec![1, 2]));
    }

    #[rstest]
    fn stream_fmap_preserves_order() {
        let doubled = Stream::from_head_tail(1, vec![2, 3]).fmap(|x| x * 2);
        assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    }

    #[rstest]
    fn stream_apply_is_cartesian() {
        let functions: Stream<fn(i32) -> i32> =
            Stream::from_head_tail(|x| x + 1, vec![|x| x * 10]);
        let applied = functions.apply(&Stream::from_head_tail(1, vec![2]));
        assert_eq!(applied.to_vec(), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn stream_flat_map_flattens_one_level() {
        let result = Stream::from_head_tail(1, vec![2])
            .flat_map(|x| Stream::from_head_tail(x, vec![x * 10]));
        assert_eq!(result.to_vec(), vec![1, 10, 2, 20]);
    }

    #[rstest]
    fn stream_extract_returns_head() {
        let stream = Stream::from_head_tail(7, vec![8, 9]);
        assert_eq!(stream.extract(), 7);
    }

    #[rstest]
    fn stream_extend_maps_over_suffixes() {
        let stream = Stream::from_head_tail(1, vec![2, 3]);
        let sums = stream.extend(|s| s.iter().sum::<i32>());
        assert_eq!(sums.to_vec(), vec![6, 5, 3]);
    }

    #[rstest]
    fn stream_extend_extract_rebuilds_stream() {
        let stream = Stream::from_head_tail(1, vec![2, 3]);
        let rebuilt = stream.clone().extend(|s| s.clone().extract());
        assert_eq!(rebuilt, stream);
    }

    #[rstest]
    fn stream_duplicate_head_is_whole_stream() {
        let stream = Stream::from_head_tail(1, vec![2]);
        let nested = stream.clone().duplicate();
        assert_eq!(nested.extract(), stream);
    }

    #[rstest]
    fn stream_suffix_past_end_is_none() {
        let stream = Stream::from_head_tail(1, vec![2]);
        assert!(stream.suffix(2).is_none());
        assert_eq!(stream.suffix(1).map(Stream::to_vec), Some(vec![2]));
    }
}
