use crate::outcome::core::Outcome;

/// Borrowing iterator over the success value (zero or one item).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over the success value (zero or one item).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the success value (zero or one item).
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.to_option() }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(4);
    /// assert_eq!(o.iter().copied().sum::<i32>(), 4);
    ///
    /// let f = Outcome::<i32, &str>::failure("nope");
    /// assert_eq!(f.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Outcome::Success(value) => Iter { inner: Some(value) },
            Outcome::Failure(_) => Iter { inner: None },
        }
    }

    /// Mutably iterates over the success value, if any.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Outcome::Success(value) => IterMut { inner: Some(value) },
            Outcome::Failure(_) => IterMut { inner: None },
        }
    }
}

/// Collects an iterator of outcomes, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::success(vec![1, 2]));
///
/// let first_bad: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_bad, Outcome::failure("a"));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}
