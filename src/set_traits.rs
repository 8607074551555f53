//! Standard trait implementations that both trees provide identically.
//!
//! A tree compares, hashes and prints as the ordered sequence of its keys; two trees holding the
//! same keys are equal whatever their shapes.

macro_rules! impl_set_traits {
    ($tree:ident) => {
        impl<K: core::hash::Hash, C, A> core::hash::Hash for $tree<K, C, A> {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                state.write_usize(self.len());
                for key in self {
                    key.hash(state);
                }
            }
        }

        impl<K: PartialEq, C, A> PartialEq for $tree<K, C, A> {
            fn eq(&self, other: &Self) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<K: Eq, C, A> Eq for $tree<K, C, A> {}

        impl<K: PartialOrd, C, A> PartialOrd for $tree<K, C, A> {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.iter().partial_cmp(other.iter())
            }
        }

        impl<K: Ord, C, A> Ord for $tree<K, C, A> {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.iter().cmp(other.iter())
            }
        }

        impl<K: Clone, C: Clone, A: crate::augment::Augment> Clone for $tree<K, C, A> {
            /// Rebuilds an independent, balanced copy of the node graph.
            fn clone(&self) -> Self {
                Self {
                    raw: self.raw.clone(),
                    cmp: self.cmp.clone(),
                }
            }
        }

        impl<K: core::fmt::Debug, C, A> core::fmt::Debug for $tree<K, C, A> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl<K, C: Default, A> Default for $tree<K, C, A> {
            fn default() -> Self {
                Self::with_comparator(C::default())
            }
        }

        impl<K, C: crate::compare::Compare<K> + Default, A: crate::augment::Augment> FromIterator<K>
            for $tree<K, C, A>
        {
            fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
                let mut tree = Self::default();
                tree.extend(iter);
                tree
            }
        }

        impl<K, C: crate::compare::Compare<K>, A: crate::augment::Augment> Extend<K> for $tree<K, C, A> {
            fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
                for key in iter {
                    self.insert(key);
                }
            }
        }

        impl<'a, K: 'a + Copy, C: crate::compare::Compare<K>, A: crate::augment::Augment> Extend<&'a K>
            for $tree<K, C, A>
        {
            fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
                for &key in iter {
                    self.insert(key);
                }
            }
        }

        impl<K, C: crate::compare::Compare<K> + Default, A: crate::augment::Augment, const N: usize> From<[K; N]>
            for $tree<K, C, A>
        {
            fn from(keys: [K; N]) -> Self {
                keys.into_iter().collect()
            }
        }

        impl<K, C, A: crate::augment::Augment> IntoIterator for $tree<K, C, A> {
            type Item = K;
            type IntoIter = crate::iter::IntoIter<K>;

            /// Moves the keys out in ascending order.
            fn into_iter(mut self) -> crate::iter::IntoIter<K> {
                crate::iter::IntoIter::new(self.raw.take_all())
            }
        }

        impl<'a, K, C, A> IntoIterator for &'a $tree<K, C, A> {
            type Item = &'a K;
            type IntoIter = crate::iter::Iter<'a, K, A>;

            fn into_iter(self) -> crate::iter::Iter<'a, K, A> {
                self.iter()
            }
        }
    };
}
