//! Closed sets of named variants that also answer to aliases.

use core::borrow::Borrow;

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use crate::{Error, Result};

/// The definition of a single variant, consumed by [`AliasEnum::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantDef<K, M = ()> {
    pub name: K,
    pub aliases: Vec<K>,
    pub meta: M,
}

impl<K> VariantDef<K> {
    pub fn new(name: K) -> Self {
        VariantDef {
            name,
            aliases: Vec::new(),
            meta: (),
        }
    }
}

impl<K, M> VariantDef<K, M> {
    pub fn with_aliases<I: IntoIterator<Item = K>>(mut self, aliases: I) -> Self {
        self.aliases.extend(aliases);
        self
    }

    pub fn with_meta<N>(self, meta: N) -> VariantDef<K, N> {
        VariantDef {
            name: self.name,
            aliases: self.aliases,
            meta,
        }
    }
}

/// A variant of an [`AliasEnum`].
///
/// A variant compares equal to a key if the key is its primary name or one of its aliases.
#[derive(Clone, Debug)]
pub struct Variant<K, M = ()> {
    name: K,
    aliases: BTreeSet<K>,
    meta: M,
}

impl<K: Ord, M> Variant<K, M> {
    pub fn name(&self) -> &K {
        &self.name
    }

    pub fn aliases(&self) -> &BTreeSet<K> {
        &self.aliases
    }

    pub fn meta(&self) -> &M {
        &self.meta
    }

    /// Checks whether `key` is the name or one of the aliases of this variant.
    pub fn matches<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Borrow::<Q>::borrow(&self.name) == key || self.aliases.contains(key)
    }
}

impl<K: Ord, M> PartialEq<K> for Variant<K, M> {
    fn eq(&self, other: &K) -> bool {
        self.matches(other)
    }
}

/// A closed set of variants, each reachable through its name or any of its aliases.
///
/// ```rust
/// # use cyclic::{AliasEnum, VariantDef};
/// let colors = AliasEnum::new([
///     VariantDef::new("red").with_aliases(["r", "crimson"]).with_meta(0xff0000),
///     VariantDef::new("green").with_aliases(["g"]).with_meta(0x00ff00),
/// ])
/// .unwrap();
///
/// let red = colors.parse(&"crimson").unwrap();
/// assert_eq!(red.name(), &"red");
/// assert_eq!(*red.meta(), 0xff0000);
/// assert!(*red == "r");
/// ```
#[derive(Clone, Debug)]
pub struct AliasEnum<K, M = ()> {
    variants: Vec<Variant<K, M>>,
    // every name and alias, pointing into `variants`
    keys: BTreeMap<K, usize>,
}

impl<K: Ord + Clone, M> AliasEnum<K, M> {
    /// Builds the set from its variant definitions, in order.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if a name or alias would refer to more than one variant. Repeating
    /// a key within the same variant is allowed.
    pub fn new<I: IntoIterator<Item = VariantDef<K, M>>>(defs: I) -> Result<Self> {
        let mut variants = Vec::new();
        let mut keys = BTreeMap::new();

        for (idx, def) in defs.into_iter().enumerate() {
            let aliases: BTreeSet<K> = def.aliases.into_iter().collect();
            for key in core::iter::once(&def.name).chain(&aliases) {
                match keys.get(key) {
                    Some(&owner) if owner != idx => return Err(Error::DuplicateKey),
                    Some(_) => {}
                    None => {
                        keys.insert(key.clone(), idx);
                    }
                }
            }
            variants.push(Variant {
                name: def.name,
                aliases,
                meta: def.meta,
            });
        }

        Ok(AliasEnum { variants, keys })
    }

    /// Looks up the variant named or aliased by `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&Variant<K, M>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.keys.get(key).map(|&idx| &self.variants[idx])
    }

    /// Like [`AliasEnum::get`], but fails with [`Error::UnknownKey`] instead of returning `None`.
    pub fn parse<Q>(&self, key: &Q) -> Result<&Variant<K, M>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(Error::UnknownKey)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The variants in definition order.
    pub fn iter(&self) -> core::slice::Iter<'_, Variant<K, M>> {
        self.variants.iter()
    }
}
