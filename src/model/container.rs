//! Containers
//!
//! A [`Container`] is what an [`AnnotatedText`](super::AnnotatedText) stores under each
//! attribute key: either exactly one attribute ([`Cardinality::Single`]) or an ordered list of
//! attributes of one kind ([`Cardinality::List`]). List containers carry their own extended
//! properties, written next to `type`/`itemType`/`items` in the interchange format.
//!
//! Containers never reorder or deduplicate. A list may be empty; it is then encoded as an empty
//! `items` sequence, not left out.
//!
//! The container remembers the name of the kind it holds (`item_type_name`) because that name is
//! written as the discriminator on encode. For placeholders it is the name found in the
//! document. The name is metadata and takes no part in equality.
//!
//! A node may arrive without its discriminator (`type` on a single node, `itemType` on a list),
//! in which case the decoder files it under the attribute key. Such a container is marked as
//! having an implicit type and the encoder leaves the discriminator out again.

use super::attribute::{Attribute, AttributeKind, Cardinality, LIST_TYPE, TYPE_KEY};
use super::properties::ExtendedProperties;
use crate::error::{Error, Result};
use serde_json::Value;

pub const ITEM_TYPE_KEY: &str = "itemType";
pub const ITEMS_KEY: &str = "items";

/// Keys a list container writes itself
pub const LIST_FIELDS: &[&str] = &[TYPE_KEY, ITEM_TYPE_KEY, ITEMS_KEY];

/// A single attribute or an ordered, same-kind list of attributes
#[derive(Debug, Clone)]
pub struct Container {
    item_type: String,
    cardinality: Cardinality,
    items: Vec<Attribute>,
    extended: ExtendedProperties,
    implicit_type: bool,
}

impl Container {
    /// Wrap one value of a known kind
    pub fn single<T: AttributeKind>(item: T) -> Self {
        Self {
            item_type: T::TYPE_NAME.to_string(),
            cardinality: Cardinality::Single,
            items: vec![item.into()],
            extended: ExtendedProperties::new(),
            implicit_type: false,
        }
    }

    /// Wrap an ordered list of values of a known kind
    pub fn list<T: AttributeKind>(items: Vec<T>) -> Self {
        Self {
            item_type: T::TYPE_NAME.to_string(),
            cardinality: Cardinality::List,
            items: items.into_iter().map(Into::into).collect(),
            extended: ExtendedProperties::new(),
            implicit_type: false,
        }
    }

    pub fn list_builder<T: AttributeKind>() -> ListBuilder<T> {
        ListBuilder::new()
    }

    /// Wrap a type-erased value under the given kind name.
    ///
    /// Fails when the value is of a known kind whose name differs from `item_type`.
    pub fn wrap_single(item_type: impl Into<String>, item: Attribute) -> Result<Self> {
        let item_type = item_type.into();
        check_item_name(&item_type, &item)?;
        Ok(Self {
            item_type,
            cardinality: Cardinality::Single,
            items: vec![item],
            extended: ExtendedProperties::new(),
            implicit_type: false,
        })
    }

    /// Wrap type-erased values under the given kind name.
    ///
    /// Every item must be the same kind, and known kinds must match `item_type`.
    pub fn wrap_list(
        item_type: impl Into<String>,
        items: Vec<Attribute>,
        extended: ExtendedProperties,
    ) -> Result<Self> {
        let item_type = item_type.into();
        if let Some(first) = items.first() {
            for item in &items {
                if !item.same_kind(first) {
                    return Err(Error::invalid_attribute(
                        &item_type,
                        format!("list mixes {} and {}", first, item),
                    ));
                }
                check_item_name(&item_type, item)?;
            }
        }
        check_list_extended(&item_type, &extended)?;
        Ok(Self {
            item_type,
            cardinality: Cardinality::List,
            items,
            extended,
            implicit_type: false,
        })
    }

    /// A single node as the decoder found it. `implicit_type` is set when the node had no
    /// `type` and `item_type` is the attribute key; only then may the name be `list`.
    pub(crate) fn decoded_single(item_type: String, implicit_type: bool, item: Attribute) -> Self {
        debug_assert!(implicit_type || item_type != LIST_TYPE);
        Self {
            item_type,
            cardinality: Cardinality::Single,
            items: vec![item],
            extended: ExtendedProperties::new(),
            implicit_type,
        }
    }

    /// A list node as the decoder found it. `implicit_type` is set when it had no `itemType`.
    pub(crate) fn decoded_list(
        item_type: String,
        implicit_type: bool,
        items: Vec<Attribute>,
        extended: ExtendedProperties,
    ) -> Self {
        Self {
            item_type,
            cardinality: Cardinality::List,
            items,
            extended,
            implicit_type,
        }
    }

    /// Append to a list container. Only document builders call this, before the document is
    /// finalized.
    pub(crate) fn push(&mut self, item: Attribute) {
        debug_assert_eq!(self.cardinality, Cardinality::List);
        self.items.push(item);
    }

    pub fn kind(&self) -> Cardinality {
        self.cardinality
    }

    pub fn item_type_name(&self) -> &str {
        &self.item_type
    }

    /// True when the kind name came from the attribute key rather than from the document
    pub fn has_implicit_type(&self) -> bool {
        self.implicit_type
    }

    /// Items in order; a single container yields one item
    pub fn items(&self) -> &[Attribute] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.items.get(index)
    }

    /// The value of a single container
    pub fn single_item(&self) -> Option<&Attribute> {
        match self.cardinality {
            Cardinality::Single => self.items.first(),
            Cardinality::List => None,
        }
    }

    pub fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    /// All items as `T`, or `None` if the container holds anything else (including
    /// placeholders for a kind the decoder did not know).
    pub fn typed<T: AttributeKind>(&self) -> Option<Vec<&T>> {
        if self.item_type != T::TYPE_NAME {
            return None;
        }
        self.items.iter().map(T::from_attribute).collect()
    }

    /// True when the decoder could not map the items to a known kind
    pub fn is_generic(&self) -> bool {
        self.items.first().map_or(false, Attribute::is_generic)
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.cardinality == other.cardinality
            && self.items == other.items
            && self.extended == other.extended
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Accumulates a list container of one known kind
#[derive(Debug, Clone)]
pub struct ListBuilder<T: AttributeKind> {
    items: Vec<T>,
    extended: ExtendedProperties,
}

impl<T: AttributeKind> ListBuilder<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            extended: ExtendedProperties::new(),
        }
    }

    #[must_use]
    pub fn add(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }

    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<Container> {
        check_list_extended(T::TYPE_NAME, &self.extended)?;
        Ok(Container {
            item_type: T::TYPE_NAME.to_string(),
            cardinality: Cardinality::List,
            items: self.items.into_iter().map(Into::into).collect(),
            extended: self.extended,
            implicit_type: false,
        })
    }
}

impl<T: AttributeKind> Default for ListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_item_name(item_type: &str, item: &Attribute) -> Result<()> {
    if item_type == LIST_TYPE {
        return Err(Error::invalid_attribute(
            item_type,
            "'list' is reserved for list containers",
        ));
    }
    match item.type_name() {
        Some(name) if name != item_type => Err(Error::invalid_attribute(
            item_type,
            format!("container declared as '{}' holds a {}", item_type, name),
        )),
        _ => Ok(()),
    }
}

fn check_list_extended(item_type: &str, extended: &ExtendedProperties) -> Result<()> {
    match extended.keys().find(|key| LIST_FIELDS.contains(key)) {
        Some(key) => Err(Error::invalid_attribute(
            item_type,
            format!("container property '{}' is reserved", key),
        )),
        None => Ok(()),
    }
}
