//! Generic placeholder
//!
//! What the decoder produces for an attribute type the type registry does not know. It has no
//! typed fields: every field of the node, offsets included, is kept verbatim in the extended
//! properties so the node can be written back exactly as it was read. [`GenericAttribute::span`]
//! reads the offsets back out of those properties when they form a valid span.

use crate::codec::fields::{FieldReader, FieldWriter, END_OFFSET, START_OFFSET};
use crate::model::attribute::Attribute;
use crate::model::{ExtendedProperties, Span};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenericAttribute {
    extended: ExtendedProperties,
}

impl GenericAttribute {
    pub fn new(extended: ExtendedProperties) -> Self {
        Self { extended }
    }

    /// Span from `startOffset`/`endOffset`, if both are present and valid
    pub fn span(&self) -> Option<Span> {
        let start = self.extended.get(START_OFFSET)?.as_u64()?;
        let end = self.extended.get(END_OFFSET)?.as_u64()?;
        Span::new(usize::try_from(start).ok()?, usize::try_from(end).ok()?).ok()
    }

    pub fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter) {
        out.extended(&self.extended);
    }

    pub(crate) fn read_fields(reader: &mut FieldReader) -> Self {
        Self::new(reader.rest())
    }
}

impl From<GenericAttribute> for Attribute {
    fn from(generic: GenericAttribute) -> Self {
        Attribute::Generic(generic)
    }
}
