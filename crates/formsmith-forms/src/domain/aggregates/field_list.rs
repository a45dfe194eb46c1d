//! FieldList Aggregate
//!
//! Ordered field collection backing the form builder.
//!
//! # Invariants
//! - No two fields share an id, for the whole lifetime of the list
//! - insert/remove/move never change a field's `id` or `type`
//! - Choice fields (select/radio) keep at least one option once edited
//!   through the option operations
//!
//! Every mutator is all-or-nothing: an `Err` leaves the list untouched.
//! Mutation is addressed by [`FieldId`]; only [`FieldList::move_field`]
//! works on indices.

use std::collections::HashSet;

use crate::domain::aggregates::field::{Field, FieldPatch};
use crate::domain::events::{BuilderEvent, DomainEvent};
use crate::domain::value_objects::{FieldId, FieldType};
use crate::error::{FormsError, Result};

/// Ordered, id-addressed list of fields
#[derive(Clone, Debug, Default)]
pub struct FieldList {
    fields: Vec<Field>,
    events: Vec<DomainEvent>,
}

impl FieldList {
    /// Empty list
    pub fn create() -> Self {
        Self::default()
    }

    /// Adopt fields in the given order, rejecting duplicate ids
    pub fn from_fields(fields: Vec<Field>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(fields.len());
        if let Some(dup) = fields.iter().find(|f| !seen.insert(f.id())) {
            return Err(FormsError::MalformedSchema(format!("duplicate field id {}", dup.id())));
        }
        Ok(Self { fields, events: vec![] })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn fields(&self) -> &[Field] { &self.fields }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn get(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Add a default field of `field_type`.
    ///
    /// Spliced at `at` when it lies in `0..=len`, appended otherwise.
    pub fn insert(&mut self, field_type: FieldType, at: Option<usize>) -> FieldId {
        let field = Field::new(field_type);
        let id = field.id().clone();

        let index = match at {
            Some(i) if i <= self.fields.len() => i,
            _ => self.fields.len(),
        };
        self.fields.insert(index, field);

        tracing::debug!(field_id = %id, %field_type, index, "field added");
        self.raise_event(BuilderEvent::FieldAdded { field_id: id.clone(), field_type, index });
        id
    }

    /// Delete the field with `id`; unknown ids are ignored
    pub fn remove(&mut self, id: &FieldId) -> Option<Field> {
        let index = self.position(id)?;
        let field = self.fields.remove(index);
        self.raise_event(BuilderEvent::FieldRemoved { field_id: id.clone() });
        Some(field)
    }

    /// Merge `patch` into the field with `id`.
    ///
    /// Returns `Ok(false)` when no such field exists. An options change
    /// goes through the same checks as [`FieldList::set_options`].
    pub fn update(&mut self, id: &FieldId, patch: FieldPatch) -> Result<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        if let Some(options) = &patch.options {
            check_options(&self.fields[index], options)?;
        }

        self.fields[index].apply(patch);
        self.raise_event(BuilderEvent::FieldUpdated { field_id: id.clone() });
        Ok(true)
    }

    /// Lift the field at `from` and drop it at `to`, where `to` indexes
    /// the list after the lift: `[A,B,C,D]`, move(0, 2) gives `[B,C,A,D]`.
    pub fn move_field(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.fields.len();
        for index in [from, to] {
            if index >= len {
                return Err(FormsError::OutOfRange { index, len });
            }
        }

        let field = self.fields.remove(from);
        let field_id = field.id().clone();
        self.fields.insert(to, field);

        self.raise_event(BuilderEvent::FieldMoved { field_id, from, to });
        Ok(())
    }

    /// Replace the option list of a choice field
    pub fn set_options(&mut self, id: &FieldId, options: Vec<String>) -> Result<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        check_options(&self.fields[index], &options)?;

        let count = options.len();
        *self.fields[index].options_mut() = options;
        self.raise_event(BuilderEvent::OptionsChanged { field_id: id.clone(), count });
        Ok(true)
    }

    /// Append `"Option N"`, N being the new option count.
    ///
    /// Returns the added option, `None` for an unknown id.
    pub fn add_option(&mut self, id: &FieldId) -> Result<Option<String>> {
        let Some(index) = self.choice_field_index(id)? else {
            return Ok(None);
        };

        let options = self.fields[index].options_mut();
        let option = format!("Option {}", options.len() + 1);
        options.push(option.clone());
        let count = options.len();

        self.raise_event(BuilderEvent::OptionsChanged { field_id: id.clone(), count });
        Ok(Some(option))
    }

    /// Rename one option in place
    pub fn rename_option(&mut self, id: &FieldId, option_index: usize, value: impl Into<String>) -> Result<bool> {
        let Some(index) = self.choice_field_index(id)? else {
            return Ok(false);
        };

        let options = self.fields[index].options_mut();
        let len = options.len();
        let slot = options
            .get_mut(option_index)
            .ok_or(FormsError::OutOfRange { index: option_index, len })?;
        *slot = value.into();

        self.raise_event(BuilderEvent::OptionsChanged { field_id: id.clone(), count: len });
        Ok(true)
    }

    /// Remove one option; the last remaining option cannot be removed.
    ///
    /// Returns the removed option, `None` for an unknown id.
    pub fn remove_option(&mut self, id: &FieldId, option_index: usize) -> Result<Option<String>> {
        let Some(index) = self.choice_field_index(id)? else {
            return Ok(None);
        };

        let options = self.fields[index].options_mut();
        let len = options.len();
        if option_index >= len {
            return Err(FormsError::OutOfRange { index: option_index, len });
        }
        if len <= 1 {
            return Err(FormsError::MinimumOptionsViolation { field_id: id.clone() });
        }
        let removed = options.remove(option_index);

        self.raise_event(BuilderEvent::OptionsChanged { field_id: id.clone(), count: len - 1 });
        Ok(Some(removed))
    }

    // =========================================================================
    // Domain Events
    // =========================================================================

    /// Get and clear accumulated domain events
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: BuilderEvent) {
        self.events.push(event.into());
    }

    fn choice_field_index(&self, id: &FieldId) -> Result<Option<usize>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let field_type = self.fields[index].field_type();
        if !field_type.has_options() {
            return Err(FormsError::OptionsNotSupported { field_type });
        }
        Ok(Some(index))
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn check_options(field: &Field, options: &[String]) -> Result<()> {
    let field_type = field.field_type();
    if !field_type.has_options() {
        return Err(FormsError::OptionsNotSupported { field_type });
    }
    if options.is_empty() {
        return Err(FormsError::MinimumOptionsViolation { field_id: field.id().clone() });
    }
    Ok(())
}
