//! Bindable fields and the `Options` trait
//!
//! Every bindable type lists its fields as [`OptionField`]s. A field pairs an
//! [`OptionDescriptor`] with a slot: plain accessor functions into the owning
//! struct plus the value type, so binding needs no reflection.

use crate::{
    BindError, BindResult, Binder, CollectionKind, Element, OptionDescriptor, Repeated, Shape,
    TypeKey, matcher, validate,
};
use regex::Regex;
use std::any::{Any, type_name};

/// A configuration type the engine can bind
///
/// Usually derived with `#[derive(Options)]`; a hand-written impl lists its
/// fields in declaration order, which is also match precedence.
///
/// # Example
///
/// ```
/// use argbind_core::{OptionDescriptor, OptionField, Options};
///
/// #[derive(Default)]
/// struct Mapping {
///     namespace: Option<String>,
///     tags: Vec<String>,
/// }
///
/// impl Options for Mapping {
///     fn option_fields() -> Vec<OptionField<Self>> {
///         vec![
///             OptionField::single(
///                 OptionDescriptor::new("ns").with_required(true),
///                 |m| &m.namespace,
///                 |m| &mut m.namespace,
///             ),
///             OptionField::collection(OptionDescriptor::new("tag"), |m| &m.tags, |m| &mut m.tags),
///         ]
///     }
/// }
/// ```
pub trait Options: Default + 'static {
    /// Declared option fields, in declaration order
    fn option_fields() -> Vec<OptionField<Self>>;

    /// Struct-level descriptor naming the flag that opens this configuration
    fn root() -> Option<OptionDescriptor> {
        None
    }
}

/// Static description of one field, used for usage text
#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub descriptor: OptionDescriptor,
    pub shape: Shape,
    pub element: Element,
    /// Declared value type; the element type for collections
    pub value_type: TypeKey,
    /// Fields of the composite value or element type
    pub nested: Option<fn() -> Vec<FieldInfo>>,
}

/// Describe the fields of a bindable type
pub fn describe<T: Options>() -> Vec<FieldInfo> {
    T::option_fields().iter().map(OptionField::info).collect()
}

/// One declared option of `T`
pub struct OptionField<T> {
    descriptor: OptionDescriptor,
    slot: Box<dyn Slot<T>>,
}

impl<T: 'static> OptionField<T> {
    /// A plain `bool` switched on by the bare flag
    pub fn flag(descriptor: OptionDescriptor, get_mut: fn(&mut T) -> &mut bool) -> Self {
        Self::with_slot(descriptor, FlagSlot { get_mut })
    }

    /// An optional scalar value converted by the parser registry
    pub fn single<V: 'static>(
        descriptor: OptionDescriptor,
        get: fn(&T) -> &Option<V>,
        get_mut: fn(&mut T) -> &mut Option<V>,
    ) -> Self {
        Self::with_slot(
            descriptor,
            SingleSlot {
                get,
                get_mut,
                composite: None,
            },
        )
    }

    /// An optional composite value with options of its own
    pub fn nested<U: Options>(
        descriptor: OptionDescriptor,
        get: fn(&T) -> &Option<U>,
        get_mut: fn(&mut T) -> &mut Option<U>,
    ) -> Self {
        Self::with_slot(
            descriptor,
            SingleSlot {
                get,
                get_mut,
                composite: Some(Composite::<U>::of()),
            },
        )
    }

    /// A repeatable scalar option accumulated into `C`
    pub fn collection<C: Repeated>(
        descriptor: OptionDescriptor,
        get: fn(&T) -> &C,
        get_mut: fn(&mut T) -> &mut C,
    ) -> Self {
        Self::with_slot(
            descriptor,
            CollectionSlot {
                get,
                get_mut,
                composite: None,
            },
        )
    }

    /// A repeatable composite option; the flag is re-stated per element
    pub fn nested_collection<C>(
        descriptor: OptionDescriptor,
        get: fn(&T) -> &C,
        get_mut: fn(&mut T) -> &mut C,
    ) -> Self
    where
        C: Repeated,
        C::Element: Options,
    {
        Self::with_slot(
            descriptor,
            CollectionSlot {
                get,
                get_mut,
                composite: Some(Composite::<C::Element>::of()),
            },
        )
    }

    /// A field whose shape can never be an option target
    pub fn invalid(descriptor: OptionDescriptor, reason: impl Into<String>) -> Self {
        Self::with_slot(descriptor, RejectedSlot::Invalid(reason.into()))
    }

    /// A collection field whose container type cannot be built
    pub fn unsupported_collection(
        descriptor: OptionDescriptor,
        type_name: impl Into<String>,
    ) -> Self {
        Self::with_slot(descriptor, RejectedSlot::Unsupported(type_name.into()))
    }

    fn with_slot(descriptor: OptionDescriptor, slot: impl Slot<T> + 'static) -> Self {
        Self {
            descriptor,
            slot: Box::new(slot),
        }
    }

    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    pub fn shape(&self) -> Shape {
        self.slot.shape()
    }

    pub fn info(&self) -> FieldInfo {
        FieldInfo {
            descriptor: self.descriptor.clone(),
            shape: self.slot.shape(),
            element: if self.slot.nested().is_some() {
                Element::Composite
            } else {
                Element::Scalar
            },
            value_type: self.slot.value_type(),
            nested: self.slot.nested(),
        }
    }

    pub(crate) fn check(&self) -> BindResult<()> {
        self.slot.check(&self.descriptor, type_name::<T>())
    }

    pub(crate) fn is_empty(&self, target: &T) -> bool {
        self.slot.is_empty(target)
    }

    pub(crate) fn bind_flag(
        &self,
        binder: &Binder,
        target: &mut T,
        args: &[&str],
        at: usize,
    ) -> BindResult<usize> {
        let cx = SlotContext {
            binder,
            descriptor: &self.descriptor,
            owner: type_name::<T>(),
        };
        self.slot.bind_flag(&cx, target, args, at)
    }

    pub(crate) fn bind_text(
        &self,
        binder: &Binder,
        target: &mut T,
        text: &str,
        pattern: &Regex,
        args: &[&str],
        at: usize,
    ) -> BindResult<usize> {
        let cx = SlotContext {
            binder,
            descriptor: &self.descriptor,
            owner: type_name::<T>(),
        };
        self.slot.bind_text(&cx, target, text, pattern, args, at)
    }

    pub(crate) fn apply_default(&self, binder: &Binder, target: &mut T, text: &str) -> BindResult<()> {
        let cx = SlotContext {
            binder,
            descriptor: &self.descriptor,
            owner: type_name::<T>(),
        };
        self.slot.apply_default(&cx, target, text)
    }
}

impl<T> std::fmt::Debug for OptionField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionField")
            .field("descriptor", &self.descriptor)
            .field("shape", &self.slot.shape())
            .field("value_type", &self.slot.value_type().name())
            .finish()
    }
}

struct SlotContext<'a> {
    binder: &'a Binder,
    descriptor: &'a OptionDescriptor,
    owner: &'static str,
}

impl SlotContext<'_> {
    fn parse<V: Any>(&self, text: &str) -> BindResult<V> {
        self.binder.registry().parse::<V>(self.descriptor, text)
    }

    fn can_parse<V: Any>(&self) -> bool {
        self.binder
            .registry()
            .can_parse(self.descriptor, TypeKey::of::<V>())
    }

    fn missing_value(&self) -> BindError {
        BindError::MissingValue {
            option: self.descriptor.signature(),
            owner: self.owner,
        }
    }

    /// A composite flag that bound nothing is only an error when nothing
    /// else can supply the value later.
    fn require_value(&self) -> BindResult<()> {
        if self.descriptor.required && self.descriptor.default_value.is_none() {
            Err(self.missing_value())
        } else {
            Ok(())
        }
    }
}

/// Recursion entry points for a composite value type
struct Composite<U> {
    new: fn() -> U,
    bind: fn(&Binder, &mut U, &[&str], usize) -> BindResult<usize>,
    validate: fn(&Binder, &mut U) -> BindResult<()>,
    describe: fn() -> Vec<FieldInfo>,
}

impl<U: Options> Composite<U> {
    fn of() -> Self {
        Self {
            new: U::default,
            bind: matcher::bind_object::<U>,
            validate: validate::apply_defaults::<U>,
            describe: describe::<U>,
        }
    }
}

impl<U> Composite<U> {
    /// Construct a fresh value and bind it from the token after `at`
    fn construct(&self, binder: &Binder, args: &[&str], at: usize) -> BindResult<(U, usize)> {
        let mut value = (self.new)();
        let consumed = (self.bind)(binder, &mut value, args, at + 1)?;
        if consumed > 0 {
            (self.validate)(binder, &mut value)?;
        }
        Ok((value, consumed))
    }
}

trait Slot<T> {
    fn shape(&self) -> Shape;

    fn value_type(&self) -> TypeKey;

    fn nested(&self) -> Option<fn() -> Vec<FieldInfo>> {
        None
    }

    fn check(&self, _descriptor: &OptionDescriptor, _owner: &'static str) -> BindResult<()> {
        Ok(())
    }

    fn is_empty(&self, target: &T) -> bool;

    /// Handle `token == signature`; returns tokens consumed after the flag
    fn bind_flag(
        &self,
        cx: &SlotContext<'_>,
        target: &mut T,
        args: &[&str],
        at: usize,
    ) -> BindResult<usize>;

    /// Handle `signature <delimiter> text`; returns tokens consumed after `at`
    fn bind_text(
        &self,
        cx: &SlotContext<'_>,
        target: &mut T,
        text: &str,
        pattern: &Regex,
        args: &[&str],
        at: usize,
    ) -> BindResult<usize>;

    fn apply_default(&self, cx: &SlotContext<'_>, target: &mut T, text: &str) -> BindResult<()>;
}

struct FlagSlot<T> {
    get_mut: fn(&mut T) -> &mut bool,
}

impl<T> Slot<T> for FlagSlot<T> {
    fn shape(&self) -> Shape {
        Shape::Flag
    }

    fn value_type(&self) -> TypeKey {
        TypeKey::of::<bool>()
    }

    fn check(&self, descriptor: &OptionDescriptor, owner: &'static str) -> BindResult<()> {
        if descriptor.required || descriptor.default_value.is_some() {
            return Err(BindError::InvalidDescriptor {
                option: descriptor.signature(),
                owner,
                reason: "a plain bool flag is never unset; declare Option<bool> to use required or default"
                    .to_string(),
            });
        }
        Ok(())
    }

    fn is_empty(&self, _: &T) -> bool {
        // Always holds a value, like a primitive field.
        false
    }

    fn bind_flag(&self, _cx: &SlotContext<'_>, target: &mut T, _: &[&str], _: usize) -> BindResult<usize> {
        *(self.get_mut)(target) = true;
        Ok(0)
    }

    fn bind_text(
        &self,
        cx: &SlotContext<'_>,
        target: &mut T,
        text: &str,
        _: &Regex,
        _: &[&str],
        _: usize,
    ) -> BindResult<usize> {
        *(self.get_mut)(target) = cx.parse::<bool>(text)?;
        Ok(0)
    }

    fn apply_default(&self, cx: &SlotContext<'_>, target: &mut T, text: &str) -> BindResult<()> {
        *(self.get_mut)(target) = cx.parse::<bool>(text)?;
        Ok(())
    }
}

struct SingleSlot<T, V> {
    get: fn(&T) -> &Option<V>,
    get_mut: fn(&mut T) -> &mut Option<V>,
    composite: Option<Composite<V>>,
}

impl<T, V: 'static> SingleSlot<T, V> {
    fn finish(&self, cx: &SlotContext<'_>, value: &mut V) -> BindResult<()> {
        match &self.composite {
            Some(composite) => (composite.validate)(cx.binder, value),
            None => Ok(()),
        }
    }
}

impl<T, V: 'static> Slot<T> for SingleSlot<T, V> {
    fn shape(&self) -> Shape {
        Shape::Single
    }

    fn value_type(&self) -> TypeKey {
        TypeKey::of::<V>()
    }

    fn nested(&self) -> Option<fn() -> Vec<FieldInfo>> {
        self.composite.as_ref().map(|composite| composite.describe)
    }

    fn is_empty(&self, target: &T) -> bool {
        (self.get)(target).is_none()
    }

    fn bind_flag(
        &self,
        cx: &SlotContext<'_>,
        target: &mut T,
        args: &[&str],
        at: usize,
    ) -> BindResult<usize> {
        let Some(composite) = &self.composite else {
            // `Option<bool>` behaves like a flag; every other scalar needs a value.
            let mut switched_on = Some(true);
            return match (&mut switched_on as &mut dyn Any).downcast_mut::<Option<V>>() {
                Some(value) => {
                    *(self.get_mut)(target) = value.take();
                    Ok(0)
                }
                None => Err(cx.missing_value()),
            };
        };
        let (value, consumed) = composite.construct(cx.binder, args, at)?;
        if consumed > 0 {
            *(self.get_mut)(target) = Some(value);
        } else {
            cx.require_value()?;
        }
        Ok(consumed)
    }

    fn bind_text(
        &self,
        cx: &SlotContext<'_>,
        target: &mut T,
        text: &str,
        _: &Regex,
        _: &[&str],
        _: usize,
    ) -> BindResult<usize> {
        let mut value = cx.parse::<V>(text)?;
        self.finish(cx, &mut value)?;
        *(self.get_mut)(target) = Some(value);
        Ok(0)
    }

    fn apply_default(&self, cx: &SlotContext<'_>, target: &mut T, text: &str) -> BindResult<()> {
        let mut value = cx.parse::<V>(text)?;
        self.finish(cx, &mut value)?;
        *(self.get_mut)(target) = Some(value);
        Ok(())
    }
}

struct CollectionSlot<T, C: Repeated> {
    get: fn(&T) -> &C,
    get_mut: fn(&mut T) -> &mut C,
    composite: Option<Composite<C::Element>>,
}

impl<T, C: Repeated> CollectionSlot<T, C> {
    fn finish(&self, cx: &SlotContext<'_>, element: &mut C::Element) -> BindResult<()> {
        match &self.composite {
            Some(composite) => (composite.validate)(cx.binder, element),
            None => Ok(()),
        }
    }

    /// Parse one element, unless a parser produces the whole collection
    fn parse_first(&self, cx: &SlotContext<'_>, text: &str) -> BindResult<Result<C, C::Element>> {
        if cx.can_parse::<C>() {
            return Ok(Ok(cx.parse::<C>(text)?));
        }
        let mut element = cx.parse::<C::Element>(text)?;
        self.finish(cx, &mut element)?;
        Ok(Err(element))
    }
}

impl<T, C: Repeated> Slot<T> for CollectionSlot<T, C> {
    fn shape(&self) -> Shape {
        Shape::Collection(C::kind())
    }

    fn value_type(&self) -> TypeKey {
        TypeKey::of::<C::Element>()
    }

    fn nested(&self) -> Option<fn() -> Vec<FieldInfo>> {
        self.composite.as_ref().map(|composite| composite.describe)
    }

    fn is_empty(&self, target: &T) -> bool {
        Repeated::is_empty((self.get)(target))
    }

    fn bind_flag(
        &self,
        cx: &SlotContext<'_>,
        target: &mut T,
        args: &[&str],
        at: usize,
    ) -> BindResult<usize> {
        let Some(composite) = &self.composite else {
            return Err(cx.missing_value());
        };
        let signature = cx.descriptor.signature();
        let mut collection = C::empty();
        let mut cursor = at;
        loop {
            let (element, consumed) = composite.construct(cx.binder, args, cursor)?;
            if consumed == 0 {
                break;
            }
            collection.add(element);
            cursor += consumed;
            if args.get(cursor + 1).map(|arg| arg.trim()) == Some(signature.as_str()) {
                cursor += 1;
            } else {
                break;
            }
        }
        if collection.is_empty() {
            cx.require_value()?;
        }
        tracing::trace!(
            option = %signature,
            elements = collection.len(),
            "collected composite elements"
        );
        *(self.get_mut)(target) = collection;
        Ok(cursor - at)
    }

    fn bind_text(
        &self,
        cx: &SlotContext<'_>,
        target: &mut T,
        text: &str,
        pattern: &Regex,
        args: &[&str],
        at: usize,
    ) -> BindResult<usize> {
        let first = match self.parse_first(cx, text)? {
            Ok(whole) => {
                *(self.get_mut)(target) = whole;
                return Ok(0);
            }
            Err(element) => element,
        };
        let mut collection = C::empty();
        collection.add(first);
        let mut consumed = 0;
        for arg in &args[at + 1..] {
            let Some(value) = pattern.captures(arg).and_then(|caps| caps.get(1)) else {
                break;
            };
            let mut element = cx.parse::<C::Element>(value.as_str())?;
            self.finish(cx, &mut element)?;
            collection.add(element);
            consumed += 1;
        }
        *(self.get_mut)(target) = collection;
        Ok(consumed)
    }

    fn apply_default(&self, cx: &SlotContext<'_>, target: &mut T, text: &str) -> BindResult<()> {
        let collection = match self.parse_first(cx, text)? {
            Ok(whole) => whole,
            Err(element) => {
                let mut collection = C::empty();
                collection.add(element);
                collection
            }
        };
        *(self.get_mut)(target) = collection;
        Ok(())
    }
}

/// Field shapes reported by the derive as never bindable
enum RejectedSlot {
    Invalid(String),
    Unsupported(String),
}

impl RejectedSlot {
    fn error(&self, descriptor: &OptionDescriptor, owner: &'static str) -> BindError {
        match self {
            RejectedSlot::Invalid(reason) => BindError::InvalidDescriptor {
                option: descriptor.signature(),
                owner,
                reason: reason.clone(),
            },
            RejectedSlot::Unsupported(type_name) => BindError::UnsupportedCollection {
                option: descriptor.signature(),
                owner,
                type_name: type_name.clone(),
            },
        }
    }
}

impl<T> Slot<T> for RejectedSlot {
    fn shape(&self) -> Shape {
        match self {
            RejectedSlot::Invalid(_) => Shape::Single,
            RejectedSlot::Unsupported(_) => Shape::Collection(CollectionKind::Sequence),
        }
    }

    fn value_type(&self) -> TypeKey {
        TypeKey::of::<()>()
    }

    fn check(&self, descriptor: &OptionDescriptor, owner: &'static str) -> BindResult<()> {
        Err(self.error(descriptor, owner))
    }

    fn is_empty(&self, _: &T) -> bool {
        false
    }

    fn bind_flag(&self, cx: &SlotContext<'_>, _: &mut T, _: &[&str], _: usize) -> BindResult<usize> {
        Err(self.error(cx.descriptor, cx.owner))
    }

    fn bind_text(
        &self,
        cx: &SlotContext<'_>,
        _: &mut T,
        _: &str,
        _: &Regex,
        _: &[&str],
        _: usize,
    ) -> BindResult<usize> {
        Err(self.error(cx.descriptor, cx.owner))
    }

    fn apply_default(&self, cx: &SlotContext<'_>, _: &mut T, _: &str) -> BindResult<()> {
        Err(self.error(cx.descriptor, cx.owner))
    }
}

#[cfg(test)]
#[path = "field/field_tests.rs"]
mod field_tests;
