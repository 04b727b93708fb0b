//! Default and required pass over a bound object

use crate::{BindError, BindResult, Binder, Options};
use tracing::debug;

/// Fill unset options from their defaults and reject missing required ones
///
/// Only empty fields are touched; composites that already hold a value were
/// validated when they were constructed.
pub(crate) fn apply_defaults<T: Options>(binder: &Binder, target: &mut T) -> BindResult<()> {
    binder.schema::<T>()?;
    let owner = std::any::type_name::<T>();

    for field in T::option_fields() {
        if !field.is_empty(target) {
            continue;
        }
        let descriptor = field.descriptor();
        if let Some(default) = &descriptor.default_value {
            debug!(option = %descriptor.signature(), owner, default = %default, "applying default");
            field.apply_default(binder, target, default)?;
        } else if descriptor.required {
            return Err(BindError::RequiredOptionMissing {
                option: descriptor.signature(),
                owner,
            });
        }
    }
    Ok(())
}
