//! Recursive token matcher
//!
//! Scans tokens from a cursor, binding each to the first pending option of
//! the target type that recognizes it. A bound option leaves the pending
//! list, so every option binds at most once per object and the scan ends
//! after at most one pass over the options.

use crate::{BindError, BindResult, Binder, OptionField, Options};
use regex::Regex;
use tracing::{debug, trace};

/// An option still waiting for its token, with its precompiled delimiter pattern
struct Pending<T> {
    field: OptionField<T>,
    signature: String,
    pattern: Regex,
}

enum Matched {
    Exact,
    Delimited(String),
}

impl<T> Pending<T> {
    fn matches(&self, token: &str) -> Option<Matched> {
        if token.trim() == self.signature {
            return Some(Matched::Exact);
        }
        self.pattern
            .captures(token)
            .and_then(|caps| caps.get(1))
            .map(|value| Matched::Delimited(value.as_str().to_string()))
    }
}

/// Bind tokens from `start` onto `target`, returning how many were consumed
///
/// Stops at the first token no pending option recognizes; that token belongs
/// to an enclosing scope or to nobody.
pub(crate) fn bind_object<T: Options>(
    binder: &Binder,
    target: &mut T,
    args: &[&str],
    start: usize,
) -> BindResult<usize> {
    binder.schema::<T>()?;
    let owner = std::any::type_name::<T>();

    let mut pending = T::option_fields()
        .into_iter()
        .map(|field| {
            let signature = field.descriptor().signature();
            let pattern =
                field
                    .descriptor()
                    .delimiter_pattern()
                    .map_err(|e| BindError::InvalidDescriptor {
                        option: signature.clone(),
                        owner,
                        reason: format!("delimiter pattern does not compile: {e}"),
                    })?;
            Ok(Pending {
                field,
                signature,
                pattern,
            })
        })
        .collect::<BindResult<Vec<_>>>()?;

    let mut cursor = start;
    while let Some(token) = args.get(cursor) {
        let Some((index, matched)) = pending
            .iter()
            .enumerate()
            .find_map(|(index, candidate)| candidate.matches(token).map(|m| (index, m)))
        else {
            trace!(token = %token, owner, "no option matches, leaving scope");
            break;
        };

        let candidate = pending.remove(index);
        let extra = match matched {
            Matched::Exact => candidate.field.bind_flag(binder, target, args, cursor)?,
            Matched::Delimited(text) => candidate.field.bind_text(
                binder,
                target,
                &text,
                &candidate.pattern,
                args,
                cursor,
            )?,
        };
        debug!(
            option = %candidate.signature,
            owner,
            consumed = extra + 1,
            "bound option"
        );
        cursor += extra + 1;
    }

    Ok(cursor - start)
}
