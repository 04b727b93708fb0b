//! argbind-macros - Derive macro for argbind option types
//!
//! This crate provides:
//! - `#[derive(Options)]` - List a struct's fields as bindable options

use darling::{FromDeriveInput, FromField, ast::Data};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{DeriveInput, GenericArgument, PathArguments, Type, parse_macro_input};

/// Struct-level options; a `name` makes the struct an extension root
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(option), supports(struct_named, struct_unit))]
struct OptionsOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: Data<(), FieldOpts>,

    #[darling(default)]
    name: Option<String>,
    #[darling(default)]
    prefix: Option<String>,
    #[darling(default)]
    delimiter: Option<String>,
    #[darling(default)]
    description: Option<String>,
}

/// Per-field descriptor attributes
#[derive(Debug, FromField)]
#[darling(attributes(option))]
struct FieldOpts {
    ident: Option<syn::Ident>,
    ty: Type,

    /// Option name; defaults to the field name in kebab-case
    #[darling(default)]
    name: Option<String>,
    #[darling(default)]
    prefix: Option<String>,
    #[darling(default)]
    delimiter: Option<String>,
    #[darling(default)]
    required: bool,
    #[darling(default, rename = "default")]
    default_value: Option<String>,
    #[darling(default)]
    placeholder: Option<String>,
    #[darling(default)]
    description: Option<String>,

    /// The value (or element) type implements `Options` itself
    #[darling(default)]
    nested: bool,
    /// Treat a custom container type as a repeatable option
    #[darling(default)]
    collection: bool,
    /// Not an option
    #[darling(default)]
    skip: bool,
}

/// How a field binds, decided from its declared type
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldKind {
    Flag,
    Single,
    Nested,
    Collection,
    NestedCollection,
    Map,
    Unsupported(String),
}

/// Derive macro for option types
///
/// Every named field becomes an option unless marked `#[option(skip)]`.
/// Field types decide the binding: `bool` is a bare flag, `Option<T>` holds
/// one value, and `Vec`, `VecDeque`, `LinkedList`, `HashSet`, `BTreeSet` or
/// `BinaryHeap` repeat. Mark fields whose type has options of its own with
/// `nested`.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, Options)]
/// #[option(name = "Xnamespace", description = "Bind namespaces to prefixes")]
/// struct NamespaceConfig {
///     #[option(nested, required, description = "Namespace mapping")]
///     mapping: Vec<Mapping>,
/// }
///
/// #[derive(Default, Options)]
/// struct Mapping {
///     #[option(required)]
///     ns: Option<String>,
///     #[option(name = "prefix", placeholder = "prefix")]
///     ns_prefix: Option<String>,
/// }
/// ```
#[proc_macro_derive(Options, attributes(option))]
pub fn derive_options(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match OptionsOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    match expand(opts) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}

fn expand(opts: OptionsOpts) -> darling::Result<TokenStream2> {
    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let fields = match opts.data {
        Data::Struct(fields) => fields.fields,
        Data::Enum(_) => Vec::new(),
    };

    let mut errors = darling::Error::accumulator();
    let option_fields: Vec<TokenStream2> = fields
        .iter()
        .filter(|field| !field.skip)
        .filter_map(|field| errors.handle(field_tokens(field)))
        .collect();
    errors.finish()?;

    let root = match &opts.name {
        Some(root_name) => {
            let descriptor = descriptor_tokens(
                root_name,
                opts.prefix.as_deref(),
                opts.delimiter.as_deref(),
                false,
                None,
                None,
                opts.description.as_deref(),
            );
            quote! {
                fn root() -> ::std::option::Option<::argbind_core::OptionDescriptor> {
                    ::std::option::Option::Some(#descriptor)
                }
            }
        }
        None => TokenStream2::new(),
    };

    Ok(quote! {
        impl #impl_generics ::argbind_core::Options for #name #ty_generics #where_clause {
            fn option_fields() -> ::std::vec::Vec<::argbind_core::OptionField<Self>> {
                ::std::vec![#(#option_fields),*]
            }

            #root
        }
    })
}

fn field_tokens(field: &FieldOpts) -> darling::Result<TokenStream2> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| darling::Error::custom("option fields must be named").with_span(&field.ty))?;
    let option_name = field
        .name
        .clone()
        .unwrap_or_else(|| to_kebab_case(&ident.to_string()));
    let descriptor = descriptor_tokens(
        &option_name,
        field.prefix.as_deref(),
        field.delimiter.as_deref(),
        field.required,
        field.default_value.as_deref(),
        field.placeholder.as_deref(),
        field.description.as_deref(),
    );

    let kind = classify(&field.ty, field.nested, field.collection)
        .map_err(|message| darling::Error::custom(message).with_span(&field.ty))?;
    let field_type = quote!(::argbind_core::OptionField::<Self>);
    let tokens = match kind {
        FieldKind::Flag => quote! {
            #field_type::flag(#descriptor, |target| &mut target.#ident)
        },
        FieldKind::Single => quote! {
            #field_type::single(#descriptor, |target| &target.#ident, |target| &mut target.#ident)
        },
        FieldKind::Nested => quote! {
            #field_type::nested(#descriptor, |target| &target.#ident, |target| &mut target.#ident)
        },
        FieldKind::Collection => quote! {
            #field_type::collection(#descriptor, |target| &target.#ident, |target| &mut target.#ident)
        },
        FieldKind::NestedCollection => quote! {
            #field_type::nested_collection(
                #descriptor,
                |target| &target.#ident,
                |target| &mut target.#ident,
            )
        },
        FieldKind::Map => quote! {
            #field_type::invalid(#descriptor, "map-like fields cannot be options")
        },
        FieldKind::Unsupported(type_name) => quote! {
            #field_type::unsupported_collection(#descriptor, #type_name)
        },
    };
    Ok(tokens)
}

fn descriptor_tokens(
    name: &str,
    prefix: Option<&str>,
    delimiter: Option<&str>,
    required: bool,
    default_value: Option<&str>,
    placeholder: Option<&str>,
    description: Option<&str>,
) -> TokenStream2 {
    let mut tokens = quote!(::argbind_core::OptionDescriptor::new(#name));
    if let Some(prefix) = prefix {
        tokens.extend(quote!(.with_prefix(#prefix)));
    }
    if let Some(delimiter) = delimiter {
        tokens.extend(quote!(.with_delimiter(#delimiter)));
    }
    if required {
        tokens.extend(quote!(.with_required(true)));
    }
    if let Some(default_value) = default_value {
        tokens.extend(quote!(.with_default(#default_value)));
    }
    if let Some(placeholder) = placeholder {
        tokens.extend(quote!(.with_placeholder(#placeholder)));
    }
    if let Some(description) = description {
        tokens.extend(quote!(.with_description(#description)));
    }
    tokens
}

const SEQUENCES: &[&str] = &["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet", "BinaryHeap"];
const MAPS: &[&str] = &["HashMap", "BTreeMap", "IndexMap"];

/// Decide how a field binds from its declared type
fn classify(ty: &Type, nested: bool, force_collection: bool) -> Result<FieldKind, String> {
    match ty {
        Type::Array(_) | Type::Slice(_) => return Ok(FieldKind::Unsupported(type_text(ty))),
        Type::Reference(reference) if matches!(*reference.elem, Type::Slice(_)) => {
            return Ok(FieldKind::Unsupported(type_text(ty)));
        }
        Type::Group(group) => return classify(&group.elem, nested, force_collection),
        Type::Paren(paren) => return classify(&paren.elem, nested, force_collection),
        _ => {}
    }

    if force_collection {
        return Ok(if nested {
            FieldKind::NestedCollection
        } else {
            FieldKind::Collection
        });
    }

    let Type::Path(path) = ty else {
        return Err(unsupported_message(ty));
    };
    let Some(segment) = path.path.segments.last() else {
        return Err(unsupported_message(ty));
    };
    let last = segment.ident.to_string();

    if last == "bool" && path.path.segments.len() == 1 {
        if nested {
            return Err("a bool flag cannot be nested".to_string());
        }
        return Ok(FieldKind::Flag);
    }
    if last == "Option" {
        return Ok(if nested {
            FieldKind::Nested
        } else {
            FieldKind::Single
        });
    }
    if SEQUENCES.contains(&last.as_str()) {
        return Ok(if nested {
            FieldKind::NestedCollection
        } else {
            FieldKind::Collection
        });
    }
    if MAPS.contains(&last.as_str()) {
        return Ok(FieldKind::Map);
    }
    if last == "Box" && first_type_argument(segment).is_some_and(|arg| matches!(arg, Type::Slice(_))) {
        return Ok(FieldKind::Unsupported(type_text(ty)));
    }
    Err(unsupported_message(ty))
}

fn first_type_argument(segment: &syn::PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

fn type_text(ty: &Type) -> String {
    ty.to_token_stream().to_string()
}

fn unsupported_message(ty: &Type) -> String {
    format!(
        "option field type `{}` must be bool, Option<T> or a collection; \
         wrap single values in Option or mark custom containers with #[option(collection)]",
        type_text(ty)
    )
}

/// Convert a snake_case or PascalCase identifier to kebab-case
fn to_kebab_case(s: &str) -> String {
    let s = s.strip_prefix("r#").unwrap_or(s);
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c == '_' {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
        } else if c.is_uppercase() {
            if i > 0 && !result.ends_with('-') {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
