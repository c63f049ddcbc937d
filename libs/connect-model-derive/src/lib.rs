use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type};

/// Derive macro for contact-center data records.
///
/// Every field of the annotated struct must be an `Option<T>`; absence is the
/// only validity signal a record carries. For each field the macro generates
/// an inherent getter, a `set_*` method and a consuming `with_*` builder
/// method. List fields (`Vec<E>`) get an appending `with_*`; mapping fields
/// (`BTreeMap<K, V>`) additionally get `add_*_entry`, `with_*_entry` and
/// `clear_*_entries`, where adding an existing key is rejected. Timestamp
/// fields (`DateTime<Utc>`) are truncated to milliseconds when set, the
/// precision they keep on the wire.
///
/// It also implements `connect_model::DataRecord` (shape name, wire field
/// names, presence, hash code), `Display` and `connect_model::value::FieldValue`
/// so the record can be nested inside other records.
///
/// The wire name of a field is the PascalCase form of its identifier, which
/// matches `#[serde(rename_all = "PascalCase")]`.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Default, PartialEq, DataRecord)]
/// pub struct CreateQueueRequest {
///     instance_id: Option<String>,
///     max_contacts: Option<i32>,
///     quick_connect_ids: Option<Vec<String>>,
///     tags: Option<BTreeMap<String, String>>,
/// }
///
/// let request = CreateQueueRequest::default()
///     .with_instance_id("inst-1")
///     .with_quick_connect_ids(["qc-1", "qc-2"])
///     .with_tags_entry("env", "prod")?;
/// ```
#[proc_macro_derive(DataRecord)]
pub fn derive_data_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// How the `T` of a field's `Option<T>` is exposed.
enum FieldKind<'a> {
    /// `String`, borrowed out as `&str`.
    Text,
    /// `i32`, `i64`, `bool`, `f64`, returned by value.
    Scalar(&'a Type),
    /// `Vec<E>`, appended to by `with_*`.
    List(&'a Type),
    /// `BTreeMap<K, V>` with per-entry insertion.
    Map {
        map: &'a Type,
        key: &'a Type,
        value: &'a Type,
    },
    /// `DateTime<Utc>`, truncated to the millisecond precision of the wire.
    Timestamp(&'a Type),
    /// Nested records, enums.
    Other(&'a Type),
}

struct RecordField<'a> {
    ident: &'a Ident,
    wire_name: String,
    kind: FieldKind<'a>,
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "DataRecord does not support generic structs",
        ));
    }

    let fields: Vec<&Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "DataRecord only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "DataRecord only supports structs",
            ))
        }
    };

    let fields = fields
        .into_iter()
        .map(record_field)
        .collect::<Result<Vec<_>, _>>()?;

    let shape = name.to_string();
    let field_count = fields.len();
    let idents: Vec<&Ident> = fields.iter().map(|f| f.ident).collect();
    let wire_names: Vec<&str> = fields.iter().map(|f| f.wire_name.as_str()).collect();
    let accessors: Vec<TokenStream2> = fields.iter().map(|f| accessor_tokens(&shape, f)).collect();

    Ok(quote! {
        impl #name {
            #(#accessors)*
        }

        impl connect_model::record::DataRecord for #name {
            const SHAPE: &'static str = #shape;

            fn field_names() -> &'static [&'static str] {
                &[#(#wire_names),*]
            }

            fn present_fields(&self) -> ::std::vec::Vec<&'static str> {
                let presence: [(&'static str, bool); #field_count] = [
                    #( (#wire_names, self.#idents.is_some()) ),*
                ];
                presence
                    .into_iter()
                    .filter_map(|(name, present)| present.then_some(name))
                    .collect()
            }

            fn hash_code(&self) -> i32 {
                connect_model::record::RecordHasher::new()
                    #( .field(self.#idents.as_ref()) )*
                    .finish()
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut record = connect_model::record::RecordFormatter::new(f);
                #( record.field(#wire_names, self.#idents.as_ref()); )*
                record.finish()
            }
        }

        impl connect_model::value::FieldValue for #name {
            fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }

            fn value_hash(&self) -> i32 {
                <Self as connect_model::record::DataRecord>::hash_code(self)
            }
        }
    })
}

fn record_field(field: &Field) -> Result<RecordField<'_>, syn::Error> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;

    let inner = option_inner(&field.ty).ok_or_else(|| {
        syn::Error::new_spanned(&field.ty, "DataRecord fields must be Option<T>")
    })?;

    let kind = match type_segment(inner) {
        Some((name, _)) if name == "String" => FieldKind::Text,
        Some((name, _)) if matches!(name.as_str(), "i32" | "i64" | "bool" | "f64") => {
            FieldKind::Scalar(inner)
        }
        Some((name, _)) if name == "DateTime" => FieldKind::Timestamp(inner),
        Some((name, args)) if name == "Vec" && args.len() == 1 => FieldKind::List(args[0]),
        Some((name, args)) if name == "BTreeMap" && args.len() == 2 => FieldKind::Map {
            map: inner,
            key: args[0],
            value: args[1],
        },
        _ => FieldKind::Other(inner),
    };

    Ok(RecordField {
        ident,
        wire_name: pascal_case(&ident.unraw().to_string()),
        kind,
    })
}

fn accessor_tokens(shape: &str, field: &RecordField<'_>) -> TokenStream2 {
    let ident = field.ident;
    let base = ident.unraw();
    let wire = field.wire_name.as_str();
    let setter = format_ident!("set_{}", base);
    let with = format_ident!("with_{}", base);

    let get_doc = format!("Returns `{wire}`, or `None` when it is absent.");
    let set_doc = format!("Overwrites `{wire}`; `None` clears it.");
    let with_doc = format!("Sets `{wire}` and returns the record for chaining.");

    match &field.kind {
        FieldKind::Text => quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<&str> {
                self.#ident.as_deref()
            }

            #[doc = #set_doc]
            pub fn #setter(&mut self, #ident: ::std::option::Option<::std::string::String>) {
                self.#ident = #ident;
            }

            #[doc = #with_doc]
            pub fn #with(mut self, #ident: impl ::std::convert::Into<::std::string::String>) -> Self {
                self.#ident = ::std::option::Option::Some(#ident.into());
                self
            }
        },
        FieldKind::Scalar(ty) => quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<#ty> {
                self.#ident
            }

            #[doc = #set_doc]
            pub fn #setter(&mut self, #ident: ::std::option::Option<#ty>) {
                self.#ident = #ident;
            }

            #[doc = #with_doc]
            pub fn #with(mut self, #ident: impl ::std::convert::Into<#ty>) -> Self {
                self.#ident = ::std::option::Option::Some(#ident.into());
                self
            }
        },
        FieldKind::Timestamp(ty) => quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<&#ty> {
                self.#ident.as_ref()
            }

            #[doc = #set_doc]
            pub fn #setter(&mut self, #ident: ::std::option::Option<#ty>) {
                self.#ident = #ident.map(connect_model::value::wire_timestamp);
            }

            #[doc = #with_doc]
            pub fn #with(mut self, #ident: impl ::std::convert::Into<#ty>) -> Self {
                self.#ident = ::std::option::Option::Some(connect_model::value::wire_timestamp(#ident.into()));
                self
            }
        },
        FieldKind::Other(ty) => quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<&#ty> {
                self.#ident.as_ref()
            }

            #[doc = #set_doc]
            pub fn #setter(&mut self, #ident: ::std::option::Option<#ty>) {
                self.#ident = #ident;
            }

            #[doc = #with_doc]
            pub fn #with(mut self, #ident: impl ::std::convert::Into<#ty>) -> Self {
                self.#ident = ::std::option::Option::Some(#ident.into());
                self
            }
        },
        FieldKind::List(elem) => {
            let append_doc = format!(
                "Appends to `{wire}`, creating the list when absent. Repeated calls accumulate."
            );
            quote! {
                #[doc = #get_doc]
                pub fn #ident(&self) -> ::std::option::Option<&[#elem]> {
                    self.#ident.as_deref()
                }

                #[doc = #set_doc]
                pub fn #setter(&mut self, #ident: ::std::option::Option<::std::vec::Vec<#elem>>) {
                    self.#ident = #ident;
                }

                #[doc = #append_doc]
                pub fn #with<I>(mut self, #ident: I) -> Self
                where
                    I: ::std::iter::IntoIterator,
                    I::Item: ::std::convert::Into<#elem>,
                {
                    self.#ident
                        .get_or_insert_with(::std::vec::Vec::new)
                        .extend(#ident.into_iter().map(::std::convert::Into::<#elem>::into));
                    self
                }
            }
        }
        FieldKind::Map { map, key, value } => {
            let add_entry = format_ident!("add_{}_entry", base);
            let with_entry = format_ident!("with_{}_entry", base);
            let clear_entries = format_ident!("clear_{}_entries", base);
            let add_doc = format!(
                "Inserts one `{wire}` entry. Fails with `ModelError::DuplicateKey` if the key is already present; the existing value is kept."
            );
            let with_entry_doc = format!(
                "Inserts one `{wire}` entry and returns the record for chaining. Fails with `ModelError::DuplicateKey` if the key is already present."
            );
            let clear_doc = format!("Resets `{wire}` to absent.");
            quote! {
                #[doc = #get_doc]
                pub fn #ident(&self) -> ::std::option::Option<&#map> {
                    self.#ident.as_ref()
                }

                #[doc = #set_doc]
                pub fn #setter(&mut self, #ident: ::std::option::Option<#map>) {
                    self.#ident = #ident;
                }

                #[doc = #with_doc]
                pub fn #with(mut self, #ident: impl ::std::convert::Into<#map>) -> Self {
                    self.#ident = ::std::option::Option::Some(#ident.into());
                    self
                }

                #[doc = #add_doc]
                pub fn #add_entry(
                    &mut self,
                    key: impl ::std::convert::Into<#key>,
                    value: impl ::std::convert::Into<#value>,
                ) -> ::std::result::Result<&mut Self, connect_model::ModelError> {
                    let entries = self.#ident.get_or_insert_with(::std::default::Default::default);
                    match entries.entry(key.into()) {
                        ::std::collections::btree_map::Entry::Occupied(entry) => {
                            return ::std::result::Result::Err(
                                connect_model::record::duplicate_key(#shape, #wire, entry.key()),
                            );
                        }
                        ::std::collections::btree_map::Entry::Vacant(entry) => {
                            entry.insert(value.into());
                        }
                    }
                    ::std::result::Result::Ok(self)
                }

                #[doc = #with_entry_doc]
                pub fn #with_entry(
                    mut self,
                    key: impl ::std::convert::Into<#key>,
                    value: impl ::std::convert::Into<#value>,
                ) -> ::std::result::Result<Self, connect_model::ModelError> {
                    self.#add_entry(key, value)?;
                    ::std::result::Result::Ok(self)
                }

                #[doc = #clear_doc]
                pub fn #clear_entries(&mut self) -> &mut Self {
                    self.#ident = ::std::option::Option::None;
                    self
                }
            }
        }
    }
}

/// `T` of an `Option<T>` field type.
fn option_inner(ty: &Type) -> Option<&Type> {
    match type_segment(ty) {
        Some((name, args)) if name == "Option" && args.len() == 1 => Some(args[0]),
        _ => None,
    }
}

/// Last path segment of a type with its type arguments, e.g. `Vec` + `[String]`.
fn type_segment(ty: &Type) -> Option<(String, Vec<&Type>)> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    let args = match &segment.arguments {
        PathArguments::AngleBracketed(bracketed) => bracketed
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Some((segment.ident.to_string(), args))
}

/// `contact_id` -> `ContactId`.
fn pascal_case(ident: &str) -> String {
    ident
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
