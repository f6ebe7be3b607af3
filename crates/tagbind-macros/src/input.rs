//! Struct shape extracted from a `#[derive(Record)]` input.

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr};

/// A struct deriving `Record`.
pub struct RecordInput {
    pub ident: Ident,
    pub generics: Generics,
    pub fields: Vec<FieldInput>,
}

/// One named field and its optional tag string.
pub struct FieldInput {
    pub ident: Ident,
    /// Declared name without any raw-identifier prefix.
    pub name: String,
    pub tag: Option<LitStr>,
}

impl FieldInput {
    /// The raw tag string, empty when the field has no `#[tag]`.
    pub fn tag_value(&self) -> String {
        self.tag.as_ref().map(LitStr::value).unwrap_or_default()
    }

    /// Span to report tag problems against.
    pub fn tag_span(&self) -> Span {
        self.tag.as_ref().map_or_else(|| self.ident.span(), LitStr::span)
    }
}

impl RecordInput {
    pub fn from_derive(input: &DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new(
                input.ident.span(),
                "Record can only be derived for structs",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                input.ident.span(),
                "Record can only be derived for structs with named fields",
            ));
        };

        let mut fields = Vec::new();
        for field in &named.named {
            let Some(ident) = field.ident.clone() else {
                continue;
            };

            let mut tag: Option<LitStr> = None;
            for attr in field.attrs.iter().filter(|a| a.path().is_ident("tag")) {
                if tag.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        format!("duplicate #[tag] attribute on field '{}'", ident.unraw()),
                    ));
                }
                tag = Some(attr.parse_args::<LitStr>()?);
            }

            fields.push(FieldInput {
                name: ident.unraw().to_string(),
                ident,
                tag,
            });
        }

        Ok(RecordInput {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            fields,
        })
    }
}
