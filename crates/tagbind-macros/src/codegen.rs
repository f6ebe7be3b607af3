//! Code generation for `#[derive(Record)]`.
//!
//! Produces two impls for the deriving struct:
//! - `tagbind::Record`: the declared field table and indexed field access
//! - `tagbind::Slot`: kind `Struct`, zero when every field is zero, and a map
//!   of field values

use proc_macro2::TokenStream;
use quote::quote;

use crate::input::RecordInput;

/// Main code generation entry point.
pub fn codegen(input: &RecordInput) -> TokenStream {
    let record_impl = generate_record_impl(input);
    let slot_impl = generate_slot_impl(input);

    quote! {
        #record_impl
        #slot_impl
    }
}

fn generate_record_impl(input: &RecordInput) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let decls = input.fields.iter().map(|field| {
        let name = &field.name;
        let tag = field.tag_value();
        quote! { ::tagbind::FieldDecl::new(#name, #tag) }
    });

    let indices: Vec<usize> = (0..input.fields.len()).collect();
    let idents: Vec<_> = input.fields.iter().map(|field| &field.ident).collect();

    quote! {
        impl #impl_generics ::tagbind::Record for #ident #ty_generics #where_clause {
            fn declared_fields(&self) -> &'static [::tagbind::FieldDecl] {
                const FIELDS: &[::tagbind::FieldDecl] = &[#(#decls),*];
                FIELDS
            }

            fn field(&self, index: usize) -> ::std::option::Option<&dyn ::tagbind::Slot> {
                match index {
                    #(#indices => ::std::option::Option::Some(&self.#idents),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn field_mut(&mut self, index: usize) -> ::std::option::Option<&mut dyn ::tagbind::Slot> {
                match index {
                    #(#indices => ::std::option::Option::Some(&mut self.#idents),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    }
}

fn generate_slot_impl(input: &RecordInput) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let idents: Vec<_> = input.fields.iter().map(|field| &field.ident).collect();
    let names: Vec<&String> = input.fields.iter().map(|field| &field.name).collect();

    quote! {
        impl #impl_generics ::tagbind::Slot for #ident #ty_generics #where_clause {
            fn kind(&self) -> ::tagbind::Kind {
                ::tagbind::Kind::Struct
            }

            fn is_zero(&self) -> bool {
                true #(&& ::tagbind::Slot::is_zero(&self.#idents))*
            }

            fn value(&self) -> ::tagbind::Value {
                ::tagbind::Value::Map(::std::collections::BTreeMap::from([
                    #((::std::string::String::from(#names), ::tagbind::Slot::value(&self.#idents)),)*
                ]))
            }

            fn as_record(&self) -> ::std::option::Option<&dyn ::tagbind::Record> {
                ::std::option::Option::Some(self)
            }

            fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn ::tagbind::Record> {
                ::std::option::Option::Some(self)
            }
        }
    }
}
