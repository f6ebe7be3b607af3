use proc_macro::TokenStream;

mod codegen;
mod input;
mod validate;

/// Derive `tagbind::Record` and `tagbind::Slot` for a struct with named fields.
///
/// Each field may carry one `#[tag(...)]` attribute holding a tag string in
/// the `name:"value"` format. Tag strings are checked at compile time:
/// unterminated values, empty rule names and misspelled reserved namespaces
/// are reported against the attribute.
///
/// Every field type must implement `tagbind::Slot`; nested structs derive
/// `Record` themselves.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, Record)]
/// struct Config {
///     #[tag(r#"env:"PORT" default:"8080" rules:"required""#)]
///     port: u16,
///     #[tag(r#"env:"DB""#)]
///     database: Database,
/// }
///
/// // Generated: impl tagbind::Record for Config { ... }
/// // Generated: impl tagbind::Slot for Config { ... }
/// ```
#[proc_macro_derive(Record, attributes(tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    let record = match input::RecordInput::from_derive(&input) {
        Ok(record) => record,
        Err(e) => return e.to_compile_error().into(),
    };

    if let Err(e) = validate::validate(&record) {
        return e.to_compile_error().into();
    }

    codegen::codegen(&record).into()
}
