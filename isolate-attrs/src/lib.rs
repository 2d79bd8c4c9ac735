mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The contents of the report are customized with the `error` attribute:
/// ```
/// use isolate_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unexpected end of input",
///     labels = ["add an expression here"],
///     help = "an equation needs an expression on both sides of `=`",
/// )]
/// pub struct UnexpectedEof;
/// ```
///
/// | Tag       | Description                                                              |
/// | --------- | ------------------------------------------------------------------------ |
/// | `message` | The message displayed at the top of the report.                          |
/// | `labels`  | Iterable of label strings, one per span of the error, in span order.     |
/// | `help`    | Optional help text describing what the user can do to fix the error.     |
/// | `note`    | Optional note with extra context about the error.                        |
///
/// For structs with named fields, each expression is evaluated with the fields in scope. Tuple
/// structs are rejected.
///
/// [`ErrorKind`]: ../isolate_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl isolate_error::ErrorKind for #name {
            #target
        }
    }.into()
}
