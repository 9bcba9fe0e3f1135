use proc_macro2::Span;
use proc_macro_crate::{FoundCrate, crate_name};
use syn::Path;

/// Resolve the path generated code uses to reach the autorepr runtime, so
/// the macros keep working when the crate is renamed in the consumer's
/// manifest. The runtime crate declares `extern crate self as autorepr`,
/// which makes the absolute path valid even when expanding inside autorepr's
/// own tests.
pub fn resolve_runtime_crate() -> syn::Result<Path> {
    match crate_name("autorepr") {
        Ok(FoundCrate::Itself) => Ok(syn::parse_quote!(::autorepr)),
        Ok(FoundCrate::Name(name)) => {
            let ident = syn::Ident::new(&name.replace('-', "_"), Span::call_site());
            Ok(syn::parse_quote!(::#ident))
        }
        Err(_) => Err(syn::Error::new(
            Span::call_site(),
            "could not resolve the autorepr runtime crate; expected a dependency on `autorepr`",
        )),
    }
}
