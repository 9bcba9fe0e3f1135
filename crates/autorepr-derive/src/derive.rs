use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::attrs;
use crate::runtime_path::resolve_runtime_crate;

/// Expand `#[derive(Augmented)]`.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = attrs::parse_container_attrs(&input.attrs)?;
    let cache_field = attrs::locate_cache_field(input)?;
    let runtime = resolve_runtime_crate()?;

    let name = &input.ident;
    let name_str = name.to_string();
    let cache_ident = cache_field
        .ident
        .as_ref()
        .expect("named fields checked by locate_cache_field");
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // With an override in place the cache is still captured and stored, but
    // render never reads it.
    let render_override = container.render_with.map(|path| {
        quote! {
            fn render(&self) -> ::std::string::String {
                #path(self)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics #runtime::Augmented for #name #ty_generics #where_clause {
            fn repr_cache(&self) -> &#runtime::ReprCache {
                &self.#cache_ident
            }

            fn type_name() -> &'static str {
                #name_str
            }

            #render_override
        }

        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&#runtime::Augmented::render(self))
            }
        }

        impl #impl_generics #runtime::Repr for #name #ty_generics #where_clause {
            fn repr(&self, out: &mut ::std::string::String) {
                out.push_str(&#runtime::Augmented::render(self));
            }
        }
    })
}
