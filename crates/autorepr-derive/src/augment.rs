use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{
    FnArg, GenericArgument, ImplItem, ImplItemFn, Item, Pat, PathArguments, ReturnType, Type,
};

use crate::attrs::type_ident;
use crate::runtime_path::resolve_runtime_crate;

/// How a wrapped constructor hands back the instance.
enum ConstructorKind {
    /// `fn new(..) -> Self`
    Direct,
    /// `fn new(..) -> Result<Self, E>`; only the `Ok` value is primed.
    Fallible,
}

/// Expand `#[augment]` on an inherent impl block.
pub fn expand(item: Item) -> syn::Result<TokenStream> {
    let mut item_impl = match item {
        Item::Impl(item_impl) => item_impl,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[augment] must be applied to an impl block; hint: place it on `impl YourType { ... }`",
            ));
        }
    };

    if let Some((_, trait_path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new_spanned(
            trait_path,
            "#[augment] does not apply to trait impls; hint: put it on the inherent impl block holding the constructors",
        ));
    }

    let self_ident = type_ident(&item_impl.self_ty).cloned().ok_or_else(|| {
        syn::Error::new(
            item_impl.self_ty.span(),
            "#[augment] requires a plain path self type; hint: `impl YourType { ... }`",
        )
    })?;
    let type_name = self_ident.to_string();
    let runtime = resolve_runtime_crate()?;

    for item in &mut item_impl.items {
        if let ImplItem::Fn(func) = item {
            if let Some(kind) = constructor_kind(func, &self_ident) {
                wrap_constructor(func, kind, &type_name, &runtime)?;
            }
        }
    }

    Ok(quote!(#item_impl))
}

/// A constructor is an associated fn without a receiver returning `Self` or
/// `Result<Self, E>`. Everything else passes through untouched.
fn constructor_kind(func: &ImplItemFn, self_ident: &syn::Ident) -> Option<ConstructorKind> {
    if func.sig.receiver().is_some() {
        return None;
    }
    let ReturnType::Type(_, ty) = &func.sig.output else {
        return None;
    };

    if is_self_type(ty, self_ident) {
        return Some(ConstructorKind::Direct);
    }
    if let Some(ok_ty) = result_ok_type(ty) {
        if is_self_type(ok_ty, self_ident) {
            return Some(ConstructorKind::Fallible);
        }
    }
    None
}

fn is_self_type(ty: &Type, self_ident: &syn::Ident) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "Self" || seg.ident == *self_ident),
        _ => false,
    }
}

fn result_ok_type(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(ok_ty)) => Some(ok_ty),
        _ => None,
    }
}

/// Rewrite a constructor so the raw arguments are rendered before the
/// original body runs and the result is primed onto the instance. The body
/// moves into a closure so an early `return` cannot skip the priming step.
fn wrap_constructor(
    func: &mut ImplItemFn,
    kind: ConstructorKind,
    type_name: &str,
    runtime: &syn::Path,
) -> syn::Result<()> {
    if let Some(constness) = &func.sig.constness {
        return Err(syn::Error::new(
            constness.span(),
            "#[augment] cannot wrap const constructors; hint: drop const or move the fn out of the augmented impl block",
        ));
    }
    if let Some(asyncness) = &func.sig.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "#[augment] cannot wrap async constructors; hint: build the instance in a synchronous constructor",
        ));
    }

    let mut capture_stmts = Vec::new();
    let mut seen_named = false;
    for input in &mut func.sig.inputs {
        let FnArg::Typed(param) = input else { continue };

        let mut named = false;
        param.attrs.retain(|attr| {
            if attr.path().is_ident("named") {
                named = true;
                false
            } else {
                true
            }
        });

        let ident = match &*param.pat {
            Pat::Ident(pat_ident) => pat_ident.ident.clone(),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "constructor parameters must be plain identifiers; hint: destructure inside the body",
                ));
            }
        };

        if named {
            seen_named = true;
            let name = ident.to_string();
            capture_stmts.push(quote! { __autorepr_call.named(#name, &#ident); });
        } else {
            if seen_named {
                return Err(syn::Error::new(
                    ident.span(),
                    "positional parameter after a #[named] parameter; hint: move #[named] parameters to the end of the signature",
                ));
            }
            capture_stmts.push(quote! { __autorepr_call.positional(&#ident); });
        }
    }

    let capture = if capture_stmts.is_empty() {
        quote! {
            let __autorepr_repr = #runtime::CallCapture::new(#type_name).finish();
        }
    } else {
        quote! {
            let __autorepr_repr = {
                let mut __autorepr_call = #runtime::CallCapture::new(#type_name);
                #(#capture_stmts)*
                __autorepr_call.finish()
            };
        }
    };

    let body = &func.block;
    let wrapped = match kind {
        ConstructorKind::Direct => quote! {{
            #capture
            let __autorepr_instance = (move || #body)();
            let _ = #runtime::Augmented::repr_cache(&__autorepr_instance).prime(__autorepr_repr);
            __autorepr_instance
        }},
        ConstructorKind::Fallible => quote! {{
            #capture
            match (move || #body)() {
                ::std::result::Result::Ok(__autorepr_instance) => {
                    let _ = #runtime::Augmented::repr_cache(&__autorepr_instance).prime(__autorepr_repr);
                    ::std::result::Result::Ok(__autorepr_instance)
                }
                ::std::result::Result::Err(__autorepr_error) => {
                    ::std::result::Result::Err(__autorepr_error)
                }
            }
        }},
    };

    func.block = syn::parse2(wrapped)?;
    Ok(())
}
