use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, Lit, Meta, Path, Type};

/// Parsed `#[augmented(...)]` container attributes.
#[derive(Default)]
pub struct ContainerAttrs {
    pub render_with: Option<Path>,
}

pub fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("augmented") {
            continue;
        }
        for meta in parse_meta_list(attr)? {
            match meta {
                Meta::NameValue(meta) if meta.path.is_ident("render_with") => {
                    if out.render_with.is_some() {
                        return Err(syn::Error::new_spanned(
                            meta,
                            "duplicate render_with; hint: give at most one rendering override",
                        ));
                    }
                    let path_str = parse_string_expr(&meta.value, meta.span())?;
                    out.render_with = Some(syn::parse_str::<Path>(&path_str).map_err(|_| {
                        syn::Error::new(
                            meta.value.span(),
                            "render_with must name a function; hint: use render_with = \"path::to::fn\"",
                        )
                    })?);
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unsupported #[augmented(...)] attribute; hint: the only supported key is render_with = \"path\"",
                    ));
                }
            }
        }
    }

    Ok(out)
}

/// Locate the struct's representation cache field: a `#[repr_cache]` marker
/// wins, otherwise the first field whose type is `ReprCache`.
pub fn locate_cache_field(input: &DeriveInput) -> syn::Result<&Field> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "Augmented does not support enums; hint: use a named-field struct",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "Augmented does not support unions; hint: use a named-field struct",
            ));
        }
    };

    let fields = match &data.fields {
        Fields::Named(fields) => &fields.named,
        Fields::Unnamed(_) | Fields::Unit => {
            return Err(syn::Error::new_spanned(
                input,
                "Augmented requires named fields; hint: use a named-field struct with a ReprCache field",
            ));
        }
    };

    let mut marked = fields
        .iter()
        .filter(|f| f.attrs.iter().any(|a| a.path().is_ident("repr_cache")));
    if let Some(field) = marked.next() {
        if let Some(extra) = marked.next() {
            return Err(syn::Error::new_spanned(
                extra,
                "multiple #[repr_cache] fields; hint: an instance owns exactly one cache",
            ));
        }
        return Ok(field);
    }

    fields
        .iter()
        .find(|f| type_ident(&f.ty).is_some_and(|ident| ident == "ReprCache"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "no representation cache field found; hint: add a field of type ReprCache (primed by #[augment] constructors)",
            )
        })
}

pub fn type_ident(ty: &Type) -> Option<&syn::Ident> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.segments.last().map(|s| &s.ident),
        _ => None,
    }
}

pub fn parse_meta_list(attr: &Attribute) -> syn::Result<Vec<Meta>> {
    let metas = attr
        .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)?;
    Ok(metas.into_iter().collect())
}

pub fn parse_string_expr(expr: &Expr, span: Span) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) => Ok(value.value()),
        _ => Err(syn::Error::new(
            span,
            "expected string literal; hint: wrap the value in quotes",
        )),
    }
}
