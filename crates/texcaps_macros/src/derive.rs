use proc_macro2::*;
use quote::quote;
use syn::*;

fn parse_enum(item: TokenStream) -> core::result::Result<(Ident, DataEnum), TokenStream> {
    let input_parsed = match syn::parse2::<DeriveInput>(item) {
        Ok(derived_input) => derived_input,
        Err(err) => return Err(err.to_compile_error()),
    };

    match input_parsed.data {
        Data::Enum(body) => Ok((input_parsed.ident, body)),
        _ => Err(quote!( compile_error!("Not an enum"); )),
    }
}

pub fn enum_count(item: TokenStream) -> TokenStream {
    let (ident, body_data) = match parse_enum(item) {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let count = body_data.variants.len();

    quote!{
        impl texcaps_base::EnumCountT for #ident {
            const COUNT: usize = #count;
        }
    }
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
    let (ident, body_data) = match parse_enum(item) {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let mut variants = Vec::with_capacity(body_data.variants.len());
    let mut indices = Vec::with_capacity(body_data.variants.len());
    let mut next_idx = 0usize;
    for variant in body_data.variants {
        let idx = match variant.discriminant {
            Some((_, Expr::Lit(ExprLit { lit: Lit::Int(int), .. }))) => match int.base10_parse::<usize>() {
                Ok(int) => int,
                Err(err) => return err.to_compile_error(),
            },
            Some(_) => return quote!(compile_error!("Only integer literal discriminants are supported by EnumFromIndex")),
            None => next_idx,
        };

        variants.push(variant.ident);
        indices.push(idx);
        next_idx = idx + 1;
    }

    quote!{
        impl texcaps_base::EnumFromIndexT for #ident {
            fn from_idx(idx: usize) -> Option<Self> {
                match idx {
                    #(#indices => Some(Self::#variants),)*
                    _ => None,
                }
            }
        }
    }
}

pub fn enum_display(item: TokenStream) -> TokenStream {
    let (ident, body_data) = match parse_enum(item) {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let mut members = Vec::with_capacity(body_data.variants.len());
    let mut names = Vec::with_capacity(body_data.variants.len());

    for variant in &body_data.variants {
        members.push(variant.ident.clone());

        let display_attr = variant.attrs.iter()
            .find(|attr| attr.path().is_ident("display"));
        let name = match display_attr {
            Some(attr) => match attr.parse_args::<LitStr>() {
                Ok(lit) => lit.value(),
                Err(err) => return err.to_compile_error(),
            },
            // Leading underscores allow names starting with a digit, e.g. `_8_8`
            None => variant.ident.to_string().trim_start_matches('_').to_string(),
        };
        names.push(name);
    }

    quote!{
        impl core::fmt::Display for #ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    #(#ident::#members => f.pad(#names),)*
                }
            }
        }
    }
}
