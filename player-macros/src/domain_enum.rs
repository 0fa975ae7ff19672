use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

/// #[domain_enum] 宏实现
/// - 合并派生：Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize
/// - 为每个变体追加 `#[serde(rename = "...")]`，名称与 `as_str` 一致
/// - 生成 `VARIANTS`、`as_str`、`Display`、`FromStr`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[domain_enum] does not accept arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as Item);
    let mut en = match input {
        Item::Enum(e) => e,
        other => {
            return syn::Error::new(other.span(), "#[domain_enum] only on enum")
                .to_compile_error()
                .into();
        }
    };

    if en.variants.is_empty() {
        return syn::Error::new(en.span(), "#[domain_enum] requires at least one variant")
            .to_compile_error()
            .into();
    }

    let mut idents = Vec::with_capacity(en.variants.len());
    let mut names = Vec::with_capacity(en.variants.len());
    for v in en.variants.iter_mut() {
        if !matches!(v.fields, syn::Fields::Unit) {
            return syn::Error::new(v.span(), "#[domain_enum] supports only unit variants")
                .to_compile_error()
                .into();
        }
        let name = screaming_snake(&v.ident.to_string());
        v.attrs.push(syn::parse_quote!(#[serde(rename = #name)]));
        idents.push(v.ident.clone());
        names.push(name);
    }

    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(Copy),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    apply_derives(&mut en.attrs, required);

    let ident = &en.ident;
    let kind = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = en.generics.split_for_impl();

    let out = quote! {
        #en

        impl #impl_generics #ident #ty_generics #where_clause {
            /// 全部成员（按声明顺序）
            pub const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            /// 成员的外部名称
            pub const fn as_str(&self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }
        }

        impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl #impl_generics ::std::str::FromStr for #ident #ty_generics #where_clause {
            type Err = ::player_domain::error::DomainError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    #(#names => ::std::result::Result::Ok(Self::#idents),)*
                    other => ::std::result::Result::Err(
                        ::player_domain::error::DomainError::UnknownVariant {
                            kind: #kind,
                            value: other.to_string(),
                        },
                    ),
                }
            }
        }
    };

    TokenStream::from(out)
}

// CamelCase -> SCREAMING_SNAKE_CASE
fn screaming_snake(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(ch.to_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::screaming_snake;

    #[test]
    fn screaming_snake_converts_camel_case() {
        assert_eq!(screaming_snake("Human"), "HUMAN");
        assert_eq!(screaming_snake("Nazgul"), "NAZGUL");
        assert_eq!(screaming_snake("DarkElf"), "DARK_ELF");
    }
}
