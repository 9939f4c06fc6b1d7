use darling::util::Ignored;
use darling::{ast, Error, FromDeriveInput, FromVariant};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{parse_quote, Token};

const INTEGER_REPRS: &[&str] = &["u8", "i8", "u16", "i16", "u32", "i32", "u64", "i64"];

#[derive(FromDeriveInput)]
#[darling(attributes(endload), forward_attrs(repr), supports(enum_unit))]
pub struct EnumReceiver {
    ident: syn::Ident,
    attrs: Vec<syn::Attribute>,
    data: ast::Data<VariantReceiver, Ignored>,

    #[darling(default)]
    crate_path: Option<syn::Path>,
}

#[derive(FromVariant)]
#[darling(attributes(endload))]
struct VariantReceiver {
    ident: syn::Ident,
}

pub struct EnumData {
    ident: syn::Ident,
    crate_path: syn::Path,
    repr: syn::Ident,
    variants: Vec<syn::Ident>,
}

impl EnumReceiver {
    pub fn validate(&self) -> Result<EnumData, Error> {
        let mut errors = Vec::new();

        let crate_path = self
            .crate_path
            .clone()
            .unwrap_or_else(|| parse_quote!(endload));

        let mut repr = None;
        for attr in self.attrs.iter().filter(|attr| attr.path.is_ident("repr")) {
            let hints =
                match attr.parse_args_with(Punctuated::<syn::Ident, Token![,]>::parse_terminated) {
                    Ok(hints) => hints,
                    Err(error) => {
                        errors.push(crate::from_syn_error(error));
                        continue;
                    }
                };
            for hint in hints {
                if INTEGER_REPRS.contains(&hint.to_string().as_str()) {
                    repr = Some(hint);
                }
            }
        }
        if repr.is_none() {
            errors.push(
                Error::custom(format!(
                    "`Enumerated` requires an integer repr, one of `#[repr({})]`",
                    INTEGER_REPRS.join(" | ")
                ))
                .with_span(&self.ident),
            );
        }

        let variants = match &self.data {
            ast::Data::Enum(variants) => variants
                .iter()
                .map(|variant| variant.ident.clone())
                .collect(),
            ast::Data::Struct(..) => {
                errors.push(Error::custom("`Enumerated` can only be derived for enums"));
                Vec::new()
            }
        };

        match repr {
            Some(repr) if errors.is_empty() => Ok(EnumData {
                ident: self.ident.clone(),
                crate_path,
                repr,
                variants,
            }),
            _ => Err(Error::multiple(errors)),
        }
    }
}

impl EnumData {
    pub fn enumerated_impl(&self) -> TokenStream {
        let Self {
            ident,
            crate_path,
            repr,
            variants,
        } = self;
        let name = ident.to_string();
        let discriminant: Vec<_> = variants
            .iter()
            .map(|variant| format_ident!("__ENDLOAD_{}", variant))
            .collect();

        quote! {
            impl #crate_path::Enumerated for #ident {
                type Repr = #repr;

                const NAME: &'static str = #name;

                fn into_repr(self) -> #repr {
                    self as #repr
                }

                #[allow(non_upper_case_globals)]
                fn from_repr(repr: #repr) -> Option<Self> {
                    #( const #discriminant: #repr = #ident::#variants as #repr; )*
                    match repr {
                        #( #discriminant => Some(Self::#variants), )*
                        _ => None,
                    }
                }
            }

            impl #crate_path::packed::Packed for #ident {
                fn load_packed<const N: usize, O: #crate_path::order::ByteOrder>(
                    bytes: &[u8],
                ) -> Result<Self, #crate_path::Error> {
                    #crate_path::enumerated::try_load_enum::<Self, N, O>(bytes)
                }

                fn store_packed<const N: usize, O: #crate_path::order::ByteOrder>(
                    self,
                    bytes: &mut [u8],
                ) {
                    #crate_path::enumerated::store_enum::<Self, N, O>(self, bytes)
                }
            }

            impl #crate_path::Encode<#crate_path::ctx::Order> for #ident {
                fn encode<W>(
                    &self,
                    order: #crate_path::ctx::Order,
                    writer: &mut W,
                ) -> Result<(), #crate_path::Error>
                where
                    W: #crate_path::export::io::Write,
                {
                    #crate_path::enumerated::encode(self, order, writer)
                }
            }

            impl #crate_path::Encode<()> for #ident {
                fn encode<W>(&self, _: (), writer: &mut W) -> Result<(), #crate_path::Error>
                where
                    W: #crate_path::export::io::Write,
                {
                    #crate_path::enumerated::encode(self, Default::default(), writer)
                }
            }

            impl #crate_path::Decode<#crate_path::ctx::Order> for #ident {
                fn decode<R>(
                    order: #crate_path::ctx::Order,
                    reader: &mut R,
                ) -> Result<Self, #crate_path::Error>
                where
                    R: #crate_path::export::io::Read,
                {
                    #crate_path::enumerated::decode(order, reader)
                }
            }

            impl #crate_path::Decode<()> for #ident {
                fn decode<R>(_: (), reader: &mut R) -> Result<Self, #crate_path::Error>
                where
                    R: #crate_path::export::io::Read,
                {
                    #crate_path::enumerated::decode(Default::default(), reader)
                }
            }
        }
    }
}
